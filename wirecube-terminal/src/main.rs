/// wirecube - a rotating wireframe cube drawn with cursor escape codes
///
/// Usage: wirecube [-f MICROSECONDS] [-n FRAMES]
///   - Ctrl-C ends the animation cleanly

use anyhow::{Context, Result};
use std::io::{self, BufWriter};
use tracing_subscriber::EnvFilter;
use wirecube_terminal::cli::UNKNOWN_OPTION_PENALTY;
use wirecube_terminal::{probe, App, Cli, Settings, SleepPacer};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the frame on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse_lenient(std::env::args_os(), UNKNOWN_OPTION_PENALTY)
        .unwrap_or_else(|e| e.exit());
    let settings = Settings::from(cli);

    let viewport = probe::terminal_size().context("failed to read the terminal size")?;
    let pacer = SleepPacer::install().context("failed to install the interrupt handler")?;

    let stdout = BufWriter::new(io::stdout().lock());
    let mut app = App::new(viewport, settings, stdout, pacer);
    app.run().context("failed to draw to the terminal")?;

    Ok(())
}
