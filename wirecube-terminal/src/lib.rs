/// Terminal front end: probes the screen, then animates the cube with
/// cursor-addressed writes
use std::io::{self, Write};
use tracing::info;
use wirecube_core::{raster, Pipeline, Viewport, Wireframe};

pub mod cli;
pub mod error;
pub mod pacing;
pub mod probe;
pub mod renderer;

pub use cli::{Cli, Settings};
pub use error::ProbeError;
pub use pacing::{Pace, Pacer, SleepPacer};
pub use renderer::TerminalCanvas;

/// Why the animation loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The pacer reported an interrupt
    Interrupted,
    /// A bounded run reached its frame limit
    FrameLimit,
}

/// Outcome of [`App::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub reason: StopReason,
}

/// Frame driver: clear, transform, rasterize, flush, pace
pub struct App<W: Write, P: Pacer> {
    wireframe: Wireframe,
    pipeline: Pipeline,
    canvas: TerminalCanvas<W>,
    pacer: P,
    settings: Settings,
    viewport: Viewport,
    time: u64,
}

impl<W: Write, P: Pacer> App<W, P> {
    pub fn new(viewport: Viewport, settings: Settings, out: W, pacer: P) -> Self {
        Self {
            wireframe: Wireframe::cube(),
            pipeline: Pipeline::new(viewport),
            canvas: TerminalCanvas::new(out),
            pacer,
            settings,
            viewport,
            time: 0,
        }
    }

    pub fn run(&mut self) -> io::Result<RunSummary> {
        info!(
            rows = self.viewport.rows,
            columns = self.viewport.columns,
            frame_time = ?self.settings.frame_time,
            frame_limit = ?self.settings.frame_limit,
            "starting animation"
        );

        let result = self.main_loop();

        // Cleanup runs either way; a loop failure outranks a cleanup failure
        let cleanup = self.canvas.finish(self.viewport.rows);

        let summary = result?;
        cleanup?;
        info!(frames = summary.frames, reason = ?summary.reason, "animation stopped");
        Ok(summary)
    }

    fn main_loop(&mut self) -> io::Result<RunSummary> {
        let mut frames = 0;

        loop {
            if self.settings.frame_limit.is_some_and(|limit| frames >= limit) {
                return Ok(RunSummary {
                    frames,
                    reason: StopReason::FrameLimit,
                });
            }

            self.render()?;
            frames += 1;

            if self.pacer.pace(self.settings.frame_time) == Pace::Interrupted {
                return Ok(RunSummary {
                    frames,
                    reason: StopReason::Interrupted,
                });
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear()?;
        self.time += 1;

        let points = self.pipeline.advance(self.time, &self.wireframe.vertices);
        raster::draw(&self.wireframe.edges, points, &mut self.canvas);

        self.canvas.flush()
    }

    /// Frame tick of the most recently rendered frame
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn into_output(self) -> W {
        self.canvas.into_inner()
    }
}
