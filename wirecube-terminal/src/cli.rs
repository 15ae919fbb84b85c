//! Command line flags and the run settings derived from them.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Default pause between frames in microseconds (about 90 fps)
pub const DEFAULT_FRAME_TIME_US: u64 = 11111;

/// Frame limit applied by profiling builds when `--frames` is absent
pub const PROFILE_FRAME_LIMIT: u64 = 2048;

/// Delay served for every unrecognized option
pub const UNKNOWN_OPTION_PENALTY: Duration = Duration::from_secs(2);

/// Spin a wireframe cube in the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "wirecube", version)]
pub struct Cli {
    /// Pause between frames in microseconds
    #[arg(short = 'f', long = "fps", value_name = "MICROSECONDS", default_value_t = DEFAULT_FRAME_TIME_US)]
    pub frame_time_us: u64,

    /// Stop after this many frames
    #[arg(short = 'n', long = "frames", value_name = "N")]
    pub frames: Option<u64>,
}

/// How the animation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub frame_time: Duration,
    pub frame_limit: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_time: Duration::from_micros(DEFAULT_FRAME_TIME_US),
            frame_limit: default_frame_limit(),
        }
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            frame_time: Duration::from_micros(cli.frame_time_us),
            frame_limit: cli.frames.or_else(default_frame_limit),
        }
    }
}

fn default_frame_limit() -> Option<u64> {
    cfg!(feature = "profile").then_some(PROFILE_FRAME_LIMIT)
}

impl Cli {
    /// Parse `args`, tolerating unrecognized options.
    ///
    /// Each unknown option costs `penalty` of sleep and is then dropped before
    /// parsing resumes. Stray operands are dropped without a penalty. Help,
    /// version and every other error come back as the clap error for the
    /// caller to report.
    pub fn parse_lenient<I, T>(args: I, penalty: Duration) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        loop {
            let err = match Self::try_parse_from(&args) {
                Ok(cli) => return Ok(cli),
                Err(err) => err,
            };
            if err.kind() != ErrorKind::UnknownArgument {
                return Err(err);
            }
            let Some(ContextValue::String(unknown)) = err.get(ContextKind::InvalidArg) else {
                return Err(err);
            };
            let unknown = unknown.clone();
            if !remove_unknown(&mut args, &unknown) {
                return Err(err);
            }

            if unknown.starts_with('-') {
                warn!(option = %unknown, "unrecognized option, ignoring after {penalty:?}");
                thread::sleep(penalty);
            } else {
                debug!(operand = %unknown, "ignoring operand");
            }
        }
    }
}

/// Drop the argument clap rejected, skipping the program name.
///
/// A letter rejected inside a group of short flags (`-xf`) is cut out of the
/// group and the flags around it are kept. Returns `false` when nothing
/// matching `unknown` was found.
fn remove_unknown(args: &mut Vec<OsString>, unknown: &str) -> bool {
    let with_value = format!("{unknown}=");
    let whole = args.iter().skip(1).position(|arg| {
        arg.to_str()
            .is_some_and(|arg| arg == unknown || arg.starts_with(&with_value))
    });
    if let Some(i) = whole {
        args.remove(i + 1);
        return true;
    }

    let Some(letter) = short_flag(unknown) else {
        return false;
    };
    for i in 1..args.len() {
        let Some(text) = args[i].to_str() else {
            continue;
        };
        if text == "--" {
            break;
        }
        let Some(group) = text.strip_prefix('-').filter(|g| !g.starts_with('-')) else {
            continue;
        };
        let Some(at) = group.find(letter) else {
            continue;
        };

        let mut rest = group.to_owned();
        rest.remove(at);
        if rest.is_empty() {
            args.remove(i);
        } else {
            args[i] = format!("-{rest}").into();
        }
        return true;
    }
    false
}

/// The letter of a single short flag such as `-x`
fn short_flag(arg: &str) -> Option<char> {
    let mut chars = arg.strip_prefix('-')?.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '-' => Some(c),
        _ => None,
    }
}
