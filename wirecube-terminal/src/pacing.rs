/// Inter-frame waiting and the interrupt that ends the animation
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Outcome of waiting between two frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Continue,
    Interrupted,
}

/// Blocks between frames and reports when the loop should stop
pub trait Pacer {
    fn pace(&mut self, frame_time: Duration) -> Pace;
}

/// Sleeps for the full frame time, then checks an interrupt flag.
///
/// The flag is shared with a signal handler; see [`SleepPacer::install`].
#[derive(Debug, Clone, Default)]
pub struct SleepPacer {
    interrupted: Arc<AtomicBool>,
}

impl SleepPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pacer whose flag is raised by SIGINT, SIGTERM or SIGHUP.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let pacer = Self::new();
        let flag = pacer.interrupt_handle();
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;
        Ok(pacer)
    }

    /// Handle that stops the animation at the next pace when set
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

impl Pacer for SleepPacer {
    fn pace(&mut self, frame_time: Duration) -> Pace {
        if self.is_interrupted() {
            return Pace::Interrupted;
        }
        thread::sleep(frame_time);
        if self.is_interrupted() {
            Pace::Interrupted
        } else {
            Pace::Continue
        }
    }
}
