use std::thread;
use std::time::Duration;

/// Pacing hook between algorithm steps. Purely for external visualization;
/// has no effect on ordering or correctness.
pub trait Delay {
    fn pause(&self);
}

pub struct NoDelay;

impl Delay for NoDelay {
    fn pause(&self) {}
}

pub struct SleepDelay(Duration);

impl SleepDelay {
    pub fn from_millis(ms: u64) -> Self {
        SleepDelay(Duration::from_millis(ms))
    }
}

impl Delay for SleepDelay {
    fn pause(&self) {
        thread::sleep(self.0);
    }
}

pub fn from_millis_option(ms: i64) -> Box<dyn Delay> {
    if ms > 0 {
        Box::new(SleepDelay::from_millis(ms as u64))
    } else {
        Box::new(NoDelay)
    }
}
