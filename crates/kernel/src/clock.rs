use std::time::Instant;

use starblaster_common::Millis;

/// Monotonic millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> Millis;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        self.start.elapsed().as_millis() as Millis
    }
}

/// Clock advanced explicitly by the host. Used for headless runs and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: Millis,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self { now: start }
    }

    pub fn advance(&mut self, ms: Millis) {
        self.now += ms;
    }

    /// Jump to `now`. Time never runs backwards; earlier values are ignored.
    pub fn set(&mut self, now: Millis) {
        self.now = self.now.max(now);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now
    }
}
