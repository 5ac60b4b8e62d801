//! Time sources.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current timestamp in seconds.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Wall-clock Unix time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // A clock set before 1970 reads as zero
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn new(now: u64) -> Self {
        Self { now }
    }

    pub fn set(&mut self, now: u64) {
        self.now = now;
    }

    /// Move forward by `seconds`, saturating at `u64::MAX`.
    pub fn advance(&mut self, seconds: u64) {
        self.now = self.now.saturating_add(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now
    }
}
