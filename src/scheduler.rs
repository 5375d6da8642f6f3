//! Tick gating for the single-threaded main loop.
//!
//! The main loop polls frequently but the lamp only refreshes every
//! [`SystemConfig::refresh_interval_ms`](crate::config::SystemConfig)
//! milliseconds.  [`RefreshGate`] compares monotonic uptime against the
//! last refresh and says whether this poll should do real work.

/// Decides whether a refresh is due, based on monotonic uptime.
#[derive(Debug)]
pub struct RefreshGate {
    interval_ms: u64,
    last_run_ms: Option<u64>,
}

impl RefreshGate {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_run_ms: None,
        }
    }

    /// Returns `true` when a refresh is due and records `now_ms` as the
    /// new reference point.  The very first call always fires so the lamp
    /// shows something immediately after boot.
    pub fn should_run(&mut self, now_ms: u64) -> bool {
        let due = match self.last_run_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        };
        if due {
            self.last_run_ms = Some(now_ms);
        }
        due
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}
