//! System clock adapter.
//!
//! Implements [`ClockPort`] on top of whatever wall clock the platform
//! offers.
//!
//! - **`target_os = "espidf"`** — reads `gettimeofday()` and converts via
//!   `localtime_r()`.  A timestamp before 2020 means the clock was never
//!   set (cold boot without NTP or a backup battery) and is reported as
//!   [`ClockError::NotRunning`].
//! - **`not(target_os = "espidf")`** — uses `chrono::Local` for host-side
//!   testing and simulation.

use crate::app::ports::{ClockPort, ClockReading, Date};
use crate::error::ClockError;

/// Wall-clock adapter for the current platform.
pub struct SystemClockAdapter;

impl Default for SystemClockAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClockAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl ClockPort for SystemClockAdapter {
    fn now(&mut self) -> Result<ClockReading, ClockError> {
        use core::ptr;

        let mut tv = esp_idf_svc::sys::timeval {
            tv_sec: 0,
            tv_usec: 0,
        };
        // SAFETY: gettimeofday only writes to the struct we hand it.
        if unsafe { esp_idf_svc::sys::gettimeofday(&mut tv, ptr::null_mut()) } != 0 {
            return Err(ClockError::ReadFailed);
        }

        // Reject obviously unset time (before 2020-01-01).
        const EPOCH_2020: i64 = 1_577_836_800;
        if tv.tv_sec < EPOCH_2020 {
            return Err(ClockError::NotRunning);
        }

        let secs = tv.tv_sec as esp_idf_svc::sys::time_t;
        let mut tm: esp_idf_svc::sys::tm = unsafe { core::mem::zeroed() };
        // SAFETY: localtime_r writes only to the tm struct we hand it.
        if unsafe { esp_idf_svc::sys::localtime_r(&secs, &mut tm) }.is_null() {
            return Err(ClockError::ReadFailed);
        }

        Ok(ClockReading {
            date: Date {
                year: tm.tm_year + 1900,
                month: (tm.tm_mon + 1) as u8,
                day: tm.tm_mday as u8,
            },
            hour: tm.tm_hour as u8,
            minute: tm.tm_min as u8,
            second: tm.tm_sec as u8,
        })
    }
}

#[cfg(not(target_os = "espidf"))]
impl ClockPort for SystemClockAdapter {
    fn now(&mut self) -> Result<ClockReading, ClockError> {
        use chrono::{Datelike, Timelike};

        let now = chrono::Local::now();
        Ok(ClockReading {
            date: Date {
                year: now.year(),
                month: now.month() as u8,
                day: now.day() as u8,
            },
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_clock_reads_a_plausible_time() {
        let mut clock = SystemClockAdapter::new();
        let reading = clock.now().unwrap();
        assert!(reading.date.year >= 2020);
        assert!((1..=12).contains(&reading.date.month));
        assert!((1..=31).contains(&reading.date.day));
        assert!(reading.hour < 24);
        assert!(reading.minute < 60);
    }
}
