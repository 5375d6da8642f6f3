//! Astronomical ephemeris adapter.
//!
//! Implements [`EphemerisPort`] with the `sunrise` crate: one calendar
//! date in, the day's civil dawn, sunrise, sunset, and civil dusk out,
//! expressed as fractional hours of the configured local day.

use chrono::{FixedOffset, NaiveDate, Timelike};
use sunrise::{Coordinates, DawnType, SolarDay, SolarEvent};

use crate::app::ports::{Date, EphemerisPort};
use crate::config::SystemConfig;
use crate::error::{Error, Result};
use crate::solar::events::SolarTimes;

/// Computes the day's solar schedule for a fixed observer position.
pub struct SolarEphemerisAdapter {
    coord: Coordinates,
    offset: FixedOffset,
}

impl SolarEphemerisAdapter {
    pub fn new(latitude: f64, longitude: f64, utc_offset_hours: i8) -> Result<Self> {
        let coord = Coordinates::new(latitude, longitude)
            .ok_or(Error::Config("observer coordinates out of range"))?;
        let offset = FixedOffset::east_opt(i32::from(utc_offset_hours) * 3600)
            .ok_or(Error::Config("UTC offset out of range"))?;
        Ok(Self { coord, offset })
    }

    pub fn from_config(config: &SystemConfig) -> Result<Self> {
        Self::new(config.latitude, config.longitude, config.dst_offset)
    }

    /// Event instant as fractional hours of the configured local day.
    fn local_hours(&self, day: SolarDay, event: SolarEvent) -> f64 {
        let local = day.event_time(event).with_timezone(&self.offset);
        f64::from(local.hour())
            + f64::from(local.minute()) / 60.0
            + f64::from(local.second()) / 3600.0
    }
}

impl EphemerisPort for SolarEphemerisAdapter {
    fn solar_times(&mut self, date: Date) -> SolarTimes {
        // An impossible calendar date can only come from a corrupt clock
        // read; fall back to the epoch rather than panic.
        let date = NaiveDate::from_ymd_opt(date.year, u32::from(date.month), u32::from(date.day))
            .unwrap_or_default();
        let day = SolarDay::new(self.coord, date);
        SolarTimes {
            civil_sunrise_h: self.local_hours(day, SolarEvent::Dawn(DawnType::Civil)),
            sunrise_h: self.local_hours(day, SolarEvent::Sunrise),
            sunset_h: self.local_hours(day, SolarEvent::Sunset),
            civil_sunset_h: self.local_hours(day, SolarEvent::Dusk(DawnType::Civil)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wroclaw_summer_times() -> SolarTimes {
        let mut eph = SolarEphemerisAdapter::from_config(&SystemConfig::default()).unwrap();
        eph.solar_times(Date {
            year: 2024,
            month: 6,
            day: 21,
        })
    }

    #[test]
    fn midsummer_day_is_ordered_and_long() {
        let t = wroclaw_summer_times();
        assert!(t.civil_sunrise_h < t.sunrise_h);
        assert!(t.sunrise_h < t.sunset_h);
        assert!(t.sunset_h < t.civil_sunset_h);
        // Wrocław midsummer: roughly 16.5 hours of daylight.
        assert!(t.sunset_h - t.sunrise_h > 16.0);
    }

    #[test]
    fn midsummer_sunrise_is_early_local_morning() {
        // UTC+2: sunrise around 04:40 local.
        let t = wroclaw_summer_times();
        assert!(t.sunrise_h > 3.5 && t.sunrise_h < 6.0, "{}", t.sunrise_h);
    }

    #[test]
    fn invalid_coordinates_are_rejected() {
        assert!(SolarEphemerisAdapter::new(95.0, 17.0, 2).is_err());
        assert!(SolarEphemerisAdapter::new(51.0, 200.0, 2).is_err());
    }

    #[test]
    fn winter_day_is_short() {
        let mut eph = SolarEphemerisAdapter::from_config(&SystemConfig::default()).unwrap();
        let t = eph.solar_times(Date {
            year: 2024,
            month: 12,
            day: 21,
        });
        assert!(t.sunset_h - t.sunrise_h < 9.0);
    }
}
