//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production).  A future display or MQTT
//! adapter would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | sun clock up");
            }
            AppEvent::SolarEventsComputed { date, events } => {
                info!(
                    "SOLAR | {:04}-{:02}-{:02} | civil_rise={} rise={} noon={} set={} civil_set={}",
                    date.year,
                    date.month,
                    date.day,
                    events.civil_sunrise.time,
                    events.sunrise.time,
                    events.noon.time,
                    events.sunset.time,
                    events.civil_sunset.time,
                );
            }
            AppEvent::DayPartChanged { from, to } => {
                info!("PHASE | {:?} -> {:?}", from, to);
            }
            AppEvent::ClockLost => {
                info!("CLOCK | read failed, coasting on last reading");
            }
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | part={:?} | minute={} | servo={}\u{00b0} | \
                     sun=#{:06X} | sky={}",
                    t.day_part,
                    t.minute_of_day,
                    t.servo_deg,
                    t.sun.packed(),
                    match t.sky {
                        Some(c) => format!("#{:06X}", c.packed()),
                        None => "held".to_string(),
                    },
                );
            }
        }
    }
}
