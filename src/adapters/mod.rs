//! Adapters: concrete implementations of the port traits in
//! [`crate::app::ports`].

pub mod clock;
pub mod ephemeris;
pub mod hardware;
pub mod log_sink;
pub mod uptime;

pub use clock::SystemClockAdapter;
pub use ephemeris::SolarEphemerisAdapter;
pub use hardware::HardwareAdapter;
pub use log_sink::LogEventSink;
pub use uptime::UptimeTimer;
