//! Application layer: ports, events, and the orchestrating service.

pub mod events;
pub mod ports;
pub mod service;

pub use events::{AppEvent, TelemetryData};
pub use ports::{ActuatorPort, ClockPort, ClockReading, Date, EphemerisPort, EventSink};
pub use service::SunClockService;
