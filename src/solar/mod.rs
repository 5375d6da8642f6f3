//! Solar domain core — pure logic, zero I/O.
//!
//! Everything the lamp shows is a function of (time of day, the five solar
//! key points).  This module owns that mapping: key-point construction,
//! day-part classification, the two-stage interpolator, and the three
//! output projections.  All interaction with hardware happens through the
//! port traits in [`crate::app::ports`], keeping this layer fully testable
//! without real peripherals.

pub mod color;
pub mod day_part;
pub mod events;
pub mod interp;
pub mod projection;
