//! Low-level peripheral drivers.
//!
//! Every driver is dual-target: real register/driver access on
//! `target_os = "espidf"`, in-memory state tracking everywhere else so the
//! whole stack runs on the host.

pub mod hw_init;
pub mod servo;
pub mod sky_strip;
pub mod sun_led;
