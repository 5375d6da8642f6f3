//! Sun clock firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod pins;
pub mod scheduler;
pub mod solar;

// Re-export the ESP-IDF-facing modules so the crate compiles on the host;
// the actual hardware access is guarded by cfg attributes inside.
pub mod adapters;
pub mod drivers;
