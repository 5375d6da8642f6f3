//! Two-stage time-to-value interpolation.
//!
//! Every continuous output runs through the same transform:
//!
//! 1. **Linear stage** — straight-line interpolation of `now` between two
//!    `(time, value)` boundary points.
//! 2. **Easing stage** — the linear result is reshaped through a
//!    quarter-sine curve anchored at an amplitude (the non-dark endpoint's
//!    channel value), which slows the ramp near the twilight boundaries
//!    and speeds it through the middle of the transition.
//!
//! The two-stage shape is intentional: the sine is applied to the
//! *linearly interpolated value*, not directly to time.  Collapsing it to
//! a single-stage sine-of-time changes the visible ramp and breaks parity
//! with the deployed lamps.

use core::f32::consts::PI;

use crate::solar::color::Color;

/// Linear stage: interpolate `now` across `(t0, v0) → (t1, v1)`.
///
/// Zero-span guard: when `t1 == t0` (degenerate solar geometry, e.g. polar
/// day) the upper endpoint's value is returned — never a division by zero.
pub fn linear(now: u16, t0: u16, v0: f32, t1: u16, v1: f32) -> f32 {
    if t1 == t0 {
        return v1;
    }
    let span = t1 as f32 - t0 as f32;
    v0 + (now as f32 - t0 as f32) * (v1 - v0) / span
}

/// Easing stage: reshape a linearly interpolated value `y` through a
/// quarter sine anchored at `amplitude`.
///
/// `eased = amplitude * sin((y - amplitude) * π / (2 * amplitude)) + amplitude`
///
/// For `y` in `[0, amplitude]` this is equivalent to
/// `amplitude * (1 - cos(π·y / (2·amplitude)))`: it passes through the
/// endpoints exactly and rises slowly near 0.  A zero amplitude (channel
/// whose target is dark) short-circuits to 0.
pub fn sine_ease(y: f32, amplitude: f32) -> f32 {
    if amplitude <= 0.0 {
        return 0.0;
    }
    amplitude * ((y - amplitude) * PI / (2.0 * amplitude)).sin() + amplitude
}

/// Full transform for one 8-bit color channel: linear, then eased against
/// `amplitude`, then clamped into `[0, 255]`.
pub fn eased_channel(now: u16, t0: u16, v0: u8, t1: u16, v1: u8, amplitude: u8) -> u8 {
    let y = linear(now, t0, v0 as f32, t1, v1 as f32);
    Color::channel_from_f32(sine_ease(y, amplitude as f32))
}

/// Plain linear transform for one 8-bit color channel (no easing), clamped
/// into `[0, 255]`.  Used for the slow daytime sun drift.
pub fn linear_channel(now: u16, t0: u16, v0: u8, t1: u16, v1: u8) -> u8 {
    Color::channel_from_f32(linear(now, t0, v0 as f32, t1, v1 as f32))
}

/// Linear map of `now` across `[t0, t1]` onto `[out_min, out_max]`,
/// clamped to the output range.  Used for the servo angle.
pub fn linear_map_deg(now: u16, t0: u16, t1: u16, out_min: u8, out_max: u8) -> u8 {
    let v = linear(now, t0, out_min as f32, t1, out_max as f32);
    v.clamp(out_min as f32, out_max as f32) as u8
}
