//! Output projections: day part + time → servo angle, sun color, sky color.
//!
//! One classification value feeds three independent pure functions; the
//! service applies their results through the actuator port.  Twilight
//! transitions use the two-stage eased interpolator; the daytime sun drift
//! and the servo sweep are plain linear ramps.

use crate::solar::color::Color;
use crate::solar::day_part::DayPart;
use crate::solar::events::{SolarEvents, TimeOfDay};
use crate::solar::interp;

/// Servo elevation angle for the current instant.
///
/// Sunset parks the arm at `max_deg`, sunrise and night at `min_deg`; in
/// between the arm sweeps linearly across the sunrise→sunset span.  Always
/// within `[min_deg, max_deg]`.
pub fn servo_angle(
    part: DayPart,
    now: TimeOfDay,
    events: &SolarEvents,
    min_deg: u8,
    max_deg: u8,
) -> u8 {
    match part {
        DayPart::Sunset => max_deg,
        DayPart::Sunrise | DayPart::Night => min_deg,
        DayPart::BeforeNoon | DayPart::AfterNoon => interp::linear_map_deg(
            now.minutes(),
            events.sunrise.time.minutes(),
            events.sunset.time.minutes(),
            min_deg,
            max_deg,
        ),
    }
}

/// Sun LED color for the current instant.
///
/// Twilight eases red and green between the civil (black) and horizon key
/// points; daytime drifts red and green linearly through the noon point.
/// Blue is never driven while the sun is up — the sun lamp has no blue
/// component by design.
pub fn sun_color(part: DayPart, now: TimeOfDay, events: &SolarEvents) -> Color {
    let m = now.minutes();
    match part {
        DayPart::Night => Color::BLACK,
        DayPart::Sunrise => {
            let from = events.civil_sunrise;
            let to = events.sunrise;
            horizon_blend(m, from.time, from.color, to.time, to.color, to.color)
        }
        DayPart::Sunset => {
            let from = events.sunset;
            let to = events.civil_sunset;
            horizon_blend(m, from.time, from.color, to.time, to.color, from.color)
        }
        DayPart::BeforeNoon => day_blend(m, events.sunrise, events.noon),
        DayPart::AfterNoon => day_blend(m, events.noon, events.sunset),
    }
}

/// Sky strip color for the current instant.
///
/// Twilight ramps only the blue channel between darkness and the blue-sky
/// level; daytime holds the full blue-sky color.  `None` at night: the
/// strip keeps whatever it last showed (the eased ramp has already taken
/// it to black by civil dusk).
pub fn sky_color(
    part: DayPart,
    now: TimeOfDay,
    events: &SolarEvents,
    blue_sky: Color,
) -> Option<Color> {
    let m = now.minutes();
    match part {
        DayPart::Night => None,
        DayPart::BeforeNoon | DayPart::AfterNoon => Some(blue_sky),
        DayPart::Sunrise => {
            let b = interp::eased_channel(
                m,
                events.civil_sunrise.time.minutes(),
                0,
                events.sunrise.time.minutes(),
                blue_sky.b,
                blue_sky.b,
            );
            Some(Color::new(0, 0, b))
        }
        DayPart::Sunset => {
            let b = interp::eased_channel(
                m,
                events.sunset.time.minutes(),
                blue_sky.b,
                events.civil_sunset.time.minutes(),
                0,
                blue_sky.b,
            );
            Some(Color::new(0, 0, b))
        }
    }
}

/// Eased red/green blend across a twilight span.  The easing amplitude is
/// the horizon-side endpoint's own channel value.
fn horizon_blend(
    now: u16,
    t0: TimeOfDay,
    v0: Color,
    t1: TimeOfDay,
    v1: Color,
    amplitude: Color,
) -> Color {
    let (t0, t1) = (t0.minutes(), t1.minutes());
    Color::new(
        interp::eased_channel(now, t0, v0.r, t1, v1.r, amplitude.r),
        interp::eased_channel(now, t0, v0.g, t1, v1.g, amplitude.g),
        0,
    )
}

/// Plain linear red/green blend between two daytime key points.
fn day_blend(now: u16, from: crate::solar::events::KeyPoint, to: crate::solar::events::KeyPoint) -> Color {
    let (t0, t1) = (from.time.minutes(), to.time.minutes());
    Color::new(
        interp::linear_channel(now, t0, from.color.r, t1, to.color.r),
        interp::linear_channel(now, t0, from.color.g, t1, to.color.g),
        0,
    )
}
