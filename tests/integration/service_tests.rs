//! End-to-end service tests: scripted clock + fixed ephemeris + mock
//! actuators, asserting on the full command history of each tick.

use sunclock::app::events::AppEvent;
use sunclock::app::service::SunClockService;
use sunclock::config::SystemConfig;
use sunclock::error::ClockError;
use sunclock::solar::day_part::DayPart;

use crate::mock_hw::{ActuatorCall, FixedEphemeris, MockHardware, RecordingSink, ScriptedClock};

fn service() -> SunClockService {
    SunClockService::new(SystemConfig::default())
}

#[test]
fn servo_write_is_bracketed_by_engage_and_release() {
    let mut app = service();
    let mut clock = ScriptedClock::new(vec![Ok(ScriptedClock::at(2022, 5, 5, 13, 0))]);
    let mut eph = FixedEphemeris::standard();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    app.tick(&mut clock, &mut eph, &mut hw, &mut sink);

    let engage = hw
        .calls
        .iter()
        .position(|c| *c == ActuatorCall::EngageServo)
        .unwrap();
    let write = hw
        .calls
        .iter()
        .position(|c| matches!(c, ActuatorCall::SetServoAngle { .. }))
        .unwrap();
    let release = hw
        .calls
        .iter()
        .position(|c| *c == ActuatorCall::ReleaseServo)
        .unwrap();
    assert!(engage < write && write < release);
}

#[test]
fn noon_tick_centres_the_servo() {
    let mut app = service();
    // 13:00 is the derived noon of the standard 06:00-20:00 day.
    let mut clock = ScriptedClock::new(vec![Ok(ScriptedClock::at(2022, 5, 5, 13, 0))]);
    let mut eph = FixedEphemeris::standard();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    app.tick(&mut clock, &mut eph, &mut hw, &mut sink);

    assert_eq!(hw.last_servo_angle(), Some(90));
    assert_eq!(app.day_part(), Some(DayPart::BeforeNoon));
}

#[test]
fn night_tick_leaves_the_sky_strip_alone() {
    let mut app = service();
    let mut clock = ScriptedClock::new(vec![Ok(ScriptedClock::at(2022, 5, 5, 2, 0))]);
    let mut eph = FixedEphemeris::standard();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    app.tick(&mut clock, &mut eph, &mut hw, &mut sink);

    assert_eq!(app.day_part(), Some(DayPart::Night));
    assert_eq!(hw.sky_presents(), 0);
    // Sun LED is still actively driven to black.
    assert_eq!(hw.last_sun(), Some((0, 0, 0)));
    // Servo parks at the minimum.
    assert_eq!(hw.last_servo_angle(), Some(0));
}

#[test]
fn daytime_tick_shows_blue_sky() {
    let mut app = service();
    let mut clock = ScriptedClock::new(vec![Ok(ScriptedClock::at(2022, 5, 5, 10, 0))]);
    let mut eph = FixedEphemeris::standard();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    app.tick(&mut clock, &mut eph, &mut hw, &mut sink);

    let blue_sky = SystemConfig::default().blue_sky;
    assert_eq!(hw.sky_presents(), 1);
    assert!(hw.calls.contains(&ActuatorCall::FillSky {
        packed: blue_sky.packed()
    }));
}

#[test]
fn schedule_recomputes_only_on_date_change() {
    let mut app = service();
    let mut clock = ScriptedClock::new(vec![
        Ok(ScriptedClock::at(2022, 5, 5, 10, 0)),
        Ok(ScriptedClock::at(2022, 5, 5, 10, 30)),
        Ok(ScriptedClock::at(2022, 5, 5, 23, 59)),
        Ok(ScriptedClock::at(2022, 5, 6, 0, 0)),
    ]);
    let mut eph = FixedEphemeris::standard();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    for _ in 0..4 {
        app.tick(&mut clock, &mut eph, &mut hw, &mut sink);
    }

    assert_eq!(eph.calls, 2);
    assert_eq!(sink.count_schedules(), 2);
}

#[test]
fn clock_failure_emits_event_and_coasts() {
    let mut app = service();
    let mut clock = ScriptedClock::new(vec![
        Ok(ScriptedClock::at(2022, 5, 5, 10, 0)),
        Err(ClockError::ReadFailed),
    ]);
    let mut eph = FixedEphemeris::standard();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    app.tick(&mut clock, &mut eph, &mut hw, &mut sink);
    let angle_before = hw.last_servo_angle();

    app.tick(&mut clock, &mut eph, &mut hw, &mut sink);

    assert_eq!(sink.count_clock_lost(), 1);
    // Same reading replayed: same outputs, no recompute.
    assert_eq!(hw.last_servo_angle(), angle_before);
    assert_eq!(eph.calls, 1);
}

#[test]
fn first_tick_without_clock_writes_nothing() {
    let mut app = service();
    let mut clock = ScriptedClock::new(vec![Err(ClockError::NotRunning)]);
    let mut eph = FixedEphemeris::standard();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    app.tick(&mut clock, &mut eph, &mut hw, &mut sink);

    assert!(hw.calls.is_empty());
    assert_eq!(eph.calls, 0);
    assert_eq!(sink.count_clock_lost(), 1);
}

#[test]
fn day_part_transition_emits_change_event() {
    let mut app = service();
    // 05:59 is still Sunrise twilight; 06:01 is past the sunrise key point.
    let mut clock = ScriptedClock::new(vec![
        Ok(ScriptedClock::at(2022, 5, 5, 5, 59)),
        Ok(ScriptedClock::at(2022, 5, 5, 6, 1)),
    ]);
    let mut eph = FixedEphemeris::standard();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    app.tick(&mut clock, &mut eph, &mut hw, &mut sink);
    app.tick(&mut clock, &mut eph, &mut hw, &mut sink);

    let change = sink.events.iter().find_map(|e| match e {
        AppEvent::DayPartChanged { from, to } => Some((*from, *to)),
        _ => None,
    });
    assert_eq!(change, Some((DayPart::Sunrise, DayPart::BeforeNoon)));
}

#[test]
fn telemetry_follows_the_configured_cadence() {
    let mut config = SystemConfig::default();
    config.telemetry_every_ticks = 3;
    let mut app = SunClockService::new(config);

    let readings = (0..6)
        .map(|i| Ok(ScriptedClock::at(2022, 5, 5, 10, i)))
        .collect();
    let mut clock = ScriptedClock::new(readings);
    let mut eph = FixedEphemeris::standard();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    for _ in 0..6 {
        app.tick(&mut clock, &mut eph, &mut hw, &mut sink);
    }

    let telemetry = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::Telemetry(_)))
        .count();
    assert_eq!(telemetry, 2);
}

#[test]
fn full_day_sweep_never_leaves_servo_travel() {
    let mut app = service();
    let mut eph = FixedEphemeris::standard();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    let config = SystemConfig::default();

    for half_hour in 0..48u16 {
        let (h, m) = ((half_hour / 2) as u8, (half_hour % 2 * 30) as u8);
        let mut clock = ScriptedClock::new(vec![Ok(ScriptedClock::at(2022, 5, 5, h, m))]);
        app.tick(&mut clock, &mut eph, &mut hw, &mut sink);

        let angle = hw.last_servo_angle().unwrap();
        assert!(angle >= config.min_servo_deg && angle <= config.max_servo_deg);
    }
    // One schedule for the whole day.
    assert_eq!(eph.calls, 1);
}
