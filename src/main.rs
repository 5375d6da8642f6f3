//! Sun Clock Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single-threaded, gate-driven refresh loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  SystemClockAdapter  SolarEphemerisAdapter  LogEventSink │
//! │  (ClockPort)         (EphemerisPort)        (EventSink)  │
//! │  HardwareAdapter                                         │
//! │  (ActuatorPort: servo · sun LED · sky strip)             │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │          SunClockService (pure logic)              │  │
//! │  │  solar events · day part · projections             │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                                                          │
//! │  RefreshGate (monotonic-uptime tick gating)              │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use sunclock::adapters::{
    HardwareAdapter, LogEventSink, SolarEphemerisAdapter, SystemClockAdapter, UptimeTimer,
};
use sunclock::app::SunClockService;
use sunclock::config::SystemConfig;
use sunclock::drivers::hw_init;
use sunclock::drivers::servo::ServoDriver;
use sunclock::drivers::sky_strip::SkyStrip;
use sunclock::drivers::sun_led::SunLed;
use sunclock::scheduler::RefreshGate;

/// How often the loop wakes to check the refresh gate.
const POLL_INTERVAL_MS: u64 = 1_000;

fn main() -> Result<()> {
    // ── 1. Platform bootstrap ─────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }
    #[cfg(not(target_os = "espidf"))]
    env_logger::init();

    info!("sun clock v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let config = SystemConfig::default();

    // ── 3. Construct adapters ─────────────────────────────────
    #[cfg(target_os = "espidf")]
    let sky = {
        use esp_idf_hal::peripherals::Peripherals;
        use ws2812_esp32_rmt_driver::Ws2812Esp32Rmt;

        let peripherals = Peripherals::take()?;
        // GPIO7, matching pins::SKY_STRIP_GPIO.
        let driver = Ws2812Esp32Rmt::new(peripherals.rmt.channel0, peripherals.pins.gpio7)?;
        SkyStrip::new(driver)
    };
    #[cfg(not(target_os = "espidf"))]
    let sky = SkyStrip::new();

    let mut hw = HardwareAdapter::new(ServoDriver::new(), SunLed::new(), sky);
    let mut clock = SystemClockAdapter::new();
    let mut ephemeris = SolarEphemerisAdapter::from_config(&config)?;
    let mut sink = LogEventSink::new();
    let uptime = UptimeTimer::new();

    // ── 4. Construct app service ──────────────────────────────
    let mut app = SunClockService::new(config.clone());
    app.start(&mut sink);

    let mut gate = RefreshGate::new(u64::from(config.refresh_interval_ms));

    info!("System ready. Entering refresh loop.");

    // ── 5. Refresh loop ───────────────────────────────────────
    loop {
        std::thread::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS));

        if gate.should_run(uptime.uptime_ms()) {
            app.tick(&mut clock, &mut ephemeris, &mut hw, &mut sink);
        }
    }
}
