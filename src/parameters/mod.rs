//! Build-time parameter loading
//!
//! Timing parameters are baked into the firmware image by `build.rs`:
//!
//! | Variable                      | Default | Meaning              |
//! | ----------------------------- | ------- | -------------------- |
//! | `PICO_SENSE_MIRROR_PERIOD_MS` | `1000`  | Output mirror period |
//! | `PICO_SENSE_TICK_MS`          | `10`    | Actuator delay tick  |
//!
//! A malformed value is logged and replaced by its default. Zero values
//! parse successfully and are rejected later by `TimingParams::validate`.

use pico_sense_core::parameters::{
    parse_millis, TimingParams, DEFAULT_MIRROR_PERIOD_MS, DEFAULT_TICK_MS,
};

/// Mirror period as passed to the build
pub const MIRROR_PERIOD_MS_ENV: &str = env!("PICO_SENSE_MIRROR_PERIOD_MS");

/// Actuator tick as passed to the build
pub const TICK_MS_ENV: &str = env!("PICO_SENSE_TICK_MS");

/// Parse one parameter, falling back to `default` on error
fn load_millis(name: &str, text: &str, default: u32) -> u32 {
    match parse_millis(text) {
        Ok(ms) => ms,
        Err(e) => {
            crate::log_warn!(
                "Invalid {} ({}), using default {} ms",
                name,
                e.as_str(),
                default
            );
            default
        }
    }
}

/// Build timing parameters from parameter strings
pub fn load_timing(mirror_period_ms: &str, tick_ms: &str) -> TimingParams {
    TimingParams {
        mirror_period_ms: load_millis(
            "PICO_SENSE_MIRROR_PERIOD_MS",
            mirror_period_ms,
            DEFAULT_MIRROR_PERIOD_MS,
        ),
        tick_ms: load_millis("PICO_SENSE_TICK_MS", tick_ms, DEFAULT_TICK_MS),
        ..TimingParams::default()
    }
}

/// Timing parameters baked into this build
pub fn timing_from_build_env() -> TimingParams {
    load_timing(MIRROR_PERIOD_MS_ENV, TICK_MS_ENV)
}
