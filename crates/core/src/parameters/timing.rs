//! Task timing parameters
//!
//! Sampling periods are fixed by the hardware design. The mirror period and
//! the actuator tick are build-time parameters; the firmware crate reads them
//! from the environment captured by `build.rs` and parses them with
//! [`parse_millis`].

use super::error::ConfigError;

/// Digital sampler period in milliseconds
pub const DIGITAL_PERIOD_MS: u32 = 100;

/// Analog sampler period in milliseconds
pub const ANALOG_PERIOD_MS: u32 = 1000;

/// Default output mirror period in milliseconds
pub const DEFAULT_MIRROR_PERIOD_MS: u32 = 1000;

/// Default actuator tick in milliseconds (100 Hz scheduler tick)
pub const DEFAULT_TICK_MS: u32 = 10;

/// Shortest actuator delay in ticks
///
/// A zero-length sleep at control value 0 would never yield to other tasks.
pub const MIN_ACTUATOR_DELAY_TICKS: u32 = 1;

/// Timing of all periodic tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingParams {
    /// Button and distance sensor sampling period (ms)
    pub digital_period_ms: u32,
    /// Analog sampling period (ms)
    pub analog_period_ms: u32,
    /// Output mirror period (ms)
    pub mirror_period_ms: u32,
    /// Length of one actuator delay tick (ms)
    pub tick_ms: u32,
    /// Lower bound of the actuator delay (ticks)
    pub min_delay_ticks: u32,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            digital_period_ms: DIGITAL_PERIOD_MS,
            analog_period_ms: ANALOG_PERIOD_MS,
            mirror_period_ms: DEFAULT_MIRROR_PERIOD_MS,
            tick_ms: DEFAULT_TICK_MS,
            min_delay_ticks: MIN_ACTUATOR_DELAY_TICKS,
        }
    }
}

impl TimingParams {
    /// Check that every period and the tick are non-zero
    ///
    /// # Errors
    ///
    /// - `ConfigError::ZeroPeriod` if any period is zero
    /// - `ConfigError::ZeroTick` if the tick is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digital_period_ms == 0 || self.analog_period_ms == 0 || self.mirror_period_ms == 0
        {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }

    /// Actuator sleep for `ticks`, in milliseconds
    #[inline]
    pub fn ticks_to_ms(&self, ticks: u32) -> u32 {
        ticks.saturating_mul(self.tick_ms)
    }
}

/// Parse a decimal millisecond value
///
/// Leading and trailing whitespace is ignored.
pub fn parse_millis(text: &str) -> Result<u32, ConfigError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConfigError::Empty);
    }
    text.parse::<u32>().map_err(|_| ConfigError::NotANumber)
}
