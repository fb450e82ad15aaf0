//! Build-time parameters
//!
//! There is no runtime reconfiguration and no persistence: parameters are
//! fixed when the firmware is built and validated once at startup.

pub mod error;
pub mod timing;

pub use error::ConfigError;
pub use timing::{
    parse_millis, TimingParams, ANALOG_PERIOD_MS, DEFAULT_MIRROR_PERIOD_MS, DEFAULT_TICK_MS,
    DIGITAL_PERIOD_MS, MIN_ACTUATOR_DELAY_TICKS,
};
