//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use pico_sense::platform::mock::MockGpio;
//! use pico_sense::platform::traits::GpioInterface;
//!
//! let button = MockGpio::with_script(&[false, true, true]);
//! assert!(!button.read());
//! ```

#![cfg(any(test, feature = "mock"))]

mod adc;
mod delay;
mod gpio;
mod otp;

pub use adc::MockAdc;
pub use delay::MockDelay;
pub use gpio::MockGpio;
pub use otp::MockOtp;
