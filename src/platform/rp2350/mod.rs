//! RP2350 platform implementation for Raspberry Pi Pico 2 W
//!
//! This module provides concrete implementations of the platform abstraction
//! traits for the RP2350 microcontroller using the `embassy-rp` crate.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico2_w` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! pico_sense = { version = "0.1", features = ["pico2_w"] }
//! ```

mod adc;
mod gpio;
mod otp;
pub mod tasks;

pub use adc::Rp2350Adc;
pub use gpio::{Rp2350Input, Rp2350Output};
pub use otp::{Rp2350Otp, OTP_ROW_COUNT};
