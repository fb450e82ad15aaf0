//! RP2350 GPIO implementation
//!
//! This module provides GPIO support for RP2350 using the `embassy-rp` crate.
//! Pins are configured by the caller; the wrappers only record the mode.

use embassy_rp::gpio::{Input, Output, Pull};

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// RP2350 push-pull output
///
/// Wraps `embassy_rp::gpio::Output` to implement the `GpioInterface` trait.
pub struct Rp2350Output {
    pin: Output<'static>,
}

impl Rp2350Output {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl GpioInterface for Rp2350Output {
    fn set_high(&mut self) -> Result<()> {
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin.set_low();
        Ok(())
    }

    fn read(&self) -> bool {
        self.pin.is_set_high()
    }

    fn mode(&self) -> GpioMode {
        GpioMode::OutputPushPull
    }
}

/// RP2350 digital input
///
/// Wraps `embassy_rp::gpio::Input`. Writes fail with `GpioError::InvalidMode`.
pub struct Rp2350Input {
    pin: Input<'static>,
    mode: GpioMode,
}

impl Rp2350Input {
    /// Wrap `pin`, configured with `pull`
    pub fn new(pin: Input<'static>, pull: Pull) -> Self {
        let mode = match pull {
            Pull::Up => GpioMode::InputPullUp,
            Pull::Down => GpioMode::InputPullDown,
            Pull::None => GpioMode::Input,
        };
        Self { pin, mode }
    }
}

impl GpioInterface for Rp2350Input {
    fn set_high(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn set_low(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn read(&self) -> bool {
        self.pin.is_high()
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
