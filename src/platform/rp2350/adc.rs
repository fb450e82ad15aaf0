//! RP2350 ADC implementation
//!
//! Blocking single-channel reads. One conversion takes ~2μs, so the
//! sampler task does not need the interrupt-driven driver.

use embassy_rp::adc::{Adc, Blocking, Channel};

use crate::platform::{
    error::{AdcError, PlatformError},
    traits::AdcInterface,
    Result,
};

/// RP2350 ADC channel
pub struct Rp2350Adc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl Rp2350Adc {
    /// Create ADC reader from pre-initialized parts
    ///
    /// # Arguments
    ///
    /// * `adc` - Blocking ADC peripheral
    /// * `channel` - Pre-configured ADC channel (GPIO 26)
    pub fn from_parts(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcInterface for Rp2350Adc {
    fn read_raw(&mut self) -> Result<u16> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| PlatformError::Adc(AdcError::ConversionFailed))
    }
}
