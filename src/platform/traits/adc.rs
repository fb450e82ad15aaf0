//! ADC interface trait

use crate::platform::Result;

/// Single-channel ADC interface
///
/// An implementation owns one converter channel configured at startup.
pub trait AdcInterface {
    /// Perform one blocking conversion and return the raw code
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc` if the conversion fails.
    fn read_raw(&mut self) -> Result<u16>;
}
