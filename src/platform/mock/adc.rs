//! Mock ADC implementation for testing

use heapless::Vec;

use crate::platform::{
    error::{AdcError, PlatformError},
    traits::AdcInterface,
    Result,
};

/// Maximum number of scripted conversions
pub const MAX_CONVERSIONS: usize = 32;

/// Mock ADC channel
///
/// Replays scripted raw codes in order and holds the last one afterwards.
/// `None` entries simulate a failed conversion.
#[derive(Debug, Default)]
pub struct MockAdc {
    script: Vec<Option<u16>, MAX_CONVERSIONS>,
    cursor: usize,
    reads: usize,
}

impl MockAdc {
    /// ADC that always returns `raw`
    pub fn constant(raw: u16) -> Self {
        Self::with_script(&[Some(raw)])
    }

    /// ADC replaying `codes`
    pub fn with_script(codes: &[Option<u16>]) -> Self {
        let mut adc = Self::default();
        for &code in codes.iter().take(MAX_CONVERSIONS) {
            let _ = adc.script.push(code);
        }
        adc
    }

    /// Number of conversions requested so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl AdcInterface for MockAdc {
    fn read_raw(&mut self) -> Result<u16> {
        self.reads += 1;
        let Some(last) = self.script.len().checked_sub(1) else {
            return Err(PlatformError::Adc(AdcError::ChannelUnavailable));
        };
        let code = self.script[self.cursor.min(last)];
        self.cursor += 1;
        code.ok_or(PlatformError::Adc(AdcError::ConversionFailed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_adc_replays_script() {
        let mut adc = MockAdc::with_script(&[Some(10), None, Some(30)]);
        assert_eq!(adc.read_raw(), Ok(10));
        assert_eq!(
            adc.read_raw(),
            Err(PlatformError::Adc(AdcError::ConversionFailed))
        );
        assert_eq!(adc.read_raw(), Ok(30));
        assert_eq!(adc.read_raw(), Ok(30));
        assert_eq!(adc.reads(), 4);
    }

    #[test]
    fn test_empty_mock_adc_is_unavailable() {
        let mut adc = MockAdc::default();
        assert_eq!(
            adc.read_raw(),
            Err(PlatformError::Adc(AdcError::ChannelUnavailable))
        );
    }
}
