//! Fixed-point linear raw code to millivolt mapping
//!
//! ```text
//! mv = (coeff_a * raw + 32768) / 65536 + coeff_b
//! ```
//!
//! `coeff_a` is an unsigned Q16 gain, so the mapping is monotonic
//! nondecreasing in `raw`. The result saturates to `0..=u16::MAX`.

use core::fmt;

use super::{CalibrationData, ReferencePoint};
use crate::adc::{clamp_raw, Attenuation, ADC_WIDTH_BITS, MAX_RAW_CODE};

/// Q16 scale of `coeff_a`
pub const COEFF_A_SCALE: u64 = 65536;

/// Rounding term added before the Q16 division
pub const COEFF_A_ROUND: u64 = 32768;

/// Per-attenuation gain applied to the reference voltage (Vref scheme)
pub const VREF_ATTEN_SCALE: [u32; 4] = [57431, 76236, 105481, 196602];

/// Per-attenuation offset in millivolts (Vref scheme)
pub const VREF_ATTEN_OFFSET: [i32; 4] = [75, 78, 107, 142];

/// Accepted range of a measured reference voltage in millivolts
pub const VREF_RANGE_MV: core::ops::RangeInclusive<u16> = 1000..=1200;

/// Reasons characterization data cannot produce a usable line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFitError {
    /// Reference raw code above the ADC range
    RawOutOfRange,
    /// High reference raw code is not above the low one
    NonIncreasingRaw,
    /// High reference voltage is below the low one
    DecreasingVoltage,
    /// Reference voltage outside [`VREF_RANGE_MV`]
    VrefOutOfRange,
    /// Gain does not fit the Q16 coefficient
    GainOverflow,
}

impl LineFitError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineFitError::RawOutOfRange => "reference raw code out of range",
            LineFitError::NonIncreasingRaw => "reference raw codes not increasing",
            LineFitError::DecreasingVoltage => "reference voltages decreasing",
            LineFitError::VrefOutOfRange => "reference voltage out of range",
            LineFitError::GainOverflow => "gain overflow",
        }
    }
}

impl fmt::Display for LineFitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Linear characterization of one ADC unit at one attenuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFit {
    coeff_a: u32,
    coeff_b: i32,
}

impl LineFit {
    /// Build a line from characterization data measured at `attenuation`
    pub fn characterize(
        data: &CalibrationData,
        attenuation: Attenuation,
    ) -> Result<Self, LineFitError> {
        match *data {
            CalibrationData::TwoPoint { low, high } => Self::from_two_points(low, high),
            CalibrationData::Vref { vref_mv } => Self::from_vref(vref_mv, attenuation),
        }
    }

    fn from_two_points(low: ReferencePoint, high: ReferencePoint) -> Result<Self, LineFitError> {
        if low.raw > MAX_RAW_CODE || high.raw > MAX_RAW_CODE {
            return Err(LineFitError::RawOutOfRange);
        }
        if high.raw <= low.raw {
            return Err(LineFitError::NonIncreasingRaw);
        }
        if high.mv < low.mv {
            return Err(LineFitError::DecreasingVoltage);
        }

        let delta_mv = u64::from(high.mv - low.mv);
        let delta_raw = u64::from(high.raw - low.raw);
        let coeff_a = u32::try_from(COEFF_A_SCALE * delta_mv / delta_raw)
            .map_err(|_| LineFitError::GainOverflow)?;

        let low_scaled = (u64::from(coeff_a) * u64::from(low.raw) + COEFF_A_ROUND) / COEFF_A_SCALE;
        let low_scaled = i64::try_from(low_scaled).map_err(|_| LineFitError::GainOverflow)?;
        let coeff_b = i32::try_from(i64::from(low.mv) - low_scaled)
            .map_err(|_| LineFitError::GainOverflow)?;

        Ok(Self { coeff_a, coeff_b })
    }

    fn from_vref(vref_mv: u16, attenuation: Attenuation) -> Result<Self, LineFitError> {
        if !VREF_RANGE_MV.contains(&vref_mv) {
            return Err(LineFitError::VrefOutOfRange);
        }

        let index = attenuation.index();
        let scaled = u64::from(vref_mv) * u64::from(VREF_ATTEN_SCALE[index]);
        let coeff_a = u32::try_from(scaled >> ADC_WIDTH_BITS)
            .map_err(|_| LineFitError::GainOverflow)?;

        Ok(Self {
            coeff_a,
            coeff_b: VREF_ATTEN_OFFSET[index],
        })
    }

    /// Q16 gain
    #[inline]
    pub fn coeff_a(&self) -> u32 {
        self.coeff_a
    }

    /// Offset in millivolts
    #[inline]
    pub fn coeff_b(&self) -> i32 {
        self.coeff_b
    }

    /// Map a raw code to millivolts
    ///
    /// Codes above the ADC range are clamped first.
    pub fn raw_to_millivolts(&self, raw: u16) -> u32 {
        let raw = u64::from(clamp_raw(raw));
        let scaled = (u64::from(self.coeff_a) * raw + COEFF_A_ROUND) / COEFF_A_SCALE;
        let mv = scaled as i64 + i64::from(self.coeff_b);
        mv.clamp(0, i64::from(u16::MAX)) as u32
    }
}
