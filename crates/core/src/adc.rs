//! ADC types shared by the calibrator and the analog sampler

/// Resolution of the sampled channel in bits
pub const ADC_WIDTH_BITS: u8 = 12;

/// Largest raw code the ADC can produce at [`ADC_WIDTH_BITS`]
pub const MAX_RAW_CODE: u16 = (1 << ADC_WIDTH_BITS) - 1;

/// ADC converter unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcUnit {
    Unit1,
    Unit2,
}

impl AdcUnit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AdcUnit::Unit1 => "ADC1",
            AdcUnit::Unit2 => "ADC2",
        }
    }
}

/// Analog front-end attenuation
///
/// Higher attenuation widens the input voltage range mapped onto the
/// raw code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attenuation {
    /// 0 dB, full scale about 950 mV
    Db0,
    /// 2.5 dB, full scale about 1250 mV
    Db2_5,
    /// 6 dB, full scale about 1750 mV
    Db6,
    /// 11 dB, full scale about 3100 mV
    Db11,
}

impl Attenuation {
    /// Position of this setting in per-attenuation tables
    pub const fn index(&self) -> usize {
        match self {
            Attenuation::Db0 => 0,
            Attenuation::Db2_5 => 1,
            Attenuation::Db6 => 2,
            Attenuation::Db11 => 3,
        }
    }

    /// Nominal full-scale input voltage in millivolts
    pub const fn full_scale_mv(&self) -> u32 {
        match self {
            Attenuation::Db0 => 950,
            Attenuation::Db2_5 => 1250,
            Attenuation::Db6 => 1750,
            Attenuation::Db11 => 3100,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Attenuation::Db0 => "0dB",
            Attenuation::Db2_5 => "2.5dB",
            Attenuation::Db6 => "6dB",
            Attenuation::Db11 => "11dB",
        }
    }
}

/// Clamp a raw code to the range the ADC can produce
#[inline]
pub fn clamp_raw(raw: u16) -> u16 {
    raw.min(MAX_RAW_CODE)
}
