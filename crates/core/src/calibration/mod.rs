//! ADC calibration
//!
//! The [`Calibrator`] characterizes one ADC unit at one attenuation, once at
//! startup. Calibration data comes from a [`CalibrationSource`] (factory
//! fuses/OTP on target, a mock on host).
//!
//! The result is an explicit [`Calibration`]:
//!
//! - `Calibrated(profile)`: raw codes can be converted to millivolts
//! - `Uncalibrated(reason)`: raw-only mode. Conversion is unreachable because
//!   it is only defined on [`CalibrationProfile`].
//!
//! An unsupported scheme or an unburnt fuse is a valid degraded mode, not an
//! error. Every other detection failure also degrades to raw-only mode;
//! the caller is responsible for logging the reason.

pub mod line;

use core::fmt;

use crate::adc::{AdcUnit, Attenuation};
pub use line::{LineFit, LineFitError};

/// Factory calibration scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationScheme {
    /// Two measured reference points
    TwoPoint,
    /// Measured internal reference voltage scaled per attenuation
    Vref,
}

impl CalibrationScheme {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CalibrationScheme::TwoPoint => "two-point",
            CalibrationScheme::Vref => "vref",
        }
    }
}

/// One measured calibration point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePoint {
    /// Raw code read while the reference voltage was applied
    pub raw: u16,
    /// Applied reference voltage in millivolts
    pub mv: u16,
}

/// Characterization data read from the calibration source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationData {
    TwoPoint {
        low: ReferencePoint,
        high: ReferencePoint,
    },
    Vref {
        vref_mv: u16,
    },
}

/// Errors reported by a [`CalibrationSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationError {
    /// The chip does not provide the requested scheme
    NotSupported,
    /// The calibration fuse was never burned
    NotBurnt,
    /// Unit or attenuation is not valid for this chip
    InvalidArgument,
    /// Reading the calibration storage failed
    ReadFailed,
}

impl CalibrationError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CalibrationError::NotSupported => "scheme not supported",
            CalibrationError::NotBurnt => "calibration fuse not burnt",
            CalibrationError::InvalidArgument => "invalid argument",
            CalibrationError::ReadFailed => "calibration read failed",
        }
    }
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider of factory calibration data
pub trait CalibrationSource {
    /// Read characterization data for `scheme`
    ///
    /// # Errors
    ///
    /// - `NotSupported` if the chip has no data for `scheme`
    /// - `NotBurnt` if the calibration storage was never programmed
    /// - `InvalidArgument` / `ReadFailed` for other failures
    fn read_calibration(
        &mut self,
        unit: AdcUnit,
        attenuation: Attenuation,
        scheme: CalibrationScheme,
    ) -> Result<CalibrationData, CalibrationError>;
}

/// Why a channel runs in raw-only mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncalibratedReason {
    /// Scheme not supported by this chip
    SchemeNotSupported,
    /// Calibration fuse never burned
    FuseNotBurnt,
    /// Any other source failure
    DetectionFailed(CalibrationError),
    /// Data was read but does not describe a usable line
    InvalidData(LineFitError),
}

impl UncalibratedReason {
    /// Whether this is an expected degraded mode rather than a fault
    pub const fn is_expected(&self) -> bool {
        matches!(
            self,
            UncalibratedReason::SchemeNotSupported | UncalibratedReason::FuseNotBurnt
        )
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            UncalibratedReason::SchemeNotSupported => "scheme not supported",
            UncalibratedReason::FuseNotBurnt => "calibration fuse not burnt",
            UncalibratedReason::DetectionFailed(e) => e.as_str(),
            UncalibratedReason::InvalidData(e) => e.as_str(),
        }
    }
}

impl fmt::Display for UncalibratedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Characterization of one ADC unit, immutable after startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationProfile {
    unit: AdcUnit,
    attenuation: Attenuation,
    scheme: CalibrationScheme,
    line: LineFit,
}

impl CalibrationProfile {
    pub fn unit(&self) -> AdcUnit {
        self.unit
    }

    pub fn attenuation(&self) -> Attenuation {
        self.attenuation
    }

    pub fn scheme(&self) -> CalibrationScheme {
        self.scheme
    }

    pub fn line(&self) -> &LineFit {
        &self.line
    }

    /// Convert a raw code to millivolts
    ///
    /// Monotonic nondecreasing in `raw`.
    #[inline]
    pub fn convert(&self, raw: u16) -> u32 {
        self.line.raw_to_millivolts(raw)
    }
}

/// Outcome of startup calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calibration {
    Calibrated(CalibrationProfile),
    Uncalibrated(UncalibratedReason),
}

impl Calibration {
    /// Profile if calibration is enabled
    pub fn profile(&self) -> Option<&CalibrationProfile> {
        match self {
            Calibration::Calibrated(profile) => Some(profile),
            Calibration::Uncalibrated(_) => None,
        }
    }

    pub fn is_calibrated(&self) -> bool {
        matches!(self, Calibration::Calibrated(_))
    }
}

/// Startup characterization of an ADC unit
pub struct Calibrator;

impl Calibrator {
    /// Detect `scheme` on `unit` and build a profile for `attenuation`
    ///
    /// Never fails: every failure degrades to [`Calibration::Uncalibrated`].
    pub fn initialize<S: CalibrationSource>(
        source: &mut S,
        unit: AdcUnit,
        attenuation: Attenuation,
        scheme: CalibrationScheme,
    ) -> Calibration {
        let data = match source.read_calibration(unit, attenuation, scheme) {
            Ok(data) => data,
            Err(CalibrationError::NotSupported) => {
                return Calibration::Uncalibrated(UncalibratedReason::SchemeNotSupported)
            }
            Err(CalibrationError::NotBurnt) => {
                return Calibration::Uncalibrated(UncalibratedReason::FuseNotBurnt)
            }
            Err(e) => return Calibration::Uncalibrated(UncalibratedReason::DetectionFailed(e)),
        };

        match LineFit::characterize(&data, attenuation) {
            Ok(line) => Calibration::Calibrated(CalibrationProfile {
                unit,
                attenuation,
                scheme,
                line,
            }),
            Err(e) => Calibration::Uncalibrated(UncalibratedReason::InvalidData(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adc::MAX_RAW_CODE;

    /// Source returning a fixed result and counting reads
    struct FixedSource {
        result: Result<CalibrationData, CalibrationError>,
        reads: u32,
    }

    impl FixedSource {
        fn new(result: Result<CalibrationData, CalibrationError>) -> Self {
            Self { result, reads: 0 }
        }
    }

    impl CalibrationSource for FixedSource {
        fn read_calibration(
            &mut self,
            _unit: AdcUnit,
            _attenuation: Attenuation,
            _scheme: CalibrationScheme,
        ) -> Result<CalibrationData, CalibrationError> {
            self.reads += 1;
            self.result
        }
    }

    const TWO_POINT: CalibrationData = CalibrationData::TwoPoint {
        low: ReferencePoint { raw: 180, mv: 150 },
        high: ReferencePoint { raw: 3900, mv: 3100 },
    };

    fn init(source: &mut FixedSource) -> Calibration {
        Calibrator::initialize(
            source,
            AdcUnit::Unit1,
            Attenuation::Db11,
            CalibrationScheme::TwoPoint,
        )
    }

    #[test]
    fn test_calibrated_profile_records_settings() {
        let mut source = FixedSource::new(Ok(TWO_POINT));
        let calibration = init(&mut source);

        let profile = calibration.profile().expect("calibrated");
        assert_eq!(profile.unit(), AdcUnit::Unit1);
        assert_eq!(profile.attenuation(), Attenuation::Db11);
        assert_eq!(profile.scheme(), CalibrationScheme::TwoPoint);
        assert_eq!(source.reads, 1);
    }

    #[test]
    fn test_not_supported_degrades_to_raw_only() {
        let mut source = FixedSource::new(Err(CalibrationError::NotSupported));
        let calibration = init(&mut source);

        assert_eq!(
            calibration,
            Calibration::Uncalibrated(UncalibratedReason::SchemeNotSupported)
        );
        assert!(!calibration.is_calibrated());
        assert!(calibration.profile().is_none());
    }

    #[test]
    fn test_not_burnt_degrades_to_raw_only() {
        let mut source = FixedSource::new(Err(CalibrationError::NotBurnt));
        assert_eq!(
            init(&mut source),
            Calibration::Uncalibrated(UncalibratedReason::FuseNotBurnt)
        );
    }

    #[test]
    fn test_other_failures_degrade_with_reason() {
        for err in [CalibrationError::InvalidArgument, CalibrationError::ReadFailed] {
            let mut source = FixedSource::new(Err(err));
            let calibration = init(&mut source);
            assert_eq!(
                calibration,
                Calibration::Uncalibrated(UncalibratedReason::DetectionFailed(err))
            );
            if let Calibration::Uncalibrated(reason) = calibration {
                assert!(!reason.is_expected());
            }
        }
    }

    #[test]
    fn test_invalid_data_degrades_to_raw_only() {
        let bad = CalibrationData::TwoPoint {
            low: ReferencePoint { raw: 3000, mv: 150 },
            high: ReferencePoint { raw: 100, mv: 3100 },
        };
        let mut source = FixedSource::new(Ok(bad));
        assert_eq!(
            init(&mut source),
            Calibration::Uncalibrated(UncalibratedReason::InvalidData(
                LineFitError::NonIncreasingRaw
            ))
        );
    }

    #[test]
    fn test_expected_reasons() {
        assert!(UncalibratedReason::SchemeNotSupported.is_expected());
        assert!(UncalibratedReason::FuseNotBurnt.is_expected());
        assert!(!UncalibratedReason::InvalidData(LineFitError::GainOverflow).is_expected());
    }

    #[test]
    fn test_convert_is_monotonic_over_full_range() {
        let datasets = [
            TWO_POINT,
            CalibrationData::TwoPoint {
                low: ReferencePoint { raw: 1500, mv: 10 },
                high: ReferencePoint { raw: 1510, mv: 4000 },
            },
            CalibrationData::Vref { vref_mv: 1000 },
            CalibrationData::Vref { vref_mv: 1200 },
        ];

        for data in datasets {
            let mut source = FixedSource::new(Ok(data));
            let calibration = init(&mut source);
            let profile = calibration.profile().expect("calibrated");

            let mut previous = profile.convert(0);
            for raw in 1..=MAX_RAW_CODE + 8 {
                let mv = profile.convert(raw);
                assert!(mv >= previous, "raw {} -> {} < {}", raw, mv, previous);
                previous = mv;
            }
        }
    }
}
