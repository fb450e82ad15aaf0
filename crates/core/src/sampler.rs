//! Per-cycle sampler logic
//!
//! The periodic loops in the firmware read hardware, call into this module
//! once per cycle, log what it returns, and sleep. Keeping the cycle logic
//! here makes it testable without a runtime.

use crate::adc::clamp_raw;
use crate::calibration::Calibration;
use crate::control::ControlValue;
use crate::state::{ControlSlot, Level, LevelSlot};

/// Transition observed by a digital sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub from: Level,
    pub to: Level,
}

/// One digital sampler cycle
///
/// Compares `level` with the value currently published in `slot`, then
/// publishes `level` unconditionally. Returns the transition if the level
/// changed.
pub fn sample_digital(slot: &LevelSlot, level: Level) -> Option<LevelChange> {
    let previous = slot.load();
    slot.store(level);

    (previous != level).then_some(LevelChange {
        from: previous,
        to: level,
    })
}

/// Result of one analog sampler cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogSample {
    /// Raw code as read (clamped to the ADC range)
    pub raw: u16,
    /// Converted reading, `None` in raw-only mode
    pub millivolts: Option<u32>,
    /// Published control value, `None` when nothing was published
    pub control: Option<ControlValue>,
}

/// One analog sampler cycle
///
/// With a calibrated profile the raw code is converted, the control value
/// derived and published. In raw-only mode nothing is converted and the slot
/// keeps its previous value.
pub fn sample_analog(calibration: &Calibration, raw: u16, slot: &ControlSlot) -> AnalogSample {
    let raw = clamp_raw(raw);

    match calibration.profile() {
        Some(profile) => {
            let millivolts = profile.convert(raw);
            let control = ControlValue::from_millivolts(millivolts);
            slot.store(control);
            AnalogSample {
                raw,
                millivolts: Some(millivolts),
                control: Some(control),
            }
        }
        None => AnalogSample {
            raw,
            millivolts: None,
            control: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adc::{AdcUnit, Attenuation};
    use crate::calibration::{
        CalibrationData, CalibrationError, CalibrationScheme, CalibrationSource, Calibrator,
        ReferencePoint, UncalibratedReason,
    };

    struct Source(Result<CalibrationData, CalibrationError>);

    impl CalibrationSource for Source {
        fn read_calibration(
            &mut self,
            _unit: AdcUnit,
            _attenuation: Attenuation,
            _scheme: CalibrationScheme,
        ) -> Result<CalibrationData, CalibrationError> {
            self.0
        }
    }

    /// Identity line: 1 raw code = 1 mV
    fn identity() -> Calibration {
        let data = CalibrationData::TwoPoint {
            low: ReferencePoint { raw: 0, mv: 0 },
            high: ReferencePoint { raw: 4000, mv: 4000 },
        };
        Calibrator::initialize(
            &mut Source(Ok(data)),
            AdcUnit::Unit1,
            Attenuation::Db11,
            CalibrationScheme::TwoPoint,
        )
    }

    #[test]
    fn test_digital_sequence_reports_two_changes() {
        let slot = LevelSlot::new(Level::Low);
        let inputs = [0u8, 1, 1, 0, 0];

        let mut changes = Vec::new();
        for &input in &inputs {
            let level = Level::from(input == 1);
            if let Some(change) = sample_digital(&slot, level) {
                changes.push(change);
            }
            assert_eq!(slot.load(), level);
        }

        assert_eq!(
            changes,
            vec![
                LevelChange {
                    from: Level::Low,
                    to: Level::High
                },
                LevelChange {
                    from: Level::High,
                    to: Level::Low
                },
            ]
        );
    }

    #[test]
    fn test_digital_publishes_without_change() {
        let slot = LevelSlot::new(Level::High);
        assert_eq!(sample_digital(&slot, Level::High), None);
        assert_eq!(slot.load(), Level::High);
    }

    #[test]
    fn test_analog_calibrated_publishes_control() {
        let slot = ControlSlot::new();
        let sample = sample_analog(&identity(), 2000, &slot);

        assert_eq!(sample.raw, 2000);
        assert_eq!(sample.millivolts, Some(2000));
        assert_eq!(sample.control, Some(ControlValue::from_millivolts(2000)));
        assert_eq!(slot.load().get(), 50.0);
    }

    #[test]
    fn test_analog_clamps_control_above_full_scale() {
        let slot = ControlSlot::new();
        // 4095 raw -> 4095 mV on the identity line
        let sample = sample_analog(&identity(), 4095, &slot);
        assert_eq!(sample.control, Some(ControlValue::MAX));
        assert_eq!(slot.load(), ControlValue::MAX);
    }

    #[test]
    fn test_analog_uncalibrated_keeps_previous_value() {
        let calibration = Calibration::Uncalibrated(UncalibratedReason::SchemeNotSupported);
        let slot = ControlSlot::new();
        let initial = ControlValue::try_new(33.0).unwrap();
        slot.store(initial);

        for raw in [0, 1000, 4095] {
            let sample = sample_analog(&calibration, raw, &slot);
            assert_eq!(sample.millivolts, None);
            assert_eq!(sample.control, None);
            assert_eq!(slot.load(), initial);
        }
    }

    #[test]
    fn test_analog_reports_clamped_raw() {
        let calibration = Calibration::Uncalibrated(UncalibratedReason::FuseNotBurnt);
        let slot = ControlSlot::new();
        assert_eq!(sample_analog(&calibration, u16::MAX, &slot).raw, 4095);
    }
}
