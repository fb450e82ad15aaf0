//! Analog sampler task
//!
//! Reads the calibrated analog channel once per period, converts the raw
//! code to millivolts and publishes the derived control value. In raw-only
//! mode (no calibration) the raw code is logged and the published control
//! value is left untouched.

use embedded_hal_async::delay::DelayNs;
use pico_sense_core::adc::{AdcUnit, Attenuation};
use pico_sense_core::calibration::{
    Calibration, CalibrationScheme, CalibrationSource, Calibrator,
};
use pico_sense_core::sampler::{sample_analog, AnalogSample};
use pico_sense_core::state::ControlSlot;
use pico_sense_core::stop::StopSignal;

use crate::platform::traits::AdcInterface;

/// Characterize `unit` at `attenuation` and log the outcome
///
/// Missing calibration data is expected on uncalibrated parts and logged as a
/// warning; any other failure is logged as an error. Both degrade to raw-only
/// mode.
pub fn calibrate_channel<S: CalibrationSource>(
    source: &mut S,
    unit: AdcUnit,
    attenuation: Attenuation,
    scheme: CalibrationScheme,
) -> Calibration {
    let calibration = Calibrator::initialize(source, unit, attenuation, scheme);

    match &calibration {
        Calibration::Calibrated(profile) => {
            crate::log_info!(
                "ADC {} calibrated ({}, {}): coeff_a={}, coeff_b={}",
                unit.as_str(),
                scheme.as_str(),
                attenuation.as_str(),
                profile.line().coeff_a(),
                profile.line().coeff_b()
            );
        }
        Calibration::Uncalibrated(reason) if reason.is_expected() => {
            crate::log_warn!(
                "ADC {}: {}, skip software calibration",
                unit.as_str(),
                reason.as_str()
            );
        }
        Calibration::Uncalibrated(reason) => {
            crate::log_error!(
                "ADC {} calibration failed: {}, continuing uncalibrated",
                unit.as_str(),
                reason.as_str()
            );
        }
    }

    calibration
}

/// Periodic sampler for the calibrated analog channel
pub struct AnalogSampler<'a, A: AdcInterface> {
    adc: A,
    calibration: Calibration,
    slot: &'a ControlSlot,
    period_ms: u32,
}

impl<'a, A: AdcInterface> AnalogSampler<'a, A> {
    pub fn new(adc: A, calibration: Calibration, slot: &'a ControlSlot, period_ms: u32) -> Self {
        Self {
            adc,
            calibration,
            slot,
            period_ms,
        }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn adc(&self) -> &A {
        &self.adc
    }

    /// Read, convert and publish once
    ///
    /// Returns `None` if the conversion failed; the slot keeps its last value.
    pub fn cycle(&mut self) -> Option<AnalogSample> {
        let raw = match self.adc.read_raw() {
            Ok(raw) => raw,
            Err(e) => {
                crate::log_warn!("ADC read failed: {}", e.as_str());
                return None;
            }
        };

        let sample = sample_analog(&self.calibration, raw, self.slot);
        match (sample.millivolts, sample.control) {
            (Some(mv), Some(control)) => {
                crate::log_info!(
                    "ADC raw: {}, voltage: {} mV, control: {}",
                    sample.raw,
                    mv,
                    control.get()
                );
            }
            _ => {
                crate::log_info!("ADC raw: {}", sample.raw);
            }
        }

        Some(sample)
    }

    /// Sample every period until `stop` is requested
    pub async fn run<D: DelayNs>(&mut self, delay: &mut D, stop: &StopSignal) {
        crate::log_info!(
            "Analog sampler started ({} ms, calibrated: {})",
            self.period_ms,
            self.calibration.is_calibrated()
        );

        while !stop.is_stop_requested() {
            self.cycle();
            delay.delay_ms(self.period_ms).await;
        }

        crate::log_info!("Analog sampler stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockAdc, MockDelay};
    use embassy_futures::block_on;
    use pico_sense_core::calibration::{
        CalibrationData, CalibrationError, ReferencePoint, UncalibratedReason,
    };
    use pico_sense_core::control::ControlValue;

    /// Calibration source returning a fixed result
    struct FixedSource(Result<CalibrationData, CalibrationError>);

    impl CalibrationSource for FixedSource {
        fn read_calibration(
            &mut self,
            _unit: AdcUnit,
            _attenuation: Attenuation,
            _scheme: CalibrationScheme,
        ) -> Result<CalibrationData, CalibrationError> {
            self.0
        }
    }

    /// 1 mV per raw code, so raw == millivolts
    fn unity_calibration() -> Calibration {
        let mut source = FixedSource(Ok(CalibrationData::TwoPoint {
            low: ReferencePoint { raw: 0, mv: 0 },
            high: ReferencePoint { raw: 4000, mv: 4000 },
        }));
        calibrate_channel(
            &mut source,
            AdcUnit::Unit1,
            Attenuation::Db11,
            CalibrationScheme::TwoPoint,
        )
    }

    #[test]
    fn test_calibrate_channel_reports_reason() {
        let mut source = FixedSource(Err(CalibrationError::NotBurnt));
        let calibration = calibrate_channel(
            &mut source,
            AdcUnit::Unit1,
            Attenuation::Db11,
            CalibrationScheme::TwoPoint,
        );
        assert_eq!(
            calibration,
            Calibration::Uncalibrated(UncalibratedReason::FuseNotBurnt)
        );

        let mut source = FixedSource(Err(CalibrationError::ReadFailed));
        let calibration = calibrate_channel(
            &mut source,
            AdcUnit::Unit1,
            Attenuation::Db11,
            CalibrationScheme::TwoPoint,
        );
        assert_eq!(
            calibration,
            Calibration::Uncalibrated(UncalibratedReason::DetectionFailed(
                CalibrationError::ReadFailed
            ))
        );
    }

    #[test]
    fn test_calibrated_cycle_publishes_control() {
        let slot = ControlSlot::new();
        let mut sampler = AnalogSampler::new(MockAdc::constant(2000), unity_calibration(), &slot, 1000);

        let sample = sampler.cycle().unwrap();
        assert_eq!(sample.millivolts, Some(2000));
        assert_eq!(slot.load().get(), 50.0);
    }

    #[test]
    fn test_uncalibrated_control_stays_at_initial_value() {
        let slot = ControlSlot::new();
        let calibration = Calibration::Uncalibrated(UncalibratedReason::SchemeNotSupported);
        let adc = MockAdc::with_script(&[Some(0), Some(4095), Some(1234)]);
        let mut sampler = AnalogSampler::new(adc, calibration, &slot, 1000);
        let stop = StopSignal::new();
        let mut delay = MockDelay::new(&stop, 10);

        block_on(sampler.run(&mut delay, &stop));

        assert_eq!(sampler.adc().reads(), 10);
        assert_eq!(slot.load(), ControlValue::ZERO);
    }

    #[test]
    fn test_failed_read_keeps_last_value() {
        let slot = ControlSlot::new();
        let adc = MockAdc::with_script(&[Some(1000), None]);
        let mut sampler = AnalogSampler::new(adc, unity_calibration(), &slot, 1000);

        assert!(sampler.cycle().is_some());
        assert_eq!(slot.load().get(), 25.0);

        assert!(sampler.cycle().is_none());
        assert_eq!(slot.load().get(), 25.0);
    }

    #[test]
    fn test_run_sleeps_analog_period() {
        let slot = ControlSlot::new();
        let stop = StopSignal::new();
        let mut sampler = AnalogSampler::new(MockAdc::constant(4095), unity_calibration(), &slot, 1000);
        let mut delay = MockDelay::new(&stop, 2);

        block_on(sampler.run(&mut delay, &stop));

        assert_eq!(delay.sleeps(), &[1000, 1000]);
        assert_eq!(slot.load(), ControlValue::MAX);
    }
}
