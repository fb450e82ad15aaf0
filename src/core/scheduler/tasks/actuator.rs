//! Actuator driver task
//!
//! Toggles the blinking output every cycle. The sleep between toggles is
//! `floor(control / 2)` ticks, taken from the latest published control
//! value, and never shorter than the configured minimum.

use embedded_hal_async::delay::DelayNs;
use pico_sense_core::actuator::{Actuator, ActuatorStep};
use pico_sense_core::parameters::TimingParams;
use pico_sense_core::state::ControlSlot;
use pico_sense_core::stop::StopSignal;

use crate::platform::traits::GpioInterface;

/// Blinking output driven by the control value
pub struct ActuatorDriver<'a, P: GpioInterface> {
    pin: P,
    actuator: Actuator,
    slot: &'a ControlSlot,
    timing: TimingParams,
}

impl<'a, P: GpioInterface> ActuatorDriver<'a, P> {
    /// Create a driver for `pin`, starting in the off state
    pub fn new(pin: P, slot: &'a ControlSlot, timing: TimingParams) -> Self {
        Self {
            pin,
            actuator: Actuator::new(timing.min_delay_ticks),
            slot,
            timing,
        }
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Toggle, drive the output, then compute the next delay
    ///
    /// The control value is read after the output is driven. A failed write
    /// is logged; the state still alternates.
    pub fn cycle(&mut self) -> ActuatorStep {
        let state = self.actuator.toggle();
        if let Err(e) = self.pin.set_level(state.level()) {
            crate::log_warn!("Actuator write failed: {}", e.as_str());
        }

        let step = ActuatorStep {
            state,
            delay_ticks: self.actuator.delay_ticks(self.slot.load()),
        };
        crate::log_trace!(
            "Actuator {} for {} ticks",
            step.state.level().as_u8(),
            step.delay_ticks
        );

        step
    }

    /// Toggle until `stop` is requested
    pub async fn run<D: DelayNs>(&mut self, delay: &mut D, stop: &StopSignal) {
        crate::log_info!("Actuator driver started (tick {} ms)", self.timing.tick_ms);

        while !stop.is_stop_requested() {
            let step = self.cycle();
            delay
                .delay_ms(self.timing.ticks_to_ms(step.delay_ticks))
                .await;
        }

        crate::log_info!("Actuator driver stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockDelay, MockGpio};
    use embassy_futures::block_on;
    use pico_sense_core::actuator::ActuatorState;
    use pico_sense_core::control::ControlValue;

    #[test]
    fn test_first_cycle_drives_high() {
        let slot = ControlSlot::new();
        let mut driver = ActuatorDriver::new(MockGpio::new_output(), &slot, TimingParams::default());

        let step = driver.cycle();
        assert_eq!(step.state, ActuatorState::On);
        assert_eq!(driver.pin().history(), &[true]);
    }

    #[test]
    fn test_output_alternates_every_cycle() {
        let slot = ControlSlot::new();
        let stop = StopSignal::new();
        let mut driver = ActuatorDriver::new(MockGpio::new_output(), &slot, TimingParams::default());
        let mut delay = MockDelay::new(&stop, 6);

        block_on(driver.run(&mut delay, &stop));

        assert_eq!(
            driver.pin().history(),
            &[true, false, true, false, true, false]
        );
    }

    #[test]
    fn test_zero_control_sleeps_one_tick() {
        let slot = ControlSlot::new();
        let stop = StopSignal::new();
        let mut driver = ActuatorDriver::new(MockGpio::new_output(), &slot, TimingParams::default());
        let mut delay = MockDelay::new(&stop, 3);

        block_on(driver.run(&mut delay, &stop));

        assert_eq!(delay.sleeps(), &[10, 10, 10]);
    }

    #[test]
    fn test_delay_follows_published_control() {
        let slot = ControlSlot::new();
        let timing = TimingParams::default();
        let mut driver = ActuatorDriver::new(MockGpio::new_output(), &slot, timing);

        slot.store(ControlValue::MAX);
        assert_eq!(driver.cycle().delay_ticks, 50);

        slot.store(ControlValue::try_new(33.0).unwrap());
        assert_eq!(driver.cycle().delay_ticks, 16);
        assert_eq!(timing.ticks_to_ms(16), 160);
    }

    /// Output that publishes a control value when it is driven
    struct PublishingPin<'a> {
        slot: &'a ControlSlot,
        value: ControlValue,
        high: bool,
    }

    impl GpioInterface for PublishingPin<'_> {
        fn set_high(&mut self) -> crate::platform::Result<()> {
            self.high = true;
            self.slot.store(self.value);
            Ok(())
        }

        fn set_low(&mut self) -> crate::platform::Result<()> {
            self.high = false;
            self.slot.store(self.value);
            Ok(())
        }

        fn read(&self) -> bool {
            self.high
        }

        fn mode(&self) -> crate::platform::GpioMode {
            crate::platform::GpioMode::OutputPushPull
        }
    }

    #[test]
    fn test_delay_uses_control_published_after_drive() {
        let slot = ControlSlot::new();
        let pin = PublishingPin {
            slot: &slot,
            value: ControlValue::MAX,
            high: false,
        };
        let mut driver = ActuatorDriver::new(pin, &slot, TimingParams::default());

        let step = driver.cycle();
        assert_eq!(step.state, ActuatorState::On);
        assert!(driver.pin().read());
        assert_eq!(step.delay_ticks, 50);
    }

    #[test]
    fn test_write_failure_still_alternates() {
        let slot = ControlSlot::new();
        let mut driver = ActuatorDriver::new(MockGpio::new_input(), &slot, TimingParams::default());

        assert_eq!(driver.cycle().state, ActuatorState::On);
        assert_eq!(driver.cycle().state, ActuatorState::Off);
        assert!(driver.pin().history().is_empty());
    }
}
