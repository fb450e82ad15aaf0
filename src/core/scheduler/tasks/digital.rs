//! Digital sampler task
//!
//! Polls one digital input and publishes its level every period. A change
//! relative to the previously published level is logged; steady levels are
//! published silently.

use embedded_hal_async::delay::DelayNs;
use pico_sense_core::sampler::{sample_digital, LevelChange};
use pico_sense_core::state::LevelSlot;
use pico_sense_core::stop::StopSignal;

use crate::platform::traits::GpioInterface;

/// Periodic sampler for one digital input
pub struct DigitalSampler<'a, P: GpioInterface> {
    name: &'static str,
    pin: P,
    slot: &'a LevelSlot,
    period_ms: u32,
}

impl<'a, P: GpioInterface> DigitalSampler<'a, P> {
    /// Create a sampler publishing `pin` into `slot`
    ///
    /// # Arguments
    ///
    /// * `name` - Input name used in log events (e.g. "button")
    /// * `pin` - Input pin, configured by the caller
    /// * `slot` - Shared slot this sampler is the only writer of
    /// * `period_ms` - Sampling period
    pub fn new(name: &'static str, pin: P, slot: &'a LevelSlot, period_ms: u32) -> Self {
        Self {
            name,
            pin,
            slot,
            period_ms,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Sample once and publish
    pub fn cycle(&mut self) -> Option<LevelChange> {
        let change = sample_digital(self.slot, self.pin.level());
        if let Some(change) = change {
            crate::log_info!(
                "{} level changed: {} -> {}",
                self.name,
                change.from.as_u8(),
                change.to.as_u8()
            );
        }
        change
    }

    /// Sample every period until `stop` is requested
    pub async fn run<D: DelayNs>(&mut self, delay: &mut D, stop: &StopSignal) {
        crate::log_info!("{} sampler started ({} ms)", self.name, self.period_ms);

        while !stop.is_stop_requested() {
            self.cycle();
            delay.delay_ms(self.period_ms).await;
        }

        crate::log_info!("{} sampler stopped", self.name);
    }
}
