//! Output mirror task
//!
//! Copies the published distance sensor level onto an output once per
//! period. No filtering or debounce.

use embedded_hal_async::delay::DelayNs;
use pico_sense_core::state::{Level, LevelSlot};
use pico_sense_core::stop::StopSignal;

use crate::platform::traits::GpioInterface;

/// Output following a published level
pub struct OutputMirror<'a, P: GpioInterface> {
    pin: P,
    slot: &'a LevelSlot,
    period_ms: u32,
}

impl<'a, P: GpioInterface> OutputMirror<'a, P> {
    pub fn new(pin: P, slot: &'a LevelSlot, period_ms: u32) -> Self {
        Self {
            pin,
            slot,
            period_ms,
        }
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Drive the output to the latest published level
    pub fn cycle(&mut self) -> Level {
        let level = self.slot.load();
        if let Err(e) = self.pin.set_level(level) {
            crate::log_warn!("Mirror write failed: {}", e.as_str());
        }
        level
    }

    /// Mirror every period until `stop` is requested
    pub async fn run<D: DelayNs>(&mut self, delay: &mut D, stop: &StopSignal) {
        crate::log_info!("Output mirror started ({} ms)", self.period_ms);

        while !stop.is_stop_requested() {
            self.cycle();
            delay.delay_ms(self.period_ms).await;
        }

        crate::log_info!("Output mirror stopped");
    }
}
