//! Embassy task wrappers
//!
//! `#[embassy_executor::task]` functions cannot be generic, so each task loop
//! is instantiated here with the RP2350 peripheral types. Every task shares
//! the firmware's static state store and stop signal.

use embassy_time::Delay;
use pico_sense_core::calibration::Calibration;
use pico_sense_core::parameters::TimingParams;
use pico_sense_core::state::{ControlSlot, LevelSlot};
use pico_sense_core::stop::StopSignal;

use super::{Rp2350Adc, Rp2350Input, Rp2350Output};
use crate::core::scheduler::tasks::{ActuatorDriver, AnalogSampler, DigitalSampler};

/// Digital sampler task (button and distance sensor share the pool)
#[embassy_executor::task(pool_size = 2)]
pub async fn digital_sampler_task(
    name: &'static str,
    pin: Rp2350Input,
    slot: &'static LevelSlot,
    period_ms: u32,
    stop: &'static StopSignal,
) {
    let mut sampler = DigitalSampler::new(name, pin, slot, period_ms);
    sampler.run(&mut Delay, stop).await;
}

/// Analog sampler task
#[embassy_executor::task]
pub async fn analog_sampler_task(
    adc: Rp2350Adc,
    calibration: Calibration,
    slot: &'static ControlSlot,
    period_ms: u32,
    stop: &'static StopSignal,
) {
    let mut sampler = AnalogSampler::new(adc, calibration, slot, period_ms);
    sampler.run(&mut Delay, stop).await;
}

/// Actuator driver task
#[embassy_executor::task]
pub async fn actuator_task(
    pin: Rp2350Output,
    slot: &'static ControlSlot,
    timing: TimingParams,
    stop: &'static StopSignal,
) {
    let mut driver = ActuatorDriver::new(pin, slot, timing);
    driver.run(&mut Delay, stop).await;
}
