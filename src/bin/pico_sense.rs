//! pico_sense firmware
//!
//! Samples a button, a distance sensor and a potentiometer on an analog
//! channel, blinks an LED at a rate set by the potentiometer, and mirrors
//! the distance sensor onto a second LED.
//!
//! # Hardware
//!
//! Raspberry Pi Pico 2 W
//!
//! | Signal           | Pin    |
//! | ---------------- | ------ |
//! | Mirror LED       | GPIO1  |
//! | Button           | GPIO2  |
//! | Distance sensor  | GPIO4  |
//! | Blinking LED     | GPIO13 |
//! | Potentiometer    | GPIO26 (ADC0) |
//!
//! # Usage
//!
//! ```bash
//! # Optional build-time parameters
//! export PICO_SENSE_MIRROR_PERIOD_MS=500
//! export PICO_SENSE_TICK_MS=10
//!
//! cargo build --release --target thumbv8m.main-none-eabihf --features pico2_w
//! probe-rs run --chip RP2350 target/thumbv8m.main-none-eabihf/release/pico_sense
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use pico_sense::core::scheduler::log_task_table;
use pico_sense::core::scheduler::tasks::{calibrate_channel, OutputMirror};
use pico_sense::devices::otp_calibration::OtpCalibration;
use pico_sense::parameters::timing_from_build_env;
use pico_sense::platform::rp2350::tasks::{
    actuator_task, analog_sampler_task, digital_sampler_task,
};
use pico_sense::platform::rp2350::{Rp2350Adc, Rp2350Input, Rp2350Otp, Rp2350Output};
use pico_sense_core::adc::{AdcUnit, Attenuation};
use pico_sense_core::calibration::CalibrationScheme;
use pico_sense_core::state::SharedStateStore;
use pico_sense_core::stop::StopSignal;

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Values published between tasks
static STATE: SharedStateStore = SharedStateStore::new();

/// Never raised in production
static STOP: StopSignal = StopSignal::new();

/// Attenuation of the potentiometer channel
const ADC_ATTENUATION: Attenuation = Attenuation::Db11;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    pico_sense::log_info!("pico_sense starting");

    let timing = timing_from_build_env();
    if let Err(e) = timing.validate() {
        panic!("Invalid timing configuration: {}", e.as_str());
    }

    // =========================================================================
    // Peripheral configuration
    // =========================================================================

    pico_sense::log_info!("Configuring mirror LED");
    let mirror_led = Rp2350Output::new(Output::new(p.PIN_1, Level::Low));
    pico_sense::log_info!("Configured mirror LED");

    pico_sense::log_info!("Configuring blinking LED");
    let blink_led = Rp2350Output::new(Output::new(p.PIN_13, Level::Low));
    pico_sense::log_info!("Configured blinking LED");

    pico_sense::log_info!("Configuring button");
    let button = Rp2350Input::new(Input::new(p.PIN_2, Pull::None), Pull::None);
    pico_sense::log_info!("Configured button");

    pico_sense::log_info!("Configuring distance sensor");
    let distance = Rp2350Input::new(Input::new(p.PIN_4, Pull::None), Pull::None);
    pico_sense::log_info!("Configured distance sensor");

    pico_sense::log_info!("Configuring ADC channel (GPIO 26)");
    let adc = Rp2350Adc::from_parts(
        Adc::new_blocking(p.ADC, AdcConfig::default()),
        Channel::new_pin(p.PIN_26, Pull::None),
    );
    pico_sense::log_info!("Configured ADC channel");

    // =========================================================================
    // Calibration
    // =========================================================================

    let mut otp = OtpCalibration::new(Rp2350Otp::new());
    let calibration = calibrate_channel(
        &mut otp,
        AdcUnit::Unit1,
        ADC_ATTENUATION,
        CalibrationScheme::TwoPoint,
    );

    // =========================================================================
    // Tasks
    // =========================================================================

    log_task_table(&timing);

    pico_sense::log_info!("Creating button task");
    if spawner
        .spawn(digital_sampler_task(
            "button",
            button,
            &STATE.button,
            timing.digital_period_ms,
            &STOP,
        ))
        .is_err()
    {
        panic!("Failed to spawn button task");
    }

    pico_sense::log_info!("Creating ADC task");
    if spawner
        .spawn(analog_sampler_task(
            adc,
            calibration,
            &STATE.control,
            timing.analog_period_ms,
            &STOP,
        ))
        .is_err()
    {
        panic!("Failed to spawn ADC task");
    }

    pico_sense::log_info!("Creating distance sensor task");
    if spawner
        .spawn(digital_sampler_task(
            "distance",
            distance,
            &STATE.distance,
            timing.digital_period_ms,
            &STOP,
        ))
        .is_err()
    {
        panic!("Failed to spawn distance sensor task");
    }

    pico_sense::log_info!("Creating blink task");
    if spawner
        .spawn(actuator_task(blink_led, &STATE.control, timing, &STOP))
        .is_err()
    {
        panic!("Failed to spawn blink task");
    }

    // The main task mirrors the distance sensor for the life of the firmware
    let mut mirror = OutputMirror::new(mirror_led, &STATE.distance, timing.mirror_period_ms);
    mirror.run(&mut Delay, &STOP).await;
}
