#![cfg_attr(not(test), no_std)]

//! pico_sense - Concurrent sensor sampling firmware for Raspberry Pi Pico 2 W
//!
//! This library provides platform abstraction, the OTP calibration driver,
//! build-time parameter loading, and the periodic task loops that connect
//! the peripherals to the shared state store in `pico_sense_core`.

// Platform abstraction layer
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Logging and task loops
pub mod core;

// Build-time parameters
pub mod parameters;
