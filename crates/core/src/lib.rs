//! pico_sense_core - Pure no_std logic for the pico_sense firmware
//!
//! This crate contains platform-agnostic algorithms and types
//! that can be tested on host without any feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Calibration data is injected via [`calibration::CalibrationSource`]
//!
//! # Modules
//!
//! - [`adc`]: ADC unit, attenuation and raw code types
//! - [`calibration`]: Calibration scheme detection and raw code conversion
//! - [`control`]: Control value derivation and actuator delay computation
//! - [`state`]: Cross-task shared state store (atomic slots)
//! - [`sampler`]: Per-cycle logic of the digital and analog samplers
//! - [`actuator`]: Actuator on/off state machine
//! - [`stop`]: Stop signal for periodic task loops
//! - [`parameters`]: Timing parameters and their validation
//! - [`scheduler`]: Task metadata

#![cfg_attr(not(test), no_std)]

pub mod actuator;
pub mod adc;
pub mod calibration;
pub mod control;
pub mod parameters;
pub mod sampler;
pub mod scheduler;
pub mod state;
pub mod stop;
