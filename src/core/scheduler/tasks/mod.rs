//! Task loops
//!
//! - [`DigitalSampler`]: button and distance sensor inputs (100 ms)
//! - [`AnalogSampler`]: calibrated analog channel and control value (1000 ms)
//! - [`ActuatorDriver`]: blinking output with control-dependent delay
//! - [`OutputMirror`]: copies the distance level onto an output

pub mod actuator;
pub mod analog;
pub mod digital;
pub mod mirror;

pub use actuator::ActuatorDriver;
pub use analog::{calibrate_channel, AnalogSampler};
pub use digital::DigitalSampler;
pub use mirror::OutputMirror;
