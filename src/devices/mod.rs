//! Device drivers
//!
//! Drivers built on the platform abstraction traits.
//!
//! ## Modules
//!
//! - `otp_calibration`: ADC calibration data read from OTP rows

pub mod otp_calibration;
