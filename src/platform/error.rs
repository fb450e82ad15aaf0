//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// GPIO operation failed
    Gpio(GpioError),
    /// ADC operation failed
    Adc(AdcError),
    /// OTP operation failed
    Otp(OtpError),
    /// Platform initialization failed
    InitializationFailed,
    /// Invalid configuration provided
    InvalidConfig,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Invalid mode for operation
    InvalidMode,
    /// Hardware error
    HardwareError,
}

/// ADC-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcError {
    /// Conversion did not complete
    ConversionFailed,
    /// Channel not available
    ChannelUnavailable,
}

/// OTP-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    /// Row outside the OTP array
    InvalidRow,
    /// Row could not be read (locked or uncorrectable ECC error)
    ReadFailed,
}

impl PlatformError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlatformError::Gpio(GpioError::InvalidMode) => "GPIO error: invalid mode",
            PlatformError::Gpio(GpioError::HardwareError) => "GPIO error: hardware error",
            PlatformError::Adc(AdcError::ConversionFailed) => "ADC error: conversion failed",
            PlatformError::Adc(AdcError::ChannelUnavailable) => "ADC error: channel unavailable",
            PlatformError::Otp(OtpError::InvalidRow) => "OTP error: invalid row",
            PlatformError::Otp(OtpError::ReadFailed) => "OTP error: read failed",
            PlatformError::InitializationFailed => "Platform initialization failed",
            PlatformError::InvalidConfig => "Invalid configuration",
        }
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GpioError> for PlatformError {
    fn from(e: GpioError) -> Self {
        PlatformError::Gpio(e)
    }
}

impl From<AdcError> for PlatformError {
    fn from(e: AdcError) -> Self {
        PlatformError::Adc(e)
    }
}

impl From<OtpError> for PlatformError {
    fn from(e: OtpError) -> Self {
        PlatformError::Otp(e)
    }
}

impl From<pico_sense_core::parameters::ConfigError> for PlatformError {
    fn from(_: pico_sense_core::parameters::ConfigError) -> Self {
        PlatformError::InvalidConfig
    }
}
