//! RP2350 OTP implementation

use crate::platform::{
    error::{OtpError, PlatformError},
    traits::OtpInterface,
    Result,
};

/// ECC rows in the RP2350 OTP array
pub const OTP_ROW_COUNT: u16 = 4096;

/// RP2350 OTP reader using `embassy_rp::otp`
#[derive(Default)]
pub struct Rp2350Otp;

impl Rp2350Otp {
    pub fn new() -> Self {
        Self
    }
}

impl OtpInterface for Rp2350Otp {
    fn read_row(&mut self, row: u16) -> Result<u16> {
        if row >= OTP_ROW_COUNT {
            return Err(PlatformError::Otp(OtpError::InvalidRow));
        }
        embassy_rp::otp::read_ecc_word(row as usize)
            .map_err(|_| PlatformError::Otp(OtpError::ReadFailed))
    }
}
