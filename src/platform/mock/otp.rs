//! Mock OTP implementation for testing

use crate::platform::{
    error::{OtpError, PlatformError},
    traits::OtpInterface,
    Result,
};

/// Number of rows modelled by the mock (covers the calibration area)
pub const MOCK_OTP_ROWS: usize = 0x100;

/// Mock OTP array
///
/// All rows start unprogrammed (zero).
#[derive(Debug)]
pub struct MockOtp {
    rows: [u16; MOCK_OTP_ROWS],
    fail_reads: bool,
}

impl MockOtp {
    pub fn new() -> Self {
        Self {
            rows: [0; MOCK_OTP_ROWS],
            fail_reads: false,
        }
    }

    /// Program consecutive rows starting at `start`
    pub fn program(&mut self, start: u16, values: &[u16]) {
        for (offset, &value) in values.iter().enumerate() {
            if let Some(row) = self.rows.get_mut(start as usize + offset) {
                *row = value;
            }
        }
    }

    /// Make every subsequent read fail
    pub fn fail_reads(&mut self) {
        self.fail_reads = true;
    }
}

impl Default for MockOtp {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpInterface for MockOtp {
    fn read_row(&mut self, row: u16) -> Result<u16> {
        if self.fail_reads {
            return Err(PlatformError::Otp(OtpError::ReadFailed));
        }
        self.rows
            .get(row as usize)
            .copied()
            .ok_or(PlatformError::Otp(OtpError::InvalidRow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_otp_program_and_read() {
        let mut otp = MockOtp::new();
        otp.program(0xc0, &[1, 2, 3]);
        assert_eq!(otp.read_row(0xc0), Ok(1));
        assert_eq!(otp.read_row(0xc2), Ok(3));
        assert_eq!(otp.read_row(0xc3), Ok(0));
    }

    #[test]
    fn test_mock_otp_errors() {
        let mut otp = MockOtp::new();
        assert_eq!(
            otp.read_row(MOCK_OTP_ROWS as u16),
            Err(PlatformError::Otp(OtpError::InvalidRow))
        );
        otp.fail_reads();
        assert_eq!(
            otp.read_row(0),
            Err(PlatformError::Otp(OtpError::ReadFailed))
        );
    }
}
