//! OTP (one-time-programmable memory) interface trait

use crate::platform::Result;

/// Read access to ECC-protected OTP rows
///
/// Each row holds 16 data bits. An unprogrammed row reads as zero.
pub trait OtpInterface {
    /// Read one ECC-protected row
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Otp` if the row is out of range or unreadable.
    fn read_row(&mut self, row: u16) -> Result<u16>;
}
