//! ADC calibration data stored in OTP
//!
//! Factory characterization of the analog front-end is programmed into
//! ECC-protected OTP user rows, one block per attenuation setting:
//!
//! ```text
//! row base + 0   scheme flags (0 = not programmed)
//!          + 1   low reference raw code
//!          + 2   low reference millivolts
//!          + 3   high reference raw code
//!          + 4   high reference millivolts
//!          + 5   reference voltage (mV)
//!
//! base = 0x0c0 + 8 * attenuation index
//! ```
//!
//! Flag bit 0 marks two-point data, bit 1 marks reference voltage data.
//! Only ADC unit 1 exists on RP2350.
//!
//! # Example
//!
//! ```ignore
//! use pico_sense::devices::otp_calibration::OtpCalibration;
//! use pico_sense::platform::mock::MockOtp;
//!
//! let mut source = OtpCalibration::new(MockOtp::new());
//! let calibration = calibrate_channel(&mut source, AdcUnit::Unit1, Attenuation::Db11, CalibrationScheme::TwoPoint);
//! ```

use pico_sense_core::adc::{AdcUnit, Attenuation};
use pico_sense_core::calibration::{
    CalibrationData, CalibrationError, CalibrationScheme, CalibrationSource, ReferencePoint,
};

use crate::platform::{error::OtpError, traits::OtpInterface, PlatformError};

/// First row of the calibration area
pub const CALIBRATION_BASE_ROW: u16 = 0x0c0;

/// Rows reserved per attenuation block
pub const ROWS_PER_ATTENUATION: u16 = 8;

/// Scheme flag: two-point data present
pub const FLAG_TWO_POINT: u16 = 1 << 0;

/// Scheme flag: reference voltage present
pub const FLAG_VREF: u16 = 1 << 1;

// Row offsets within a block
const ROW_FLAGS: u16 = 0;
const ROW_LOW_RAW: u16 = 1;
const ROW_LOW_MV: u16 = 2;
const ROW_HIGH_RAW: u16 = 3;
const ROW_HIGH_MV: u16 = 4;
const ROW_VREF_MV: u16 = 5;

/// First row of the block for `attenuation`
pub const fn block_base(attenuation: Attenuation) -> u16 {
    CALIBRATION_BASE_ROW + ROWS_PER_ATTENUATION * attenuation.index() as u16
}

const fn scheme_flag(scheme: CalibrationScheme) -> u16 {
    match scheme {
        CalibrationScheme::TwoPoint => FLAG_TWO_POINT,
        CalibrationScheme::Vref => FLAG_VREF,
    }
}

fn map_otp_error(e: PlatformError) -> CalibrationError {
    match e {
        PlatformError::Otp(OtpError::InvalidRow) => CalibrationError::InvalidArgument,
        _ => CalibrationError::ReadFailed,
    }
}

/// Calibration source backed by OTP rows
pub struct OtpCalibration<O: OtpInterface> {
    otp: O,
}

impl<O: OtpInterface> OtpCalibration<O> {
    pub fn new(otp: O) -> Self {
        Self { otp }
    }

    fn row(&mut self, base: u16, offset: u16) -> Result<u16, CalibrationError> {
        self.otp.read_row(base + offset).map_err(map_otp_error)
    }
}

impl<O: OtpInterface> CalibrationSource for OtpCalibration<O> {
    fn read_calibration(
        &mut self,
        unit: AdcUnit,
        attenuation: Attenuation,
        scheme: CalibrationScheme,
    ) -> Result<CalibrationData, CalibrationError> {
        if unit != AdcUnit::Unit1 {
            return Err(CalibrationError::NotSupported);
        }

        let base = block_base(attenuation);
        let flags = self.row(base, ROW_FLAGS)?;
        if flags == 0 {
            return Err(CalibrationError::NotBurnt);
        }
        if flags & scheme_flag(scheme) == 0 {
            return Err(CalibrationError::NotSupported);
        }

        match scheme {
            CalibrationScheme::TwoPoint => Ok(CalibrationData::TwoPoint {
                low: ReferencePoint {
                    raw: self.row(base, ROW_LOW_RAW)?,
                    mv: self.row(base, ROW_LOW_MV)?,
                },
                high: ReferencePoint {
                    raw: self.row(base, ROW_HIGH_RAW)?,
                    mv: self.row(base, ROW_HIGH_MV)?,
                },
            }),
            CalibrationScheme::Vref => Ok(CalibrationData::Vref {
                vref_mv: self.row(base, ROW_VREF_MV)?,
            }),
        }
    }
}
