//! Control value derivation
//!
//! The analog reading is normalized into a control value in `[0, 100]`:
//!
//! ```text
//! control = clamp(100 * millivolts / 4000, 0, 100)
//! ```
//!
//! The actuator sleeps `floor(control / 2)` ticks between toggles, never
//! less than the configured floor.

use core::fmt;

/// Millivolt reading that maps to a control value of 100
pub const CONTROL_FULL_SCALE_MV: u32 = 4000;

/// Upper bound of the control range
pub const CONTROL_MAX: f32 = 100.0;

/// Rejected control inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// NaN or infinite input
    NotFinite,
}

impl ControlError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ControlError::NotFinite => "control value is not finite",
        }
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized control quantity, always within `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ControlValue(f32);

impl ControlValue {
    pub const ZERO: Self = Self(0.0);
    pub const MAX: Self = Self(CONTROL_MAX);

    /// Derive the control value from a calibrated reading
    pub fn from_millivolts(mv: u32) -> Self {
        let value = 100.0 * mv as f32 / CONTROL_FULL_SCALE_MV as f32;
        Self(value.min(CONTROL_MAX))
    }

    /// Clamp an arbitrary value into range
    ///
    /// # Errors
    ///
    /// Returns `ControlError::NotFinite` for NaN or infinite input.
    pub fn try_new(value: f32) -> Result<Self, ControlError> {
        if !value.is_finite() {
            return Err(ControlError::NotFinite);
        }
        Ok(Self(value.clamp(0.0, CONTROL_MAX)))
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.0
    }

    /// Actuator delay in ticks: `floor(control / 2)`, at least `min_ticks`
    pub fn delay_ticks(&self, min_ticks: u32) -> u32 {
        // Range is [0, 100], so the truncating cast is floor
        let ticks = (self.0 / 2.0) as u32;
        ticks.max(min_ticks)
    }
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
