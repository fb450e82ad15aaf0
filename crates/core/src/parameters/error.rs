//! Parameter error types

/// Errors from parsing or validating build-time parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Parameter string is empty
    Empty,
    /// Parameter string is not a decimal number
    NotANumber,
    /// A task period of zero milliseconds
    ZeroPeriod,
    /// An actuator tick of zero milliseconds
    ZeroTick,
}

impl ConfigError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::Empty => "empty parameter",
            ConfigError::NotANumber => "parameter is not a number",
            ConfigError::ZeroPeriod => "task period must be non-zero",
            ConfigError::ZeroTick => "actuator tick must be non-zero",
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
