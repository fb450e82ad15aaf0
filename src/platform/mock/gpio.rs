//! Mock GPIO implementation for testing

use core::cell::Cell;

use heapless::Vec;

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Maximum number of scripted input levels
pub const MAX_SCRIPT_LEN: usize = 32;

/// Maximum number of recorded output writes
pub const MAX_HISTORY_LEN: usize = 64;

/// Mock GPIO implementation
///
/// Input pins replay a scripted sequence of levels, one per `read()`, and
/// hold the last level once the script is exhausted. Output pins record
/// every write for test verification.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
    script: Vec<bool, MAX_SCRIPT_LEN>,
    cursor: Cell<usize>,
    history: Vec<bool, MAX_HISTORY_LEN>,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode, driven low
    pub fn new_output() -> Self {
        Self::with_mode(GpioMode::OutputPushPull)
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self::with_mode(GpioMode::Input)
    }

    /// Create an input that replays `levels`
    ///
    /// Levels beyond `MAX_SCRIPT_LEN` are dropped.
    pub fn with_script(levels: &[bool]) -> Self {
        let mut gpio = Self::new_input();
        for &level in levels.iter().take(MAX_SCRIPT_LEN) {
            let _ = gpio.script.push(level);
        }
        gpio
    }

    fn with_mode(mode: GpioMode) -> Self {
        Self {
            state: false,
            mode,
            script: Vec::new(),
            cursor: Cell::new(0),
            history: Vec::new(),
        }
    }

    /// Set the input state (for simulating input pin reads)
    ///
    /// Clears any remaining script.
    pub fn set_input_state(&mut self, high: bool) {
        self.script.clear();
        self.cursor.set(0);
        self.state = high;
    }

    /// Every level written to this pin, oldest first
    pub fn history(&self) -> &[bool] {
        &self.history
    }

    fn write(&mut self, high: bool) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.state = high;
        let _ = self.history.push(high);
        Ok(())
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.write(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.write(false)
    }

    fn read(&self) -> bool {
        if self.script.is_empty() {
            return self.state;
        }
        let index = self.cursor.get();
        let last = self.script.len() - 1;
        self.cursor.set(index + 1);
        self.script[index.min(last)]
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pico_sense_core::state::Level;

    #[test]
    fn test_mock_gpio_output() {
        let mut gpio = MockGpio::new_output();

        assert!(!gpio.read());

        gpio.set_high().unwrap();
        assert!(gpio.read());

        gpio.set_low().unwrap();
        assert!(!gpio.read());

        gpio.set_level(Level::High).unwrap();
        assert_eq!(gpio.history(), &[true, false, true]);
    }

    #[test]
    fn test_mock_gpio_input_rejects_writes() {
        let mut gpio = MockGpio::new_input();
        assert_eq!(
            gpio.set_high(),
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        );
        assert!(gpio.history().is_empty());
    }

    #[test]
    fn test_mock_gpio_script_holds_last_level() {
        let gpio = MockGpio::with_script(&[false, true]);
        assert!(!gpio.read());
        assert!(gpio.read());
        assert!(gpio.read());
        assert_eq!(gpio.level(), Level::High);
    }

    #[test]
    fn test_set_input_state_replaces_script() {
        let mut gpio = MockGpio::with_script(&[true, true]);
        gpio.set_input_state(false);
        assert!(!gpio.read());
    }
}
