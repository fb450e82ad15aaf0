//! Actuator on/off state machine
//!
//! Two states, `Off` and `On`, with an unconditional transition every cycle.
//! The driver starts in `Off` (the output is configured low), so the first
//! cycle drives the output high.

use crate::control::ControlValue;
use crate::state::Level;

/// Output state of the blinking actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActuatorState {
    #[default]
    Off,
    On,
}

impl ActuatorState {
    #[inline]
    pub const fn is_on(&self) -> bool {
        matches!(self, ActuatorState::On)
    }

    /// Output level driving this state
    #[inline]
    pub const fn level(&self) -> Level {
        match self {
            ActuatorState::Off => Level::Low,
            ActuatorState::On => Level::High,
        }
    }

    /// The other state
    #[inline]
    pub const fn toggled(&self) -> Self {
        match self {
            ActuatorState::Off => ActuatorState::On,
            ActuatorState::On => ActuatorState::Off,
        }
    }
}

/// Work for one actuator cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorStep {
    /// State to drive onto the output
    pub state: ActuatorState,
    /// Sleep before the next cycle, in ticks
    pub delay_ticks: u32,
}

/// Actuator state owned by the driver task
#[derive(Debug)]
pub struct Actuator {
    state: ActuatorState,
    min_delay_ticks: u32,
}

impl Actuator {
    /// Driver starting in `Off`
    pub fn new(min_delay_ticks: u32) -> Self {
        Self {
            state: ActuatorState::Off,
            min_delay_ticks,
        }
    }

    pub fn state(&self) -> ActuatorState {
        self.state
    }

    /// Flip to the other state and return it
    pub fn toggle(&mut self) -> ActuatorState {
        self.state = self.state.toggled();
        self.state
    }

    /// Sleep before the next cycle for `control`, in ticks
    pub fn delay_ticks(&self, control: ControlValue) -> u32 {
        control.delay_ticks(self.min_delay_ticks)
    }

    /// Advance one cycle using the latest published control value
    pub fn step(&mut self, control: ControlValue) -> ActuatorStep {
        ActuatorStep {
            state: self.toggle(),
            delay_ticks: self.delay_ticks(control),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_off() {
        assert_eq!(Actuator::new(1).state(), ActuatorState::Off);
        assert_eq!(ActuatorState::default(), ActuatorState::Off);
    }

    #[test]
    fn test_state_alternates_regardless_of_control() {
        let mut actuator = Actuator::new(1);
        let controls = [0.0, 100.0, 3.0, 3.0, 57.5, 0.0, 99.9];

        let mut expected = ActuatorState::On;
        for value in controls {
            let step = actuator.step(ControlValue::try_new(value).unwrap());
            assert_eq!(step.state, expected);
            assert_eq!(actuator.state(), expected);
            expected = expected.toggled();
        }
    }

    #[test]
    fn test_step_delay_uses_floor() {
        let mut actuator = Actuator::new(1);
        assert_eq!(actuator.step(ControlValue::ZERO).delay_ticks, 1);
        assert_eq!(actuator.step(ControlValue::MAX).delay_ticks, 50);
    }

    #[test]
    fn test_toggle_then_delay() {
        let mut actuator = Actuator::new(1);
        assert_eq!(actuator.toggle(), ActuatorState::On);
        assert_eq!(actuator.toggle(), ActuatorState::Off);
        assert_eq!(actuator.delay_ticks(ControlValue::ZERO), 1);
        assert_eq!(actuator.state(), ActuatorState::Off);
    }

    #[test]
    fn test_state_level() {
        assert_eq!(ActuatorState::Off.level(), Level::Low);
        assert_eq!(ActuatorState::On.level(), Level::High);
    }
}
