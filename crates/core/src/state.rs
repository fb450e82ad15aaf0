//! Cross-task shared state store
//!
//! Every published quantity lives in its own slot. A slot has exactly one
//! producer task and any number of consumers.
//!
//! # Visibility contract
//!
//! Slots are single-word atomics. Stores use `Release`, loads use `Acquire`,
//! so a reader never observes a torn value and, for a single slot, never
//! observes a value older than one it has already seen. Readers may still
//! observe a stale value; there is no ordering between different slots.
//!
//! The control value is an `f32` kept as its bit pattern in an `AtomicU32`.

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use crate::control::ControlValue;

/// Digital input level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    #[inline]
    pub const fn is_high(&self) -> bool {
        matches!(self, Level::High)
    }

    /// Numeric level (0 or 1)
    #[inline]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    #[inline]
    const fn from_u8(value: u8) -> Self {
        if value == 0 {
            Level::Low
        } else {
            Level::High
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Published digital level
#[derive(Debug)]
pub struct LevelSlot {
    value: AtomicU8,
}

impl LevelSlot {
    pub const fn new(initial: Level) -> Self {
        Self {
            value: AtomicU8::new(initial.as_u8()),
        }
    }

    #[inline]
    pub fn load(&self) -> Level {
        Level::from_u8(self.value.load(Ordering::Acquire))
    }

    #[inline]
    pub fn store(&self, level: Level) {
        self.value.store(level.as_u8(), Ordering::Release);
    }
}

/// Published control value
#[derive(Debug)]
pub struct ControlSlot {
    bits: AtomicU32,
}

impl ControlSlot {
    /// Slot holding zero
    ///
    /// `0.0_f32` is the all-zero bit pattern, which keeps this a const fn.
    pub const fn new() -> Self {
        Self {
            bits: AtomicU32::new(0),
        }
    }

    #[inline]
    pub fn load(&self) -> ControlValue {
        let raw = f32::from_bits(self.bits.load(Ordering::Acquire));
        // Only ControlValue bit patterns are ever stored
        ControlValue::try_new(raw).unwrap_or(ControlValue::ZERO)
    }

    #[inline]
    pub fn store(&self, value: ControlValue) {
        self.bits.store(value.get().to_bits(), Ordering::Release);
    }
}

impl Default for ControlSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// All values shared between the sampler and output tasks
///
/// Suitable for a `static`: every slot is const-constructible.
#[derive(Debug)]
pub struct SharedStateStore {
    /// Written by the button sampler
    pub button: LevelSlot,
    /// Written by the distance sensor sampler, read by the output mirror
    pub distance: LevelSlot,
    /// Written by the analog sampler, read by the actuator driver
    pub control: ControlSlot,
}

impl SharedStateStore {
    /// Store with every slot at its default (low levels, zero control)
    pub const fn new() -> Self {
        Self {
            button: LevelSlot::new(Level::Low),
            distance: LevelSlot::new(Level::Low),
            control: ControlSlot::new(),
        }
    }
}

impl Default for SharedStateStore {
    fn default() -> Self {
        Self::new()
    }
}
