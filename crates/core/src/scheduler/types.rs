//! Core types for the periodic task set
//!
//! Task metadata is fixed at compile time and only used for startup
//! reporting; scheduling itself is done by the embassy executor.

/// How often a task runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPeriod {
    /// Fixed period in milliseconds
    Fixed(u32),
    /// Period recomputed every cycle from shared state
    DataDependent,
}

impl TaskPeriod {
    /// Fixed period in milliseconds, if any
    #[inline]
    pub const fn period_ms(&self) -> Option<u32> {
        match self {
            TaskPeriod::Fixed(ms) => Some(*ms),
            TaskPeriod::DataDependent => None,
        }
    }

    /// Target execution rate in millihertz (0 for data-dependent tasks)
    #[inline]
    pub const fn rate_mhz(&self) -> u32 {
        match self {
            TaskPeriod::Fixed(0) | TaskPeriod::DataDependent => 0,
            TaskPeriod::Fixed(ms) => 1_000_000 / *ms,
        }
    }
}

/// Task metadata registered at startup
#[derive(Debug, Clone, Copy)]
pub struct TaskMetadata {
    /// Human-readable task name for logging
    pub name: &'static str,

    /// Execution period
    pub period: TaskPeriod,

    /// Priority hint (0-255, higher = more important)
    ///
    /// Note: Embassy's thread-mode executor does not enforce priorities.
    /// All tasks share one priority, so this is informational.
    pub priority: u8,
}

/// Priority shared by every task
pub const TASK_PRIORITY: u8 = 10;
