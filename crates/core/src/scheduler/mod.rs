//! Task set description
//!
//! # Example
//!
//! ```rust
//! use pico_sense_core::scheduler::{TaskMetadata, TaskPeriod, TASK_PRIORITY};
//!
//! let metadata = TaskMetadata {
//!     name: "button_task",
//!     period: TaskPeriod::Fixed(100),
//!     priority: TASK_PRIORITY,
//! };
//!
//! assert_eq!(metadata.period.period_ms(), Some(100));
//! ```

pub mod table;
pub mod types;

pub use table::*;
pub use types::*;
