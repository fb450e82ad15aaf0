//! Core firmware infrastructure
//!
//! This module contains the logging macros and the periodic task loops that
//! move data between the peripherals and the shared state store.

pub mod logging;
pub mod scheduler;
