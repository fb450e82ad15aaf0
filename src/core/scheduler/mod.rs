//! Periodic task loops
//!
//! Every task is a struct owning its peripheral plus references into the
//! shared state store. A task exposes a synchronous `cycle()` holding one
//! period's work and an async `run()` that repeats the cycle until the stop
//! signal is raised:
//!
//! ```text
//! while !stop.is_stop_requested() {
//!     cycle();
//!     delay.delay_ms(period).await;
//! }
//! ```
//!
//! The loops are generic over the platform traits and
//! `embedded_hal_async::delay::DelayNs`, so the same code runs under the
//! embassy executor on target and under `block_on` with a mock delay on host.
//!
//! Task metadata lives in `pico_sense_core::scheduler`.

pub mod tasks;

use pico_sense_core::parameters::TimingParams;
use pico_sense_core::scheduler::{task_table, TaskPeriod};

/// Log the name, period and priority of every task
pub fn log_task_table(timing: &TimingParams) {
    crate::log_info!("Task table:");
    for task in task_table(timing).iter() {
        match task.period {
            TaskPeriod::Fixed(ms) => {
                crate::log_info!(
                    "  {}: every {} ms, priority {}",
                    task.name,
                    ms,
                    task.priority
                );
            }
            TaskPeriod::DataDependent => {
                crate::log_info!(
                    "  {}: data-dependent period, priority {}",
                    task.name,
                    task.priority
                );
            }
        }
    }
}
