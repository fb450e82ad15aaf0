//! The firmware's task set

use super::types::{TaskMetadata, TaskPeriod, TASK_PRIORITY};
use crate::parameters::TimingParams;

pub const BUTTON_TASK: &str = "button_task";
pub const DISTANCE_TASK: &str = "distance_sensor_task";
pub const ANALOG_TASK: &str = "adc_poll_task";
pub const ACTUATOR_TASK: &str = "blinker_task";
pub const MIRROR_TASK: &str = "mirror_task";

/// Number of periodic tasks
pub const TASK_COUNT: usize = 5;

/// Metadata of every periodic task, in spawn order
pub fn task_table(timing: &TimingParams) -> [TaskMetadata; TASK_COUNT] {
    [
        TaskMetadata {
            name: BUTTON_TASK,
            period: TaskPeriod::Fixed(timing.digital_period_ms),
            priority: TASK_PRIORITY,
        },
        TaskMetadata {
            name: ANALOG_TASK,
            period: TaskPeriod::Fixed(timing.analog_period_ms),
            priority: TASK_PRIORITY,
        },
        TaskMetadata {
            name: DISTANCE_TASK,
            period: TaskPeriod::Fixed(timing.digital_period_ms),
            priority: TASK_PRIORITY,
        },
        TaskMetadata {
            name: ACTUATOR_TASK,
            period: TaskPeriod::DataDependent,
            priority: TASK_PRIORITY,
        },
        TaskMetadata {
            name: MIRROR_TASK,
            period: TaskPeriod::Fixed(timing.mirror_period_ms),
            priority: TASK_PRIORITY,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_table_periods() {
        let timing = TimingParams {
            mirror_period_ms: 250,
            ..Default::default()
        };
        let table = task_table(&timing);

        assert_eq!(table[0].period, TaskPeriod::Fixed(100));
        assert_eq!(table[1].period, TaskPeriod::Fixed(1000));
        assert_eq!(table[2].period, TaskPeriod::Fixed(100));
        assert_eq!(table[3].period, TaskPeriod::DataDependent);
        assert_eq!(table[4].period, TaskPeriod::Fixed(250));
    }

    #[test]
    fn test_task_table_equal_priority_unique_names() {
        let table = task_table(&TimingParams::default());
        for (i, task) in table.iter().enumerate() {
            assert_eq!(task.priority, TASK_PRIORITY);
            for other in &table[i + 1..] {
                assert_ne!(task.name, other.name);
            }
        }
    }
}
