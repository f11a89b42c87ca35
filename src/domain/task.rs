use super::enums::TaskStatus;
use super::time::format_hm;

/// Task ids are assigned from a monotonic counter owned by the store
pub type TaskId = u64;

/// A unit of trackable work with a status and accumulated time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique, monotonically assigned id
    pub id: TaskId,
    /// Task name
    pub name: String,
    /// Current status
    pub status: TaskStatus,
    /// Whether this was entered as already-completed backfilled work
    pub is_old: bool,
    /// Total tracked time in seconds
    pub elapsed_seconds: u64,
    /// True iff a live tick source is registered for this task
    pub timer_running: bool,
}

impl Task {
    /// Elapsed time formatted as "Xh Ym" for the time column
    pub fn elapsed_formatted(&self) -> String {
        format_hm(self.elapsed_seconds)
    }
}

/// Backfilled time supplied directly at creation instead of measured live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backfill {
    pub hours: u64,
    pub minutes: u64,
}

/// Input for creating a task
#[derive(Debug, Clone)]
pub struct NewTask {
    pub name: String,
    /// Present when the task is entered as already completed
    pub backfill: Option<Backfill>,
}

impl NewTask {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backfill: None,
        }
    }

    pub fn backfilled(name: impl Into<String>, hours: u64, minutes: u64) -> Self {
        Self {
            name: name.into(),
            backfill: Some(Backfill { hours, minutes }),
        }
    }
}

/// Input for editing a task. Name and status overwrite when provided;
/// elapsed time is always recomputed from the hours/minutes pair.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub name: Option<String>,
    pub status: Option<TaskStatus>,
    pub hours: Option<u64>,
    pub minutes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_formatted() {
        let task = Task {
            id: 1,
            name: "Write report".to_string(),
            status: TaskStatus::Completed,
            is_old: true,
            elapsed_seconds: 5400,
            timer_running: false,
        };
        assert_eq!(task.elapsed_formatted(), "1h 30m");
    }

    #[test]
    fn test_new_task_constructors() {
        let plain = NewTask::named("a");
        assert!(plain.backfill.is_none());

        let old = NewTask::backfilled("b", 1, 30);
        assert_eq!(old.backfill, Some(Backfill { hours: 1, minutes: 30 }));
    }
}
