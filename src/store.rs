use crate::domain::time::to_seconds;
use crate::domain::{compute_summary, NewTask, Summary, Task, TaskEdit, TaskId, TaskStatus};
use crate::ticker::TickRegistry;
use std::time::Instant;
use thiserror::Error;

/// Validation failures at task creation. Messages are the user-facing
/// alert text shown by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddTaskError {
    #[error("Please enter a task name")]
    EmptyName,
    #[error("Minutes must be between 0 and 59")]
    MinutesOutOfRange,
    #[error("Hours must be 0 or more")]
    InvalidHours,
}

/// In-memory task collection plus the per-task timer controller.
///
/// Ids come from a monotonic counter independent of collection contents,
/// so deletions and reordering never break uniqueness.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
    timers: TickRegistry,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            timers: TickRegistry::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Add a task. Rejects an empty (trimmed) name and, for backfilled
    /// tasks, minutes outside [0,59]. A failed add consumes no id.
    pub fn add(&mut self, new: NewTask) -> Result<TaskId, AddTaskError> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(AddTaskError::EmptyName);
        }
        if let Some(backfill) = &new.backfill {
            if backfill.minutes > 59 {
                return Err(AddTaskError::MinutesOutOfRange);
            }
        }

        let id = self.next_id;
        self.next_id += 1;

        let task = match new.backfill {
            Some(backfill) => Task {
                id,
                name: name.to_string(),
                status: TaskStatus::Completed,
                is_old: true,
                elapsed_seconds: to_seconds(backfill.hours, backfill.minutes),
                timer_running: false,
            },
            None => Task {
                id,
                name: name.to_string(),
                status: TaskStatus::NotStarted,
                is_old: false,
                elapsed_seconds: 0,
                timer_running: false,
            },
        };
        self.tasks.push(task);
        Ok(id)
    }

    /// Toggle the timer for `id`. Unknown ids are a silent no-op.
    pub fn toggle_timer(&mut self, id: TaskId) {
        self.toggle_timer_at(id, Instant::now());
    }

    /// Toggle at an explicit instant. The decision is taken from the task's
    /// current running flag and applied in the same step: stopping cancels
    /// the tick source before any field changes, so a stale tick can never
    /// increment a stopped task.
    pub fn toggle_timer_at(&mut self, id: TaskId, now: Instant) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };

        if task.timer_running {
            self.timers.cancel(id);
            task.timer_running = false;
            task.status = TaskStatus::Completed;
        } else {
            self.timers.register(id, now);
            task.timer_running = true;
            task.status = TaskStatus::InProgress;
        }
    }

    /// Edit a task. Name and status overwrite when provided; elapsed time
    /// is recomputed (not incremented) from the supplied hours/minutes,
    /// with missing values treated as 0. The running flag and tick source
    /// are left untouched. Unknown ids are a no-op.
    pub fn edit(&mut self, id: TaskId, edit: TaskEdit) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };

        if let Some(name) = edit.name {
            task.name = name;
        }
        if let Some(status) = edit.status {
            task.status = status;
        }
        task.elapsed_seconds = to_seconds(edit.hours.unwrap_or(0), edit.minutes.unwrap_or(0));
    }

    /// Delete a task, cancelling its tick source first. Unknown ids and
    /// repeated deletes are a no-op.
    pub fn delete(&mut self, id: TaskId) {
        self.timers.cancel(id);
        self.tasks.retain(|t| t.id != id);
    }

    /// Advance all running timers to now
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance all running timers to an explicit instant, incrementing
    /// elapsed time by exactly 1 per whole second since each tick source
    /// last fired
    pub fn tick_at(&mut self, now: Instant) {
        for task in &mut self.tasks {
            if !task.timer_running {
                continue;
            }
            task.elapsed_seconds += self.timers.fire(task.id, now);
        }
    }

    /// Tear down the store: cancel every live tick source exactly once and
    /// clear the running flags. Statuses are left as they are. Safe to call
    /// repeatedly.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
        for task in &mut self.tasks {
            task.timer_running = false;
        }
    }

    /// Number of live tick sources (equals the number of running tasks)
    pub fn running_count(&self) -> usize {
        self.timers.len()
    }

    /// Pure summary projection over the current collection
    pub fn summary(&self) -> Summary {
        compute_summary(&self.tasks)
    }
}
