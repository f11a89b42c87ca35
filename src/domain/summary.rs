use super::enums::TaskStatus;
use super::task::Task;
use super::time::to_hours_minutes;

/// Read-only aggregate counts/time derived from the current task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub completed_count: usize,
    pub in_progress_count: usize,
    /// Sum of elapsed seconds over Completed and In Progress tasks
    pub total_tracked_seconds: u64,
    pub total_hours: u64,
    pub remaining_minutes: u64,
}

/// Compute the summary projection. Recomputed on every call, no caching.
/// Not Started tasks contribute 0 even if they carry residual elapsed time.
pub fn compute_summary(tasks: &[Task]) -> Summary {
    let completed_count = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let in_progress_count = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::InProgress)
        .count();

    let total_tracked_seconds: u64 = tasks
        .iter()
        .filter(|t| t.status.is_tracked())
        .map(|t| t.elapsed_seconds)
        .sum();

    let (total_hours, remaining_minutes) = to_hours_minutes(total_tracked_seconds);

    Summary {
        completed_count,
        in_progress_count,
        total_tracked_seconds,
        total_hours,
        remaining_minutes,
    }
}
