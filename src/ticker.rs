use crate::domain::TaskId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Event loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get the event loop poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// A recurring once-per-second tick source for a running task.
/// Tracks the instant it last fired so whole seconds are counted
/// exactly once and sub-second remainders carry over.
#[derive(Debug, Clone, Copy)]
struct TickSource {
    last_fire: Instant,
}

/// Registry of live tick sources keyed by task id.
///
/// Invariant maintained by the store: an id is present here iff that
/// task's timer is running. All start/stop/delete paths register and
/// cancel through this type, so the invariant cannot drift.
#[derive(Debug, Default)]
pub struct TickRegistry {
    sources: HashMap<TaskId, TickSource>,
}

impl TickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tick source for `id`, replacing any existing one
    pub fn register(&mut self, id: TaskId, now: Instant) {
        self.sources.insert(id, TickSource { last_fire: now });
    }

    /// Cancel the tick source for `id`. Cancelling an absent or
    /// already-cancelled source is a no-op; returns whether one existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.sources.remove(&id).is_some()
    }

    /// Cancel every live tick source
    pub fn cancel_all(&mut self) {
        self.sources.clear();
    }

    pub fn is_registered(&self, id: TaskId) -> bool {
        self.sources.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Fire the tick source for `id`: returns the number of whole seconds
    /// elapsed since it last fired and advances it by exactly that many,
    /// keeping any sub-second remainder. Returns 0 for an absent id.
    pub fn fire(&mut self, id: TaskId, now: Instant) -> u64 {
        let Some(source) = self.sources.get_mut(&id) else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(source.last_fire);
        let whole_seconds = elapsed.as_secs();
        source.last_fire += Duration::from_secs(whole_seconds);
        whole_seconds
    }
}
