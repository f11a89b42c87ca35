pub mod enums;
pub mod summary;
pub mod task;
pub mod time;

pub use enums::{TaskStatus, UiMode};
pub use summary::{compute_summary, Summary};
pub use task::{Backfill, NewTask, Task, TaskEdit, TaskId};
