/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Parse status from its display label
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Not Started" => Some(Self::NotStarted),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Display label as shown in the status column and edit form
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Next status in the edit form's cycle order
    pub fn next(&self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::NotStarted,
        }
    }

    /// Statuses that contribute their elapsed time to the summary
    pub fn is_tracked(&self) -> bool {
        matches!(self, Self::InProgress | Self::Completed)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask,
}
