use crate::domain::{NewTask, TaskEdit, TaskId, TaskStatus, UiMode};
use crate::store::{AddTaskError, TaskStore};

/// Form field indices (Tab order)
pub const FIELD_NAME: usize = 0;
/// "Old task" checkbox when adding, status selector when editing
pub const FIELD_FLAG: usize = 1;
pub const FIELD_HOURS: usize = 2;
pub const FIELD_MINUTES: usize = 3;
const FIELD_COUNT: usize = 4;

/// Input form state, shared by the add and edit flows
#[derive(Debug, Clone)]
pub struct TaskFormState {
    pub name: String,
    /// Add flow: whether this is backfilled, already-completed work
    pub is_old: bool,
    /// Edit flow: the status selector value
    pub status: TaskStatus,
    pub hours: String,
    pub minutes: String,
    pub editing_field: usize,
    /// Id of the task being edited, None when adding
    pub editing: Option<TaskId>,
}

impl TaskFormState {
    fn empty() -> Self {
        Self {
            name: String::new(),
            is_old: false,
            status: TaskStatus::NotStarted,
            hours: String::new(),
            minutes: String::new(),
            editing_field: FIELD_NAME,
            editing: None,
        }
    }
}

/// Main application state: the task store plus view-bound UI state
pub struct AppState {
    pub store: TaskStore,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub form: Option<TaskFormState>,
    /// Pending validation alert, rendered as a modal until dismissed
    pub alert: Option<String>,
    pub use_emoji: bool,
}

impl AppState {
    pub fn new(use_emoji: bool) -> Self {
        Self {
            store: TaskStore::new(),
            ui_mode: UiMode::Normal,
            selected_index: 0,
            form: None,
            alert: None,
            use_emoji,
        }
    }

    /// Id of the task under the selection cursor
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.store.tasks().get(self.selected_index).map(|t| t.id)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the collection after removals
    fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Toggle the timer on the selected task
    pub fn toggle_selected_timer(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.toggle_timer(id);
        }
    }

    /// Delete the selected task (its tick source is cancelled first)
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.delete(id);
            self.clamp_selection();
        }
    }

    /// Open an empty add form
    pub fn start_add_task(&mut self) {
        self.form = Some(TaskFormState::empty());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Open the edit form prefilled from the selected task. The elapsed
    /// time is split by floor division, matching what the table shows as
    /// editable hours/minutes.
    pub fn start_edit_task(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let Some(task) = self.store.get(id) else {
            return;
        };

        self.form = Some(TaskFormState {
            name: task.name.clone(),
            is_old: task.is_old,
            status: task.status,
            hours: (task.elapsed_seconds / 3600).to_string(),
            minutes: (task.elapsed_seconds % 3600 / 60).to_string(),
            editing_field: FIELD_NAME,
            editing: Some(id),
        });
        self.ui_mode = UiMode::EditingTask;
    }

    /// Advance the form focus to the next field. In the add flow the time
    /// fields are skipped unless the old-task checkbox is set.
    pub fn form_next_field(&mut self) {
        let editing = self.ui_mode == UiMode::EditingTask;
        if let Some(form) = &mut self.form {
            loop {
                form.editing_field = (form.editing_field + 1) % FIELD_COUNT;
                let time_field = form.editing_field >= FIELD_HOURS;
                if editing || form.is_old || !time_field {
                    break;
                }
            }
        }
    }

    /// Move the form focus to the previous field, with the same time-field
    /// skip as `form_next_field`
    pub fn form_prev_field(&mut self) {
        let editing = self.ui_mode == UiMode::EditingTask;
        if let Some(form) = &mut self.form {
            loop {
                form.editing_field = (form.editing_field + FIELD_COUNT - 1) % FIELD_COUNT;
                let time_field = form.editing_field >= FIELD_HOURS;
                if editing || form.is_old || !time_field {
                    break;
                }
            }
        }
    }

    /// Toggle the checkbox (add flow) or cycle the status (edit flow)
    pub fn form_toggle_flag(&mut self) {
        let editing = self.ui_mode == UiMode::EditingTask;
        if let Some(form) = &mut self.form {
            if form.editing_field != FIELD_FLAG {
                return;
            }
            if editing {
                form.status = form.status.next();
            } else {
                form.is_old = !form.is_old;
            }
        }
    }

    /// Type a character into the focused field. The hours/minutes fields
    /// accept digits only.
    pub fn form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.form {
            match form.editing_field {
                FIELD_NAME => form.name.push(c),
                FIELD_HOURS if c.is_ascii_digit() => form.hours.push(c),
                FIELD_MINUTES if c.is_ascii_digit() => form.minutes.push(c),
                _ => {}
            }
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = &mut self.form {
            match form.editing_field {
                FIELD_NAME => {
                    form.name.pop();
                }
                FIELD_HOURS => {
                    form.hours.pop();
                }
                FIELD_MINUTES => {
                    form.minutes.pop();
                }
                _ => {}
            }
        }
    }

    /// Submit the form. Validation failures raise an alert and leave the
    /// form open; success closes it.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };

        match form.editing {
            Some(id) => {
                // Malformed numerics coerce to 0 on edit
                self.store.edit(
                    id,
                    TaskEdit {
                        name: Some(form.name),
                        status: Some(form.status),
                        hours: Some(parse_or_zero(&form.hours)),
                        minutes: Some(parse_or_zero(&form.minutes)),
                    },
                );
                self.close_form();
            }
            None => match build_new_task(&form) {
                Ok(new) => match self.store.add(new) {
                    Ok(_) => self.close_form(),
                    Err(e) => self.alert = Some(e.to_string()),
                },
                Err(e) => self.alert = Some(e.to_string()),
            },
        }
    }

    pub fn cancel_form(&mut self) {
        self.close_form();
    }

    fn close_form(&mut self) {
        self.form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Advance all running timers (called from the event loop)
    pub fn tick(&mut self) {
        self.store.tick();
    }

    /// Tear down every live tick source (called on exit)
    pub fn shutdown(&mut self) {
        self.store.shutdown();
    }
}

/// Build the creation input from the add form. For an old task both time
/// fields must parse, minutes checked first; the range check on minutes
/// happens in the store.
fn build_new_task(form: &TaskFormState) -> Result<NewTask, AddTaskError> {
    if !form.is_old {
        return Ok(NewTask::named(form.name.clone()));
    }

    let minutes = form
        .minutes
        .trim()
        .parse::<u64>()
        .map_err(|_| AddTaskError::MinutesOutOfRange)?;
    let hours = form
        .hours
        .trim()
        .parse::<u64>()
        .map_err(|_| AddTaskError::InvalidHours)?;
    Ok(NewTask::backfilled(form.name.clone(), hours, minutes))
}

fn parse_or_zero(input: &str) -> u64 {
    input.trim().parse().unwrap_or(0)
}
