use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle a keyboard event. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // A pending alert swallows the next key press
    if app.alert.is_some() {
        app.dismiss_alert();
        return Ok(false);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Start/stop the selected task's timer
        KeyCode::Enter => {
            app.toggle_selected_timer();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Edit task
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_task();
            Ok(false)
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add/edit form is open
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.cancel_form();
            Ok(false)
        }
        KeyCode::Enter => {
            app.submit_form();
            Ok(false)
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form_next_field();
            Ok(false)
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_prev_field();
            Ok(false)
        }
        // Space toggles the checkbox / cycles the status on the flag
        // field; elsewhere it types a literal space
        KeyCode::Char(' ') => {
            if on_flag_field(app) {
                app.form_toggle_flag();
            } else {
                app.form_add_char(' ');
            }
            Ok(false)
        }
        KeyCode::Left | KeyCode::Right => {
            if on_flag_field(app) {
                app.form_toggle_flag();
            }
            Ok(false)
        }
        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.form_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn on_flag_field(app: &AppState) -> bool {
    app.form
        .as_ref()
        .is_some_and(|form| form.editing_field == crate::app::FIELD_FLAG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    #[test]
    fn test_quit_key() {
        let mut app = AppState::new(true);
        assert!(!press(&mut app, KeyCode::Char('x')));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_add_task_via_keys() {
        let mut app = AppState::new(true);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "Ship it".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.tasks()[0].name, "Ship it");
    }

    #[test]
    fn test_space_types_into_name_field() {
        let mut app = AppState::new(true);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('b'));

        assert_eq!(app.form.as_ref().unwrap().name, "a b");
    }

    #[test]
    fn test_backtab_moves_focus_backward() {
        let mut app = AppState::new(true);
        press(&mut app, KeyCode::Char('a'));

        press(&mut app, KeyCode::Tab);
        assert_eq!(
            app.form.as_ref().unwrap().editing_field,
            crate::app::FIELD_FLAG
        );
        press(&mut app, KeyCode::BackTab);
        assert_eq!(
            app.form.as_ref().unwrap().editing_field,
            crate::app::FIELD_NAME
        );
    }

    #[test]
    fn test_alert_swallows_next_key() {
        let mut app = AppState::new(true);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter); // empty name -> alert
        assert!(app.alert.is_some());

        // The dismissing key does nothing else
        press(&mut app, KeyCode::Char('q'));
        assert!(app.alert.is_none());
        assert_eq!(app.ui_mode, UiMode::AddingTask);
    }

    #[test]
    fn test_enter_toggles_selected_timer() {
        let mut app = AppState::new(true);
        press(&mut app, KeyCode::Char('a'));
        for c in "x".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Enter);
        assert!(app.store.tasks()[0].timer_running);
        press(&mut app, KeyCode::Enter);
        assert!(!app.store.tasks()[0].timer_running);
    }
}
