pub mod alert;
pub mod form_pane;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod summary_pane;
pub mod table_pane;

use crate::app::AppState;
use alert::render_alert;
use form_pane::render_form;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use summary_pane::render_summary_pane;
use table_pane::render_table_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_summary_pane(f, app, layout.summary_area);
    render_table_pane(f, app, layout.table_area);

    // Render the form modal if open
    if app.form.is_some() {
        render_form(f, app, size);
    }

    // Render the alert modal on top if one is pending
    if app.alert.is_some() {
        render_alert(f, app, size);
    }
}
