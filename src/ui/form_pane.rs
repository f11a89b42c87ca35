use crate::app::{AppState, TaskFormState, FIELD_FLAG, FIELD_HOURS, FIELD_MINUTES, FIELD_NAME};
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add/edit task form as a centered modal
pub fn render_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.form {
        let editing = app.ui_mode == UiMode::EditingTask;
        let modal_area = create_modal_area(area, 16);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        // Name field
        lines.push(Line::raw(""));
        lines.push(Line::raw(field_label("Task Name:", form, FIELD_NAME)));
        lines.push(input_line(&form.name, form.editing_field == FIELD_NAME));
        lines.push(Line::raw(""));

        // Checkbox (add) or status selector (edit)
        if editing {
            lines.push(Line::raw(field_label("Status (Space to change):", form, FIELD_FLAG)));
            lines.push(input_line(form.status.label(), form.editing_field == FIELD_FLAG));
        } else {
            let checkbox = if form.is_old { "[x]" } else { "[ ]" };
            lines.push(Line::raw(field_label(
                "Is this an old task (already completed)?",
                form,
                FIELD_FLAG,
            )));
            lines.push(input_line(checkbox, form.editing_field == FIELD_FLAG));
        }
        lines.push(Line::raw(""));

        // Time fields, shown while relevant
        if editing || form.is_old {
            lines.push(Line::raw(field_label("Hours:", form, FIELD_HOURS)));
            lines.push(input_line(&form.hours, form.editing_field == FIELD_HOURS));
            lines.push(Line::raw(field_label("Minutes (0-59):", form, FIELD_MINUTES)));
            lines.push(input_line(&form.minutes, form.editing_field == FIELD_MINUTES));
            lines.push(Line::raw(""));
        }

        // Instructions
        lines.push(Line::raw("Tab to switch fields  ·  Enter to submit  ·  Esc to cancel"));

        let title = if editing { " Edit Task " } else { " Add Task " };
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

fn field_label(label: &str, form: &TaskFormState, field: usize) -> String {
    if form.editing_field == field {
        format!("{} (editing)", label)
    } else {
        label.to_string()
    }
}

fn input_line(value: &str, active: bool) -> Line<'static> {
    let mut spans = vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
    ];
    if active {
        spans.push(Span::styled("█", modal_title_style())); // Cursor
    }
    Line::from(spans)
}
