use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{alert_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a pending validation alert as a centered modal
pub fn render_alert(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(message) = &app.alert {
        let modal_area = create_modal_area(area, 8);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::styled(format!("  {}", message), alert_style()),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  [any key]", modal_title_style()),
                Span::raw(" Dismiss"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" ⚠ Check your input ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
