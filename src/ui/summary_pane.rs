use crate::app::AppState;
use crate::ui::layout::summary_cards;
use crate::ui::styles::{border_style, summary_value_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the three summary cards: completed count, in-progress count,
/// and total time worked. The projection is recomputed on every draw.
pub fn render_summary_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let summary = app.store.summary();
    let cards = summary_cards(area);

    render_card(f, cards[0], " Tasks Completed ", summary.completed_count.to_string());
    render_card(f, cards[1], " Tasks In Progress ", summary.in_progress_count.to_string());
    render_card(
        f,
        cards[2],
        " Total Time Worked ",
        format!("{}h {}m", summary.total_hours, summary.remaining_minutes),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String) {
    let lines = vec![
        Line::raw(""),
        Line::styled(value, summary_value_style()),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Line::styled(title.to_string(), title_style())),
    );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time::format_hm;
    use crate::domain::NewTask;

    #[test]
    fn test_summary_values_match_format() {
        let mut app = AppState::new(true);
        app.store.add(NewTask::backfilled("x", 1, 30)).unwrap();

        let summary = app.store.summary();
        assert_eq!(
            format!("{}h {}m", summary.total_hours, summary.remaining_minutes),
            format_hm(summary.total_tracked_seconds)
        );
    }
}
