use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub summary_area: Rect,
    pub table_area: Rect,
}

/// Create the main layout:
/// - Top bar: keybindings (1 row)
/// - Summary cards row (5 rows)
/// - Task table (remaining space)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(5), // Summary cards
            Constraint::Min(0),    // Task table
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        summary_area: chunks[1],
        table_area: chunks[2],
    }
}

/// Split the summary row into three equal cards
pub fn summary_cards(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2]]
}

/// Create a centered modal area (for the task form and alerts)
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(height),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.summary_area.height, 5);
        assert!(layout.table_area.height > 0);
    }

    #[test]
    fn test_summary_cards_cover_row() {
        let area = Rect::new(0, 0, 90, 5);
        let cards = summary_cards(area);

        let total: u16 = cards.iter().map(|r| r.width).sum();
        assert_eq!(total, area.width);
        assert!(cards.iter().all(|r| r.height == 5));
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 14);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 14);
    }
}
