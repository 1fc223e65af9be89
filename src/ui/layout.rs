use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one task row; tall enough for bordered buttons.
pub const ROW_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub title: Rect,
    pub task_list: Rect,
    pub input_box: Rect,
    pub add_button: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(5),    // Tasks
            Constraint::Length(3), // New task input
            Constraint::Length(3), // Add button
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        title: chunks[0],
        task_list: chunks[1],
        input_box: chunks[2],
        add_button: chunks[3],
        status_bar: chunks[4],
    }
}

pub struct RowLayout {
    pub text: Rect,
    pub first_button: Rect,
    pub second_button: Rect,
}

/// Split a task row into its text and two trailing buttons.
pub fn split_row(row: Rect) -> RowLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(10),
            Constraint::Length(10),
        ])
        .split(row);

    RowLayout {
        text: chunks[0],
        first_button: chunks[1],
        second_button: chunks[2],
    }
}

/// Centered popup of at most `width` x `height`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.task_list.height, 24 - 1 - 3 - 3 - 1);
        assert_eq!(layout.add_button.width, 80);
        assert_eq!(layout.status_bar.y, 23);
    }

    #[test]
    fn test_split_row() {
        let row = split_row(Rect::new(2, 5, 60, ROW_HEIGHT));
        assert_eq!(row.text.width, 40);
        assert_eq!(row.first_button.x, 42);
        assert_eq!(row.second_button.right(), 62);
    }

    #[test]
    fn test_centered_popup() {
        let popup = centered(Rect::new(0, 0, 80, 24), 50, 10);
        assert_eq!(popup, Rect::new(15, 7, 50, 10));
        let tiny = centered(Rect::new(0, 0, 20, 6), 50, 10);
        assert_eq!(tiny, Rect::new(1, 1, 18, 4));
    }
}
