use crate::app::input::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Bordered single-line text field. The terminal cursor is placed in it when
/// `focused`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &InputState,
    title: Option<&str>,
    placeholder: &str,
    focused: bool,
) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Theme::BG_SURFACE));
    if let Some(title) = title {
        block = block.title(format!(" {} ", title)).title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        });
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Keep the cursor in view on long text by scrolling horizontally.
    let cursor_col = input.cursor_column();
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));

    let paragraph = if input.text.is_empty() {
        Paragraph::new(Span::styled(placeholder, Theme::placeholder()))
    } else {
        Paragraph::new(Span::styled(input.text.as_str(), Theme::input_text())).scroll((0, scroll))
    };
    frame.render_widget(paragraph, inner);

    if focused {
        let cursor_x = inner.x + cursor_col - scroll;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}
