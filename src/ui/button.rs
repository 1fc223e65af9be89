use crate::ripple::Ripple;
use crate::ui::ripple::RippleOverlay;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Draw a pressable button and any ripples it is showing.
pub fn render(frame: &mut Frame, area: Rect, label: &str, bg: Color, ripples: &[Ripple]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::TEXT_PRIMARY).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, inner);

    if !ripples.is_empty() {
        frame.render_widget(RippleOverlay::new(ripples, Theme::RIPPLE, bg), area);
    }
}
