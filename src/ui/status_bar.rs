use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let screen = &state.screen;
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", screen.status_line()),
        Theme::status_bar(),
    )];

    let hints: &[(&str, &str)] = if screen.pending_delete.is_some() {
        &[("y", "delete"), ("n", "keep")]
    } else if screen.store.editing().is_some() {
        &[("Enter", "save"), ("Esc", "cancel")]
    } else {
        match screen.focus {
            FocusPanel::Input => &[("Enter", "add"), ("Tab", "list"), ("^Q", "quit")],
            FocusPanel::List => &[
                ("e", "edit"),
                ("d", "delete"),
                ("Tab", "input"),
                ("^Q", "quit"),
            ],
        }
    };
    for (key, label) in hints {
        parts.push(Span::styled(format!(" {}", key), Theme::hint_key().bg(Theme::BG_SURFACE)));
        parts.push(Span::styled(format!(" {} ", label), Theme::hint_text().bg(Theme::BG_SURFACE)));
    }

    let focus_name = match screen.focus {
        FocusPanel::Input => "INPUT",
        FocusPanel::List => "LIST",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_SURFACE),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
