use crate::app::state::AppState;
use crate::app::surface::{HitMap, Surface};
use crate::config::EditMode;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use crate::ui::{button, input_box};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Draw whichever dialog is open. Delete confirmation wins over editing.
pub fn render(frame: &mut Frame, state: &AppState, hits: &mut HitMap) {
    let screen = &state.screen;
    if let Some(index) = screen.pending_delete {
        let task = screen.store.get(index).unwrap_or_default();
        render_confirm(frame, state, hits, task);
    } else if screen.edit_mode == EditMode::Modal {
        if let Some(edit) = screen.store.editing() {
            hits.block_base();
            let popup = open_popup(frame, " Edit task ", 50, 10);
            if popup.height < 7 {
                return;
            }
            let input_area = Rect::new(popup.x, popup.y, popup.width, 3);
            input_box::render(frame, input_area, &edit.draft, None, "Task text", true);
            hits.push_modal(Surface::EditInput, input_area);
            render_button_row(
                frame,
                state,
                hits,
                Rect::new(popup.x, popup.y + 4, popup.width, 3),
                (Surface::SaveEdit, "Save", Theme::BUTTON_BG),
                (Surface::CancelEdit, "Cancel", Theme::BUTTON_MUTED_BG),
            );
        }
    }
}

fn render_confirm(frame: &mut Frame, state: &AppState, hits: &mut HitMap, task: &str) {
    hits.block_base();
    let popup = open_popup(frame, " Delete task ", 50, 9);
    if popup.height < 5 {
        return;
    }
    let question = Paragraph::new(Line::from(vec![
        Span::styled("Delete ", Theme::task_text()),
        Span::styled(format!("\"{}\"", task), Theme::title()),
        Span::styled("?", Theme::task_text()),
    ]))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(question, Rect::new(popup.x, popup.y, popup.width, 2));
    render_button_row(
        frame,
        state,
        hits,
        Rect::new(popup.x, popup.y + popup.height - 3, popup.width, 3),
        (Surface::ConfirmDelete, "Delete", Theme::BUTTON_DANGER_BG),
        (Surface::CancelDelete, "Cancel", Theme::BUTTON_MUTED_BG),
    );
}

/// Clear a centered popup, draw its frame and return the padded inner area.
fn open_popup(frame: &mut Frame, title: &str, width: u16, height: u16) -> Rect {
    let area = centered(frame.area(), width, height);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    )
}

fn render_button_row(
    frame: &mut Frame,
    state: &AppState,
    hits: &mut HitMap,
    area: Rect,
    left: (Surface, &str, Color),
    right: (Surface, &str, Color),
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    for ((surface, label, bg), rect) in [left, right].into_iter().zip(halves.iter()) {
        button::render(frame, *rect, label, bg, state.ripples.ripples(&surface));
        hits.push_modal(surface, *rect);
    }
}
