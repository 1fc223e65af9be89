use crate::app::state::*;
use crate::app::surface::{HitMap, Surface};
use crate::config::EditMode;
use crate::ui::layout::{split_row, ROW_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::{button, input_box};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let screen = &state.screen;
    let focused = screen.focus == FocusPanel::List;
    let block = Block::default()
        .title(format!(" Tasks ({}) ", screen.store.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = (inner.height / ROW_HEIGHT) as usize;
    hits.list_rows = visible;

    if screen.store.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "Nothing to do. Add a task below.",
            Theme::placeholder(),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    // Leave a column for the scrollbar when the list overflows.
    let overflow = screen.store.len() > visible;
    let rows_area = if overflow {
        Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        }
    } else {
        inner
    };

    let start = screen.scroll_offset.min(screen.store.len().saturating_sub(1));
    let inline_edit = match screen.edit_mode {
        EditMode::Inline => screen.store.editing(),
        EditMode::Modal => None,
    };

    for (slot, (index, task)) in screen
        .store
        .tasks()
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .enumerate()
    {
        let row = Rect::new(
            rows_area.x,
            rows_area.y + slot as u16 * ROW_HEIGHT,
            rows_area.width,
            ROW_HEIGHT,
        );
        let parts = split_row(row);

        match inline_edit {
            Some(edit) if edit.index == index => {
                input_box::render(frame, parts.text, &edit.draft, None, "Task text", true);
                hits.push(Surface::EditInput, parts.text);
                render_row_button(frame, state, hits, Surface::SaveEdit, parts.first_button);
                render_row_button(frame, state, hits, Surface::CancelEdit, parts.second_button);
            }
            _ => {
                let selected = focused && index == screen.selected;
                let style = if selected {
                    Theme::task_selected()
                } else {
                    Theme::task_text()
                };
                let marker = if selected { "❯ " } else { "  " };
                let text_line = Rect::new(
                    parts.text.x,
                    parts.text.y + ROW_HEIGHT / 2,
                    parts.text.width,
                    1,
                );
                frame.render_widget(
                    Paragraph::new(Line::from(vec![
                        Span::styled(marker, Style::default().fg(Theme::ACCENT_TEAL)),
                        Span::styled(task.as_str(), style),
                    ]))
                    .style(style),
                    text_line,
                );
                hits.push(Surface::Row(index), parts.text);
                render_row_button(frame, state, hits, Surface::EditButton(index), parts.first_button);
                render_row_button(
                    frame,
                    state,
                    hits,
                    Surface::DeleteButton(index),
                    parts.second_button,
                );
            }
        }
    }

    if overflow {
        let scrollbar_area = Rect::new(inner.right().saturating_sub(1), inner.y, 1, inner.height);
        let mut scrollbar_state = ScrollbarState::new(screen.store.len().saturating_sub(visible))
            .position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Style::default().fg(Theme::ACCENT_TEAL))
                .track_style(Style::default().fg(Theme::BORDER_DIM)),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

fn render_row_button(
    frame: &mut Frame,
    state: &AppState,
    hits: &mut HitMap,
    surface: Surface,
    area: Rect,
) {
    let (label, bg) = match surface {
        Surface::EditButton(_) => ("Edit", Theme::BUTTON_BG),
        Surface::DeleteButton(_) => ("Delete", Theme::BUTTON_DANGER_BG),
        Surface::SaveEdit => ("Save", Theme::BUTTON_BG),
        _ => ("Cancel", Theme::BUTTON_MUTED_BG),
    };
    button::render(frame, area, label, bg, state.ripples.ripples(&surface));
    hits.push(surface, area);
}
