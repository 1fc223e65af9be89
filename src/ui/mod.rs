mod button;
mod dialog;
mod input_box;
pub mod layout;
pub mod ripple;
mod status_bar;
mod task_list;
mod theme;

use crate::app::state::{AppState, FocusPanel};
use crate::app::surface::{HitMap, Surface};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use theme::Theme;

/// Draw the whole screen and return the regions that can be clicked.
pub fn render(frame: &mut Frame, state: &AppState) -> HitMap {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);
    let mut hits = HitMap::new();
    let screen = &state.screen;

    frame.render_widget(Block::default().style(Theme::background()), area);

    let title = Paragraph::new(Line::from(Span::styled(" My tasks", Theme::title())));
    frame.render_widget(title, app_layout.title);

    task_list::render(frame, app_layout.task_list, state, &mut hits);

    let input_focused = screen.focus == FocusPanel::Input
        && screen.store.editing().is_none()
        && !screen.modal_open();
    input_box::render(
        frame,
        app_layout.input_box,
        &screen.input,
        Some("New task"),
        "Add a task",
        input_focused,
    );
    hits.push(Surface::NewTaskInput, app_layout.input_box);

    button::render(
        frame,
        app_layout.add_button,
        "Add a task",
        Theme::BUTTON_BG,
        state.ripples.ripples(&Surface::AddButton),
    );
    hits.push(Surface::AddButton, app_layout.add_button);

    status_bar::render(frame, app_layout.status_bar, state);

    dialog::render(frame, state, &mut hits);

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, EditMode};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::{Duration, Instant};

    fn state_with(tasks: &[&str], mode: EditMode) -> AppState {
        let mut config = AppConfig::default();
        config.tasks.initial = tasks.iter().map(|t| t.to_string()).collect();
        config.ui.edit_mode = mode;
        AppState::new(config)
    }

    fn draw(state: &AppState, width: u16, height: u16) -> (HitMap, String) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hits = None;
        terminal.draw(|f| hits = Some(render(f, state))).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        (hits.unwrap(), text)
    }

    #[test]
    fn test_renders_tasks_and_registers_buttons() {
        let state = state_with(&["Buy groceries", "Go running"], EditMode::Inline);
        let (hits, text) = draw(&state, 80, 24);
        assert!(text.contains("Buy groceries"));
        assert!(text.contains("Go running"));
        assert!(text.contains("Add a task"));
        for surface in [
            Surface::AddButton,
            Surface::NewTaskInput,
            Surface::Row(0),
            Surface::EditButton(1),
            Surface::DeleteButton(1),
        ] {
            assert!(hits.contains(&surface), "{:?} missing", surface);
        }
        assert!(!hits.is_modal_open());
        assert_eq!(hits.list_rows, 4);
    }

    #[test]
    fn test_overflowing_list_only_registers_visible_rows() {
        let tasks: Vec<String> = (0..20).map(|i| format!("task {}", i)).collect();
        let refs: Vec<&str> = tasks.iter().map(String::as_str).collect();
        let state = state_with(&refs, EditMode::Inline);
        let (hits, _) = draw(&state, 80, 24);
        assert!(hits.contains(&Surface::Row(3)));
        assert!(!hits.contains(&Surface::Row(4)));
    }

    #[test]
    fn test_inline_edit_row() {
        let mut state = state_with(&["walk"], EditMode::Inline);
        state.screen.store.begin_edit(0).unwrap();
        let (hits, text) = draw(&state, 80, 24);
        assert!(hits.contains(&Surface::EditInput));
        assert!(hits.contains(&Surface::SaveEdit));
        assert!(!hits.contains(&Surface::EditButton(0)));
        assert!(text.contains("Save"));
        assert!(!hits.is_modal_open());
    }

    #[test]
    fn test_confirm_dialog() {
        let mut state = state_with(&["walk"], EditMode::Inline);
        state.screen.pending_delete = Some(0);
        let (hits, text) = draw(&state, 80, 24);
        assert!(hits.is_modal_open());
        assert!(text.contains("\"walk\""));
        let confirm = hits.rect_of(Surface::ConfirmDelete).unwrap();
        assert_eq!(
            hits.hit(confirm.x, confirm.y).map(|h| h.0),
            Some(Surface::ConfirmDelete)
        );
    }

    #[test]
    fn test_cramped_dialog_still_blocks_base_clicks() {
        let mut state = state_with(&["walk", "run"], EditMode::Modal);
        state.screen.store.begin_edit(0).unwrap();
        let (hits, _) = draw(&state, 80, 10);
        assert!(hits.is_modal_open());
        assert!(!hits.contains(&Surface::SaveEdit));
        for y in 0..10 {
            for x in 0..80 {
                assert_eq!(hits.hit(x, y), None, "({}, {}) reached the base layer", x, y);
            }
        }

        state.screen.store.cancel_edit();
        state.screen.pending_delete = Some(1);
        let (hits, _) = draw(&state, 80, 6);
        assert!(hits.is_modal_open());
        if !hits.contains(&Surface::ConfirmDelete) {
            assert!((0..6).all(|y| (0..80).all(|x| hits.hit(x, y).is_none())));
        }
    }

    #[test]
    fn test_zero_width_frame_with_overflowing_list() {
        let tasks: Vec<String> = (0..20).map(|i| format!("task {}", i)).collect();
        let refs: Vec<&str> = tasks.iter().map(String::as_str).collect();
        let state = state_with(&refs, EditMode::Inline);
        let (hits, text) = draw(&state, 0, 24);
        assert!(text.is_empty());
        assert!(!hits.contains(&Surface::Row(0)) || hits.list_rows > 0);
    }

    #[test]
    fn test_ripple_is_painted_on_button() {
        let mut state = state_with(&[], EditMode::Inline);
        let (hits, _) = draw(&state, 80, 24);
        let rect = hits.rect_of(Surface::AddButton).unwrap();
        let t0 = Instant::now();
        state.ripples.touch(Surface::AddButton, 5.5, 1.5, t0, None);
        state.ripples.advance(t0 + Duration::from_millis(100));

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| {
            render(f, &state);
        })
        .unwrap();
        let cell = &terminal.backend().buffer()[(rect.x + 5, rect.y + 1)];
        assert_ne!(cell.bg, Theme::BUTTON_BG);
        let far = &terminal.backend().buffer()[(rect.right() - 2, rect.y + 1)];
        assert_eq!(far.bg, Theme::BUTTON_BG);
    }
}
