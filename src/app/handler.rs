use crate::app::action::{Action, Change};
use crate::app::event::AppEvent;
use crate::app::input::InputState;
use crate::app::state::*;
use crate::app::surface::Surface;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    handle_event_at(state, event, Instant::now())
}

/// Like [`handle_event`] with an explicit clock, so animation can be stepped.
pub fn handle_event_at(state: &mut AppState, event: AppEvent, now: Instant) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent, now)
        }
        AppEvent::Tick => {
            handle_tick(state, now);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState, now: Instant) {
    // Redraw while animating, plus once more to clear the last frame.
    let was_animating = state.ripples.is_animating();
    if state.ripples.advance(now) || was_animating {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: Instant) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key, now),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse, now),
        _ => vec![],
    }
}

/// Press `surface` at local `(x, y)`: the logical action runs first, then
/// buttons start a ripple. Surfaces the press removed lose their ripples.
pub fn press(state: &mut AppState, surface: Surface, x: f32, y: f32, now: Instant) -> Vec<Action> {
    let mut actions = Vec::new();
    let screen = &mut state.screen;
    let mut on_press = || actions.extend(screen.activate(surface));
    if surface.is_button() {
        state.ripples.touch(surface, x, y, now, Some(&mut on_press));
    } else {
        on_press();
    }
    for action in &actions {
        if let Action::Changed(Change::Removed { index, .. }) = action {
            state.task_removed(*index);
        }
    }
    state.prune_ripples();
    let visible = state.hits.list_rows;
    state.screen.ensure_visible(visible);
    actions
}

/// Keyboard presses ripple out from the middle of the button.
fn press_center(state: &mut AppState, surface: Surface, now: Instant) -> Vec<Action> {
    let (x, y) = state
        .hits
        .rect_of(surface)
        .map(|r| (r.width as f32 / 2.0, r.height as f32 / 2.0))
        .unwrap_or((0.0, 0.0));
    press(state, surface, x, y, now)
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some((surface, rect)) = state.hits.hit(mouse.column, mouse.row) else {
                return vec![];
            };
            // Aim at the middle of the clicked cell.
            let x = f32::from(mouse.column - rect.x) + 0.5;
            let y = f32::from(mouse.row - rect.y) + 0.5;
            press(state, surface, x, y, now)
        }
        MouseEventKind::ScrollUp if !state.screen.modal_open() => {
            state.screen.scroll_by(-1, state.hits.list_rows);
            vec![]
        }
        MouseEventKind::ScrollDown if !state.screen.modal_open() => {
            state.screen.scroll_by(1, state.hits.list_rows);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return vec![Action::Quit];
    }

    // Delete confirmation captures all input while visible
    if state.screen.pending_delete.is_some() {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                press_center(state, Surface::ConfirmDelete, now)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                press_center(state, Surface::CancelDelete, now)
            }
            _ => vec![],
        };
    }

    // An open edit session owns the keyboard
    if state.screen.store.editing().is_some() {
        return match key.code {
            KeyCode::Enter => press_center(state, Surface::SaveEdit, now),
            KeyCode::Esc => press_center(state, Surface::CancelEdit, now),
            _ => {
                if let Some(draft) = state.screen.store.draft_mut() {
                    edit_text(draft, key);
                }
                vec![]
            }
        };
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        state.screen.cycle_focus();
        return vec![];
    }

    match state.screen.focus {
        FocusPanel::Input => handle_input_key(state, key, now),
        FocusPanel::List => handle_list_key(state, key, now),
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => press_center(state, Surface::AddButton, now),
        KeyCode::Esc => {
            state.screen.input.clear();
            vec![]
        }
        KeyCode::Up if state.screen.input.text.is_empty() => {
            state.screen.focus = FocusPanel::List;
            vec![]
        }
        _ => {
            edit_text(&mut state.screen.input, key);
            vec![]
        }
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    let visible = state.hits.list_rows;
    let screen = &mut state.screen;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => screen.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => screen.select_next(),
        KeyCode::PageUp => {
            for _ in 0..visible.max(1) {
                screen.select_prev();
            }
        }
        KeyCode::PageDown => {
            for _ in 0..visible.max(1) {
                screen.select_next();
            }
        }
        KeyCode::Home => screen.selected = 0,
        KeyCode::End => screen.selected = screen.store.len().saturating_sub(1),
        KeyCode::Enter | KeyCode::Char('e') if !screen.store.is_empty() => {
            let index = screen.selected;
            return press_center(state, Surface::EditButton(index), now);
        }
        KeyCode::Delete | KeyCode::Char('d') if !screen.store.is_empty() => {
            let index = screen.selected;
            return press_center(state, Surface::DeleteButton(index), now);
        }
        KeyCode::Esc | KeyCode::Char('a') | KeyCode::Char('i') => {
            screen.focus = FocusPanel::Input;
        }
        _ => {}
    }
    screen.ensure_visible(visible);
    vec![]
}

/// Apply a line-editing key to `input`.
fn edit_text(input: &mut InputState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.insert_char(c)
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                input.delete_word_back();
            } else {
                input.delete_back();
            }
        }
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
