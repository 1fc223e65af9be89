use crate::app::action::{Action, Change};
use crate::app::input::InputState;
use crate::app::store::ListStore;
use crate::app::surface::{HitMap, Surface};
use crate::config::{AppConfig, EditMode};
use crate::ripple::RippleLayer;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Input,
    List,
}

/// Everything a press can change: the list, the new-task field, selection,
/// and which dialog is open. Ripples live beside it in [`AppState`] so a
/// press callback can borrow this mutably while the ripple layer is in use.
#[derive(Debug)]
pub struct Screen {
    pub store: ListStore,
    pub input: InputState,
    pub focus: FocusPanel,
    pub selected: usize,
    pub scroll_offset: usize,
    pub edit_mode: EditMode,
    /// Index awaiting delete confirmation.
    pub pending_delete: Option<usize>,
    pub status_message: Option<String>,
}

impl Screen {
    pub fn new(store: ListStore, edit_mode: EditMode) -> Self {
        Self {
            store,
            input: InputState::new(),
            focus: FocusPanel::Input,
            selected: 0,
            scroll_offset: 0,
            edit_mode,
            pending_delete: None,
            status_message: None,
        }
    }

    /// Perform the logical effect of pressing `surface`.
    pub fn activate(&mut self, surface: Surface) -> Vec<Action> {
        match surface {
            Surface::AddButton => match self.store.add(&self.input.text) {
                Ok(index) => {
                    self.input.clear();
                    self.selected = index;
                    let text = self.store.get(index).unwrap_or_default().to_string();
                    vec![Action::Changed(Change::Added { index, text })]
                }
                Err(e) => {
                    debug!("add ignored: {}", e);
                    vec![]
                }
            },
            Surface::EditButton(index) => {
                match self.store.begin_edit(index) {
                    Ok(()) => self.selected = index,
                    Err(e) => debug!("edit ignored: {}", e),
                }
                vec![]
            }
            Surface::DeleteButton(index) => {
                if index < self.store.len() {
                    self.selected = index;
                    self.pending_delete = Some(index);
                }
                vec![]
            }
            Surface::SaveEdit => match self.store.save_edit() {
                Ok(index) => {
                    let text = self.store.get(index).unwrap_or_default().to_string();
                    vec![Action::Changed(Change::Updated { index, text })]
                }
                Err(e) => {
                    debug!("save ignored: {}", e);
                    vec![]
                }
            },
            Surface::CancelEdit => {
                self.store.cancel_edit();
                vec![]
            }
            Surface::ConfirmDelete => {
                let Some(index) = self.pending_delete.take() else {
                    return vec![];
                };
                match self.store.remove_at(index) {
                    Ok(text) => {
                        self.clamp_selection();
                        vec![Action::Changed(Change::Removed { index, text })]
                    }
                    Err(e) => {
                        debug!("delete ignored: {}", e);
                        vec![]
                    }
                }
            }
            Surface::CancelDelete => {
                self.pending_delete = None;
                vec![]
            }
            Surface::NewTaskInput => {
                self.focus = FocusPanel::Input;
                vec![]
            }
            Surface::EditInput => vec![],
            Surface::Row(index) => {
                if index < self.store.len() {
                    self.selected = index;
                    self.focus = FocusPanel::List;
                }
                vec![]
            }
        }
    }

    /// Whether `surface` still exists in the current state. Surfaces that do
    /// not are torn down together with their ripples.
    pub fn has_surface(&self, surface: &Surface) -> bool {
        let len = self.store.len();
        let editing = self.store.editing_index();
        let inline = self.edit_mode == EditMode::Inline;
        match *surface {
            Surface::AddButton | Surface::NewTaskInput => true,
            Surface::Row(i) => i < len,
            Surface::EditButton(i) | Surface::DeleteButton(i) => {
                i < len && !(inline && editing == Some(i))
            }
            Surface::SaveEdit | Surface::CancelEdit | Surface::EditInput => editing.is_some(),
            Surface::ConfirmDelete | Surface::CancelDelete => self.pending_delete.is_some(),
        }
    }

    /// A dialog covers the screen and captures all input.
    pub fn modal_open(&self) -> bool {
        self.pending_delete.is_some()
            || (self.edit_mode == EditMode::Modal && self.store.editing().is_some())
    }

    pub fn clamp_selection(&mut self) {
        let len = self.store.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        if self.scroll_offset >= len {
            self.scroll_offset = len.saturating_sub(1);
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Scroll so the selected row lies within `visible` rows.
    pub fn ensure_visible(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible {
            self.scroll_offset = self.selected + 1 - visible;
        }
    }

    pub fn scroll_by(&mut self, delta: isize, visible: usize) {
        let max = self.store.len().saturating_sub(visible.max(1));
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(max);
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::List,
            FocusPanel::List => FocusPanel::Input,
        };
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.store.len() {
            0 => "No tasks".to_string(),
            1 => "1 task".to_string(),
            n => format!("{} tasks", n),
        }
    }
}

pub struct AppState {
    pub screen: Screen,
    pub ripples: RippleLayer<Surface>,
    /// Regions of the last drawn frame.
    pub hits: HitMap,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = ListStore::with_tasks(&config.tasks.initial);
        let screen = Screen::new(store, config.ui.edit_mode);
        let ripples = RippleLayer::new(config.ripple.duration(), config.ripple.enabled);
        Self {
            screen,
            ripples,
            hits: HitMap::new(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Adopt the regions of a freshly drawn frame.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
        let hits = &self.hits;
        self.ripples.retain(|s| hits.contains(s));
    }

    /// Keep row ripples with their task after the task at `index` is removed.
    pub fn task_removed(&mut self, index: usize) {
        self.ripples.rekey(|s| s.after_removal(index));
    }

    /// Drop ripples whose surface no longer exists.
    pub fn prune_ripples(&mut self) {
        let screen = &self.screen;
        self.ripples.retain(|s| screen.has_surface(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(tasks: &[&str]) -> Screen {
        Screen::new(ListStore::with_tasks(tasks.iter().copied()), EditMode::Inline)
    }

    fn type_text(screen: &mut Screen, text: &str) {
        for c in text.chars() {
            screen.input.insert_char(c);
        }
    }

    #[test]
    fn test_add_button_commits_and_clears_input() {
        let mut s = screen(&["a"]);
        type_text(&mut s, "  b ");
        let actions = s.activate(Surface::AddButton);
        assert_eq!(
            actions,
            vec![Action::Changed(Change::Added {
                index: 1,
                text: "b".into()
            })]
        );
        assert!(s.input.text.is_empty());
        assert_eq!(s.selected, 1);
    }

    #[test]
    fn test_blank_add_keeps_everything() {
        let mut s = screen(&["a"]);
        type_text(&mut s, "   ");
        assert!(s.activate(Surface::AddButton).is_empty());
        assert_eq!(s.store.len(), 1);
        assert_eq!(s.input.text, "   ");
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut s = screen(&["a", "b"]);
        s.activate(Surface::DeleteButton(1));
        assert_eq!(s.pending_delete, Some(1));
        assert!(s.modal_open());
        s.activate(Surface::CancelDelete);
        assert_eq!(s.store.len(), 2);
        assert!(!s.modal_open());

        s.activate(Surface::DeleteButton(1));
        let actions = s.activate(Surface::ConfirmDelete);
        assert_eq!(
            actions,
            vec![Action::Changed(Change::Removed {
                index: 1,
                text: "b".into()
            })]
        );
        assert_eq!(s.store.tasks(), ["a"]);
        assert_eq!(s.selected, 0);
    }

    #[test]
    fn test_delete_of_edited_row_closes_edit() {
        let mut s = screen(&["a", "b"]);
        s.activate(Surface::EditButton(0));
        assert!(s.has_surface(&Surface::SaveEdit));
        s.activate(Surface::DeleteButton(0));
        s.activate(Surface::ConfirmDelete);
        assert!(s.store.editing().is_none());
        assert!(!s.has_surface(&Surface::SaveEdit));
    }

    #[test]
    fn test_inline_edit_replaces_row_buttons() {
        let mut s = screen(&["a", "b"]);
        s.activate(Surface::EditButton(1));
        assert!(!s.has_surface(&Surface::EditButton(1)));
        assert!(s.has_surface(&Surface::EditButton(0)));
        assert!(!s.modal_open());

        s.edit_mode = EditMode::Modal;
        assert!(s.modal_open());
        assert!(s.has_surface(&Surface::EditButton(1)));
    }

    #[test]
    fn test_save_edit_reports_change() {
        let mut s = screen(&["walk"]);
        s.activate(Surface::EditButton(0));
        s.store.draft_mut().unwrap().insert_char('s');
        let actions = s.activate(Surface::SaveEdit);
        assert_eq!(
            actions,
            vec![Action::Changed(Change::Updated {
                index: 0,
                text: "walks".into()
            })]
        );
    }

    #[test]
    fn test_stale_surfaces_are_ignored() {
        let mut s = screen(&["a"]);
        assert!(s.activate(Surface::EditButton(4)).is_empty());
        assert!(s.activate(Surface::DeleteButton(4)).is_empty());
        assert_eq!(s.pending_delete, None);
        assert!(s.activate(Surface::ConfirmDelete).is_empty());
        assert!(!s.has_surface(&Surface::Row(1)));
    }

    #[test]
    fn test_ensure_visible_and_scroll() {
        let tasks: Vec<String> = (0..10).map(|i| format!("task {}", i)).collect();
        let mut s = Screen::new(ListStore::with_tasks(&tasks), EditMode::Inline);
        s.selected = 7;
        s.ensure_visible(3);
        assert_eq!(s.scroll_offset, 5);
        s.selected = 2;
        s.ensure_visible(3);
        assert_eq!(s.scroll_offset, 2);
        s.scroll_by(100, 3);
        assert_eq!(s.scroll_offset, 7);
        s.scroll_by(-100, 3);
        assert_eq!(s.scroll_offset, 0);
    }

    #[test]
    fn test_status_line_counts_tasks() {
        let mut s = screen(&["a", "b"]);
        assert_eq!(s.status_line(), "2 tasks");
        s.status_message = Some("Added \"c\"".into());
        assert_eq!(s.status_line(), "Added \"c\"");
    }
}
