//! The task list and its single edit session.

use crate::app::input::InputState;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task text is blank")]
    Blank,
    #[error("no task at index {index} (list has {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("no task is being edited")]
    NotEditing,
}

/// The task currently being edited and its uncommitted text.
#[derive(Debug)]
pub struct EditSession {
    pub index: usize,
    pub draft: InputState,
}

/// Ordered task strings plus the transient edit state.
///
/// Text is trimmed on the way in and blank text is refused, so every stored
/// task is non-empty. Tasks are addressed by position only.
#[derive(Debug, Default)]
pub struct ListStore {
    tasks: Vec<String>,
    editing: Option<EditSession>,
}

fn normalize(text: &str) -> Result<String, StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Blank);
    }
    Ok(trimmed.to_string())
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed tasks, skipping blank entries.
    pub fn with_tasks<I, S>(tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for task in tasks {
            let _ = store.add(task.as_ref());
        }
        store
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tasks.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                index,
                len: self.tasks.len(),
            })
        }
    }

    /// Append a task. Returns its index.
    pub fn add(&mut self, text: &str) -> Result<usize, StoreError> {
        let text = normalize(text)?;
        self.tasks.push(text);
        Ok(self.tasks.len() - 1)
    }

    /// Replace the task at `index`, returning the previous text.
    pub fn replace_at(&mut self, index: usize, text: &str) -> Result<String, StoreError> {
        self.check_index(index)?;
        let text = normalize(text)?;
        Ok(std::mem::replace(&mut self.tasks[index], text))
    }

    /// Remove the task at `index`; later tasks move up by one.
    ///
    /// An edit session on the removed task is closed. A session on a later
    /// task follows it to its new index.
    pub fn remove_at(&mut self, index: usize) -> Result<String, StoreError> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        match self.editing.as_ref().map(|e| e.index) {
            Some(i) if i == index => self.editing = None,
            Some(i) if i > index => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.index -= 1;
                }
            }
            _ => {}
        }
        Ok(removed)
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing.as_ref().map(|e| e.index)
    }

    pub fn draft_mut(&mut self) -> Option<&mut InputState> {
        self.editing.as_mut().map(|e| &mut e.draft)
    }

    /// Start editing `index` with the draft set to its current text.
    /// Replaces any session already open.
    pub fn begin_edit(&mut self, index: usize) -> Result<(), StoreError> {
        self.check_index(index)?;
        self.editing = Some(EditSession {
            index,
            draft: InputState::with_text(&self.tasks[index]),
        });
        Ok(())
    }

    /// Commit the draft. A blank draft is refused and the session stays open.
    pub fn save_edit(&mut self) -> Result<usize, StoreError> {
        let edit = self.editing.as_ref().ok_or(StoreError::NotEditing)?;
        let index = edit.index;
        let draft = edit.draft.text.clone();
        self.replace_at(index, &draft)?;
        self.editing = None;
        Ok(index)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}
