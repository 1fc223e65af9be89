use ratatui::layout::Rect;
use std::cmp::Ordering;

/// A hit-testable region of the screen. Buttons carry ripples; the other
/// regions only move focus or selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    AddButton,
    EditButton(usize),
    DeleteButton(usize),
    SaveEdit,
    CancelEdit,
    ConfirmDelete,
    CancelDelete,
    NewTaskInput,
    EditInput,
    Row(usize),
}

impl Surface {
    pub fn is_button(&self) -> bool {
        !matches!(
            self,
            Surface::NewTaskInput | Surface::EditInput | Surface::Row(_)
        )
    }

    /// This surface's id once the task at `removed` is gone, or `None` if it
    /// belonged to that task.
    pub fn after_removal(self, removed: usize) -> Option<Surface> {
        let shift = |i: usize| match i.cmp(&removed) {
            Ordering::Less => Some(i),
            Ordering::Equal => None,
            Ordering::Greater => Some(i - 1),
        };
        match self {
            Surface::EditButton(i) => shift(i).map(Surface::EditButton),
            Surface::DeleteButton(i) => shift(i).map(Surface::DeleteButton),
            Surface::Row(i) => shift(i).map(Surface::Row),
            other => Some(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Base,
    Modal,
}

#[derive(Debug, Clone)]
struct Region {
    surface: Surface,
    rect: Rect,
    layer: Layer,
}

/// Regions drawn in the last frame, in paint order.
///
/// While a modal is on screen only modal regions can be hit, but base
/// regions stay registered so their ripples keep animating underneath.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<Region>,
    modal_open: bool,
    /// Number of task rows that fit in the list viewport.
    pub list_rows: usize,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, surface: Surface, rect: Rect) {
        self.regions.push(Region {
            surface,
            rect,
            layer: Layer::Base,
        });
    }

    /// Block base regions for a modal that had no room to draw its own.
    pub fn block_base(&mut self) {
        self.modal_open = true;
    }

    pub fn push_modal(&mut self, surface: Surface, rect: Rect) {
        self.modal_open = true;
        self.regions.push(Region {
            surface,
            rect,
            layer: Layer::Modal,
        });
    }

    /// Topmost region under the given terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<(Surface, Rect)> {
        self.regions
            .iter()
            .rev()
            .filter(|r| !self.modal_open || r.layer == Layer::Modal)
            .find(|r| {
                column >= r.rect.x
                    && column < r.rect.right()
                    && row >= r.rect.y
                    && row < r.rect.bottom()
            })
            .map(|r| (r.surface, r.rect))
    }

    pub fn rect_of(&self, surface: Surface) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.surface == surface)
            .map(|r| r.rect)
    }

    pub fn contains(&self, surface: &Surface) -> bool {
        self.regions.iter().any(|r| r.surface == *surface)
    }

    #[cfg(test)]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_prefers_topmost() {
        let mut map = HitMap::new();
        map.push(Surface::Row(0), Rect::new(0, 0, 20, 3));
        map.push(Surface::EditButton(0), Rect::new(12, 0, 8, 3));
        assert_eq!(map.hit(13, 1).map(|h| h.0), Some(Surface::EditButton(0)));
        assert_eq!(map.hit(2, 1).map(|h| h.0), Some(Surface::Row(0)));
        assert_eq!(map.hit(20, 1), None);
        assert_eq!(map.hit(2, 3), None);
    }

    #[test]
    fn test_modal_blocks_base_regions() {
        let mut map = HitMap::new();
        map.push(Surface::AddButton, Rect::new(0, 10, 40, 3));
        map.push_modal(Surface::ConfirmDelete, Rect::new(5, 4, 10, 3));
        assert!(map.is_modal_open());
        assert_eq!(map.hit(1, 11), None);
        assert_eq!(map.hit(6, 5).map(|h| h.0), Some(Surface::ConfirmDelete));
        assert!(map.contains(&Surface::AddButton));
    }

    #[test]
    fn test_blocked_base_without_modal_regions() {
        let mut map = HitMap::new();
        map.push(Surface::EditButton(0), Rect::new(0, 0, 10, 3));
        map.block_base();
        assert_eq!(map.hit(1, 1), None);
    }

    #[test]
    fn test_after_removal_shifts_row_surfaces() {
        assert_eq!(Surface::Row(0).after_removal(1), Some(Surface::Row(0)));
        assert_eq!(Surface::DeleteButton(1).after_removal(1), None);
        assert_eq!(Surface::EditButton(1).after_removal(1), None);
        assert_eq!(
            Surface::EditButton(3).after_removal(1),
            Some(Surface::EditButton(2))
        );
        assert_eq!(Surface::AddButton.after_removal(0), Some(Surface::AddButton));
    }

    #[test]
    fn test_only_buttons_carry_ripples() {
        assert!(Surface::AddButton.is_button());
        assert!(Surface::DeleteButton(3).is_button());
        assert!(!Surface::Row(0).is_button());
        assert!(!Surface::NewTaskInput.is_button());
    }
}
