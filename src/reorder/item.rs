use egui::{Pos2, Rect};

use super::ReorderSession;
use super::geometry::{candidate_index, canonicalize};
use super::roles::{DragSource, DropTarget};
use super::types::{DragItem, ItemHints};

impl ItemHints {
    pub fn for_index(session: &ReorderSession, index: usize) -> Self {
        Self {
            is_disabled: session.is_disabled(),
            // Read from the session, not from the backend's own "dragging" flag, which lags a frame.
            is_dragging: session.dragged_index() == Some(index),
            pending_drop_index: session.pending_drop_index(),
        }
    }
}

/// One rendered list item: a drag source and a drop target that never takes the drop itself.
#[derive(Clone, Debug)]
pub struct ReorderItem<T> {
    index: usize,
    data: T,
    rect: Rect,
}

impl<T> ReorderItem<T> {
    /// `rect` is the item's current on-screen bounding box.
    pub fn new(index: usize, data: T, rect: Rect) -> Self {
        Self { index, data, rect }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn hints(&self, session: &ReorderSession) -> ItemHints {
        ItemHints::for_index(session, self.index)
    }
}

impl<T: Clone> DragSource for ReorderItem<T> {
    type Data = T;

    fn begin_drag(&mut self, session: &mut ReorderSession) -> Option<DragItem<T>> {
        if !self.can_drag(session) {
            return None;
        }

        session.start_drag(self.index, self.rect);
        Some(DragItem {
            item_type: session.item_type(),
            index: self.index,
            data: self.data.clone(),
        })
    }

    fn end_drag(&mut self, session: &mut ReorderSession) {
        session.end_drag();
    }
}

impl<T> DropTarget for ReorderItem<T> {
    fn can_drop(&self, _session: &ReorderSession) -> bool {
        false
    }

    fn on_hover<U>(&mut self, session: &mut ReorderSession, item: &DragItem<U>, pointer: Option<Pos2>) {
        if !self.accepts(session, item) {
            return;
        }
        let Some(pointer) = pointer else {
            return;
        };

        let candidate = candidate_index(session.direction(), pointer, self.rect, self.index);
        session.hover_item(Some(canonicalize(candidate, item.index)));
    }
}
