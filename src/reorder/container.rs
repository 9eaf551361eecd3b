use egui::Pos2;

use super::ReorderSession;
use super::roles::DropTarget;
use super::types::{ContainerHints, DragItem, DropOutcome};

/// Host-owned list storage that can be replaced in one step.
pub trait SetItems {
    type Item;

    /// Replace the whole list with `update(previous)`.
    fn set_items(&mut self, update: impl FnOnce(Vec<Self::Item>) -> Vec<Self::Item>);
}

impl<T> SetItems for Vec<T> {
    type Item = T;

    fn set_items(&mut self, update: impl FnOnce(Vec<T>) -> Vec<T>) {
        let previous = std::mem::take(self);
        *self = update(previous);
    }
}

impl<S: SetItems + ?Sized> SetItems for &mut S {
    type Item = S::Item;

    fn set_items(&mut self, update: impl FnOnce(Vec<S::Item>) -> Vec<S::Item>) {
        (**self).set_items(update);
    }
}

/// Dropping at the item's own slot or right after it leaves the list as is.
pub fn is_noop_drop(dragged_index: usize, pending_drop_index: usize) -> bool {
    pending_drop_index == dragged_index || pending_drop_index == dragged_index + 1
}

/// Final position of the moved item once it has been taken out of the list.
pub fn insertion_position(dragged_index: usize, pending_drop_index: usize) -> usize {
    if dragged_index < pending_drop_index {
        pending_drop_index - 1
    } else {
        pending_drop_index
    }
}

/// Move the item at `dragged_index` so it lands at `pending_drop_index` of the original list.
///
/// # Panics
/// If `dragged_index` is out of bounds, which means the list changed during the drag.
pub fn reorder_items<T>(mut items: Vec<T>, dragged_index: usize, pending_drop_index: usize) -> Vec<T> {
    assert!(
        dragged_index < items.len(),
        "dragged index {dragged_index} out of bounds for {} items; the list must not change while dragging",
        items.len()
    );

    let moved = items.remove(dragged_index);
    let at = insertion_position(dragged_index, pending_drop_index).min(items.len());
    items.insert(at, moved);
    items
}

impl ContainerHints {
    pub fn for_session(session: &ReorderSession) -> Self {
        Self {
            pending_drop_index: session.pending_drop_index(),
        }
    }
}

/// The list body: the single place where a drop is committed.
#[derive(Debug)]
pub struct ReorderContainer<S> {
    set_items: S,
}

impl<S: SetItems> ReorderContainer<S> {
    pub fn new(set_items: S) -> Self {
        Self { set_items }
    }

    /// The pointer is inside the list but over none of its items.
    pub fn hover_outside_items(session: &mut ReorderSession) {
        session.hover_item(None);
    }

    pub fn into_inner(self) -> S {
        self.set_items
    }
}

impl<S: SetItems> DropTarget for ReorderContainer<S> {
    fn can_drop(&self, session: &ReorderSession) -> bool {
        !session.is_disabled() && session.pending_drop_index().is_some()
    }

    fn on_hover<U>(&mut self, session: &mut ReorderSession, item: &DragItem<U>, _pointer: Option<Pos2>) {
        if self.accepts(session, item) {
            Self::hover_outside_items(session);
        }
    }

    /// Does not end the drag: the source does that for drops and cancels alike.
    fn on_drop<U>(&mut self, session: &mut ReorderSession, item: &DragItem<U>) -> DropOutcome {
        if !self.accepts(session, item) || !self.can_drop(session) {
            return DropOutcome::Rejected;
        }
        let Some(pending) = session.pending_drop_index() else {
            return DropOutcome::Rejected;
        };

        let from = item.index;
        if is_noop_drop(from, pending) {
            session.debug_log_event(format!("drop unchanged from={from} pending={pending}"));
            return DropOutcome::Unchanged;
        }

        let to = insertion_position(from, pending);
        session.debug_log_event(format!("drop from={from} pending={pending} to={to}"));
        self.set_items
            .set_items(|previous| reorder_items(previous, from, pending));

        DropOutcome::Moved { from, to }
    }
}
