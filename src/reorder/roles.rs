use egui::Pos2;

use super::ReorderSession;
use super::types::{DragItem, DropOutcome};

/// Something that can start a drag gesture and carry a payload.
pub trait DragSource {
    type Data;

    fn can_drag(&self, session: &ReorderSession) -> bool {
        !session.is_disabled()
    }

    /// Called when the gesture starts. Returns `None` if this source refuses to drag.
    fn begin_drag(&mut self, session: &mut ReorderSession) -> Option<DragItem<Self::Data>>;

    /// Called when the gesture ends, whether it was dropped or cancelled.
    fn end_drag(&mut self, session: &mut ReorderSession);
}

/// Something that reacts to a drag hovering it and may accept the drop.
pub trait DropTarget {
    /// Only payloads produced by this session are accepted.
    fn accepts<T>(&self, session: &ReorderSession, item: &DragItem<T>) -> bool {
        item.item_type == session.item_type()
    }

    fn can_drop(&self, session: &ReorderSession) -> bool;

    /// Called while `item` hovers this target. `pointer` is `None` when the backend has no
    /// position for this frame.
    fn on_hover<T>(&mut self, session: &mut ReorderSession, item: &DragItem<T>, pointer: Option<Pos2>);

    /// Called when `item` is released over this target.
    fn on_drop<T>(&mut self, session: &mut ReorderSession, item: &DragItem<T>) -> DropOutcome {
        let _ = (session, item);
        DropOutcome::Rejected
    }
}
