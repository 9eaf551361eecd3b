use egui::{Id, Pos2, Rect};

/// The shared record of one reorder session.
///
/// `dragged_index` is `Some` exactly while a drag is active. `pending_drop_index` only carries
/// meaning while `dragged_index` is `Some`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Index of the dragged item in the host's list, as of drag start.
    pub dragged_index: Option<usize>,

    /// Where the dragged item would be inserted if the gesture ended now.
    pub pending_drop_index: Option<usize>,

    /// Bounding box of the dragged item at drag start. Only used to size the preview.
    pub dragged_initial_rect: Option<Rect>,
}

impl SessionState {
    pub const IDLE: Self = Self {
        dragged_index: None,
        pending_drop_index: None,
        dragged_initial_rect: None,
    };

    /// A drag that ends right away lands where it started, so the candidate starts at `index`.
    pub(super) fn started(index: usize, initial_rect: Rect) -> Self {
        Self {
            dragged_index: Some(index),
            pending_drop_index: Some(index),
            dragged_initial_rect: Some(initial_rect),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.dragged_index.is_none()
    }
}

/// Payload carried by one drag gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragItem<T> {
    /// Tag of the session that produced this payload.
    pub item_type: Id,

    /// Position of the dragged item in the host's list at drag start.
    pub index: usize,

    /// Host data. Never inspected by the session.
    pub data: T,
}

/// Pointer positions reported by the gesture backend for the active drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Where the gesture started.
    pub initial: Pos2,

    /// Where the pointer is now.
    pub current: Pos2,
}

/// Per-item render hints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemHints {
    pub is_disabled: bool,

    /// True iff this item is the one being dragged. Hosts usually hide or dim it.
    pub is_dragging: bool,

    pub pending_drop_index: Option<usize>,
}

impl ItemHints {
    /// Whether a drop placeholder belongs right before the item at `index`.
    pub fn placeholder_before(&self, index: usize) -> bool {
        self.pending_drop_index == Some(index)
    }
}

/// Per-container render hints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContainerHints {
    pub pending_drop_index: Option<usize>,
}

impl ContainerHints {
    /// Whether a drop placeholder belongs after the last of `len` items.
    pub fn placeholder_at_end(&self, len: usize) -> bool {
        self.pending_drop_index == Some(len)
    }
}

/// What happened when a drag ended over the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The host list was replaced; the item that was at `from` now sits at `to`.
    Moved { from: usize, to: usize },

    /// The candidate was the item's own slot. The list was left alone.
    Unchanged,

    /// Disabled session, foreign payload, or no candidate.
    Rejected,
}

impl DropOutcome {
    pub fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}
