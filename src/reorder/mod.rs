//! Drag-and-drop reordering of one list.
//!
//! The pieces, leaf to root:
//! - [`geometry`]: pointer/rect math (insertion side, canonical candidate, preview origin).
//! - [`ReorderSession`]: the per-list state machine. The only mutation surface.
//! - [`ReorderItem`]: a [`DragSource`] and a [`DropTarget`] that reports candidates.
//! - [`ReorderContainer`]: the [`DropTarget`] that commits a drop into the host's list.
//! - [`preview_hints`]: placement of a synthesized preview for touch drags.
//! - [`ReorderList`]: all of the above wired to `egui` input.

pub mod geometry;

mod container;
mod debug;
mod item;
mod list_ui;
mod options;
mod preview;
mod roles;
mod session;
mod types;

#[cfg(test)]
mod list_ui_tests;

pub use container::{
    ReorderContainer, SetItems, insertion_position, is_noop_drop, reorder_items,
};
pub use item::ReorderItem;
pub use list_ui::{ReorderList, ReorderListResponse, show_preview};
pub use options::{Direction, GestureBackend, ReorderOptions, StartPolicy};
pub use preview::{PreviewHints, PreviewStyle, preview_hints};
pub use roles::{DragSource, DropTarget};
pub use session::ReorderSession;
pub use types::{
    ContainerHints, DragItem, DropOutcome, ItemHints, PointerSample, SessionState,
};
