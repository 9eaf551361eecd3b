//! Drag-and-drop list reordering for [`egui`].
//!
//! A [`ReorderSession`] tracks one drag at a time for one list. Items report where the dragged item
//! would land, the list container commits the move into the host's `Vec`, and touch sessions get
//! a floating preview that keeps the grab point under the finger.
//!
//! Use [`ReorderList`] for a ready-made `egui` widget, or drive [`ReorderItem`] and
//! [`ReorderContainer`] yourself from any input source.

#![forbid(unsafe_code)]

pub mod reorder;

pub use reorder::{
    ContainerHints, Direction, DragItem, DragSource, DropOutcome, DropTarget, GestureBackend,
    ItemHints, PointerSample, PreviewHints, PreviewStyle, ReorderContainer, ReorderItem,
    ReorderList, ReorderListResponse, ReorderOptions, ReorderSession, SessionState, SetItems,
    StartPolicy, preview_hints, reorder_items, show_preview,
};
