use egui::{Pos2, Rect, Vec2};

use super::ReorderSession;
use super::geometry::{grab_offset, preview_origin};
use super::types::PointerSample;

/// Placement of the floating preview, in screen points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewStyle {
    /// Top-left corner.
    pub position: Pos2,

    /// Size of the dragged item at drag start.
    pub size: Vec2,

    /// Positioned against the screen, not the list.
    pub fixed: bool,

    /// Whether the preview may take pointer events. Always false, so hit-testing sees the list
    /// underneath.
    pub interactable: bool,
}

impl PreviewStyle {
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }
}

/// What the host's preview element should show this frame.
#[derive(Debug)]
pub struct PreviewHints<'a, T> {
    pub is_visible: bool,
    pub item: Option<&'a T>,
    pub style: Option<PreviewStyle>,
}

impl<T> PreviewHints<'_, T> {
    pub fn hidden() -> Self {
        Self {
            is_visible: false,
            item: None,
            style: None,
        }
    }
}

/// Compute where a touch drag preview goes.
///
/// Hidden unless a drag is active, the backend reported a pointer sample, and the dragged item's
/// rect was captured at start.
pub fn preview_hints<'a, T>(
    session: &ReorderSession,
    item: Option<&'a T>,
    sample: Option<PointerSample>,
) -> PreviewHints<'a, T> {
    if !session.is_dragging() {
        return PreviewHints::hidden();
    }
    let (Some(sample), Some(initial_rect)) = (sample, session.dragged_initial_rect()) else {
        return PreviewHints::hidden();
    };

    let grab = grab_offset(sample.initial, initial_rect);
    PreviewHints {
        is_visible: true,
        item,
        style: Some(PreviewStyle {
            position: preview_origin(sample.current, grab),
            size: initial_rect.size(),
            fixed: true,
            interactable: false,
        }),
    }
}
