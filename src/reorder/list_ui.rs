use std::hash::Hash;

use egui::{Align, Context, Id, Layout, Order, Pos2, Rect, Response, Sense, Ui, Vec2};

use super::ReorderSession;
use super::container::ReorderContainer;
use super::item::ReorderItem;
use super::preview::{PreviewHints, preview_hints};
use super::roles::{DragSource as _, DropTarget as _};
use super::types::{ContainerHints, DragItem, DropOutcome, ItemHints, PointerSample};

/// Payload stored in `egui::DragAndDrop` while one of our items is dragged.
/// The data is the dragged item's widget id.
type ListPayload = DragItem<Id>;

/// An `egui` list whose items can be reordered by dragging them.
///
/// ```no_run
/// # let ctx = egui::Context::default();
/// # let mut session = egui_reorder::ReorderSession::default();
/// # let mut items = vec!["a", "b", "c"];
/// egui::CentralPanel::default().show(&ctx, |ui| {
///     egui_reorder::ReorderList::new(&mut session).show(ui, &mut items, |s| *s, |ui, s, hints| {
///         ui.add_enabled(!hints.is_dragging, egui::Label::new(*s).selectable(false))
///     });
/// });
/// ```
pub struct ReorderList<'s> {
    session: &'s mut ReorderSession,
}

/// Result of [`ReorderList::show`].
#[derive(Debug)]
pub struct ReorderListResponse {
    /// Covers the whole list.
    pub response: Response,

    pub hints: ContainerHints,

    /// Set on the frame a drag was released over the list.
    pub outcome: Option<DropOutcome>,

    /// Pointer positions of the active drag, for [`preview_hints`].
    pub pointer: Option<PointerSample>,
}

impl ReorderListResponse {
    /// Whether this frame's drop changed the list.
    pub fn reordered(&self) -> bool {
        self.outcome.is_some_and(DropOutcome::is_moved)
    }

    /// Preview hints for the dragged item of `items`.
    pub fn preview<'a, T>(&self, session: &ReorderSession, items: &'a [T]) -> PreviewHints<'a, T> {
        let item = session.dragged_index().and_then(|index| items.get(index));
        preview_hints(session, item, self.pointer)
    }
}

impl<'s> ReorderList<'s> {
    pub fn new(session: &'s mut ReorderSession) -> Self {
        Self { session }
    }

    /// Show `items`, each drawn by `item_ui`, and apply a drop to `items` when one happens.
    ///
    /// `key` must be stable for an item across frames; it keys the item's drag interaction.
    pub fn show<T, K: Hash>(
        self,
        ui: &mut Ui,
        items: &mut Vec<T>,
        key: impl Fn(&T) -> K,
        mut item_ui: impl FnMut(&mut Ui, &T, ItemHints) -> Response,
    ) -> ReorderListResponse {
        let session = self.session;
        session.begin_frame();

        let item_type = session.item_type();
        let payload = egui::DragAndDrop::payload::<ListPayload>(ui.ctx())
            .filter(|payload| payload.item_type == item_type);

        // Hover against the rects laid out last frame, so item hints drawn below are current.
        let rects_id = Id::new(item_type).with("item_rects");
        let pointer_pos = ui.input(|i| i.pointer.latest_pos());
        if let Some(payload) = payload.as_deref() {
            let last_rects: Vec<Rect> = ui.data(|d| d.get_temp(rects_id)).unwrap_or_default();
            match item_under_pointer(&last_rects, pointer_pos) {
                Some((index, rect)) => {
                    ReorderItem::new(index, (), rect).on_hover(session, payload, pointer_pos);
                }
                None => {
                    ReorderContainer::new(&mut *items).on_hover(session, payload, pointer_pos);
                }
            }
        }

        let layout = if session.direction().is_horizontal() {
            Layout::left_to_right(Align::Min)
        } else {
            Layout::top_down(Align::Min)
        };

        let inner = ui.with_layout(layout, |ui| {
            if let Some(spacing) = session.options().item_spacing {
                ui.spacing_mut().item_spacing = Vec2::splat(spacing);
            }

            let mut rects = Vec::with_capacity(items.len());
            let mut started: Option<(usize, Id, Rect)> = None;
            let mut stopped: Option<(usize, Id, Rect)> = None;
            let sense = if session.is_disabled() {
                Sense::hover()
            } else {
                Sense::drag()
            };

            for (index, item) in items.iter().enumerate() {
                let response = item_ui(ui, item, ItemHints::for_index(session, index));
                let id = Id::new(item_type).with(key(item));
                let drag = ui.interact(response.rect, id, sense);

                if drag.drag_started() {
                    started = Some((index, id, response.rect));
                }
                if drag.drag_stopped() {
                    stopped = Some((index, id, response.rect));
                }
                rects.push(response.rect);
            }

            (rects, started, stopped)
        });
        let (rects, started, stopped) = inner.inner;
        let list_rect = inner.response.rect;
        ui.data_mut(|d| d.insert_temp(rects_id, rects));

        if let Some((index, id, rect)) = started {
            let mut source = ReorderItem::new(index, id, rect);
            if let Some(payload) = source.begin_drag(session) {
                egui::DragAndDrop::set_payload(ui.ctx(), payload);
            }
        }

        let mut outcome = None;

        if let Some(payload) = payload.as_deref() {
            let released = ui.input(|i| i.pointer.any_released());
            if released && pointer_pos.is_some_and(|pos| list_rect.contains(pos)) {
                outcome = Some(ReorderContainer::new(&mut *items).on_drop(session, payload));
            }
        }

        // After the drop, so the container sees the final candidate.
        if let Some((index, id, rect)) = stopped {
            ReorderItem::new(index, id, rect).end_drag(session);
            if payload.is_some() {
                egui::DragAndDrop::clear_payload(ui.ctx());
            }
        }

        let pointer = if session.is_dragging() {
            let initial = ui.input(|i| i.pointer.press_origin());
            initial
                .zip(pointer_pos)
                .map(|(initial, current)| PointerSample { initial, current })
        } else {
            None
        };

        if session.is_dragging() {
            ui.ctx().request_repaint();
        }

        ReorderListResponse {
            response: inner.response,
            hints: ContainerHints::for_session(session),
            outcome,
            pointer,
        }
    }
}

fn item_under_pointer(rects: &[Rect], pointer: Option<Pos2>) -> Option<(usize, Rect)> {
    let pointer = pointer?;
    rects
        .iter()
        .position(|rect| rect.contains(pointer))
        .map(|index| (index, rects[index]))
}

/// Paint `add_contents` as the floating preview of a touch drag.
///
/// Does nothing for sessions on [`super::GestureBackend::Pointer`] or while `hints` is hidden.
pub fn show_preview<T, R>(
    ctx: &Context,
    session: &ReorderSession,
    hints: &PreviewHints<'_, T>,
    add_contents: impl FnOnce(&mut Ui, &T) -> R,
) -> Option<R> {
    if !session.backend().synthesizes_preview() || !hints.is_visible {
        return None;
    }
    let (Some(style), Some(item)) = (hints.style, hints.item) else {
        return None;
    };

    let area = egui::Area::new(Id::new(session.item_type()).with("preview"))
        .order(Order::Tooltip)
        .fixed_pos(style.position)
        .interactable(style.interactable)
        .show(ctx, |ui| {
            ui.set_min_size(style.size);
            ui.set_max_width(style.size.x);
            add_contents(ui, item)
        });
    Some(area.inner)
}
