use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use egui::{Id, Rect};

use super::options::{Direction, GestureBackend, ReorderOptions, StartPolicy};
use super::types::SessionState;

static NEXT_SESSION_SERIAL: AtomicU64 = AtomicU64::new(1);

/// State machine for dragging one item of one list.
///
/// One session belongs to one reorderable list mount. Items and the container never touch the
/// state directly; they go through [`Self::start_drag`], [`Self::hover_item`] and
/// [`Self::end_drag`].
///
/// ```text
/// Idle --start_drag--> Dragging --end_drag--> Idle
/// ```
#[derive(Debug)]
pub struct ReorderSession {
    pub(super) options: ReorderOptions,
    item_type: Id,
    state: Arc<SessionState>,
    queued_start: Option<SessionState>,
    revision: u64,
    pub(super) frame: u64,
    pub(super) debug_log: VecDeque<String>,
}

impl Default for ReorderSession {
    fn default() -> Self {
        Self::new(ReorderOptions::default())
    }
}

impl ReorderSession {
    pub fn new(options: ReorderOptions) -> Self {
        let serial = NEXT_SESSION_SERIAL.fetch_add(1, Ordering::Relaxed);
        Self {
            options,
            item_type: Id::new(("egui_reorder_session", serial)),
            state: Arc::new(SessionState::IDLE),
            queued_start: None,
            revision: 0,
            frame: 0,
            debug_log: VecDeque::new(),
        }
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    /// Tag shared by every payload and target of this session.
    ///
    /// Unique per session, so two lists on the same screen never accept each other's items.
    pub fn item_type(&self) -> Id {
        self.item_type
    }

    pub fn direction(&self) -> Direction {
        self.options.direction
    }

    pub fn backend(&self) -> GestureBackend {
        self.options.backend
    }

    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.options.disabled != disabled {
            self.options.disabled = disabled;
            self.debug_log_event(format!("disabled={disabled}"));
        }
    }

    /// Current state by value.
    pub fn state(&self) -> SessionState {
        *self.state
    }

    /// Current state by reference. Unchanged state keeps the same allocation, see
    /// [`Self::hover_item`].
    pub fn snapshot(&self) -> Arc<SessionState> {
        Arc::clone(&self.state)
    }

    /// Bumped on every observable state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.state.dragged_index
    }

    pub fn pending_drop_index(&self) -> Option<usize> {
        self.state.pending_drop_index
    }

    pub fn dragged_initial_rect(&self) -> Option<Rect> {
        self.state.dragged_initial_rect
    }

    pub fn is_dragging(&self) -> bool {
        !self.state.is_idle()
    }

    /// Whether a [`Self::start_drag`] is waiting for the next [`Self::begin_frame`].
    pub fn has_queued_start(&self) -> bool {
        self.queued_start.is_some()
    }

    /// Call once per frame before any item or container of this session runs.
    ///
    /// Applies a start queued by [`StartPolicy::NextFrame`].
    pub fn begin_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if let Some(started) = self.queued_start.take() {
            self.debug_log_event(format!(
                "start applied index={:?}",
                started.dragged_index
            ));
            self.replace_state(started);
        }
    }

    /// Begin a drag of the item at `index`. Call exactly once per gesture, when it starts.
    pub fn start_drag(&mut self, index: usize, initial_rect: Rect) {
        let started = SessionState::started(index, initial_rect);
        match self.options.start_policy {
            StartPolicy::Immediate => {
                self.debug_log_event(format!("start index={index}"));
                self.replace_state(started);
            }
            StartPolicy::NextFrame => {
                self.debug_log_event(format!("start queued index={index}"));
                self.queued_start = Some(started);
            }
        }
    }

    /// End the current drag, dropped or cancelled. Call exactly once per gesture, when it ends.
    pub fn end_drag(&mut self) {
        let discarded_start = self.queued_start.take().is_some();
        self.debug_log_event(format!(
            "end dragged={:?} pending={:?} discarded_queued_start={discarded_start}",
            self.state.dragged_index, self.state.pending_drop_index
        ));
        self.replace_state(SessionState::IDLE);
    }

    /// Report the insertion candidate under the pointer, or `None` when the pointer is over no
    /// registered surface.
    ///
    /// Repeating the current value is a no-op: the snapshot and revision stay the same.
    /// Ignored while idle.
    pub fn hover_item(&mut self, candidate: Option<usize>) {
        if self.state.is_idle() || self.state.pending_drop_index == candidate {
            return;
        }

        self.debug_log_event(format!(
            "hover {:?} -> {candidate:?}",
            self.state.pending_drop_index
        ));
        self.replace_state(SessionState {
            pending_drop_index: candidate,
            ..*self.state
        });
    }

    fn replace_state(&mut self, next: SessionState) {
        if *self.state == next {
            return;
        }
        self.state = Arc::new(next);
        self.revision = self.revision.wrapping_add(1);
    }
}
