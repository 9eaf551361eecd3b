/// Layout axis of a reorderable list.
///
/// Decides which pointer coordinate is compared against an item's midpoint while hovering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Items flow left to right; the pointer's `x` picks the insertion side.
    #[default]
    Horizontal,

    /// Items flow top to bottom; the pointer's `y` picks the insertion side.
    Vertical,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Which input source drives drag gestures.
///
/// The host decides this once (usually from a "is touch screen" heuristic) and the session keeps it
/// for its whole lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureBackend {
    /// Mouse/pen input. The host provides its own drag feedback.
    #[default]
    Pointer,

    /// Touch input. Nothing follows the finger by default, so a floating preview is synthesized
    /// (see [`super::preview_hints`]).
    Touch,
}

impl GestureBackend {
    pub fn from_touch_screen(is_touch_screen: bool) -> Self {
        if is_touch_screen {
            Self::Touch
        } else {
            Self::Pointer
        }
    }

    /// Whether sessions using this backend mount the floating preview.
    pub fn synthesizes_preview(self) -> bool {
        matches!(self, Self::Touch)
    }
}

/// When [`super::ReorderSession::start_drag`] becomes visible in the session state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartPolicy {
    /// Queue the start and apply it on the next [`super::ReorderSession::begin_frame`].
    ///
    /// Hiding the dragged item in the same frame the gesture starts changes the layout under the
    /// gesture, which some backends treat as an aborted drag.
    #[default]
    NextFrame,

    /// Apply the start synchronously.
    Immediate,
}

/// Options for [`super::ReorderSession`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReorderOptions {
    /// Layout axis of the list.
    pub direction: Direction,

    /// If true, no item can start a drag and the container never accepts a drop.
    pub disabled: bool,

    /// Input source selection, see [`GestureBackend`].
    pub backend: GestureBackend,

    /// See [`StartPolicy`].
    pub start_policy: StartPolicy,

    /// Spacing between items in [`super::ReorderList`], in points.
    ///
    /// `None` keeps the spacing of the surrounding `egui::Style`.
    pub item_spacing: Option<f32>,

    /// Record session transitions into an in-memory ring buffer
    /// (see [`super::ReorderSession::debug_log_text`]).
    ///
    /// Lines are sent to the `log` facade at debug level either way.
    pub debug_event_log: bool,

    /// Maximum number of lines kept by the debug event log.
    pub debug_event_log_capacity: usize,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            disabled: false,
            backend: GestureBackend::default(),
            start_policy: StartPolicy::default(),
            item_spacing: None,
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_screen_selects_touch_backend() {
        assert_eq!(GestureBackend::from_touch_screen(true), GestureBackend::Touch);
        assert_eq!(GestureBackend::from_touch_screen(false), GestureBackend::Pointer);
        assert!(GestureBackend::Touch.synthesizes_preview());
        assert!(!GestureBackend::Pointer.synthesizes_preview());
    }

    #[test]
    fn defaults_match_documented_values() {
        let options = ReorderOptions::default();
        assert_eq!(options.direction, Direction::Horizontal);
        assert!(!options.disabled);
        assert_eq!(options.backend, GestureBackend::Pointer);
        assert_eq!(options.start_policy, StartPolicy::NextFrame);
        assert_eq!(options.debug_event_log_capacity, 200);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_survive_ron_and_json() {
        let options = ReorderOptions {
            direction: Direction::Vertical,
            backend: GestureBackend::Touch,
            start_policy: StartPolicy::Immediate,
            item_spacing: Some(6.0),
            ..Default::default()
        };

        let text = ron::to_string(&options).expect("ron serialize");
        let back: ReorderOptions = ron::from_str(&text).expect("ron deserialize");
        assert_eq!(back, options);

        let json = serde_json::to_string(&options).expect("json serialize");
        let back: ReorderOptions = serde_json::from_str(&json).expect("json deserialize");
        assert_eq!(back, options);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options: ReorderOptions =
            serde_json::from_str(r#"{ "direction": "Vertical" }"#).expect("json deserialize");
        assert_eq!(options.direction, Direction::Vertical);
        assert_eq!(options.backend, GestureBackend::Pointer);
        assert_eq!(options.debug_event_log_capacity, 200);
    }
}
