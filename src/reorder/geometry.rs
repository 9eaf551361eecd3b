use egui::{Pos2, Rect, Vec2};

use super::options::Direction;

/// Half the item's extent along `direction`, measured from its near edge.
pub fn item_middle(direction: Direction, item_rect: Rect) -> f32 {
    if direction.is_horizontal() {
        item_rect.width() / 2.0
    } else {
        item_rect.height() / 2.0
    }
}

/// Distance of `pointer` from the item's near edge along `direction`.
pub fn offset_in_item(direction: Direction, pointer: Pos2, item_rect: Rect) -> f32 {
    if direction.is_horizontal() {
        pointer.x - item_rect.min.x
    } else {
        pointer.y - item_rect.min.y
    }
}

/// Insertion index for a pointer hovering the item at `index`.
///
/// The near half inserts before the item, the far half (midpoint included) after it.
pub fn candidate_index(direction: Direction, pointer: Pos2, item_rect: Rect, index: usize) -> usize {
    if offset_in_item(direction, pointer, item_rect) < item_middle(direction, item_rect) {
        index
    } else {
        index + 1
    }
}

/// Right after the dragged item's own slot is the same place as its own slot.
pub fn canonicalize(candidate: usize, dragged_index: usize) -> usize {
    if candidate == dragged_index + 1 {
        dragged_index
    } else {
        candidate
    }
}

/// Where inside the dragged item the gesture grabbed it. Constant for the whole drag.
pub fn grab_offset(initial_pointer: Pos2, initial_rect: Rect) -> Vec2 {
    initial_pointer - initial_rect.min
}

/// Top-left corner of a preview that keeps the original grab point under the pointer.
pub fn preview_origin(current_pointer: Pos2, grab_offset: Vec2) -> Pos2 {
    current_pointer - grab_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_rect() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 40.0), Vec2::new(80.0, 20.0))
    }

    #[test]
    fn near_half_inserts_before_far_half_after() {
        let rect = item_rect();
        assert_eq!(
            candidate_index(Direction::Horizontal, Pos2::new(120.0, 50.0), rect, 3),
            3
        );
        assert_eq!(
            candidate_index(Direction::Horizontal, Pos2::new(170.0, 50.0), rect, 3),
            4
        );
        assert_eq!(
            candidate_index(Direction::Vertical, Pos2::new(170.0, 45.0), rect, 3),
            3
        );
        assert_eq!(
            candidate_index(Direction::Vertical, Pos2::new(110.0, 55.0), rect, 3),
            4
        );
    }

    #[test]
    fn exact_midpoint_resolves_after() {
        let rect = item_rect();
        assert_eq!(
            candidate_index(Direction::Horizontal, Pos2::new(140.0, 50.0), rect, 2),
            3
        );
        assert_eq!(
            candidate_index(Direction::Vertical, Pos2::new(110.0, 50.0), rect, 2),
            3
        );
        // Dragging item 1 over item 1's midpoint: after-branch, then canonicalized back.
        let candidate = candidate_index(Direction::Vertical, Pos2::new(110.0, 50.0), rect, 1);
        assert_eq!(canonicalize(candidate, 1), 1);
    }

    #[test]
    fn only_the_slot_after_the_dragged_item_collapses() {
        for dragged in 0..6 {
            assert_eq!(canonicalize(dragged, dragged), dragged);
            assert_eq!(canonicalize(dragged + 1, dragged), dragged);
            assert_eq!(canonicalize(dragged + 2, dragged), dragged + 2);
        }
        assert_eq!(canonicalize(0, 3), 0);
    }

    #[test]
    fn pointer_outside_the_item_still_picks_a_side() {
        let rect = item_rect();
        assert_eq!(
            candidate_index(Direction::Horizontal, Pos2::new(90.0, 50.0), rect, 5),
            5
        );
        assert_eq!(
            candidate_index(Direction::Horizontal, Pos2::new(400.0, 50.0), rect, 5),
            6
        );
    }

    #[test]
    fn preview_keeps_grab_point_under_pointer() {
        let rect = item_rect();
        let grab = grab_offset(Pos2::new(130.0, 45.0), rect);
        assert_eq!(grab, Vec2::new(30.0, 5.0));

        assert_eq!(preview_origin(Pos2::new(130.0, 45.0), grab), rect.min);
        assert_eq!(
            preview_origin(Pos2::new(300.0, 245.0), grab),
            Pos2::new(270.0, 240.0)
        );
    }
}
