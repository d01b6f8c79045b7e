// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Note drag session: keep the grab point under the pointer.
//!
//! ## Usage
//!
//! 1) On pointer-down over a note, convert the pointer to world space and call
//!    [`ItemDrag::begin`] with the note's current position.
//! 2) On each move, convert the pointer to world space again, under the
//!    transform that is current *now*, and call [`ItemDrag::position_for`].
//! 3) Drop the session on pointer-up.
//!
//! Because each move is converted fresh, the drag stays correct if the canvas
//! pans or zooms while the note is held.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use corkboard_event_state::drag::ItemDrag;
//!
//! // Grab note 3, positioned at (100, 100), at world point (110, 130).
//! let drag = ItemDrag::begin(3, Point::new(110.0, 130.0), Point::new(100.0, 100.0));
//!
//! // The pointer moves to world (160, 150): the note follows without jumping.
//! assert_eq!(drag.position_for(Point::new(160.0, 150.0)), Point::new(150.0, 120.0));
//! ```

use kurbo::{Point, Vec2};

/// An in-progress drag of the note at a stable list index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDrag {
    index: usize,
    grab_offset: Vec2,
}

impl ItemDrag {
    /// Starts dragging note `index`, grabbed at `grab_world`, whose origin is at `item_origin`.
    #[must_use]
    pub fn begin(index: usize, grab_world: Point, item_origin: Point) -> Self {
        Self {
            index,
            grab_offset: grab_world - item_origin,
        }
    }

    /// Index of the dragged note in the Idea Store.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Offset from the note origin to the grab point, in world units.
    #[must_use]
    pub fn grab_offset(&self) -> Vec2 {
        self.grab_offset
    }

    /// Note position that keeps the grab point under a pointer at `world`.
    #[must_use]
    pub fn position_for(&self, world: Point) -> Point {
        world - self.grab_offset
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::ItemDrag;

    #[test]
    fn grabbing_the_origin_tracks_the_pointer() {
        let drag = ItemDrag::begin(0, Point::new(100.0, 100.0), Point::new(100.0, 100.0));
        assert_eq!(drag.grab_offset(), Vec2::ZERO);
        assert_eq!(drag.position_for(Point::new(150.0, 120.0)), Point::new(150.0, 120.0));
    }

    #[test]
    fn grab_does_not_move_the_note() {
        let origin = Point::new(-20.0, 35.5);
        let grab = Point::new(41.0, 80.25);
        let drag = ItemDrag::begin(7, grab, origin);
        assert_eq!(drag.index(), 7);
        assert_eq!(drag.position_for(grab), origin);
    }

    #[test]
    fn movement_is_linear() {
        let drag = ItemDrag::begin(1, Point::new(10.0, 10.0), Point::new(0.0, 0.0));
        let delta = Vec2::new(-33.0, 12.5);
        assert_eq!(
            drag.position_for(Point::new(10.0, 10.0) + delta),
            Point::new(0.0, 0.0) + delta
        );
    }

    #[test]
    fn sessions_are_independent() {
        let a = ItemDrag::begin(0, Point::new(5.0, 5.0), Point::new(0.0, 0.0));
        let b = ItemDrag::begin(1, Point::new(300.0, 300.0), Point::new(290.0, 250.0));
        let p = Point::new(400.0, 400.0);
        assert_eq!(a.position_for(p), Point::new(395.0, 395.0));
        assert_eq!(b.position_for(p), Point::new(390.0, 350.0));
    }
}
