// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_event_state::{PointerButton, PointerId};
use kurbo::Point;

/// A pointer-down or pointer-move, in client (window) coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer.
    pub pointer: PointerId,
    /// Button that changed; only meaningful for pointer-down.
    pub button: PointerButton,
    /// Position in client coordinates.
    pub client: Point,
}

impl PointerEvent {
    /// Creates an event for an arbitrary button.
    #[must_use]
    pub fn new(pointer: PointerId, button: PointerButton, client: Point) -> Self {
        Self {
            pointer,
            button,
            client,
        }
    }

    /// Creates a primary-button event.
    #[must_use]
    pub fn primary(pointer: PointerId, client: Point) -> Self {
        Self::new(pointer, PointerButton::Primary, client)
    }
}

/// A wheel notch, in client coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelEvent {
    /// Cursor position in client coordinates.
    pub client: Point,
    /// Vertical delta; negative scrolls up and zooms in.
    pub delta_y: f64,
}

/// What a pointer-down landed on, as resolved by the host's hit test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HitTarget {
    /// A note, by stable index in the Idea Store.
    Note {
        /// Index of the note.
        index: usize,
        /// The note's current world position. `None` or a non-finite value
        /// is read as the world origin.
        position: Option<Point>,
    },
    /// Empty canvas background.
    Background,
    /// A UI overlay drawn over the canvas (hints, spinners) that must not start a pan.
    Overlay,
}
