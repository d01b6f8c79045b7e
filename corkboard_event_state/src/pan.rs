// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan session: translate the canvas offset by the pointer's screen-space travel.
//!
//! A pan snapshots the pointer position and the canvas offset at pointer-down.
//! Every move computes the new offset from that snapshot, so the result never
//! accumulates rounding from earlier moves.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use corkboard_event_state::pan::PanSession;
//!
//! let pan = PanSession::begin(Point::new(100.0, 100.0), Vec2::new(-40.0, 10.0));
//! assert_eq!(pan.offset_for(Point::new(130.0, 90.0)), Vec2::new(-10.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

/// Snapshot taken when a pan starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSession {
    pointer_start: Point,
    offset_at_start: Vec2,
}

impl PanSession {
    /// Starts a pan with the pointer at `pointer` (client space) and the canvas at `offset`.
    #[must_use]
    pub fn begin(pointer: Point, offset: Vec2) -> Self {
        Self {
            pointer_start: pointer,
            offset_at_start: offset,
        }
    }

    /// Pointer position at pan start.
    #[must_use]
    pub fn pointer_start(&self) -> Point {
        self.pointer_start
    }

    /// Canvas offset at pan start.
    #[must_use]
    pub fn offset_at_start(&self) -> Vec2 {
        self.offset_at_start
    }

    /// Offset the canvas should have with the pointer at `pointer`.
    #[must_use]
    pub fn offset_for(&self, pointer: Point) -> Vec2 {
        self.offset_at_start + (pointer - self.pointer_start)
    }

    /// Shifts the snapshot by `delta`.
    ///
    /// Call this when something other than the pan moved the offset mid-gesture
    /// (a wheel zoom, for instance) so the next move does not undo it.
    pub fn rebase(&mut self, delta: Vec2) {
        self.offset_at_start += delta;
    }
}
