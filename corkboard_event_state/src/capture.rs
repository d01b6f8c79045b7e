// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer capture hooks.
//!
//! While a gesture is active the canvas must keep receiving its pointer's
//! moves, even when the pointer strays off the note or off the canvas. Hosts
//! provide that with platform capture (`setPointerCapture`) or by subscribing
//! window-level move/up listeners. [`GestureTracker`](crate::GestureTracker)
//! calls [`PointerCapture::capture`] when a session starts and
//! [`PointerCapture::release`] exactly once when it ends, whichever event ends it.

use smallvec::SmallVec;

use crate::pointer::PointerId;

/// Host hook that subscribes and unsubscribes pointer delivery for a gesture.
pub trait PointerCapture {
    /// Start routing every event of `pointer` to the canvas.
    fn capture(&mut self, pointer: PointerId);

    /// Stop routing events of `pointer`; undoes one earlier [`PointerCapture::capture`].
    fn release(&mut self, pointer: PointerId);
}

/// Hosts that need no capture (tests, headless replay) can pass `&mut ()`.
impl PointerCapture for () {
    #[inline]
    fn capture(&mut self, _: PointerId) {}

    #[inline]
    fn release(&mut self, _: PointerId) {}
}

/// A capture implementation that just remembers which pointers are captured.
///
/// Useful for hosts that route events manually, and for asserting that
/// captures and releases stay balanced.
#[derive(Debug, Clone, Default)]
pub struct CapturedPointers {
    pointers: SmallVec<[PointerId; 4]>,
}

impl CapturedPointers {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `pointer` is currently captured.
    #[must_use]
    pub fn is_captured(&self, pointer: PointerId) -> bool {
        self.pointers.contains(&pointer)
    }

    /// Number of outstanding captures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` when nothing is captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
}

impl PointerCapture for CapturedPointers {
    fn capture(&mut self, pointer: PointerId) {
        self.pointers.push(pointer);
    }

    fn release(&mut self, pointer: PointerId) {
        let pos = self.pointers.iter().position(|p| *p == pointer);
        debug_assert!(
            pos.is_some(),
            "release of {pointer:?} without a matching capture"
        );
        if let Some(pos) = pos {
            self.pointers.remove(pos);
        }
    }
}
