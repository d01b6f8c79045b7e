// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pointer gesture state machine.
//!
//! Each pointer is either idle, panning the canvas, or dragging one note:
//!
//! ```text
//!            down on background            up / leave / cancel
//!   Idle ─────────────────────────▶ Panning ─────────────────────▶ Idle
//!     │                                                            ▲
//!     │      down on note i                up / leave / cancel     │
//!     └─────────────────────────▶ Dragging(i) ─────────────────────┘
//! ```
//!
//! Several pointers may drag different notes at the same time. At most one
//! pointer pans, since two pans would fight over the same offset.
//!
//! Every transition out of `Idle` captures the pointer and every transition
//! back releases it, so a capture never outlives its gesture.

use kurbo::Vec2;
use smallvec::SmallVec;

use crate::capture::PointerCapture;
use crate::drag::ItemDrag;
use crate::pan::PanSession;
use crate::pointer::PointerId;

/// An active gesture and its session data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Panning the canvas.
    Pan(PanSession),
    /// Dragging a note.
    Drag(ItemDrag),
}

impl Gesture {
    /// The observable phase of this gesture.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self {
            Self::Pan(_) => GesturePhase::Panning,
            Self::Drag(drag) => GesturePhase::Dragging(drag.index()),
        }
    }
}

/// What a pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture.
    #[default]
    Idle,
    /// Panning the canvas.
    Panning,
    /// Dragging the note at this index.
    Dragging(usize),
}

/// Tracks the active gesture of every pointer.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    active: SmallVec<[(PointerId, Gesture); 2]>,
}

impl GestureTracker {
    /// Creates a tracker with no active gestures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase of `pointer`.
    #[must_use]
    pub fn phase(&self, pointer: PointerId) -> GesturePhase {
        self.get(pointer)
            .map_or(GesturePhase::Idle, Gesture::phase)
    }

    /// Active gesture of `pointer`, if any.
    #[must_use]
    pub fn get(&self, pointer: PointerId) -> Option<&Gesture> {
        self.active
            .iter()
            .find(|(id, _)| *id == pointer)
            .map(|(_, gesture)| gesture)
    }

    /// Iterates over all active gestures in the order they started.
    pub fn iter(&self) -> impl Iterator<Item = (PointerId, &Gesture)> + '_ {
        self.active.iter().map(|(id, gesture)| (*id, gesture))
    }

    /// Number of pointers with an active gesture.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` when no pointer has an active gesture.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The active pan, if some pointer is panning.
    #[must_use]
    pub fn pan(&self) -> Option<(PointerId, &PanSession)> {
        self.active.iter().find_map(|(id, gesture)| match gesture {
            Gesture::Pan(pan) => Some((*id, pan)),
            Gesture::Drag(_) => None,
        })
    }

    /// Returns `true` while some pointer is panning.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan().is_some()
    }

    /// Shifts the active pan's snapshot by `delta`; see [`PanSession::rebase`].
    ///
    /// Returns `false` if nothing is panning.
    pub fn rebase_pan(&mut self, delta: Vec2) -> bool {
        let pan = self.active.iter_mut().find_map(|(_, gesture)| match gesture {
            Gesture::Pan(pan) => Some(pan),
            Gesture::Drag(_) => None,
        });
        match pan {
            Some(pan) => {
                pan.rebase(delta);
                true
            }
            None => false,
        }
    }

    /// Indices of the notes currently being dragged.
    pub fn dragged_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.iter().filter_map(|(_, gesture)| match gesture {
            Gesture::Drag(drag) => Some(drag.index()),
            Gesture::Pan(_) => None,
        })
    }

    /// Starts a pan on `pointer`.
    ///
    /// Any gesture `pointer` already had is ended first. Returns `false`, and
    /// starts nothing, if a different pointer is already panning.
    pub fn begin_pan<C>(&mut self, pointer: PointerId, pan: PanSession, capture: &mut C) -> bool
    where
        C: PointerCapture + ?Sized,
    {
        self.end(pointer, capture);
        if let Some((other, _)) = self.pan() {
            log::debug!("pan on {pointer:?} ignored: {other:?} is already panning");
            return false;
        }
        log::debug!("pan started on {pointer:?} at {:?}", pan.pointer_start());
        self.start(pointer, Gesture::Pan(pan), capture);
        true
    }

    /// Starts dragging a note with `pointer`.
    ///
    /// Any gesture `pointer` already had is ended first.
    pub fn begin_drag<C>(&mut self, pointer: PointerId, drag: ItemDrag, capture: &mut C)
    where
        C: PointerCapture + ?Sized,
    {
        self.end(pointer, capture);
        log::debug!("drag of note {} started on {pointer:?}", drag.index());
        self.start(pointer, Gesture::Drag(drag), capture);
    }

    /// Ends the gesture of `pointer`, releasing its capture.
    ///
    /// Returns the finished gesture, or `None` if the pointer was idle.
    pub fn end<C>(&mut self, pointer: PointerId, capture: &mut C) -> Option<Gesture>
    where
        C: PointerCapture + ?Sized,
    {
        let pos = self.active.iter().position(|(id, _)| *id == pointer)?;
        let (_, gesture) = self.active.remove(pos);
        capture.release(pointer);
        log::debug!("{:?} ended on {pointer:?}", gesture.phase());
        Some(gesture)
    }

    /// Ends every active gesture, releasing all captures.
    ///
    /// Returns how many gestures were ended.
    pub fn end_all<C>(&mut self, capture: &mut C) -> usize
    where
        C: PointerCapture + ?Sized,
    {
        let ended = self.active.len();
        for (pointer, gesture) in self.active.drain(..) {
            capture.release(pointer);
            log::debug!("{:?} cancelled on {pointer:?}", gesture.phase());
        }
        ended
    }

    fn start<C>(&mut self, pointer: PointerId, gesture: Gesture, capture: &mut C)
    where
        C: PointerCapture + ?Sized,
    {
        capture.capture(pointer);
        self.active.push((pointer, gesture));
    }
}
