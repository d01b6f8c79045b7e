// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_event_state::drag::ItemDrag;
use corkboard_event_state::pan::PanSession;
use corkboard_event_state::{Gesture, GesturePhase, GestureTracker, PointerCapture, PointerId};
use corkboard_layout::{Placeable, sanitize_position};
use corkboard_view2d::{CanvasTransform, Viewport};
use kurbo::{Point, Rect, Vec2};

use crate::config::CanvasConfig;
use crate::event::{HitTarget, PointerEvent, WheelEvent};
use crate::render::{CanvasRender, CursorHint};
use crate::store::IdeaStore;

/// Result of feeding a pointer-move to the controller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The pointer had no gesture, or the viewport is not mounted.
    Ignored,
    /// The canvas was panned to this offset.
    Panned {
        /// New offset in screen pixels.
        offset: Vec2,
    },
    /// A note was dragged and the Idea Store notified.
    Dragged {
        /// Note index.
        index: usize,
        /// New world position.
        position: Point,
    },
}

/// Headless controller for a sticky-note canvas.
///
/// Owns the viewport transform and the per-pointer gesture state. Notes stay
/// with the caller: pointer-downs carry a [`HitTarget`] resolved by the host,
/// and drag results flow out through an [`IdeaStore`].
///
/// Every handler is synchronous and does nothing when no viewport is mounted.
#[derive(Clone, Debug)]
pub struct CanvasController {
    viewport: Viewport,
    gestures: GestureTracker,
    config: CanvasConfig,
}

impl CanvasController {
    /// Creates an unmounted controller.
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            viewport: Viewport::new(config.zoom()),
            gestures: GestureTracker::new(),
            config,
        }
    }

    /// Configuration in effect.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The viewport, for coordinate queries.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The current transform.
    #[must_use]
    pub fn transform(&self) -> &CanvasTransform {
        self.viewport.transform()
    }

    /// Active gestures.
    #[must_use]
    pub fn gestures(&self) -> &GestureTracker {
        &self.gestures
    }

    /// Phase of `pointer`.
    #[must_use]
    pub fn phase(&self, pointer: PointerId) -> GesturePhase {
        self.gestures.phase(pointer)
    }

    /// Records the measured viewport rectangle in client coordinates.
    pub fn mount(&mut self, rect: Rect) {
        self.viewport.mount(rect);
    }

    /// Detaches the viewport, ending every gesture and releasing its capture.
    pub fn unmount<C>(&mut self, capture: &mut C)
    where
        C: PointerCapture + ?Sized,
    {
        self.gestures.end_all(capture);
        self.viewport.unmount();
    }

    /// Gives unpositioned notes their default grid slot. See
    /// [`GridLayout::assign_default_positions`](corkboard_layout::GridLayout::assign_default_positions).
    pub fn place_notes<T: Placeable>(&self, notes: &mut [T]) -> usize {
        self.config.layout().assign_default_positions(notes)
    }

    /// Handles a pointer-down that the host resolved to `target`.
    ///
    /// - On a note with the primary button: starts dragging it.
    /// - On the background with the primary button: starts a pan.
    /// - On an overlay with the primary button: ends any gesture the pointer
    ///   still had (a lost pointer-up) and starts nothing.
    /// - With another button, or while unmounted: nothing.
    ///
    /// Returns the pointer's phase afterwards.
    pub fn pointer_down<C>(
        &mut self,
        event: PointerEvent,
        target: HitTarget,
        capture: &mut C,
    ) -> GesturePhase
    where
        C: PointerCapture + ?Sized,
    {
        if !event.button.is_primary() {
            log::trace!("{:?} down ignored: {:?} button", event.pointer, event.button);
            return self.phase(event.pointer);
        }
        let Some(world) = self.viewport.client_to_world(event.client) else {
            return self.phase(event.pointer);
        };
        match target {
            HitTarget::Note { index, position } => {
                let origin = sanitize_position(position).unwrap_or(Point::ZERO);
                let drag = ItemDrag::begin(index, world, origin);
                self.gestures.begin_drag(event.pointer, drag, capture);
            }
            HitTarget::Background => {
                let pan = PanSession::begin(event.client, self.viewport.offset());
                self.gestures.begin_pan(event.pointer, pan, capture);
            }
            HitTarget::Overlay => {
                self.gestures.end(event.pointer, capture);
            }
        }
        self.phase(event.pointer)
    }

    /// Handles a pointer-move anywhere (not only over the canvas or the note).
    pub fn pointer_move<S>(&mut self, event: PointerEvent, store: &mut S) -> MoveOutcome
    where
        S: IdeaStore + ?Sized,
    {
        let Some(gesture) = self.gestures.get(event.pointer).copied() else {
            return MoveOutcome::Ignored;
        };
        match gesture {
            Gesture::Pan(pan) => {
                let offset = pan.offset_for(event.client);
                self.viewport.set_offset(offset);
                log::trace!("pan to {offset:?}");
                MoveOutcome::Panned { offset }
            }
            Gesture::Drag(drag) => {
                // Convert under the transform as it is now, not as it was at grab time.
                let Some(world) = self.viewport.client_to_world(event.client) else {
                    return MoveOutcome::Ignored;
                };
                let index = drag.index();
                let position = drag.position_for(world);
                log::trace!("note {index} dragged to {position:?}");
                store.item_dragged(index, position);
                MoveOutcome::Dragged { index, position }
            }
        }
    }

    /// Handles a pointer-up, ending the pointer's gesture.
    ///
    /// Returns the phase that ended ([`GesturePhase::Idle`] if there was none).
    pub fn pointer_up<C>(&mut self, pointer: PointerId, capture: &mut C) -> GesturePhase
    where
        C: PointerCapture + ?Sized,
    {
        self.gestures
            .end(pointer, capture)
            .map_or(GesturePhase::Idle, |gesture| gesture.phase())
    }

    /// The pointer left the interactive surface; its gesture ends as on pointer-up.
    ///
    /// The last emitted drag position stands.
    pub fn pointer_leave<C>(&mut self, pointer: PointerId, capture: &mut C) -> GesturePhase
    where
        C: PointerCapture + ?Sized,
    {
        self.pointer_up(pointer, capture)
    }

    /// The platform cancelled the pointer (touch interrupted, capture lost).
    pub fn pointer_cancel<C>(&mut self, pointer: PointerId, capture: &mut C) -> GesturePhase
    where
        C: PointerCapture + ?Sized,
    {
        self.pointer_up(pointer, capture)
    }

    /// The window lost focus: every gesture ends. Returns how many ended.
    pub fn focus_lost<C>(&mut self, capture: &mut C) -> usize
    where
        C: PointerCapture + ?Sized,
    {
        self.gestures.end_all(capture)
    }

    /// Handles a wheel notch: zoom about the cursor.
    ///
    /// Returns `true` if the transform changed. A pan in progress is rebased
    /// so its next move keeps the zoom.
    pub fn wheel(&mut self, event: WheelEvent) -> bool {
        let before = self.viewport.offset();
        if !self.viewport.zoom_by_wheel(event.client, event.delta_y) {
            return false;
        }
        self.gestures.rebase_pan(self.viewport.offset() - before);
        true
    }

    /// Restores a zero offset and scale `1.0`, clamped into the zoom limits.
    pub fn reset_view(&mut self) {
        let before = self.viewport.offset();
        self.viewport.reset();
        self.gestures.rebase_pan(self.viewport.offset() - before);
    }

    /// Background cursor.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        if self.gestures.is_panning() {
            CursorHint::Grabbing
        } else {
            CursorHint::Grab
        }
    }

    /// Render description of the current frame.
    #[must_use]
    pub fn render(&self) -> CanvasRender {
        let transform = self.viewport.transform();
        CanvasRender {
            layer: transform.affine(),
            layer_css: transform.css(),
            background: self.viewport.background(self.config.grid_cell()),
            cursor: self.cursor(),
            dragging: self.gestures.dragged_indices().collect(),
        }
    }
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}
