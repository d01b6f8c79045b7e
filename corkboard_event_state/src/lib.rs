// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Event State: pointer gesture state for a pan/zoom note canvas.
//!
//! This crate provides the small state machines a sticky-note canvas needs to
//! turn raw pointer events into pans and note drags:
//!
//! - [`pan`]: a pan session that maps pointer travel onto the canvas offset
//! - [`drag`]: a note drag session that keeps the grab point under the pointer
//! - [`GestureTracker`]: per-pointer `Idle` / `Panning` / `Dragging(index)` state
//! - [`PointerCapture`]: host hooks paired on every gesture start and end
//!
//! The crate does not hit-test and does not own the transform. Callers decide
//! whether a pointer-down landed on a note or on the background, convert
//! positions with their viewport, and apply the results.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use corkboard_event_state::{
//!     CapturedPointers, GesturePhase, GestureTracker, PointerId, drag::ItemDrag,
//! };
//!
//! let mut gestures = GestureTracker::new();
//! let mut capture = CapturedPointers::new();
//! let mouse = PointerId(1);
//!
//! // Pointer-down on note 0 at world (12, 8); the note sits at (10, 5).
//! let drag = ItemDrag::begin(0, Point::new(12.0, 8.0), Point::new(10.0, 5.0));
//! gestures.begin_drag(mouse, drag, &mut capture);
//! assert_eq!(gestures.phase(mouse), GesturePhase::Dragging(0));
//! assert!(capture.is_captured(mouse));
//!
//! // Pointer-up: the gesture ends and the capture is released.
//! gestures.end(mouse, &mut capture);
//! assert!(capture.is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod capture;
pub mod drag;
mod gesture;
pub mod pan;
mod pointer;

pub use capture::{CapturedPointers, PointerCapture};
pub use gesture::{Gesture, GesturePhase, GestureTracker};
pub use pointer::{PointerButton, PointerId};
