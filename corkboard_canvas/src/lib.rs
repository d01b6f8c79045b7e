// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Canvas: a headless controller for an infinite sticky-note board.
//!
//! [`CanvasController`] ties together the pieces of the workspace:
//! - the pan/zoom [`Viewport`] from `corkboard_view2d`,
//! - per-pointer pan and drag sessions from `corkboard_event_state`,
//! - default grid placement from `corkboard_layout`.
//!
//! The host owns the DOM (or scene), performs hit testing, and keeps the
//! authoritative list of notes. It forwards raw input here and reads back:
//! - [`MoveOutcome`]s and [`IdeaStore::item_dragged`] calls for note moves,
//! - a [`CanvasRender`] with the layer transform, background grid and cursor.
//!
//! ## Example
//!
//! ```rust
//! use corkboard_canvas::{
//!     CanvasController, CapturedPointers, HitTarget, PointerEvent, PointerId,
//! };
//! use kurbo::{Point, Rect};
//!
//! let mut canvas = CanvasController::default();
//! canvas.mount(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let mut notes = vec![Point::new(100.0, 100.0)];
//! let mut capture = CapturedPointers::new();
//! let mouse = PointerId(1);
//!
//! canvas.pointer_down(
//!     PointerEvent::primary(mouse, Point::new(100.0, 100.0)),
//!     HitTarget::Note { index: 0, position: Some(notes[0]) },
//!     &mut capture,
//! );
//! canvas.pointer_move(PointerEvent::primary(mouse, Point::new(150.0, 120.0)), &mut notes);
//! canvas.pointer_up(mouse, &mut capture);
//!
//! assert_eq!(notes[0], Point::new(150.0, 120.0));
//! assert!(capture.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod event;
mod render;
mod store;

pub use config::{CanvasConfig, CanvasConfigError};
pub use controller::{CanvasController, MoveOutcome};
pub use event::{HitTarget, PointerEvent, WheelEvent};
pub use render::{CanvasRender, CursorHint};
pub use store::IdeaStore;

pub use corkboard_event_state::{
    CapturedPointers, GesturePhase, PointerButton, PointerCapture, PointerId,
};
pub use corkboard_layout::{GridLayout, GridLayoutError, Level, Placeable};
pub use corkboard_view2d::{
    BackgroundGrid, CanvasTransform, Viewport, WheelDirection, ZoomLimits, ZoomLimitsError,
};
