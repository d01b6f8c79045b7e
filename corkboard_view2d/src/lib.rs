// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard View 2D: the pan/zoom model behind an infinite sticky-note canvas.
//!
//! This crate provides a small, headless model of a canvas view where notes
//! live on an unbounded world plane and the viewport shows a window into it.
//! It focuses on:
//! - The canvas transform: a screen-space offset plus a uniform scale.
//! - Coordinate conversion between client, screen and world space.
//! - Zoom anchored at the cursor, saturating at configurable limits.
//! - Render instructions (an affine or a CSS transform string) and the
//!   background grid phase, all derived from the same transform.
//!
//! It does **not** own notes, hit testing, or pointer gesture state. Callers
//! are expected to:
//! - Measure the viewport element and [`Viewport::mount`] it.
//! - Route wheel events into [`Viewport::zoom_by_wheel`].
//! - Drive pans and drags from a gesture layer (see `corkboard_event_state`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use corkboard_view2d::{Viewport, WheelDirection};
//!
//! let mut view = Viewport::default();
//! view.mount(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let cursor = Point::new(400.0, 300.0);
//! let world_under_cursor = view.client_to_world(cursor).unwrap();
//!
//! view.zoom_at(cursor, WheelDirection::In);
//! assert!((view.scale() - 1.1).abs() < 1e-12);
//!
//! // The world point that was under the cursor is still under it.
//! let after = view.client_to_world(cursor).unwrap();
//! assert!((after.x - world_under_cursor.x).abs() < 1e-9);
//! assert!((after.y - world_under_cursor.y).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale.
//! - The offset is expressed in screen pixels, so panning adds pointer
//!   deltas directly with no scale factor.
//! - The world plane is unbounded; only the scale is clamped.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod limits;
mod transform;
mod viewport;

pub use grid::BackgroundGrid;
pub use limits::{WheelDirection, ZoomLimits, ZoomLimitsError};
pub use transform::CanvasTransform;
pub use viewport::{Viewport, ViewportDebugInfo};
