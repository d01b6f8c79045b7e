// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Layout: default placement for notes that arrive without a position.
//!
//! Generated lesson ideas usually come back from the generation service with
//! no coordinates. Before the first paint they are laid out on a column grid:
//! each idea goes into the column of its [`Level`] (or any caller-defined
//! column) and stacks top to bottom in arrival order.
//!
//! Placement is idempotent: notes that already have a finite position are
//! never moved, so the same list can be sent through again after the user
//! has rearranged it.
//!
//! ```rust
//! use kurbo::Point;
//! use corkboard_layout::{GridLayout, Level};
//!
//! let mut notes = vec![
//!     (Level::Beginner, None),
//!     (Level::Advanced, None),
//!     (Level::Beginner, Some(Point::new(900.0, 40.0))),
//!     (Level::Beginner, None),
//! ];
//!
//! let grid = GridLayout::default();
//! assert_eq!(grid.assign_default_positions(&mut notes), 3);
//!
//! assert_eq!(notes[0].1, Some(grid.slot(0, 0)));
//! assert_eq!(notes[1].1, Some(grid.slot(2, 0)));
//! // Already placed: untouched, but it still occupies row 1 of its column.
//! assert_eq!(notes[2].1, Some(Point::new(900.0, 40.0)));
//! assert_eq!(notes[3].1, Some(grid.slot(0, 2)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod grid;
mod level;
mod place;

pub use grid::{GridLayout, GridLayoutError};
pub use level::{Level, ParseLevelError};
pub use place::{Placeable, sanitize_position};
