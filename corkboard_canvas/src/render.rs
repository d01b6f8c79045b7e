// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use corkboard_view2d::BackgroundGrid;
use kurbo::Affine;

/// Cursor the host should show over the canvas background.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CursorHint {
    /// Idle: the background can be grabbed.
    Grab,
    /// A pan is in progress.
    Grabbing,
}

impl CursorHint {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Everything a host needs to draw one frame of the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasRender {
    /// World → screen transform for the note layer.
    pub layer: Affine,
    /// The same transform as a CSS `transform` value (`transform-origin: 0 0`).
    pub layer_css: String,
    /// Background grid tile and phase.
    pub background: BackgroundGrid,
    /// Background cursor.
    pub cursor: CursorHint,
    /// Notes being dragged right now, for highlighting.
    pub dragging: Vec<usize>,
}
