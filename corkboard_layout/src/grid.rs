// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;

use crate::place::{Placeable, sanitize_position};

/// Column grid used to place notes that arrive without a position.
///
/// Slot `(column, row)` sits at
/// `(margin + column * (column_width + gap), margin + row * (row_height + gap))`
/// in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridLayoutRepr"))]
pub struct GridLayout {
    column_width: f64,
    row_height: f64,
    gap: f64,
    margin: f64,
}

impl GridLayout {
    /// Creates a grid with validated metrics.
    ///
    /// Every metric must be finite and non-negative, and the column width and
    /// row height must be positive so that slots never coincide.
    pub fn new(
        column_width: f64,
        row_height: f64,
        gap: f64,
        margin: f64,
    ) -> Result<Self, GridLayoutError> {
        let metrics = [column_width, row_height, gap, margin];
        if metrics.iter().any(|m| !m.is_finite()) {
            return Err(GridLayoutError::NonFinite);
        }
        if metrics.iter().any(|m| *m < 0.0) {
            return Err(GridLayoutError::Negative);
        }
        if column_width == 0.0 || row_height == 0.0 {
            return Err(GridLayoutError::EmptyCell);
        }
        Ok(Self {
            column_width,
            row_height,
            gap,
            margin,
        })
    }

    /// Horizontal pitch between column origins.
    #[must_use]
    pub fn column_pitch(&self) -> f64 {
        self.column_width + self.gap
    }

    /// Vertical pitch between row origins.
    #[must_use]
    pub fn row_pitch(&self) -> f64 {
        self.row_height + self.gap
    }

    /// World position of slot `(column, row)`.
    #[must_use]
    pub fn slot(&self, column: usize, row: usize) -> Point {
        Point::new(
            self.margin + column as f64 * self.column_pitch(),
            self.margin + row as f64 * self.row_pitch(),
        )
    }

    /// Gives every unpositioned item the next slot in its column.
    ///
    /// Items are visited in slice order. Each column keeps its own row
    /// counter, which advances for *every* item in the column, so items that
    /// already have a position keep their slot reserved and a resend fills the
    /// gaps exactly as the first pass would have. Items with a valid position
    /// are never moved; a non-finite position counts as absent.
    ///
    /// Returns how many items were assigned a position.
    pub fn assign_default_positions<T: Placeable>(&self, items: &mut [T]) -> usize {
        let mut rows: HashMap<usize, usize> = HashMap::new();
        let mut assigned = 0;
        for item in items.iter_mut() {
            let column = item.column();
            let row = rows.entry(column).or_insert(0);
            if sanitize_position(item.position()).is_none() {
                item.set_position(self.slot(column, *row));
                assigned += 1;
            }
            *row += 1;
        }
        if assigned > 0 {
            log::debug!("placed {assigned} of {} notes on the default grid", items.len());
        }
        assigned
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            column_width: 260.0,
            row_height: 190.0,
            gap: 32.0,
            margin: 16.0,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridLayoutRepr {
    column_width: f64,
    row_height: f64,
    gap: f64,
    margin: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<GridLayoutRepr> for GridLayout {
    type Error = GridLayoutError;

    fn try_from(repr: GridLayoutRepr) -> Result<Self, Self::Error> {
        Self::new(repr.column_width, repr.row_height, repr.gap, repr.margin)
    }
}

/// Error returned by [`GridLayout::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLayoutError {
    /// A metric was NaN or infinite.
    NonFinite,
    /// A metric was negative.
    Negative,
    /// Column width or row height was zero.
    EmptyCell,
}

impl fmt::Display for GridLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NonFinite => "grid metrics must be finite",
            Self::Negative => "grid metrics must not be negative",
            Self::EmptyCell => "grid column width and row height must be positive",
        })
    }
}

impl core::error::Error for GridLayoutError {}
