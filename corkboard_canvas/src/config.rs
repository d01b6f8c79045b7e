// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use corkboard_layout::GridLayout;
use corkboard_view2d::{BackgroundGrid, ZoomLimits};

/// Tunables for a [`CanvasController`](crate::CanvasController).
///
/// With the `serde` feature this can be loaded from a host's settings file;
/// omitted fields take their defaults and every field is validated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CanvasConfigRepr"))]
pub struct CanvasConfig {
    zoom: ZoomLimits,
    grid_cell: f64,
    layout: GridLayout,
}

impl CanvasConfig {
    /// Creates a configuration, checking that `grid_cell` is finite and positive.
    pub fn new(
        zoom: ZoomLimits,
        grid_cell: f64,
        layout: GridLayout,
    ) -> Result<Self, CanvasConfigError> {
        if !grid_cell.is_finite() {
            return Err(CanvasConfigError::NonFiniteGridCell);
        }
        if grid_cell <= 0.0 {
            return Err(CanvasConfigError::NonPositiveGridCell);
        }
        Ok(Self {
            zoom,
            grid_cell,
            layout,
        })
    }

    /// Replaces the zoom limits.
    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomLimits) -> Self {
        self.zoom = zoom;
        self
    }

    /// Replaces the default placement grid.
    #[must_use]
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Zoom range and wheel step.
    #[must_use]
    pub fn zoom(&self) -> ZoomLimits {
        self.zoom
    }

    /// World-space edge length of one background grid cell.
    #[must_use]
    pub fn grid_cell(&self) -> f64 {
        self.grid_cell
    }

    /// Default placement grid for unpositioned notes.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomLimits::default(),
            grid_cell: BackgroundGrid::DEFAULT_CELL,
            layout: GridLayout::default(),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct CanvasConfigRepr {
    zoom: ZoomLimits,
    grid_cell: f64,
    layout: GridLayout,
}

#[cfg(feature = "serde")]
impl Default for CanvasConfigRepr {
    fn default() -> Self {
        let config = CanvasConfig::default();
        Self {
            zoom: config.zoom,
            grid_cell: config.grid_cell,
            layout: config.layout,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<CanvasConfigRepr> for CanvasConfig {
    type Error = CanvasConfigError;

    fn try_from(repr: CanvasConfigRepr) -> Result<Self, Self::Error> {
        Self::new(repr.zoom, repr.grid_cell, repr.layout)
    }
}

/// Error returned by [`CanvasConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasConfigError {
    /// The grid cell was NaN or infinite.
    NonFiniteGridCell,
    /// The grid cell was zero or negative.
    NonPositiveGridCell,
}

impl fmt::Display for CanvasConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NonFiniteGridCell => "grid cell must be finite",
            Self::NonPositiveGridCell => "grid cell must be positive",
        })
    }
}

impl core::error::Error for CanvasConfigError {}

#[cfg(test)]
mod tests {
    use corkboard_layout::GridLayout;
    use corkboard_view2d::ZoomLimits;

    use super::{CanvasConfig, CanvasConfigError};

    #[test]
    fn grid_cell_must_be_positive_and_finite() {
        let zoom = ZoomLimits::default();
        let layout = GridLayout::default();
        assert_eq!(
            CanvasConfig::new(zoom, 0.0, layout),
            Err(CanvasConfigError::NonPositiveGridCell)
        );
        assert_eq!(
            CanvasConfig::new(zoom, -120.0, layout),
            Err(CanvasConfigError::NonPositiveGridCell)
        );
        assert_eq!(
            CanvasConfig::new(zoom, f64::NAN, layout),
            Err(CanvasConfigError::NonFiniteGridCell)
        );
        assert_eq!(
            CanvasConfig::new(zoom, f64::INFINITY, layout),
            Err(CanvasConfigError::NonFiniteGridCell)
        );
        let config = CanvasConfig::new(zoom, 64.0, layout).unwrap();
        assert_eq!(config.grid_cell(), 64.0);
    }

    #[test]
    fn builders_keep_the_grid_cell() {
        let zoom = ZoomLimits::new(0.25, 4.0, 0.2).unwrap();
        let config = CanvasConfig::default().with_zoom(zoom);
        assert_eq!(config.zoom(), zoom);
        assert_eq!(config.grid_cell(), 120.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_defaults() {
        let config: CanvasConfig =
            serde_json::from_str(r#"{"zoom":{"min":0.25,"max":4.0,"step":0.2}}"#)
                .expect("partial config");
        assert_eq!(config.zoom().max(), 4.0);
        assert_eq!(config.grid_cell(), 120.0);
        assert_eq!(config.layout(), CanvasConfig::default().layout());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn bad_grid_cell_is_rejected_on_load() {
        for json in [r#"{"grid_cell":-120}"#, r#"{"grid_cell":0}"#] {
            assert!(
                serde_json::from_str::<CanvasConfig>(json).is_err(),
                "{json} should not load"
            );
        }
    }
}
