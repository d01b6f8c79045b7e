// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::transform::CanvasTransform;

/// On-screen geometry of the repeating background grid.
///
/// The grid is drawn in world space with a fixed cell size, so on screen each
/// tile measures `cell * scale` pixels and the pattern is shifted by the
/// transform offset wrapped into `[0, tile)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundGrid {
    /// Tile edge length in screen pixels.
    pub tile: f64,
    /// Pattern phase in screen pixels, each component in `[0, tile)`.
    pub phase: Vec2,
}

impl BackgroundGrid {
    /// Default world-space cell size of the lesson canvas grid.
    pub const DEFAULT_CELL: f64 = 120.0;

    /// Computes the grid geometry for `cell` world units under `transform`.
    #[must_use]
    pub fn for_transform(cell: f64, transform: &CanvasTransform) -> Self {
        let tile = cell * transform.scale();
        let offset = transform.offset();
        Self {
            tile,
            phase: Vec2::new(wrap(offset.x, tile), wrap(offset.y, tile)),
        }
    }
}

fn wrap(value: f64, tile: f64) -> f64 {
    if tile.is_nan() || tile <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let r = value % tile;
    let r = if r < 0.0 { r + tile } else { r };
    // `r + tile` can round up to exactly `tile` for tiny negative remainders.
    if r >= tile { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::BackgroundGrid;
    use crate::transform::CanvasTransform;

    #[test]
    fn tile_scales_with_zoom() {
        let t = CanvasTransform::new(1.5, Vec2::ZERO);
        let grid = BackgroundGrid::for_transform(120.0, &t);
        assert_eq!(grid.tile, 180.0);
        assert_eq!(grid.phase, Vec2::ZERO);
    }

    #[test]
    fn negative_offsets_wrap_into_tile() {
        let t = CanvasTransform::new(1.0, Vec2::new(-130.0, 250.0));
        let grid = BackgroundGrid::for_transform(120.0, &t);
        assert!((grid.phase.x - 110.0).abs() < 1e-9);
        assert!((grid.phase.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn phase_stays_below_tile_for_tiny_negatives() {
        let t = CanvasTransform::new(1.0, Vec2::new(-1e-18, -120.0));
        let grid = BackgroundGrid::for_transform(120.0, &t);
        assert!(grid.phase.x >= 0.0 && grid.phase.x < grid.tile);
        assert!(grid.phase.y >= 0.0 && grid.phase.y < grid.tile);
    }
}
