// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::limits::{WheelDirection, ZoomLimits};

/// Uniform pan + zoom transform from world space into viewport-local screen space.
///
/// A world point `w` lands on screen at `offset + scale * w`. The item layer
/// is rendered with the same mapping: translate by `offset`, then scale by
/// `scale`, with the transform origin at the layer's top-left corner. Both the
/// render instructions ([`CanvasTransform::affine`],
/// [`CanvasTransform::css`]) and the conversions
/// ([`CanvasTransform::world_to_screen`], [`CanvasTransform::screen_to_world`])
/// are derived from this single value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
    scale: f64,
    offset: Vec2,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl CanvasTransform {
    /// Scale `1.0`, zero offset.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
        world_to_screen: Affine::IDENTITY,
        screen_to_world: Affine::IDENTITY,
    };

    /// Creates a transform with the given scale and screen-space offset.
    ///
    /// The scale is taken as-is; callers that need limits enforced should go
    /// through [`crate::Viewport`] or clamp with [`ZoomLimits::clamp`] first.
    #[must_use]
    pub fn new(scale: f64, offset: Vec2) -> Self {
        let mut transform = Self {
            scale,
            offset,
            ..Self::IDENTITY
        };
        transform.rebuild();
        transform
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current offset of the world origin, in screen pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Replaces the offset, leaving the scale untouched.
    pub fn set_offset(&mut self, offset: Vec2) {
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        self.rebuild();
    }

    /// Translates the offset by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.set_offset(self.offset + delta);
    }

    /// World → screen as an affine, suitable for a render backend.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.world_to_screen
    }

    /// CSS transform for the item layer (`transform-origin: 0 0`).
    ///
    /// ```rust
    /// use kurbo::Vec2;
    /// use corkboard_view2d::CanvasTransform;
    ///
    /// let t = CanvasTransform::new(1.5, Vec2::new(-20.0, 40.0));
    /// assert_eq!(t.css(), "translate(-20px, 40px) scale(1.5)");
    /// ```
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// World-space rectangle visible through a viewport of `size` pixels.
    #[must_use]
    pub fn visible_world_rect(&self, size: Size) -> Rect {
        let p0 = self.screen_to_world(Point::ORIGIN);
        let p1 = self.screen_to_world(Point::new(size.width, size.height));
        Rect::from_points(p0, p1)
    }

    /// Zooms one wheel notch about a screen-space anchor.
    ///
    /// The world point under `anchor` before the zoom stays under `anchor`
    /// afterwards. The new scale saturates at `limits`; a saturated notch
    /// leaves the transform unchanged. Returns `true` if the transform changed.
    pub fn zoom_about(
        &mut self,
        anchor: Point,
        direction: WheelDirection,
        limits: &ZoomLimits,
    ) -> bool {
        let next_scale = limits.next_scale(self.scale, direction);
        self.zoom_to_about(anchor, next_scale)
    }

    /// Sets the scale to `next_scale` while keeping the world point under `anchor` fixed.
    ///
    /// Returns `true` if the transform changed.
    pub fn zoom_to_about(&mut self, anchor: Point, next_scale: f64) -> bool {
        if !next_scale.is_finite() || next_scale <= 0.0 {
            return false;
        }
        // Same scale maps the anchor back onto itself; skip to avoid rounding drift.
        if (next_scale - self.scale).abs() < f64::EPSILON {
            return false;
        }
        let world_before = self.screen_to_world(anchor);
        self.scale = next_scale;
        self.offset = anchor.to_vec2() - world_before.to_vec2() * next_scale;
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        // World → screen: scale about the layer origin, then translate by offset.
        self.world_to_screen = Affine::translate(self.offset) * Affine::scale(self.scale);
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::CanvasTransform;
    use crate::limits::{WheelDirection, ZoomLimits};

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn conversions_match_closed_form() {
        let t = CanvasTransform::new(1.25, Vec2::new(30.0, -12.0));
        let world = Point::new(8.0, 20.0);

        let screen = t.world_to_screen(world);
        assert_close(screen, Point::new(8.0 * 1.25 + 30.0, 20.0 * 1.25 - 12.0));

        let back = t.screen_to_world(Point::new(130.0, 88.0));
        assert_close(back, Point::new((130.0 - 30.0) / 1.25, (88.0 + 12.0) / 1.25));
    }

    #[test]
    fn conversions_are_inverse() {
        let t = CanvasTransform::new(0.6, Vec2::new(-250.0, 75.5));
        let world = Point::new(-13.0, 401.0);
        assert_close(t.screen_to_world(t.world_to_screen(world)), world);
    }

    #[test]
    fn zoom_keeps_anchor_fixed_in_both_directions() {
        let limits = ZoomLimits::default();
        for direction in [WheelDirection::In, WheelDirection::Out] {
            let mut t = CanvasTransform::new(1.3, Vec2::new(17.0, -40.0));
            let anchor = Point::new(212.0, 95.0);
            let before = t.screen_to_world(anchor);
            assert!(t.zoom_about(anchor, direction, &limits));
            assert_close(t.screen_to_world(anchor), before);
        }
    }

    #[test]
    fn saturated_zoom_is_a_no_op() {
        let limits = ZoomLimits::default();
        let mut t = CanvasTransform::new(2.0, Vec2::new(5.0, 5.0));
        assert!(!t.zoom_about(Point::new(40.0, 40.0), WheelDirection::In, &limits));
        assert_eq!(t.scale(), 2.0);
        assert_eq!(t.offset(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn pan_moves_offset_only() {
        let mut t = CanvasTransform::new(1.5, Vec2::ZERO);
        t.pan_by(Vec2::new(12.0, -4.0));
        t.pan_by(Vec2::new(3.0, 9.0));
        assert_eq!(t.offset(), Vec2::new(15.0, 5.0));
        assert_eq!(t.scale(), 1.5);
    }

    #[test]
    fn visible_rect_tracks_pan_and_zoom() {
        let t = CanvasTransform::new(2.0, Vec2::new(100.0, 50.0));
        let visible = t.visible_world_rect(Size::new(800.0, 600.0));
        assert!((visible.x0 + 50.0).abs() < 1e-9);
        assert!((visible.y0 + 25.0).abs() < 1e-9);
        assert!((visible.width() - 400.0).abs() < 1e-9);
        assert!((visible.height() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn css_and_affine_agree() {
        let t = CanvasTransform::new(0.5, Vec2::new(10.0, 20.0));
        assert_eq!(t.css(), "translate(10px, 20px) scale(0.5)");
        assert_close(t.affine() * Point::new(4.0, 4.0), Point::new(12.0, 22.0));
    }
}
