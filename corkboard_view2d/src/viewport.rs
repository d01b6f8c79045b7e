// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::grid::BackgroundGrid;
use crate::limits::{WheelDirection, ZoomLimits};
use crate::transform::CanvasTransform;

/// A canvas viewport: the mounted screen rectangle plus its pan/zoom transform.
///
/// Input systems report pointer positions in client (window) coordinates.
/// `Viewport` converts them into viewport-local screen coordinates by
/// subtracting the origin of the measured viewport rectangle, then into world
/// coordinates through its [`CanvasTransform`].
///
/// Until a rectangle has been measured with [`Viewport::mount`], every
/// operation that needs viewport geometry returns `None` or does nothing.
#[derive(Clone, Debug)]
pub struct Viewport {
    rect: Option<Rect>,
    transform: CanvasTransform,
    limits: ZoomLimits,
}

impl Viewport {
    /// Creates an unmounted viewport at its home transform: zero offset and
    /// scale `1.0` clamped into `limits`.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            rect: None,
            transform: home(&limits),
            limits,
        }
    }

    /// Records the measured viewport rectangle in client coordinates.
    ///
    /// Re-measuring (for example after a window resize) keeps the transform.
    pub fn mount(&mut self, rect: Rect) {
        if self.rect == Some(rect) {
            return;
        }
        log::debug!("viewport mounted at {rect:?}");
        self.rect = Some(rect);
    }

    /// Forgets the viewport rectangle. The transform is kept for a later remount.
    pub fn unmount(&mut self) {
        if self.rect.take().is_some() {
            log::debug!("viewport unmounted");
        }
    }

    /// Returns `true` while a viewport rectangle is known.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.rect.is_some()
    }

    /// The measured rectangle, if mounted.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> &CanvasTransform {
        &self.transform
    }

    /// Current zoom limits.
    #[must_use]
    pub fn limits(&self) -> &ZoomLimits {
        &self.limits
    }

    /// Replaces the zoom limits and clamps the current scale into them.
    ///
    /// The world origin stays fixed on screen, so the offset is untouched.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        let clamped = limits.clamp(self.transform.scale());
        self.transform.zoom_to_about(Point::ORIGIN + self.transform.offset(), clamped);
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    /// Current offset in screen pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.transform.offset()
    }

    /// Converts a client-space point into viewport-local screen space.
    #[must_use]
    pub fn client_to_screen(&self, client: Point) -> Option<Point> {
        let rect = self.rect?;
        Some(client - rect.origin().to_vec2())
    }

    /// Converts a client-space point into world space under the current transform.
    #[must_use]
    pub fn client_to_world(&self, client: Point) -> Option<Point> {
        self.client_to_screen(client)
            .map(|screen| self.transform.screen_to_world(screen))
    }

    /// Converts a world-space point into client space.
    #[must_use]
    pub fn world_to_client(&self, world: Point) -> Option<Point> {
        let rect = self.rect?;
        Some(self.transform.world_to_screen(world) + rect.origin().to_vec2())
    }

    /// Zooms one notch about a client-space cursor position.
    ///
    /// Returns `true` if the transform changed. Does nothing when unmounted
    /// or when the scale is already saturated in `direction`.
    pub fn zoom_at(&mut self, client: Point, direction: WheelDirection) -> bool {
        let Some(anchor) = self.client_to_screen(client) else {
            return false;
        };
        let changed = self.transform.zoom_about(anchor, direction, &self.limits);
        if changed {
            log::trace!(
                "zoom {direction:?} at {anchor:?}: scale={} offset={:?}",
                self.transform.scale(),
                self.transform.offset()
            );
        }
        changed
    }

    /// Zooms in response to a wheel event's vertical delta.
    ///
    /// Negative deltas zoom in, positive deltas zoom out, zero is ignored.
    pub fn zoom_by_wheel(&mut self, client: Point, delta_y: f64) -> bool {
        match WheelDirection::from_delta_y(delta_y) {
            Some(direction) => self.zoom_at(client, direction),
            None => false,
        }
    }

    /// Replaces the offset, leaving the scale untouched.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.transform.set_offset(offset);
    }

    /// Restores the home transform: zero offset and scale `1.0` clamped into
    /// the current limits.
    pub fn reset(&mut self) {
        log::debug!("viewport transform reset");
        self.transform = home(&self.limits);
    }

    /// World-space rectangle currently visible, if mounted.
    #[must_use]
    pub fn visible_world_rect(&self) -> Option<Rect> {
        let rect = self.rect?;
        Some(self.transform.visible_world_rect(rect.size()))
    }

    /// Background grid geometry for a world-space cell size.
    #[must_use]
    pub fn background(&self, cell: f64) -> BackgroundGrid {
        BackgroundGrid::for_transform(cell, &self.transform)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            rect: self.rect,
            visible_world_rect: self.visible_world_rect(),
            scale: self.transform.scale(),
            offset: self.transform.offset(),
            limits: self.limits,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

fn home(limits: &ZoomLimits) -> CanvasTransform {
    CanvasTransform::new(limits.clamp(1.0), Vec2::ZERO)
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Measured viewport rectangle in client coordinates.
    pub rect: Option<Rect>,
    /// World-space rectangle currently visible.
    pub visible_world_rect: Option<Rect>,
    /// Current scale.
    pub scale: f64,
    /// Current offset in screen pixels.
    pub offset: Vec2,
    /// Zoom limits in effect.
    pub limits: ZoomLimits,
}
