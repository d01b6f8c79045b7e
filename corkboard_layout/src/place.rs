// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::level::Level;

/// An item the default layout can place.
///
/// The layout only reads a column and a position and writes a position back;
/// everything else about the item stays opaque.
pub trait Placeable {
    /// Column this item belongs to.
    fn column(&self) -> usize;

    /// Current world position, if the item has one.
    fn position(&self) -> Option<Point>;

    /// Stores a world position assigned by the layout.
    fn set_position(&mut self, position: Point);
}

/// Notes that only carry a tier and an optional position.
impl Placeable for (Level, Option<Point>) {
    fn column(&self) -> usize {
        self.0.column()
    }

    fn position(&self) -> Option<Point> {
        self.1
    }

    fn set_position(&mut self, position: Point) {
        self.1 = Some(position);
    }
}

/// Filters out malformed positions.
///
/// A position with a NaN or infinite coordinate is treated as absent.
#[must_use]
pub fn sanitize_position(position: Option<Point>) -> Option<Point> {
    position.filter(|p| p.x.is_finite() && p.y.is_finite())
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Placeable, sanitize_position};
    use crate::level::Level;

    #[test]
    fn sanitize_keeps_finite_points() {
        let p = Point::new(-3.0, 1e9);
        assert_eq!(sanitize_position(Some(p)), Some(p));
        assert_eq!(sanitize_position(None), None);
        assert_eq!(sanitize_position(Some(Point::new(f64::INFINITY, 0.0))), None);
        assert_eq!(sanitize_position(Some(Point::new(0.0, f64::NAN))), None);
    }

    #[test]
    fn tuple_notes_use_level_columns() {
        let mut note = (Level::Advanced, None);
        assert_eq!(note.column(), 2);
        note.set_position(Point::new(1.0, 2.0));
        assert_eq!(note.position(), Some(Point::new(1.0, 2.0)));
    }
}
