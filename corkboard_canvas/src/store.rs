// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;

/// Owner of the authoritative note list.
///
/// The canvas only ever asks for one note to move; it never adds, removes,
/// or reorders notes. [`IdeaStore::item_dragged`] is called on every drag move,
/// so implementations may persist continuously or debounce.
pub trait IdeaStore {
    /// Note `index` was dragged to `position` (world space).
    fn item_dragged(&mut self, index: usize, position: Point);
}

impl<F> IdeaStore for F
where
    F: FnMut(usize, Point),
{
    fn item_dragged(&mut self, index: usize, position: Point) {
        self(index, position);
    }
}

impl IdeaStore for [Point] {
    fn item_dragged(&mut self, index: usize, position: Point) {
        match self.get_mut(index) {
            Some(slot) => *slot = position,
            None => log::warn!("drag of note {index} ignored: store holds {} notes", self.len()),
        }
    }
}

impl IdeaStore for [Option<Point>] {
    fn item_dragged(&mut self, index: usize, position: Point) {
        match self.get_mut(index) {
            Some(slot) => *slot = Some(position),
            None => log::warn!("drag of note {index} ignored: store holds {} notes", self.len()),
        }
    }
}

impl IdeaStore for Vec<Point> {
    fn item_dragged(&mut self, index: usize, position: Point) {
        self.as_mut_slice().item_dragged(index, position);
    }
}

impl IdeaStore for Vec<Option<Point>> {
    fn item_dragged(&mut self, index: usize, position: Point) {
        self.as_mut_slice().item_dragged(index, position);
    }
}
