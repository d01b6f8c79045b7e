// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the Corkboard demos: a JSON-backed lesson board that
//! plays the part of the idea store.

use corkboard_canvas::{CanvasController, IdeaStore, Level, Placeable};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One sticky note as the board stores it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Headline shown on the note.
    pub title: String,
    /// Free-form difficulty text, e.g. `"Beginner"`.
    #[serde(default)]
    pub difficulty: String,
    /// World position; absent until placed or dragged.
    #[serde(default)]
    pub position: Option<Point>,
}

impl Note {
    /// Tier this note's difficulty resolves to, given its index on the board.
    #[must_use]
    pub fn level(&self, index: usize) -> Level {
        Level::from_difficulty(&self.difficulty, index)
    }
}

/// A note together with the tier it was bucketed into.
struct Slot<'a> {
    level: Level,
    note: &'a mut Note,
}

impl Placeable for Slot<'_> {
    fn column(&self) -> usize {
        self.level.column()
    }

    fn position(&self) -> Option<Point> {
        self.note.position
    }

    fn set_position(&mut self, position: Point) {
        self.note.position = Some(position);
    }
}

/// The authoritative list of notes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    /// Notes by stable index.
    pub notes: Vec<Note>,
}

impl Board {
    /// Parses a board from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the board, positions included.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Gives every unplaced note its default slot on `canvas`'s layout grid.
    ///
    /// Returns how many notes were placed.
    pub fn place(&mut self, canvas: &CanvasController) -> usize {
        let mut slots: Vec<Slot<'_>> = self
            .notes
            .iter_mut()
            .enumerate()
            .map(|(index, note)| Slot {
                level: note.level(index),
                note,
            })
            .collect();
        canvas.place_notes(&mut slots)
    }
}

impl IdeaStore for Board {
    fn item_dragged(&mut self, index: usize, position: Point) {
        match self.notes.get_mut(index) {
            Some(note) => note.position = Some(position),
            None => log::warn!("board has no note {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use corkboard_canvas::{CanvasController, IdeaStore, Level};
    use kurbo::Point;

    use super::Board;

    #[test]
    fn board_places_by_level_and_takes_drags() {
        let mut board = Board::from_json(
            r#"{"notes":[
                {"title":"Loops","difficulty":"advanced"},
                {"title":"Traits","difficulty":"Beginner","position":{"x":5.0,"y":6.0}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(board.notes[0].level(0), Level::Advanced);

        let canvas = CanvasController::default();
        assert_eq!(board.place(&canvas), 1);
        assert_eq!(board.notes[0].position, Some(canvas.config().layout().slot(2, 0)));
        assert_eq!(board.notes[1].position, Some(Point::new(5.0, 6.0)));

        board.item_dragged(1, Point::new(-1.0, 2.0));
        board.item_dragged(9, Point::ZERO);
        assert_eq!(board.notes[1].position, Some(Point::new(-1.0, 2.0)));
    }
}
