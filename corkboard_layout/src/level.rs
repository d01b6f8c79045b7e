// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// Difficulty tier of a lesson idea; each tier gets its own board column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Column 0.
    Beginner,
    /// Column 1.
    Intermediate,
    /// Column 2.
    Advanced,
    /// Column 3; hand-written ideas that carry no tier.
    General,
}

impl Level {
    /// Tiers cycled through when an idea arrives without one.
    pub const TIERED: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Board column for this tier.
    #[must_use]
    pub const fn column(self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
            Self::General => 3,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::General => "General",
        }
    }

    /// Tier assigned to the idea at `index` when it has none of its own.
    #[must_use]
    pub const fn fallback(index: usize) -> Self {
        Self::TIERED[index % Self::TIERED.len()]
    }

    /// Reads a free-form difficulty such as `"advanced (grade 9)"`.
    ///
    /// Matching is case-insensitive and looks for a tier name anywhere in the
    /// text. Anything unrecognized falls back to [`Level::fallback`].
    #[must_use]
    pub fn from_difficulty(difficulty: &str, index: usize) -> Self {
        Self::TIERED
            .into_iter()
            .find(|level| contains_ignore_ascii_case(difficulty, level.label()))
            .unwrap_or_else(|| Self::fallback(index))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Beginner, Self::Intermediate, Self::Advanced, Self::General]
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseLevelError)
    }
}

/// Error returned when a string names no [`Level`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseLevelError;

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of Beginner, Intermediate, Advanced, General")
    }
}

impl core::error::Error for ParseLevelError {}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let (haystack, needle) = (haystack.as_bytes(), needle.as_bytes());
    needle.is_empty()
        || haystack
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::{Level, ParseLevelError};

    #[test]
    fn columns_are_distinct_and_ordered() {
        assert_eq!(Level::Beginner.column(), 0);
        assert_eq!(Level::Intermediate.column(), 1);
        assert_eq!(Level::Advanced.column(), 2);
        assert_eq!(Level::General.column(), 3);
    }

    #[test]
    fn difficulty_text_is_matched_loosely() {
        assert_eq!(Level::from_difficulty("ADVANCED learners", 0), Level::Advanced);
        assert_eq!(Level::from_difficulty("intermediate", 0), Level::Intermediate);
        assert_eq!(Level::from_difficulty("easy", 4), Level::Intermediate);
        assert_eq!(Level::from_difficulty("", 5), Level::Advanced);
    }

    #[test]
    fn parse_round_trips_labels() {
        for level in [Level::Beginner, Level::General] {
            assert_eq!(level.label().parse::<Level>(), Ok(level));
        }
        assert_eq!(" general ".parse::<Level>(), Ok(Level::General));
        assert_eq!("expert".parse::<Level>(), Err(ParseLevelError));
    }
}
