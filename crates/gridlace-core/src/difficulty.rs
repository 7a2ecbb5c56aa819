//! Difficulty tiers mapping names to clue-count ranges.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

/// A difficulty tier, selecting how many clue cells a generated puzzle
/// keeps.
///
/// Each tier carries a permissible clue-count range `[min, max]`; the
/// generator draws the actual count from the half-open `[min, max)`.
/// The declaration order is the wire contract: a persisted session
/// stores a tier as its ordinal position in this enumeration, so the
/// order must never change.
///
/// # Examples
///
/// ```
/// use gridlace_core::Difficulty;
///
/// assert_eq!(Difficulty::Easy.min_clues(), 36);
/// assert_eq!(Difficulty::Easy.max_clues(), 49);
/// assert_eq!(Difficulty::Easy.ordinal(), 1);
/// assert_eq!(Difficulty::from_ordinal(1), Some(Difficulty::Easy));
/// assert_eq!(Difficulty::from_ordinal(6), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Difficulty {
    /// 50-60 clues.
    VeryEasy,
    /// 36-49 clues.
    Easy,
    /// 32-35 clues.
    Medium,
    /// 28-31 clues.
    Hard,
    /// 24-27 clues.
    VeryHard,
    /// 17-23 clues.
    Hardest,
}

impl Difficulty {
    /// All tiers in declaration (= wire ordinal) order, from most clues
    /// to fewest.
    pub const ALL: [Self; 6] = [
        Self::VeryEasy,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::VeryHard,
        Self::Hardest,
    ];

    /// Minimum clue count for this tier.
    #[must_use]
    pub const fn min_clues(self) -> usize {
        match self {
            Self::VeryEasy => 50,
            Self::Easy => 36,
            Self::Medium => 32,
            Self::Hard => 28,
            Self::VeryHard => 24,
            Self::Hardest => 17,
        }
    }

    /// Maximum clue count for this tier.
    #[must_use]
    pub const fn max_clues(self) -> usize {
        match self {
            Self::VeryEasy => 60,
            Self::Easy => 49,
            Self::Medium => 35,
            Self::Hard => 31,
            Self::VeryHard => 27,
            Self::Hardest => 23,
        }
    }

    /// The tier's position in the declaration order, as persisted.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a tier by its persisted ordinal.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Human-readable tier name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
            Self::Hardest => "Hardest",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parses a tier name, case-insensitively and ignoring `-`, `_`, and
    /// spaces (`"very-easy"`, `"Very Easy"`, and `"veryeasy"` all parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "veryeasy" => Ok(Self::VeryEasy),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "veryhard" => Ok(Self::VeryHard),
            "hardest" => Ok(Self::Hardest),
            _ => Err(ParseDifficultyError {
                name: s.to_owned(),
            }),
        }
    }
}

/// Unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty '{name}'")]
pub struct ParseDifficultyError {
    /// The string that failed to parse.
    name: String,
}
