use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Inferred visitor persona.
///
/// Declaration order is the canonical order: it breaks ties between equal
/// weights, so reordering variants changes resolution results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Commissions a best gun as a statement piece.
    Prestige,
    /// Buys to preserve, restore, or hand down.
    Legacy,
    /// Competition and clay shooters chasing fit and consistency.
    Performance,
    /// Field and game shooters.
    Sporting,
    /// First purchase, still learning the vocabulary.
    Newcomer,
}

impl Archetype {
    /// Total number of archetypes.
    pub const COUNT: usize = 5;

    /// All variants in canonical order.
    pub const ALL: [Archetype; 5] = [
        Self::Prestige,
        Self::Legacy,
        Self::Performance,
        Self::Sporting,
        Self::Newcomer,
    ];

    /// Position in the canonical order.
    pub fn index(self) -> usize {
        match self {
            Self::Prestige => 0,
            Self::Legacy => 1,
            Self::Performance => 2,
            Self::Sporting => 3,
            Self::Newcomer => 4,
        }
    }

    /// Stable snake_case label, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prestige => "prestige",
            Self::Legacy => "legacy",
            Self::Performance => "performance",
            Self::Sporting => "sporting",
            Self::Newcomer => "newcomer",
        }
    }

    /// Alternate spellings accepted when parsing labels from the outside.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Prestige => &["luxury", "status"],
            Self::Legacy => &["heirloom", "heritage"],
            Self::Performance => &["competition", "competitor"],
            Self::Sporting => &["field", "hunter", "game"],
            Self::Newcomer => &["beginner", "novice", "first_time"],
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label does not name any archetype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownArchetype(pub String);

impl fmt::Display for UnknownArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown archetype: {}", self.0)
    }
}

impl std::error::Error for UnknownArchetype {}

impl FromStr for Archetype {
    type Err = UnknownArchetype;

    /// Case-insensitive; accepts canonical labels and aliases. Spaces and
    /// hyphens are treated as underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == key || a.aliases().contains(&key.as_str()))
            .ok_or_else(|| UnknownArchetype(s.to_string()))
    }
}
