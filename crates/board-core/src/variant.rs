//! Rule-set selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The rule sets the engine can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Plain chess layout, no invented pieces.
    Standard,
    /// Chess with a Unicorn, Dragon and Sage per side.
    #[default]
    Extended,
    /// Checkers (draughts) on the dark squares.
    Checkers,
}

/// Returned when a variant name is not recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown variant '{0}': expected standard, extended or checkers")]
pub struct UnknownVariant(pub String);

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Standard, Variant::Extended, Variant::Checkers];

    #[inline]
    pub const fn is_checkers(self) -> bool {
        matches!(self, Variant::Checkers)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::Extended => "extended",
            Variant::Checkers => "checkers",
        }
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "chess" => Ok(Variant::Standard),
            "extended" | "chess-extended" => Ok(Variant::Extended),
            "checkers" | "draughts" => Ok(Variant::Checkers),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
