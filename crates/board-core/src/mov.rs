//! Move representation and move-text parsing.

use crate::{CoordinateError, Square};
use std::fmt;
use std::str::FromStr;

/// A requested move: an origin and a destination square.
///
/// A `Move` says nothing about legality; that is decided by the engine
/// against a concrete board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Parses move text such as `"e2-e4"` or `"e2e4"`.
    ///
    /// Surrounding whitespace is ignored and file letters are
    /// case-insensitive. A single `-` between the squares is optional.
    pub fn parse(text: &str) -> Result<Self, CoordinateError> {
        let trimmed = text.trim();
        let compact: String = match trimmed.split_once('-') {
            Some((from, to)) if !to.contains('-') => format!("{}{}", from.trim(), to.trim()),
            Some(_) => return Err(CoordinateError::BadMoveText(trimmed.to_string())),
            None => trimmed.to_string(),
        };
        if compact.chars().count() != 4 {
            return Err(CoordinateError::BadMoveText(trimmed.to_string()));
        }
        let split = compact
            .char_indices()
            .nth(2)
            .map(|(i, _)| i)
            .ok_or_else(|| CoordinateError::BadMoveText(trimmed.to_string()))?;
        let from = compact[..split].parse::<Square>()?;
        let to = compact[split..].parse::<Square>()?;
        Ok(Move { from, to })
    }
}

impl FromStr for Move {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}-{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
