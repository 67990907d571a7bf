//! Errors for coordinate and move-text parsing.

use thiserror::Error;

/// Errors that can occur when parsing squares or move text.
///
/// Every variant is a malformed-coordinate condition: the text does not
/// describe a square (or pair of squares) on the board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("malformed coordinate '{0}': expected a file letter and a rank digit")]
    BadLength(String),

    #[error("malformed coordinate: file '{0}' is not in a-h")]
    BadFile(char),

    #[error("malformed coordinate: rank '{0}' is not in 1-8")]
    BadRank(char),

    #[error("malformed move '{0}': expected something like e2-e4")]
    BadMoveText(String),
}
