//! Console command parsing.

use board_core::{CoordinateError, Move, Square};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    #[error("usage: hint <square>, for example 'hint e2'")]
    MissingSquare,
}

/// Commands typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Move a piece, e.g. `e2-e4`.
    Move(Move),
    /// Show the destinations of one piece.
    Hint(Square),
    /// Redraw the board.
    Board,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
    /// A blank line.
    Empty,
}

pub const HELP: &str = "\
Commands:
  <from>-<to>    move a piece, e.g. e2-e4
  hint <square>  mark where the piece on <square> can go
  board          redraw the board
  help           show this list
  quit, exit     leave the game";

impl ConsoleCommand {
    /// Parse one input line.
    ///
    /// Keywords are case-insensitive. Anything that is not a keyword is read
    /// as move text.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("").to_ascii_lowercase();

        match cmd.as_str() {
            "" => Ok(ConsoleCommand::Empty),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "board" => Ok(ConsoleCommand::Board),
            "hint" => {
                let square = parts.next().ok_or(CommandError::MissingSquare)?;
                Ok(ConsoleCommand::Hint(square.parse()?))
            }
            _ => Ok(ConsoleCommand::Move(Move::parse(input)?)),
        }
    }
}
