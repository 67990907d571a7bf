//! Turn-taking game controller.
//!
//! The [`Game`] struct owns the board and the turn state. It accepts a move
//! only if the piece on the origin belongs to the side to move and its rule
//! admits the destination; otherwise nothing changes.

use board_core::{Color, CoordinateError, Move, Piece, Square, Variant};
use thiserror::Error;
use tracing::debug;

use crate::board::{MoveApplied, MoveError};
use crate::threats::ThreatReport;
use crate::{Board, SquareSet};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// The origin square is empty.
    EmptySquare,
    /// The piece on the origin belongs to the other player.
    NotYourPiece(Color),
    /// The piece's rule does not admit the destination.
    NotADestination(Piece),
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalReason::EmptySquare => write!(f, "there is no piece there"),
            IllegalReason::NotYourPiece(owner) => write!(f, "that piece belongs to {}", owner),
            IllegalReason::NotADestination(piece) => write!(f, "a {} cannot move there", piece.kind),
        }
    }
}

/// Error type for game operations.
///
/// Every error is recoverable: the game state is unchanged when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    MalformedCoordinate(#[from] CoordinateError),

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: IllegalReason },

    #[error("no hint for {0}: the square is empty or the piece is not yours")]
    InvalidHint(Square),
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    variant: Variant,
    board: Board,
    current_turn: Color,
    move_count: u32,
    history: Vec<MoveApplied>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl Game {
    /// Creates a new game with the starting layout of `variant`; White moves first.
    pub fn new(variant: Variant) -> Self {
        Self::from_board(variant, Board::new(variant), Color::White)
    }

    /// Creates a game from a custom position.
    pub fn from_board(variant: Variant, board: Board, to_move: Color) -> Self {
        Game {
            variant,
            board,
            current_turn: to_move,
            move_count: 0,
            history: Vec::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color whose move it is.
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Returns the number of moves accepted so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the accepted moves in order.
    pub fn move_history(&self) -> &[MoveApplied] {
        &self.history
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Returns the destinations of the occupant of `sq`, regardless of whose turn it is.
    pub fn legal_destinations(&self, sq: Square) -> SquareSet {
        self.board.destinations(sq)
    }

    /// Returns the threats against `color` and whether its king is in check.
    pub fn threats_and_check(&self, color: Color) -> ThreatReport {
        self.board.threats_and_check(color)
    }

    /// Applies a move for the side to move.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveApplied, GameError> {
        let mv = Move::new(from, to);
        let reject = |reason: IllegalReason| {
            debug!(%mv, %reason, "move rejected");
            GameError::IllegalMove { mv, reason }
        };

        match self.board.piece_at(from) {
            None => return Err(reject(IllegalReason::EmptySquare)),
            Some(piece) if piece.color != self.current_turn => {
                return Err(reject(IllegalReason::NotYourPiece(piece.color)))
            }
            Some(_) => {}
        }

        let applied = self.board.move_piece(from, to).map_err(|e| match e {
            MoveError::EmptySquare(_) => reject(IllegalReason::EmptySquare),
            MoveError::IllegalDestination { piece, .. } => {
                reject(IllegalReason::NotADestination(piece))
            }
        })?;

        if let Some((sq, victim)) = applied.captured {
            debug!(%sq, %victim, "piece captured");
        }
        if let Some(promoted) = applied.promoted {
            debug!(%to, %promoted, "piece promoted");
        }

        self.move_count += 1;
        self.current_turn = self.current_turn.opposite();
        self.history.push(applied);
        debug!(%mv, move_count = self.move_count, next = %self.current_turn, "move applied");
        Ok(applied)
    }

    /// Parses move text such as `"e2-e4"` and applies it.
    pub fn submit_move_text(&mut self, text: &str) -> Result<MoveApplied, GameError> {
        let mv = Move::parse(text)?;
        self.submit_move(mv.from, mv.to)
    }

    /// Returns the destinations of the piece on `sq` if it belongs to the side to move.
    pub fn hint(&self, sq: Square) -> Result<SquareSet, GameError> {
        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.current_turn => Ok(self.board.destinations(sq)),
            _ => Err(GameError::InvalidHint(sq)),
        }
    }

    /// Parses a square such as `"e2"` and returns its hint.
    pub fn hint_text(&self, text: &str) -> Result<SquareSet, GameError> {
        let sq = text.parse::<Square>()?;
        self.hint(sq)
    }
}
