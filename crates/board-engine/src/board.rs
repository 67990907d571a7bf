//! Board representation: a flat array of 64 optional occupants.

use board_core::{Color, Move, Piece, PieceKind, Square, Variant};
use thiserror::Error;

use crate::movegen::destinations;
use crate::rules::rules_for;
use crate::threats::{threats_and_check, ThreatReport};
use crate::SquareSet;

/// Errors returned by [`Board::move_piece`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("{piece} on {from} cannot move to {to}")]
    IllegalDestination {
        piece: Piece,
        from: Square,
        to: Square,
    },
}

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram: expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("invalid diagram: row {row} has {width} squares, expected 8")]
    RowWidth { row: usize, width: usize },

    #[error("invalid diagram: '{letter}' is not a {variant} piece (row {row})")]
    UnknownPiece {
        letter: char,
        variant: Variant,
        row: usize,
    },
}

/// The result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveApplied {
    pub mv: Move,
    /// The piece that moved, as it was before the move.
    pub piece: Piece,
    /// The captured piece and the square it was removed from.
    pub captured: Option<(Square, Piece)>,
    /// The replacement piece if the mover was promoted on arrival.
    pub promoted: Option<Piece>,
}

/// An 8x8 board.
///
/// Squares are stored row-major (`row * 8 + col`); at most one piece can
/// occupy a square and every stored piece is on the board by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Creates a board with the starting layout of `variant`.
    pub fn new(variant: Variant) -> Self {
        rules_for(variant).initial_board()
    }

    /// Clears the board and places the starting layout of `variant`.
    pub fn setup(&mut self, variant: Variant) {
        *self = Self::new(variant);
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Places a piece, returning whatever was on the square before.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index() as usize].replace(piece)
    }

    /// Empties a square, returning its previous occupant.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].take()
    }

    /// Iterates over every occupied square in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Returns the squares occupied by `color`.
    pub fn occupied_by(&self, color: Color) -> SquareSet {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Returns the legal destinations of the occupant of `from`.
    ///
    /// An empty square has no destinations.
    pub fn destinations(&self, from: Square) -> SquareSet {
        match self.piece_at(from) {
            Some(piece) => destinations(self, piece, from),
            None => SquareSet::EMPTY,
        }
    }

    /// Moves the occupant of `from` to `to` if its rule allows it.
    ///
    /// On success the mover is relocated and `from` is cleared. A checkers
    /// piece jumping two squares diagonally removes the piece it jumped
    /// over, and a Man arriving on its far row becomes a Dama. On failure
    /// the board is left untouched.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<MoveApplied, MoveError> {
        let piece = self.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
        if !destinations(self, piece, from).contains(to) {
            return Err(MoveError::IllegalDestination { piece, from, to });
        }

        let mut captured = self.remove(to).map(|victim| (to, victim));
        if piece.kind.is_checker() && from.row().abs_diff(to.row()) == 2 {
            let mid = Square::new((from.row() + to.row()) / 2, (from.col() + to.col()) / 2);
            if let Some(mid) = mid {
                captured = self.remove(mid).map(|victim| (mid, victim));
            }
        }

        self.remove(from);
        let promoted = (piece.kind == PieceKind::Man && to.row() == piece.color.far_row())
            .then(|| Piece::new(PieceKind::Dama, piece.color));
        self.put(to, promoted.unwrap_or(piece));

        Ok(MoveApplied {
            mv: Move::new(from, to),
            piece,
            captured,
            promoted,
        })
    }

    /// Returns the opposing threats against `color` and whether its king is attacked.
    pub fn threats_and_check(&self, color: Color) -> ThreatReport {
        threats_and_check(self, color)
    }

    /// Parses a diagram of 8 rows of 8 characters, rank 8 first.
    ///
    /// `.` marks an empty square; piece letters are upper-case for White
    /// and lower-case for Black. Blank lines and surrounding whitespace are
    /// ignored.
    pub fn from_diagram(variant: Variant, text: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(DiagramError::RowCount(rows.len()));
        }

        let kinds = rules_for(variant).piece_kinds();
        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != 8 {
                return Err(DiagramError::RowWidth { row, width });
            }
            for (col, c) in line.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c, variant)
                    .filter(|p| kinds.contains(&p.kind))
                    .ok_or(DiagramError::UnknownPiece {
                        letter: c,
                        variant,
                        row,
                    })?;
                if let Some(sq) = Square::new(row as u8, col as u8) {
                    board.put(sq, piece);
                }
            }
        }
        Ok(board)
    }

    /// Renders the board as a diagram accepted by [`Board::from_diagram`].
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(72);
        for (i, slot) in self.squares.iter().enumerate() {
            out.push(slot.map_or('.', Piece::to_char));
            if i % 8 == 7 {
                out.push('\n');
            }
        }
        out
    }
}
