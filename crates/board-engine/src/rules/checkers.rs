//! Checkers (draughts).

use super::RuleSet;
use crate::Board;
use board_core::{Color, Piece, PieceKind, Square, Variant};

/// Checkers on the dark squares of an 8x8 board.
///
/// Men step diagonally forward and jump enemy pieces on any diagonal. A
/// Man reaching the far row is promoted to a Dama, which keeps the Man's
/// movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkers;

const KINDS: [PieceKind; 2] = [PieceKind::Man, PieceKind::Dama];

impl RuleSet for Checkers {
    fn variant(&self) -> Variant {
        Variant::Checkers
    }

    fn initial_board(&self) -> Board {
        let mut board = Board::empty();
        for (color, rows) in [(Color::Black, 0..3), (Color::White, 5..8)] {
            for row in rows {
                for col in 0..8 {
                    if (row + col) % 2 == 1 {
                        if let Some(sq) = Square::new(row, col) {
                            board.put(sq, Piece::new(PieceKind::Man, color));
                        }
                    }
                }
            }
        }
        board
    }

    fn piece_kinds(&self) -> &'static [PieceKind] {
        &KINDS
    }
}
