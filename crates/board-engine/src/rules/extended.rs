//! Chess with three invented pieces.

use super::{place_chess_army, RuleSet};
use crate::Board;
use board_core::{Color, Piece, PieceKind, Square, Variant};

/// Standard chess plus a Unicorn, Dragon and Sage for each side.
///
/// The extra pieces start in the middle of the board on files c, d and e:
/// Black's on rank 5, White's on rank 4.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedChess;

const KINDS: [PieceKind; 9] = [
    PieceKind::Pawn,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Unicorn,
    PieceKind::Dragon,
    PieceKind::Sage,
];

const NEW_PIECES: [PieceKind; 3] = [PieceKind::Unicorn, PieceKind::Dragon, PieceKind::Sage];

impl RuleSet for ExtendedChess {
    fn variant(&self) -> Variant {
        Variant::Extended
    }

    fn initial_board(&self) -> Board {
        let mut board = Board::empty();
        place_chess_army(&mut board);
        for (color, row) in [(Color::Black, 3), (Color::White, 4)] {
            for (col, kind) in (2u8..).zip(NEW_PIECES) {
                if let Some(sq) = Square::new(row, col) {
                    board.put(sq, Piece::new(kind, color));
                }
            }
        }
        board
    }

    fn piece_kinds(&self) -> &'static [PieceKind] {
        &KINDS
    }
}
