//! Plain chess layout.

use super::{place_chess_army, RuleSet};
use crate::Board;
use board_core::{PieceKind, Variant};

/// Chess with the six standard pieces.
///
/// There is no castling, en passant, promotion, or game-end detection;
/// only piece movement and check are modelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

const KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
];

impl RuleSet for StandardChess {
    fn variant(&self) -> Variant {
        Variant::Standard
    }

    fn initial_board(&self) -> Board {
        let mut board = Board::empty();
        place_chess_army(&mut board);
        board
    }

    fn piece_kinds(&self) -> &'static [PieceKind] {
        &KINDS
    }
}
