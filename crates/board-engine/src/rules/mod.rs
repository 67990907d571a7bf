//! Rule set abstraction for the supported variants.
//!
//! Piece movement is shared by every variant (see [`crate::movegen`]); a
//! rule set only decides which pieces take part and where they start.

mod checkers;
mod extended;
mod standard;

pub use checkers::Checkers;
pub use extended::ExtendedChess;
pub use standard::StandardChess;

use board_core::{Color, Piece, PieceKind, Square, Variant};

use crate::Board;

/// Trait implemented by each variant.
///
/// # Example
///
/// ```
/// use board_core::Variant;
/// use board_engine::rules::{rules_for, RuleSet};
///
/// let board = rules_for(Variant::Checkers).initial_board();
/// assert_eq!(board.pieces().count(), 24);
/// ```
pub trait RuleSet {
    /// Returns the variant this rule set implements.
    fn variant(&self) -> Variant;

    /// Returns the starting layout.
    fn initial_board(&self) -> Board;

    /// Returns the piece kinds that can appear on a board of this variant.
    fn piece_kinds(&self) -> &'static [PieceKind];
}

/// Returns the rule set for `variant`.
pub fn rules_for(variant: Variant) -> &'static dyn RuleSet {
    match variant {
        Variant::Standard => &StandardChess,
        Variant::Extended => &ExtendedChess,
        Variant::Checkers => &Checkers,
    }
}

/// The chess back rank from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Places the 32 standard chess pieces on `board`.
fn place_chess_army(board: &mut Board) {
    for color in Color::ALL {
        let back_row = match color {
            Color::White => 7,
            Color::Black => 0,
        };
        for (col, kind) in (0u8..).zip(BACK_RANK) {
            if let Some(sq) = Square::new(back_row, col) {
                board.put(sq, Piece::new(kind, color));
            }
            if let Some(sq) = Square::new(color.pawn_row(), col) {
                board.put(sq, Piece::new(PieceKind::Pawn, color));
            }
        }
    }
}
