//! The piece catalog: movement and capture rules for every piece kind.
//!
//! All kinds go through [`destinations`], a single exhaustive match on
//! [`PieceKind`]. Rules are evaluated against a board snapshot and ignore
//! whose turn it is and whether the mover's own king would be left attacked.

mod attacks;

use board_core::{Color, Piece, PieceKind, Square};

use crate::{Board, SquareSet};

pub use attacks::{
    leap, slide, Delta, ALL_DIRECTIONS, DIAGONAL, DRAGON_RANGE, KNIGHT_DELTAS, ORTHOGONAL,
    UNICORN_DELTAS, UNLIMITED,
};

/// Returns every square `piece` standing on `from` may move to.
///
/// The result never contains an off-board square or a square held by
/// the mover's own color.
pub fn destinations(board: &Board, piece: Piece, from: Square) -> SquareSet {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, color),
        PieceKind::Rook => slide(board, from, color, &ORTHOGONAL, UNLIMITED),
        PieceKind::Knight => leap(board, from, color, &KNIGHT_DELTAS),
        PieceKind::Bishop => slide(board, from, color, &DIAGONAL, UNLIMITED),
        PieceKind::Queen => slide(board, from, color, &ALL_DIRECTIONS, UNLIMITED),
        PieceKind::King => leap(board, from, color, &ALL_DIRECTIONS),
        // Jumps straight to the third diagonal square; nothing in between is looked at.
        PieceKind::Unicorn => leap(board, from, color, &UNICORN_DELTAS),
        PieceKind::Dragon => slide(board, from, color, &ALL_DIRECTIONS, DRAGON_RANGE),
        PieceKind::Sage => leap(board, from, color, &DIAGONAL),
        // A Dama keeps the Man's rule.
        PieceKind::Man | PieceKind::Dama => checker_destinations(board, from, color),
    }
}

/// Returns true if `piece` on `from` may move to `to`.
#[inline]
pub fn is_legal_destination(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    destinations(board, piece, from).contains(to)
}

/// Returns the destinations of whatever occupies `from` (empty if nothing does).
pub fn legal_destinations(board: &Board, from: Square) -> SquareSet {
    board.destinations(from)
}

fn pawn_destinations(board: &Board, from: Square, color: Color) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0).filter(|&sq| board.is_empty_at(sq)) {
        targets.insert(one);
        if from.row() == color.pawn_row() {
            if let Some(two) = one.offset(forward, 0).filter(|&sq| board.is_empty_at(sq)) {
                targets.insert(two);
            }
        }
    }

    for side in [-1, 1] {
        let Some(diag) = from.offset(forward, side) else {
            continue;
        };
        if board.piece_at(diag).is_some_and(|p| p.color != color) {
            targets.insert(diag);
        }
    }

    targets
}

fn checker_destinations(board: &Board, from: Square, color: Color) -> SquareSet {
    let mut targets = SquareSet::EMPTY;

    for side in [-1, 1] {
        if let Some(step) = from.offset(color.forward(), side) {
            if board.is_empty_at(step) {
                targets.insert(step);
            }
        }
    }

    for (dr, dc) in DIAGONAL {
        let (Some(over), Some(landing)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        let enemy_between = board.piece_at(over).is_some_and(|p| p.color != color);
        if enemy_between && board.is_empty_at(landing) {
            targets.insert(landing);
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::Variant;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn set(squares: &[&str]) -> SquareSet {
        squares.iter().map(|s| sq(s)).collect()
    }

    fn board(variant: Variant, diagram: &str) -> Board {
        Board::from_diagram(variant, diagram).unwrap()
    }

    fn piece_destinations(board: &Board, at: &str) -> SquareSet {
        legal_destinations(board, sq(at))
    }

    #[test]
    fn pawn_single_and_double_step_from_home_row() {
        let b = Board::new(Variant::Standard);
        assert_eq!(piece_destinations(&b, "e2"), set(&["e3", "e4"]));
        assert_eq!(piece_destinations(&b, "d7"), set(&["d6", "d5"]));
    }

    #[test]
    fn pawn_double_step_needs_both_squares_empty() {
        let b = board(
            Variant::Standard,
            "........\n........\n........\n........\n....n...\n...n....\n...PP...\n........",
        );
        // d2 is blocked at d3, e2 only at e4.
        assert_eq!(piece_destinations(&b, "d2"), SquareSet::EMPTY);
        assert_eq!(piece_destinations(&b, "e2"), set(&["e3", "d3"]));
    }

    #[test]
    fn pawn_double_step_only_from_home_row() {
        let b = board(
            Variant::Standard,
            "........\n........\n........\n........\n........\n....P...\n........\n........",
        );
        assert_eq!(piece_destinations(&b, "e3"), set(&["e4"]));
    }

    #[test]
    fn pawn_captures_diagonally_forward_only() {
        let b = board(
            Variant::Standard,
            "........\n........\n........\n...p.P..\n....P...\n...p.p..\n........\n........",
        );
        // Enemies behind (d3, f3) are ignored; d5 is capturable, f5 is friendly.
        assert_eq!(piece_destinations(&b, "e4"), set(&["e5", "d5"]));
    }

    #[test]
    fn rook_stops_at_friendly_and_takes_enemy() {
        let b = board(
            Variant::Standard,
            "........\n...p....\n........\n........\n.N.R...n\n........\n........\n........",
        );
        let expected = set(&[
            "d5", "d6", "d7", // up to and including the enemy pawn
            "d3", "d2", "d1", //
            "c4", // friendly knight on b4 stops the ray
            "e4", "f4", "g4", "h4", // enemy knight on h4 included
        ]);
        assert_eq!(piece_destinations(&b, "d4"), expected);
    }

    #[test]
    fn bishop_blocking_matches_rook() {
        let b = board(
            Variant::Standard,
            "........\n........\n.....p..\n........\n...B....\n..P.....\n........\n........",
        );
        let expected = set(&["e5", "f6", "c5", "b6", "a7", "e3", "f2", "g1"]);
        assert_eq!(piece_destinations(&b, "d4"), expected);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let b = board(
            Variant::Standard,
            "........\n...p....\n........\n........\n.N.Q...n\n..P.....\n........\n........",
        );
        let queen = piece_destinations(&b, "d4");
        let mut as_rook = b.clone();
        as_rook.put(sq("d4"), Piece::new(PieceKind::Rook, Color::White));
        let mut as_bishop = b.clone();
        as_bishop.put(sq("d4"), Piece::new(PieceKind::Bishop, Color::White));
        assert_eq!(
            queen,
            piece_destinations(&as_rook, "d4") | piece_destinations(&as_bishop, "d4")
        );
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let b = Board::new(Variant::Standard);
        assert_eq!(piece_destinations(&b, "b1"), set(&["a3", "c3"]));
    }

    #[test]
    fn king_moves_one_square() {
        let b = board(
            Variant::Standard,
            "........\n........\n........\n...pP...\n....K...\n........\n........\n........",
        );
        let expected = set(&["d5", "f5", "d4", "f4", "d3", "e3", "f3"]);
        assert_eq!(piece_destinations(&b, "e4"), expected);
    }

    #[test]
    fn unicorn_ignores_intermediate_squares() {
        let b = board(
            Variant::Extended,
            "........\n........\n........\n..pP....\n.P......\nU.......\n........\n........",
        );
        // b4 and c5 are occupied, yet d6 is still reachable from a3.
        let expected = set(&["d6"]);
        assert_eq!(piece_destinations(&b, "a3"), expected);
    }

    #[test]
    fn unicorn_takes_enemy_but_not_friend() {
        let b = board(
            Variant::Extended,
            "........\n......p.\n........\n........\n...U....\n........\n........\nP.......",
        );
        // d4 → g7 (enemy), a7 and g1 empty, a1 friendly.
        assert_eq!(piece_destinations(&b, "d4"), set(&["a7", "g7", "g1"]));
    }

    #[test]
    fn dragon_range_is_three_and_blocked() {
        let b = board(
            Variant::Extended,
            "........\n........\n...p....\n........\n...D.P..\n........\n........\n........",
        );
        let expected = set(&[
            "d5", "d6", // enemy on d6 ends the ray
            "d3", "d2", "d1", //
            "c4", "b4", "a4", //
            "e4", // friendly on f4
            "c5", "b6", "a7", //
            "e5", "f6", "g7", //
            "c3", "b2", "a1", //
            "e3", "f2", "g1",
        ]);
        assert_eq!(piece_destinations(&b, "d4"), expected);
    }

    #[test]
    fn dragon_from_corner_stops_after_three() {
        let b = board(
            Variant::Extended,
            "........\n........\n........\n........\n........\n........\n........\nD.......",
        );
        let expected = set(&["a2", "a3", "a4", "b1", "c1", "d1", "b2", "c3", "d4"]);
        assert_eq!(piece_destinations(&b, "a1"), expected);
    }

    #[test]
    fn sage_steps_one_diagonal() {
        let b = Board::new(Variant::Extended);
        // White sage on e4: d5 holds the black dragon, f5 is empty,
        // d3 and f3 are empty.
        assert_eq!(piece_destinations(&b, "e4"), set(&["d5", "f5", "d3", "f3"]));
    }

    #[test]
    fn man_steps_forward_and_jumps_any_diagonal() {
        let b = board(
            Variant::Checkers,
            "........\n........\n........\n........\n..c.c...\n...C....\n..c.....\n........",
        );
        // Forward steps c4/e4 are occupied; jumps to b5, f5 and back to b1.
        assert_eq!(piece_destinations(&b, "d3"), set(&["b5", "f5", "b1"]));
    }

    #[test]
    fn man_cannot_jump_onto_occupied_square_or_own_piece() {
        let b = board(
            Variant::Checkers,
            "........\n........\n........\n.c......\n..c.C...\n...C....\n........\n........",
        );
        assert_eq!(piece_destinations(&b, "d3"), SquareSet::EMPTY);
    }

    #[test]
    fn black_man_moves_down_the_board() {
        let b = Board::new(Variant::Checkers);
        assert_eq!(piece_destinations(&b, "b6"), set(&["a5", "c5"]));
        assert_eq!(piece_destinations(&b, "a7"), SquareSet::EMPTY);
    }

    #[test]
    fn dama_uses_the_man_rule() {
        // A Dama does not gain long-range or backward non-capturing moves.
        let b = board(
            Variant::Checkers,
            "........\n........\n........\n........\n...D....\n........\n........\n........",
        );
        assert_eq!(piece_destinations(&b, "d4"), set(&["c5", "e5"]));
    }

    #[test]
    fn is_legal_destination_matches_destinations() {
        let b = Board::new(Variant::Standard);
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert!(is_legal_destination(&b, pawn, sq("e2"), sq("e4")));
        assert!(!is_legal_destination(&b, pawn, sq("e2"), sq("e5")));

        // The white sage holds e4 in the extended layout.
        let b = Board::new(Variant::Extended);
        assert!(is_legal_destination(&b, pawn, sq("e2"), sq("e3")));
        assert!(!is_legal_destination(&b, pawn, sq("e2"), sq("e4")));
        assert!(is_legal_destination(&b, pawn, sq("f2"), sq("f4")));
    }

    #[test]
    fn empty_square_has_no_destinations() {
        let b = Board::new(Variant::Extended);
        assert_eq!(piece_destinations(&b, "e6"), SquareSet::EMPTY);
        assert_eq!(piece_destinations(&b, "f4"), SquareSet::EMPTY);
    }
}
