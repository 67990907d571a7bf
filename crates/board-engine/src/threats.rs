//! Threat and check detection.

use board_core::{Color, PieceKind};

use crate::movegen::destinations;
use crate::{Board, SquareSet};

/// The piece whose attack puts its owner in check.
pub const ROYAL: PieceKind = PieceKind::King;

/// Threats against one side, recomputed from scratch on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreatReport {
    /// Squares holding a piece of the examined color that an opposing piece could move to.
    pub threats: SquareSet,
    /// True if the examined color's king stands on a threatened square.
    pub check: bool,
}

/// Returns every square some threatening piece of `attacker` could move to.
///
/// Turn order and self-check are ignored. Kinds for which
/// [`PieceKind::threatens`] is false are left out of the scan.
pub fn attacked_by(board: &Board, attacker: Color) -> SquareSet {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker && piece.kind.threatens())
        .fold(SquareSet::EMPTY, |acc, (sq, piece)| {
            acc | destinations(board, piece, sq)
        })
}

/// Scans the board for pieces of `color` that the opposite color attacks.
///
/// Checkers has no royal piece, so `check` is always false there.
pub fn threats_and_check(board: &Board, color: Color) -> ThreatReport {
    let threats = attacked_by(board, color.opposite()) & board.occupied_by(color);
    let check = board
        .pieces()
        .any(|(sq, piece)| piece.kind == ROYAL && piece.color == color && threats.contains(sq));
    ThreatReport { threats, check }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::{Square, Variant};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn every_start_is_quiet() {
        for variant in Variant::ALL {
            let board = Board::new(variant);
            for color in Color::ALL {
                assert_eq!(
                    board.threats_and_check(color),
                    ThreatReport::default(),
                    "{} {}",
                    variant,
                    color
                );
            }
        }
    }

    #[test]
    fn invented_pieces_capture_without_threatening() {
        let board = Board::new(Variant::Extended);
        // The dragons and sages face each other and can take, yet the scan
        // leaves them out.
        assert!(board.destinations(sq("d4")).contains(sq("d5")));
        assert!(board.destinations(sq("e5")).contains(sq("d4")));
        assert!(board.destinations(sq("c5")).contains(sq("f2")));
        let attacked = attacked_by(&board, Color::Black);
        assert!(attacked.contains(sq("a6")));
        assert!(!attacked.contains(sq("f2")));
        assert!(!attacked.contains(sq("d4")));
    }

    #[test]
    fn pieces_attacking_an_invented_piece_count() {
        let board = Board::from_diagram(
            Variant::Extended,
            "....k...\n........\n........\n...s....\n....P...\n........\n........\n....K...",
        )
        .unwrap();
        let expected: SquareSet = [sq("d5")].into_iter().collect();
        assert_eq!(board.threats_and_check(Color::Black).threats, expected);
        assert!(board.threats_and_check(Color::White).threats.is_empty());
    }

    #[test]
    fn rook_gives_check() {
        let board = Board::from_diagram(
            Variant::Standard,
            "....k...\n........\n........\n........\n....R...\n........\n........\n....K...",
        )
        .unwrap();
        let report = board.threats_and_check(Color::Black);
        assert!(report.check);
        assert!(report.threats.contains(sq("e8")));
        assert!(!board.threats_and_check(Color::White).check);
    }

    #[test]
    fn blocked_rook_gives_no_check() {
        let board = Board::from_diagram(
            Variant::Standard,
            "....k...\n....p...\n........\n........\n....R...\n........\n........\n....K...",
        )
        .unwrap();
        let report = board.threats_and_check(Color::Black);
        assert!(!report.check);
        let expected: SquareSet = [sq("e7")].into_iter().collect();
        assert_eq!(report.threats, expected);
    }

    #[test]
    fn unicorn_reaching_the_king_gives_no_check() {
        let board = Board::from_diagram(
            Variant::Extended,
            "....k...\n...p....\n..p.....\n.U......\n........\n........\n........\n....K...",
        )
        .unwrap();
        assert!(board.destinations(sq("b5")).contains(sq("e8")));
        assert!(!board.threats_and_check(Color::Black).check);
    }

    #[test]
    fn attacked_by_includes_empty_squares() {
        let board = Board::new(Variant::Standard);
        let attacked = attacked_by(&board, Color::White);
        // Pawn pushes and knight jumps.
        assert!(attacked.contains(sq("e4")));
        assert!(attacked.contains(sq("f3")));
        assert!(!attacked.contains(sq("e5")));
    }
}
