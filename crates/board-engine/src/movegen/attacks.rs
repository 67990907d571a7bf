//! Direction tables and the two movement primitives: leaping and sliding.

use board_core::{Color, Square};

use crate::{Board, SquareSet};

/// A (row, column) step.
pub type Delta = (i8, i8);

pub const ORTHOGONAL: [Delta; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const DIAGONAL: [Delta; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ALL_DIRECTIONS: [Delta; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_DELTAS: [Delta; 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// Unicorn jumps: exactly three squares along each diagonal.
pub const UNICORN_DELTAS: [Delta; 4] = [(-3, -3), (-3, 3), (3, -3), (3, 3)];

/// How far a Dragon may travel along a line.
pub const DRAGON_RANGE: u8 = 3;

/// Effectively unbounded range for rooks, bishops and queens.
pub const UNLIMITED: u8 = 7;

/// Returns true if `sq` can be entered by a piece of `color`: empty or enemy-held.
#[inline]
pub fn enterable(board: &Board, sq: Square, color: Color) -> bool {
    board.piece_at(sq).map_or(true, |p| p.color != color)
}

/// Collects single-step targets at fixed offsets.
///
/// Intermediate squares are never inspected, so a leap cannot be blocked.
pub fn leap(board: &Board, from: Square, color: Color, deltas: &[Delta]) -> SquareSet {
    deltas
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&sq| enterable(board, sq, color))
        .collect()
}

/// Collects targets along rays, up to `range` squares per direction.
///
/// Each ray stops at the first occupied square: an enemy there is
/// included, a friendly piece is not.
pub fn slide(board: &Board, from: Square, color: Color, dirs: &[Delta], range: u8) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    for &(dr, dc) in dirs {
        let mut current = from;
        for _ in 0..range {
            let Some(next) = current.offset(dr, dc) else {
                break;
            };
            match board.piece_at(next) {
                None => targets.insert(next),
                Some(blocker) => {
                    if blocker.color != color {
                        targets.insert(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    targets
}
