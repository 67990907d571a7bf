//! Text rendering of the board.

use std::fmt;

use board_core::{Piece, Square};
use board_engine::{Game, SquareSet};

use crate::config::ConsoleConfig;

/// Display switches for the board view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub unicode: bool,
    pub show_threats: bool,
}

impl From<&ConsoleConfig> for RenderOptions {
    fn from(config: &ConsoleConfig) -> Self {
        RenderOptions {
            unicode: config.unicode,
            show_threats: config.show_threats,
        }
    }
}

const FILES: &str = "   a b c d e f g h";

/// A board snapshot ready to print.
///
/// Threatened pieces of the side to move are drawn as `!` and hint squares
/// as `*`.
pub struct BoardView<'a> {
    game: &'a Game,
    options: RenderOptions,
    hint: SquareSet,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a Game, options: RenderOptions) -> Self {
        BoardView {
            game,
            options,
            hint: SquareSet::EMPTY,
        }
    }

    /// Marks `squares` with `*`.
    pub fn with_hint(mut self, squares: SquareSet) -> Self {
        self.hint = squares;
        self
    }

    fn piece_char(&self, piece: Piece) -> char {
        if self.options.unicode {
            piece.symbol()
        } else {
            piece.to_char()
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.game.threats_and_check(self.game.current_turn());
        let threats = if self.options.show_threats {
            report.threats
        } else {
            SquareSet::EMPTY
        };

        writeln!(
            f,
            "{} | move {} | {} to move",
            self.game.variant().name(),
            self.game.move_count(),
            self.game.current_turn()
        )?;
        if report.check {
            writeln!(f, "Check!")?;
        }
        writeln!(f, "{}", FILES)?;
        for row in 0..8u8 {
            let rank = char::from(b'8' - row);
            write!(f, "{} ", rank)?;
            for col in 0..8u8 {
                let Some(sq) = Square::new(row, col) else {
                    continue;
                };
                let cell = if self.hint.contains(sq) {
                    '*'
                } else if threats.contains(sq) {
                    '!'
                } else {
                    self.game.piece_at(sq).map_or('.', |p| self.piece_char(p))
                };
                write!(f, " {}", cell)?;
            }
            writeln!(f, "  {}", rank)?;
        }
        write!(f, "{}", FILES)
    }
}
