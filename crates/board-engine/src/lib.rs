//! Move-legality engine for extended chess and checkers.
//!
//! This crate provides:
//! - [`SquareSet`] - 64-bit set of squares used for destinations and threats
//! - [`Board`] - 8x8 grid of optional pieces with setup and move application
//! - [`movegen`] - the piece catalog: one rule per [`PieceKind`](board_core::PieceKind)
//! - [`threats`] - threat-set and check detection
//! - [`RuleSet`] - per-variant starting layouts
//! - [`Game`] - turn-taking controller with move history
//!
//! # Example
//!
//! ```
//! use board_core::{Color, Variant};
//! use board_engine::Game;
//!
//! let mut game = Game::new(Variant::Extended);
//! game.submit_move_text("f2-f4").unwrap();
//! assert_eq!(game.move_count(), 1);
//! assert_eq!(game.current_turn(), Color::Black);
//!
//! let hint = game.hint_text("d7").unwrap();
//! println!("d7 can move to {:?}", hint);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;
mod square_set;
pub mod threats;

pub use board::{Board, DiagramError, MoveApplied, MoveError};
pub use game::{Game, GameError, IllegalReason};
pub use movegen::{destinations, is_legal_destination, legal_destinations};
pub use rules::{rules_for, Checkers, ExtendedChess, RuleSet, StandardChess};
pub use square_set::{SquareSet, SquareSetIter};
pub use threats::{threats_and_check, ThreatReport};
