//! Core types for the board-game engine.
//!
//! This crate provides the value types shared by the engine and its front ends:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (row 0 is rank 8)
//! - [`Move`] and move-text parsing ("e2-e4")
//! - [`Variant`] for selecting a rule set

mod color;
mod mov;
mod notation;
mod piece;
mod square;
mod variant;

pub use color::Color;
pub use mov::Move;
pub use notation::CoordinateError;
pub use piece::{Piece, PieceKind};
pub use square::Square;
pub use variant::{UnknownVariant, Variant};
