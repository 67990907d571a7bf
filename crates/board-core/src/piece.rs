//! Piece representation for both chess and checkers.

use crate::{Color, Variant};

/// Every kind of piece the engine knows about.
///
/// The first nine kinds belong to the chess variants, `Man` and `Dama`
/// to checkers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
    Unicorn = 6,
    Dragon = 7,
    Sage = 8,
    Man = 9,
    Dama = 10,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 11] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Unicorn,
        PieceKind::Dragon,
        PieceKind::Sage,
        PieceKind::Man,
        PieceKind::Dama,
    ];

    /// Returns true for the two checkers kinds.
    #[inline]
    pub const fn is_checker(self) -> bool {
        matches!(self, PieceKind::Man | PieceKind::Dama)
    }

    /// Returns true if this piece moves along open lines (rook, bishop, queen, dragon).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(
            self,
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen | PieceKind::Dragon
        )
    }

    /// Returns true if this kind is counted when scanning for threats.
    ///
    /// Unicorn, Dragon and Sage move and capture normally but never put a
    /// piece under threat.
    #[inline]
    pub const fn threatens(self) -> bool {
        !matches!(self, PieceKind::Unicorn | PieceKind::Dragon | PieceKind::Sage)
    }

    /// Returns the upper-case diagram letter for this kind.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
            PieceKind::Unicorn => 'U',
            PieceKind::Dragon => 'D',
            PieceKind::Sage => 'S',
            PieceKind::Man => 'C',
            PieceKind::Dama => 'D',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::Unicorn => "Unicorn",
            PieceKind::Dragon => "Dragon",
            PieceKind::Sage => "Sage",
            PieceKind::Man => "Man",
            PieceKind::Dama => "Dama",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: a kind plus the color that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Returns the diagram letter: upper-case for White, lower-case for Black.
    pub const fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Parses a diagram letter in the context of a variant.
    ///
    /// `D` is a Dragon in the chess variants and a Dama in checkers.
    pub const fn from_char(c: char, variant: Variant) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match (variant.is_checkers(), c.to_ascii_uppercase()) {
            (true, 'C') => PieceKind::Man,
            (true, 'D') => PieceKind::Dama,
            (false, 'P') => PieceKind::Pawn,
            (false, 'R') => PieceKind::Rook,
            (false, 'N') => PieceKind::Knight,
            (false, 'B') => PieceKind::Bishop,
            (false, 'Q') => PieceKind::Queen,
            (false, 'K') => PieceKind::King,
            (false, 'U') => PieceKind::Unicorn,
            (false, 'D') => PieceKind::Dragon,
            (false, 'S') => PieceKind::Sage,
            _ => return None,
        };
        Some(Piece { kind, color })
    }

    /// Returns the display glyph for this piece.
    ///
    /// Purely cosmetic; the kind and color are the authoritative state.
    pub const fn symbol(self) -> char {
        match (self.kind, self.color) {
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::Unicorn, Color::White) => '∆',
            (PieceKind::Dragon, Color::White) => '⊱',
            (PieceKind::Sage, Color::White) => '⊞',
            (PieceKind::Man, Color::White) => '⛀',
            (PieceKind::Dama, Color::White) => '⛁',
            (PieceKind::Pawn, Color::Black) => '♟',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::King, Color::Black) => '♚',
            (PieceKind::Unicorn, Color::Black) => '∇',
            (PieceKind::Dragon, Color::Black) => '⊰',
            (PieceKind::Sage, Color::Black) => '⊟',
            (PieceKind::Man, Color::Black) => '⛂',
            (PieceKind::Dama, Color::Black) => '⛃',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_char() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).to_char(), 'P');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).to_char(), 'p');
        assert_eq!(Piece::new(PieceKind::Unicorn, Color::Black).to_char(), 'u');
        assert_eq!(Piece::new(PieceKind::Man, Color::White).to_char(), 'C');
    }

    #[test]
    fn piece_from_char_depends_on_variant() {
        assert_eq!(
            Piece::from_char('D', Variant::Extended),
            Some(Piece::new(PieceKind::Dragon, Color::White))
        );
        assert_eq!(
            Piece::from_char('d', Variant::Checkers),
            Some(Piece::new(PieceKind::Dama, Color::Black))
        );
        assert_eq!(Piece::from_char('c', Variant::Standard), None);
        assert_eq!(Piece::from_char('p', Variant::Checkers), None);
        assert_eq!(Piece::from_char('x', Variant::Extended), None);
    }

    #[test]
    fn symbols_differ_by_color() {
        for kind in PieceKind::ALL {
            let white = Piece::new(kind, Color::White).symbol();
            let black = Piece::new(kind, Color::Black).symbol();
            assert_ne!(white, black, "{} glyphs should differ", kind);
        }
    }

    #[test]
    fn is_slider() {
        assert!(!PieceKind::Pawn.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(PieceKind::Bishop.is_slider());
        assert!(PieceKind::Rook.is_slider());
        assert!(PieceKind::Queen.is_slider());
        assert!(PieceKind::Dragon.is_slider());
        assert!(!PieceKind::Unicorn.is_slider());
        assert!(!PieceKind::Sage.is_slider());
    }

    #[test]
    fn invented_pieces_do_not_threaten() {
        for kind in [PieceKind::Unicorn, PieceKind::Dragon, PieceKind::Sage] {
            assert!(!kind.threatens(), "{} should not threaten", kind);
        }
        for kind in [PieceKind::Pawn, PieceKind::Queen, PieceKind::King, PieceKind::Man] {
            assert!(kind.threatens(), "{} should threaten", kind);
        }
    }

    #[test]
    fn checker_kinds() {
        assert!(PieceKind::Man.is_checker());
        assert!(PieceKind::Dama.is_checker());
        assert!(!PieceKind::King.is_checker());
    }
}
