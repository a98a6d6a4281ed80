//! A piece belonging to a side, bit-packed into a single byte.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// A (side, kind) pair, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Side`] (0 = White, 1 = Black)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(Side::White, PieceKind::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Side::White, PieceKind::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Side::White, PieceKind::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Side::White, PieceKind::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Side::White, PieceKind::Queen);
    pub const WHITE_KING: Piece = Piece::new(Side::White, PieceKind::King);

    pub const BLACK_PAWN: Piece = Piece::new(Side::Black, PieceKind::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Side::Black, PieceKind::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Side::Black, PieceKind::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Side::Black, PieceKind::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Side::Black, PieceKind::Queen);
    pub const BLACK_KING: Piece = Piece::new(Side::Black, PieceKind::King);

    /// Create a piece from a side and a kind.
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Piece {
        Piece((side as u8) << 3 | (kind as u8))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Return the side (bit 3).
    #[inline]
    pub const fn side(self) -> Side {
        match self.0 >> 3 {
            0 => Side::White,
            _ => Side::Black,
        }
    }

    /// Return the same side's piece of another kind. Used for promotion.
    #[inline]
    pub const fn promoted(self, kind: PieceKind) -> Piece {
        Piece::new(self.side(), kind)
    }

    /// Return `true` if this piece belongs to `side`.
    #[inline]
    pub fn is(self, side: Side) -> bool {
        self.side() == side
    }

    /// Return `true` if this piece is of `kind` and belongs to `side`.
    #[inline]
    pub fn is_a(self, side: Side, kind: PieceKind) -> bool {
        self == Piece::new(side, kind)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side().letter(), self.kind().letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
