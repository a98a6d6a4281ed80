//! Move representation: a source, a destination and an optional promotion choice.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn may be replaced by on reaching the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces in index order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Convert from a [`PieceKind`], rejecting pawns and kings.
    pub const fn from_piece_kind(kind: PieceKind) -> Option<PromotionPiece> {
        match kind {
            PieceKind::Knight => Some(PromotionPiece::Knight),
            PieceKind::Bishop => Some(PromotionPiece::Bishop),
            PieceKind::Rook => Some(PromotionPiece::Rook),
            PieceKind::Queen => Some(PromotionPiece::Queen),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }

    /// Parse a piece letter (`q`, `R`, ...) into a promotion choice.
    pub fn from_letter(c: char) -> Option<PromotionPiece> {
        PieceKind::from_letter(c).and_then(PromotionPiece::from_piece_kind)
    }
}

impl fmt::Display for PromotionPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_piece_kind())
    }
}

/// A relocation of one piece, interpreted against a specific position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a move without a promotion choice.
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a move that promotes to `piece` if it lands a pawn on the last row.
    pub const fn new_promotion(from: Square, to: Square, piece: PromotionPiece) -> Move {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// Return a copy of this move carrying `piece` as its promotion choice.
    pub const fn with_promotion(self, piece: PromotionPiece) -> Move {
        Move::new_promotion(self.from, self.to, piece)
    }

    /// Square the piece leaves.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Square the piece lands on.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Promotion choice, if one was supplied.
    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_piece_kind().letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, PromotionPiece};
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn accessors() {
        let mv = Move::new(Square::E2, Square::E4);
        assert_eq!(mv.from(), Square::E2);
        assert_eq!(mv.to(), Square::E4);
        assert_eq!(mv.promotion(), None);
    }

    #[test]
    fn promotion_choice() {
        let mv = Move::new(Square::A7, Square::A8).with_promotion(PromotionPiece::Rook);
        assert_eq!(mv.promotion(), Some(PromotionPiece::Rook));
        assert_eq!(mv, Move::new_promotion(Square::A7, Square::A8, PromotionPiece::Rook));
    }

    #[test]
    fn promotion_piece_conversions() {
        for piece in PromotionPiece::ALL {
            assert_eq!(PromotionPiece::from_piece_kind(piece.to_piece_kind()), Some(piece));
        }
        assert_eq!(PromotionPiece::from_piece_kind(PieceKind::King), None);
        assert_eq!(PromotionPiece::from_piece_kind(PieceKind::Pawn), None);
    }

    #[test]
    fn promotion_from_letter() {
        assert_eq!(PromotionPiece::from_letter('q'), Some(PromotionPiece::Queen));
        assert_eq!(PromotionPiece::from_letter('N'), Some(PromotionPiece::Knight));
        assert_eq!(PromotionPiece::from_letter('k'), None);
        assert_eq!(PromotionPiece::from_letter('p'), None);
    }

    #[test]
    fn display() {
        assert_eq!(Move::new(Square::E2, Square::E4).to_string(), "e2e4");
        assert_eq!(
            Move::new_promotion(Square::B7, Square::B8, PromotionPiece::Queen).to_string(),
            "b7b8q"
        );
    }
}
