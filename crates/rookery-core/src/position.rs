//! The board state: which piece stands on which square.

use std::fmt;

use crate::error::RulesError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Back-rank order from file a to file h.
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

/// A mapping from occupied squares to pieces.
///
/// `Position` is a plain `Copy` value. Nothing outside the move executor
/// writes to an existing position; exploring a move always works on a copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Option<Piece>; Square::COUNT],
}

impl Position {
    /// Return a board with no pieces. Useful for building test positions.
    pub const fn empty() -> Position {
        Position {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    ///
    /// Black occupies rows 0 and 1, White rows 6 and 7.
    pub fn starting_position() -> Position {
        let mut position = Position::empty();
        for side in Side::ALL {
            let back = side.back_row();
            let pawns = side.pawn_start_row();
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                let col = col as u8;
                position.squares[(back * 8 + col) as usize] = Some(Piece::new(side, kind));
                position.squares[(pawns * 8 + col) as usize] = Some(Piece::new(side, PieceKind::Pawn));
            }
        }
        position
    }

    /// Return a copy of this position with `piece` placed on `sq`, replacing
    /// whatever stood there.
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Position {
        self.put(sq, piece);
        self
    }

    /// Return a copy of this position with `sq` emptied.
    #[must_use]
    pub fn without_piece(mut self, sq: Square) -> Position {
        self.remove(sq);
        self
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return the side owning the piece on `sq`, if any.
    #[inline]
    pub fn side_at(&self, sq: Square) -> Option<Side> {
        self.piece_at(sq).map(Piece::side)
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Iterate over every occupied square and its piece in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|piece| (Square::from_index_unchecked(i as u8), piece)))
    }

    /// Iterate over the squares and pieces belonging to `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.is(side))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    /// Return the square of `side`'s king.
    ///
    /// # Errors
    ///
    /// [`RulesError::MissingKing`] if `side` has no king on the board.
    pub fn king_square(&self, side: Side) -> Result<Square, RulesError> {
        let king = Piece::new(side, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
            .ok_or(RulesError::MissingKing { side })
    }

    /// Check that each side has exactly one king.
    pub fn validate(&self) -> Result<(), RulesError> {
        for side in Side::ALL {
            let king = Piece::new(side, PieceKind::King);
            let count = self.pieces().filter(|&(_, piece)| piece == king).count();
            match count {
                1 => {}
                0 => return Err(RulesError::MissingKing { side }),
                _ => return Err(RulesError::TooManyKings { side, count }),
            }
        }
        Ok(())
    }

    /// Place `piece` on `sq`, replacing any occupant.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Empty `sq`, returning what stood there.
    #[inline]
    pub(crate) fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pieces().map(|(sq, piece)| (sq.to_string(), piece)))
            .finish()
    }
}

/// Wrapper for printing a position as a labelled 8x8 grid.
///
/// ```text
///    A  B  C  D  E  F  G  H
/// 8 |BR|BN|BB|BQ|BK|BB|BN|BR| 8
/// ...
/// 1 |WR|WN|WB|WQ|WK|WB|WN|WR| 1
///    A  B  C  D  E  F  G  H
/// ```
pub struct PrettyPosition<'a>(&'a Position);

const FILE_HEADER: &str = "   A  B  C  D  E  F  G  H";

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILE_HEADER}")?;
        for row in 0u8..8 {
            let rank = 8 - row;
            write!(f, "{rank} |")?;
            for col in 0u8..8 {
                let sq = Square::from_index_unchecked(row * 8 + col);
                match self.0.piece_at(sq) {
                    Some(piece) => write!(f, "{piece}|")?,
                    None => write!(f, "  |")?,
                }
            }
            writeln!(f, " {rank}")?;
        }
        write!(f, "{FILE_HEADER}")
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::error::RulesError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        Position::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_layout() {
        let pos = Position::starting_position();
        assert_eq!(pos.piece_at(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(pos.piece_at(Square::D1), Some(Piece::WHITE_QUEEN));
        assert_eq!(pos.piece_at(Square::A1), Some(Piece::WHITE_ROOK));
        assert_eq!(pos.piece_at(Square::B1), Some(Piece::WHITE_KNIGHT));
        assert_eq!(pos.piece_at(Square::C1), Some(Piece::WHITE_BISHOP));
        assert_eq!(pos.piece_at(Square::E2), Some(Piece::WHITE_PAWN));
        assert_eq!(pos.piece_at(Square::E8), Some(Piece::BLACK_KING));
        assert_eq!(pos.piece_at(Square::D8), Some(Piece::BLACK_QUEEN));
        assert_eq!(pos.piece_at(Square::H7), Some(Piece::BLACK_PAWN));
        assert_eq!(pos.piece_at(Square::E4), None);
    }

    #[test]
    fn starting_rows_match_sides() {
        let pos = Position::starting_position();
        for (sq, piece) in pos.pieces() {
            match piece.side() {
                Side::Black => assert!(sq.row() <= 1, "black piece on {sq}"),
                Side::White => assert!(sq.row() >= 6, "white piece on {sq}"),
            }
        }
    }

    #[test]
    fn piece_counts() {
        let pos = Position::starting_position();
        assert_eq!(pos.piece_count(), 32);
        assert_eq!(pos.pieces_of(Side::White).count(), 16);
        assert_eq!(pos.pieces_of(Side::Black).count(), 16);
    }

    #[test]
    fn king_square_lookup() {
        let pos = Position::starting_position();
        assert_eq!(pos.king_square(Side::White), Ok(Square::E1));
        assert_eq!(pos.king_square(Side::Black), Ok(Square::E8));
    }

    #[test]
    fn missing_king_is_an_error() {
        let pos = Position::empty().with_piece(Square::E1, Piece::WHITE_KING);
        assert_eq!(pos.king_square(Side::Black), Err(RulesError::MissingKing { side: Side::Black }));
        assert_eq!(pos.validate(), Err(RulesError::MissingKing { side: Side::Black }));
    }

    #[test]
    fn two_kings_fail_validation() {
        let pos = Position::starting_position().with_piece(Square::E4, Piece::WHITE_KING);
        assert_eq!(
            pos.validate(),
            Err(RulesError::TooManyKings { side: Side::White, count: 2 })
        );
    }

    #[test]
    fn builders_return_new_values() {
        let start = Position::starting_position();
        let edited = start.without_piece(Square::E2);
        assert!(start.is_occupied(Square::E2));
        assert!(!edited.is_occupied(Square::E2));
        assert_eq!(edited.piece_count(), 31);

        let edited = edited.with_piece(Square::E4, Piece::new(Side::White, PieceKind::Pawn));
        assert_eq!(edited.side_at(Square::E4), Some(Side::White));
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Position::starting_position().pretty());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "   A  B  C  D  E  F  G  H");
        assert_eq!(lines[1], "8 |BR|BN|BB|BQ|BK|BB|BN|BR| 8");
        assert_eq!(lines[2], "7 |BP|BP|BP|BP|BP|BP|BP|BP| 7");
        assert_eq!(lines[4], "5 |  |  |  |  |  |  |  |  | 5");
        assert_eq!(lines[8], "1 |WR|WN|WB|WQ|WK|WB|WN|WR| 1");
        assert_eq!(lines[9], "   A  B  C  D  E  F  G  H");
    }
}
