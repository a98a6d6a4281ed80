//! Pseudo-legal move generation: piece geometry, blocking and captures,
//! without regard to the mover's king safety.

mod leapers;
mod pawns;
pub(crate) mod sliders;

use crate::error::RulesError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::leapers::leap;
use self::pawns::pawn_moves;
use self::sliders::{DIAGONALS, ORTHOGONALS, slide};

pub(crate) use self::leapers::{KING_OFFSETS, KNIGHT_OFFSETS};

/// Return every destination the piece on `sq` may reach by its movement rules.
///
/// Blocking and capture rules are applied; whether the move exposes the
/// mover's own king is not considered.
///
/// # Errors
///
/// [`RulesError::EmptySquare`] if `sq` holds no piece.
pub fn generate_pseudo_legal_moves(sq: Square, position: &Position) -> Result<SquareSet, RulesError> {
    let piece = position
        .piece_at(sq)
        .ok_or(RulesError::EmptySquare { square: sq })?;
    Ok(piece_moves(position, sq, piece))
}

/// Pseudo-legal destinations of `piece` standing on `sq`.
pub(crate) fn piece_moves(position: &Position, sq: Square, piece: Piece) -> SquareSet {
    let us = piece.side();
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(position, sq, us),
        PieceKind::Knight => leap(position, sq, us, &KNIGHT_OFFSETS),
        PieceKind::Bishop => slide(position, sq, us, &DIAGONALS),
        PieceKind::Rook => slide(position, sq, us, &ORTHOGONALS),
        PieceKind::Queen => slide(position, sq, us, &ORTHOGONALS) | slide(position, sq, us, &DIAGONALS),
        PieceKind::King => leap(position, sq, us, &KING_OFFSETS),
    }
}
