//! Move execution via copy-make.

use crate::chess_move::{Move, PromotionPiece};
use crate::error::RulesError;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Return `true` if moving the piece on `from` to `to` lands a pawn on row 0 or 7.
pub fn is_promotion(position: &Position, from: Square, to: Square) -> bool {
    position
        .piece_at(from)
        .is_some_and(|piece| piece.kind() == PieceKind::Pawn && (to.row() == 0 || to.row() == 7))
}

/// Apply `mv` and return the resulting position. `position` is not modified.
///
/// Any piece on the destination is captured. A pawn landing on row 0 or 7 is
/// replaced by the move's promotion piece of the same side. Legality is not
/// checked: callers take `mv.to()` from the legal destinations of `mv.from()`.
///
/// # Errors
///
/// - [`RulesError::EmptySquare`] if `mv.from()` holds no piece.
/// - [`RulesError::PromotionRequired`] if the move promotes and carries no choice.
pub fn apply_move(position: &Position, mv: Move) -> Result<Position, RulesError> {
    let from = mv.from();
    let to = mv.to();
    let piece = position
        .piece_at(from)
        .ok_or(RulesError::EmptySquare { square: from })?;

    let placed = if is_promotion(position, from, to) {
        let choice = mv
            .promotion()
            .ok_or(RulesError::PromotionRequired { square: to })?;
        piece.promoted(choice.to_piece_kind())
    } else {
        piece
    };

    let mut next = *position;
    next.remove(to);
    next.remove(from);
    next.put(to, placed);
    Ok(next)
}

/// Apply a relocation on a private copy for the king-safety probe.
///
/// The promoted kind has no bearing on whether the mover's king is attacked
/// afterwards, so a queen is always chosen.
pub(crate) fn simulate_move(position: &Position, from: Square, to: Square) -> Result<Position, RulesError> {
    apply_move(position, Move::new_promotion(from, to, PromotionPiece::Queen))
}
