//! Pawn move generation.

use crate::position::Position;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Pseudo-legal pawn destinations for a `us` pawn on `origin`.
///
/// One step forward onto an empty square, two steps from the start row when
/// both squares are empty, and one diagonal step forward onto an opposing
/// piece. No en passant.
pub(super) fn pawn_moves(position: &Position, origin: Square, us: Side) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let dir = us.pawn_direction();

    // Pushes
    if let Some(one) = origin.offset(dir, 0).filter(|&sq| !position.is_occupied(sq)) {
        targets.insert(one);
        if origin.row() == us.pawn_start_row()
            && let Some(two) = one.offset(dir, 0).filter(|&sq| !position.is_occupied(sq))
        {
            targets.insert(two);
        }
    }

    // Captures
    for d_col in [-1, 1] {
        if let Some(dst) = origin.offset(dir, d_col)
            && position.side_at(dst) == Some(us.opposing())
        {
            targets.insert(dst);
        }
    }

    targets
}
