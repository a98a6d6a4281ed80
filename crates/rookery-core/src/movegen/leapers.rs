//! Knight and king move generation: fixed offsets, no rays.

use crate::position::Position;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::sliders::Direction;

pub(crate) const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

pub(crate) const KING_OFFSETS: [Direction; 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// On-board destinations at `offsets` from `origin` not held by a `us` piece.
pub(super) fn leap(position: &Position, origin: Square, us: Side, offsets: &[Direction]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| origin.offset(d_row, d_col))
        .filter(|&dst| position.side_at(dst) != Some(us))
        .collect()
}
