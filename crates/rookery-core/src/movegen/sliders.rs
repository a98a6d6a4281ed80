//! Ray-casting for bishops, rooks and queens.

use std::iter;

use crate::piece::Piece;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

/// A `(d_row, d_col)` step.
pub(crate) type Direction = (i8, i8);

/// Up-left, up-right, down-left, down-right. "Up" is toward row 0.
pub(crate) const DIAGONALS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Down, up, right, left.
pub(crate) const ORTHOGONALS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Squares from `origin` (exclusive) stepping by `dir` until the edge of the board.
pub(crate) fn ray(origin: Square, dir: Direction) -> impl Iterator<Item = Square> {
    let (d_row, d_col) = dir;
    iter::successors(origin.offset(d_row, d_col), move |sq| sq.offset(d_row, d_col))
}

/// The first piece met walking from `origin` along `dir`, with its distance in steps.
pub(crate) fn first_piece_on_ray(
    position: &Position,
    origin: Square,
    dir: Direction,
) -> Option<(Square, Piece, u8)> {
    ray(origin, dir)
        .zip(1u8..)
        .find_map(|(sq, steps)| position.piece_at(sq).map(|piece| (sq, piece, steps)))
}

/// Destinations reachable by sliding from `origin` along each of `dirs`.
///
/// A ray stops before a `us` piece and stops on (and includes) an opposing piece.
pub(super) fn slide(position: &Position, origin: Square, us: Side, dirs: &[Direction]) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    for &dir in dirs {
        for sq in ray(origin, dir) {
            match position.piece_at(sq) {
                None => targets.insert(sq),
                Some(piece) => {
                    if !piece.is(us) {
                        targets.insert(sq);
                    }
                    break;
                }
            }
        }
    }
    targets
}
