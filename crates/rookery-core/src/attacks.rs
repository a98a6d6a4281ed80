//! Attack detection by reverse lookup.
//!
//! Instead of generating every opposing move, attack patterns are cast
//! outward from the target square and the first piece met on each line is
//! inspected.

use crate::movegen::KNIGHT_OFFSETS;
use crate::movegen::sliders::{DIAGONALS, Direction, ORTHOGONALS, first_piece_on_ray};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

/// Return `true` if any piece of `by` could move to `sq` by capture.
///
/// `sq` may be empty or occupied; the result is the same as asking whether a
/// piece of the other side standing on `sq` could be taken.
pub fn is_square_attacked(sq: Square, by: Side, position: &Position) -> bool {
    // Rook, queen and adjacent king along ranks and files.
    for dir in ORTHOGONALS {
        if let Some((_, piece, steps)) = first_piece_on_ray(position, sq, dir)
            && piece.is(by)
        {
            match piece.kind() {
                PieceKind::Rook | PieceKind::Queen => return true,
                PieceKind::King if steps == 1 => return true,
                _ => {}
            }
        }
    }

    // Bishop, queen, adjacent king and capturing pawn along diagonals.
    for dir in DIAGONALS {
        if let Some((_, piece, steps)) = first_piece_on_ray(position, sq, dir)
            && piece.is(by)
        {
            match piece.kind() {
                PieceKind::Bishop | PieceKind::Queen => return true,
                PieceKind::King if steps == 1 => return true,
                PieceKind::Pawn if steps == 1 && pawn_captures_back_along(by, dir) => return true,
                _ => {}
            }
        }
    }

    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| sq.offset(d_row, d_col))
        .any(|origin| position.piece_at(origin).is_some_and(|p| p.is_a(by, PieceKind::Knight)))
}

/// A `side` pawn found one diagonal step from the target in direction `dir`
/// captures onto the target only if it advances against `dir`.
#[inline]
fn pawn_captures_back_along(side: Side, dir: Direction) -> bool {
    dir.0 == -side.pawn_direction()
}
