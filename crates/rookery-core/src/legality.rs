//! King safety: legal-move filtering and game-state classification.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};

use crate::attacks::is_square_attacked;
use crate::error::RulesError;
use crate::make_move::simulate_move;
use crate::movegen::piece_moves;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Legal destinations keyed by the square of the piece that moves.
pub type MoveMap = BTreeMap<Square, SquareSet>;

/// State of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, at least one legal move.
    Normal,
    /// In check, at least one legal move.
    Check,
    /// In check with no legal move. The side to move has lost.
    Checkmate,
    /// Not in check with no legal move. The game is drawn.
    Stalemate,
}

impl GameStatus {
    /// Return `true` for checkmate and stalemate; no further moves are accepted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// Return `true` if the side to move's king is attacked.
    #[inline]
    pub const fn is_check(self) -> bool {
        matches!(self, GameStatus::Check | GameStatus::Checkmate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Normal => "normal",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Return `true` if `side`'s king is attacked.
///
/// # Errors
///
/// [`RulesError::MissingKing`] if `side` has no king on the board.
pub fn is_in_check(side: Side, position: &Position) -> Result<bool, RulesError> {
    let king_sq = position.king_square(side)?;
    Ok(is_square_attacked(king_sq, side.opposing(), position))
}

/// Return the destinations of the piece on `sq` that do not leave its own king in check.
///
/// Every candidate is tried on a private copy of `position`.
///
/// # Errors
///
/// - [`RulesError::EmptySquare`] if `sq` holds no piece.
/// - [`RulesError::MissingKing`] if the mover has no king.
pub fn legal_moves(sq: Square, position: &Position) -> Result<SquareSet, RulesError> {
    let piece = position
        .piece_at(sq)
        .ok_or(RulesError::EmptySquare { square: sq })?;
    let us = piece.side();
    position.king_square(us)?;
    let pseudo = piece_moves(position, sq, piece);

    let mut legal = SquareSet::EMPTY;
    for to in pseudo {
        let probe = simulate_move(position, sq, to)?;
        if !is_in_check(us, &probe)? {
            legal.insert(to);
        }
    }
    trace!(from = %sq, pseudo = pseudo.len(), legal = legal.len(), "filtered moves");
    Ok(legal)
}

/// Return the legal moves of every `side` piece that has at least one.
pub fn legal_move_map(side: Side, position: &Position) -> Result<MoveMap, RulesError> {
    let mut map = MoveMap::new();
    for (sq, _) in position.pieces_of(side) {
        let moves = legal_moves(sq, position)?;
        if !moves.is_empty() {
            map.insert(sq, moves);
        }
    }
    Ok(map)
}

/// Return the moves that get `side` out of check, keyed by the moving piece.
///
/// Meant to be called while `side` is in check; the result then lists every
/// legal move available to `side`.
pub fn legal_moves_removing_check(side: Side, position: &Position) -> Result<MoveMap, RulesError> {
    if !is_in_check(side, position)? {
        debug!(%side, "check-removing moves requested while not in check");
    }
    legal_move_map(side, position)
}

/// Return `true` as soon as any `side` piece is found with a legal move.
pub fn has_any_legal_move(side: Side, position: &Position) -> Result<bool, RulesError> {
    for (sq, _) in position.pieces_of(side) {
        if !legal_moves(sq, position)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Classify `position` for `side` to move.
pub fn classify(side: Side, position: &Position) -> Result<GameStatus, RulesError> {
    let in_check = is_in_check(side, position)?;
    let can_move = has_any_legal_move(side, position)?;
    let status = match (in_check, can_move) {
        (false, true) => GameStatus::Normal,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Stalemate,
        (true, false) => GameStatus::Checkmate,
    };
    debug!(%side, in_check, can_move, %status, "classified position");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::generate_pseudo_legal_moves;
    use crate::piece::Piece;

    #[test]
    fn starting_position_is_normal() {
        let pos = Position::starting_position();
        assert_eq!(classify(Side::White, &pos), Ok(GameStatus::Normal));
        assert_eq!(classify(Side::Black, &pos), Ok(GameStatus::Normal));
    }

    #[test]
    fn missing_king_is_reported() {
        let pos = Position::empty().with_piece(Square::E1, Piece::WHITE_KING);
        assert_eq!(
            is_in_check(Side::Black, &pos),
            Err(RulesError::MissingKing { side: Side::Black })
        );
        let pos = Position::empty().with_piece(Square::E2, Piece::WHITE_PAWN);
        assert_eq!(
            legal_moves(Square::E2, &pos),
            Err(RulesError::MissingKing { side: Side::White })
        );
    }

    #[test]
    fn empty_square_has_no_legal_moves() {
        let pos = Position::starting_position();
        assert_eq!(
            legal_moves(Square::E4, &pos),
            Err(RulesError::EmptySquare { square: Square::E4 })
        );
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // Black rook on e8 pins the white knight on e2 to the king on e1.
        let pos = Position::empty()
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::E2, Piece::WHITE_KNIGHT)
            .with_piece(Square::E8, Piece::BLACK_ROOK)
            .with_piece(Square::H8, Piece::BLACK_KING);
        assert!(!generate_pseudo_legal_moves(Square::E2, &pos).unwrap().is_empty());
        assert!(legal_moves(Square::E2, &pos).unwrap().is_empty());
    }

    #[test]
    fn pinned_rook_may_slide_along_the_pin() {
        let pos = Position::empty()
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::E2, Piece::WHITE_ROOK)
            .with_piece(Square::E8, Piece::BLACK_ROOK)
            .with_piece(Square::A8, Piece::BLACK_KING);
        let moves = legal_moves(Square::E2, &pos).unwrap();
        let expected: SquareSet = [Square::E3, Square::E4, Square::E5, Square::E6, Square::E7, Square::E8]
            .into_iter()
            .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn check_must_be_answered() {
        // White king e1 checked by a rook on e8; the bishop on c1 can only block on e3.
        let pos = Position::empty()
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::C1, Piece::WHITE_BISHOP)
            .with_piece(Square::E8, Piece::BLACK_ROOK)
            .with_piece(Square::A8, Piece::BLACK_KING);
        assert_eq!(classify(Side::White, &pos), Ok(GameStatus::Check));

        let map = legal_moves_removing_check(Side::White, &pos).unwrap();
        assert_eq!(map.get(&Square::C1), Some(&Square::E3.set()));
        let king = map.get(&Square::E1).copied().unwrap_or_default();
        assert!(!king.contains(Square::E2), "king may not stay on the file");
        assert!(king.contains(Square::D1));
        assert!(king.contains(Square::F2));
    }

    #[test]
    fn pieces_without_moves_are_left_out() {
        let pos = Position::starting_position();
        let map = legal_move_map(Side::White, &pos).unwrap();
        assert_eq!(map.len(), 10, "8 pawns and 2 knights can move");
        assert!(!map.contains_key(&Square::E1));
        assert_eq!(map.values().map(|set| set.len()).sum::<usize>(), 20);
    }

    #[test]
    fn king_cannot_capture_defended_piece() {
        let pos = Position::empty()
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::E2, Piece::BLACK_QUEEN)
            .with_piece(Square::E3, Piece::BLACK_ROOK)
            .with_piece(Square::A8, Piece::BLACK_KING);
        assert_eq!(classify(Side::White, &pos), Ok(GameStatus::Checkmate));
    }

    #[test]
    fn status_predicates() {
        assert!(GameStatus::Checkmate.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(GameStatus::Check.is_check());
        assert!(!GameStatus::Stalemate.is_check());
        assert_eq!(GameStatus::Checkmate.to_string(), "checkmate");
    }
}
