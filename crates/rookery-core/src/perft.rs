//! Perft (performance test) for move generation correctness verification.
//!
//! Castling and en passant are not generated, so counts agree with the
//! published tables only up to the depth where those moves first appear.

use crate::chess_move::{Move, PromotionPiece};
use crate::error::RulesError;
use crate::legality::legal_move_map;
use crate::make_move::{apply_move, is_promotion};
use crate::position::Position;
use crate::side::Side;

/// Every legal move for `side`, with one entry per promotion piece.
fn expand_moves(position: &Position, side: Side) -> Result<Vec<Move>, RulesError> {
    let mut moves = Vec::new();
    for (from, targets) in legal_move_map(side, position)? {
        for to in targets {
            if is_promotion(position, from, to) {
                moves.extend(PromotionPiece::ALL.map(|piece| Move::new_promotion(from, to, piece)));
            } else {
                moves.push(Move::new(from, to));
            }
        }
    }
    Ok(moves)
}

/// Count the number of leaf nodes at the given depth with `side` to move.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(position: &Position, side: Side, depth: usize) -> Result<u64, RulesError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = expand_moves(position, side)?;

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        let child = apply_move(position, mv)?;
        nodes += perft(&child, side.opposing(), depth - 1)?;
    }
    Ok(nodes)
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted by move text.
pub fn divide(position: &Position, side: Side, depth: usize) -> Result<Vec<(String, u64)>, RulesError> {
    let mut results = Vec::new();
    for mv in expand_moves(position, side)? {
        let child = apply_move(position, mv)?;
        let count = if depth <= 1 {
            1
        } else {
            perft(&child, side.opposing(), depth - 1)?
        };
        results.push((mv.to_string(), count));
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}
