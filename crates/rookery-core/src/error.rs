//! Error type for rule queries and move execution.

use crate::side::Side;
use crate::square::Square;

/// Errors raised by the rules engine when it is handed malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// Coordinates outside the 8x8 board.
    #[error("square ({row}, {col}) is off the board")]
    InvalidSquare {
        /// Row that was requested.
        row: u8,
        /// Column that was requested.
        col: u8,
    },

    /// A move or attack query named a square with no piece on it.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The unoccupied square.
        square: Square,
    },

    /// A side has no king on the board.
    #[error("{side} has no king on the board")]
    MissingKing {
        /// The side without a king.
        side: Side,
    },

    /// A side has more than one king on the board.
    #[error("{side} has {count} kings on the board")]
    TooManyKings {
        /// The offending side.
        side: Side,
        /// Number of kings found.
        count: usize,
    },

    /// The side not on move is in check, so its king could be captured.
    #[error("{side} is in check but it is not {side}'s turn")]
    WaitingSideInCheck {
        /// The side whose king is attacked.
        side: Side,
    },

    /// The destination is not among the piece's legal moves.
    #[error("{from} to {to} is not a legal move")]
    IllegalMove {
        /// Square the piece would leave.
        from: Square,
        /// Requested destination.
        to: Square,
    },

    /// A pawn reaches the last row and no promotion piece was supplied.
    #[error("pawn reaching {square} must be promoted")]
    PromotionRequired {
        /// Square the pawn lands on.
        square: Square,
    },

    /// The selected piece belongs to the side not on move.
    #[error("the piece on {square} belongs to {owner}")]
    NotYourPiece {
        /// The selected square.
        square: Square,
        /// Side that owns the piece.
        owner: Side,
    },

    /// A move was attempted after checkmate or stalemate.
    #[error("the game is over")]
    GameOver,
}
