//! Play session errors.

use rookery_core::RulesError;

/// Errors that can occur while running a play session.
///
/// The input variants are recoverable: the session prints them and asks
/// again. Rules and I/O errors end the session.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The square input did not have exactly two characters.
    #[error("Invalid square: {input:?} is not two characters")]
    SquareLength {
        /// The text that was entered.
        input: String,
    },

    /// The square input was not a letter followed by a digit.
    #[error("Invalid square: {input:?} is not a letter followed by a number")]
    SquareShape {
        /// The text that was entered.
        input: String,
    },

    /// The square input named a file or rank off the board.
    #[error("Invalid square: {input:?} is not on the board")]
    SquareOffBoard {
        /// The text that was entered.
        input: String,
    },

    /// The promotion answer was not one of Q, R, B or N.
    #[error("Invalid piece: {input:?} is not one of Q, R, B or N")]
    InvalidPromotion {
        /// The text that was entered.
        input: String,
    },

    /// A rules engine error that input cannot fix.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl PlayError {
    /// Return `true` for errors caused by bad user input.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            PlayError::SquareLength { .. }
                | PlayError::SquareShape { .. }
                | PlayError::SquareOffBoard { .. }
                | PlayError::InvalidPromotion { .. }
        )
    }
}
