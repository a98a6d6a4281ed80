//! Player input parsing.

use rookery_core::{PromotionPiece, Square};

use crate::error::PlayError;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A square name such as `E2`.
    Square(Square),
    /// `help` -- list the commands.
    Help,
    /// `board` -- print the board again.
    Board,
    /// `back` -- cancel the current selection.
    Back,
    /// `quit` -- leave the session.
    Quit,
}

/// Parse a single line of player input into a [`Command`].
///
/// Keywords are matched case-insensitively. Anything else must be a square.
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let token = line.trim();
    match token.to_ascii_lowercase().as_str() {
        "help" | "?" => Ok(Command::Help),
        "board" => Ok(Command::Board),
        "back" => Ok(Command::Back),
        "quit" | "exit" => Ok(Command::Quit),
        _ => parse_square(token).map(Command::Square),
    }
}

/// Parse a square name, reporting why it is not one.
pub fn parse_square(token: &str) -> Result<Square, PlayError> {
    let mut chars = token.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(PlayError::SquareLength {
            input: token.to_string(),
        });
    };

    if !file.is_ascii_alphabetic() || !rank.is_ascii_digit() {
        return Err(PlayError::SquareShape {
            input: token.to_string(),
        });
    }

    Square::from_algebraic(token).ok_or_else(|| PlayError::SquareOffBoard {
        input: token.to_string(),
    })
}

/// Parse the answer to the promotion prompt: `Q`, `R`, `B` or `N`.
pub fn parse_promotion(line: &str) -> Result<PromotionPiece, PlayError> {
    let token = line.trim();
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PromotionPiece::from_letter(c),
        _ => None,
    }
    .ok_or_else(|| PlayError::InvalidPromotion {
        input: token.to_string(),
    })
}
