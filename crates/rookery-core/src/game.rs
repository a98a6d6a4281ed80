//! A game in progress: the current position, whose turn it is, and the
//! validated path for accepting moves.

use std::fmt;

use tracing::{debug, info};

use crate::chess_move::Move;
use crate::error::RulesError;
use crate::legality::{self, GameStatus, MoveMap};
use crate::make_move::{apply_move, is_promotion};
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side that delivered mate.
    Checkmate { winner: Side },
    /// The side to move had no legal move and was not in check.
    Stalemate,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Stalemate => write!(f, "draw by stalemate"),
        }
    }
}

/// Two-player game state.
///
/// The position is only ever replaced by the result of a validated move.
/// The game status is derived from the position on every query and never
/// stored.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    side_to_move: Side,
    plies: u32,
}

impl Game {
    /// Start a game from the standard position with White to move.
    pub fn new() -> Game {
        Game {
            position: Position::starting_position(),
            side_to_move: Side::White,
            plies: 0,
        }
    }

    /// Start a game from an arbitrary position.
    ///
    /// # Errors
    ///
    /// Fails if either side does not have exactly one king, or with
    /// [`RulesError::WaitingSideInCheck`] if the side not on move is in check.
    pub fn from_position(position: Position, side_to_move: Side) -> Result<Game, RulesError> {
        position.validate()?;
        let waiting = side_to_move.opposing();
        if legality::is_in_check(waiting, &position)? {
            return Err(RulesError::WaitingSideInCheck { side: waiting });
        }
        Ok(Game {
            position,
            side_to_move,
            plies: 0,
        })
    }

    /// The current position.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The side whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Number of half-moves played since the game was created.
    #[inline]
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Classify the current position for the side to move.
    pub fn status(&self) -> Result<GameStatus, RulesError> {
        legality::classify(self.side_to_move, &self.position)
    }

    /// Return how the game ended, or `None` while it is still being played.
    pub fn outcome(&self) -> Result<Option<Outcome>, RulesError> {
        let outcome = match self.status()? {
            GameStatus::Checkmate => Some(Outcome::Checkmate {
                winner: self.side_to_move.opposing(),
            }),
            GameStatus::Stalemate => Some(Outcome::Stalemate),
            GameStatus::Normal | GameStatus::Check => None,
        };
        Ok(outcome)
    }

    /// Legal destinations for the side to move's piece on `from`.
    ///
    /// # Errors
    ///
    /// [`RulesError::EmptySquare`] or [`RulesError::NotYourPiece`] if `from`
    /// does not hold a piece of the side to move.
    pub fn legal_moves(&self, from: Square) -> Result<SquareSet, RulesError> {
        self.check_selection(from)?;
        legality::legal_moves(from, &self.position)
    }

    /// Every piece of the side to move that has a legal move, with its destinations.
    pub fn movable_pieces(&self) -> Result<MoveMap, RulesError> {
        if legality::is_in_check(self.side_to_move, &self.position)? {
            legality::legal_moves_removing_check(self.side_to_move, &self.position)
        } else {
            legality::legal_move_map(self.side_to_move, &self.position)
        }
    }

    /// Return `true` if moving `from` to `to` lands a pawn on the last row and
    /// therefore needs a promotion choice.
    pub fn needs_promotion(&self, from: Square, to: Square) -> bool {
        is_promotion(&self.position, from, to)
    }

    /// Validate and play `mv` for the side to move, returning the status of
    /// the new position for the next side.
    ///
    /// The game is unchanged if an error is returned.
    ///
    /// # Errors
    ///
    /// - [`RulesError::GameOver`] after checkmate or stalemate.
    /// - [`RulesError::EmptySquare`] / [`RulesError::NotYourPiece`] for a bad selection.
    /// - [`RulesError::IllegalMove`] if `mv.to()` is not a legal destination.
    /// - [`RulesError::PromotionRequired`] if a promoting move has no choice.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, RulesError> {
        if self.status()?.is_terminal() {
            return Err(RulesError::GameOver);
        }

        let legal = self.legal_moves(mv.from())?;
        if !legal.contains(mv.to()) {
            return Err(RulesError::IllegalMove {
                from: mv.from(),
                to: mv.to(),
            });
        }

        let next = apply_move(&self.position, mv)?;
        let next_side = self.side_to_move.opposing();
        let status = legality::classify(next_side, &next)?;

        self.position = next;
        self.side_to_move = next_side;
        self.plies += 1;

        debug!(ply = self.plies, %mv, next = %self.side_to_move, %status, "move played");
        if status.is_terminal() {
            info!(plies = self.plies, %status, "game over");
        }
        Ok(status)
    }

    fn check_selection(&self, from: Square) -> Result<(), RulesError> {
        let owner = self
            .position
            .side_at(from)
            .ok_or(RulesError::EmptySquare { square: from })?;
        if owner != self.side_to_move {
            return Err(RulesError::NotYourPiece { square: from, owner });
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_move::PromotionPiece;
    use crate::piece::Piece;

    #[test]
    fn white_moves_first_and_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.side_to_move(), Side::White);
        game.play(Move::new(Square::E2, Square::E4)).unwrap();
        assert_eq!(game.side_to_move(), Side::Black);
        assert_eq!(game.plies(), 1);
        game.play(Move::new(Square::E7, Square::E5)).unwrap();
        assert_eq!(game.side_to_move(), Side::White);
    }

    #[test]
    fn selecting_opponent_piece_is_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.play(Move::new(Square::E7, Square::E5)),
            Err(RulesError::NotYourPiece { square: Square::E7, owner: Side::Black })
        );
        assert_eq!(
            game.legal_moves(Square::E4),
            Err(RulesError::EmptySquare { square: Square::E4 })
        );
    }

    #[test]
    fn illegal_destination_is_rejected_without_change() {
        let mut game = Game::new();
        let before = *game.position();
        assert_eq!(
            game.play(Move::new(Square::E2, Square::E5)),
            Err(RulesError::IllegalMove { from: Square::E2, to: Square::E5 })
        );
        assert_eq!(*game.position(), before);
        assert_eq!(game.side_to_move(), Side::White);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = Game::new();
        game.play(Move::new(Square::F2, Square::F3)).unwrap();
        game.play(Move::new(Square::E7, Square::E5)).unwrap();
        game.play(Move::new(Square::G2, Square::G4)).unwrap();
        let status = game.play(Move::new(Square::D8, Square::H4)).unwrap();

        assert_eq!(status, GameStatus::Checkmate);
        assert_eq!(game.outcome(), Ok(Some(Outcome::Checkmate { winner: Side::Black })));
        assert_eq!(game.play(Move::new(Square::E1, Square::F2)), Err(RulesError::GameOver));
    }

    #[test]
    fn promotion_needs_a_choice() {
        let position = Position::empty()
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::H6, Piece::BLACK_KING)
            .with_piece(Square::A7, Piece::WHITE_PAWN);
        let mut game = Game::from_position(position, Side::White).unwrap();

        assert!(game.needs_promotion(Square::A7, Square::A8));
        assert_eq!(
            game.play(Move::new(Square::A7, Square::A8)),
            Err(RulesError::PromotionRequired { square: Square::A8 })
        );
        assert_eq!(game.side_to_move(), Side::White);

        game.play(Move::new_promotion(Square::A7, Square::A8, PromotionPiece::Rook))
            .unwrap();
        assert_eq!(game.position().piece_at(Square::A8), Some(Piece::WHITE_ROOK));
    }

    #[test]
    fn from_position_requires_kings() {
        let position = Position::empty().with_piece(Square::E1, Piece::WHITE_KING);
        assert_eq!(
            Game::from_position(position, Side::White).unwrap_err(),
            RulesError::MissingKing { side: Side::Black }
        );
    }

    #[test]
    fn stalemate_ends_the_game() {
        let position = Position::empty()
            .with_piece(Square::A8, Piece::BLACK_KING)
            .with_piece(Square::B5, Piece::WHITE_QUEEN)
            .with_piece(Square::C1, Piece::WHITE_KING);
        let mut game = Game::from_position(position, Side::White).unwrap();

        let status = game.play(Move::new(Square::B5, Square::B6)).unwrap();
        assert_eq!(status, GameStatus::Stalemate);
        assert_eq!(game.outcome(), Ok(Some(Outcome::Stalemate)));

        let before = *game.position();
        assert_eq!(game.play(Move::new(Square::A8, Square::A7)), Err(RulesError::GameOver));
        assert_eq!(*game.position(), before);
        assert_eq!(game.side_to_move(), Side::Black);
        assert_eq!(game.plies(), 1);
    }

    #[test]
    fn from_position_rejects_a_capturable_king() {
        // White to move with the black king already attacked along the a-file.
        let position = Position::empty()
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::A1, Piece::WHITE_ROOK)
            .with_piece(Square::A8, Piece::BLACK_KING);
        assert_eq!(
            Game::from_position(position, Side::White).unwrap_err(),
            RulesError::WaitingSideInCheck { side: Side::Black }
        );

        // The same position is fine with Black to move: it just has to answer the check.
        let game = Game::from_position(position, Side::Black).unwrap();
        assert_eq!(game.status(), Ok(GameStatus::Check));
    }

    #[test]
    fn failed_play_leaves_the_game_unchanged() {
        let position = Position::empty()
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::H6, Piece::BLACK_KING)
            .with_piece(Square::A7, Piece::WHITE_PAWN);
        let mut game = Game::from_position(position, Side::White).unwrap();

        assert!(game.play(Move::new(Square::A7, Square::A8)).is_err());
        assert_eq!(*game.position(), position);
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.plies(), 0);
    }

    #[test]
    fn movable_pieces_in_check_lists_only_answers() {
        let position = Position::empty()
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::A2, Piece::WHITE_PAWN)
            .with_piece(Square::E8, Piece::BLACK_ROOK)
            .with_piece(Square::A8, Piece::BLACK_KING);
        let game = Game::from_position(position, Side::White).unwrap();
        let movable = game.movable_pieces().unwrap();
        assert_eq!(movable.keys().copied().collect::<Vec<_>>(), vec![Square::E1]);
    }
}
