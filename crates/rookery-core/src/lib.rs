//! Chess rules: board representation, move generation, attack detection,
//! legality and game-state classification.

mod attacks;
mod chess_move;
mod error;
mod game;
mod legality;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod side;
mod square;
mod square_set;

pub use attacks::is_square_attacked;
pub use chess_move::{Move, PromotionPiece};
pub use error::RulesError;
pub use game::{Game, Outcome};
pub use legality::{
    GameStatus, MoveMap, classify, has_any_legal_move, is_in_check, legal_move_map, legal_moves,
    legal_moves_removing_check,
};
pub use make_move::{apply_move, is_promotion};
pub use movegen::generate_pseudo_legal_moves;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyPosition};
pub use side::Side;
pub use square::Square;
pub use square_set::SquareSet;
