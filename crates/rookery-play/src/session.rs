//! Line-oriented two-player session: prompts, board rendering and the turn loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{Game, Move, Outcome, PromotionPiece, RulesError, Square, SquareSet};

use crate::command::{Command, parse_command, parse_promotion};
use crate::error::PlayError;

/// ANSI sequence that clears the terminal and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const HELP: &str = "\
Enter a square such as E2 to pick a piece, then a square to move it to.
Commands:
  help   show this text
  board  print the board again
  back   pick a different piece
  quit   leave the game";

/// Presentation knobs set from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Clear the terminal before each board render.
    pub clear_screen: bool,
    /// List legal destinations after a piece is selected.
    pub show_legal_moves: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clear_screen: false,
            show_legal_moves: true,
        }
    }
}

/// Result of one prompt.
enum Prompt<T> {
    Answer(T),
    Back,
    Quit,
}

/// A game driven by text read from `input` and rendered to `output`.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session for a new game from the standard position.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self::with_game(Game::new(), input, output, config)
    }

    /// Create a session that continues `game`.
    pub fn with_game(game: Game, input: R, output: W, config: SessionConfig) -> Self {
        Self {
            game,
            input,
            output,
            config,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until the game ends or the player leaves.
    ///
    /// Returns the outcome, or `None` if input ended or `quit` was entered
    /// first.
    pub fn run(&mut self) -> Result<Option<Outcome>, PlayError> {
        info!(side = %self.game.side_to_move(), config = ?self.config, "session started");
        self.render()?;

        loop {
            if let Some(outcome) = self.game.outcome()? {
                self.announce(outcome)?;
                info!(plies = self.game.plies(), %outcome, "session finished");
                return Ok(Some(outcome));
            }

            let side = self.game.side_to_move();
            if self.game.status()?.is_check() {
                writeln!(self.output, "{side} is in check!")?;
                if self.config.show_legal_moves {
                    let movable: SquareSet = self.game.movable_pieces()?.into_keys().collect();
                    writeln!(self.output, "Pieces that can answer: {}", labels(movable))?;
                }
            }

            let Some(mv) = self.choose_move()? else {
                info!(plies = self.game.plies(), "session ended without a result");
                return Ok(None);
            };

            let kind = self
                .game
                .position()
                .piece_at(mv.from())
                .ok_or(RulesError::EmptySquare { square: mv.from() })?
                .kind();
            self.game.play(mv)?;
            writeln!(
                self.output,
                "{side} moved {kind} from {} to {}",
                label(mv.from()),
                label(mv.to())
            )?;
            self.render()?;
        }
    }

    /// Ask for a piece, a destination and, when needed, a promotion piece.
    fn choose_move(&mut self) -> Result<Option<Move>, PlayError> {
        loop {
            let from = match self.select_piece()? {
                Prompt::Answer(sq) => sq,
                Prompt::Back => continue,
                Prompt::Quit => return Ok(None),
            };
            let targets = self.game.legal_moves(from)?;

            let to = match self.select_destination(from, targets)? {
                Prompt::Answer(sq) => sq,
                Prompt::Back => continue,
                Prompt::Quit => return Ok(None),
            };

            let mv = Move::new(from, to);
            if !self.game.needs_promotion(from, to) {
                return Ok(Some(mv));
            }
            match self.select_promotion()? {
                Prompt::Answer(piece) => return Ok(Some(mv.with_promotion(piece))),
                Prompt::Back => continue,
                Prompt::Quit => return Ok(None),
            }
        }
    }

    fn select_piece(&mut self) -> Result<Prompt<Square>, PlayError> {
        let side = self.game.side_to_move();
        loop {
            writeln!(self.output, "{side}: choose a piece to move (e.g. E2)")?;
            let Some(line) = self.read_line()? else {
                return Ok(Prompt::Quit);
            };

            let sq = match parse_command(&line) {
                Ok(Command::Square(sq)) => sq,
                Ok(Command::Quit) => return Ok(Prompt::Quit),
                Ok(Command::Help) => {
                    self.help()?;
                    continue;
                }
                Ok(Command::Board) => {
                    self.render()?;
                    continue;
                }
                Ok(Command::Back) => {
                    self.reject(&line, "No piece is selected")?;
                    continue;
                }
                Err(e) if e.is_input() => {
                    self.reject(&line, &e.to_string())?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match self.game.legal_moves(sq) {
                Ok(moves) if moves.is_empty() => {
                    self.reject(&line, "Invalid piece: that piece has no legal moves")?;
                }
                Ok(_) => return Ok(Prompt::Answer(sq)),
                Err(RulesError::EmptySquare { .. }) => {
                    self.reject(&line, &format!("Invalid piece: there is no piece on {}", label(sq)))?;
                }
                Err(RulesError::NotYourPiece { owner, .. }) => {
                    self.reject(&line, &format!("Invalid piece: that piece belongs to {owner}"))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn select_destination(&mut self, from: Square, targets: SquareSet) -> Result<Prompt<Square>, PlayError> {
        let side = self.game.side_to_move();
        let kind = self
            .game
            .position()
            .piece_at(from)
            .ok_or(RulesError::EmptySquare { square: from })?
            .kind();

        writeln!(self.output, "{side} has selected {kind} on {}", label(from))?;
        if self.config.show_legal_moves {
            writeln!(self.output, "Legal moves: {}", labels(targets))?;
        }
        debug!(%from, moves = targets.len(), "piece selected");

        loop {
            writeln!(self.output, "{side}: choose a square to move to ('back' to pick another piece)")?;
            let Some(line) = self.read_line()? else {
                return Ok(Prompt::Quit);
            };

            match parse_command(&line) {
                Ok(Command::Square(to)) if targets.contains(to) => return Ok(Prompt::Answer(to)),
                Ok(Command::Square(to)) => {
                    let msg = format!("Invalid move: the {kind} on {} cannot move to {}", label(from), label(to));
                    self.reject(&line, &msg)?;
                }
                Ok(Command::Back) => return Ok(Prompt::Back),
                Ok(Command::Quit) => return Ok(Prompt::Quit),
                Ok(Command::Help) => self.help()?,
                Ok(Command::Board) => self.render()?,
                Err(e) if e.is_input() => self.reject(&line, &e.to_string())?,
                Err(e) => return Err(e),
            }
        }
    }

    fn select_promotion(&mut self) -> Result<Prompt<PromotionPiece>, PlayError> {
        let side = self.game.side_to_move();
        loop {
            writeln!(self.output, "{side}: promote to which piece? (Q, R, B or N)")?;
            let Some(line) = self.read_line()? else {
                return Ok(Prompt::Quit);
            };

            match line.to_ascii_lowercase().as_str() {
                "quit" | "exit" => return Ok(Prompt::Quit),
                "back" => return Ok(Prompt::Back),
                _ => {}
            }
            match parse_promotion(&line) {
                Ok(piece) => return Ok(Prompt::Answer(piece)),
                Err(e) if e.is_input() => self.reject(&line, &e.to_string())?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Read one trimmed line, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become replacement characters, so the line
    /// fails to parse and is rejected like any other typo.
    fn read_line(&mut self) -> Result<Option<String>, PlayError> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            debug!("input closed");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim().to_string()))
    }

    fn reject(&mut self, input: &str, reason: &str) -> Result<(), PlayError> {
        warn!(input, reason, "rejected input");
        writeln!(self.output, "{reason}")?;
        Ok(())
    }

    fn render(&mut self) -> Result<(), PlayError> {
        if self.config.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        writeln!(self.output, "{}", self.game.position().pretty())?;
        self.output.flush()?;
        Ok(())
    }

    fn help(&mut self) -> Result<(), PlayError> {
        writeln!(self.output, "{HELP}")?;
        let movable: SquareSet = self.game.movable_pieces()?.into_keys().collect();
        writeln!(self.output, "Pieces that can move: {}", labels(movable))?;
        Ok(())
    }

    fn announce(&mut self, outcome: Outcome) -> Result<(), PlayError> {
        match outcome {
            Outcome::Checkmate { winner } => writeln!(self.output, "Checkmate! {winner} is victorious!")?,
            Outcome::Stalemate => writeln!(self.output, "Stalemate! The game is drawn.")?,
        }
        self.output.flush()?;
        Ok(())
    }
}

/// Upper-case square name, matching what players type.
fn label(sq: Square) -> String {
    sq.to_string().to_ascii_uppercase()
}

fn labels(set: SquareSet) -> String {
    set.into_iter().map(label).collect::<Vec<_>>().join(" ")
}
