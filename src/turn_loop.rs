//! Turn-taking driver for a console game.
//!
//! Reads one "row col" line per turn, re-prompts on anything it cannot
//! play, and returns the finished game.

use crate::config::ConsoleConfig;
use crate::view::ConsoleView;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use strictly_reversi::contracts::LegalMove;
use strictly_reversi::{
    BOARD_SIZE, Board, GameFinished, GameInProgress, GameResult, GameSetup, Move, MoveError,
    parse_coordinates,
};
use tracing::{debug, info, instrument, warn};

/// Failure that stops the turn loop.
#[derive(Debug, Display, Error)]
pub enum LoopError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// Input ended before the game finished.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The engine rejected a move that passed its preconditions.
    #[display("Engine error: {}", _0)]
    Engine(MoveError),
}

impl From<std::io::Error> for LoopError {
    fn from(err: std::io::Error) -> Self {
        LoopError::Io(err)
    }
}

impl From<MoveError> for LoopError {
    fn from(err: MoveError) -> Self {
        LoopError::Engine(err)
    }
}

/// Console game driver over any line source and sink.
pub struct TurnLoop<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> TurnLoop<R, W> {
    /// Creates a driver reading moves from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays a fresh game to completion.
    #[instrument(skip(self), fields(policy = %self.config.end_policy()))]
    pub fn run(&mut self) -> Result<GameFinished, LoopError> {
        let game = GameSetup::new().start(*self.config.end_policy());
        self.run_from(game)
    }

    /// Plays an already started game to completion.
    #[instrument(skip(self, game))]
    pub fn run_from(&mut self, mut game: GameInProgress) -> Result<GameFinished, LoopError> {
        writeln!(self.output, "REVERSI BOARD GAME")?;

        loop {
            self.show_board(game.board())?;
            if let Some(passed) = game.passed() {
                writeln!(self.output, "No more moves available for {}. Turn passes.", passed)?;
            }
            let player = game.to_move();
            writeln!(self.output, "Current player = {}", player)?;
            if *self.config.show_hints() {
                let hints: Vec<String> = game.valid_moves().iter().map(|p| p.to_string()).collect();
                writeln!(self.output, "Valid moves: {}", hints.join(" "))?;
            }

            let Some((row, col)) = self.prompt()? else {
                writeln!(
                    self.output,
                    "Invalid coordinates! Please enter row and column between 0 and {}.",
                    BOARD_SIZE - 1
                )?;
                continue;
            };

            let checked = Move::at(player, row, col)
                .and_then(|action| LegalMove::check(&action, &game).map(|()| action));
            let action = match checked {
                Ok(action) => action,
                Err(err) => {
                    debug!(%err, "Rejected move");
                    writeln!(self.output, "Invalid move: {}. Please try again.", err)?;
                    continue;
                }
            };

            match game.make_move(action)? {
                GameResult::InProgress(next) => game = next,
                GameResult::Finished(finished) => {
                    self.show_summary(&finished)?;
                    return Ok(finished);
                }
            }
        }
    }

    /// Prompts for and parses one coordinate line; `None` if it does not parse.
    fn prompt(&mut self) -> Result<Option<(i32, i32)>, LoopError> {
        write!(
            self.output,
            "Enter coordinates (X Y) for your move (0-{}): ",
            BOARD_SIZE - 1
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("Input closed mid-game");
            return Err(LoopError::InputClosed);
        }
        Ok(parse_coordinates(line.trim()))
    }

    fn show_board(&mut self, board: &Board) -> Result<(), LoopError> {
        let view = ConsoleView::new(board)
            .with_glyphs(*self.config.glyphs())
            .with_coordinates(*self.config.show_coordinates());
        write!(self.output, "{}", view)?;
        Ok(())
    }

    fn show_summary(&mut self, finished: &GameFinished) -> Result<(), LoopError> {
        self.show_board(finished.board())?;
        writeln!(self.output, "{}.", finished.reason())?;
        writeln!(self.output, "Final score: {}", finished.score())?;
        writeln!(self.output, "{}", finished.outcome())?;
        writeln!(self.output, "Game over! Thank you for playing.")?;
        info!(outcome = %finished.outcome(), plies = finished.plies(), "Console game over");
        Ok(())
    }

    /// Consumes the driver, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
