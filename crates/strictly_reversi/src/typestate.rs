//! Phase-specific typestate structs for Reversi.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! A `GameFinished` ALWAYS has an outcome, and a `GameInProgress`
//! always has a player who can move.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::invariants::{InvariantSet, ReversiInvariants};
use super::phases::{EndPolicy, FinishReason, Outcome};
use super::rules::Score;
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
    first: Player,
}

impl GameSetup {
    /// Creates a new game on the starting board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            first: Player::X,
        }
    }

    /// Sets up a game from an arbitrary position.
    ///
    /// The center cells must be occupied and `first` must have a legal move.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, first: Player) -> Result<Self, MoveError> {
        let setup = Self { board, first };
        let probe = setup.clone().start(EndPolicy::default());
        ReversiInvariants::check_all(&probe).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Invalid starting position: {}", descriptions))
        })?;
        Ok(setup)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self, policy: EndPolicy) -> GameInProgress {
        let occupied = self.board.cells().iter().flatten().filter(|c| !c.is_empty()).count();
        GameInProgress {
            board: self.board,
            to_move: self.first,
            plies: occupied.saturating_sub(4),
            policy,
            passed: None,
        }
    }

    /// Starts the game under the default [`EndPolicy`].
    pub fn start_default(self) -> GameInProgress {
        self.start(EndPolicy::default())
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) plies: usize,
    pub(crate) policy: EndPolicy,
    pub(crate) passed: Option<Player>,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (LegalMove)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(to_move = ?self.to_move, policy = %self.policy))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        MoveContract::pre(&self, &action)?;

        let mut game = self;
        game.board.play(action)?;
        game.plies += 1;
        game.passed = None;

        let mover = action.player;
        let opponent = mover.opponent();

        if game.board.is_full() {
            return Ok(GameResult::Finished(game.finish(FinishReason::BoardFull)));
        }

        if game.board.has_legal_move(opponent) {
            game.to_move = opponent;
        } else {
            match game.policy {
                EndPolicy::StopOnFirstBlocked => {
                    return Ok(GameResult::Finished(game.finish(FinishReason::Blocked(opponent))));
                }
                EndPolicy::PassTurn if game.board.has_legal_move(mover) => {
                    info!(passed = %opponent, "No legal move, turn passes");
                    game.passed = Some(opponent);
                    game.to_move = mover;
                }
                EndPolicy::PassTurn => {
                    return Ok(GameResult::Finished(game.finish(FinishReason::BothBlocked)));
                }
            }
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, reason: FinishReason) -> GameFinished {
        let score = Score::of(&self.board);
        let outcome = Outcome::from_score(&score);
        info!(%reason, %score, %outcome, "Game finished");
        GameFinished {
            board: self.board,
            plies: self.plies,
            score,
            outcome,
            reason,
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of moves played so far.
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Returns the end-of-game policy in force.
    pub fn policy(&self) -> EndPolicy {
        self.policy
    }

    /// Returns the player who had to pass before this turn, if any.
    pub fn passed(&self) -> Option<Player> {
        self.passed
    }

    /// Returns the current disc totals.
    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// Returns legal positions for the player to move.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.to_move)
    }

    /// Replays moves from the starting board under the default policy.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start_default();

        for action in moves {
            debug!(%action, "Replaying move");
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    plies: usize,
    score: Score,
    outcome: Outcome,
    reason: FinishReason,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the final disc totals.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns why the game ended.
    pub fn reason(&self) -> FinishReason {
        self.reason
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of moves played.
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
