// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn state machine

use serde::{Deserialize, Serialize};

use crate::ai::MoveStrategy;
use crate::grid::Grid;
use crate::scoring::score_report;
use crate::{GameError, Side};

/// The active phase of the turn state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game running yet (initial state, and the state after a reset)
    AwaitingStart,
    /// Waiting for the player to claim a cell
    PlayerTurn,
    /// The computer's reply is pending
    ComputerTurn,
    /// All cells claimed; terminal until the next start
    GameOver,
}

/// Final standing of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    /// The side with the strictly higher score, or `None` for a tie
    pub winner: Option<Side>,
    /// Player total
    pub player_score: u32,
    /// Computer total
    pub computer_score: u32,
}

/// Everything observable about one applied move.
///
/// A move is atomic: the claim, the rescore and the phase transition
/// all land in the same outcome, never piecemeal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The claimed cell
    pub cell: u8,
    /// Who claimed it
    pub side: Side,
    /// The moving side's recomputed score
    pub score: u32,
    /// Cells currently in a scoring cluster for the moving side
    pub combo_cells: Vec<u8>,
    /// Phase after the move
    pub phase: Phase,
    /// Present exactly when this move ended the game
    pub final_score: Option<FinalScore>,
}

/// One playthrough's state: grid, scores and turn phase.
///
/// A plain owned-and-mutated struct so multiple games can coexist and
/// tests can drive one in isolation. Rejected operations leave it
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    grid: Grid,
    player_score: u32,
    computer_score: u32,
    phase: Phase,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game in `AwaitingStart`
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            player_score: 0,
            computer_score: 0,
            phase: Phase::AwaitingStart,
        }
    }

    /// Begin a playthrough.
    ///
    /// Only legal from `AwaitingStart`; a finished or running game must
    /// be `reset` first. Clears the grid and both scores and hands the
    /// first turn to the player.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingStart {
            return Err(GameError::InvalidTransition);
        }

        self.grid = Grid::new();
        self.player_score = 0;
        self.computer_score = 0;
        self.phase = Phase::PlayerTurn;
        tracing::debug!("game started");
        Ok(())
    }

    /// Return to `AwaitingStart` from any phase, clearing all state
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.player_score = 0;
        self.computer_score = 0;
        self.phase = Phase::AwaitingStart;
        tracing::debug!("game reset");
    }

    /// Apply the player's move.
    ///
    /// Rejected with `InvalidTransition` outside `PlayerTurn`, and with
    /// the claim errors from [`Grid::claim`]; rejection changes nothing.
    pub fn submit_player_move(&mut self, index: u8) -> Result<MoveOutcome, GameError> {
        if self.phase != Phase::PlayerTurn {
            return Err(GameError::InvalidTransition);
        }
        self.apply_move(index, Side::Player)
    }

    /// Ask the strategy for the computer's move and apply it.
    ///
    /// Only legal in `ComputerTurn`.
    pub fn play_computer_move(
        &mut self,
        strategy: &mut dyn MoveStrategy,
    ) -> Result<MoveOutcome, GameError> {
        if self.phase != Phase::ComputerTurn {
            return Err(GameError::InvalidTransition);
        }
        let index = strategy.choose_move(&self.grid)?;
        self.apply_move(index, Side::Computer)
    }

    fn apply_move(&mut self, index: u8, side: Side) -> Result<MoveOutcome, GameError> {
        self.grid.claim(index, side)?;

        // recomputed from scratch after every move, not maintained
        let report = score_report(&self.grid.owned_by(side));
        match side {
            Side::Player => self.player_score = report.total,
            Side::Computer => self.computer_score = report.total,
        }

        self.phase = if self.grid.is_full() {
            Phase::GameOver
        } else {
            match side {
                Side::Player => Phase::ComputerTurn,
                Side::Computer => Phase::PlayerTurn,
            }
        };

        let final_score = self.final_score();
        if let Some(standing) = &final_score {
            tracing::info!(winner = ?standing.winner, "game over");
        }

        Ok(MoveOutcome {
            cell: index,
            side,
            score: report.total,
            combo_cells: report.combo_cells,
            phase: self.phase,
            final_score,
        })
    }

    /// The final standing, once the game has ended
    pub fn final_score(&self) -> Option<FinalScore> {
        if self.phase != Phase::GameOver {
            return None;
        }

        let winner = if self.player_score > self.computer_score {
            Some(Side::Player)
        } else if self.computer_score > self.player_score {
            Some(Side::Computer)
        } else {
            None
        };

        Some(FinalScore {
            winner,
            player_score: self.player_score,
            computer_score: self.computer_score,
        })
    }

    /// Current turn phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The grid as it currently stands
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current score for one side
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Computer => self.computer_score,
        }
    }
}
