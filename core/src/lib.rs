// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voxclaim Core - Game Rules and Grid Logic
//!
//! This crate provides the core game functionality including:
//! - 3x3x3 voxel grid occupancy and adjacency
//! - Cluster connectivity analysis and scoring
//! - The turn state machine and the computer opponent heuristic
//! - An event-emitting session wrapper for UI collaborators

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod ai;
pub mod cluster;
pub mod game;
pub mod grid;
pub mod scoring;
pub mod session;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Edge length of the cube; the grid holds `GRID_SIZE^3` cells.
pub const GRID_SIZE: u8 = 3;

/// Total number of addressable cells.
pub const CELL_COUNT: u8 = GRID_SIZE * GRID_SIZE * GRID_SIZE;

/// Points awarded for a cluster at the minimum scoring size.
pub const CLUSTER_BASE_POINTS: u32 = 10;

/// Extra points per cell a cluster has beyond the minimum scoring size.
pub const CLUSTER_GROWTH_POINTS: u32 = 5;

/// Smallest cluster that scores any points.
pub const MIN_SCORING_CLUSTER: usize = 3;

/// Default pause between a player move and the computer's answer.
pub const DEFAULT_MOVE_DELAY: Duration = Duration::from_millis(500);

/// A contestant in the game (the human player or the computer opponent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player (moves first)
    Player,
    /// The computer opponent
    Computer,
}

impl Side {
    /// Returns the opposing side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Grid coordinate identifying one voxel cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (outermost axis of the index encoding)
    pub x: u8,
    /// Y coordinate
    pub y: u8,
    /// Z coordinate (innermost axis of the index encoding)
    pub z: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Check if all three axes are within the grid
    pub fn is_valid(&self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE && self.z < GRID_SIZE
    }

    /// Encode as a flat cell index, `x*9 + y*3 + z`
    pub fn index(&self) -> u8 {
        self.x * GRID_SIZE * GRID_SIZE + self.y * GRID_SIZE + self.z
    }

    /// Decode a flat cell index back into a coordinate
    pub fn from_index(index: u8) -> Self {
        Self {
            x: index / (GRID_SIZE * GRID_SIZE),
            y: (index % (GRID_SIZE * GRID_SIZE)) / GRID_SIZE,
            z: index % GRID_SIZE,
        }
    }

    /// Get adjacent coordinates in the six orthogonal directions,
    /// clipped to the grid bounds
    pub fn adjacent_coords(&self) -> Vec<Coord> {
        let mut neighbors = Vec::with_capacity(6);

        if self.x > 0 {
            neighbors.push(Coord::new(self.x - 1, self.y, self.z));
        }
        if self.x + 1 < GRID_SIZE {
            neighbors.push(Coord::new(self.x + 1, self.y, self.z));
        }
        if self.y > 0 {
            neighbors.push(Coord::new(self.x, self.y - 1, self.z));
        }
        if self.y + 1 < GRID_SIZE {
            neighbors.push(Coord::new(self.x, self.y + 1, self.z));
        }
        if self.z > 0 {
            neighbors.push(Coord::new(self.x, self.y, self.z - 1));
        }
        if self.z + 1 < GRID_SIZE {
            neighbors.push(Coord::new(self.x, self.y, self.z + 1));
        }

        neighbors
    }
}

/// Game events emitted during play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// A cell was claimed by one side
    CellClaimed {
        /// Index of the claimed cell
        cell: u8,
        /// The side that claimed it
        side: Side,
    },
    /// A side's score was recomputed after its move
    ScoreChanged {
        /// The side whose score changed
        side: Side,
        /// The new total score
        score: u32,
    },
    /// Cells currently part of a scoring cluster (for highlight effects)
    ComboCells {
        /// Deduplicated, ascending cell indices
        cells: Vec<u8>,
    },
    /// The active side changed
    TurnChanged {
        /// The side whose turn it now is
        side: Side,
    },
    /// The game has ended
    GameOver {
        /// The winning side, or `None` for a tie
        winner: Option<Side>,
        /// Final player score
        player_score: u32,
        /// Final computer score
        computer_score: u32,
    },
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The cell index is outside the grid
    #[error("Cell index out of range")]
    InvalidIndex,

    /// The cell is already claimed
    #[error("Cell already occupied")]
    CellOccupied,

    /// The operation does not match the current turn phase
    #[error("Operation not valid in the current phase")]
    InvalidTransition,

    /// The opponent strategy was asked to move on a full grid
    #[error("No free cell available")]
    NoFreeCell,
}

pub use ai::{BlockingStrategy, MoveStrategy};
pub use cluster::connected_group;
pub use game::{FinalScore, Game, MoveOutcome, Phase};
pub use grid::Grid;
pub use scoring::{score_report, ScoreReport};
pub use session::GameSession;
