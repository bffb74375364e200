// SPDX-License-Identifier: MIT OR Apache-2.0

//! Computer opponent move selection

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cluster::connected_group;
use crate::grid::Grid;
use crate::{GameError, Side, CELL_COUNT, MIN_SCORING_CLUSTER};

/// Move selection backend for the computer side
pub trait MoveStrategy: Send {
    /// Pick the index of an unclaimed cell to claim.
    ///
    /// The state machine only asks for a move when at least one free
    /// cell exists; a full grid is a contract violation reported as
    /// [`GameError::NoFreeCell`].
    fn choose_move(&mut self, grid: &Grid) -> Result<u8, GameError>;
}

/// The defensive blocking heuristic.
///
/// Scans unclaimed cells in ascending index order. A cell that would
/// complete or extend a player cluster to scoring size if the player
/// claimed it is a blocking candidate; the last candidate found wins.
/// With no candidate, a uniformly random free cell is chosen from the
/// injected RNG. The heuristic never plays for its own clusters.
pub struct BlockingStrategy<R: Rng> {
    rng: R,
}

impl BlockingStrategy<StdRng> {
    /// Strategy with an OS-seeded RNG
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Strategy with a fixed seed, for reproducible games
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for BlockingStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BlockingStrategy<R> {
    /// Strategy driven by the given RNG
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> MoveStrategy for BlockingStrategy<R> {
    fn choose_move(&mut self, grid: &Grid) -> Result<u8, GameError> {
        let player_cells = grid.owned_by(Side::Player);
        let mut free = Vec::new();
        let mut block = None;

        for index in 0..CELL_COUNT {
            if grid.get(index).is_some() {
                continue;
            }
            free.push(index);

            let mut hypothetical: HashSet<u8> = player_cells.clone();
            hypothetical.insert(index);
            if connected_group(index, &hypothetical).len() >= MIN_SCORING_CLUSTER {
                // keep scanning: the last candidate encountered wins
                block = Some(index);
            }
        }

        if free.is_empty() {
            return Err(GameError::NoFreeCell);
        }

        let choice = match block {
            Some(index) => {
                tracing::debug!(cell = index, "blocking a player cluster");
                index
            }
            None => free[self.rng.gen_range(0..free.len())],
        };

        Ok(choice)
    }
}
