// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grid occupancy and adjacency

use serde::{Deserialize, Serialize};

use crate::{Coord, GameError, Side, CELL_COUNT};

/// The 3x3x3 voxel grid with claimed and unclaimed cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    /// Owner of each cell, indexed by the flat cell index
    cells: Vec<Option<Side>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a new grid with every cell unclaimed
    pub fn new() -> Self {
        Self {
            cells: vec![None; CELL_COUNT as usize],
        }
    }

    /// Get the owner of the cell at the given index
    pub fn get(&self, index: u8) -> Option<Side> {
        if index >= CELL_COUNT {
            return None;
        }
        self.cells[index as usize]
    }

    /// Claim a cell for one side.
    ///
    /// Ownership is write-once: a claimed cell keeps its owner for the
    /// lifetime of the playthrough.
    pub fn claim(&mut self, index: u8, side: Side) -> Result<(), GameError> {
        if index >= CELL_COUNT {
            return Err(GameError::InvalidIndex);
        }

        let slot = &mut self.cells[index as usize];
        if slot.is_some() {
            return Err(GameError::CellOccupied);
        }

        *slot = Some(side);
        Ok(())
    }

    /// Indices adjacent to `index` in the six orthogonal directions
    pub fn neighbors(&self, index: u8) -> Vec<u8> {
        Coord::from_index(index)
            .adjacent_coords()
            .iter()
            .map(Coord::index)
            .collect()
    }

    /// True when all cells are claimed
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Indices of all currently unclaimed cells, in ascending order
    pub fn free_cells(&self) -> Vec<u8> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i as u8)
            .collect()
    }

    /// Indices of all cells owned by the given side
    pub fn owned_by(&self, side: Side) -> std::collections::HashSet<u8> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Some(side))
            .map(|(i, _)| i as u8)
            .collect()
    }

    /// Count cells claimed by either side
    pub fn claimed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
