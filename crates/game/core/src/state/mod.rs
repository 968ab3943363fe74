//! Authoritative board state.
//!
//! This module owns the tile grid, the score and moves counters, and the
//! read-only queries over them. Commands mutate it exclusively through the
//! engine.
mod error;
mod grid;
pub mod search;
pub mod types;

pub use error::GridError;
pub use grid::TileGrid;
pub use search::{connected_group, has_moves, orthogonal_neighbors};
pub use types::{Position, StatDelta, TileKind, TileMove, TilePosition};

/// Everything a command may read or change: the grid plus the two counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub grid: TileGrid,
    score: u32,
    moves_left: u32,
}

impl BoardState {
    pub fn new(grid: TileGrid, moves_left: u32) -> Self {
        Self {
            grid,
            score: 0,
            moves_left,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Applies a signed change to both counters, clamping at zero.
    pub fn apply_delta(&mut self, delta: StatDelta) {
        self.score = self.score.saturating_add_signed(delta.score);
        self.moves_left = self.moves_left.saturating_add_signed(delta.moves);
    }
}
