//! Board queries shared by commands and the orchestrator.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use super::grid::TileGrid;
use super::types::{Position, TileKind, TilePosition};

/// Orthogonal neighbors in scan order: up, left, right, down.
pub fn orthogonal_neighbors(position: Position) -> ArrayVec<Position, 4> {
    let mut neighbors = ArrayVec::new();
    neighbors.push(position.offset(0, 1));
    neighbors.push(position.offset(-1, 0));
    neighbors.push(position.offset(1, 0));
    neighbors.push(position.offset(0, -1));
    neighbors
}

/// Collects the maximal orthogonally-connected group of cells sharing the
/// seed's kind.
///
/// Expands a frontier one ring at a time: every pass adds the unseen matching
/// neighbors of the previous ring and stops once a pass finds nothing new.
/// The seed is always first. Returns an empty group when the seed lies
/// outside the board.
pub fn connected_group(grid: &TileGrid, seed: Position) -> Vec<TilePosition> {
    let Some(target) = grid.get(seed) else {
        return Vec::new();
    };

    let mut group = vec![TilePosition::new(seed, target.clone())];
    let mut collected = HashSet::from([seed]);
    let mut frontier = vec![seed];

    loop {
        let mut found = Vec::new();
        for edge in &frontier {
            for neighbor in orthogonal_neighbors(*edge) {
                if grid.get(neighbor) != Some(target) || !collected.insert(neighbor) {
                    continue;
                }
                found.push(neighbor);
            }
        }

        if found.is_empty() {
            break;
        }

        group.extend(
            found
                .iter()
                .map(|position| TilePosition::new(*position, target.clone())),
        );
        frontier = found;
    }

    group
}

/// Returns true while a legal pick remains: a super tile anywhere, or two
/// orthogonally-adjacent occupied cells of the same kind.
pub fn has_moves<F>(grid: &TileGrid, is_super: F) -> bool
where
    F: Fn(&TileKind) -> bool,
{
    grid.positions().any(|position| {
        let Some(tile) = grid.get(position) else {
            return false;
        };
        if tile.is_empty() {
            return false;
        }
        is_super(tile)
            || orthogonal_neighbors(position)
                .into_iter()
                .any(|neighbor| grid.get(neighbor) == Some(tile))
    })
}
