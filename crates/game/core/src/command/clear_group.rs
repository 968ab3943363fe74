use super::{CommandEnv, CommandError, CommandResult, CommandTransition, DEFAULT_MOVE_COST};
use crate::state::{BoardState, Position, StatDelta, TileGrid, TileKind, TilePosition, connected_group};

/// Clears the connected same-kind group around a picked cell.
///
/// The group is collected when the command is built, against the board the
/// player saw, and reused verbatim by `revert`. Groups of one tile are idle:
/// applying them changes nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClearGroupCommand {
    origin: Position,
    cost: u32,
    group: Vec<TilePosition>,
    applied: bool,
}

impl ClearGroupCommand {
    pub fn new(grid: &TileGrid, origin: Position) -> Self {
        Self::with_cost(grid, origin, DEFAULT_MOVE_COST)
    }

    pub fn with_cost(grid: &TileGrid, origin: Position, cost: u32) -> Self {
        Self {
            origin,
            cost,
            group: connected_group(grid, origin),
            applied: false,
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn group(&self) -> &[TilePosition] {
        &self.group
    }

    /// True when applying would change nothing.
    pub fn is_idle(&self) -> bool {
        self.group.len() <= 1
    }

    fn delta(&self) -> StatDelta {
        if self.is_idle() {
            StatDelta::ZERO
        } else {
            StatDelta::spend(self.group.len(), self.cost)
        }
    }
}

impl CommandTransition for ClearGroupCommand {
    fn apply(
        &mut self,
        state: &mut BoardState,
        _env: &mut CommandEnv<'_>,
    ) -> Result<CommandResult, CommandError> {
        self.applied = true;
        if self.is_idle() {
            return Ok(CommandResult::GroupCleared {
                origin: self.origin,
                tiles: Vec::new(),
                delta: StatDelta::ZERO,
            });
        }

        for cleared in &self.group {
            state.grid.set(cleared.position, TileKind::empty());
        }
        let delta = self.delta();
        state.apply_delta(delta);

        Ok(CommandResult::GroupCleared {
            origin: self.origin,
            tiles: self.group.clone(),
            delta,
        })
    }

    fn revert(&self, state: &mut BoardState) -> Result<CommandResult, CommandError> {
        if !self.applied {
            return Err(CommandError::NotApplied);
        }
        if self.is_idle() {
            return Ok(CommandResult::Appeared {
                tiles: Vec::new(),
                delta: StatDelta::ZERO,
            });
        }

        for cleared in &self.group {
            state.grid.set(cleared.position, cleared.tile.clone());
        }
        let delta = self.delta().inverse();
        state.apply_delta(delta);

        Ok(CommandResult::Appeared {
            tiles: self.group.clone(),
            delta,
        })
    }
}
