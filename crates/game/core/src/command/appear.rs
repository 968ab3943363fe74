use super::{CommandEnv, CommandError, CommandResult, CommandTransition};
use crate::state::{BoardState, Position, StatDelta, TileKind, TilePosition};

/// Places one given tile, typically a freshly formed super tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppearCommand {
    tile: TilePosition,
    applied: bool,
}

impl AppearCommand {
    pub fn new(position: Position, tile: TileKind) -> Self {
        Self {
            tile: TilePosition::new(position, tile),
            applied: false,
        }
    }

    pub fn tile(&self) -> &TilePosition {
        &self.tile
    }
}

impl CommandTransition for AppearCommand {
    fn apply(
        &mut self,
        state: &mut BoardState,
        _env: &mut CommandEnv<'_>,
    ) -> Result<CommandResult, CommandError> {
        state.grid.set(self.tile.position, self.tile.tile.clone());
        self.applied = true;
        Ok(CommandResult::Appeared {
            tiles: vec![self.tile.clone()],
            delta: StatDelta::ZERO,
        })
    }

    fn revert(&self, state: &mut BoardState) -> Result<CommandResult, CommandError> {
        if !self.applied {
            return Err(CommandError::NotApplied);
        }
        state.grid.set(self.tile.position, TileKind::empty());
        Ok(CommandResult::Disappeared {
            tiles: vec![self.tile.clone()],
            delta: StatDelta::ZERO,
        })
    }
}
