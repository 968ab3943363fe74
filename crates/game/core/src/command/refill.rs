use super::{CommandEnv, CommandError, CommandResult, CommandTransition};
use crate::state::{BoardState, StatDelta, TileKind, TilePosition};

/// Fills every empty cell with a freshly drawn color tile.
///
/// The board is scanned column by column when the command first runs; the
/// filled cells are recorded and `revert` blanks exactly those, without
/// rescanning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefillCommand {
    filled: Option<Vec<TilePosition>>,
}

impl RefillCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells filled by the last apply.
    pub fn filled(&self) -> Option<&[TilePosition]> {
        self.filled.as_deref()
    }
}

impl CommandTransition for RefillCommand {
    fn apply(
        &mut self,
        state: &mut BoardState,
        env: &mut CommandEnv<'_>,
    ) -> Result<CommandResult, CommandError> {
        let filled = match &self.filled {
            Some(filled) => filled.clone(),
            None => {
                let mut filled = Vec::new();
                for position in state.grid.positions() {
                    if state.grid.is_empty_at(position) {
                        filled.push(TilePosition::new(position, env.generator.random_color_tile()?));
                    }
                }
                self.filled = Some(filled.clone());
                filled
            }
        };

        for tile in &filled {
            state.grid.set(tile.position, tile.tile.clone());
        }
        Ok(CommandResult::Refilled { tiles: filled })
    }

    fn revert(&self, state: &mut BoardState) -> Result<CommandResult, CommandError> {
        let filled = self.filled.as_ref().ok_or(CommandError::NotApplied)?;
        for tile in filled {
            state.grid.set(tile.position, TileKind::empty());
        }
        Ok(CommandResult::Disappeared {
            tiles: filled.clone(),
            delta: StatDelta::ZERO,
        })
    }
}
