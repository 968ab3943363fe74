//! Follow-up commands derived from command results.
//!
//! The engine consults a [`ReactionFactory`] after every command it runs and
//! splices the returned commands in right after it, so cascades resolve
//! within a single player action.

use crate::command::{
    AppearCommand, BurnCommand, Command, CommandEnv, CommandError, CommandResult,
};
use crate::config::{ActionKind, SuperAction};
use crate::state::Position;

pub trait ReactionFactory {
    /// Builds the command that fires a super tile's `actions` at `position`.
    fn super_command(
        &self,
        actions: &[SuperAction],
        position: Position,
        cost: u32,
    ) -> Result<Command, CommandError>;

    /// Commands to run immediately after the command that produced
    /// `result`, in order.
    fn reactions(
        &self,
        result: &CommandResult,
        env: &mut CommandEnv<'_>,
    ) -> Result<Vec<Command>, CommandError>;
}

/// Standard cascade rules.
///
/// - Clearing a group at least `count_to_super` tiles large spawns a random
///   super tile at the picked cell.
/// - Every super tile caught in a detonation, other than the detonator,
///   detonates in turn at no move cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultReactionFactory;

impl ReactionFactory for DefaultReactionFactory {
    fn super_command(
        &self,
        actions: &[SuperAction],
        position: Position,
        cost: u32,
    ) -> Result<Command, CommandError> {
        let mut burns = Vec::new();
        for action in actions {
            match action.id {
                ActionKind::Burn => burns.extend_from_slice(&action.burns),
            }
        }
        if burns.is_empty() {
            return Err(CommandError::NoBurnRules { position });
        }
        Ok(BurnCommand::new(position, burns, cost).into())
    }

    fn reactions(
        &self,
        result: &CommandResult,
        env: &mut CommandEnv<'_>,
    ) -> Result<Vec<Command>, CommandError> {
        match result {
            CommandResult::GroupCleared { origin, tiles, .. } => {
                let spawns = tiles.len() > 1
                    && u32::try_from(tiles.len()).unwrap_or(u32::MAX) >= env.rules.count_to_super();
                if !spawns {
                    return Ok(Vec::new());
                }
                let tile = env.generator.random_super_tile()?;
                Ok(vec![AppearCommand::new(*origin, tile).into()])
            }
            CommandResult::Burned {
                detonator, tiles, ..
            } => {
                let mut chained = Vec::new();
                for burned in tiles.iter().filter(|burned| burned.position != *detonator) {
                    let Some(actions) = env.rules.actions_for(&burned.tile) else {
                        continue;
                    };
                    if actions.is_empty() {
                        continue;
                    }
                    chained.push(self.super_command(actions, burned.position, 0)?);
                }
                Ok(chained)
            }
            CommandResult::Moved { .. }
            | CommandResult::Refilled { .. }
            | CommandResult::Appeared { .. }
            | CommandResult::Disappeared { .. } => Ok(Vec::new()),
        }
    }
}
