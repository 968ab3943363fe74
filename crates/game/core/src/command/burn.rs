use super::{CommandEnv, CommandError, CommandResult, CommandTransition};
use crate::config::{BurnRule, resolve_burn_positions};
use crate::state::{BoardState, Position, StatDelta, TileKind, TilePosition};

/// Detonates a super tile: clears its own cell and every cell its burn rules
/// reach.
///
/// Targets are resolved against the live board when the command runs, so a
/// chained detonation sees what earlier burns left behind. Only color tiles
/// score; burned super tiles are reported so reactions can chain on them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BurnCommand {
    detonator: Position,
    rules: Vec<BurnRule>,
    cost: u32,
    outcome: Option<BurnOutcome>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct BurnOutcome {
    burned: Vec<TilePosition>,
    delta: StatDelta,
}

impl BurnCommand {
    pub fn new(detonator: Position, rules: Vec<BurnRule>, cost: u32) -> Self {
        Self {
            detonator,
            rules,
            cost,
            outcome: None,
        }
    }

    pub fn detonator(&self) -> Position {
        self.detonator
    }

    pub fn rules(&self) -> &[BurnRule] {
        &self.rules
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl CommandTransition for BurnCommand {
    fn apply(
        &mut self,
        state: &mut BoardState,
        env: &mut CommandEnv<'_>,
    ) -> Result<CommandResult, CommandError> {
        if self.rules.is_empty() {
            return Err(CommandError::NoBurnRules {
                position: self.detonator,
            });
        }

        let targets = std::iter::once(self.detonator).chain(resolve_burn_positions(
            &self.rules,
            self.detonator,
            state.grid.width(),
            state.grid.height(),
        ));

        let mut burned = Vec::new();
        let mut scored = 0;
        for position in targets {
            let Some(tile) = state.grid.get(position).filter(|tile| !tile.is_empty()) else {
                continue;
            };
            if env.rules.is_color_tile(tile) {
                scored += 1;
            }
            burned.push(TilePosition::new(position, tile.clone()));
            state.grid.set(position, TileKind::empty());
        }

        let delta = StatDelta::spend(scored, self.cost);
        state.apply_delta(delta);
        self.outcome = Some(BurnOutcome {
            burned: burned.clone(),
            delta,
        });

        Ok(CommandResult::Burned {
            detonator: self.detonator,
            tiles: burned,
            delta,
        })
    }

    fn revert(&self, state: &mut BoardState) -> Result<CommandResult, CommandError> {
        let outcome = self.outcome.as_ref().ok_or(CommandError::NotApplied)?;
        for tile in &outcome.burned {
            state.grid.set(tile.position, tile.tile.clone());
        }
        let delta = outcome.delta.inverse();
        state.apply_delta(delta);

        Ok(CommandResult::Appeared {
            tiles: outcome.burned.clone(),
            delta,
        })
    }
}
