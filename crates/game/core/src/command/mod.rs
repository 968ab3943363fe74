//! Reversible board mutations.
//!
//! Each command captures everything it needs to undo itself, either when it
//! is built or when it first runs, and never re-derives that data from a
//! board that may have changed since. [`Command`] is the closed set the
//! engine schedules; the concrete types can also be driven directly.
mod appear;
mod burn;
mod clear_group;
mod error;
mod fall;
mod refill;
mod result;

pub use appear::AppearCommand;
pub use burn::BurnCommand;
pub use clear_group::ClearGroupCommand;
pub use error::CommandError;
pub use fall::{FallCommand, compute_falls};
pub use refill::RefillCommand;
pub use result::CommandResult;

use crate::config::Rules;
use crate::env::TileGenerator;
use crate::state::BoardState;

/// Move cost of a player-initiated command.
pub const DEFAULT_MOVE_COST: u32 = 1;

/// Collaborators a command may consult while applying.
pub struct CommandEnv<'a> {
    pub rules: &'a Rules,
    pub generator: &'a mut TileGenerator,
}

impl<'a> CommandEnv<'a> {
    pub fn new(rules: &'a Rules, generator: &'a mut TileGenerator) -> Self {
        Self { rules, generator }
    }
}

/// A mutation of [`BoardState`] together with its exact inverse.
///
/// `apply` runs once per command. `revert` undoes precisely what `apply`
/// did and fails with [`CommandError::NotApplied`] when `apply` never ran.
pub trait CommandTransition {
    fn apply(
        &mut self,
        state: &mut BoardState,
        env: &mut CommandEnv<'_>,
    ) -> Result<CommandResult, CommandError>;

    fn revert(&self, state: &mut BoardState) -> Result<CommandResult, CommandError>;
}

/// Every command the engine can schedule.
#[derive(Clone, Debug, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    ClearGroup(ClearGroupCommand),
    Burn(BurnCommand),
    Fall(FallCommand),
    Refill(RefillCommand),
    Appear(AppearCommand),
}

impl Command {
    /// Stable name used in logs and errors.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl CommandTransition for Command {
    fn apply(
        &mut self,
        state: &mut BoardState,
        env: &mut CommandEnv<'_>,
    ) -> Result<CommandResult, CommandError> {
        match self {
            Self::ClearGroup(command) => command.apply(state, env),
            Self::Burn(command) => command.apply(state, env),
            Self::Fall(command) => command.apply(state, env),
            Self::Refill(command) => command.apply(state, env),
            Self::Appear(command) => command.apply(state, env),
        }
    }

    fn revert(&self, state: &mut BoardState) -> Result<CommandResult, CommandError> {
        match self {
            Self::ClearGroup(command) => command.revert(state),
            Self::Burn(command) => command.revert(state),
            Self::Fall(command) => command.revert(state),
            Self::Refill(command) => command.revert(state),
            Self::Appear(command) => command.revert(state),
        }
    }
}

macro_rules! impl_from_command {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Command {
                fn from(command: $ty) -> Self {
                    Self::$variant(command)
                }
            }
        )*
    };
}

impl_from_command! {
    ClearGroup => ClearGroupCommand,
    Burn => BurnCommand,
    Fall => FallCommand,
    Refill => RefillCommand,
    Appear => AppearCommand,
}
