//! Errors surfaced by the game orchestrator.

use crate::command::CommandError;
use crate::config::ConfigError;
use crate::env::GeneratorError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GridError, Position, TileKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cell {position} is outside the board")]
    OutOfBounds { position: Position },

    /// The picked kind is neither a color nor a super tile.
    #[error("cannot pick {tile} tile at {position}")]
    UnpickableTile { position: Position, tile: TileKind },

    #[error("super tile {tile} has no actions configured")]
    MissingSuperActions { tile: TileKind },

    #[error("{command} command failed: {source}")]
    Command {
        command: &'static str,
        #[source]
        source: CommandError,
    },

    /// A supplied starting grid does not match the configured dimensions.
    #[error("grid is {width}x{height} but the configuration needs {expected_width}x{expected_height}")]
    GridMismatch {
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl EngineError {
    pub(crate) fn command(command: &'static str, source: CommandError) -> Self {
        Self::Command { command, source }
    }
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(error) => error.severity(),
            Self::OutOfBounds { .. } | Self::UnpickableTile { .. } | Self::GridMismatch { .. } => {
                ErrorSeverity::Validation
            }
            Self::MissingSuperActions { .. } => ErrorSeverity::Fatal,
            Self::Command { source, .. } => source.severity(),
            Self::Grid(error) => error.severity(),
            Self::Generator(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(error) => error.error_code(),
            Self::OutOfBounds { .. } => "ENGINE_OUT_OF_BOUNDS",
            Self::UnpickableTile { .. } => "ENGINE_UNPICKABLE_TILE",
            Self::MissingSuperActions { .. } => "ENGINE_MISSING_SUPER_ACTIONS",
            Self::Command { source, .. } => source.error_code(),
            Self::GridMismatch { .. } => "ENGINE_GRID_MISMATCH",
            Self::Grid(error) => error.error_code(),
            Self::Generator(error) => error.error_code(),
        }
    }
}
