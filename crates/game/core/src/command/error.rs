//! Command execution errors.

use crate::env::GeneratorError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    /// A detonation had no burn rules to resolve.
    #[error("no burn rules to resolve for detonator at {position}")]
    NoBurnRules { position: Position },

    /// `revert` was called on a command whose `apply` never ran.
    #[error("command reverted before it was applied")]
    NotApplied,

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoBurnRules { .. } | Self::NotApplied => ErrorSeverity::Internal,
            Self::Generator(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoBurnRules { .. } => "COMMAND_NO_BURN_RULES",
            Self::NotApplied => "COMMAND_NOT_APPLIED",
            Self::Generator(error) => error.error_code(),
        }
    }
}
