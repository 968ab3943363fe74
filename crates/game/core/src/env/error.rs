//! Tile generation errors.

use crate::error::{ErrorSeverity, GameError};

/// Raised when a draw is requested from an empty pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneratorError {
    #[error("no color tiles configured")]
    EmptyColorPool,

    #[error("no super tiles configured")]
    EmptySuperPool,
}

impl GameError for GeneratorError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyColorPool => "GENERATOR_EMPTY_COLOR_POOL",
            Self::EmptySuperPool => "GENERATOR_EMPTY_SUPER_POOL",
        }
    }
}
