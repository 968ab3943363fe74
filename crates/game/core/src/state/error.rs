//! Board state errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while assembling a [`TileGrid`](super::TileGrid).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// The tile list does not cover the grid exactly.
    #[error("a {width}x{height} grid needs {expected} tiles, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SizeMismatch { .. } => "GRID_SIZE_MISMATCH",
        }
    }
}
