//! Configuration validation errors.

use crate::error::{ErrorSeverity, GameError};

/// Configuration fields, in the order they are validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ConfigField {
    Width,
    Height,
    Moves,
    WinScore,
    CountToSuper,
    Colors,
    SuperActions,
}

/// A single rejected configuration field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("invalid value for {field}: {value}")]
pub struct FieldError {
    pub field: ConfigField,
    /// The offending value, rendered for display.
    pub value: String,
}

impl FieldError {
    pub fn new(field: ConfigField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Raised when a configuration cannot drive a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// Every violated field, in validation order.
    #[error("{}", join_errors(.errors))]
    Invalid { errors: Vec<FieldError> },
}

impl ConfigError {
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Invalid { errors } => errors,
        }
    }

    /// Fields that failed validation, in order.
    pub fn fields(&self) -> impl Iterator<Item = ConfigField> + '_ {
        self.errors().iter().map(|error| error.field)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "CONFIG_INVALID",
        }
    }
}
