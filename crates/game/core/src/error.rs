//! Error classification shared by every blast-core error type.
//!
//! Each concern owns its error enum next to the code that raises it
//! (`ConfigError` in `config`, `CommandError` in `command`, and so on). All
//! of them implement [`GameError`] so front ends can decide how loudly to
//! report a failure without matching on every variant.

/// How a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request was invalid; the game is unchanged and can go on.
    ///
    /// Examples: malformed configuration, picking an empty cell.
    Validation,

    /// The engine was driven into a state it should never reach.
    ///
    /// Examples: resolving a super action that carries no burn rules.
    Internal,

    /// The configuration cannot drive a game at all.
    ///
    /// Examples: drawing from an empty tile pool.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// True for anything other than rejected input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Uniform classification for blast-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, e.g. `ENGINE_OUT_OF_BOUNDS`.
    ///
    /// Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
