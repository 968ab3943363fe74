//! Deterministic rule engine for a tile-matching "blast" puzzle.
//!
//! `blast-core` defines the board model, configuration and tile
//! classification, the reversible command family, the reaction rules that
//! chain commands into cascades, and the [`Game`] orchestrator that turns
//! each pick into one undoable batch. All board mutation flows through
//! [`Game`]; presentation layers observe it through [`GameListener`].
pub mod command;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use command::{
    AppearCommand, BurnCommand, ClearGroupCommand, Command, CommandEnv, CommandError,
    CommandResult, CommandTransition, FallCommand, RefillCommand, compute_falls,
};
pub use config::{
    ActionKind, AxisBound, BurnRule, ConfigError, ConfigField, FieldError, GameConfig, RangePoint,
    Rules, SuperAction, resolve_burn_positions,
};
pub use engine::{
    CommandBatch, DefaultReactionFactory, EngineError, Game, GameBuilder, GameEvent, GameListener,
    ListenerSet, ReactionFactory, UndoHistory,
};
pub use env::{GeneratorError, PcgRng, TileGenerator, TileRng};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    BoardState, GridError, Position, StatDelta, TileGrid, TileKind, TileMove, TilePosition,
    connected_group, has_moves,
};
