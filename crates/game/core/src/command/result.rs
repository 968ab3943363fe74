use crate::state::{Position, StatDelta, TileMove, TilePosition};

/// What a command did to the board.
///
/// Every variant doubles as an event payload: listeners receive results
/// verbatim, in execution order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum CommandResult {
    /// A connected group was cleared. Empty when the pick was idle.
    GroupCleared {
        origin: Position,
        tiles: Vec<TilePosition>,
        delta: StatDelta,
    },
    /// Tiles destroyed by a detonation, detonator first when it was occupied.
    Burned {
        detonator: Position,
        tiles: Vec<TilePosition>,
        delta: StatDelta,
    },
    /// Tiles relocated one step each.
    Moved { moves: Vec<TileMove> },
    /// Empty cells filled with fresh color tiles.
    Refilled { tiles: Vec<TilePosition> },
    /// Tiles placed on the board (a spawned super tile, or an undone clear).
    Appeared {
        tiles: Vec<TilePosition>,
        delta: StatDelta,
    },
    /// Tiles removed from the board by an undo.
    Disappeared {
        tiles: Vec<TilePosition>,
        delta: StatDelta,
    },
}

impl CommandResult {
    /// Change to score and moves carried by this result.
    pub fn delta(&self) -> StatDelta {
        match self {
            Self::GroupCleared { delta, .. }
            | Self::Burned { delta, .. }
            | Self::Appeared { delta, .. }
            | Self::Disappeared { delta, .. } => *delta,
            Self::Moved { .. } | Self::Refilled { .. } => StatDelta::ZERO,
        }
    }

    /// Tiles reported by this result; empty for moves.
    pub fn tiles(&self) -> &[TilePosition] {
        match self {
            Self::GroupCleared { tiles, .. }
            | Self::Burned { tiles, .. }
            | Self::Refilled { tiles }
            | Self::Appeared { tiles, .. }
            | Self::Disappeared { tiles, .. } => tiles,
            Self::Moved { .. } => &[],
        }
    }

    /// True when the command changed nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Moved { moves } => moves.is_empty(),
            other => other.tiles().is_empty() && other.delta().is_zero(),
        }
    }
}
