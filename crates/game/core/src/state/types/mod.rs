pub mod common;

pub use common::{Position, StatDelta, TileKind, TileMove, TilePosition};
