//! Data-driven content definitions and loaders.
//!
//! This crate houses the static content of a blast game and the loaders that
//! read it from TOML, RON or JSON files:
//! - Game configuration (board size, goals, colors, super tile actions)
//! - Sprite table (tile kind to sprite name, consumed by front ends)
//! - The bundled defaults both are shipped with
//!
//! Content is handed to the engine once, at construction or restart, and
//! never changes during play.

pub mod sprites;

#[cfg(feature = "loaders")]
mod defaults;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use sprites::SpriteTable;

#[cfg(feature = "loaders")]
pub use defaults::{default_bundle, default_game_config, default_sprites};
#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentBundle, ContentFormat, LoadResult};
