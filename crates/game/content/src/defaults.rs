//! Content shipped with the crate.

use blast_core::GameConfig;

use crate::loaders::{ConfigLoader, ContentBundle, ContentFormat, LoadResult};
use crate::sprites::SpriteTable;

const GAME_CONFIG: &str = include_str!("../data/game-config.toml");
const SPRITES: &str = include_str!("../data/sprites.toml");

/// The stock 10x11 game: 30 moves to reach 500 points, five colors and four
/// super tiles.
pub fn default_game_config() -> LoadResult<GameConfig> {
    ConfigLoader::parse(GAME_CONFIG, ContentFormat::Toml)
}

/// Sprite names for every kind in [`default_game_config`].
pub fn default_sprites() -> LoadResult<SpriteTable> {
    ContentFormat::Toml.parse(SPRITES)
}

pub fn default_bundle() -> LoadResult<ContentBundle> {
    Ok(ContentBundle {
        game: default_game_config()?,
        sprites: default_sprites()?,
    })
}
