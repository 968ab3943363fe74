//! Combined game configuration and sprite table.

use std::path::Path;

use blast_core::GameConfig;

use crate::loaders::{ConfigLoader, LoadResult, load_file};
use crate::sprites::SpriteTable;

/// Everything a front end needs to start a game: the rules and how to draw
/// each tile kind.
///
/// A single bundle file holds a `game` section and a `sprites` section. The
/// two halves can also live in separate files (see
/// [`ContentBundle::load_split`]).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentBundle {
    pub game: GameConfig,
    pub sprites: SpriteTable,
}

impl ContentBundle {
    /// Loads a bundle file and validates its game configuration.
    ///
    /// Kinds without a sprite are logged, not rejected; front ends decide how
    /// to draw them.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let bundle: Self = load_file(path)?;
        bundle
            .game
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid game config {}: {}", path.display(), e))?;
        bundle.report_missing_sprites();
        Ok(bundle)
    }

    /// Loads the game configuration and the sprite table from two files.
    pub fn load_split(game_path: &Path, sprites_path: &Path) -> LoadResult<Self> {
        let game = ConfigLoader::load(game_path)?;
        let sprites: SpriteTable = load_file(sprites_path)?;
        let bundle = Self { game, sprites };
        bundle.report_missing_sprites();
        Ok(bundle)
    }

    /// Configured kinds the sprite table does not cover.
    pub fn missing_sprites(&self) -> Vec<blast_core::TileKind> {
        self.sprites.missing_kinds(&self.game)
    }

    fn report_missing_sprites(&self) {
        let missing = self.missing_sprites();
        if !missing.is_empty() {
            tracing::warn!(?missing, "tile kinds without sprites");
        }
    }
}
