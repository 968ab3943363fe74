//! Tile kind to sprite name mapping.

use std::collections::BTreeMap;

use blast_core::{GameConfig, TileKind};

/// Sprite name for every tile kind a front end may have to draw.
///
/// On the wire this is a flat map, e.g. `red = "block_red"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SpriteTable {
    sprites: BTreeMap<TileKind, String>,
}

impl SpriteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `sprite` to `kind`, returning the previous binding.
    pub fn insert(&mut self, kind: impl Into<TileKind>, sprite: impl Into<String>) -> Option<String> {
        self.sprites.insert(kind.into(), sprite.into())
    }

    pub fn get(&self, kind: &TileKind) -> Option<&str> {
        self.sprites.get(kind).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TileKind, &str)> {
        self.sprites
            .iter()
            .map(|(kind, sprite)| (kind, sprite.as_str()))
    }

    /// Colors and super kinds of `config` that have no sprite, colors first.
    pub fn missing_kinds(&self, config: &GameConfig) -> Vec<TileKind> {
        config
            .colors
            .iter()
            .chain(config.super_actions.keys())
            .filter(|kind| !self.sprites.contains_key(*kind))
            .cloned()
            .collect()
    }
}

impl<K, S> FromIterator<(K, S)> for SpriteTable
where
    K: Into<TileKind>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        Self {
            sprites: iter
                .into_iter()
                .map(|(kind, sprite)| (kind.into(), sprite.into()))
                .collect(),
        }
    }
}
