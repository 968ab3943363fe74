//! Game configuration loader.

use std::path::Path;

use blast_core::GameConfig;

use crate::loaders::{ContentFormat, LoadResult, load_file};

/// Loader for game configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates a [`GameConfig`] from a `.toml`, `.ron` or
    /// `.json` file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let config: GameConfig = load_file(path)?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid game config {}: {}", path.display(), e))?;

        tracing::debug!(
            path = %path.display(),
            width = config.width,
            height = config.height,
            colors = config.colors.len(),
            supers = config.super_actions.len(),
            "loaded game config"
        );
        Ok(config)
    }

    /// Parses and validates a [`GameConfig`] from in-memory `content`.
    pub fn parse(content: &str, format: ContentFormat) -> LoadResult<GameConfig> {
        let config: GameConfig = format.parse(content)?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid game config: {}", e))?;
        Ok(config)
    }
}
