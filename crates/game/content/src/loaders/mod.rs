//! Content loaders for reading game data from files.
//!
//! Every loader accepts TOML, RON or JSON and picks the format from the file
//! extension. Configurations are validated before they are returned.

pub mod bundle;
pub mod config;

pub use bundle::ContentBundle;
pub use config::ConfigLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Supported data file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Ron,
    Json,
}

impl ContentFormat {
    /// Picks the format from the extension of `path` (case-insensitive).
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            Some("json") => Ok(Self::Json),
            _ => Err(anyhow::anyhow!(
                "Unsupported content file {}: expected .toml, .ron or .json",
                path.display()
            )),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Ron => "RON",
            Self::Json => "JSON",
        }
    }

    /// Deserializes `content` written in this format.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> LoadResult<T> {
        let parsed = match self {
            Self::Toml => toml::from_str(content).map_err(anyhow::Error::from),
            Self::Ron => ron::from_str(content).map_err(anyhow::Error::from),
            Self::Json => serde_json::from_str(content).map_err(anyhow::Error::from),
        };
        parsed.map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", self.name(), e))
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and deserializes `path` in the format its extension names.
pub(crate) fn load_file<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let format = ContentFormat::from_path(path)?;
    let content = read_file(path)?;
    format
        .parse(&content)
        .map_err(|e| anyhow::anyhow!("{} in {}", e, path.display()))
}
