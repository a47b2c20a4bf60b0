use crate::ops::ColorRange;
use crate::render::directive::Representation;
use crate::render::viewer::ViewerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Render settings loaded from a TOML file.
///
/// ```toml
/// style = "cartoon"
/// highlight = "stick"
///
/// [[ranges]]
/// start = 0
/// end = 2
/// color = "red"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Base representation for the whole structure.
    #[serde(default)]
    pub style: Option<Representation>,
    /// Representation used for highlighted ranges.
    #[serde(default)]
    pub highlight: Option<Representation>,
    #[serde(default)]
    pub ranges: Vec<ColorRange>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read render config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid render config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RenderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!(
            "loaded render config from '{}' with {} range(s)",
            path.display(),
            config.ranges.len()
        );
        Ok(config)
    }

    /// Viewer settings with unset fields left at their defaults.
    pub fn viewer_config(&self) -> ViewerConfig {
        let defaults = ViewerConfig::default();
        ViewerConfig {
            representation: self.style.unwrap_or(defaults.representation),
            highlight: self.highlight.unwrap_or(defaults.highlight),
            ..defaults
        }
    }
}
