use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Error;
use crate::inline::InlineOptions;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub bullet: BulletConfig,
    pub spacer: SpacerConfig,
    pub inline: InlineConfig,
    pub page: PageConfig,
    pub font: FontConfig,
    pub transcript: TranscriptConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BulletConfig {
    pub glyph: String,
    /// Typst fill for the glyph
    pub color: String,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            glyph: "•".to_string(),
            color: "#10b981".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpacerConfig {
    pub height: String,
}

impl Default for SpacerConfig {
    fn default() -> Self {
        Self {
            height: "0.5em".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InlineConfig {
    pub loose_delimiters: bool,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub numbers: bool,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    pub sans: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranscriptConfig {
    pub user_fill: String,
    pub concierge_fill: String,
    pub user_label: String,
    pub concierge_label: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            user_fill: "#d1fae5".to_string(),
            concierge_fill: "#f9fafb".to_string(),
            user_label: "Guest".to_string(),
            concierge_label: "Mero Support".to_string(),
        }
    }
}

impl Config {
    /// The configuration shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled defaults if the
    /// file is missing or invalid.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("ignoring invalid config {}: {}", path.display(), e);
                    Self::compiled_default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                Self::compiled_default()
            }
            Err(e) => {
                warn!("cannot read config {}: {}", path.display(), e);
                Self::compiled_default()
            }
        }
    }

    /// Strictly parse a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    pub fn inline_options(&self) -> InlineOptions {
        InlineOptions {
            loose_delimiters: self.inline.loose_delimiters,
        }
    }
}
