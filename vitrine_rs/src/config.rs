//! Configuration file support for vitrine.
//!
//! Loads optional `vitrine.toml` from the project root. Command-line flags
//! override whatever is set here.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;
use vitrine_sections::{LinkBuilder, RenderMode};

use crate::error::{Error, Result};

/// Default config file name.
pub const CONFIG_FILE: &str = "vitrine.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct VitrineConfig {
    pub render: RenderConfig,
    pub links: LinksConfig,
    pub paths: PathsConfig,
    pub forms: FormsConfig,
}

/// `[render]`
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// `production` or `development`.
    pub mode: Option<String>,
    /// Fail `render`/`check` when error diagnostics are present.
    pub strict: bool,
}

/// `[links]`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinksConfig {
    pub chat_base: String,
    pub country_code: String,
    /// Chat prefill used when the site file does not set one.
    pub default_message: Option<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        let builder = LinkBuilder::default();
        Self {
            chat_base: builder.chat_base,
            country_code: builder.country_code,
            default_message: None,
        }
    }
}

/// `[paths]`
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub content: Option<PathBuf>,
    pub site: Option<PathBuf>,
    pub out: Option<PathBuf>,
}

/// `[forms]`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormsConfig {
    pub endpoint: Option<String>,
    /// `source` field sent with every submission.
    pub source: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            source: "landing-page".to_string(),
        }
    }
}

impl VitrineConfig {
    /// Load config from `vitrine.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific path, surfacing read and parse errors.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render mode from `[render] mode`; unknown values fall back to production.
    pub fn render_mode(&self) -> RenderMode {
        match self.render.mode.as_deref() {
            None => RenderMode::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{}; using production", e);
                RenderMode::default()
            }),
        }
    }

    pub fn link_builder(&self) -> LinkBuilder {
        LinkBuilder::new(self.links.chat_base.clone(), self.links.country_code.clone())
    }
}
