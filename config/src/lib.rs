//! Configuration and content loading for folio.
//!
//! The binary ships with a complete embedded portfolio; an optional user
//! file at `~/.folio/folio.toml` replaces it wholesale. UI options can
//! additionally be flipped per-run through `FOLIO_*` environment
//! variables, which take precedence over the file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use folio_types::ui::UiOptions;
use folio_types::{ContentError, PortfolioContent};

const DEFAULT_CONFIG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/folio.toml"));

const DEFAULT_TRANSITION_MS: u64 = 450;

/// The `[ui]` table. Every field is optional; absent fields fall back to
/// defaults after the `FOLIO_*` environment overrides are applied.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub ascii_only: Option<bool>,
    #[serde(default)]
    pub high_contrast: Option<bool>,
    #[serde(default)]
    pub reduced_motion: Option<bool>,
    /// Total duration of a section transition, in milliseconds.
    #[serde(default)]
    pub transition_ms: Option<u64>,
}

/// Parsed configuration: UI options plus the portfolio content itself.
#[derive(Debug, Clone, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(flatten)]
    pub content: PortfolioContent,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid content in {origin}: {source}")]
    Invalid {
        origin: String,
        #[source]
        source: ContentError,
    },
}

impl FolioConfig {
    /// Load the user config when present, the embedded default otherwise.
    ///
    /// Called before the terminal enters raw mode, so errors here surface
    /// as plain readable messages rather than a corrupted screen.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "Loading user config");
                Self::load_from(&path)
            }
            _ => Self::embedded(),
        }
    }

    /// The embedded default portfolio, ignoring any user file.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(DEFAULT_CONFIG, "embedded default")
    }

    /// Location of the optional user config file.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".folio").join("folio.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, &path.display().to_string())
    }

    fn parse(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        config
            .content
            .validate()
            .map_err(|source| ConfigError::Invalid {
                origin: origin.to_string(),
                source,
            })?;
        Ok(config)
    }

    /// Resolved UI options: environment beats file, file beats default.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            ascii_only: resolve_flag("FOLIO_ASCII", self.ui.ascii_only),
            high_contrast: resolve_flag("FOLIO_HIGH_CONTRAST", self.ui.high_contrast),
            reduced_motion: resolve_flag("FOLIO_REDUCED_MOTION", self.ui.reduced_motion),
        }
    }

    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.ui.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS))
    }
}

fn resolve_flag(name: &str, file_value: Option<bool>) -> bool {
    match env::var(name) {
        Ok(raw) => match parse_flag(&raw) {
            Some(value) => value,
            None => {
                tracing::warn!("Unknown value for {name}: {raw}");
                file_value.unwrap_or(false)
            }
        },
        Err(_) => file_value.unwrap_or(false),
    }
}

/// Accepts the usual spellings of a boolean environment flag.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
