//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/comptree/comptree.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `COMPTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::OutcomeFormat;

/// Deepest tree expression accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Unified configuration for comptree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Maximum nesting accepted when parsing tree expressions
    pub max_depth: usize,
    /// Markers used to render operation results
    pub format: OutcomeFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            format: OutcomeFormat::default(),
        }
    }
}

/// Raw format config for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawFormat {
    pub leaf: Option<String>,
    pub branch: Option<String>,
    pub open: Option<String>,
    pub close: Option<String>,
    pub separator: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub max_depth: Option<usize>,
    pub format: RawFormat,
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Get the XDG config directory for comptree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "comptree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("comptree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl OutcomeFormat {
    /// Overlay wins where it specifies a marker.
    fn merge(&self, overlay: &RawFormat) -> Self {
        let pick = |o: &Option<String>, base: &String| o.clone().unwrap_or_else(|| base.clone());
        Self {
            leaf: pick(&overlay.leaf, &self.leaf),
            branch: pick(&overlay.branch, &self.branch),
            open: pick(&overlay.open, &self.open),
            close: pick(&overlay.close, &self.close),
            separator: pick(&overlay.separator, &self.separator),
        }
    }
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_depth: overlay.max_depth.unwrap_or(self.max_depth),
            format: self.format.merge(&overlay.format),
        }
    }

    /// Load settings with layered precedence, discovering the global file via XDG.
    ///
    /// # Arguments
    /// * `local` - Optional config file given on the command line
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path();
        Self::load_from(global.as_deref(), local)
    }

    /// Load settings from explicit file locations.
    ///
    /// A missing global file is skipped; a missing local file is an error,
    /// since the user asked for it explicitly.
    pub fn load_from(
        global: Option<&Path>,
        local: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Local config
        if let Some(local_path) = local {
            debug!("local config: {}", local_path.display());
            current = current.merge_with(&load_raw_settings(local_path)?);
        }

        // 4. Apply environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        if current.max_depth == 0 {
            return Err(ApplicationError::Config {
                message: "max_depth must be at least 1".into(),
            });
        }

        Ok(current)
    }

    /// Apply COMPTREE_* environment variables as explicit overrides.
    ///
    /// `COMPTREE_MAX_DEPTH=64`, `COMPTREE_FORMAT__LEAF=x`, ...
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("COMPTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        // unset is fine, set but unparseable is not
        match config.get::<usize>("max_depth") {
            Ok(val) => settings.max_depth = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        if let Ok(val) = config.get_string("format.leaf") {
            settings.format.leaf = val;
        }
        if let Ok(val) = config.get_string("format.branch") {
            settings.format.branch = val;
        }
        if let Ok(val) = config.get_string("format.open") {
            settings.format.open = val;
        }
        if let Ok(val) = config.get_string("format.close") {
            settings.format.close = val;
        }
        if let Ok(val) = config.get_string("format.separator") {
            settings.format.separator = val;
        }

        Ok(settings)
    }

    /// Render settings as TOML, as they would appear in a config file.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
