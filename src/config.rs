//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/gedtree/gedtree.toml`
//! 3. Environment variables: `GEDTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builder::BuilderOptions;

#[derive(Error, Debug)]
#[error("config error: {message}")]
pub struct SettingsError {
    pub message: String,
}

/// Unified configuration for gedtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Preallocate child collections during tree construction
    pub eager_collection_init: bool,
    /// File extensions recognized when scanning directories
    pub scan_extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            eager_collection_init: false,
            scan_extensions: vec!["ged".into()],
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so unset fields inherit from the layer below).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub eager_collection_init: Option<bool>,
    pub scan_extensions: Option<Vec<String>>,
}

/// Get the XDG config directory for gedtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gedtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("gedtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| SettingsError {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self: overlay wins where specified,
    /// otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            eager_collection_init: overlay
                .eager_collection_init
                .unwrap_or(self.eager_collection_init),
            scan_extensions: overlay
                .scan_extensions
                .clone()
                .unwrap_or_else(|| self.scan_extensions.clone()),
        }
    }

    /// Load settings with layered precedence (defaults, global TOML,
    /// `GEDTREE_*` environment variables).
    pub fn load() -> Result<Self, SettingsError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply GEDTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, SettingsError> {
        // prefix_separator must stay "_" even though nested keys use "__",
        // otherwise GEDTREE_* variables are looked up as GEDTREE__*
        let builder = Config::builder().add_source(
            Environment::with_prefix("GEDTREE")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .try_parsing(true),
        );
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_bool("eager_collection_init") {
            settings.eager_collection_init = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("scan_extensions") {
            settings.scan_extensions = val;
        }

        Ok(settings)
    }

    /// Bridge to the tree-construction options.
    pub fn builder_options(&self) -> BuilderOptions {
        BuilderOptions {
            eager_collection_init: self.eager_collection_init,
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# gedtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/gedtree/gedtree.toml
#   Env:    GEDTREE_* environment variables (explicit overrides)

# Preallocate child collections during tree construction
# eager_collection_init = false

# File extensions recognized by `gedtree scan`
# scan_extensions = ["ged"]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError {
        message: e.to_string(),
    }
}
