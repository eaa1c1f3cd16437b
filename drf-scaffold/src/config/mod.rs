//! Configuration management for drf-scaffold
//!
//! Settings are loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `DRF_SCAFFOLD_` prefix, `__` for nesting)
//! 2. The project settings file (`<project_root>/scaffold.toml` by default)
//! 3. `~/.config/drf-scaffold/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! Environment variable format: `DRF_SCAFFOLD_SECTION__FIELD_NAME`
//! - Example: `DRF_SCAFFOLD_DRF__VERSION=v2`
//!
//! # Example Configuration
//!
//! ```toml
//! # scaffold.toml
//! local_apps = ["mysite.apps.polls", "blog"]
//!
//! [drf]
//! version = "v1"
//! exclude_apps = ["admin", "auth", "contenttypes", "sessions"]
//! ```
//!
//! The same file usually carries the `[[apps]]` registry manifest, see
//! [`crate::registry::manifest`]. Keys unknown to this struct are ignored.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default settings file name, relative to the project root
pub const DEFAULT_SETTINGS_FILE: &str = "scaffold.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "DRF_SCAFFOLD_";

/// REST layer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrfSettings {
    /// API version used in route prefixes
    pub version: String,

    /// Application labels ignored when discovering apps from the registry
    pub exclude_apps: Vec<String>,
}

impl Default for DrfSettings {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            exclude_apps: [
                "admin",
                "auth",
                "contenttypes",
                "sessions",
                "messages",
                "staticfiles",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Complete drf-scaffold configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Static list of project-local applications (dotted paths allowed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_apps: Option<Vec<String>>,

    /// Directory with template overrides (`serializer.py.hbs`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,

    /// REST layer settings
    #[serde(default)]
    pub drf: DrfSettings,
}

impl ScaffoldConfig {
    /// Load configuration for a project
    ///
    /// `settings_file` is resolved against `project_root` when relative.
    /// A missing settings file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file contains invalid TOML syntax
    /// - Configuration values fail type conversion
    pub fn load(project_root: &Path, settings_file: &Path) -> Result<Self> {
        let mut figment = Self::defaults_figment()?;

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let project_config = project_root.join(settings_file);
        if project_config.exists() {
            figment = figment.merge(Toml::file(&project_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Self = figment.extract()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a specific file, skipping the user config
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or values fail
    /// type conversion.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::defaults_figment()?
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path
    ///
    /// Returns `~/.config/drf-scaffold/config.toml` on Linux.
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| config_dir.join("drf-scaffold").join("config.toml"),
        )
    }

    /// Application labels from `local_apps`, last dotted segment of each
    #[must_use]
    pub fn local_app_labels(&self) -> Option<Vec<String>> {
        self.local_apps.as_ref().map(|apps| {
            apps.iter()
                .map(|app| app.rsplit('.').next().unwrap_or(app).to_string())
                .collect()
        })
    }

    fn defaults_figment() -> Result<Figment> {
        let defaults = toml::to_string(&Self::default()).map_err(|e| {
            figment::Error::from(format!("failed to serialize default configuration: {e}"))
        })?;
        Ok(Figment::new().merge(Toml::string(&defaults)))
    }
}
