//! TOML project manifest
//!
//! Declares applications and their models for [`StaticRegistry`]:
//!
//! ```toml
//! [[apps]]
//! label = "polls"
//! path = "polls"          # optional, defaults to the label
//!
//! [[apps.models]]
//! name = "Question"
//!
//! [apps.models.scaffold.api]
//! scaffolding = true
//! methods = ["CREATE", "RETRIEVE", "LIST"]
//!
//! [apps.models.scaffold.api.serializer]
//! scaffolding = true
//! fields = ["id", "question_text"]
//!
//! [[apps.models]]
//! name = "Choice"         # no metadata: never scaffolded
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ScaffoldMetadata, StaticRegistry};
use crate::error::{Result, ScaffoldError};

/// Parsed manifest document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Declared applications, in order
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

/// One `[[apps]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct AppEntry {
    /// Application label
    pub label: String,
    /// Application root relative to the project root
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Declared models, in order
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

/// One `[[apps.models]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    /// Model class name
    pub name: String,
    /// Scaffolding metadata
    #[serde(default)]
    pub scaffold: Option<ScaffoldMetadata>,
}

impl Manifest {
    /// Parse a manifest from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Manifest`] if the text is not a valid manifest.
    pub fn parse(source: &str, origin: &Path) -> Result<Self> {
        toml::from_str(source).map_err(|e| ScaffoldError::Manifest {
            path: origin.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// Read a manifest file; a missing file yields an empty manifest
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no manifest found");
            return Ok(Self::default());
        }

        let source = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
        Self::parse(&source, path)
    }

    /// Register every declared app and model on a new registry
    #[must_use]
    pub fn into_registry(self, project_root: impl Into<PathBuf>) -> StaticRegistry {
        let mut registry = StaticRegistry::new(project_root);
        for app in self.apps {
            let path = app.path.unwrap_or_else(|| PathBuf::from(&app.label));
            registry.register_app(app.label.as_str(), path);
            for model in app.models {
                registry.register_model(&app.label, model.name, model.scaffold);
            }
        }
        registry
    }
}

impl StaticRegistry {
    /// Build a registry from the manifest at `manifest_path`
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest exists but cannot be read or parsed.
    pub fn from_manifest(project_root: &Path, manifest_path: &Path) -> Result<Self> {
        let manifest = Manifest::load(&project_root.join(manifest_path))?;
        Ok(manifest.into_registry(project_root))
    }
}
