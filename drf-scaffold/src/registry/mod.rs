//! Application and model registry
//!
//! The generator never discovers models on its own. It talks to an
//! [`AppRegistry`], which knows the registered applications, where they live
//! on disk and which models they declare. [`StaticRegistry`] is the
//! in-process implementation, populated by explicit registration calls or
//! from a TOML manifest (see [`manifest`]).
//!
//! # Example
//!
//! ```rust
//! use drf_scaffold::registry::{AppRegistry, ScaffoldMetadata, StaticRegistry};
//!
//! let mut registry = StaticRegistry::new("/srv/mysite");
//! registry
//!     .register_app("polls", "polls")
//!     .register_model("polls", "Question", Some(ScaffoldMetadata::api()))
//!     .register_model("polls", "Choice", None);
//!
//! let polls = registry.resolve_module("polls").unwrap();
//! assert_eq!(registry.list_models(&polls).len(), 2);
//! ```

pub mod manifest;
pub mod metadata;

pub use metadata::{ApiMetadata, Operation, ScaffoldMetadata, SerializerMetadata};

use std::path::{Path, PathBuf};

/// A resolved application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleHandle {
    /// Application label (e.g., `polls`)
    pub label: String,
    /// Absolute filesystem root of the application
    pub path: PathBuf,
}

/// A model declared by an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHandle {
    /// Model class name (e.g., `Question`)
    pub name: String,
    /// Scaffolding metadata attached at registration time
    pub metadata: Option<ScaffoldMetadata>,
}

/// Interface to the host application's app/model registry
pub trait AppRegistry {
    /// Distinct labels of applications that declare at least one model,
    /// in registration order
    fn list_registered_modules(&self) -> Vec<String>;

    /// Look up an application by label
    fn resolve_module(&self, label: &str) -> Option<ModuleHandle>;

    /// Models of an application, in declaration order
    fn list_models(&self, module: &ModuleHandle) -> Vec<ModelHandle>;
}

#[derive(Debug, Clone)]
struct RegisteredApp {
    handle: ModuleHandle,
    models: Vec<ModelHandle>,
}

/// Registry populated by explicit registration calls
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    project_root: PathBuf,
    apps: Vec<RegisteredApp>,
}

impl StaticRegistry {
    /// Create an empty registry; relative app paths resolve against `project_root`
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            apps: Vec::new(),
        }
    }

    /// Register an application rooted at `path`
    ///
    /// Registering a label twice replaces its path and keeps its models.
    pub fn register_app(&mut self, label: impl Into<String>, path: impl AsRef<Path>) -> &mut Self {
        let label = label.into();
        let path = self.project_root.join(path);

        if let Some(app) = self.find_mut(&label) {
            app.handle.path = path;
        } else {
            tracing::trace!(%label, path = %path.display(), "registering app");
            self.apps.push(RegisteredApp {
                handle: ModuleHandle { label, path },
                models: Vec::new(),
            });
        }
        self
    }

    /// Register a model on an application, with its scaffolding metadata
    ///
    /// The application is registered at `<project_root>/<label>` if unknown.
    pub fn register_model(
        &mut self,
        app_label: &str,
        name: impl Into<String>,
        metadata: Option<ScaffoldMetadata>,
    ) -> &mut Self {
        if self.find_mut(app_label).is_none() {
            self.register_app(app_label, app_label);
        }

        if let Some(app) = self.find_mut(app_label) {
            app.models.push(ModelHandle {
                name: name.into(),
                metadata,
            });
        }
        self
    }

    /// Number of registered applications
    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Whether no application is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    fn find(&self, label: &str) -> Option<&RegisteredApp> {
        self.apps.iter().find(|app| app.handle.label == label)
    }

    fn find_mut(&mut self, label: &str) -> Option<&mut RegisteredApp> {
        self.apps.iter_mut().find(|app| app.handle.label == label)
    }
}

impl AppRegistry for StaticRegistry {
    fn list_registered_modules(&self) -> Vec<String> {
        self.apps
            .iter()
            .filter(|app| !app.models.is_empty())
            .map(|app| app.handle.label.clone())
            .collect()
    }

    fn resolve_module(&self, label: &str) -> Option<ModuleHandle> {
        self.find(label).map(|app| app.handle.clone())
    }

    fn list_models(&self, module: &ModuleHandle) -> Vec<ModelHandle> {
        self.find(&module.label)
            .map(|app| app.models.clone())
            .unwrap_or_default()
    }
}
