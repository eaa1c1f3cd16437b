//! Artifact template store
//!
//! Holds one compiled handlebars template per [`ArtifactKind`]. Built-in
//! templates can be replaced by dropping `<name>.py.hbs` files into a
//! templates directory (see `templates_dir` in the configuration).

use handlebars::Handlebars;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

pub mod files;
pub use files::{ROUTES_TEMPLATE, SERIALIZER_TEMPLATE, VIEWSET_TEMPLATE};

/// Kind of generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Serializer module (`serializers/<model>.py`)
    Serializer,
    /// Resource endpoint / viewset module (`viewsets/<model>.py`)
    ResourceEndpoint,
    /// Module route table (`routes.py`)
    RouteTable,
}

impl ArtifactKind {
    /// Every artifact kind
    pub const ALL: [Self; 3] = [Self::Serializer, Self::ResourceEndpoint, Self::RouteTable];

    /// Registered template name
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Serializer => "serializer",
            Self::ResourceEndpoint => "viewset",
            Self::RouteTable => "routes",
        }
    }

    /// File name of an override template
    #[must_use]
    pub fn override_file(self) -> String {
        format!("{}.py.hbs", self.template_name())
    }

    /// Built-in template source
    #[must_use]
    pub const fn builtin_source(self) -> &'static str {
        match self {
            Self::Serializer => SERIALIZER_TEMPLATE,
            Self::ResourceEndpoint => VIEWSET_TEMPLATE,
            Self::RouteTable => ROUTES_TEMPLATE,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Serializer => "serializer",
            Self::ResourceEndpoint => "resource endpoint",
            Self::RouteTable => "route table",
        };
        f.write_str(label)
    }
}

/// Compiled artifact templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Create a registry with the built-in templates
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut registry = Self { handlebars };
        for kind in ArtifactKind::ALL {
            registry.register(kind, kind.builtin_source())?;
        }
        Ok(registry)
    }

    /// Create a registry, replacing built-ins with overrides found in `dir`
    ///
    /// Missing override files fall back to the built-in template.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be read or fails to compile.
    pub fn with_overrides(dir: &Path) -> Result<Self> {
        let mut registry = Self::new()?;
        for kind in ArtifactKind::ALL {
            let path = dir.join(kind.override_file());
            if !path.is_file() {
                continue;
            }

            let source = fs::read_to_string(&path).map_err(|e| ScaffoldError::io(&path, e))?;
            tracing::debug!(template = kind.template_name(), path = %path.display(), "using template override");
            registry.register(kind, &source)?;
        }
        Ok(registry)
    }

    /// Render the template of `kind` with `context`
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, kind: ArtifactKind, context: &serde_json::Value) -> Result<String> {
        self.handlebars
            .render(kind.template_name(), context)
            .map_err(|e| ScaffoldError::Render {
                name: kind.template_name().to_string(),
                source: Box::new(e),
            })
    }

    fn register(&mut self, kind: ArtifactKind, source: &str) -> Result<()> {
        self.handlebars
            .register_template_string(kind.template_name(), source)
            .map_err(|e| ScaffoldError::Template {
                name: kind.template_name().to_string(),
                source: Box::new(e),
            })
    }
}
