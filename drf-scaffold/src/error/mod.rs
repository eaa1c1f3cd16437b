//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Exit code used when target applications cannot be resolved
pub const RESOLUTION_EXIT_CODE: u8 = 2;

/// Exit code used for every other failure
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Scaffold error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// One or more requested application labels are not registered
    #[error("{}", format_missing_apps(.labels))]
    AppsNotFound {
        /// Every label that failed to resolve, in request order
        labels: Vec<String>,
    },

    /// Resolution succeeded but produced no applications
    #[error("Apps could not be found.")]
    NoApps,

    /// Configuration could not be loaded or extracted
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The project manifest is malformed
    #[error("Invalid manifest {}: {source}", .path.display())]
    Manifest {
        /// Manifest location
        path: PathBuf,
        /// Parse failure
        #[source]
        source: Box<toml::de::Error>,
    },

    /// A template failed to compile
    #[error("Invalid template '{name}': {source}")]
    Template {
        /// Template name
        name: String,
        /// Compile failure
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// A template failed to render
    #[error("Failed to render template '{name}': {source}")]
    Render {
        /// Template name
        name: String,
        /// Render failure
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Filesystem operation failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read, written or created
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Build an I/O error bound to the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error aborted target resolution
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::AppsNotFound { .. } | Self::NoApps)
    }

    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_resolution() {
            RESOLUTION_EXIT_CODE
        } else {
            FAILURE_EXIT_CODE
        }
    }

    /// User-facing report lines, one per offending label for resolution errors
    #[must_use]
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            Self::AppsNotFound { labels } => labels.iter().map(|l| missing_app(l)).collect(),
            other => vec![other.to_string()],
        }
    }
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

fn missing_app(label: &str) -> String {
    format!("App '{label}' could not be found.")
}

fn format_missing_apps(labels: &[String]) -> String {
    labels
        .iter()
        .map(|l| missing_app(l))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result alias for scaffold operations
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
