//! Output path planning and pre-existing file checks

use std::fmt;
use std::path::PathBuf;

use super::model_config::ModelConfig;
use super::resolver::ModuleTarget;
use super::templates::ArtifactKind;

/// Package marker created in every generated directory
pub const INIT_MARKER: &str = "__init__.py";

/// Route table file name, relative to the module root
pub const ROUTES_FILE: &str = "routes.py";

/// Python source extension of generated files
const SOURCE_EXT: &str = "py";

/// Path of a model's resource endpoint module
#[must_use]
pub fn viewset_path(target: &ModuleTarget, model: &ModelConfig) -> PathBuf {
    target
        .viewset_dir
        .join(model.file_stem())
        .with_extension(SOURCE_EXT)
}

/// Path of a model's serializer module
#[must_use]
pub fn serializer_path(target: &ModuleTarget, model: &ModelConfig) -> PathBuf {
    target
        .serializer_dir
        .join(model.file_stem())
        .with_extension(SOURCE_EXT)
}

/// Path of a module's route table
#[must_use]
pub fn routes_path(target: &ModuleTarget) -> PathBuf {
    target.path.join(ROUTES_FILE)
}

/// Notice that a file the run would generate already exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Owning application label
    pub module_label: String,
    /// Existing file
    pub path: PathBuf,
    /// Artifact the file would have been
    pub kind: ArtifactKind,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} already exists in app: {}", self.kind, self.module_label)
    }
}

/// Check every eligible model for already existing output files
///
/// Purely diagnostic: existing files are skipped later by the writer.
#[must_use]
pub fn validate(targets: &[ModuleTarget]) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    for target in targets {
        for model in &target.eligible_models {
            let checks = [
                (ArtifactKind::ResourceEndpoint, viewset_path(target, model)),
                (ArtifactKind::Serializer, serializer_path(target, model)),
            ];

            for (kind, path) in checks {
                if path.is_file() {
                    let advisory = Advisory {
                        module_label: target.label.clone(),
                        path,
                        kind,
                    };
                    tracing::warn!(path = %advisory.path.display(), "{advisory}");
                    advisories.push(advisory);
                }
            }
        }
    }

    advisories
}
