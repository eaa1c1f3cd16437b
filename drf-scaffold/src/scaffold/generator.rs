//! API scaffold generator orchestrator
//!
//! This module coordinates a complete generation run:
//! 1. Resolve the target applications (fails fast on unknown labels)
//! 2. Validate output paths (advisory only)
//! 3. Generate, per application in request order:
//!    - `viewsets/` and `serializers/` packages
//!    - one viewset per eligible model, in registry order
//!    - one serializer per serializer-enabled model
//!    - one `routes.py` aggregating every eligible model
//!
//! Existing files are never touched, so a run can be repeated safely.

use serde_json::json;
use std::fmt;
use std::path::{Path, PathBuf};

use super::model_config::ModelConfig;
use super::planner::{self, Advisory};
use super::resolver::{AppResolver, ModuleTarget};
use super::templates::{ArtifactKind, TemplateRegistry};
use super::writer::{FileWriter, GeneratedArtifact, WriteOutcome};
use crate::config::ScaffoldConfig;
use crate::error::Result;
use crate::registry::AppRegistry;

/// Phase of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resolving target applications
    Resolve,
    /// Checking for existing output files
    Validate,
    /// Writing directories and files
    Generate,
    /// Run finished
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resolve => "resolve",
            Self::Validate => "validate",
            Self::Generate => "generate",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Outcome of a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Project name (last segment of the project root)
    pub project_name: String,
    /// Resolved application labels, in generation order
    pub targets: Vec<String>,
    /// Pre-existing file notices
    pub advisories: Vec<Advisory>,
    /// Files rendered from templates during this run
    pub artifacts: Vec<GeneratedArtifact>,
    /// Package markers created during this run
    pub init_markers: Vec<PathBuf>,
    /// Artifact paths left untouched because they already existed
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    /// Number of files created
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.artifacts.len() + self.init_markers.len()
    }

    /// Whether the run created nothing
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.written_count() == 0
    }
}

/// API scaffold generator
pub struct ScaffoldGenerator<R: AppRegistry> {
    /// Application/model registry
    registry: R,
    /// Loaded configuration
    config: ScaffoldConfig,
    /// Project root directory
    project_root: PathBuf,
    /// Template-backed file writer
    writer: FileWriter,
}

impl<R: AppRegistry> ScaffoldGenerator<R> {
    /// Create a new scaffold generator
    ///
    /// Template overrides are loaded from `config.templates_dir`, resolved
    /// against `project_root` when relative.
    ///
    /// # Errors
    ///
    /// Returns an error if a template (built-in or override) fails to load.
    pub fn new(registry: R, config: ScaffoldConfig, project_root: PathBuf) -> Result<Self> {
        let templates = match &config.templates_dir {
            Some(dir) => TemplateRegistry::with_overrides(&project_root.join(dir))?,
            None => TemplateRegistry::new()?,
        };
        let writer = FileWriter::new(templates).with_display_root(project_root.clone());

        Ok(Self {
            registry,
            config,
            project_root,
            writer,
        })
    }

    /// Enable or disable progress output
    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.writer = self.writer.with_progress(progress);
        self
    }

    /// Project name: last path segment of the project root
    #[must_use]
    pub fn project_name(&self) -> String {
        project_name(&self.project_root)
    }

    /// Run resolve, validate and generate for the requested labels
    ///
    /// # Errors
    ///
    /// Returns a resolution error when labels cannot be resolved, or an
    /// I/O / template error raised while writing.
    pub fn run(&self, labels: &[String]) -> Result<GenerationReport> {
        let mut report = GenerationReport {
            project_name: self.project_name(),
            ..GenerationReport::default()
        };

        tracing::debug!(phase = %Phase::Resolve, ?labels);
        let targets = self.resolve(labels)?;
        report.targets = targets.iter().map(|t| t.label.clone()).collect();

        tracing::debug!(phase = %Phase::Validate, targets = targets.len());
        report.advisories = Self::validate(&targets);

        tracing::debug!(phase = %Phase::Generate);
        for target in &targets {
            self.generate_module(target, &mut report)?;
        }

        tracing::debug!(
            phase = %Phase::Done,
            written = report.written_count(),
            skipped = report.skipped.len()
        );
        Ok(report)
    }

    /// Resolve labels into module targets
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScaffoldError::AppsNotFound`] or
    /// [`crate::ScaffoldError::NoApps`].
    pub fn resolve(&self, labels: &[String]) -> Result<Vec<ModuleTarget>> {
        AppResolver::new(&self.registry, &self.config).resolve(labels)
    }

    /// Report output files that already exist
    #[must_use]
    pub fn validate(targets: &[ModuleTarget]) -> Vec<Advisory> {
        planner::validate(targets)
    }

    /// Generate every artifact of one module
    fn generate_module(&self, target: &ModuleTarget, report: &mut GenerationReport) -> Result<()> {
        let span = tracing::info_span!("app", label = %target.label);
        let _guard = span.enter();

        for dir in [&target.viewset_dir, &target.serializer_dir] {
            FileWriter::ensure_directory(dir)?;
            if self.writer.ensure_init_marker(dir)? == WriteOutcome::Written {
                report.init_markers.push(dir.join(planner::INIT_MARKER));
            }
        }

        for model in &target.eligible_models {
            let context = self.model_context(target, model);

            let path = planner::viewset_path(target, model);
            self.write(&path, ArtifactKind::ResourceEndpoint, &context, report)?;

            if model.serializer_enabled {
                let path = planner::serializer_path(target, model);
                self.write(&path, ArtifactKind::Serializer, &context, report)?;
            }
        }

        let path = planner::routes_path(target);
        self.write(&path, ArtifactKind::RouteTable, &self.routes_context(target), report)
    }

    fn write(
        &self,
        path: &Path,
        kind: ArtifactKind,
        context: &serde_json::Value,
        report: &mut GenerationReport,
    ) -> Result<()> {
        match self.writer.write_if_absent(path, kind, context)? {
            Some(artifact) => report.artifacts.push(artifact),
            None => report.skipped.push(path.to_path_buf()),
        }
        Ok(())
    }

    /// Template variables for a single-model artifact
    fn model_context(&self, target: &ModuleTarget, model: &ModelConfig) -> serde_json::Value {
        json!({
            "project_name": self.project_name(),
            "module_label": target.label,
            "api_version": target.api_version,
            "model": model.template_metadata(),
        })
    }

    /// Template variables for a module's route table
    fn routes_context(&self, target: &ModuleTarget) -> serde_json::Value {
        let models: Vec<_> = target
            .eligible_models
            .iter()
            .map(|model| {
                let mut metadata = model.template_metadata();
                metadata["import_path"] =
                    json!(format!("{}.viewsets.{}", target.label, model.file_stem()));
                metadata["url_prefix"] = json!(format!(
                    "{}/{}",
                    target.api_version,
                    metadata["route_segment"].as_str().unwrap_or_default()
                ));
                metadata
            })
            .collect();

        json!({
            "project_name": self.project_name(),
            "module_label": target.label,
            "api_version": target.api_version,
            "models": models,
        })
    }
}

/// Last path segment of `root`, canonicalized when possible
#[must_use]
pub fn project_name(root: &Path) -> String {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
