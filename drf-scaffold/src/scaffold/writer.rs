//! Idempotent file writer
//!
//! Only ever adds missing directories and files. An existing file is never
//! rewritten, so re-running the generator keeps manual edits intact.
//!
//! Content is staged in a temporary file next to the target and linked into
//! place only once fully written. A failed write leaves no file behind.

use console::style;
use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

use super::planner::INIT_MARKER;
use super::templates::{ArtifactKind, TemplateRegistry};
use crate::error::{Result, ScaffoldError};

/// Result of a write attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created
    Written,
    /// The file already existed and was left untouched
    Skipped,
}

/// A file created from a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Written file
    pub path: PathBuf,
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Rendered content
    pub content: String,
}

/// Renders templates into files that do not exist yet
pub struct FileWriter {
    templates: TemplateRegistry,
    progress: bool,
    display_root: Option<PathBuf>,
}

impl FileWriter {
    /// Create a writer that prints a progress line for every created file
    #[must_use]
    pub fn new(templates: TemplateRegistry) -> Self {
        Self {
            templates,
            progress: true,
            display_root: None,
        }
    }

    /// Enable or disable progress lines
    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Show progress paths relative to `root`
    #[must_use]
    pub fn with_display_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.display_root = Some(root.into());
        self
    }

    /// Create `path` and its parents if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_directory(path: &Path) -> Result<()> {
        if path.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(path).map_err(|e| ScaffoldError::io(path, e))?;
        tracing::debug!(path = %path.display(), "created directory");
        Ok(())
    }

    /// Ensure `dir` contains an (empty) package marker
    ///
    /// # Errors
    ///
    /// Returns an error if the marker cannot be created.
    pub fn ensure_init_marker(&self, dir: &Path) -> Result<WriteOutcome> {
        self.create_file(&dir.join(INIT_MARKER), "")
    }

    /// Render the template of `kind` into `path` unless the file exists
    ///
    /// Returns `None` when the file was already there.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn write_if_absent(
        &self,
        path: &Path,
        kind: ArtifactKind,
        context: &serde_json::Value,
    ) -> Result<Option<GeneratedArtifact>> {
        if path.exists() {
            tracing::debug!(path = %path.display(), %kind, "file exists, skipping");
            return Ok(None);
        }

        let content = self.templates.render(kind, context)?;
        Ok(match self.create_file(path, &content)? {
            WriteOutcome::Written => Some(GeneratedArtifact {
                path: path.to_path_buf(),
                kind,
                content,
            }),
            WriteOutcome::Skipped => None,
        })
    }

    fn create_file(&self, path: &Path, content: &str) -> Result<WriteOutcome> {
        self.create_with(path, |file| file.write_all(content.as_bytes()))
    }

    fn create_with(
        &self,
        path: &Path,
        fill: impl FnOnce(&mut File) -> io::Result<()>,
    ) -> Result<WriteOutcome> {
        if path.exists() {
            return Ok(WriteOutcome::Skipped);
        }

        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut staged = staging_file(dir).map_err(|e| ScaffoldError::io(path, e))?;
        fill(staged.as_file_mut()).map_err(|e| ScaffoldError::io(path, e))?;

        // persist_noclobber never replaces a file that appeared meanwhile
        match staged.persist_noclobber(path) {
            Ok(_) => {}
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => return Ok(WriteOutcome::Skipped),
            Err(e) => return Err(ScaffoldError::io(path, e.error)),
        }

        self.report_progress(path);
        tracing::info!(path = %path.display(), "wrote file");
        Ok(WriteOutcome::Written)
    }

    fn report_progress(&self, path: &Path) {
        if !self.progress {
            return;
        }

        let shown = self
            .display_root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);
        eprintln!("{} {}", style("Writing:").green(), style(shown.display()).dim());
    }
}

/// Hidden temporary file in `dir`, created with the usual umask-governed mode
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".drf-scaffold-");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    builder.tempfile_in(dir)
}
