//! REST API scaffold command
//!
//! Generates, for every opted-in model of the selected applications:
//! - a viewset module (`<app>/viewsets/<model>.py`)
//! - a serializer module when requested (`<app>/serializers/<model>.py`)
//! - one route table per application (`<app>/routes.py`)
//!
//! # Example
//!
//! ```bash
//! createapi polls blog --project-root ./mysite
//! ```

use anyhow::{Context, Result};
use console::style;
use drf_scaffold::registry::StaticRegistry;
use drf_scaffold::scaffold::{GenerationReport, ScaffoldGenerator};
use drf_scaffold::ScaffoldConfig;
use std::path::PathBuf;

pub struct CreateApiCommand {
    app_labels: Vec<String>,
    project_root: PathBuf,
    settings: PathBuf,
    verbosity: u8,
}

impl CreateApiCommand {
    pub const fn new(
        app_labels: Vec<String>,
        project_root: PathBuf,
        settings: PathBuf,
        verbosity: u8,
    ) -> Self {
        Self {
            app_labels,
            project_root,
            settings,
            verbosity,
        }
    }

    pub fn execute(&self) -> Result<GenerationReport> {
        tracing::debug!(
            labels = ?self.app_labels,
            project_root = %self.project_root.display(),
            settings = %self.settings.display(),
            "running createapi"
        );

        let config = ScaffoldConfig::load(&self.project_root, &self.settings)
            .context("Failed to load configuration")?;

        let registry = StaticRegistry::from_manifest(&self.project_root, &self.settings)
            .context("Failed to load app registry")?;

        let generator = ScaffoldGenerator::new(registry, config, self.project_root.clone())
            .context("Failed to create scaffold generator")?
            .with_progress(self.verbosity > 0);

        if self.verbosity > 0 {
            println!(
                "\n{} {}",
                style("Scaffolding REST API for").cyan().bold(),
                style(generator.project_name()).green().bold(),
            );
        }

        // Resolution errors pass through untouched so the caller can map the exit code
        let report = generator.run(&self.app_labels)?;

        if self.verbosity > 0 {
            print_summary(&report);
        }

        Ok(report)
    }
}

fn print_summary(report: &GenerationReport) {
    println!(
        "\n{} {} file(s) in {}, {} skipped",
        style("Wrote").green().bold(),
        report.written_count(),
        report.targets.join(", "),
        report.skipped.len(),
    );

    if !report.advisories.is_empty() {
        println!(
            "{} {} existing file(s) left untouched",
            style("Note:").yellow().bold(),
            report.advisories.len(),
        );
    }

    if !report.artifacts.is_empty() {
        println!("\n{}", style("Next steps:").cyan().bold());
        for label in &report.targets {
            println!(
                "  Include the routes in your URLconf: {}",
                style(format!("path('api/', include('{label}.routes'))")).yellow()
            );
        }
    }
}
