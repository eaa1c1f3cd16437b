//! drf-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::Parser;
use commands::CreateApiCommand;
use console::style;
use drf_scaffold::error::FAILURE_EXIT_CODE;
use drf_scaffold::observability;
use drf_scaffold::ScaffoldError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "createapi")]
#[command(version)]
#[command(about = "Generate REST API serializers, viewsets and routes for registered apps", long_about = None)]
struct Cli {
    /// Application labels to scaffold (defaults to every local app)
    #[arg(value_name = "APP_LABEL")]
    app_labels: Vec<String>,

    /// Project root directory
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Settings file, relative to the project root
    #[arg(long, default_value = drf_scaffold::config::DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    /// Output verbosity (0 = silent, 3 = debug)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=3))]
    verbosity: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    if let Err(err) = observability::init(cli.verbosity) {
        eprintln!("{} {err:#}", style("Error:").red().bold());
        return ExitCode::from(FAILURE_EXIT_CODE);
    }

    let cmd = CreateApiCommand::new(cli.app_labels, cli.project_root, cli.settings, cli.verbosity);
    match cmd.execute() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report(&err)),
    }
}

/// Print a failure and map it to the process exit code
fn report(err: &anyhow::Error) -> u8 {
    if let Some(scaffold_err) = err.downcast_ref::<ScaffoldError>() {
        if scaffold_err.is_resolution() {
            for line in scaffold_err.report_lines() {
                eprintln!("{}", style(line).red());
            }
            return scaffold_err.exit_code();
        }
    }

    eprintln!("{} {err:#}", style("Error:").red().bold());
    FAILURE_EXIT_CODE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["createapi"]).unwrap();
        assert!(cli.app_labels.is_empty());
        assert_eq!(cli.project_root, PathBuf::from("."));
        assert_eq!(cli.settings, PathBuf::from("scaffold.toml"));
        assert_eq!(cli.verbosity, 1);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_labels_and_flags() {
        let cli = Cli::try_parse_from([
            "createapi",
            "polls",
            "blog",
            "--project-root",
            "/srv/mysite",
            "-v",
            "0",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.app_labels, vec!["polls", "blog"]);
        assert_eq!(cli.project_root, PathBuf::from("/srv/mysite"));
        assert_eq!(cli.verbosity, 0);
        assert!(cli.no_color);
    }

    #[test]
    fn test_verbosity_out_of_range() {
        assert!(Cli::try_parse_from(["createapi", "--verbosity", "4"]).is_err());
    }

    #[test]
    fn test_resolution_errors_exit_2() {
        let err = anyhow::Error::new(ScaffoldError::AppsNotFound {
            labels: vec!["ghost".to_string()],
        });
        assert_eq!(report(&err), 2);
    }

    #[test]
    fn test_other_errors_exit_1() {
        let err = anyhow::Error::new(ScaffoldError::io(
            "polls/routes.py",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        ));
        assert_eq!(report(&err), 1);
        assert_eq!(report(&anyhow::anyhow!("boom")), 1);
    }
}
