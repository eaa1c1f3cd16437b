//! drf-scaffold: REST API boilerplate generator for Django REST Framework projects
//!
//! Models opt in to scaffolding through metadata declared in a project
//! manifest (`scaffold.toml`) or registered programmatically. For every opted-in
//! model the generator writes:
//! - a viewset module exposing the enabled operations
//! - a serializer module, when requested
//! - a route table per application registering every viewset
//!
//! Existing files are never overwritten, so running the generator again
//! only fills in what is missing.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use drf_scaffold::config::DEFAULT_SETTINGS_FILE;
//! use drf_scaffold::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! fn main() -> anyhow::Result<()> {
//!     let root = PathBuf::from(".");
//!     let config = ScaffoldConfig::load(&root, Path::new(DEFAULT_SETTINGS_FILE))?;
//!
//!     let mut registry = StaticRegistry::new(&root);
//!     registry.register_model(
//!         "polls",
//!         "Question",
//!         Some(ScaffoldMetadata::api().with_serializer(None)),
//!     );
//!
//!     let report = ScaffoldGenerator::new(registry, config, root)?.run(&[])?;
//!     println!("{} files written", report.written_count());
//!     Ok(())
//! }
//! ```

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod registry;
pub mod scaffold;

pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use drf_scaffold::prelude::*;
    //! ```

    pub use crate::config::{DrfSettings, ScaffoldConfig};
    pub use crate::error::{Result, ScaffoldError};
    pub use crate::registry::{
        AppRegistry, ModelHandle, ModuleHandle, Operation, ScaffoldMetadata, StaticRegistry,
    };
    pub use crate::scaffold::{GenerationReport, ScaffoldGenerator};
}
