//! REST API scaffold generator implementation
//!
//! Turns the scaffolding metadata attached to registered models into
//! serializer modules, viewset modules and one route table per application.
//! Generation only ever adds files: anything already on disk is left as is.

pub mod generator;
pub mod helpers;
pub mod model_config;
pub mod planner;
pub mod resolver;
pub mod templates;
pub mod writer;

pub use generator::{GenerationReport, Phase, ScaffoldGenerator};
pub use helpers::TemplateHelpers;
pub use model_config::ModelConfig;
pub use planner::Advisory;
pub use resolver::{AppResolver, ModuleTarget};
pub use templates::{ArtifactKind, TemplateRegistry};
pub use writer::{FileWriter, GeneratedArtifact, WriteOutcome};
