//! CLI command implementations

pub mod createapi;

pub use createapi::CreateApiCommand;
