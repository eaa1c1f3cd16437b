//! Declarative scaffolding metadata attached to a model at registration time
//!
//! Mirrors the nested structure
//! `{ api: { scaffolding, methods?, serializer?: { scaffolding, fields? } } }`.
//! Every flag defaults to `false` so missing keys never opt a model in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operation exposed by a generated resource endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    /// Create a new instance
    #[serde(alias = "create")]
    Create,
    /// Fetch a single instance
    #[serde(alias = "retrieve")]
    Retrieve,
    /// List instances
    #[serde(alias = "list")]
    List,
    /// Delete an instance
    #[serde(alias = "delete")]
    Delete,
    /// Update an instance
    #[serde(alias = "update")]
    Update,
}

impl Operation {
    /// All operations, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Retrieve,
        Self::List,
        Self::Delete,
        Self::Update,
    ];

    /// Upper-case metadata name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Retrieve => "RETRIEVE",
            Self::List => "LIST",
            Self::Delete => "DELETE",
            Self::Update => "UPDATE",
        }
    }

    /// Mixin class implementing the operation in the generated viewset
    #[must_use]
    pub const fn mixin(self) -> &'static str {
        match self {
            Self::Create => "mixins.CreateModelMixin",
            Self::Retrieve => "mixins.RetrieveModelMixin",
            Self::List => "mixins.ListModelMixin",
            Self::Delete => "mixins.DestroyModelMixin",
            Self::Update => "mixins.UpdateModelMixin",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown operation: '{s}'"))
    }
}

/// Serializer section of the metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerMetadata {
    /// Generate a serializer file for the model
    pub scaffolding: bool,
    /// Explicit serializer fields; `None` means all fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// API section of the metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMetadata {
    /// Opt-in flag for API generation
    pub scaffolding: bool,
    /// Enabled operations; `None` means all of them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<Operation>>,
    /// Serializer settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serializer: Option<SerializerMetadata>,
}

/// Scaffolding metadata for a single model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldMetadata {
    /// API generation settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiMetadata>,
}

impl ScaffoldMetadata {
    /// Metadata opting a model into endpoint generation with default operations
    #[must_use]
    pub fn api() -> Self {
        Self {
            api: Some(ApiMetadata {
                scaffolding: true,
                ..ApiMetadata::default()
            }),
        }
    }

    /// Restrict the generated operations
    #[must_use]
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = Operation>) -> Self {
        self.api_mut().methods = Some(methods.into_iter().collect());
        self
    }

    /// Enable serializer generation, optionally limited to `fields`
    #[must_use]
    pub fn with_serializer(mut self, fields: Option<Vec<String>>) -> Self {
        self.api_mut().serializer = Some(SerializerMetadata {
            scaffolding: true,
            fields,
        });
        self
    }

    fn api_mut(&mut self) -> &mut ApiMetadata {
        self.api.get_or_insert_with(ApiMetadata::default)
    }
}
