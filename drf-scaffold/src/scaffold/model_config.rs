//! Normalized per-model scaffolding configuration
//!
//! [`ModelConfig::extract`] turns the optional metadata attached to a model
//! into the fixed shape the generator works with. Only models whose
//! `api.scaffolding` flag is explicitly `true` produce a config; every other
//! flag defaults closed.

use serde_json::json;
use std::collections::BTreeSet;

use super::helpers::TemplateHelpers;
use crate::registry::{ModelHandle, Operation};

/// Scaffolding configuration for one eligible model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Model class name
    pub name: String,
    /// Operations exposed by the generated viewset
    pub enabled_operations: BTreeSet<Operation>,
    /// Whether a serializer module is generated
    pub serializer_enabled: bool,
    /// Explicit serializer fields; `None` means all fields
    pub serializer_fields: Option<Vec<String>>,
}

impl ModelConfig {
    /// Extract the config of an eligible model
    ///
    /// Returns `None` when the model has no metadata, no `api` section, or
    /// its scaffolding flag is not set.
    #[must_use]
    pub fn extract(model: &ModelHandle) -> Option<Self> {
        let api = model.metadata.as_ref()?.api.as_ref()?;
        if !api.scaffolding {
            tracing::trace!(model = %model.name, "scaffolding disabled");
            return None;
        }

        let enabled_operations: BTreeSet<Operation> = api
            .methods
            .as_ref()
            .map_or_else(|| Operation::ALL.into_iter().collect(), |m| m.iter().copied().collect());

        let serializer = api.serializer.as_ref().filter(|s| s.scaffolding);
        let serializer_fields = serializer.and_then(|s| s.fields.clone());

        Some(Self {
            name: model.name.clone(),
            enabled_operations,
            serializer_enabled: serializer.is_some(),
            serializer_fields,
        })
    }

    /// Configs of every eligible model, keeping registry order
    #[must_use]
    pub fn extract_all(models: &[ModelHandle]) -> Vec<Self> {
        models.iter().filter_map(Self::extract).collect()
    }

    /// File stem of the generated modules
    #[must_use]
    pub fn file_stem(&self) -> String {
        TemplateHelpers::to_file_stem(&self.name)
    }

    /// Whether every operation is enabled
    #[must_use]
    pub fn is_full_crud(&self) -> bool {
        self.enabled_operations.len() == Operation::ALL.len()
    }

    /// Names the generated viewset module imports from `rest_framework`
    ///
    /// `mixins` only when the viewset composes at least one mixin, and
    /// `serializers` only when the serializer is defined inline.
    #[must_use]
    pub fn rest_imports(&self) -> Vec<&'static str> {
        let mut imports = Vec::with_capacity(3);
        if !self.is_full_crud() && !self.enabled_operations.is_empty() {
            imports.push("mixins");
        }
        if !self.serializer_enabled {
            imports.push("serializers");
        }
        imports.push("viewsets");
        imports
    }

    /// Template variables describing this model
    #[must_use]
    pub fn template_metadata(&self) -> serde_json::Value {
        let operations: Vec<_> = self.enabled_operations.iter().map(|op| op.as_str()).collect();
        let mixins: Vec<_> = self.enabled_operations.iter().map(|op| op.mixin()).collect();

        json!({
            "name": self.name,
            "file_stem": self.file_stem(),
            "title": TemplateHelpers::to_title(&self.name),
            "route_segment": TemplateHelpers::to_route_segment(&self.name),
            "operations": operations,
            "mixins": mixins,
            "full_crud": self.is_full_crud(),
            "rest_imports": self.rest_imports().join(", "),
            "serializer": self.serializer_enabled,
            "fields": self.serializer_fields,
            "fields_literal": TemplateHelpers::to_fields_literal(self.serializer_fields.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ApiMetadata, ScaffoldMetadata, SerializerMetadata};

    fn model(metadata: Option<ScaffoldMetadata>) -> ModelHandle {
        ModelHandle {
            name: "Question".to_string(),
            metadata,
        }
    }

    #[test]
    fn test_model_without_metadata_is_excluded() {
        assert!(ModelConfig::extract(&model(None)).is_none());
        assert!(ModelConfig::extract(&model(Some(ScaffoldMetadata::default()))).is_none());
    }

    #[test]
    fn test_disabled_flag_is_excluded() {
        let meta = ScaffoldMetadata {
            api: Some(ApiMetadata {
                scaffolding: false,
                methods: Some(vec![Operation::List]),
                serializer: Some(SerializerMetadata {
                    scaffolding: true,
                    fields: None,
                }),
            }),
        };
        assert!(ModelConfig::extract(&model(Some(meta))).is_none());
    }

    #[test]
    fn test_defaults() {
        let config = ModelConfig::extract(&model(Some(ScaffoldMetadata::api()))).unwrap();
        assert_eq!(config.name, "Question");
        assert_eq!(config.enabled_operations.len(), 5);
        assert!(config.is_full_crud());
        assert!(!config.serializer_enabled);
        assert!(config.serializer_fields.is_none());
    }

    #[test]
    fn test_explicit_methods_override_defaults() {
        let meta = ScaffoldMetadata::api().with_methods([Operation::List, Operation::Retrieve]);
        let config = ModelConfig::extract(&model(Some(meta))).unwrap();
        assert_eq!(
            config.enabled_operations.into_iter().collect::<Vec<_>>(),
            vec![Operation::Retrieve, Operation::List]
        );
    }

    #[test]
    fn test_empty_methods_mean_no_operations() {
        let meta = ScaffoldMetadata::api().with_methods([]);
        let config = ModelConfig::extract(&model(Some(meta))).unwrap();
        assert!(config.enabled_operations.is_empty());
        assert!(!config.is_full_crud());
    }

    #[test]
    fn test_serializer_fields_only_when_enabled() {
        let enabled = ScaffoldMetadata::api().with_serializer(Some(vec!["id".to_string()]));
        let config = ModelConfig::extract(&model(Some(enabled))).unwrap();
        assert!(config.serializer_enabled);
        assert_eq!(config.serializer_fields, Some(vec!["id".to_string()]));

        let mut disabled = ScaffoldMetadata::api();
        disabled.api.as_mut().unwrap().serializer = Some(SerializerMetadata {
            scaffolding: false,
            fields: Some(vec!["id".to_string()]),
        });
        let config = ModelConfig::extract(&model(Some(disabled))).unwrap();
        assert!(!config.serializer_enabled);
        assert!(config.serializer_fields.is_none());
    }

    #[test]
    fn test_template_metadata() {
        let meta = ScaffoldMetadata::api()
            .with_methods([Operation::Create, Operation::List])
            .with_serializer(None);
        let config = ModelConfig::extract(&model(Some(meta))).unwrap();
        let metadata = config.template_metadata();

        assert_eq!(metadata["file_stem"], "question");
        assert_eq!(metadata["route_segment"], "questions");
        assert_eq!(metadata["full_crud"], false);
        assert_eq!(metadata["serializer"], true);
        assert_eq!(metadata["fields_literal"], "'__all__'");
        assert_eq!(
            metadata["mixins"],
            json!(["mixins.CreateModelMixin", "mixins.ListModelMixin"])
        );
    }

    #[test]
    fn test_rest_imports() {
        let full = ModelConfig::extract(&model(Some(ScaffoldMetadata::api().with_serializer(None))))
            .unwrap();
        assert_eq!(full.rest_imports(), vec!["viewsets"]);

        let partial = ModelConfig::extract(&model(Some(
            ScaffoldMetadata::api().with_methods([Operation::List]),
        )))
        .unwrap();
        assert_eq!(partial.rest_imports(), vec!["mixins", "serializers", "viewsets"]);

        let none = ModelConfig::extract(&model(Some(
            ScaffoldMetadata::api().with_methods([]).with_serializer(None),
        )))
        .unwrap();
        assert_eq!(none.rest_imports(), vec!["viewsets"]);
        assert_eq!(none.template_metadata()["rest_imports"], "viewsets");
    }

    #[test]
    fn test_extract_all_keeps_order() {
        let models = vec![
            ModelHandle {
                name: "Question".to_string(),
                metadata: Some(ScaffoldMetadata::api()),
            },
            ModelHandle {
                name: "Choice".to_string(),
                metadata: None,
            },
            ModelHandle {
                name: "Answer".to_string(),
                metadata: Some(ScaffoldMetadata::api()),
            },
        ];
        let names: Vec<_> = ModelConfig::extract_all(&models)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Question", "Answer"]);
    }
}
