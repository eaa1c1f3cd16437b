//! Target application resolution
//!
//! Turns the labels given on the command line (or, when none are given, the
//! configured local apps / the registry's apps minus the deny-list) into
//! [`ModuleTarget`]s. Resolution is all-or-nothing: one unknown label aborts
//! the run before anything is written.

use std::path::PathBuf;

use super::model_config::ModelConfig;
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::registry::AppRegistry;

/// Directory receiving generated viewsets, relative to the module root
pub const VIEWSETS_DIR: &str = "viewsets";

/// Directory receiving generated serializers, relative to the module root
pub const SERIALIZERS_DIR: &str = "serializers";

/// A resolved application and its eligible models
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTarget {
    /// Application root
    pub path: PathBuf,
    /// Application label
    pub label: String,
    /// Output directory for resource endpoints
    pub viewset_dir: PathBuf,
    /// Output directory for serializers
    pub serializer_dir: PathBuf,
    /// Eligible models, in registry order
    pub eligible_models: Vec<ModelConfig>,
    /// API version used in route prefixes
    pub api_version: String,
}

impl ModuleTarget {
    /// Build a target rooted at `path`
    pub fn new(
        label: impl Into<String>,
        path: impl Into<PathBuf>,
        eligible_models: Vec<ModelConfig>,
        api_version: impl Into<String>,
    ) -> Self {
        let path = path.into();
        Self {
            viewset_dir: path.join(VIEWSETS_DIR),
            serializer_dir: path.join(SERIALIZERS_DIR),
            path,
            label: label.into(),
            eligible_models,
            api_version: api_version.into(),
        }
    }
}

/// Resolves application labels against a registry
pub struct AppResolver<'a, R: AppRegistry + ?Sized> {
    registry: &'a R,
    config: &'a ScaffoldConfig,
}

impl<'a, R: AppRegistry + ?Sized> AppResolver<'a, R> {
    /// Create a resolver
    pub const fn new(registry: &'a R, config: &'a ScaffoldConfig) -> Self {
        Self { registry, config }
    }

    /// Candidate labels for a run
    ///
    /// Explicit labels win (de-duplicated, first occurrence kept). Without
    /// them the configured local apps are used as-is, falling back to the
    /// registry's apps minus `exclude_apps`.
    #[must_use]
    pub fn candidate_labels(&self, requested: &[String]) -> Vec<String> {
        if !requested.is_empty() {
            return dedup(requested.iter().cloned());
        }

        if let Some(local) = self.config.local_app_labels() {
            tracing::debug!(?local, "using configured local apps");
            return dedup(local);
        }

        let excluded = &self.config.drf.exclude_apps;
        dedup(
            self.registry
                .list_registered_modules()
                .into_iter()
                .filter(|label| !excluded.contains(label)),
        )
    }

    /// Resolve the requested labels into targets
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::AppsNotFound`] listing every unknown label
    /// - [`ScaffoldError::NoApps`] when nothing is left to generate for
    pub fn resolve(&self, requested: &[String]) -> Result<Vec<ModuleTarget>> {
        let mut targets = Vec::new();
        let mut missing = Vec::new();

        for label in self.candidate_labels(requested) {
            let Some(module) = self.registry.resolve_module(&label) else {
                missing.push(label);
                continue;
            };

            let models = ModelConfig::extract_all(&self.registry.list_models(&module));
            tracing::debug!(
                app = %label,
                path = %module.path.display(),
                eligible = models.len(),
                "resolved app"
            );
            targets.push(ModuleTarget::new(
                module.label,
                module.path,
                models,
                self.config.drf.version.clone(),
            ));
        }

        if !missing.is_empty() {
            return Err(ScaffoldError::AppsNotFound { labels: missing });
        }

        if targets.is_empty() {
            return Err(ScaffoldError::NoApps);
        }

        Ok(targets)
    }
}

fn dedup(labels: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for label in labels {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ScaffoldMetadata, StaticRegistry};
    use proptest::prelude::*;

    fn registry() -> StaticRegistry {
        let mut registry = StaticRegistry::new("/srv/mysite");
        registry
            .register_model("auth", "User", Some(ScaffoldMetadata::api()))
            .register_model("polls", "Question", Some(ScaffoldMetadata::api()))
            .register_model("polls", "Choice", None)
            .register_model("blog", "Post", None)
            .register_app("shop", "shop");
        registry
    }

    fn labels(targets: &[ModuleTarget]) -> Vec<&str> {
        targets.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn test_explicit_labels_are_deduplicated() {
        let config = ScaffoldConfig::default();
        let registry = registry();
        let resolver = AppResolver::new(&registry, &config);
        let requested = vec!["polls".to_string(), "blog".to_string(), "polls".to_string()];
        assert_eq!(resolver.candidate_labels(&requested), vec!["polls", "blog"]);
    }

    #[test]
    fn test_explicit_labels_ignore_deny_list() {
        let config = ScaffoldConfig::default();
        let registry = registry();
        let targets = AppResolver::new(&registry, &config)
            .resolve(&["auth".to_string()])
            .unwrap();
        assert_eq!(labels(&targets), vec!["auth"]);
    }

    #[test]
    fn test_local_apps_win_over_registry() {
        let config = ScaffoldConfig {
            local_apps: Some(vec!["mysite.polls".to_string(), "blog".to_string()]),
            ..ScaffoldConfig::default()
        };
        let registry = registry();
        let targets = AppResolver::new(&registry, &config).resolve(&[]).unwrap();
        assert_eq!(labels(&targets), vec!["polls", "blog"]);
    }

    #[test]
    fn test_local_apps_ignore_deny_list() {
        let mut config = ScaffoldConfig {
            local_apps: Some(vec!["polls".to_string(), "blog".to_string()]),
            ..ScaffoldConfig::default()
        };
        config.drf.exclude_apps = vec!["polls".to_string(), "blog".to_string()];
        let registry = registry();
        let resolver = AppResolver::new(&registry, &config);
        assert_eq!(resolver.candidate_labels(&[]), vec!["polls", "blog"]);
    }

    #[test]
    fn test_registry_discovery_applies_deny_list() {
        let config = ScaffoldConfig::default();
        let registry = registry();
        let resolver = AppResolver::new(&registry, &config);
        // auth is excluded by default, shop has no models
        assert_eq!(resolver.candidate_labels(&[]), vec!["polls", "blog"]);
    }

    #[test]
    fn test_unknown_labels_fail_together() {
        let config = ScaffoldConfig::default();
        let registry = registry();
        let requested = vec!["ghost".to_string(), "polls".to_string(), "phantom".to_string()];
        let err = AppResolver::new(&registry, &config)
            .resolve(&requested)
            .unwrap_err();
        match err {
            ScaffoldError::AppsNotFound { labels } => assert_eq!(labels, vec!["ghost", "phantom"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_resolution_is_an_error() {
        let mut config = ScaffoldConfig::default();
        config.drf.exclude_apps = vec!["auth".into(), "polls".into(), "blog".into()];
        let registry = registry();
        let err = AppResolver::new(&registry, &config).resolve(&[]).unwrap_err();
        assert!(matches!(err, ScaffoldError::NoApps));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_target_layout() {
        let config = ScaffoldConfig::default();
        let registry = registry();
        let targets = AppResolver::new(&registry, &config)
            .resolve(&["polls".to_string()])
            .unwrap();
        let polls = &targets[0];
        assert_eq!(polls.path, PathBuf::from("/srv/mysite/polls"));
        assert_eq!(polls.viewset_dir, PathBuf::from("/srv/mysite/polls/viewsets"));
        assert_eq!(polls.serializer_dir, PathBuf::from("/srv/mysite/polls/serializers"));
        assert_eq!(polls.api_version, "v1");
        assert_eq!(polls.eligible_models.len(), 1);
        assert_eq!(polls.eligible_models[0].name, "Question");
    }

    proptest! {
        #[test]
        fn prop_candidates_are_unique_and_ordered(requested in prop::collection::vec("[a-c]{1,2}", 1..12)) {
            let config = ScaffoldConfig::default();
            let registry = registry();
            let candidates = AppResolver::new(&registry, &config).candidate_labels(&requested);

            for (i, label) in candidates.iter().enumerate() {
                prop_assert!(!candidates[i + 1..].contains(label));
                prop_assert!(requested.contains(label));
            }
            for label in &requested {
                prop_assert!(candidates.contains(label));
            }
            let first_seen: Vec<_> = requested
                .iter()
                .enumerate()
                .filter(|(i, l)| !requested[..*i].contains(l))
                .map(|(_, l)| l.clone())
                .collect();
            prop_assert_eq!(candidates, first_seen);
        }
    }
}
