//! The layered fallback chain for workflows and client configurations.
//!
//! Each resolution call walks its tiers in order and short-circuits on the
//! first success: bundled resource, builtin table, key-value storage,
//! hardcoded default. Fetch failures and parse failures are deliberately
//! indistinguishable in the control flow; every tier transition is logged and
//! no error escapes the public entry points.
//!
//! Calls are strictly sequential and independent: no state is shared between
//! them, and each returns a freshly constructed value. There is no timeout on
//! the bundle fetch; a hung fetch blocks that call.

use std::sync::Arc;

use crate::config::{overlay, template, ClientConfig, RuntimeValues};
use crate::constants::{CONFIG_BUNDLE_DIR, WORKFLOW_BUNDLE_DIR, WORKFLOW_STORAGE_PREFIX};
use crate::error::ResolveResult;
use crate::host::{KeyValueStore, ResourceBundle};
use crate::resolved::{Resolved, Source};
use crate::workflow::{builtin, WorkflowDefinition};

/// Resolves workflows and client configurations through the fallback chain.
///
/// Tiers are optional: a resolver without a bundle or store simply skips those
/// tiers, which is indistinguishable from the tier failing.
#[derive(Default)]
pub struct ContextResolver {
    bundle: Option<Arc<dyn ResourceBundle>>,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl ContextResolver {
    /// Resolver with only the embedded tiers (builtin table and defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a resource bundle as the first tier.
    pub fn with_bundle(mut self, bundle: Arc<dyn ResourceBundle>) -> Self {
        self.bundle = Some(bundle);
        self
    }

    /// Attach a key-value store as the storage tier.
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Resolve a workflow definition by name.
    ///
    /// Fails open: every tier degrades to the next, and an unknown name yields
    /// `None` rather than an error.
    pub async fn resolve_workflow(&self, name: &str) -> Option<Resolved<WorkflowDefinition>> {
        // Tier 1: bundled file.
        if let Some(bundle) = &self.bundle {
            let path = format!("{WORKFLOW_BUNDLE_DIR}/{name}.yaml");
            match self.fetch_workflow(bundle, &path).await {
                Ok(definition) => {
                    tracing::info!(
                        workflow = name,
                        location = %bundle.locate(&path),
                        "loaded workflow from bundle"
                    );
                    return Some(Resolved::new(definition, Source::Bundle));
                }
                Err(err) => {
                    tracing::debug!(
                        workflow = name,
                        error = %err,
                        "bundle tier failed, trying builtin table"
                    );
                }
            }
        }

        // Tier 2: builtin table embedded in the binary.
        if let Some(source) = builtin::builtin_workflow_source(name) {
            match serde_yaml::from_str(source) {
                Ok(definition) => {
                    tracing::info!(workflow = name, "loaded workflow from builtin table");
                    return Some(Resolved::new(definition, Source::Builtin));
                }
                Err(err) => {
                    tracing::warn!(
                        workflow = name,
                        error = %err,
                        "builtin workflow failed to parse, trying storage"
                    );
                }
            }
        }

        // Tier 3: persistent key-value store.
        if let Some(store) = &self.store {
            let key = format!("{WORKFLOW_STORAGE_PREFIX}{name}");
            match store.get(&key).await {
                Ok(Some(raw)) => match serde_yaml::from_str(&raw) {
                    Ok(definition) => {
                        tracing::info!(workflow = name, "loaded workflow from storage");
                        return Some(Resolved::new(definition, Source::Storage));
                    }
                    Err(err) => {
                        tracing::warn!(
                            workflow = name,
                            error = %err,
                            "stored workflow failed to parse, using hardcoded default"
                        );
                    }
                },
                Ok(None) => {
                    tracing::debug!(workflow = name, "no stored workflow");
                }
                Err(err) => {
                    tracing::debug!(
                        workflow = name,
                        error = %err,
                        "storage tier failed, using hardcoded default"
                    );
                }
            }
        }

        // Tier 4: hardcoded default, absent for unknown names.
        match builtin::fallback_workflow(name) {
            Some(definition) => {
                tracing::info!(workflow = name, "using hardcoded default workflow");
                Some(Resolved::new(definition, Source::Default))
            }
            None => {
                tracing::info!(workflow = name, "unknown workflow");
                None
            }
        }
    }

    /// Resolve a client configuration by name, merging in runtime values.
    ///
    /// Fails open through the default-template tier; `None` only if that tier
    /// itself cannot produce a configuration.
    pub async fn resolve_client_config(
        &self,
        name: &str,
        runtime: &RuntimeValues,
    ) -> Option<Resolved<ClientConfig>> {
        if let Some(bundle) = &self.bundle {
            let path = format!("{CONFIG_BUNDLE_DIR}/{name}.json");
            match self.fetch_config(bundle, &path).await {
                Ok(config) => {
                    tracing::info!(
                        config = name,
                        location = %bundle.locate(&path),
                        "loaded config from bundle"
                    );
                    let merged = overlay::apply(config, runtime);
                    return Some(Resolved::new(merged, Source::Bundle));
                }
                Err(err) => {
                    tracing::debug!(
                        config = name,
                        error = %err,
                        "bundle tier failed, using default template"
                    );
                }
            }
        }

        let passcode = runtime
            .passcode
            .clone()
            .unwrap_or_else(crate::config::generate_passcode);
        let config = template::default_client_config(&passcode);
        let merged = overlay::apply(config, runtime);

        match merged.validate() {
            Ok(()) => {
                tracing::info!(config = name, "using default config template");
                Some(Resolved::new(merged, Source::Default))
            }
            Err(err) => {
                // Fails closed: no further tier behind the default template.
                tracing::warn!(config = name, error = %err, "default config tier failed");
                None
            }
        }
    }

    /// Workflow names available from the bundle and the builtin table.
    pub async fn list_workflows(&self) -> Vec<String> {
        let mut names = builtin::builtin_workflow_names();

        if let Some(bundle) = &self.bundle {
            match bundle.list(WORKFLOW_BUNDLE_DIR).await {
                Ok(bundled) => names.extend(bundled),
                Err(err) => {
                    tracing::debug!(error = %err, "could not list bundled workflows");
                }
            }
        }

        names.sort();
        names.dedup();
        names
    }

    async fn fetch_workflow(
        &self,
        bundle: &Arc<dyn ResourceBundle>,
        path: &str,
    ) -> ResolveResult<WorkflowDefinition> {
        let raw = bundle.fetch(path).await?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    async fn fetch_config(
        &self,
        bundle: &Arc<dyn ResourceBundle>,
        path: &str,
    ) -> ResolveResult<ClientConfig> {
        let raw = bundle.fetch(path).await?;
        let config: ClientConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}
