// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin capability traits and the module export table.
//!
//! A plugin instance is anything exposing `metadata` and an async `execute`.
//! Instances are produced by a [`PluginFactory`] looked up by name on a
//! [`PluginModule`], the loaded form of a plugin source.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FluxionError;
use crate::types::{GlobalConfig, PluginMetadata, PluginParams};

/// The capability contract every constructed plugin satisfies.
///
/// The internal shape of a plugin beyond these two members is opaque to the
/// framework; a malformed implementation is the plugin author's concern.
#[async_trait]
pub trait PluginInstance: Send + Sync + 'static {
    /// Returns the plugin's descriptor.
    fn metadata(&self) -> &PluginMetadata;

    /// Transforms a batch of input records into a batch of output records.
    async fn execute(&self, inputs: Vec<PluginParams>) -> Result<Vec<PluginParams>, FluxionError>;
}

impl std::fmt::Debug for dyn PluginInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginInstance")
            .field("metadata", self.metadata())
            .finish()
    }
}

/// Factory for constructing plugin instances from a global config block.
pub trait PluginFactory: Send + Sync {
    /// Create a new plugin instance. `config` is the manifest entry's
    /// `global-config`, or an empty map when none was supplied.
    fn create(&self, config: &GlobalConfig) -> Result<Arc<dyn PluginInstance>, FluxionError>;
}

/// Adapter letting plain functions and closures act as factories.
struct FnFactory<F>(F);

impl<F> PluginFactory for FnFactory<F>
where
    F: Fn(&GlobalConfig) -> Result<Arc<dyn PluginInstance>, FluxionError> + Send + Sync,
{
    fn create(&self, config: &GlobalConfig) -> Result<Arc<dyn PluginInstance>, FluxionError> {
        (self.0)(config)
    }
}

/// A loaded plugin module: a table of named factory exports.
///
/// This is what source resolution produces, whatever the source kind was
/// (built-in set, installed package, remote-hosted source, local path).
#[derive(Clone, Default)]
pub struct PluginModule {
    exports: HashMap<String, Arc<dyn PluginFactory>>,
}

impl std::fmt::Debug for PluginModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginModule")
            .field("exports", &self.export_names())
            .finish()
    }
}

impl PluginModule {
    /// Create a module with no exports.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named factory export.
    pub fn with_export(
        mut self,
        name: impl Into<String>,
        factory: Arc<dyn PluginFactory>,
    ) -> Self {
        self.exports.insert(name.into(), factory);
        self
    }

    /// Add a named export backed by a plain function or closure.
    pub fn with_fn_export<F>(self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&GlobalConfig) -> Result<Arc<dyn PluginInstance>, FluxionError>
            + Send
            + Sync
            + 'static,
    {
        self.with_export(name, Arc::new(FnFactory(factory)))
    }

    /// Look up a factory export by name.
    pub fn export(&self, name: &str) -> Option<Arc<dyn PluginFactory>> {
        self.exports.get(name).cloned()
    }

    /// Names of all exports, sorted for stable reporting.
    pub fn export_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.exports.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of exports.
    pub fn len(&self) -> usize {
        self.exports.len()
    }

    /// Returns true if the module has no exports.
    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}
