// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Initialization orchestrator.
//!
//! Drives validate -> resolve -> construct -> log -> store for every manifest
//! entry in declaration order, then auto-loads the built-in time-sync plugin
//! when the context carries a top-level `time-sync` block. Fail-fast: the
//! first error aborts the whole call and no partial registry escapes.

use fluxion_core::FluxionError;

use crate::factory;
use crate::loader::{ModuleLoader, StaticModuleLoader};
use crate::logger::{ActivationLogger, MemoLogger};
use crate::manifest::Context;
use crate::registry::PluginRegistry;
use crate::resolver::{self, BUILTIN_PATH};

/// Fixed registry name of the auto-loaded time-sync plugin.
pub const TIME_SYNC_PLUGIN_NAME: &str = "time-sync";

/// Built-in factory export constructing the time-sync plugin.
const TIME_SYNC_METHOD: &str = "TimeSync";

/// Orchestrates manifest-driven plugin initialization over a module loader
/// and an activation logger.
pub struct Initializer<'a> {
    loader: &'a dyn ModuleLoader,
    logger: &'a dyn ActivationLogger,
}

impl<'a> Initializer<'a> {
    /// Create an initializer over the given collaborators.
    pub fn new(loader: &'a dyn ModuleLoader, logger: &'a dyn ActivationLogger) -> Self {
        Self { loader, logger }
    }

    /// Build the plugin registry for `context`.
    ///
    /// Entries are processed strictly sequentially in manifest order. One
    /// activation log is requested per successfully constructed
    /// manifest-declared plugin. The time-sync auto-loader runs after the
    /// loop, so it has final say over the `"time-sync"` slot; it does not
    /// emit the activation log since it bypasses the manifest.
    pub async fn initialize(&self, context: &Context) -> Result<PluginRegistry, FluxionError> {
        let mut registry = PluginRegistry::new();

        for (name, entry) in context.initialize.plugins.iter() {
            let (path, method) = entry.validated()?;
            let module = resolver::resolve(self.loader, path).await?;
            let instance = factory::construct(&module, method, entry.global_config.as_ref(), path)?;
            self.logger.record(&format!("initializing plugin '{name}'"));
            registry.set(name, instance);
        }

        if let Some(time_sync) = &context.time_sync {
            let module = resolver::resolve(self.loader, BUILTIN_PATH).await?;
            let instance =
                factory::construct(&module, TIME_SYNC_METHOD, Some(time_sync), BUILTIN_PATH)?;
            registry.set(TIME_SYNC_PLUGIN_NAME, instance);
        }

        Ok(registry)
    }
}

/// Initialize with the default collaborators: the static module loader (only
/// the built-in set available) and the memoizing tracing logger.
pub async fn initialize(context: &Context) -> Result<PluginRegistry, FluxionError> {
    let loader = StaticModuleLoader::new();
    let logger = MemoLogger::new();
    Initializer::new(&loader, &logger).initialize(context).await
}
