// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module loader collaborator.
//!
//! The resolver delegates the actual source-to-module step to a
//! [`ModuleLoader`]; this layer only consumes success (a module) or failure
//! (an error with a message) and treats any loader-side caching as an opaque,
//! idempotent lookup.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use fluxion_core::{FluxionError, PluginModule};

use crate::resolver::PluginSource;

/// Turns a classified plugin source into a loaded module.
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    /// Load the module for `source`, or fail with an error whose message
    /// identifies what could not be found.
    async fn load(&self, source: &PluginSource) -> Result<PluginModule, FluxionError>;
}

/// Loader backed by host-registered module tables.
///
/// The built-in set is always available. Package-manager modules and
/// local-path modules resolve against tables the host populates at startup;
/// remote references resolve through the package table under their
/// translated `owner/repo` reference once installed.
#[derive(Default)]
pub struct StaticModuleLoader {
    packages: HashMap<String, PluginModule>,
    locals: HashMap<PathBuf, PluginModule>,
}

impl StaticModuleLoader {
    /// Create a loader with only the built-in set available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an installed package-manager module under its name or
    /// translated remote reference.
    pub fn register_package(&mut self, name: impl Into<String>, module: PluginModule) {
        self.packages.insert(name.into(), module);
    }

    /// Register a module addressable by local path.
    pub fn register_local(&mut self, path: impl Into<PathBuf>, module: PluginModule) {
        self.locals.insert(path.into(), module);
    }
}

#[async_trait]
impl ModuleLoader for StaticModuleLoader {
    async fn load(&self, source: &PluginSource) -> Result<PluginModule, FluxionError> {
        match source {
            PluginSource::Builtin => Ok(fluxion_builtins::module()),
            PluginSource::Package(name) => self.packages.get(name).cloned().ok_or_else(|| {
                FluxionError::ModuleNotFound(format!("package '{name}' is not installed"))
            }),
            PluginSource::Remote(reference) => {
                self.packages.get(reference).cloned().ok_or_else(|| {
                    FluxionError::ModuleNotFound(format!(
                        "remote source '{reference}' is not installed"
                    ))
                })
            }
            PluginSource::Local(path) => self.locals.get(path).cloned().ok_or_else(|| {
                FluxionError::ModuleNotFound(format!(
                    "no module at local path '{}'",
                    path.display()
                ))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use fluxion_core::{PluginInstance, PluginMetadata, PluginParams};

    struct EchoPlugin {
        metadata: PluginMetadata,
    }

    #[async_trait]
    impl PluginInstance for EchoPlugin {
        fn metadata(&self) -> &PluginMetadata {
            &self.metadata
        }

        async fn execute(
            &self,
            inputs: Vec<PluginParams>,
        ) -> Result<Vec<PluginParams>, FluxionError> {
            Ok(inputs)
        }
    }

    fn echo_module() -> PluginModule {
        PluginModule::new().with_fn_export("Echo", |_config| {
            Ok(Arc::new(EchoPlugin {
                metadata: PluginMetadata::execute(),
            }) as Arc<dyn PluginInstance>)
        })
    }

    #[tokio::test]
    async fn builtin_source_loads_without_registration() {
        let loader = StaticModuleLoader::new();
        let module = loader.load(&PluginSource::Builtin).await.unwrap();
        assert_eq!(module.len(), 4);
    }

    #[tokio::test]
    async fn registered_package_loads_by_name() {
        let mut loader = StaticModuleLoader::new();
        loader.register_package("watt-meter", echo_module());

        let module = loader
            .load(&PluginSource::Package("watt-meter".to_string()))
            .await
            .unwrap();
        assert!(module.export("Echo").is_some());
    }

    #[tokio::test]
    async fn remote_reference_resolves_through_package_table() {
        let mut loader = StaticModuleLoader::new();
        loader.register_package("acme/watt-meter", echo_module());

        let module = loader
            .load(&PluginSource::Remote("acme/watt-meter".to_string()))
            .await
            .unwrap();
        assert!(module.export("Echo").is_some());
    }

    #[tokio::test]
    async fn unregistered_sources_fail_with_module_not_found() {
        let loader = StaticModuleLoader::new();

        let err = loader
            .load(&PluginSource::Package("ghost".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, FluxionError::ModuleNotFound(_)));
        assert!(err.to_string().contains("ghost"));

        let err = loader
            .load(&PluginSource::Local(PathBuf::from("./ghost")))
            .await
            .unwrap_err();
        assert!(matches!(err, FluxionError::ModuleNotFound(_)));
    }

    #[tokio::test]
    async fn local_path_loads_registered_module() {
        let mut loader = StaticModuleLoader::new();
        loader.register_local("./plugins/echo", echo_module());

        let module = loader
            .load(&PluginSource::Local(PathBuf::from("./plugins/echo")))
            .await
            .unwrap();
        assert!(module.export("Echo").is_some());
    }
}
