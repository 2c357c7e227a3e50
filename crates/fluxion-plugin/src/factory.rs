// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Factory invocation: turning a resolved module and a method name into a
//! plugin instance.

use std::sync::Arc;

use fluxion_core::{FluxionError, GlobalConfig, PluginInstance, PluginModule};

/// Look up the named factory export on `module` and invoke it with the
/// entry's configuration, or an empty one if none was supplied.
///
/// A missing export is a resolution-time failure: construction cannot proceed
/// without it, so it surfaces as [`FluxionError::PluginInitialization`] for
/// the original `path`. The returned instance is not shape-checked beyond the
/// [`PluginInstance`] contract.
pub fn construct(
    module: &PluginModule,
    method: &str,
    config: Option<&GlobalConfig>,
    path: &str,
) -> Result<Arc<dyn PluginInstance>, FluxionError> {
    let factory = module
        .export(method)
        .ok_or_else(|| FluxionError::PluginInitialization {
            path: path.to_string(),
            message: format!("module does not export method '{method}'"),
        })?;

    let empty = GlobalConfig::new();
    factory.create(config.unwrap_or(&empty))
}
