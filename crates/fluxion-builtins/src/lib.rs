// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugins bundled with the Fluxion pipeline framework.
//!
//! These plugins are always available through the `"builtin"` sentinel path
//! in a plugin manifest, without any package installation:
//! - [`Sum`] -- add numeric fields into one output field
//! - [`Multiply`] -- multiply numeric fields into one output field
//! - [`Coefficient`] -- scale one field by a constant
//! - [`TimeSync`] -- align records to a time window

pub mod coefficient;
pub mod multiply;
pub mod sum;
pub mod time_sync;

pub use coefficient::Coefficient;
pub use multiply::Multiply;
pub use sum::Sum;
pub use time_sync::TimeSync;

use std::sync::Arc;

use fluxion_core::{PluginInstance, PluginModule};

/// The closed set of built-in plugin factories, keyed by method name.
pub fn module() -> PluginModule {
    PluginModule::new()
        .with_fn_export("Sum", |config| {
            Ok(Arc::new(Sum::from_config(config)?) as Arc<dyn PluginInstance>)
        })
        .with_fn_export("Multiply", |config| {
            Ok(Arc::new(Multiply::from_config(config)?) as Arc<dyn PluginInstance>)
        })
        .with_fn_export("Coefficient", |config| {
            Ok(Arc::new(Coefficient::from_config(config)?) as Arc<dyn PluginInstance>)
        })
        .with_fn_export("TimeSync", |config| {
            Ok(Arc::new(TimeSync::from_config(config)?) as Arc<dyn PluginInstance>)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_exports_exactly_4_builtins() {
        let module = module();
        assert_eq!(module.len(), 4);
        assert_eq!(
            module.export_names(),
            vec!["Coefficient", "Multiply", "Sum", "TimeSync"]
        );
    }

    #[test]
    fn builtin_factories_reject_empty_config() {
        // Every builtin requires config keys; an empty block must fail with
        // a typed config error, not panic.
        let module = module();
        for name in module.export_names() {
            let factory = module.export(name).unwrap();
            let result = factory.create(&fluxion_core::GlobalConfig::new());
            assert!(result.is_err(), "builtin '{name}' accepted empty config");
        }
    }
}
