// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of constructed plugin instances.
//!
//! The registry is a plain, single-owner container: built by the initializer,
//! then handed to the caller as the result of initialization. It never
//! errors; `get` on an unknown name is simply `None`.

use std::collections::HashMap;
use std::sync::Arc;

use fluxion_core::PluginInstance;

/// Insertion-ordered, name-keyed store of plugin instances.
#[derive(Default)]
pub struct PluginRegistry {
    order: Vec<String>,
    instances: HashMap<String, Arc<dyn PluginInstance>>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.order)
            .finish()
    }
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the instance for `name`. Last write wins; the
    /// first-insertion position is kept for ordered iteration.
    pub fn set(&mut self, name: impl Into<String>, instance: Arc<dyn PluginInstance>) {
        let name = name.into();
        if !self.instances.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.instances.insert(name, instance);
    }

    /// Look up the instance stored under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<dyn PluginInstance>> {
        self.instances.get(name).cloned()
    }

    /// Plugin names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
