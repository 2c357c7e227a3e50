// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin resolution and instantiation for the Fluxion pipeline framework.
//!
//! Given a declarative manifest of plugin references, [`initialize`] produces
//! a ready-to-use [`PluginRegistry`] of constructed instances. Sources of
//! four kinds resolve uniformly: the built-in set (`"builtin"` sentinel),
//! installed package-manager modules, remote version-control-hosted sources,
//! and local paths. A top-level `time-sync` context block auto-activates the
//! built-in time-alignment plugin without a manifest entry.

pub mod factory;
pub mod initialize;
pub mod loader;
pub mod logger;
pub mod manifest;
pub mod registry;
pub mod resolver;

pub use initialize::{initialize, Initializer, TIME_SYNC_PLUGIN_NAME};
pub use loader::{ModuleLoader, StaticModuleLoader};
pub use logger::{ActivationLogger, MemoLogger};
pub use manifest::{Context, InitializeSection, PluginManifest, PluginManifestEntry};
pub use registry::PluginRegistry;
pub use resolver::{PluginSource, BUILTIN_PATH};
