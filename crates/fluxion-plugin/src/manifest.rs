// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest model and per-entry validation.
//!
//! The manifest maps plugin names to source declarations. Declaration order
//! is preserved so registration and activation logging are deterministic.

use fluxion_core::{FluxionError, GlobalConfig};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One named plugin declaration: a source path, a factory method name, and
/// optional configuration passed through unmodified.
///
/// `path` and `method` stay optional at the model level so their absence is
/// a validation error with a fixed message rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginManifestEntry {
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub method: Option<String>,

    #[serde(default, rename = "global-config", skip_serializing_if = "Option::is_none")]
    pub global_config: Option<GlobalConfig>,
}

impl PluginManifestEntry {
    /// Validate the entry, returning `(path, method)`.
    ///
    /// Path is checked strictly before method, so an entry missing both
    /// yields the path error. Empty strings count as missing.
    pub fn validated(&self) -> Result<(&str, &str), FluxionError> {
        let path = self
            .path
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(FluxionError::MissingPluginPath)?;
        let method = self
            .method
            .as_deref()
            .filter(|m| !m.is_empty())
            .ok_or(FluxionError::MissingPluginMethod)?;
        Ok((path, method))
    }
}

/// Insertion-ordered mapping from plugin name to manifest entry.
///
/// Names are unique; re-inserting a name replaces its entry in place, keeping
/// the first-insertion position.
#[derive(Debug, Clone, Default)]
pub struct PluginManifest {
    entries: Vec<(String, PluginManifestEntry)>,
}

impl PluginManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, entry: PluginManifestEntry) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing_entry)) => *existing_entry = entry,
            None => self.entries.push((name, entry)),
        }
    }

    /// Look up an entry by plugin name.
    pub fn get(&self, name: &str) -> Option<&PluginManifestEntry> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, entry)| entry)
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PluginManifestEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Returns the number of declared plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for PluginManifest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ManifestVisitor;

        impl<'de> Visitor<'de> for ManifestVisitor {
            type Value = PluginManifest;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of plugin names to manifest entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut manifest = PluginManifest::new();
                while let Some((name, entry)) =
                    map.next_entry::<String, PluginManifestEntry>()?
                {
                    manifest.insert(name, entry);
                }
                Ok(manifest)
            }
        }

        deserializer.deserialize_map(ManifestVisitor)
    }
}

impl Serialize for PluginManifest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

/// The `initialize` section of a pipeline context.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InitializeSection {
    #[serde(default)]
    pub plugins: PluginManifest,
}

/// The full pipeline configuration object consumed by `initialize`.
///
/// Only the sections this layer reads are modeled: the plugin manifest and
/// the optional top-level `time-sync` block. The `time-sync` block is kept as
/// a raw map because it is handed verbatim to the built-in time-sync plugin;
/// its mere presence (even empty) activates the auto-loader.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Context {
    #[serde(default)]
    pub initialize: InitializeSection,

    #[serde(default, rename = "time-sync", skip_serializing_if = "Option::is_none")]
    pub time_sync: Option<GlobalConfig>,
}
