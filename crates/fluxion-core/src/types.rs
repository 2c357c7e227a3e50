// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the plugin layer and the built-in plugin set.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One observation record flowing through the pipeline. Plugins read and
/// write named fields; the set of fields is plugin-defined.
pub type PluginParams = serde_json::Map<String, serde_json::Value>;

/// Opaque plugin configuration taken verbatim from a manifest entry's
/// `global-config` block.
pub type GlobalConfig = serde_json::Map<String, serde_json::Value>;

/// Identifies how a plugin participates in the pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum PluginKind {
    /// Transforms a batch of records into a batch of records.
    Execute,
    /// Regroups records; reserved for grouping stages.
    GroupBy,
}

/// Descriptor every plugin instance exposes alongside `execute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    pub kind: PluginKind,
}

impl PluginMetadata {
    /// Metadata for an ordinary record-transforming plugin.
    pub fn execute() -> Self {
        Self {
            kind: PluginKind::Execute,
        }
    }
}
