// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Fluxion pipeline framework.
//!
//! This crate provides the error taxonomy, the plugin capability traits, and
//! the shared types used throughout the Fluxion workspace. Plugin sources of
//! every kind resolve to a [`PluginModule`], whose named exports construct
//! [`PluginInstance`] values.

pub mod error;
pub mod plugin;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FluxionError;
pub use plugin::{PluginFactory, PluginInstance, PluginModule};
pub use types::{GlobalConfig, PluginKind, PluginMetadata, PluginParams};
