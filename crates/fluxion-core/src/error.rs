// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Fluxion pipeline framework.

use thiserror::Error;

/// The primary error type used across plugin resolution, construction, and
/// execution.
#[derive(Debug, Error)]
pub enum FluxionError {
    /// A manifest entry declares no `path`. The message is a fixed constant
    /// asserted by callers.
    #[error("path is missing")]
    MissingPluginPath,

    /// A manifest entry declares no `method`. The message is a fixed constant
    /// asserted by callers.
    #[error("method is missing")]
    MissingPluginMethod,

    /// Source resolution or export lookup failed for a plugin. Carries the
    /// original manifest `path` and the underlying failure's message.
    #[error("provided module '{path}' is invalid or not found: {message}")]
    PluginInitialization { path: String, message: String },

    /// The module loader could not locate a module for a resolved source.
    #[error("module not found: {0}")]
    ModuleNotFound(String),

    /// Configuration errors (invalid TOML, malformed context sections).
    #[error("configuration error: {0}")]
    Config(String),

    /// A plugin's global config is missing a key or has the wrong shape.
    #[error("global config error: {0}")]
    GlobalConfig(String),

    /// An input record passed to a plugin's `execute` is malformed.
    #[error("input validation error: {0}")]
    InputValidation(String),
}

impl FluxionError {
    /// Wrap an underlying resolution failure for the given manifest `path`.
    pub fn plugin_initialization(path: impl Into<String>, underlying: &dyn std::fmt::Display) -> Self {
        FluxionError::PluginInitialization {
            path: path.into(),
            message: underlying.to_string(),
        }
    }
}
