// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin source classification and resolution.
//!
//! A manifest `path` string is classified into one of four source kinds and
//! resolved through a [`ModuleLoader`]. Classification is total and ordered
//! so a local path that happens to look like a package name never dispatches
//! ambiguously.

use std::path::PathBuf;

use fluxion_core::{FluxionError, PluginModule};

use crate::loader::ModuleLoader;

/// Sentinel path selecting the built-in plugin set.
pub const BUILTIN_PATH: &str = "builtin";

/// Recognized version-control hosting services for remote plugin sources.
const REMOTE_HOSTS: [&str; 2] = ["https://github.com/", "https://gitlab.com/"];

/// A classified plugin source, ready for the module loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginSource {
    /// The built-in plugin set bundled with the framework.
    Builtin,
    /// An installed package-manager module, addressed by bare name.
    Package(String),
    /// A remote-hosted source, already translated into an installable
    /// reference (`owner/repo`, scheme and host stripped).
    Remote(String),
    /// A module addressed by a path relative to the caller's working context.
    Local(PathBuf),
}

impl std::fmt::Display for PluginSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginSource::Builtin => write!(f, "builtin"),
            PluginSource::Package(name) => write!(f, "package '{name}'"),
            PluginSource::Remote(reference) => write!(f, "remote source '{reference}'"),
            PluginSource::Local(path) => write!(f, "local path '{}'", path.display()),
        }
    }
}

impl PluginSource {
    /// Classify a manifest `path` into an ordered candidate list.
    ///
    /// 1. the literal `"builtin"` sentinel resolves against the built-in set;
    /// 2. a recognized git-host URL is translated into an installable
    ///    reference;
    /// 3. anything else is tried as an installed package by bare name;
    /// 4. for 2 and 3, a local path is the final fallback.
    pub fn candidates(path: &str) -> Vec<PluginSource> {
        if path == BUILTIN_PATH {
            return vec![PluginSource::Builtin];
        }
        if let Some(reference) = remote_reference(path) {
            return vec![
                PluginSource::Remote(reference),
                PluginSource::Local(PathBuf::from(path)),
            ];
        }
        vec![
            PluginSource::Package(path.to_string()),
            PluginSource::Local(PathBuf::from(path)),
        ]
    }
}

/// Translate a recognized git-host URL into an installable `owner/repo`
/// reference. Returns `None` for anything that is not a recognized remote.
fn remote_reference(path: &str) -> Option<String> {
    REMOTE_HOSTS.iter().find_map(|host| {
        let rest = path.strip_prefix(host)?;
        let reference = rest.trim_end_matches('/');
        let reference = reference.strip_suffix(".git").unwrap_or(reference);
        (!reference.is_empty()).then(|| reference.to_string())
    })
}

/// Resolve a manifest `path` to a loaded module.
///
/// Candidates are attempted in classification order; the first success wins.
/// If every candidate fails, the failure from the primary strategy is wrapped
/// as [`FluxionError::PluginInitialization`] carrying the original path and
/// the underlying message. Resolution failures are never swallowed.
pub async fn resolve(loader: &dyn ModuleLoader, path: &str) -> Result<PluginModule, FluxionError> {
    let mut primary_error: Option<FluxionError> = None;
    for source in PluginSource::candidates(path) {
        match loader.load(&source).await {
            Ok(module) => return Ok(module),
            Err(err) => {
                tracing::debug!(%source, error = %err, "plugin source candidate failed");
                primary_error.get_or_insert(err);
            }
        }
    }
    let underlying =
        primary_error.unwrap_or_else(|| FluxionError::ModuleNotFound(path.to_string()));
    Err(FluxionError::plugin_initialization(path, &underlying))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::StaticModuleLoader;

    #[test]
    fn builtin_sentinel_classifies_alone() {
        assert_eq!(
            PluginSource::candidates("builtin"),
            vec![PluginSource::Builtin]
        );
    }

    #[test]
    fn github_url_translates_to_installable_reference() {
        let candidates = PluginSource::candidates("https://github.com/acme/watt-meter");
        assert_eq!(
            candidates[0],
            PluginSource::Remote("acme/watt-meter".to_string())
        );
        assert_eq!(
            candidates[1],
            PluginSource::Local(PathBuf::from("https://github.com/acme/watt-meter"))
        );
    }

    #[test]
    fn gitlab_url_with_git_suffix_is_recognized() {
        let candidates = PluginSource::candidates("https://gitlab.com/acme/watt-meter.git");
        assert_eq!(
            candidates[0],
            PluginSource::Remote("acme/watt-meter".to_string())
        );
    }

    #[test]
    fn bare_name_tries_package_then_local_path() {
        let candidates = PluginSource::candidates("watt-meter");
        assert_eq!(
            candidates,
            vec![
                PluginSource::Package("watt-meter".to_string()),
                PluginSource::Local(PathBuf::from("watt-meter")),
            ]
        );
    }

    #[test]
    fn relative_path_falls_back_to_local() {
        let candidates = PluginSource::candidates("./plugins/watt-meter");
        assert_eq!(
            candidates.last(),
            Some(&PluginSource::Local(PathBuf::from("./plugins/watt-meter")))
        );
    }

    #[tokio::test]
    async fn resolve_wraps_loader_failure_with_original_path() {
        let loader = StaticModuleLoader::new();
        let err = resolve(&loader, "failing-mock").await.unwrap_err();
        match &err {
            FluxionError::PluginInitialization { path, message } => {
                assert_eq!(path, "failing-mock");
                assert!(message.contains("failing-mock"));
            }
            other => panic!("expected PluginInitialization, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn resolve_builtin_succeeds_without_registration() {
        let loader = StaticModuleLoader::new();
        let module = resolve(&loader, "builtin").await.unwrap();
        assert!(module.export("Sum").is_some());
    }
}
