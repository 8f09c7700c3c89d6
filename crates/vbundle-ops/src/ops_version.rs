//! Operation: describe the running service and the bundles it publishes.

use std::path::Path;

use serde::Serialize;
use vbundle_core::bundle::Bundle;
use vbundle_core::config::ProjectConfig;
use vbundle_core::validate;
use vbundle_util::errors::VbundleError;
use vbundle_util::process::CommandBuilder;

/// Environment variable consulted when the config has no git commit.
pub const GIT_COMMIT_ENV: &str = "VBUNDLE_GIT_COMMIT";

/// Inputs for [`VersionService`].
#[derive(Debug, Clone, Default)]
pub struct VersionConfig {
    pub description: String,
    pub git_commit: String,
    pub name: String,
    pub source: String,
    pub version_bundles: Vec<Bundle>,
}

/// What `vbundle version` reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionResponse {
    pub description: String,
    pub git_commit: String,
    pub name: String,
    pub os_arch: String,
    pub source: String,
    pub version: String,
    pub version_bundles: Vec<Bundle>,
}

/// Static version information, checked once at construction.
#[derive(Debug, Clone)]
pub struct VersionService {
    config: VersionConfig,
}

impl VersionService {
    pub fn new(config: VersionConfig) -> Result<Self, VbundleError> {
        for (field, value) in [
            ("description", &config.description),
            ("git commit", &config.git_commit),
            ("name", &config.name),
            ("source", &config.source),
        ] {
            if value.is_empty() {
                return Err(VbundleError::Service {
                    message: format!("{field} must not be empty"),
                });
            }
        }
        if !config.version_bundles.is_empty() {
            validate::validate_history(&config.version_bundles)?;
        }
        Ok(Self { config })
    }

    pub fn get(&self) -> VersionResponse {
        VersionResponse {
            description: self.config.description.clone(),
            git_commit: self.config.git_commit.clone(),
            name: self.config.name.clone(),
            os_arch: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
            source: self.config.source.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            version_bundles: self.config.version_bundles.clone(),
        }
    }
}

/// Build a [`VersionConfig`] from the project config. Missing identity
/// fields fall back to this package's metadata; the git commit does not.
pub fn version_config(config: Option<&ProjectConfig>, bundles: Vec<Bundle>) -> VersionConfig {
    let service = config.map(|c| c.service.clone()).unwrap_or_default();
    let root = config.and_then(|c| c.root.as_deref());
    VersionConfig {
        description: service
            .description
            .unwrap_or_else(|| env!("CARGO_PKG_DESCRIPTION").to_string()),
        git_commit: resolve_git_commit(service.git_commit, root).unwrap_or_default(),
        name: service.name.unwrap_or_else(|| "vbundle".to_string()),
        source: service
            .source
            .unwrap_or_else(|| env!("CARGO_PKG_REPOSITORY").to_string()),
        version_bundles: bundles,
    }
}

/// Config value, then [`GIT_COMMIT_ENV`], then `git rev-parse HEAD`.
pub fn resolve_git_commit(configured: Option<String>, root: Option<&Path>) -> Option<String> {
    if let Some(commit) = configured.filter(|c| !c.is_empty()) {
        return Some(commit);
    }
    if let Ok(commit) = std::env::var(GIT_COMMIT_ENV) {
        if !commit.is_empty() {
            return Some(commit);
        }
    }
    let mut git = CommandBuilder::new("git").args(["rev-parse", "HEAD"]);
    if let Some(root) = root {
        git = git.cwd(root.to_string_lossy());
    }
    let commit = git.stdout_line();
    if commit.is_none() {
        tracing::warn!("Could not determine git commit");
    }
    commit
}
