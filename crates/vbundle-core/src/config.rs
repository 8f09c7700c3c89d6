use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vbundle_util::errors::VbundleError;

/// File name of the project configuration.
pub const CONFIG_FILE: &str = "Vbundle.toml";

/// Project configuration loaded from `Vbundle.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub bundles: BundlesConfig,

    /// Directory the config was loaded from; relative paths resolve against it.
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

/// Service identity from `[service]`, surfaced by `vbundle version`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, rename = "git-commit")]
    pub git_commit: Option<String>,
}

/// Bundle definition sources from `[bundles]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlesConfig {
    #[serde(default = "default_paths")]
    pub paths: Vec<PathBuf>,
    #[serde(default, rename = "include-wip")]
    pub include_wip: bool,
}

impl Default for BundlesConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            include_wip: false,
        }
    }
}

fn default_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

impl ProjectConfig {
    /// Parse a config from TOML text. `root` stays unset.
    pub fn parse(content: &str) -> Result<Self, VbundleError> {
        toml::from_str(content).map_err(|e| VbundleError::Definition {
            message: format!("Failed to parse {CONFIG_FILE}: {e}"),
        })
    }

    /// Load and parse a config file.
    pub fn from_path(path: &Path) -> Result<Self, VbundleError> {
        let content = std::fs::read_to_string(path).map_err(|e| VbundleError::Definition {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let mut config = Self::parse(&content)?;
        config.root = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Find `Vbundle.toml` in `start` or one of its ancestors.
    pub fn discover(start: &Path) -> Result<Option<Self>, VbundleError> {
        match vbundle_util::fs::find_ancestor_with(start, CONFIG_FILE) {
            Some(dir) => Self::from_path(&dir.join(CONFIG_FILE)).map(Some),
            None => Ok(None),
        }
    }

    /// Configured bundle paths, resolved against the config directory.
    pub fn bundle_paths(&self) -> Vec<PathBuf> {
        self.bundles
            .paths
            .iter()
            .map(|p| match &self.root {
                Some(root) if p.is_relative() => root.join(p),
                _ => p.clone(),
            })
            .collect()
    }
}
