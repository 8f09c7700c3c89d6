//! Operation: locate, load and validate bundle definitions.
//!
//! Every command that works on bundles goes through [`load_bundles`], so
//! per-authority history validation always runs before anything else sees
//! the bundles.

use std::path::{Path, PathBuf};

use vbundle_core::bundle::Bundle;
use vbundle_core::config::ProjectConfig;
use vbundle_core::{definition, validate};
use vbundle_util::errors::{VbundleError, VbundleResult};

/// Where to load bundles from and which ones to keep.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub paths: Vec<PathBuf>,
    pub include_wip: bool,
}

impl LoadOptions {
    /// Combine explicit CLI paths with the project config. Explicit paths
    /// win; otherwise the configured paths are used, falling back to `.`.
    pub fn resolve(config: Option<&ProjectConfig>, paths: &[PathBuf], include_wip: bool) -> Self {
        let paths = if !paths.is_empty() {
            paths.to_vec()
        } else if let Some(config) = config {
            config.bundle_paths()
        } else {
            vec![PathBuf::from(".")]
        };
        let include_wip = include_wip || config.map(|c| c.bundles.include_wip).unwrap_or(false);
        Self { paths, include_wip }
    }
}

/// Load the project config from `explicit`, or discover one from `cwd`.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> VbundleResult<Option<ProjectConfig>> {
    match explicit {
        Some(path) => Ok(Some(ProjectConfig::from_path(path)?)),
        None => Ok(ProjectConfig::discover(cwd)?),
    }
}

/// Load every bundle, validate each authority's history, then drop WIP
/// bundles unless they were asked for.
pub fn load_bundles(opts: &LoadOptions) -> Result<Vec<Bundle>, VbundleError> {
    let bundles = definition::load_paths(&opts.paths)?;
    validate::validate_histories(&bundles)?;

    if opts.include_wip {
        return Ok(bundles);
    }

    let total = bundles.len();
    let kept: Vec<Bundle> = bundles.into_iter().filter(|b| !b.wip).collect();
    if kept.len() != total {
        tracing::info!("Excluded {} WIP bundle(s)", total - kept.len());
    }
    Ok(kept)
}
