//! Handler for `vbundle validate`.

use std::path::PathBuf;

use miette::Result;
use vbundle_core::config::ProjectConfig;
use vbundle_ops::ops_validate;

pub fn exec(config: Option<&ProjectConfig>, paths: &[PathBuf]) -> Result<()> {
    let opts = super::load_options(config, paths, true);
    let summaries = ops_validate::validate(&opts)?;
    let bundles: usize = summaries.iter().map(|s| s.bundles).sum();
    vbundle_util::progress::status(
        "Finished",
        &format!(
            "{bundles} bundle(s) from {} authority(ies) are valid",
            summaries.len()
        ),
    );
    Ok(())
}
