//! Handler for `vbundle aggregate`.

use std::path::PathBuf;

use miette::Result;
use vbundle_core::config::ProjectConfig;
use vbundle_ops::ops_aggregate;

pub fn exec(
    config: Option<&ProjectConfig>,
    paths: &[PathBuf],
    format: &str,
    include_wip: bool,
) -> Result<()> {
    let format = super::output_format(format)?;
    let opts = super::load_options(config, paths, include_wip);
    ops_aggregate::aggregate(&opts, format)?;
    Ok(())
}
