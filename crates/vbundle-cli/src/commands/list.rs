//! Handler for `vbundle list`.

use std::path::PathBuf;

use miette::Result;
use vbundle_core::config::ProjectConfig;
use vbundle_ops::ops_list;

pub fn exec(config: Option<&ProjectConfig>, paths: &[PathBuf], include_wip: bool) -> Result<()> {
    ops_list::list(&super::load_options(config, paths, include_wip))
}
