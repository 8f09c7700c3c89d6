//! Handler for `vbundle health`.

use std::path::PathBuf;

use miette::Result;
use vbundle_core::config::ProjectConfig;
use vbundle_ops::ops_health::{self, DefinitionHealth};
use vbundle_util::errors::VbundleError;

pub fn exec(config: Option<&ProjectConfig>, paths: &[PathBuf]) -> Result<()> {
    let definitions = DefinitionHealth::new(super::load_options(config, paths, false));
    let response = ops_health::check(&[&definitions]);

    if response.failed {
        vbundle_util::progress::status_error("Unhealthy", "bundle definitions");
        return Err(VbundleError::Generic {
            message: "Health check failed".to_string(),
        }
        .into());
    }
    vbundle_util::progress::status("Healthy", "bundle definitions");
    Ok(())
}
