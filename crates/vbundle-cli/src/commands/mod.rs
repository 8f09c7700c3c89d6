//! Command dispatch and handler modules.

mod aggregate;
mod explain;
mod health;
mod list;
mod validate;
mod version;

use std::path::{Path, PathBuf};

use miette::Result;
use vbundle_core::config::ProjectConfig;
use vbundle_ops::ops_load::{self, LoadOptions};
use vbundle_ops::OutputFormat;
use vbundle_util::errors::VbundleError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = project_config(cli.config.as_deref())?;
    let config = config.as_ref();
    match cli.command {
        Command::Aggregate {
            paths,
            format,
            include_wip,
        } => aggregate::exec(config, &paths, &format, include_wip),
        Command::Validate { paths } => validate::exec(config, &paths),
        Command::Explain {
            paths,
            format,
            include_wip,
        } => explain::exec(config, &paths, &format, include_wip),
        Command::List { paths, include_wip } => list::exec(config, &paths, include_wip),
        Command::Version { format } => version::exec(config, &format),
        Command::Health { paths } => health::exec(config, &paths),
    }
}

fn project_config(explicit: Option<&Path>) -> Result<Option<ProjectConfig>> {
    let cwd = std::env::current_dir().map_err(VbundleError::Io)?;
    let config = ops_load::load_config(explicit, &cwd)?;
    if let Some(root) = config.as_ref().and_then(|c| c.root.as_ref()) {
        tracing::debug!("Using config from {}", root.display());
    }
    Ok(config)
}

fn load_options(config: Option<&ProjectConfig>, paths: &[PathBuf], include_wip: bool) -> LoadOptions {
    LoadOptions::resolve(config, paths, include_wip)
}

fn output_format(format: &str) -> Result<OutputFormat> {
    Ok(format.parse::<OutputFormat>()?)
}
