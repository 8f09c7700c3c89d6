//! Handler for `vbundle version`.

use console::Style;
use miette::Result;
use vbundle_core::config::ProjectConfig;
use vbundle_ops::ops_load::{self, LoadOptions};
use vbundle_ops::ops_version::{self, VersionService};
use vbundle_ops::{render_structured, OutputFormat};

pub fn exec(config: Option<&ProjectConfig>, format: &str) -> Result<()> {
    let format = super::output_format(format)?;

    // Only a project config says where this service's own bundles live.
    let bundles = match config {
        Some(config) => ops_load::load_bundles(&LoadOptions::resolve(Some(config), &[], false))?,
        None => Vec::new(),
    };
    let mut version_config = ops_version::version_config(config, bundles);
    let name = version_config.name.clone();
    version_config.version_bundles.retain(|b| b.name == name);

    let response = VersionService::new(version_config)?.get();

    if format != OutputFormat::Text {
        println!("{}", render_structured(&response, format)?);
        return Ok(());
    }

    let bold = Style::new().bold();
    println!("{} {}", bold.apply_to("Name:       "), response.name);
    println!("{} {}", bold.apply_to("Description:"), response.description);
    println!("{} {}", bold.apply_to("Source:     "), response.source);
    println!("{} {}", bold.apply_to("Git commit: "), response.git_commit);
    println!("{} {}", bold.apply_to("Version:    "), response.version);
    println!("{} {}", bold.apply_to("OS/Arch:    "), response.os_arch);
    for bundle in &response.version_bundles {
        println!("{} {bundle}", bold.apply_to("Bundle:     "));
    }
    Ok(())
}
