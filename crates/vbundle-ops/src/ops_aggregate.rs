//! Operation: aggregate bundles into compatible release combinations.

use vbundle_core::group::Group;
use vbundle_resolver::aggregate;
use vbundle_util::errors::VbundleResult;

use crate::ops_load::{self, LoadOptions};
use crate::{render_structured, OutputFormat};

/// Load, aggregate and print the resulting groups.
pub fn aggregate(opts: &LoadOptions, format: OutputFormat) -> VbundleResult<Vec<Group>> {
    let bundles = ops_load::load_bundles(opts)?;
    vbundle_util::progress::status("Aggregating", &format!("{} bundle(s)", bundles.len()));

    let groups = aggregate::aggregate(&bundles)?;

    println!("{}", render(&groups, format)?);
    if groups.is_empty() && !bundles.is_empty() {
        vbundle_util::progress::status_warn(
            "Warning",
            "no combination satisfies every dependency, run `vbundle explain` for details",
        );
    } else {
        vbundle_util::progress::status("Finished", &format!("{} group(s)", groups.len()));
    }
    Ok(groups)
}

/// Render groups in the requested format.
pub fn render(groups: &[Group], format: OutputFormat) -> VbundleResult<String> {
    if format != OutputFormat::Text {
        return render_structured(&groups, format);
    }
    if groups.is_empty() {
        return Ok("No compatible groups.".to_string());
    }
    let mut out = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        out.push(format!("Group {}:", i + 1));
        for bundle in group {
            let mut flags = Vec::new();
            if bundle.deprecated {
                flags.push("deprecated");
            }
            if bundle.wip {
                flags.push("wip");
            }
            let suffix = if flags.is_empty() {
                String::new()
            } else {
                format!(" ({})", flags.join(", "))
            };
            out.push(format!("  {} {}{suffix}", bundle.name, bundle.version));
        }
    }
    Ok(out.join("\n"))
}
