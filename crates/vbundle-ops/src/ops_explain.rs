//! Operation: report the dependency conflicts between loaded bundles.

use vbundle_resolver::conflict::{self, ConflictReport};
use vbundle_util::errors::VbundleResult;

use crate::ops_load::{self, LoadOptions};
use crate::{render_structured, OutputFormat};

pub fn explain(opts: &LoadOptions, format: OutputFormat) -> VbundleResult<ConflictReport> {
    let bundles = ops_load::load_bundles(opts)?;
    let report = conflict::find_conflicts(&bundles);
    match format {
        OutputFormat::Text => println!("{}", report.to_string().trim_end()),
        _ => println!("{}", render_structured(&report, format)?),
    }
    Ok(report)
}
