//! Operation: list loaded bundles per authority.

use std::cmp::Ordering;

use vbundle_core::bundle::Bundle;
use vbundle_core::validate;
use vbundle_util::hash::short_hash;
use vbundle_util::errors::VbundleResult;

use crate::ops_load::{self, LoadOptions};

pub fn list(opts: &LoadOptions) -> VbundleResult<()> {
    let bundles = ops_load::load_bundles(opts)?;
    for line in list_lines(&bundles)? {
        println!("{line}");
    }
    Ok(())
}

/// One header line per authority, then one line per bundle ordered by
/// semantic version: `  0.2.0  3f2a9c01b7de  deprecated`.
pub fn list_lines(bundles: &[Bundle]) -> VbundleResult<Vec<String>> {
    let mut lines = Vec::new();
    for (name, mut history) in validate::histories(bundles) {
        history.sort_by(|a, b| compare_versions(&a.version, &b.version));
        lines.push(format!("{name} ({})", history.len()));
        for bundle in &history {
            let fingerprint = bundle.fingerprint()?;
            let mut line = format!("  {:<10} {}", bundle.version, short_hash(&fingerprint, 12));
            if bundle.deprecated {
                line.push_str("  deprecated");
            }
            if bundle.wip {
                line.push_str("  wip");
            }
            lines.push(line);
        }
    }
    Ok(lines)
}

fn compare_versions(a: &str, b: &str) -> Ordering {
    match (semver::Version::parse(a), semver::Version::parse(b)) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}
