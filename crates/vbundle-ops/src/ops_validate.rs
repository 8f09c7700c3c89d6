//! Operation: validate bundle definitions without aggregating them.

use vbundle_core::{definition, validate};
use vbundle_util::errors::VbundleResult;

use crate::ops_load::LoadOptions;

/// Per-authority outcome of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoritySummary {
    pub name: String,
    pub bundles: usize,
    pub deprecated: usize,
    pub wip: usize,
}

/// Load every definition (WIP included) and validate each authority's
/// history. Fails on the first broken invariant.
pub fn validate(opts: &LoadOptions) -> VbundleResult<Vec<AuthoritySummary>> {
    let bundles = definition::load_paths(&opts.paths)?;
    let mut summaries = Vec::new();

    for (name, history) in validate::histories(&bundles) {
        if let Err(e) = validate::validate_history(&history) {
            vbundle_util::progress::status_error("Invalid", &name);
            return Err(e.into());
        }
        let summary = AuthoritySummary {
            bundles: history.len(),
            deprecated: history.iter().filter(|b| b.deprecated).count(),
            wip: history.iter().filter(|b| b.wip).count(),
            name,
        };
        vbundle_util::progress::status(
            "Valid",
            &format!(
                "{} ({} bundle(s), {} deprecated, {} wip)",
                summary.name, summary.bundles, summary.deprecated, summary.wip
            ),
        );
        summaries.push(summary);
    }

    if summaries.is_empty() {
        vbundle_util::progress::status_warn("Warning", "no bundle definitions found");
    }
    Ok(summaries)
}
