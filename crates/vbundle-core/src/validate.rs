//! Invariant checks over sequences of bundles.
//!
//! [`validate_history`] covers the bundles one authority has published;
//! [`validate_groups`] covers the output of aggregation.

use std::collections::{BTreeMap, HashSet};

use vbundle_util::errors::VbundleError;

use crate::bundle::Bundle;
use crate::group::Group;

/// Validate the bundle history of a single authority.
///
/// Rejects duplicated versions, structurally invalid bundles, histories
/// where every bundle is deprecated (an empty history included), and
/// bundles that do not share one authority name.
pub fn validate_history(bundles: &[Bundle]) -> Result<(), VbundleError> {
    let mut versions = HashSet::new();
    for bundle in bundles {
        if !versions.insert(bundle.version.as_str()) {
            return Err(VbundleError::invalid_bundle(format!(
                "version {} must not be duplicated",
                bundle.version
            )));
        }
    }

    for bundle in bundles {
        bundle
            .validate()
            .map_err(|e| VbundleError::invalid_bundle(format!("{bundle}: {}", reason(&e))))?;
    }

    if bundles.iter().all(|b| b.deprecated) {
        return Err(VbundleError::invalid_bundle(
            "at least one bundle must not be deprecated",
        ));
    }

    if let Some(first) = bundles.first() {
        if bundles.iter().any(|b| b.name != first.name) {
            return Err(VbundleError::invalid_bundle(
                "name must be the same for all bundles",
            ));
        }
    }

    Ok(())
}

/// Split `bundles` by authority (keeping input order within each authority)
/// and validate every history.
pub fn validate_histories(bundles: &[Bundle]) -> Result<(), VbundleError> {
    for (name, history) in histories(bundles) {
        tracing::debug!("Validating {} bundle(s) of {name}", history.len());
        validate_history(&history)?;
    }
    Ok(())
}

/// Bundles grouped by authority name, sorted by name.
pub fn histories(bundles: &[Bundle]) -> BTreeMap<String, Vec<Bundle>> {
    let mut by_name: BTreeMap<String, Vec<Bundle>> = BTreeMap::new();
    for bundle in bundles {
        by_name
            .entry(bundle.name.clone())
            .or_default()
            .push(bundle.clone());
    }
    by_name
}

/// Validate the groups produced by aggregation: every group has the same
/// length and no group consists of deprecated bundles only.
pub fn validate_groups(groups: &[Group]) -> Result<(), VbundleError> {
    if let Some(first) = groups.first() {
        if let Some(group) = groups.iter().find(|g| g.len() != first.len()) {
            return Err(VbundleError::invalid_bundle(format!(
                "groups must have equal length, found {} and {} in {group}",
                first.len(),
                group.len()
            )));
        }
    }

    // Checked per group: one all-deprecated group fails the whole call, even
    // when every other group holds a current bundle. A single-authority
    // history with a deprecated release is therefore rejected here.
    if let Some(group) = groups.iter().find(|g| g.is_all_deprecated()) {
        return Err(VbundleError::invalid_bundle(format!(
            "at least one bundle must not be deprecated in {group}"
        )));
    }

    Ok(())
}

fn reason(err: &VbundleError) -> String {
    match err {
        VbundleError::InvalidBundle { message } => message.clone(),
        other => other.to_string(),
    }
}
