//! Grouping of bundles into compatible release combinations.

use vbundle_core::bundle::{authority_count, Bundle};
use vbundle_core::group::Group;
use vbundle_core::validate::validate_groups;
use vbundle_util::errors::VbundleError;

/// Compute every combination of one bundle per authority whose declared
/// dependencies are satisfied.
///
/// Each bundle seeds one candidate group and recruits every other bundle
/// that is compatible with the seed in both directions, taking the first
/// bundle found for each authority. Compatibility is only checked against
/// the seed, never between two recruited bundles. Candidates that miss an
/// authority present in the input, and duplicates of an earlier candidate,
/// are dropped. The result keeps seed order; members are sorted by version
/// and then by authority name.
///
/// An empty input gives an empty result and a single bundle is returned as
/// its own group; neither runs group validation. Otherwise the groups must
/// pass [`validate_groups`] or the whole call fails.
pub fn aggregate(bundles: &[Bundle]) -> Result<Vec<Group>, VbundleError> {
    match bundles {
        [] => return Ok(Vec::new()),
        [only] => return Ok(vec![Group::seeded(only.clone())]),
        _ => {}
    }

    let authorities = authority_count(bundles);
    let mut groups: Vec<Group> = Vec::new();

    for seed in bundles {
        let mut group = Group::seeded(seed.clone());

        for candidate in bundles {
            if candidate == seed {
                continue;
            }
            if seed.conflicts_with(candidate) || candidate.conflicts_with(seed) {
                tracing::debug!("{seed}: skipping {candidate}, dependency conflict");
                continue;
            }
            if group.contains_authority(&candidate.name) {
                continue;
            }
            group.push(candidate.clone());
        }

        group.sort_members();

        if groups.contains(&group) {
            tracing::debug!("{seed}: {group} already aggregated");
            continue;
        }

        if group.len() != authorities {
            tracing::debug!(
                "{seed}: {group} covers {} of {authorities} authorities",
                group.len()
            );
            continue;
        }

        groups.push(group);
    }

    validate_groups(&groups)?;

    tracing::debug!(
        "Aggregated {} bundle(s) into {} group(s)",
        bundles.len(),
        groups.len()
    );
    Ok(groups)
}
