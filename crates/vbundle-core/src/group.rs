use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bundle::Bundle;

/// One candidate release combination: at most one bundle per authority.
///
/// Equality compares members in order, field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    bundles: Vec<Bundle>,
}

impl Group {
    /// Start a group from its seed bundle.
    pub fn seeded(seed: Bundle) -> Self {
        Self {
            bundles: vec![seed],
        }
    }

    pub fn push(&mut self, bundle: Bundle) {
        self.bundles.push(bundle);
    }

    /// Whether a bundle of the authority `name` is already a member.
    pub fn contains_authority(&self, name: &str) -> bool {
        self.bundles.iter().any(|b| b.name == name)
    }

    /// Order members by raw version string, then stably by authority name.
    pub fn sort_members(&mut self) {
        self.bundles.sort_by(|a, b| a.version.cmp(&b.version));
        self.bundles.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Whether every member is deprecated. An empty group is not.
    pub fn is_all_deprecated(&self) -> bool {
        !self.bundles.is_empty() && self.bundles.iter().all(|b| b.deprecated)
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bundle> {
        self.bundles.iter()
    }

    pub fn into_bundles(self) -> Vec<Bundle> {
        self.bundles
    }
}

impl From<Vec<Bundle>> for Group {
    fn from(bundles: Vec<Bundle>) -> Self {
        Self { bundles }
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Bundle;
    type IntoIter = std::slice::Iter<'a, Bundle>;

    fn into_iter(self) -> Self::IntoIter {
        self.bundles.iter()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.bundles.iter().map(|b| b.to_string()).collect();
        write!(f, "[{}]", members.join(", "))
    }
}
