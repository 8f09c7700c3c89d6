use std::collections::{BTreeSet, HashSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vbundle_util::errors::VbundleError;

use crate::constraint::{Release, VersionConstraint};

/// Seconds between the Unix epoch and `0001-01-01T00:00:00Z`, the zero
/// instant some producers write instead of leaving `time` out.
const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// A user-visible change documented by a bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Changelog {
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: String,
}

impl Changelog {
    pub fn validate(&self) -> Result<(), VbundleError> {
        if self.component.is_empty() {
            return Err(VbundleError::invalid_bundle(
                "changelog component must not be empty",
            ));
        }
        if self.description.is_empty() {
            return Err(VbundleError::invalid_bundle(
                "changelog description must not be empty",
            ));
        }
        if self.kind.is_empty() {
            return Err(VbundleError::invalid_bundle(
                "changelog kind must not be empty",
            ));
        }
        Ok(())
    }
}

/// A named unit of functionality and the concrete version a bundle implements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl Component {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn validate(&self) -> Result<(), VbundleError> {
        if self.name.is_empty() {
            return Err(VbundleError::invalid_bundle(
                "component name must not be empty",
            ));
        }
        Release::parse(&self.version).map_err(|reason| {
            VbundleError::invalid_bundle(format!("component {}: {reason}", self.name))
        })?;
        Ok(())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// A requirement on a component exposed by another authority.
///
/// `version` is a constraint expression, see [`crate::constraint`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn validate(&self) -> Result<(), VbundleError> {
        if self.name.is_empty() {
            return Err(VbundleError::invalid_bundle(
                "dependency name must not be empty",
            ));
        }
        VersionConstraint::parse(&self.version)?;
        Ok(())
    }

    /// Whether `component` satisfies this dependency.
    ///
    /// Components with a different name are irrelevant to the dependency and
    /// count as satisfying it. A constraint that fails to parse never
    /// matches; validation rejects such bundles before aggregation.
    pub fn matches(&self, component: &Component) -> bool {
        if self.name != component.name {
            return true;
        }
        match VersionConstraint::parse(&self.version) {
            Ok(constraint) => constraint.matches_str(&component.version),
            Err(_) => false,
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// One immutable, versioned release descriptor published by an authority.
///
/// Field names follow the persisted definition format, which stores the
/// dependencies under the singular `dependency` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub changelogs: Vec<Changelog>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub deprecated: bool,
    /// Name of the authority publishing the bundle.
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub wip: bool,
}

/// The fields that must never change once a bundle is published.
#[derive(Serialize)]
struct ImmutableFields<'a> {
    changelogs: &'a [Changelog],
    components: &'a [Component],
    dependency: &'a [Dependency],
    name: &'a str,
    time: Option<&'a DateTime<Utc>>,
    version: &'a str,
}

impl Bundle {
    /// Run every structural check, stopping at the first failure.
    pub fn validate(&self) -> Result<(), VbundleError> {
        if self.changelogs.is_empty() {
            return Err(VbundleError::invalid_bundle(
                "changelogs must not be empty",
            ));
        }
        for changelog in &self.changelogs {
            changelog.validate()?;
        }

        if self.components.is_empty() {
            return Err(VbundleError::invalid_bundle(
                "components must not be empty",
            ));
        }
        let mut seen = HashSet::new();
        for component in &self.components {
            component.validate()?;
            if !seen.insert(component.name.as_str()) {
                return Err(VbundleError::invalid_bundle(format!(
                    "component {} must not be listed twice",
                    component.name
                )));
            }
        }

        for dependency in &self.dependencies {
            dependency.validate()?;
        }

        if !self.has_time() {
            return Err(VbundleError::invalid_bundle("time must not be empty"));
        }

        if self.name.is_empty() {
            return Err(VbundleError::invalid_bundle("name must not be empty"));
        }

        Release::parse(&self.version).map_err(VbundleError::invalid_bundle)?;

        Ok(())
    }

    /// Whether `time` holds a real instant (not missing, not the zero instant).
    pub fn has_time(&self) -> bool {
        match self.time {
            Some(t) => !(t.timestamp() == ZERO_TIME_SECS && t.timestamp_subsec_nanos() == 0),
            None => false,
        }
    }

    /// Dependencies of `self` that `other` exposes in a non-matching version,
    /// paired with the offending component.
    pub fn unsatisfied_by<'a>(
        &'a self,
        other: &'a Bundle,
    ) -> impl Iterator<Item = (&'a Dependency, &'a Component)> + 'a {
        self.dependencies.iter().flat_map(move |d| {
            other
                .components
                .iter()
                .filter(move |c| d.name == c.name && !d.matches(c))
                .map(move |c| (d, c))
        })
    }

    /// Whether any dependency of `self` is violated by a component of `other`.
    pub fn conflicts_with(&self, other: &Bundle) -> bool {
        self.unsatisfied_by(other).next().is_some()
    }

    /// SHA-256 over the immutable fields. `deprecated` and `wip` are left
    /// out since both may flip after publication.
    pub fn fingerprint(&self) -> Result<String, VbundleError> {
        let fields = ImmutableFields {
            changelogs: &self.changelogs,
            components: &self.components,
            dependency: &self.dependencies,
            name: &self.name,
            time: self.time.as_ref(),
            version: &self.version,
        };
        let canonical = serde_json::to_vec(&fields).map_err(|e| VbundleError::Generic {
            message: format!("Failed to encode bundle {self}: {e}"),
        })?;
        Ok(vbundle_util::hash::sha256_bytes(&canonical))
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Number of distinct authorities among `bundles`.
pub fn authority_count(bundles: &[Bundle]) -> usize {
    bundles
        .iter()
        .map(|b| b.name.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}
