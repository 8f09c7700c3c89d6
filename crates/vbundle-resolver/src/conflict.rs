//! Dependency conflict detection between bundles of different authorities.

use std::fmt;

use serde::Serialize;
use vbundle_core::bundle::Bundle;

/// Every unsatisfied dependency found between pairs of bundles.
#[derive(Debug, Default, Serialize)]
pub struct ConflictReport {
    pub conflicts: Vec<DependencyConflict>,
}

/// A dependency of one bundle that a component of another bundle does not
/// satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyConflict {
    /// `name@version` of the bundle declaring the dependency.
    pub dependent: String,
    pub component: String,
    pub constraint: String,
    /// `name@version` of the bundle exposing the component.
    pub provider: String,
    pub provided: String,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, conflict: DependencyConflict) {
        self.conflicts.push(conflict);
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }
}

/// Check every ordered pair of bundles from different authorities.
pub fn find_conflicts(bundles: &[Bundle]) -> ConflictReport {
    let mut report = ConflictReport::new();
    for dependent in bundles {
        for provider in bundles.iter().filter(|b| b.name != dependent.name) {
            for (dependency, component) in dependent.unsatisfied_by(provider) {
                report.add(DependencyConflict {
                    dependent: dependent.to_string(),
                    component: dependency.name.clone(),
                    constraint: dependency.version.clone(),
                    provider: provider.to_string(),
                    provided: component.version.clone(),
                });
            }
        }
    }
    report
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "No dependency conflicts.");
        }
        writeln!(f, "Dependency conflicts ({}):", self.conflicts.len())?;
        for c in &self.conflicts {
            writeln!(f, "  {c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DependencyConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requires {} {} but {} provides {}",
            self.dependent, self.component, self.constraint, self.provider, self.provided
        )
    }
}
