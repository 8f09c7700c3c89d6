//! Release version parsing and dependency constraint matching.
//!
//! Component and bundle versions are plain `major.minor.patch` triples of
//! non-negative integers. A dependency constraint is an optional operator
//! followed by such a triple in which any segment may be the wildcard `x`:
//!
//! - `== 1.8.1`, `1.8.1` (no operator means exact match)
//! - `<= 1.7.x`, `< 2.x.x`, `>= 0.3.0`, `> 1.0.x`
//!
//! Segments compare numerically from left to right. The first wildcard stops
//! the comparison, so `<= 1.7.x` accepts every `1.7.*` and everything below.

use std::cmp::Ordering;
use std::fmt;

use vbundle_util::errors::VbundleError;

const SEGMENT_NAMES: [&str; 3] = ["major", "minor", "patch"];

/// A parsed `major.minor.patch` release version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Release {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Release {
    /// Parse a version, returning a human-readable reason on failure.
    pub fn parse(version: &str) -> Result<Self, String> {
        let split: Vec<&str> = version.split('.').collect();
        if split.len() != 3 {
            return Err("version format must be '<major>.<minor>.<patch>'".to_string());
        }
        let mut parsed = [0u64; 3];
        for (i, raw) in split.iter().enumerate() {
            parsed[i] = parse_number(raw)
                .ok_or_else(|| format!("{} version must be positive number", SEGMENT_NAMES[i]))?;
        }
        Ok(Self {
            major: parsed[0],
            minor: parsed[1],
            patch: parsed[2],
        })
    }

    fn segments(&self) -> [u64; 3] {
        [self.major, self.minor, self.patch]
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn parse_number(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Comparison operator of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    fn accepts(&self, ord: Ordering) -> bool {
        match self {
            Operator::Eq => ord == Ordering::Equal,
            Operator::Lt => ord == Ordering::Less,
            Operator::Le => ord != Ordering::Greater,
            Operator::Gt => ord == Ordering::Greater,
            Operator::Ge => ord != Ordering::Less,
        }
    }
}

/// One segment of a constraint version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Number(u64),
    Wildcard,
}

/// A parsed dependency constraint such as `<= 1.7.x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub op: Operator,
    segments: [Segment; 3],
}

impl VersionConstraint {
    /// Parse a constraint expression.
    ///
    /// Fails with [`VbundleError::InvalidBundle`] because a malformed
    /// constraint always surfaces while validating the bundle that owns it.
    pub fn parse(expr: &str) -> Result<Self, VbundleError> {
        let s = expr.trim();
        // Two-character operators must be tried before their prefixes.
        let (op, rest) = [
            ("==", Operator::Eq),
            ("<=", Operator::Le),
            (">=", Operator::Ge),
            ("<", Operator::Lt),
            (">", Operator::Gt),
        ]
        .iter()
        .find_map(|(prefix, op)| s.strip_prefix(prefix).map(|rest| (*op, rest)))
        .unwrap_or((Operator::Eq, s));

        let rest = rest.trim();
        let split: Vec<&str> = rest.split('.').collect();
        if split.len() != 3 {
            return Err(VbundleError::invalid_bundle(format!(
                "dependency version '{expr}' must be '[operator] <major>.<minor>.<patch>'"
            )));
        }

        let mut segments = [Segment::Wildcard; 3];
        for (i, raw) in split.iter().enumerate() {
            segments[i] = if *raw == "x" {
                Segment::Wildcard
            } else {
                Segment::Number(parse_number(raw).ok_or_else(|| {
                    VbundleError::invalid_bundle(format!(
                        "dependency version '{expr}' has invalid {} segment '{raw}'",
                        SEGMENT_NAMES[i]
                    ))
                })?)
            };
        }

        Ok(Self { op, segments })
    }

    /// Check whether a concrete release satisfies this constraint.
    pub fn matches(&self, release: &Release) -> bool {
        let actual = release.segments();
        let mut ord = Ordering::Equal;
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Wildcard => break,
                Segment::Number(wanted) => {
                    ord = actual[i].cmp(wanted);
                    if ord != Ordering::Equal {
                        break;
                    }
                }
            }
        }
        self.op.accepts(ord)
    }

    /// Check a raw version string. Unparseable versions never match.
    pub fn matches_str(&self, version: &str) -> bool {
        Release::parse(version)
            .map(|r| self.matches(&r))
            .unwrap_or(false)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Number(n) => n.to_string(),
                Segment::Wildcard => "x".to_string(),
            })
            .collect();
        write!(f, "{} {}", self.op.as_str(), parts.join("."))
    }
}
