//! Bundle aggregation engine: turns a flat list of bundles into every
//! compatible one-bundle-per-authority combination, and reports the
//! dependency conflicts that keep bundles apart.

pub mod aggregate;
pub mod conflict;
