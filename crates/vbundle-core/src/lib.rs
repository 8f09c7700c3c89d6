//! Core data types for vbundle.
//!
//! This crate defines the values the aggregation engine works on: bundles
//! with their components, dependencies and changelogs, version constraint
//! matching, groups of bundles, structural and group-level validation,
//! loading bundle definitions from JSON/YAML, and the project config.
//!
//! Everything here is synchronous and free of network I/O.

pub mod bundle;
pub mod config;
pub mod constraint;
pub mod definition;
pub mod group;
pub mod validate;
