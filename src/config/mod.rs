//! Config layer: JSON job descriptors + loading and normalization.
//!
//! This module owns the on-disk shape only. Field-level validation of
//! `measure`/`groupBy`/`chartKind` belongs to the pipeline, which skips
//! incomplete descriptors per entry instead of failing the whole set.

pub mod job;
pub mod store;

pub use job::{JobSpec, OneOrMany};
pub use store::load_config;
