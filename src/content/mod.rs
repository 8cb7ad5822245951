//! Content pool: subjects, details, adjectives and ambiences.
//!
//! ## Key Types
//!
//! - `Detail`: A physical feature ("holding a sword")
//! - `CreatureType`: A named subject with its possible details
//! - `ContentPool`: Per-element vocabularies with uniform sampling
//!
//! The built-in vocabulary lives in `catalog`.

pub mod catalog;
pub mod creature;
pub mod pool;

pub use creature::{CreatureType, Detail, Relation};
pub use pool::{ContentPool, ElementPool};
