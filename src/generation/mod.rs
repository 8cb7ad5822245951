//! Procedural generation: stats, styles, collections.
//!
//! ## Modules
//!
//! - `stats`: Points budget, stat rolls, ability-cost split
//! - `style`: Subject, detail, adjective and ambience selection
//! - `collection`: Collection state and the card generator
//! - `batch`: Seeded runs over several collections

pub mod batch;
pub mod collection;
pub mod stats;
pub mod style;

pub use batch::{classic_collection, run_batch, BatchRun};
pub use collection::{CardGenerator, CardRequest, Collection};
pub use stats::{ability_point_costs, allocate_stats, points_budget};
pub use style::{StyleComposer, StyleRequest};
