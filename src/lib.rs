//! # card-forge
//!
//! Procedural generator for themed trading-card collections.
//!
//! ## Pipeline
//!
//! For every card a collection asks for:
//!
//! 1. **Budget**: points from rarity tier and series stage
//! 2. **Stats**: HP scales with the budget; attack, resistance and speed
//!    are flat rolls
//! 3. **Style**: subject, detail, adjectives and ambience drawn from the
//!    content pool, avoiding subjects already used in the run
//! 4. **Name**: optional, from an external text-completion service
//!
//! All randomness comes from one seeded ChaCha8 stream, so a seed
//! reproduces a collection exactly (naming aside).
//!
//! ## Modules
//!
//! - `core`: Elements, rarities, RNG, configuration
//! - `content`: Subjects, details and vocabularies
//! - `cards`: Cards, styles, derived prompt text
//! - `generation`: Stat allocation, style composition, collections
//! - `naming`: Naming-service trait and Gemini client
//! - `export`: JSON export of generated collections

pub mod cards;
pub mod content;
pub mod core;
pub mod error;
pub mod export;
pub mod generation;
pub mod naming;

// Re-export commonly used types
pub use crate::core::{Element, ForgeRng, GeneratorConfig, NamingConfig, Rarity};

pub use crate::cards::{Card, CardRecord, Stats, Style};

pub use crate::content::{ContentPool, CreatureType, Detail};

pub use crate::generation::{
    ability_point_costs, allocate_stats, points_budget, run_batch, BatchRun, CardGenerator,
    CardRequest, Collection, StyleComposer, StyleRequest,
};

pub use crate::naming::{DisabledNaming, GeminiClient, NameCandidate, NamingService};

pub use crate::error::{ForgeError, NamingError};
