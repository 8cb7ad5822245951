//! Batch runs over several themed collections.
//!
//! The run seed is chosen once. Every collection starts from a fresh RNG
//! with that seed, so collections of one batch are reproducible relative to
//! each other.

use tracing::info;

use super::collection::{CardGenerator, Collection};
use crate::cards::Style;
use crate::content::ContentPool;
use crate::core::{Element, ForgeRng, GeneratorConfig, Rarity};
use crate::error::Result;
use crate::naming::NamingService;

/// The classic monster collection: "Monster" subjects framed with `--niji`.
#[must_use]
pub fn classic_collection() -> Collection {
    Collection::new(
        "pokemon-classic",
        Style::theme("Monster", "--niji"),
        Element::Neutral,
        Rarity::standard_tiers(),
    )
}

/// Outcome of a batch run.
#[derive(Clone, Debug)]
pub struct BatchRun {
    /// Seed every collection was generated with.
    pub seed: u64,

    /// Generated collections, in input order.
    pub collections: Vec<Collection>,
}

/// Generate every collection with the same seed.
pub fn run_batch(
    collections: Vec<Collection>,
    config: &GeneratorConfig,
    pool: &ContentPool,
    naming: &dyn NamingService,
    subject_override: Option<&str>,
) -> Result<BatchRun> {
    let seed = config.seed.unwrap_or_else(|| ForgeRng::from_entropy().seed());
    info!(seed, collections = collections.len(), "starting batch");

    let mut generated = Vec::with_capacity(collections.len());
    for mut collection in collections {
        let element = collection.element;
        let mut generator = CardGenerator::new(pool, naming, ForgeRng::new(seed));
        generator.generate_random_cards(&mut collection, config, element, subject_override)?;
        generated.push(collection);
    }

    Ok(BatchRun {
        seed,
        collections: generated,
    })
}
