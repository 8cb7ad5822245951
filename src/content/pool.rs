//! Content pool: per-element vocabularies and uniform sampling.
//!
//! The pool is built once at startup, validated to cover every
//! [`Element`], and shared read-only for the rest of the process.

use rustc_hash::FxHashMap;

use super::catalog;
use super::creature::CreatureType;
use crate::core::{Element, ForgeRng};
use crate::error::{ForgeError, Result};

/// Vocabularies for a single element.
#[derive(Clone, Debug)]
pub struct ElementPool {
    /// Subjects drawn at random for this element.
    pub creatures: Vec<CreatureType>,

    /// Background ambiences. The last entry is reserved.
    pub ambiences: Vec<String>,
}

impl ElementPool {
    /// Create an element pool.
    pub fn new(creatures: Vec<CreatureType>, ambiences: Vec<String>) -> Self {
        Self {
            creatures,
            ambiences,
        }
    }
}

/// Static reference data keyed by element.
///
/// ## Example
///
/// ```
/// use card_forge::content::ContentPool;
/// use card_forge::core::Element;
///
/// let pool = ContentPool::builtin().unwrap();
/// assert!(!pool.creature_types_for(Element::Neutral).unwrap().is_empty());
/// assert_eq!(pool.closest_match("dragon").name, "dragon");
/// ```
#[derive(Clone, Debug)]
pub struct ContentPool {
    pools: FxHashMap<Element, ElementPool>,
    known: FxHashMap<String, CreatureType>,
}

impl ContentPool {
    /// Build a pool from per-element data plus subjects that are only
    /// reachable by name.
    ///
    /// Fails with [`ForgeError::UnknownElement`] if any declared element
    /// has no pool, and [`ForgeError::InvalidPool`] if a pool cannot
    /// support sampling (no creatures, or fewer than two ambiences).
    pub fn new(
        pools: FxHashMap<Element, ElementPool>,
        reserve: Vec<CreatureType>,
    ) -> Result<Self> {
        for element in Element::ALL {
            let pool = pools.get(&element).ok_or(ForgeError::UnknownElement(element))?;
            if pool.creatures.is_empty() {
                return Err(ForgeError::InvalidPool {
                    element,
                    reason: "no creature types".to_owned(),
                });
            }
            if pool.ambiences.len() < 2 {
                return Err(ForgeError::InvalidPool {
                    element,
                    reason: "needs at least one ambience besides the reserved one".to_owned(),
                });
            }
        }

        let mut known = FxHashMap::default();
        for creature in pools.values().flat_map(|p| p.creatures.iter()).chain(reserve.iter()) {
            known
                .entry(creature.name.clone())
                .or_insert_with(|| creature.clone());
        }

        Ok(Self { pools, known })
    }

    /// The built-in classic monster vocabulary.
    pub fn builtin() -> Result<Self> {
        let mut pools = FxHashMap::default();
        pools.insert(
            Element::Neutral,
            ElementPool::new(
                catalog::neutral_creatures(),
                catalog::NEUTRAL_AMBIENCES.iter().map(|s| (*s).to_owned()).collect(),
            ),
        );
        Self::new(pools, catalog::reserve_creatures())
    }

    fn pool(&self, element: Element) -> Result<&ElementPool> {
        self.pools.get(&element).ok_or(ForgeError::UnknownElement(element))
    }

    /// Subjects drawn at random for an element.
    pub fn creature_types_for(&self, element: Element) -> Result<&[CreatureType]> {
        Ok(&self.pool(element)?.creatures)
    }

    /// Resolve a user-supplied subject name.
    ///
    /// Known subjects are the element pools plus the reserve subjects, which
    /// are never drawn at random but can be asked for by name. Exact matches
    /// return the catalogued subject. Anything else becomes an ad-hoc subject
    /// wearing armor, so overrides never fail.
    #[must_use]
    pub fn closest_match(&self, name: &str) -> CreatureType {
        match self.known.get(name) {
            Some(creature) => creature.clone(),
            None => CreatureType::new(name, vec![catalog::fallback_detail()]),
        }
    }

    /// Uniform detail adjective. Shared by every element.
    pub fn random_detail_adjective(&self, _element: Element, rng: &mut ForgeRng) -> &'static str {
        pick(&catalog::DETAIL_ADJECTIVES, rng)
    }

    /// Uniform rarity adjective for a tier. Tier 3 and above yield `""`.
    pub fn random_rarity_adjective(&self, tier: u32, rng: &mut ForgeRng) -> &'static str {
        pick(catalog::rarity_adjectives(tier), rng)
    }

    /// Uniform series adjective for a stage, `""` when not in a series.
    pub fn random_series_adjective(&self, stage: Option<u32>, rng: &mut ForgeRng) -> &'static str {
        match stage {
            Some(stage) => pick(catalog::series_adjectives(stage), rng),
            None => "",
        }
    }

    /// Uniform ambience, never the reserved last entry.
    pub fn random_ambience(&self, element: Element, rng: &mut ForgeRng) -> Result<&str> {
        let ambiences = &self.pool(element)?.ambiences;
        let open = &ambiences[..ambiences.len() - 1];
        Ok(rng.choose(open).map_or("", String::as_str))
    }

    /// The ambience reserved for the capstone card of a series.
    pub fn reserved_ambience(&self, element: Element) -> Result<&str> {
        let ambiences = &self.pool(element)?.ambiences;
        Ok(ambiences.last().map_or("", String::as_str))
    }
}

fn pick(choices: &[&'static str], rng: &mut ForgeRng) -> &'static str {
    rng.choose(choices).copied().unwrap_or("")
}
