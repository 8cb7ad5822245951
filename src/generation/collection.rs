//! Collection orchestration.
//!
//! A `Collection` is the append-only list of generated cards plus the
//! run-scoped dedup state (subjects and names already used). The
//! `CardGenerator` drives generation into a collection: it owns the seeded
//! RNG and borrows the content pool and naming service it was handed.
//!
//! Generation is strictly sequential. Every card reads and extends the
//! dedup sets left by the previous one.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::stats::{allocate_stats, points_budget};
use super::style::{StyleComposer, StyleRequest};
use crate::cards::{Card, Style};
use crate::content::ContentPool;
use crate::core::{Element, ForgeRng, GeneratorConfig, Rarity};
use crate::error::Result;
use crate::naming::{name_card, NamingService};

/// A themed, ordered collection of generated cards.
#[derive(Clone, Debug)]
pub struct Collection {
    /// Collection name; also the export directory name.
    pub name: String,

    /// Framing shared by every card.
    pub theme_style: Style,

    /// Default element drawn from.
    pub element: Element,

    /// Rarity tiers, in generation order.
    pub rarities: Vec<Rarity>,

    cards: Vec<Card>,
    subjects_seen: FxHashSet<String>,
    names_seen: FxHashSet<String>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new(
        name: impl Into<String>,
        theme_style: Style,
        element: Element,
        rarities: Vec<Rarity>,
    ) -> Self {
        Self {
            name: name.into(),
            theme_style,
            element,
            rarities,
            cards: Vec::new(),
            subjects_seen: FxHashSet::default(),
            names_seen: FxHashSet::default(),
        }
    }

    /// Cards in generation order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards generated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards have been generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Subjects chosen so far in this run.
    #[must_use]
    pub fn subjects_seen(&self) -> &FxHashSet<String> {
        &self.subjects_seen
    }

    /// Card names chosen so far in this run.
    #[must_use]
    pub fn names_seen(&self) -> &FxHashSet<String> {
        &self.names_seen
    }

    /// Seed the subject seen-set, e.g. to continue a previous run.
    pub fn mark_subject_seen(&mut self, subject: impl Into<String>) {
        self.subjects_seen.insert(subject.into());
    }

    /// Seed the name seen-set.
    pub fn mark_name_seen(&mut self, name: impl Into<String>) {
        self.names_seen.insert(name.into());
    }
}

/// What to generate for one card.
#[derive(Clone, Debug)]
pub struct CardRequest {
    /// Element drawn from.
    pub element: Element,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Parent style when the card continues an evolution series.
    pub inherited: Option<Style>,

    /// Series stage, if part of a series.
    pub series_index: Option<u32>,

    /// Forced subject name.
    pub subject_override: Option<String>,
}

impl CardRequest {
    /// A standalone card with a free subject.
    pub fn new(element: Element, rarity: Rarity) -> Self {
        Self {
            element,
            rarity,
            inherited: None,
            series_index: None,
            subject_override: None,
        }
    }

    /// Mark as a series stage, continuing from `parent` if given.
    #[must_use]
    pub fn series_stage(mut self, stage: u32, parent: Option<Style>) -> Self {
        self.series_index = Some(stage);
        self.inherited = parent;
        self
    }

    /// Force the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: Option<&str>) -> Self {
        self.subject_override = subject.map(str::to_owned);
        self
    }
}

/// Drives card generation into collections.
pub struct CardGenerator<'a> {
    pool: &'a ContentPool,
    naming: &'a dyn NamingService,
    rng: ForgeRng,
}

impl<'a> CardGenerator<'a> {
    /// Create a generator.
    pub fn new(pool: &'a ContentPool, naming: &'a dyn NamingService, rng: ForgeRng) -> Self {
        Self { pool, naming, rng }
    }

    /// Generate one card and append it to `collection`.
    ///
    /// Steps: budget, stats, style, index, derived text, name, append. The
    /// card is permanent once appended.
    pub fn generate_card<'c>(
        &mut self,
        collection: &'c mut Collection,
        request: CardRequest,
    ) -> Result<&'c Card> {
        let budget = points_budget(request.rarity.index, request.series_index.unwrap_or(1));
        let stats = allocate_stats(budget, &mut self.rng);

        let composer = StyleComposer::new(self.pool, &collection.theme_style);
        let style_request = StyleRequest::new(request.element, &request.rarity)
            .inheriting(request.inherited.as_ref())
            .in_series(request.series_index)
            .with_subject(request.subject_override.as_deref());
        let style = composer.compose(style_request, &mut collection.subjects_seen, &mut self.rng)?;

        let index = collection.cards.len() as u32 + 1;
        let mut card = Card::new(
            index,
            request.rarity,
            stats,
            request.series_index.is_some(),
            style,
        );

        if self.naming.is_enabled() {
            let name = name_card(self.naming, &card, &collection.names_seen);
            card.rename(name);
        }

        debug!(
            index,
            name = %card.name,
            rarity = %card.rarity.name,
            budget,
            hp = card.hp,
            atk = card.atk,
            res = card.res,
            spd = card.spd,
            subject = %card.style.subject,
            "generated card"
        );

        collection.names_seen.insert(card.name.clone());
        collection.cards.push(card);
        Ok(&collection.cards[collection.cards.len() - 1])
    }

    /// Generate a full collection.
    ///
    /// For each rarity in order: `series_per_rarity` evolution series of
    /// `series_length` stages, then `singles_per_rarity` standalone cards.
    /// Stage 0 of a series picks a fresh subject; later stages inherit the
    /// previous stage's style.
    pub fn generate_random_cards<'c>(
        &mut self,
        collection: &'c mut Collection,
        config: &GeneratorConfig,
        element: Element,
        subject_override: Option<&str>,
    ) -> Result<&'c [Card]> {
        let rarities = collection.rarities.clone();

        for rarity in rarities {
            for _ in 0..config.series_per_rarity {
                let mut parent: Option<Style> = None;
                for stage in 0..config.series_length {
                    let request = CardRequest::new(element, rarity.clone())
                        .series_stage(stage, parent.take())
                        .with_subject(subject_override);
                    let card = self.generate_card(collection, request)?;
                    parent = Some(card.style.clone());
                }
            }

            for _ in 0..config.singles_per_rarity {
                let request =
                    CardRequest::new(element, rarity.clone()).with_subject(subject_override);
                self.generate_card(collection, request)?;
            }
        }

        info!(
            collection = %collection.name,
            cards = collection.len(),
            subjects = collection.subjects_seen.len(),
            "collection generated"
        );
        Ok(collection.cards())
    }
}
