//! Style composition.
//!
//! Picks a subject, a detail, an adjective descriptor and an ambience for
//! one card. Subject and detail picks avoid anything already in the run's
//! seen-set until the pool is exhausted, after which repeats are allowed.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::cards::Style;
use crate::content::{ContentPool, CreatureType};
use crate::core::{Element, ForgeRng, Rarity};
use crate::error::{ForgeError, Result};

/// Rarity tier from which descriptors carry the rarity adjective and the
/// capstone ambience is used.
pub const EPIC_TIER: u32 = 2;

/// Series stage that receives the reserved ambience.
pub const CAPSTONE_STAGE: u32 = 2;

/// Inputs for composing one card's style.
#[derive(Clone, Copy, Debug)]
pub struct StyleRequest<'a> {
    /// Parent style in an evolution series. Subject, detail and environment
    /// are copied from it.
    pub inherited: Option<&'a Style>,

    /// Element whose pools are drawn from.
    pub element: Element,

    /// Rarity of the card.
    pub rarity: &'a Rarity,

    /// Series stage, if the card is part of a series.
    pub series_index: Option<u32>,

    /// User-supplied subject name.
    pub subject_override: Option<&'a str>,
}

impl<'a> StyleRequest<'a> {
    /// A standalone card with a free subject choice.
    pub fn new(element: Element, rarity: &'a Rarity) -> Self {
        Self {
            inherited: None,
            element,
            rarity,
            series_index: None,
            subject_override: None,
        }
    }

    /// Inherit from a parent style.
    #[must_use]
    pub fn inheriting(mut self, parent: Option<&'a Style>) -> Self {
        self.inherited = parent;
        self
    }

    /// Set the series stage.
    #[must_use]
    pub fn in_series(mut self, series_index: Option<u32>) -> Self {
        self.series_index = series_index;
        self
    }

    /// Force a subject.
    #[must_use]
    pub fn with_subject(mut self, subject: Option<&'a str>) -> Self {
        self.subject_override = subject;
        self
    }
}

/// Builds card styles for one themed collection.
#[derive(Clone, Copy, Debug)]
pub struct StyleComposer<'a> {
    pool: &'a ContentPool,
    theme: &'a Style,
}

impl<'a> StyleComposer<'a> {
    /// Create a composer drawing from `pool`, framed by `theme`.
    pub fn new(pool: &'a ContentPool, theme: &'a Style) -> Self {
        Self { pool, theme }
    }

    /// Compose a style.
    ///
    /// `subjects_seen` is the run's dedup set. Freely chosen subjects are
    /// added to it; detail candidates are filtered against the same set.
    pub fn compose(
        &self,
        request: StyleRequest<'_>,
        subjects_seen: &mut FxHashSet<String>,
        rng: &mut ForgeRng,
    ) -> Result<Style> {
        let mut style = Style::framed_by(self.theme);

        match request.inherited {
            Some(parent) => {
                style.subject = parent.subject.clone();
                style.detail = parent.detail.clone();
                style.environment = parent.environment.clone();
            }
            None => {
                let subject = self.pick_subject(&request, subjects_seen, rng)?;
                style.subject = subject.name.clone();
                style.detail = self.pick_detail(&subject, request.element, subjects_seen, rng);
            }
        }

        style.subject_adjectives = self.theme.subject_adjectives.clone();
        style
            .subject_adjectives
            .push(self.descriptor(request.rarity, request.series_index, rng));

        style.ambience = if request.rarity.index >= EPIC_TIER
            && request.series_index == Some(CAPSTONE_STAGE)
        {
            self.pool.reserved_ambience(request.element)?.to_owned()
        } else {
            format!("{} background", self.pool.random_ambience(request.element, rng)?)
        };

        trace!(
            subject = %style.subject,
            detail = %style.detail,
            ambience = %style.ambience,
            "composed style"
        );
        Ok(style)
    }

    fn pick_subject(
        &self,
        request: &StyleRequest<'_>,
        subjects_seen: &mut FxHashSet<String>,
        rng: &mut ForgeRng,
    ) -> Result<CreatureType> {
        if let Some(name) = request.subject_override {
            return Ok(self.pool.closest_match(name));
        }

        let all = self.pool.creature_types_for(request.element)?;
        let mut candidates: Vec<&CreatureType> =
            all.iter().filter(|c| !subjects_seen.contains(&c.name)).collect();
        if candidates.is_empty() {
            candidates = all.iter().collect();
        }

        // Pools are validated non-empty at startup.
        let subject = rng
            .choose(&candidates)
            .map(|c| (*c).clone())
            .ok_or(ForgeError::UnknownElement(request.element))?;
        subjects_seen.insert(subject.name.clone());
        Ok(subject)
    }

    fn pick_detail(
        &self,
        subject: &CreatureType,
        element: Element,
        subjects_seen: &FxHashSet<String>,
        rng: &mut ForgeRng,
    ) -> String {
        let mut candidates: Vec<_> = subject
            .details
            .iter()
            .filter(|d| !subjects_seen.contains(&d.feature))
            .collect();
        if candidates.is_empty() {
            candidates = subject.details.iter().collect();
        }

        match rng.choose(&candidates) {
            Some(detail) => {
                let adjective = self.pool.random_detail_adjective(element, rng);
                detail.text(Some(adjective))
            }
            None => String::new(),
        }
    }

    fn descriptor(&self, rarity: &Rarity, series_index: Option<u32>, rng: &mut ForgeRng) -> String {
        let rarity_adjective = self.pool.random_rarity_adjective(rarity.index, rng);
        let series_adjective = self.pool.random_series_adjective(series_index, rng);

        match series_index {
            Some(_) if rarity.index >= EPIC_TIER => format!("{series_adjective} {rarity_adjective}"),
            Some(_) => series_adjective.to_owned(),
            None => rarity_adjective.to_owned(),
        }
    }
}
