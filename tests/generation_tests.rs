//! End-to-end generation tests.
//!
//! These drive the public API the way the binary does: build the content
//! pool, pick a naming service, generate into a collection.

use std::cell::RefCell;

use card_forge::cards::PLACEHOLDER_NAME;
use card_forge::generation::classic_collection;
use card_forge::naming::ERROR_NAME;
use card_forge::{
    ability_point_costs, allocate_stats, points_budget, run_batch, CardGenerator, CardRequest,
    Collection, ContentPool, DisabledNaming, Element, ForgeRng, GeneratorConfig, NameCandidate,
    NamingError, NamingService, Rarity, Stats, Style,
};

/// Naming service that hands out scripted replies in order.
struct ScriptedNaming {
    replies: RefCell<Vec<Result<Vec<NameCandidate>, NamingError>>>,
    calls: RefCell<usize>,
}

impl ScriptedNaming {
    fn new(mut replies: Vec<Result<Vec<NameCandidate>, NamingError>>) -> Self {
        replies.reverse();
        Self {
            replies: RefCell::new(replies),
            calls: RefCell::new(0),
        }
    }
}

impl NamingService for ScriptedNaming {
    fn is_enabled(&self) -> bool {
        true
    }

    fn complete(&self, _prompt: &str) -> Result<Vec<NameCandidate>, NamingError> {
        *self.calls.borrow_mut() += 1;
        self.replies
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Ok(vec![NameCandidate::new("Spare")]))
    }
}

fn neutral_collection() -> Collection {
    Collection::new(
        "neutral",
        Style::theme("Monster", "--niji"),
        Element::Neutral,
        Rarity::standard_tiers(),
    )
}

// =============================================================================
// Stat allocation
// =============================================================================

#[test]
fn test_epic_standalone_reference_run() {
    let budget = points_budget(2, 1);
    assert_eq!(budget, 6);

    let mut rng = ForgeRng::new(42);
    assert_eq!(ability_point_costs(budget, 2, &mut rng).as_slice(), &[4, 2]);

    let stats = allocate_stats(budget, &mut ForgeRng::new(42));
    assert_eq!(stats, Stats { hp: 60, atk: 6, res: 6, spd: 8 });
}

#[test]
fn test_only_hp_scales_with_budget() {
    let mut rng = ForgeRng::new(13);
    for budget in [3, 6, 12] {
        for _ in 0..100 {
            let stats = allocate_stats(budget, &mut rng);
            assert!(stats.hp >= budget);
            assert!((4..=10).contains(&stats.atk));
            assert!((1..=8).contains(&stats.res));
            assert!((1..=10).contains(&stats.spd));
        }
    }
}

// =============================================================================
// Collection generation
// =============================================================================

#[test]
fn test_fifty_neutral_cards() {
    let pool = ContentPool::builtin().unwrap();
    let naming = DisabledNaming;
    let mut generator = CardGenerator::new(&pool, &naming, ForgeRng::new(50));
    let mut collection = neutral_collection();

    for i in 0..50u32 {
        let rarity = Rarity::new(i % 4, "Tier");
        generator
            .generate_card(&mut collection, CardRequest::new(Element::Neutral, rarity))
            .unwrap();
    }

    let indices: Vec<u32> = collection.cards().iter().map(|c| c.index).collect();
    assert_eq!(indices, (1..=50).collect::<Vec<_>>());

    // Far more cards than subjects: the seen-set covers the whole pool.
    let pool_size = pool.creature_types_for(Element::Neutral).unwrap().len();
    assert_eq!(collection.subjects_seen().len(), pool_size);
}

#[test]
fn test_first_cards_use_distinct_subjects() {
    let pool = ContentPool::builtin().unwrap();
    let naming = DisabledNaming;
    let mut generator = CardGenerator::new(&pool, &naming, ForgeRng::new(8));
    let mut collection = neutral_collection();

    let pool_size = pool.creature_types_for(Element::Neutral).unwrap().len();
    for _ in 0..pool_size {
        generator
            .generate_card(
                &mut collection,
                CardRequest::new(Element::Neutral, Rarity::new(1, "Uncommon")),
            )
            .unwrap();
    }

    let mut subjects: Vec<&str> = collection
        .cards()
        .iter()
        .map(|c| c.style.subject.as_str())
        .collect();
    subjects.sort_unstable();
    subjects.dedup();
    assert_eq!(subjects.len(), pool_size);
}

#[test]
fn test_pre_seen_pool_falls_back_to_repeats() {
    let pool = ContentPool::builtin().unwrap();
    let naming = DisabledNaming;
    let mut generator = CardGenerator::new(&pool, &naming, ForgeRng::new(77));
    let mut collection = neutral_collection();
    for creature in pool.creature_types_for(Element::Neutral).unwrap() {
        collection.mark_subject_seen(creature.name.clone());
    }

    for _ in 0..5 {
        let card = generator
            .generate_card(
                &mut collection,
                CardRequest::new(Element::Neutral, Rarity::new(2, "Rare")),
            )
            .unwrap();
        let subjects = pool.creature_types_for(Element::Neutral).unwrap();
        assert!(subjects.iter().any(|c| c.name == card.style.subject));
    }
    assert_eq!(collection.len(), 5);
}

#[test]
fn test_prompt_shape() {
    let pool = ContentPool::builtin().unwrap();
    let naming = DisabledNaming;
    let mut generator = CardGenerator::new(&pool, &naming, ForgeRng::new(31));
    let mut collection = neutral_collection();

    let card = generator
        .generate_card(
            &mut collection,
            CardRequest::new(Element::Neutral, Rarity::new(0, "Common")),
        )
        .unwrap();

    let prefix = format!("{PLACEHOLDER_NAME}, enemy, a ");
    assert!(card.image_prompt.starts_with(&prefix));
    assert!(card.image_prompt.ends_with(" background, --niji"));
    assert!(!card.image_prompt.contains("  "));
    assert!(!card.image_prompt.contains(" ,"));
}

#[test]
fn test_classic_batch_is_reproducible() {
    let pool = ContentPool::builtin().unwrap();
    let config = GeneratorConfig::new().with_seed(1234);

    let first = run_batch(vec![classic_collection()], &config, &pool, &DisabledNaming, None).unwrap();
    let second =
        run_batch(vec![classic_collection()], &config, &pool, &DisabledNaming, None).unwrap();

    let a = first.collections[0].cards();
    let b = second.collections[0].cards();
    assert_eq!(a.len(), 4 * (3 + 3));
    assert_eq!(a, b);
}

#[test]
fn test_capstones_use_reserved_ambience() {
    let pool = ContentPool::builtin().unwrap();
    let config = GeneratorConfig::new().with_seed(5).with_series_per_rarity(2);

    let run = run_batch(vec![classic_collection()], &config, &pool, &DisabledNaming, None).unwrap();

    for card in run.collections[0].cards() {
        let capstone = card.part_of_evolution
            && card.rarity.index >= 2
            && card.style.subject_adjectives.last().is_some_and(|d| d.starts_with("massive"));
        if capstone {
            assert_eq!(card.style.ambience, "off-white");
        } else {
            assert_ne!(card.style.ambience, "off-white");
            assert!(card.style.ambience.ends_with(" background"));
        }
    }
}

// =============================================================================
// Naming
// =============================================================================

#[test]
fn test_names_are_deduplicated_across_cards() {
    let pool = ContentPool::builtin().unwrap();
    let naming = ScriptedNaming::new(vec![
        Ok(vec![NameCandidate::new("Ember")]),
        Ok(vec![NameCandidate::new("ember"), NameCandidate::new("Blaze")]),
    ]);
    let mut generator = CardGenerator::new(&pool, &naming, ForgeRng::new(2));
    let mut collection = neutral_collection();

    let first = generator
        .generate_card(&mut collection, CardRequest::new(Element::Neutral, Rarity::new(1, "Uncommon")))
        .unwrap()
        .name
        .clone();
    let second = generator
        .generate_card(&mut collection, CardRequest::new(Element::Neutral, Rarity::new(1, "Uncommon")))
        .unwrap();

    assert_eq!(first, "Ember");
    assert_eq!(second.name, "Blaze");
    assert!(second.image_prompt.starts_with("Blaze, enemy, "));
    assert_eq!(second.image_file(), "002_blaze.png");
    assert!(collection.names_seen().contains("Ember"));
    assert!(collection.names_seen().contains("Blaze"));
}

#[test]
fn test_names_from_a_previous_run_are_avoided() {
    let pool = ContentPool::builtin().unwrap();
    let naming = ScriptedNaming::new(vec![Ok(vec![
        NameCandidate::new("Ember"),
        NameCandidate::new("Blaze"),
    ])]);
    let mut generator = CardGenerator::new(&pool, &naming, ForgeRng::new(4));
    let mut collection = neutral_collection();
    collection.mark_name_seen("Ember");

    let card = generator
        .generate_card(&mut collection, CardRequest::new(Element::Neutral, Rarity::new(1, "Uncommon")))
        .unwrap();

    assert_eq!(card.name, "Blaze");
    assert_eq!(collection.names_seen().len(), 2);
}

#[test]
fn test_naming_failure_does_not_stop_generation() {
    let pool = ContentPool::builtin().unwrap();
    let naming = ScriptedNaming::new(vec![
        Err(NamingError::Transient("service down".to_owned())),
        Ok(vec![NameCandidate::new("Rootmaw")]),
    ]);
    let mut generator = CardGenerator::new(&pool, &naming, ForgeRng::new(9));
    let mut collection = neutral_collection();

    for _ in 0..2 {
        generator
            .generate_card(&mut collection, CardRequest::new(Element::Neutral, Rarity::new(0, "Common")))
            .unwrap();
    }

    let names: Vec<&str> = collection.cards().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec![ERROR_NAME, "Rootmaw"]);
    assert_eq!(*naming.calls.borrow(), 2);
}

#[test]
fn test_disabled_naming_keeps_placeholder() {
    let pool = ContentPool::builtin().unwrap();
    let config = GeneratorConfig::new()
        .with_seed(3)
        .with_singles_per_rarity(1)
        .with_series_per_rarity(0);

    let run = run_batch(vec![classic_collection()], &config, &pool, &DisabledNaming, None).unwrap();
    assert!(run.collections[0]
        .cards()
        .iter()
        .all(|c| c.name == PLACEHOLDER_NAME));
}
