//! Built-in vocabularies.
//!
//! Static reference data for the classic monster collection. Everything
//! here is assembled once by [`ContentPool::builtin`](super::ContentPool::builtin)
//! and never mutated afterwards.

use super::creature::{CreatureType, Detail};

/// Adjectives applied to a rendered detail ("holding a *golden* sword").
pub const DETAIL_ADJECTIVES: [&str; 8] = [
    "dark",
    "golden",
    "ornate",
    "ancient",
    "rust",
    "broken",
    "royal",
    "enchanted",
];

/// Ambiences for the neutral element. The last entry is reserved for the
/// capstone card of a fully evolved series.
pub const NEUTRAL_AMBIENCES: [&str; 3] = ["parchment", "old paper", "off-white"];

/// Rarity adjective vocabulary for a tier.
#[must_use]
pub fn rarity_adjectives(tier: u32) -> &'static [&'static str] {
    match tier {
        0 => &["simple", "basic"],
        1 => &["strong", "special"],
        2 => &["legendary", "epic", "mythical"],
        _ => &[""],
    }
}

/// Series adjective vocabulary for a stage.
#[must_use]
pub fn series_adjectives(stage: u32) -> &'static [&'static str] {
    match stage {
        0 => &["common"],
        1 => &["normal"],
        2 => &["massive"],
        3 => &["gigantic"],
        _ => &[""],
    }
}

fn holdable_weapons() -> Vec<Detail> {
    [
        ("sword", "a"),
        ("bow", "a"),
        ("staff", "a"),
        ("shield", "a"),
        ("axe", "an"),
        ("dagger", "a"),
        ("spear", "a"),
        ("mace", "a"),
        ("hammer", "a"),
        ("club", "a"),
        ("lance", "a"),
        ("whip", "a"),
        ("glaive", "a"),
    ]
    .into_iter()
    .map(|(feature, article)| Detail::holding(feature, Some(article)))
    .collect()
}

fn wearables() -> Vec<Detail> {
    vec![
        Detail::wearing("armor", None),
        Detail::wearing("bracers", None),
        Detail::wearing("mask", Some("a")),
        Detail::wearing("crown", Some("a")),
    ]
}

/// Detail given to ad-hoc subjects that are not in the catalogue.
#[must_use]
pub fn fallback_detail() -> Detail {
    Detail::wearing("armor", None)
}

fn armed(name: &str) -> CreatureType {
    let mut details = holdable_weapons();
    details.extend(wearables());
    CreatureType::new(name, details)
}

fn winged_insect(name: &str) -> CreatureType {
    CreatureType::new(name, vec![Detail::with("wings", None)])
}

/// Subjects drawn for the neutral element.
#[must_use]
pub fn neutral_creatures() -> Vec<CreatureType> {
    vec![
        // Land creatures
        armed("orc"),
        armed("elf"),
        armed("gnome"),
        armed("goblin"),
        // Reptiles
        CreatureType::new(
            "reptile",
            vec![
                Detail::with("tail", Some("a")),
                Detail::with("skin", None),
                Detail::with("claws", None),
            ],
        ),
        CreatureType::new(
            "dragon",
            vec![
                Detail::with("claws", None),
                Detail::with("horns", None),
                Detail::with("scales", None),
                Detail::with("tail", Some("a")),
                Detail::with("wings", None),
            ],
        ),
        // Insects
        winged_insect("mantis"),
        winged_insect("beetle"),
        winged_insect("dragonfly"),
        CreatureType::new("spider", vec![]),
    ]
}

/// Subjects that are recognised by name but never drawn at random.
#[must_use]
pub fn reserve_creatures() -> Vec<CreatureType> {
    vec![
        winged_insect("butterfly"),
        winged_insect("scorpion"),
        CreatureType::new("pumpkin", vec![Detail::with("skin", None)]),
        CreatureType::new("ghost", vec![Detail::with("skin", None)]),
        CreatureType::new("treant", vec![Detail::with("skin", None)]),
        armed("golem"),
    ]
}
