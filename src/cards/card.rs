//! Generated cards and their structured (exported) form.
//!
//! A `Card`'s stats and style are fixed when it is created. Only the name
//! changes afterwards, once, when the naming service answers; the derived
//! prompt text is refreshed at the same time.
//!
//! `CardRecord` is the flat mapping consumed by the export and render
//! tools. A card can be rebuilt from its record; the style is not part of
//! the record and comes back empty.

use serde::{Deserialize, Serialize};

use super::style::Style;
use super::text;
use crate::core::Rarity;

/// Name given to cards before the naming service has answered.
pub const PLACEHOLDER_NAME: &str = "Untitled Card";

/// The four numeric stats of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    /// Hit points.
    pub hp: i32,
    /// Attack.
    pub atk: i32,
    /// Resistance.
    pub res: i32,
    /// Speed.
    pub spd: i32,
}

/// A generated card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// 1-based position in the collection.
    pub index: u32,

    /// Display name.
    pub name: String,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Hit points.
    pub hp: i32,

    /// Attack.
    pub atk: i32,

    /// Resistance.
    pub res: i32,

    /// Speed.
    pub spd: i32,

    /// Whether the card is a stage of an evolution series.
    pub part_of_evolution: bool,

    /// Artwork descriptor.
    pub style: Style,

    /// Prompt for the image model.
    pub image_prompt: String,

    /// Plain-language description.
    pub visual_description: String,
}

impl Card {
    /// Create a card with the placeholder name and derived text filled in.
    pub fn new(index: u32, rarity: Rarity, stats: Stats, part_of_evolution: bool, style: Style) -> Self {
        let mut card = Self {
            index,
            name: PLACEHOLDER_NAME.to_owned(),
            rarity,
            hp: stats.hp,
            atk: stats.atk,
            res: stats.res,
            spd: stats.spd,
            part_of_evolution,
            style,
            image_prompt: String::new(),
            visual_description: String::new(),
        };
        card.refresh_text();
        card
    }

    /// The card's stats.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        Stats {
            hp: self.hp,
            atk: self.atk,
            res: self.res,
            spd: self.spd,
        }
    }

    /// Replace the name and recompute the derived text.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.refresh_text();
    }

    fn refresh_text(&mut self) {
        self.image_prompt = text::image_prompt(self);
        self.visual_description = text::visual_description(self);
    }

    /// Lowercase name with spaces replaced by underscores.
    #[must_use]
    pub fn snake_case_name(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    /// File name of the card's artwork: `{index:03}_{snake_case_name}.png`.
    ///
    /// ```
    /// use card_forge::cards::{Card, Stats, Style};
    /// use card_forge::core::Rarity;
    ///
    /// let mut card = Card::new(7, Rarity::new(0, "Common"), Stats::default(), false, Style::default());
    /// card.rename("Ember Drake");
    /// assert_eq!(card.image_file(), "007_ember_drake.png");
    /// ```
    #[must_use]
    pub fn image_file(&self) -> String {
        format!("{:03}_{}.png", self.index, self.snake_case_name())
    }

    /// Flat structured form for export.
    #[must_use]
    pub fn to_record(&self) -> CardRecord {
        CardRecord {
            index: self.index,
            name: self.name.clone(),
            rarity: self.rarity.name.clone(),
            rarity_index: self.rarity.index,
            hp: self.hp,
            atk: self.atk,
            res: self.res,
            spd: self.spd,
            image_prompt: self.image_prompt.clone(),
            image_file: self.image_file(),
        }
    }

    /// Rebuild a card from its structured form.
    ///
    /// The style is not recorded, so it comes back empty; the image prompt
    /// is taken from the record verbatim.
    #[must_use]
    pub fn from_record(record: &CardRecord) -> Self {
        Self {
            index: record.index,
            name: record.name.clone(),
            rarity: Rarity::new(record.rarity_index, record.rarity.clone()),
            hp: record.hp,
            atk: record.atk,
            res: record.res,
            spd: record.spd,
            part_of_evolution: false,
            style: Style::default(),
            image_prompt: record.image_prompt.clone(),
            visual_description: String::new(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ", self.name)?;
        writeln!(f, "HP: {}", self.hp)?;
        writeln!(f, "ATK: {}", self.atk)?;
        writeln!(f, "RES: {}", self.res)?;
        writeln!(f, "SPD: {}", self.spd)?;
        writeln!(f, "Rarity: {}({})", self.rarity.stars(), self.rarity.name)?;
        writeln!(f, "Image Prompt:")?;
        writeln!(f, "{}", self.image_prompt)
    }
}

/// Structured form of a card, as written by the exporter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// 1-based position in the collection.
    pub index: u32,
    /// Display name.
    pub name: String,
    /// Rarity display name.
    pub rarity: String,
    /// Rarity tier index.
    pub rarity_index: u32,
    /// Hit points.
    pub hp: i32,
    /// Attack.
    pub atk: i32,
    /// Resistance.
    pub res: i32,
    /// Speed.
    pub spd: i32,
    /// Prompt for the image model.
    pub image_prompt: String,
    /// Artwork file name.
    pub image_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Card {
        let mut style = Style::theme("Monster", "--niji");
        style.subject = "goblin".to_owned();
        style.subject_adjectives.push("strong".to_owned());
        style.detail = "holding a rust club".to_owned();
        style.ambience = "old paper background".to_owned();

        Card::new(
            12,
            Rarity::new(1, "Uncommon"),
            Stats { hp: 48, atk: 7, res: 2, spd: 9 },
            true,
            style,
        )
    }

    #[test]
    fn test_new_card_has_placeholder_and_prompt() {
        let card = sample();
        assert_eq!(card.name, PLACEHOLDER_NAME);
        assert!(card.image_prompt.starts_with("Untitled Card, enemy, a strong goblin"));
        assert_eq!(card.stats(), Stats { hp: 48, atk: 7, res: 2, spd: 9 });
    }

    #[test]
    fn test_rename_refreshes_prompt() {
        let mut card = sample();
        card.rename("Grubnak");
        assert_eq!(card.name, "Grubnak");
        assert!(card.image_prompt.starts_with("Grubnak, enemy, "));
        assert_eq!(card.image_file(), "012_grubnak.png");
    }

    #[test]
    fn test_record_round_trip() {
        let mut card = sample();
        card.rename("Mud Biter");

        let record = card.to_record();
        assert_eq!(record.rarity, "Uncommon");
        assert_eq!(record.rarity_index, 1);
        assert_eq!(record.image_file, "012_mud_biter.png");

        let json = serde_json::to_string(&record).unwrap();
        let parsed: CardRecord = serde_json::from_str(&json).unwrap();
        let rebuilt = Card::from_record(&parsed);

        assert_eq!(rebuilt.index, card.index);
        assert_eq!(rebuilt.name, card.name);
        assert_eq!(rebuilt.rarity, card.rarity);
        assert_eq!(rebuilt.stats(), card.stats());
        assert_eq!(rebuilt.image_prompt, card.image_prompt);
        assert_eq!(rebuilt.to_record(), record);
    }

    #[test]
    fn test_record_keys() {
        let json = serde_json::to_value(sample().to_record()).unwrap();
        for key in [
            "index", "name", "rarity", "rarity_index", "hp", "atk", "res", "spd",
            "image_prompt", "image_file",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_display() {
        let shown = format!("{}", sample());
        assert!(shown.starts_with("Untitled Card \nHP: 48\nATK: 7\n"));
        assert!(shown.contains("Rarity: ★ ★ (Uncommon)"));
        assert!(shown.contains("Image Prompt:\n"));
    }
}
