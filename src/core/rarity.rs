//! Rarity tiers.
//!
//! A rarity is an ordered tier index plus a display name. The index drives
//! both the points budget and the adjective vocabulary, so tiers must be
//! numbered from 0 with no gaps.

use serde::{Deserialize, Serialize};

/// Ordered rarity tier.
///
/// Tier 0 is the most common. Higher indices are rarer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rarity {
    /// Tier index (0-based, increasing rarity).
    pub index: u32,

    /// Display name.
    pub name: String,
}

impl Rarity {
    /// Create a new rarity tier.
    pub fn new(index: u32, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    /// The four tiers used by the classic collection.
    ///
    /// ```
    /// use card_forge::core::Rarity;
    ///
    /// let tiers = Rarity::standard_tiers();
    /// assert_eq!(tiers.len(), 4);
    /// assert_eq!(tiers[2].name, "Rare");
    /// ```
    #[must_use]
    pub fn standard_tiers() -> Vec<Rarity> {
        ["Common", "Uncommon", "Rare", "Legendary"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| Rarity::new(i as u32, name))
            .collect()
    }

    /// Star banner used when printing a card: one star per tier.
    #[must_use]
    pub fn stars(&self) -> String {
        "★ ".repeat(self.index as usize + 1)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.index)
    }
}
