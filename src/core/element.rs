//! Element tags partitioning the content pools.

use serde::{Deserialize, Serialize};

/// Thematic partition for content pools.
///
/// Every pool lookup is keyed by element. The content pool is validated at
/// startup to cover every variant listed in [`Element::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    /// Untyped creatures; the default element for classic collections.
    Neutral,
}

impl Element {
    /// Every declared element.
    pub const ALL: [Element; 1] = [Element::Neutral];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
