//! Card system: generated cards, styles and derived text.
//!
//! ## Key Types
//!
//! - `Card`: A generated card with stats, rarity and style
//! - `Stats`: HP, attack, resistance, speed
//! - `Style`: Structured artwork descriptor
//! - `CardRecord`: Flat structured form used for export

pub mod card;
pub mod style;
pub mod text;

pub use card::{Card, CardRecord, Stats, PLACEHOLDER_NAME};
pub use style::{Adjectives, Style};
