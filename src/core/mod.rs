//! Core types: elements, rarities, RNG, configuration.
//!
//! These are shared by the content pool, the generators and the
//! collection orchestrator.

pub mod config;
pub mod element;
pub mod rarity;
pub mod rng;

pub use config::{GeneratorConfig, NamingConfig};
pub use element::Element;
pub use rarity::Rarity;
pub use rng::ForgeRng;
