//! Visual style descriptors.
//!
//! A `Style` is everything the prompt builders need to describe a card's
//! artwork. A collection carries one *theme* style whose framing (prefix,
//! suffix, subject type, base adjectives, environment) is copied into every
//! card's style.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered adjective list. Most styles carry one or two entries.
pub type Adjectives = SmallVec<[String; 4]>;

/// Structured description of a card's artwork.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Creature subject ("dragon").
    pub subject: String,

    /// Adjectives placed before the subject, in render order.
    pub subject_adjectives: Adjectives,

    /// Rendered detail phrase ("holding a golden sword"). May be empty.
    pub detail: String,

    /// Background ambience ("parchment background").
    pub ambience: String,

    /// Environment the creature lives in, if the theme names one.
    pub environment: Option<String>,

    /// Theme-level text placed before the prompt.
    pub style_prefix: String,

    /// Theme-level text placed after the prompt ("--niji").
    pub style_suffix: String,

    /// Thematic label for the subject ("Monster"), used in naming prompts.
    pub subject_type: String,
}

impl Style {
    /// Create a theme style.
    ///
    /// ```
    /// use card_forge::cards::Style;
    ///
    /// let theme = Style::theme("Monster", "--niji").with_base_adjective("cute");
    /// assert_eq!(theme.subject_type, "Monster");
    /// assert_eq!(theme.subject_adjectives.as_slice(), ["cute".to_string()]);
    /// ```
    pub fn theme(subject_type: impl Into<String>, style_suffix: impl Into<String>) -> Self {
        Self {
            subject_type: subject_type.into(),
            style_suffix: style_suffix.into(),
            ..Self::default()
        }
    }

    /// Set the style prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.style_prefix = prefix.into();
        self
    }

    /// Append a base adjective inherited by every card of the theme.
    #[must_use]
    pub fn with_base_adjective(mut self, adjective: impl Into<String>) -> Self {
        self.subject_adjectives.push(adjective.into());
        self
    }

    /// Set the environment.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// A fresh card style carrying this theme's framing.
    ///
    /// Subject, detail, ambience and adjectives are left empty for the
    /// composer to fill in.
    #[must_use]
    pub fn framed_by(theme: &Style) -> Self {
        Self {
            style_prefix: theme.style_prefix.clone(),
            style_suffix: theme.style_suffix.clone(),
            subject_type: theme.subject_type.clone(),
            environment: theme.environment.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_builder() {
        let theme = Style::theme("Monster", "--niji")
            .with_prefix("card art")
            .with_base_adjective("cute")
            .with_base_adjective("round")
            .with_environment("forest");

        assert_eq!(theme.style_prefix, "card art");
        assert_eq!(theme.style_suffix, "--niji");
        assert_eq!(theme.subject_adjectives.len(), 2);
        assert_eq!(theme.environment.as_deref(), Some("forest"));
    }

    #[test]
    fn test_framed_by_copies_framing_only() {
        let theme = Style::theme("Monster", "--niji")
            .with_base_adjective("cute")
            .with_environment("cave");

        let style = Style::framed_by(&theme);

        assert_eq!(style.subject_type, "Monster");
        assert_eq!(style.style_suffix, "--niji");
        assert_eq!(style.environment.as_deref(), Some("cave"));
        assert!(style.subject_adjectives.is_empty());
        assert!(style.subject.is_empty());
    }

    #[test]
    fn test_style_serialization() {
        let style = Style::theme("Monster", "--niji").with_base_adjective("cute");
        let json = serde_json::to_string(&style).unwrap();
        let back: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(style, back);
    }
}
