//! Creature subjects and their physical details.
//!
//! A `CreatureType` is a named subject ("dragon") with the details that can
//! decorate it ("with wings", "holding a sword"). Both types compare by a
//! single key so they can be filtered against the run's seen-set:
//! creatures by name, details by feature noun.

use serde::{Deserialize, Serialize};

/// How a detail attaches to its subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// Body part: "with claws".
    With,
    /// Worn item: "wearing a crown".
    Wearing,
    /// Held weapon: "holding a spear".
    Holding,
}

impl Relation {
    /// The relation word used in rendered text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Relation::With => "with",
            Relation::Wearing => "wearing",
            Relation::Holding => "holding",
        }
    }
}

/// A physical-feature descriptor.
///
/// Identity is the feature noun alone: `with horns` and `wearing horns`
/// are the same detail for dedup purposes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Detail {
    /// Relation word.
    pub relation: Relation,

    /// Feature noun ("sword", "scales").
    pub feature: String,

    /// Optional article placed before the feature ("a", "an").
    pub quantifier: Option<String>,
}

impl Detail {
    /// Create a detail.
    pub fn new(relation: Relation, feature: impl Into<String>, quantifier: Option<&str>) -> Self {
        Self {
            relation,
            feature: feature.into(),
            quantifier: quantifier.map(str::to_owned),
        }
    }

    /// `with {feature}`
    pub fn with(feature: &str, quantifier: Option<&str>) -> Self {
        Self::new(Relation::With, feature, quantifier)
    }

    /// `wearing {feature}`
    pub fn wearing(feature: &str, quantifier: Option<&str>) -> Self {
        Self::new(Relation::Wearing, feature, quantifier)
    }

    /// `holding {feature}`
    pub fn holding(feature: &str, quantifier: Option<&str>) -> Self {
        Self::new(Relation::Holding, feature, quantifier)
    }

    /// Render the detail, optionally with an adjective before the feature.
    ///
    /// ```
    /// use card_forge::content::Detail;
    ///
    /// let sword = Detail::holding("sword", Some("a"));
    /// assert_eq!(sword.text(Some("golden")), "holding a golden sword");
    /// assert_eq!(sword.text(None), "holding a sword");
    /// ```
    #[must_use]
    pub fn text(&self, adjective: Option<&str>) -> String {
        let quantifier = match self.quantifier.as_deref() {
            Some(q) if !q.is_empty() => format!("{q} "),
            _ => String::new(),
        };
        match adjective {
            Some(adj) if !adj.is_empty() => {
                format!("{} {quantifier}{adj} {}", self.relation.as_str(), self.feature)
            }
            _ => format!("{} {quantifier}{}", self.relation.as_str(), self.feature),
        }
    }
}

impl PartialEq for Detail {
    fn eq(&self, other: &Self) -> bool {
        self.feature == other.feature
    }
}

impl Eq for Detail {}

impl std::hash::Hash for Detail {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.feature.hash(hasher);
    }
}

/// A named creature subject with its possible details.
///
/// Identity is the name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatureType {
    /// Subject name ("dragon").
    pub name: String,

    /// Details that may decorate this subject. May be empty.
    pub details: Vec<Detail>,
}

impl CreatureType {
    /// Create a creature type.
    pub fn new(name: impl Into<String>, details: Vec<Detail>) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }
}

impl PartialEq for CreatureType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CreatureType {}

impl std::hash::Hash for CreatureType {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.name.hash(hasher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_detail_text_with_quantifier() {
        let axe = Detail::holding("axe", Some("an"));
        assert_eq!(axe.text(Some("ancient")), "holding an ancient axe");
    }

    #[test]
    fn test_detail_text_without_quantifier() {
        let claws = Detail::with("claws", None);
        assert_eq!(claws.text(Some("dark")), "with dark claws");
        assert_eq!(claws.text(None), "with claws");
    }

    #[test]
    fn test_empty_quantifier_is_skipped() {
        let carapace = Detail::with("carapace", Some(""));
        assert_eq!(carapace.text(Some("rust")), "with rust carapace");
    }

    #[test]
    fn test_empty_adjective_is_skipped() {
        let crown = Detail::wearing("crown", Some("a"));
        assert_eq!(crown.text(Some("")), "wearing a crown");
    }

    #[test]
    fn test_detail_identity_is_feature() {
        let a = Detail::with("horns", None);
        let b = Detail::wearing("horns", Some("a"));
        assert_eq!(a, b);

        let set: FxHashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_creature_identity_is_name() {
        let a = CreatureType::new("dragon", vec![Detail::with("wings", None)]);
        let b = CreatureType::new("dragon", vec![]);
        assert_eq!(a, b);
        assert_ne!(a, CreatureType::new("orc", vec![]));
    }
}
