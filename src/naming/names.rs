//! Name prompts, sanitization and selection.

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::{NameCandidate, NamingService};
use crate::cards::{text, Card, PLACEHOLDER_NAME};
use crate::error::NamingError;

/// Name used for a candidate (or a whole request) that failed.
pub const ERROR_NAME: &str = "Error";

/// Prompt asking the service for a card name.
#[must_use]
pub fn naming_prompt(card: &Card) -> String {
    let modifier = if card.rarity.index == 0 {
        "short, single-word, "
    } else {
        "single-word, "
    };
    let subject_type = &card.style.subject_type;

    format!(
        "Generate a unique, orignal, creative,{modifier} {subject_type} name for a {} \
         (without using the word {} or neutral):\n",
        text::visual_description(card),
        subject_type.to_lowercase(),
    )
}

/// Keep letters, spaces and hyphens, then title-case each word.
///
/// ```
/// use card_forge::naming::sanitize_name;
///
/// assert_eq!(sanitize_name("  **ember-wing** 2\n").unwrap(), "Ember-wing");
/// assert!(sanitize_name("42!").is_err());
/// ```
pub fn sanitize_name(raw: &str) -> Result<String, NamingError> {
    let kept: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_alphabetic() || *c == ' ' || *c == '-')
        .collect();

    let name = kept
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        return Err(NamingError::Malformed(format!("no usable characters in {raw:?}")));
    }
    Ok(name)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Pick the shortest candidate not already used.
///
/// When every candidate has been used, the shortest overall wins. Ties are
/// broken alphabetically so a seed always reproduces the same name.
///
/// ```
/// use card_forge::naming::choose_name;
/// use rustc_hash::FxHashSet;
///
/// let seen: FxHashSet<String> = ["Ember".to_string()].into_iter().collect();
/// let names = vec!["Ember".to_string(), "Blaze".to_string()];
/// assert_eq!(choose_name(&names, &seen).as_deref(), Some("Blaze"));
/// ```
#[must_use]
pub fn choose_name(candidates: &[String], names_seen: &FxHashSet<String>) -> Option<String> {
    let all: BTreeSet<&String> = candidates.iter().collect();
    let unseen: BTreeSet<&String> = all
        .iter()
        .copied()
        .filter(|name| !names_seen.contains(*name))
        .collect();
    let pool = if unseen.is_empty() { all } else { unseen };

    pool.into_iter()
        .min_by_key(|name| name.chars().count())
        .cloned()
}

/// Ask the service for a name for `card`.
///
/// Never fails: a disabled service yields the placeholder, an unavailable
/// service yields [`ERROR_NAME`], and each malformed candidate is replaced
/// by [`ERROR_NAME`] before selection.
pub fn name_card(
    service: &dyn NamingService,
    card: &Card,
    names_seen: &FxHashSet<String>,
) -> String {
    if !service.is_enabled() {
        return PLACEHOLDER_NAME.to_owned();
    }

    let prompt = naming_prompt(card);
    debug!(index = card.index, prompt = %prompt.trim_end(), "requesting card name");

    let raw = match service.complete(&prompt) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(index = card.index, error = %e, "naming failed, using placeholder");
            return ERROR_NAME.to_owned();
        }
    };

    let names: Vec<String> = raw.iter().map(|candidate| accept(card, candidate)).collect();
    choose_name(&names, names_seen).unwrap_or_else(|| ERROR_NAME.to_owned())
}

fn accept(card: &Card, candidate: &NameCandidate) -> String {
    let parsed = candidate
        .text
        .as_deref()
        .ok_or_else(|| NamingError::Malformed("candidate has no text".to_owned()))
        .and_then(sanitize_name);

    match parsed {
        Ok(name) => name,
        Err(e) => {
            warn!(index = card.index, error = %e, "discarding name candidate");
            ERROR_NAME.to_owned()
        }
    }
}
