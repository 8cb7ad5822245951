//! Derived text for cards: subject phrase, image prompt, visual description.

use super::card::Card;

/// Word used to tag every image prompt.
const PROMPT_TAG: &str = "enemy";

/// "a {adjectives} {subject}"
#[must_use]
pub fn subject_description(card: &Card) -> String {
    let mut words: Vec<&str> = Vec::with_capacity(card.style.subject_adjectives.len() + 2);
    words.push("a");
    words.extend(card.style.subject_adjectives.iter().map(String::as_str));
    words.push(&card.style.subject);
    words.join(" ").replace(" ,", ",")
}

/// ", {detail}" for cards above the base tier, otherwise empty.
#[must_use]
pub fn detail_description(card: &Card) -> String {
    if !card.style.detail.is_empty() && card.rarity.index > 0 {
        format!(", {}", card.style.detail)
    } else {
        String::new()
    }
}

/// Subject phrase with its detail.
#[must_use]
pub fn full_subject_description(card: &Card) -> String {
    subject_description(card) + &detail_description(card)
}

/// Prompt handed to the image model.
///
/// ```text
/// {name}, enemy, a {adjectives} {subject}, {detail}, {ambience}, {suffix}
/// ```
#[must_use]
pub fn image_prompt(card: &Card) -> String {
    let segments = [
        full_subject_description(card),
        card.style.ambience.clone(),
        card.style.style_suffix.clone(),
    ];
    let body = segments.join(", ").replace("  ", " ").replace(" ,", ",");
    format!("{}, {PROMPT_TAG}, {body}", card.name)
}

/// Plain-language description used when asking for a name.
#[must_use]
pub fn visual_description(card: &Card) -> String {
    let subject = full_subject_description(card);
    match card.style.environment.as_deref() {
        Some(environment) if !environment.is_empty() => {
            format!("{subject} It can be found in {environment}-like environments.")
        }
        _ => subject,
    }
}
