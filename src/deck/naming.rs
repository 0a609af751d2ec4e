//! Deck names derived from the most-played cards.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::model::Deck;
use super::section::DeckSection;
use crate::cards::{Card, CardService};
use crate::core::DeckRng;

/// Words never used in generated names (articles, conjunctions, prepositions).
pub const IGNORED_WORDS: [&str; 19] = [
    "the", "a", "an", "for", "and", "nor", "but", "or", "yet", "so", "on", "in", "at", "to", "by",
    "with", "of", "as", "be",
];

/// Split a card name into words: maximal runs of alphanumerics or apostrophes.
pub fn words(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|word| !word.is_empty())
}

/// Distinct candidate words taken from the cards with the highest copy count
/// in the main and extra sections.
///
/// Words are deduplicated case-insensitively, keeping the first spelling
/// seen, and returned in order of first appearance.
pub fn name_word_pool<C: CardService>(deck: &Deck, card_service: &C) -> Vec<String> {
    let cards: Vec<Arc<Card>> = deck
        .section(DeckSection::Main)
        .iter()
        .chain(deck.section(DeckSection::Extra))
        .cloned()
        .collect();
    let counted = card_service.count_by_card(&cards);

    let Some(top_count) = counted.iter().map(|(_, count)| *count).max() else {
        return Vec::new();
    };

    let mut seen = FxHashSet::default();
    let mut pool = Vec::new();
    for (card, _) in counted.iter().filter(|(_, count)| *count >= top_count) {
        for word in words(&card.name) {
            let lower = word.to_lowercase();
            if IGNORED_WORDS.contains(&lower.as_str()) {
                continue;
            }
            if seen.insert(lower) {
                pool.push(word.to_string());
            }
        }
    }
    pool
}

/// Random name of two or three words from `name_word_pool`, in random order.
///
/// Uses fewer words when the pool is smaller; an empty deck gets an empty name.
pub fn create_name<C: CardService>(deck: &Deck, card_service: &C, rng: &mut DeckRng) -> String {
    let pool = name_word_pool(deck, card_service);
    let amount = rng.gen_range_inclusive(2..=3);
    rng.sample(&pool, amount).join(" ")
}
