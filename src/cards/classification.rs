//! "Same card" semantics and category grouping.
//!
//! Copy limits apply to cards that are *treated as the same*, which is
//! looser than identity: an alternate print shares its name with the
//! original, and some cards are explicitly treated as another card.
//! `CardService` is the seam; tests can swap in their own rules.

use std::sync::Arc;

use super::definition::{Card, CardTypeCategory};

/// Classification rules consumed by validation and randomization.
pub trait CardService {
    /// Check if two cards count as the same card for copy limits.
    fn is_treated_as_same(&self, a: &Card, b: &Card) -> bool;

    /// Category grouping of a card.
    fn category(&self, card: &Card) -> CardTypeCategory {
        card.category()
    }

    /// Group cards by "same card", counting occurrences.
    ///
    /// Groups are ordered by first appearance; the representative of each
    /// group is its first occurrence.
    fn count_by_card(&self, cards: &[Arc<Card>]) -> Vec<(Arc<Card>, usize)> {
        let mut counted: Vec<(Arc<Card>, usize)> = Vec::new();
        for card in cards {
            match counted
                .iter_mut()
                .find(|(existing, _)| self.is_treated_as_same(existing, card))
            {
                Some((_, count)) => *count += 1,
                None => counted.push((Arc::clone(card), 1)),
            }
        }
        counted
    }
}

/// Production rules: same ID, same name, or a matching `treated_as` name.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCardService;

impl CardService for DefaultCardService {
    fn is_treated_as_same(&self, a: &Card, b: &Card) -> bool {
        if std::ptr::eq(a, b) || a.id == b.id || a.name == b.name {
            return true;
        }
        match (&a.treated_as, &b.treated_as) {
            (Some(x), Some(y)) if x == y => true,
            (Some(x), _) if *x == b.name => true,
            (_, Some(y)) if *y == a.name => true,
            _ => false,
        }
    }
}
