//! Display ordering of cards.

use std::cmp::Ordering;
use std::sync::Arc;

use super::definition::Card;
use crate::deck::{Deck, DeckSection};

/// Display sort seam. Implementations must be stable and must not change
/// membership or counts.
pub trait SortingService {
    /// Return `cards` in display order.
    fn sort(&self, cards: &[Arc<Card>]) -> Vec<Arc<Card>>;

    /// Sort every section of a deck. The name is left untouched.
    fn sort_deck(&self, mut deck: Deck) -> Deck {
        for section in DeckSection::ALL {
            let sorted = self.sort(deck.section(section));
            *deck.section_mut(section) = sorted;
        }
        deck
    }
}

/// Category first (monsters, spells, traps, skills), then higher level,
/// then name, then ID.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSortingService;

impl DefaultSortingService {
    fn compare(a: &Card, b: &Card) -> Ordering {
        a.category()
            .sort_rank()
            .cmp(&b.category().sort_rank())
            .then_with(|| b.level.cmp(&a.level))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    }
}

impl SortingService for DefaultSortingService {
    fn sort(&self, cards: &[Arc<Card>]) -> Vec<Arc<Card>> {
        let mut sorted = cards.to_vec();
        sorted.sort_by(|a, b| Self::compare(a, b));
        sorted
    }
}
