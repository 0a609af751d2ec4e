//! Deck model.
//!
//! A deck owns one ordered card list per section; the cards themselves are
//! shared `Arc<Card>` handles. Order within a section is display order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::section::{DeckSection, SectionMap};
use crate::cards::Card;

/// A named collection of cards partitioned into sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck name. `None` until named.
    pub name: Option<String>,

    parts: SectionMap<Vec<Arc<Card>>>,
}

impl Deck {
    /// Deck with no name and every section empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cards of a section in display order.
    #[must_use]
    pub fn section(&self, section: DeckSection) -> &[Arc<Card>] {
        &self.parts[section]
    }

    /// Mutable access to a section's card list.
    pub fn section_mut(&mut self, section: DeckSection) -> &mut Vec<Arc<Card>> {
        &mut self.parts[section]
    }

    /// Iterate over (DeckSection, cards) in canonical order.
    pub fn sections(&self) -> impl Iterator<Item = (DeckSection, &[Arc<Card>])> {
        self.parts.iter().map(|(section, cards)| (section, cards.as_slice()))
    }

    /// Number of cards in a section.
    #[must_use]
    pub fn len(&self, section: DeckSection) -> usize {
        self.parts[section].len()
    }

    /// Number of cards across all sections.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.parts.iter().map(|(_, cards)| cards.len()).sum()
    }

    /// Check if every section is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Check if a section holds at least its configured minimum.
    #[must_use]
    pub fn meets_minimum(&self, section: DeckSection) -> bool {
        self.len(section) >= section.config().min
    }

    /// Check if every section meets its minimum.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        DeckSection::ALL.into_iter().all(|section| self.meets_minimum(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardType};

    #[test]
    fn test_empty_deck() {
        let deck = Deck::empty();
        assert!(deck.name.is_none());
        assert!(deck.is_empty());
        for section in DeckSection::ALL {
            assert_eq!(deck.len(section), 0);
        }
        assert_eq!(deck.sections().count(), 3);
    }

    #[test]
    fn test_completeness() {
        let card = Arc::new(Card::new(CardId::new(1), "Sangan", CardType::main_monster("Effect Monster")));
        let mut deck = Deck::empty();
        assert!(!deck.is_complete());
        assert!(deck.meets_minimum(DeckSection::Extra));

        for _ in 0..40 {
            deck.section_mut(DeckSection::Main).push(Arc::clone(&card));
        }
        assert!(deck.is_complete());
        assert_eq!(deck.total_len(), 40);
    }

    #[test]
    fn test_serde_roundtrip() {
        let card = Arc::new(Card::new(CardId::new(7), "Jinzo", CardType::main_monster("Effect Monster")));
        let mut deck = Deck::empty();
        deck.name = Some("Jinzo".to_string());
        deck.section_mut(DeckSection::Side).push(card);

        let json = serde_json::to_string(&deck).unwrap();
        let deserialized: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, deserialized);
    }
}
