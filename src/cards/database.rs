//! Card database and archetype registry.
//!
//! `CardDatabase` is the source the randomizer draws its pool and its
//! archetype list from. `InMemoryCardDatabase` is the bundled
//! implementation: cards are stored once as `Arc<Card>` and shared with
//! every pool and deck built from them.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use super::definition::{Card, CardId};
use crate::core::DeckError;

/// Source of all known cards and archetypes.
pub trait CardDatabase {
    /// Every card, in registration order.
    fn cards(&self) -> &[Arc<Card>];

    /// Every known archetype name.
    fn archetypes(&self) -> Vec<String>;

    /// Look up a card by ID.
    fn get(&self, id: CardId) -> Option<&Arc<Card>>;
}

/// In-memory card database.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::cards::{Card, CardDatabase, CardId, CardType, InMemoryCardDatabase};
///
/// let mut db = InMemoryCardDatabase::new();
/// db.register(Card::new(CardId::new(1), "Dark Magician", CardType::main_monster("Normal Monster"))
///     .with_archetype("Dark Magician"))
///     .unwrap();
///
/// assert_eq!(db.cards().len(), 1);
/// assert_eq!(db.archetypes(), vec!["Dark Magician".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryCardDatabase {
    cards: Vec<Arc<Card>>,
    by_id: FxHashMap<CardId, usize>,
    archetypes: Vec<String>,
    archetype_names: FxHashSet<String>,
}

impl InMemoryCardDatabase {
    /// Create a new empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database from cards, rejecting duplicate IDs.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, DeckError> {
        let mut db = Self::new();
        for card in cards {
            db.register(card)?;
        }
        Ok(db)
    }

    /// Register a card and return the shared handle to it.
    ///
    /// The card's archetype, if any, is added to the archetype registry.
    pub fn register(&mut self, card: Card) -> Result<Arc<Card>, DeckError> {
        if self.by_id.contains_key(&card.id) {
            return Err(DeckError::DuplicateCard(card.id));
        }
        if let Some(archetype) = &card.archetype {
            self.register_archetype(archetype.clone());
        }

        let card = Arc::new(card);
        self.by_id.insert(card.id, self.cards.len());
        self.cards.push(Arc::clone(&card));
        Ok(card)
    }

    /// Register an archetype name. Duplicates are ignored.
    pub fn register_archetype(&mut self, archetype: impl Into<String>) {
        let archetype = archetype.into();
        if self.archetype_names.insert(archetype.clone()) {
            self.archetypes.push(archetype);
        }
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the database is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardDatabase for InMemoryCardDatabase {
    fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    fn archetypes(&self) -> Vec<String> {
        self.archetypes.clone()
    }

    fn get(&self, id: CardId) -> Option<&Arc<Card>> {
        self.by_id.get(&id).map(|&index| &self.cards[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    fn monster(id: u32, name: &str) -> Card {
        Card::new(CardId::new(id), name, CardType::main_monster("Effect Monster"))
    }

    #[test]
    fn test_register_and_get() {
        let mut db = InMemoryCardDatabase::new();
        let handle = db.register(monster(1, "Test Card")).unwrap();

        let found = db.get(CardId::new(1)).unwrap();
        assert!(Arc::ptr_eq(found, &handle));
        assert_eq!(found.name, "Test Card");
        assert!(db.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut db = InMemoryCardDatabase::new();
        db.register(monster(1, "Card A")).unwrap();

        let result = db.register(monster(1, "Card B"));
        assert_eq!(result, Err(DeckError::DuplicateCard(CardId::new(1))));
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_archetypes_collected_in_order() {
        let db = InMemoryCardDatabase::from_cards([
            monster(1, "Elemental HERO Avian").with_archetype("HERO"),
            monster(2, "Blackwing - Gale").with_archetype("Blackwing"),
            monster(3, "Elemental HERO Burstinatrix").with_archetype("HERO"),
            monster(4, "Sangan"),
        ])
        .unwrap();

        assert_eq!(db.archetypes(), vec!["HERO".to_string(), "Blackwing".to_string()]);
    }

    #[test]
    fn test_register_archetype_without_cards() {
        let mut db = InMemoryCardDatabase::new();
        db.register_archetype("Lightsworn");
        db.register_archetype("Lightsworn");

        assert_eq!(db.archetypes(), vec!["Lightsworn".to_string()]);
        assert!(db.is_empty());
    }

    #[test]
    fn test_cards_keep_registration_order() {
        let db = InMemoryCardDatabase::from_cards([monster(3, "C"), monster(1, "A"), monster(2, "B")])
            .unwrap();

        let names: Vec<_> = db.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
