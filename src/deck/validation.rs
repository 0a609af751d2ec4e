//! Deck validation: the capacity and legality gate.
//!
//! Checking and mutating are separate on purpose. `can_add` is side-effect
//! free so callers (the randomizer in particular) can probe candidates
//! cheaply, and `add_card` trusts that the check already happened.

use std::sync::Arc;

use super::model::Deck;
use super::section::DeckSection;
use crate::cards::{Card, CardService, DefaultCardService, Format, DEFAULT_COPY_LIMIT};

/// Validation and mutation of deck contents.
///
/// Generic over the classification rules that decide which cards count as
/// copies of each other.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use ccg_deckbuilder::cards::{Card, CardId, CardType, Format, Legality};
/// use ccg_deckbuilder::deck::{DeckSection, DeckService};
///
/// let service = DeckService::new();
/// let mut deck = service.create_empty_deck();
/// let pot = Arc::new(Card::new(CardId::new(55144522), "Pot of Greed", CardType::spell())
///     .with_legality(Legality::new().with(Format::Goat, 1)));
///
/// assert!(service.can_add(&deck, DeckSection::Main, Some(Format::Goat), &pot));
/// service.add_card(&mut deck, DeckSection::Main, Arc::clone(&pot));
/// assert!(!service.can_add(&deck, DeckSection::Side, Some(Format::Goat), &pot));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckService<C: CardService = DefaultCardService> {
    card_service: C,
}

impl DeckService<DefaultCardService> {
    /// Create a service with the production classification rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_card_service(DefaultCardService)
    }
}

impl<C: CardService> DeckService<C> {
    /// Create a service with custom classification rules.
    pub fn with_card_service(card_service: C) -> Self {
        Self { card_service }
    }

    /// The classification rules in use.
    pub fn card_service(&self) -> &C {
        &self.card_service
    }

    /// Check if one more copy of `card` may go into `section`.
    ///
    /// Fails when the card is not eligible for the section, the section is
    /// full, or the deck already holds as many "same" cards as the card's
    /// copy limit for `format` allows. `None` applies `DEFAULT_COPY_LIMIT`.
    #[must_use]
    pub fn can_add(&self, deck: &Deck, section: DeckSection, format: Option<Format>, card: &Card) -> bool {
        if !card.card_type.is_eligible_for(section) {
            return false;
        }

        if deck.len(section) + 1 > section.max() {
            return false;
        }

        self.count_treated_as_same(deck, card) < usize::from(self.copy_limit(card, format))
    }

    /// Append `card` to `section`. Performs no validation.
    pub fn add_card(&self, deck: &mut Deck, section: DeckSection, card: Arc<Card>) {
        deck.section_mut(section).push(card);
    }

    /// Remove the first occurrence of this exact card handle from `section`.
    ///
    /// Other prints treated as the same card are left alone; an absent card
    /// is a no-op.
    pub fn remove_card(&self, deck: &mut Deck, section: DeckSection, card: &Arc<Card>) {
        let cards = deck.section_mut(section);
        if let Some(position) = cards.iter().position(|existing| Arc::ptr_eq(existing, card)) {
            cards.remove(position);
        }
    }

    /// All cards of the deck, sections concatenated in canonical order.
    #[must_use]
    pub fn get_all_cards(&self, deck: &Deck) -> Vec<Arc<Card>> {
        let mut all = Vec::with_capacity(deck.total_len());
        for section in DeckSection::ALL {
            all.extend(deck.section(section).iter().cloned());
        }
        all
    }

    /// Deck with no name and every section empty.
    #[must_use]
    pub fn create_empty_deck(&self) -> Deck {
        Deck::empty()
    }

    /// Number of cards anywhere in the deck treated as the same as `card`.
    #[must_use]
    pub fn count_treated_as_same(&self, deck: &Deck, card: &Card) -> usize {
        deck.sections()
            .flat_map(|(_, cards)| cards.iter())
            .filter(|existing| self.card_service.is_treated_as_same(existing, card))
            .count()
    }

    /// Copy limit of `card` under `format`.
    #[must_use]
    pub fn copy_limit(&self, card: &Card, format: Option<Format>) -> u8 {
        match format {
            Some(format) => card.legality.limit(format),
            None => DEFAULT_COPY_LIMIT,
        }
    }
}
