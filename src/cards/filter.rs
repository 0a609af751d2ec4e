//! Card pool filtering.
//!
//! A `CardFilter` is a conjunction of optional predicates. The randomizer
//! uses it twice: once to narrow the whole database (and to learn the
//! active format), and once per archetype to build themed sub-pools.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardTypeCategory, Format};
use crate::deck::DeckSection;

/// Filter specification. Unset fields match everything.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::cards::{CardFilter, CardTypeCategory, Format};
///
/// let filter = CardFilter::new()
///     .with_format(Format::Goat)
///     .with_category(CardTypeCategory::Spell);
///
/// assert_eq!(filter.format, Some(Format::Goat));
/// assert!(filter.archetype.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFilter {
    /// Only cards legal in this format. Also the format decks are validated against.
    pub format: Option<Format>,
    /// Archetype name, matched case-insensitively.
    pub archetype: Option<String>,
    /// Case-insensitive substring of the card name.
    pub name: Option<String>,
    pub category: Option<CardTypeCategory>,
    /// Only cards eligible for this section.
    pub section: Option<DeckSection>,
}

impl CardFilter {
    /// Create a filter matching every card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter matching a single archetype.
    #[must_use]
    pub fn archetype(archetype: impl Into<String>) -> Self {
        Self::new().with_archetype(archetype)
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = Some(archetype.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: CardTypeCategory) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_section(mut self, section: DeckSection) -> Self {
        self.section = Some(section);
        self
    }

    /// Check a single card against every set predicate.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        if let Some(format) = self.format {
            if !card.legality.is_legal_in(format) {
                return false;
            }
        }
        if let Some(archetype) = &self.archetype {
            match &card.archetype {
                Some(own) if own.eq_ignore_ascii_case(archetype) => {}
                _ => return false,
            }
        }
        if let Some(name) = &self.name {
            if !card.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if card.category() != category {
                return false;
            }
        }
        if let Some(section) = self.section {
            if !card.card_type.is_eligible_for(section) {
                return false;
            }
        }
        true
    }
}

/// Pool filtering seam.
pub trait FilterService {
    /// Return the cards of `pool` matching `filter`, preserving order.
    fn filter(&self, pool: &[Arc<Card>], filter: &CardFilter) -> Vec<Arc<Card>>;
}

/// Filters with `CardFilter::matches`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFilterService;

impl FilterService for DefaultFilterService {
    fn filter(&self, pool: &[Arc<Card>], filter: &CardFilter) -> Vec<Arc<Card>> {
        pool.iter()
            .filter(|card| filter.matches(card))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardType, Legality};

    fn pool() -> Vec<Arc<Card>> {
        vec![
            Arc::new(
                Card::new(CardId::new(1), "Elemental HERO Sparkman", CardType::main_monster("Normal Monster"))
                    .with_archetype("HERO")
                    .with_legality(Legality::unlimited()),
            ),
            Arc::new(
                Card::new(CardId::new(2), "Polymerization", CardType::spell())
                    .with_legality(Legality::new().with(Format::Tcg, 3)),
            ),
            Arc::new(
                Card::new(CardId::new(3), "Elemental HERO Flame Wingman", CardType::extra_monster("Fusion Monster"))
                    .with_archetype("HERO")
                    .with_legality(Legality::new().with(Format::Ocg, 3)),
            ),
            Arc::new(
                Card::new(CardId::new(4), "Mirror Force", CardType::trap())
                    .with_legality(Legality::unlimited().with(Format::Tcg, 0)),
            ),
        ]
    }

    fn ids(cards: &[Arc<Card>]) -> Vec<u32> {
        cards.iter().map(|c| c.id.raw()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let pool = pool();
        let result = DefaultFilterService.filter(&pool, &CardFilter::new());
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_format_filter() {
        let pool = pool();
        let result = DefaultFilterService.filter(&pool, &CardFilter::new().with_format(Format::Tcg));
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn test_archetype_filter_case_insensitive() {
        let pool = pool();
        let result = DefaultFilterService.filter(&pool, &CardFilter::archetype("hero"));
        assert_eq!(ids(&result), vec![1, 3]);

        let none = DefaultFilterService.filter(&pool, &CardFilter::archetype("Blackwing"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_combined_filters() {
        let pool = pool();
        let filter = CardFilter::new()
            .with_name("elemental")
            .with_section(DeckSection::Extra);
        assert_eq!(ids(&DefaultFilterService.filter(&pool, &filter)), vec![3]);

        let traps = CardFilter::new().with_category(CardTypeCategory::Trap);
        assert_eq!(ids(&DefaultFilterService.filter(&pool, &traps)), vec![4]);
    }

    #[test]
    fn test_filter_serde() {
        let filter = CardFilter::archetype("HERO").with_format(Format::Goat);
        let json = serde_json::to_string(&filter).unwrap();
        let deserialized: CardFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(filter, deserialized);
    }
}
