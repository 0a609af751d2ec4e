//! Random deck construction.
//!
//! `DeckRandomizer` fills a deck section by section from a card pool. With
//! an archetype strategy, a few themed sub-pools ("primary pools") are
//! visited first so the deck ends up cohesive, then the whole pool
//! ("secondary pool") tops every section up. Every placement goes through
//! `DeckService::can_add`, so the result is always a legal deck; when the
//! pool cannot satisfy the targets the sections simply stay smaller.
//!
//! ## Usage
//!
//! ```
//! use ccg_deckbuilder::cards::{Card, CardId, CardType, InMemoryCardDatabase, Legality};
//! use ccg_deckbuilder::core::DeckRng;
//! use ccg_deckbuilder::deck::{DeckRandomizer, DeckSection, RandomizationOptions, RandomizationStrategy};
//!
//! let db = InMemoryCardDatabase::from_cards((0..60).map(|i| {
//!     Card::new(CardId::new(i), format!("Monster {i}"), CardType::main_monster("Effect Monster"))
//!         .with_legality(Legality::unlimited())
//! }))
//! .unwrap();
//!
//! let randomizer = DeckRandomizer::new(&db);
//! let mut rng = DeckRng::new(42);
//! let deck = randomizer.randomize(RandomizationStrategy::Normal, &RandomizationOptions::default(), &mut rng);
//!
//! assert_eq!(deck.len(DeckSection::Main), 40);
//! assert!(deck.name.is_some());
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::model::Deck;
use super::naming;
use super::section::DeckSection;
use super::validation::DeckService;
use crate::cards::{
    Card, CardDatabase, CardFilter, CardService, CardTypeCategory, DefaultCardService,
    DefaultFilterService, DefaultSortingService, FilterService, Format, SortingService,
};
use crate::core::{DeckError, DeckRng};

/// Total soft budget of cards drawn from archetype pools into the main section.
pub const DEFAULT_ARCHETYPE_CARD_BUDGET: usize = 30;

/// How a deck is randomized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RandomizationStrategy {
    /// Whole pool, no theme.
    Normal,
    /// Themed around one archetype.
    Archetype1,
    /// Themed around two archetypes.
    Archetype2,
    /// Themed around three archetypes.
    Archetype3,
    /// Singleton: at most one copy of any card, empty side section.
    Highlander,
}

impl RandomizationStrategy {
    /// Every strategy, in menu order.
    pub const ALL: [RandomizationStrategy; 5] = [
        RandomizationStrategy::Normal,
        RandomizationStrategy::Archetype1,
        RandomizationStrategy::Archetype2,
        RandomizationStrategy::Archetype3,
        RandomizationStrategy::Highlander,
    ];

    /// Number of archetypes the strategy themes the deck around.
    #[must_use]
    pub const fn archetype_count(self) -> usize {
        match self {
            RandomizationStrategy::Archetype1 => 1,
            RandomizationStrategy::Archetype2 => 2,
            RandomizationStrategy::Archetype3 => 3,
            RandomizationStrategy::Normal | RandomizationStrategy::Highlander => 0,
        }
    }

    /// Singleton strategy: one copy per card, no side section.
    #[must_use]
    pub const fn is_highlander(self) -> bool {
        matches!(self, RandomizationStrategy::Highlander)
    }

    fn label(self) -> &'static str {
        match self {
            RandomizationStrategy::Normal => "Normal",
            RandomizationStrategy::Archetype1 => "1 Archetype",
            RandomizationStrategy::Archetype2 => "2 Archetypes",
            RandomizationStrategy::Archetype3 => "3 Archetypes",
            RandomizationStrategy::Highlander => "Highlander",
        }
    }
}

impl fmt::Display for RandomizationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RandomizationStrategy {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DeckError::UnknownStrategy(s.to_string()))
    }
}

/// Target share of each card category in a section.
///
/// `None` means the category is never ratio-checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeCategoryWeighting {
    ratios: FxHashMap<CardTypeCategory, Option<f64>>,
}

impl Default for TypeCategoryWeighting {
    /// Monsters 62.5%, spells 27.5%, traps 10%, skills unconstrained.
    fn default() -> Self {
        let mut ratios = FxHashMap::default();
        ratios.insert(CardTypeCategory::Monster, Some(0.625));
        ratios.insert(CardTypeCategory::Spell, Some(0.275));
        ratios.insert(CardTypeCategory::Trap, Some(0.1));
        ratios.insert(CardTypeCategory::Skill, None);
        Self { ratios }
    }
}

impl TypeCategoryWeighting {
    /// Weighting with no ratio checks at all.
    #[must_use]
    pub fn none() -> Self {
        Self {
            ratios: FxHashMap::default(),
        }
    }

    /// Set the target share of a category. Must be in `(0, 1]`.
    pub fn with_ratio(mut self, category: CardTypeCategory, ratio: f64) -> Result<Self, DeckError> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(DeckError::InvalidRatio { category, ratio });
        }
        self.ratios.insert(category, Some(ratio));
        Ok(self)
    }

    /// Remove the ratio check for a category.
    #[must_use]
    pub fn unconstrained(mut self, category: CardTypeCategory) -> Self {
        self.ratios.insert(category, None);
        self
    }

    /// Target share of a category, if constrained.
    #[must_use]
    pub fn ratio(&self, category: CardTypeCategory) -> Option<f64> {
        self.ratios.get(&category).copied().flatten()
    }
}

/// Randomization options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomizationOptions {
    /// Narrows the card pool; its format (if any) is validated against.
    pub filter: Option<CardFilter>,

    /// Category ratio targets.
    pub weighting: TypeCategoryWeighting,

    /// Soft main-section budget split across archetype pools (default: 30).
    pub archetype_card_budget: usize,
}

impl Default for RandomizationOptions {
    fn default() -> Self {
        Self {
            filter: None,
            weighting: TypeCategoryWeighting::default(),
            archetype_card_budget: DEFAULT_ARCHETYPE_CARD_BUDGET,
        }
    }
}

impl RandomizationOptions {
    #[must_use]
    pub fn with_filter(mut self, filter: CardFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn with_weighting(mut self, weighting: TypeCategoryWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    #[must_use]
    pub fn with_archetype_card_budget(mut self, budget: usize) -> Self {
        self.archetype_card_budget = budget;
        self
    }

    /// Format decks are validated against.
    #[must_use]
    pub fn format(&self) -> Option<Format> {
        self.filter.as_ref().and_then(|filter| filter.format)
    }
}

/// Per-invocation settings shared by every section fill.
struct FillContext<'o> {
    strategy: RandomizationStrategy,
    format: Option<Format>,
    weighting: &'o TypeCategoryWeighting,
}

/// Builds random, legal decks from a card database.
pub struct DeckRandomizer<'a, C: CardService = DefaultCardService> {
    database: &'a dyn CardDatabase,
    deck_service: DeckService<C>,
    filter_service: Box<dyn FilterService + 'a>,
    sorting_service: Box<dyn SortingService + 'a>,
}

impl<'a> DeckRandomizer<'a> {
    /// Create a randomizer with the default services.
    pub fn new(database: &'a dyn CardDatabase) -> Self {
        Self {
            database,
            deck_service: DeckService::new(),
            filter_service: Box::new(DefaultFilterService),
            sorting_service: Box::new(DefaultSortingService),
        }
    }
}

impl<'a, C: CardService> DeckRandomizer<'a, C> {
    /// Use a deck service with different classification rules.
    pub fn with_deck_service<D: CardService>(self, deck_service: DeckService<D>) -> DeckRandomizer<'a, D> {
        DeckRandomizer {
            database: self.database,
            deck_service,
            filter_service: self.filter_service,
            sorting_service: self.sorting_service,
        }
    }

    /// Set a custom filter service.
    #[must_use]
    pub fn with_filter_service<F: FilterService + 'a>(mut self, filter_service: F) -> Self {
        self.filter_service = Box::new(filter_service);
        self
    }

    /// Set a custom sorting service.
    #[must_use]
    pub fn with_sorting_service<S: SortingService + 'a>(mut self, sorting_service: S) -> Self {
        self.sorting_service = Box::new(sorting_service);
        self
    }

    /// The deck service used for validation.
    pub fn deck_service(&self) -> &DeckService<C> {
        &self.deck_service
    }

    /// Build a random deck.
    ///
    /// Never fails: an unsatisfiable pool yields smaller sections, and an
    /// empty pool yields an empty deck with an empty name.
    pub fn randomize(
        &self,
        strategy: RandomizationStrategy,
        options: &RandomizationOptions,
        rng: &mut DeckRng,
    ) -> Deck {
        let context = FillContext {
            strategy,
            format: options.format(),
            weighting: &options.weighting,
        };

        let all_cards = self.database.cards();
        let secondary_pool: Vec<Arc<Card>> = match &options.filter {
            Some(filter) => self.filter_service.filter(all_cards, filter),
            None => all_cards.to_vec(),
        };

        let archetype_count = strategy.archetype_count();
        let primary_pools = if archetype_count > 0 {
            self.archetype_pools(&secondary_pool, archetype_count, rng)
        } else {
            Vec::new()
        };
        let cards_per_pool = if archetype_count > 0 {
            options.archetype_card_budget.div_ceil(archetype_count)
        } else {
            0
        };

        debug!(
            %strategy,
            seed = rng.seed(),
            format = ?context.format,
            pool_size = secondary_pool.len(),
            primary_pools = primary_pools.len(),
            "randomizing deck"
        );

        let mut deck = self.deck_service.create_empty_deck();
        for section in DeckSection::ALL {
            let is_main = section == DeckSection::Main;
            let pool_categories = self.section_categories(&secondary_pool, section);
            for primary_pool in &primary_pools {
                let limit = is_main.then_some(cards_per_pool);
                self.add_cards(&mut deck, section, primary_pool, &pool_categories, is_main, limit, &context, rng);
            }
            self.add_cards(&mut deck, section, &secondary_pool, &pool_categories, false, None, &context, rng);
            debug!(%section, size = deck.len(section), "section filled");
        }

        let name = naming::create_name(&deck, self.deck_service.card_service(), rng);
        debug!(name = %name, "deck named");
        deck.name = Some(name);
        self.sorting_service.sort_deck(deck)
    }

    /// Pick up to `count` archetypes at random that have cards in `pool`.
    ///
    /// Archetypes without matching cards are skipped without counting, so
    /// fewer than `count` pools come back when the pool runs out of themes.
    fn archetype_pools(&self, pool: &[Arc<Card>], count: usize, rng: &mut DeckRng) -> Vec<Vec<Arc<Card>>> {
        let mut archetypes = self.database.archetypes();
        rng.shuffle(&mut archetypes);

        let mut pools = Vec::with_capacity(count);
        for archetype in archetypes {
            if pools.len() >= count {
                break;
            }
            let archetype_cards = self.filter_service.filter(pool, &CardFilter::archetype(archetype.as_str()));
            if archetype_cards.is_empty() {
                continue;
            }
            debug!(archetype = %archetype, cards = archetype_cards.len(), "archetype pool selected");
            pools.push(archetype_cards);
        }
        pools
    }

    /// Attempt to add cards from `pool` to `section`.
    ///
    /// `pool_categories` are the section's categories in the working pool,
    /// shared by every call for that section. `limit` caps the number of
    /// cards added by this call; a visit that is already under way may
    /// finish its copies.
    #[allow(clippy::too_many_arguments)]
    fn add_cards(
        &self,
        deck: &mut Deck,
        section: DeckSection,
        pool: &[Arc<Card>],
        pool_categories: &[CardTypeCategory],
        prefer_play_set: bool,
        limit: Option<usize>,
        context: &FillContext<'_>,
        rng: &mut DeckRng,
    ) {
        let capacity = working_capacity(section, context.strategy);
        let initial_len = deck.len(section);

        for card in rng.shuffled(pool) {
            let len = deck.len(section);
            if len >= capacity {
                break;
            }
            if limit.is_some_and(|limit| len - initial_len >= limit) {
                break;
            }

            // Ratios only kick in once the section is half full
            if len as f64 >= capacity as f64 / 2.0
                && self.exceeds_ratio(deck, section, &card, capacity, pool_categories, context.weighting)
            {
                trace!(card = %card.id, %section, "skipped by category ratio");
                continue;
            }

            let copies = copy_count(context.strategy, prefer_play_set, rng);
            for _ in 0..copies {
                if deck.len(section) >= capacity || !self.can_place(deck, section, &card, context) {
                    break;
                }
                self.deck_service.add_card(deck, section, Arc::clone(&card));
            }
        }
    }

    fn can_place(&self, deck: &Deck, section: DeckSection, card: &Card, context: &FillContext<'_>) -> bool {
        if !self.deck_service.can_add(deck, section, context.format, card) {
            return false;
        }
        !context.strategy.is_highlander() || self.deck_service.count_treated_as_same(deck, card) == 0
    }

    /// Check if the section already holds its share of the card's category.
    ///
    /// A ratio is only enforced while the working pool offers the section
    /// some card of another category; otherwise nothing could take the free
    /// slots. Themed pools are judged by the working pool too, so a
    /// monster-only archetype still respects the monster share.
    fn exceeds_ratio(
        &self,
        deck: &Deck,
        section: DeckSection,
        card: &Card,
        capacity: usize,
        pool_categories: &[CardTypeCategory],
        weighting: &TypeCategoryWeighting,
    ) -> bool {
        let card_service = self.deck_service.card_service();
        let category = card_service.category(card);
        let Some(ratio) = weighting.ratio(category) else {
            return false;
        };
        if pool_categories.iter().all(|&other| other == category) {
            return false;
        }

        let same_category = deck
            .section(section)
            .iter()
            .filter(|existing| card_service.category(existing) == category)
            .count();
        same_category as f64 >= capacity as f64 * ratio
    }

    /// Categories of the pool cards eligible for `section`.
    fn section_categories(&self, pool: &[Arc<Card>], section: DeckSection) -> SmallVec<[CardTypeCategory; 4]> {
        let card_service = self.deck_service.card_service();
        let mut categories = SmallVec::new();
        for card in pool.iter().filter(|card| card.card_type.is_eligible_for(section)) {
            let category = card_service.category(card);
            if !categories.contains(&category) {
                categories.push(category);
                if categories.len() == CardTypeCategory::ALL.len() {
                    break;
                }
            }
        }
        categories
    }
}

/// Section size the randomizer fills up to.
///
/// Highlander decks use the hard maximum and leave the side section empty;
/// every other strategy aims for the recommended size.
#[must_use]
pub fn working_capacity(section: DeckSection, strategy: RandomizationStrategy) -> usize {
    if strategy.is_highlander() {
        if section == DeckSection::Side {
            return 0;
        }
        return section.max();
    }
    section.recommended()
}

/// Number of copies to try for one visited card.
fn copy_count(strategy: RandomizationStrategy, prefer_play_set: bool, rng: &mut DeckRng) -> usize {
    if strategy.is_highlander() {
        return 1;
    }
    copies_for_roll(rng.gen_unit(), prefer_play_set)
}

fn copies_for_roll(roll: f64, prefer_play_set: bool) -> usize {
    let (three, two) = if prefer_play_set { (0.65, 0.35) } else { (0.8, 0.65) };
    if roll >= three {
        3
    } else if roll >= two {
        2
    } else {
        1
    }
}
