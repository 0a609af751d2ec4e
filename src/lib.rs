//! # ccg-deckbuilder
//!
//! Deck validation and randomized deck construction for trading card games.
//!
//! ## Design Principles
//!
//! 1. **Check, then mutate**: `DeckService::can_add` is a side-effect free
//!    gate; `add_card` trusts it. Validation failures are `false`, never
//!    errors.
//!
//! 2. **Shared cards**: Cards are immutable `Arc<Card>` handles shared by
//!    the database, pools and decks.
//!
//! 3. **Injectable collaborators**: "Same card" rules, filtering and display
//!    sorting sit behind traits with a default implementation each.
//!
//! 4. **Explicit randomness**: Every random decision draws from a `DeckRng`
//!    passed in by the caller, so tests can seed it.
//!
//! ## Modules
//!
//! - `core`: RNG and error type
//! - `cards`: Card model, database, classification, filtering, sorting
//! - `deck`: Sections, deck model, validation, randomization, naming

pub mod core;
pub mod cards;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{DeckError, DeckRng};

pub use crate::cards::{
    Card, CardId, CardType, CardTypeCategory, Format, Legality,
    CardDatabase, InMemoryCardDatabase,
    CardService, DefaultCardService,
    CardFilter, FilterService, DefaultFilterService,
    SortingService, DefaultSortingService,
};

pub use crate::deck::{
    Deck, DeckSection, DeckSectionConfig, SectionMap,
    DeckService,
    DeckRandomizer, RandomizationOptions, RandomizationStrategy, TypeCategoryWeighting,
};
