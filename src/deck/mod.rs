//! Deck system: sections, the deck model, validation and randomization.
//!
//! ## Key Types
//!
//! - `DeckSection`: Main / extra / side with their capacity table
//! - `Deck`: Named per-section card lists
//! - `DeckService`: Placement checks and deck mutation
//! - `DeckRandomizer`: Random legal deck construction

pub mod model;
pub mod naming;
pub mod randomization;
pub mod section;
pub mod validation;

pub use model::Deck;
pub use randomization::{
    working_capacity, DeckRandomizer, RandomizationOptions, RandomizationStrategy,
    TypeCategoryWeighting, DEFAULT_ARCHETYPE_CARD_BUDGET,
};
pub use section::{DeckSection, DeckSectionConfig, SectionMap};
pub use validation::DeckService;
