//! Card system: definitions, database, and the collaborator services
//! (classification, filtering, sorting) the deck services build on.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card data, shared as `Arc<Card>`
//! - `CardType` / `CardTypeCategory`: Type classification and eligibility
//! - `Format` / `Legality`: Per-format copy limits
//! - `CardDatabase`: Card pool and archetype registry
//! - `CardService`, `FilterService`, `SortingService`: Injectable seams

pub mod classification;
pub mod database;
pub mod definition;
pub mod filter;
pub mod sorting;

pub use classification::{CardService, DefaultCardService};
pub use database::{CardDatabase, InMemoryCardDatabase};
pub use definition::{Card, CardId, CardType, CardTypeCategory, Format, Legality, DEFAULT_COPY_LIMIT};
pub use filter::{CardFilter, DefaultFilterService, FilterService};
pub use sorting::{DefaultSortingService, SortingService};
