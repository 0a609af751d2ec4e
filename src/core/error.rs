//! Error type for fallible configuration and lookup.
//!
//! Placement checks never produce errors: `DeckService::can_add` answers
//! with a plain `bool`, and randomization degrades instead of failing.
//! `DeckError` covers parsing identifiers from text, building ratio
//! weightings and registering cards.

use thiserror::Error;

use crate::cards::{CardId, CardTypeCategory};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeckError {
    #[error("Unknown format: {0:?}")]
    UnknownFormat(String),
    #[error("Unknown deck section: {0:?}")]
    UnknownSection(String),
    #[error("Unknown randomization strategy: {0:?}")]
    UnknownStrategy(String),
    #[error("Ratio for {category} must be in (0, 1], got {ratio}")]
    InvalidRatio { category: CardTypeCategory, ratio: f64 },
    #[error("{0} is already registered")]
    DuplicateCard(CardId),
}
