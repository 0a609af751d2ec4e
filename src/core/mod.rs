//! Core building blocks shared by the card and deck services:
//! the random source and the crate error type.

pub mod error;
pub mod rng;

pub use error::DeckError;
pub use rng::DeckRng;
