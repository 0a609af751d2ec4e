//! Deck sections and per-section storage.
//!
//! ## DeckSection
//!
//! Closed set of deck partitions (main, extra, side), each with a fixed
//! capacity table.
//!
//! ## SectionMap
//!
//! Fixed-size per-section storage indexed by `DeckSection`. Every section
//! always has an entry.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::DeckError;

/// A partition of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckSection {
    Main,
    Extra,
    Side,
}

impl DeckSection {
    /// All sections in canonical order.
    pub const ALL: [DeckSection; 3] = [DeckSection::Main, DeckSection::Extra, DeckSection::Side];

    /// Position in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            DeckSection::Main => 0,
            DeckSection::Extra => 1,
            DeckSection::Side => 2,
        }
    }

    /// Capacity table of this section.
    #[must_use]
    pub const fn config(self) -> DeckSectionConfig {
        match self {
            DeckSection::Main => DeckSectionConfig::new(40, 60, 40),
            DeckSection::Extra => DeckSectionConfig::new(0, 15, 15),
            DeckSection::Side => DeckSectionConfig::new(0, 15, 15),
        }
    }

    /// Hard upper bound on the number of cards.
    #[must_use]
    pub const fn max(self) -> usize {
        self.config().max
    }

    /// Size the randomizer aims for.
    #[must_use]
    pub const fn recommended(self) -> usize {
        self.config().recommended
    }
}

impl fmt::Display for DeckSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeckSection::Main => "Main",
            DeckSection::Extra => "Extra",
            DeckSection::Side => "Side",
        };
        f.write_str(name)
    }
}

impl FromStr for DeckSection {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(DeckSection::Main),
            "extra" => Ok(DeckSection::Extra),
            "side" => Ok(DeckSection::Side),
            _ => Err(DeckError::UnknownSection(s.to_string())),
        }
    }
}

/// Size rules of a section. `recommended` never exceeds `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSectionConfig {
    /// Minimum for a complete deck.
    pub min: usize,
    /// Hard validation bound.
    pub max: usize,
    /// Randomizer working target.
    pub recommended: usize,
}

impl DeckSectionConfig {
    const fn new(min: usize, max: usize, recommended: usize) -> Self {
        Self { min, max, recommended }
    }
}

/// Per-section data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::deck::{DeckSection, SectionMap};
///
/// let mut counts: SectionMap<usize> = SectionMap::default();
/// counts[DeckSection::Extra] = 5;
///
/// assert_eq!(counts[DeckSection::Main], 0);
/// assert_eq!(counts[DeckSection::Extra], 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionMap<T> {
    data: [T; 3],
}

impl<T> SectionMap<T> {
    /// Create a SectionMap with values from a factory function.
    pub fn new(factory: impl Fn(DeckSection) -> T) -> Self {
        Self {
            data: DeckSection::ALL.map(factory),
        }
    }

    #[must_use]
    pub fn get(&self, section: DeckSection) -> &T {
        &self.data[section.index()]
    }

    pub fn get_mut(&mut self, section: DeckSection) -> &mut T {
        &mut self.data[section.index()]
    }

    /// Iterate over (DeckSection, &T) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (DeckSection, &T)> {
        DeckSection::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (DeckSection, &mut T) pairs in canonical order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (DeckSection, &mut T)> {
        DeckSection::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<DeckSection> for SectionMap<T> {
    type Output = T;

    fn index(&self, section: DeckSection) -> &Self::Output {
        self.get(section)
    }
}

impl<T> IndexMut<DeckSection> for SectionMap<T> {
    fn index_mut(&mut self, section: DeckSection) -> &mut Self::Output {
        self.get_mut(section)
    }
}
