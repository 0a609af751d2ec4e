//! Card definitions - immutable card data.
//!
//! A `Card` describes one printable card: its identity, its type
//! classification, a few numeric attributes and its per-format copy limits.
//! Cards are created once, wrapped in `Arc`, and shared between the
//! database, filtered pools and every deck that contains them.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DeckError;
use crate::deck::DeckSection;

/// Copy limit applied when no format is active.
pub const DEFAULT_COPY_LIMIT: u8 = 3;

/// Unique identifier for a printable card (its passcode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Coarse grouping of card types, used for ratio targets and sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTypeCategory {
    Monster,
    Spell,
    Trap,
    Skill,
}

impl CardTypeCategory {
    pub const ALL: [CardTypeCategory; 4] = [
        CardTypeCategory::Monster,
        CardTypeCategory::Spell,
        CardTypeCategory::Trap,
        CardTypeCategory::Skill,
    ];

    /// Position of this category in display order.
    #[must_use]
    pub const fn sort_rank(self) -> u8 {
        match self {
            CardTypeCategory::Monster => 0,
            CardTypeCategory::Spell => 1,
            CardTypeCategory::Trap => 2,
            CardTypeCategory::Skill => 3,
        }
    }
}

impl fmt::Display for CardTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardTypeCategory::Monster => "Monster",
            CardTypeCategory::Spell => "Spell",
            CardTypeCategory::Trap => "Trap",
            CardTypeCategory::Skill => "Skill",
        };
        f.write_str(name)
    }
}

/// Type classification of a card.
///
/// `sections` lists the deck sections the card may be placed into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardType {
    /// Type name as printed (e.g. "Effect Monster", "Fusion Monster").
    pub name: String,

    /// Category used for ratios and sorting.
    pub category: CardTypeCategory,

    /// Sections this type is eligible for.
    pub sections: SmallVec<[DeckSection; 3]>,
}

impl CardType {
    /// Create a card type eligible for the given sections.
    pub fn new(
        name: impl Into<String>,
        category: CardTypeCategory,
        sections: impl IntoIterator<Item = DeckSection>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            sections: sections.into_iter().collect(),
        }
    }

    /// Main deck monster (main or side).
    pub fn main_monster(name: impl Into<String>) -> Self {
        Self::new(name, CardTypeCategory::Monster, [DeckSection::Main, DeckSection::Side])
    }

    /// Extra deck monster (extra or side).
    pub fn extra_monster(name: impl Into<String>) -> Self {
        Self::new(name, CardTypeCategory::Monster, [DeckSection::Extra, DeckSection::Side])
    }

    pub fn spell() -> Self {
        Self::new("Spell Card", CardTypeCategory::Spell, [DeckSection::Main, DeckSection::Side])
    }

    pub fn trap() -> Self {
        Self::new("Trap Card", CardTypeCategory::Trap, [DeckSection::Main, DeckSection::Side])
    }

    /// Skills only ever live in the main deck.
    pub fn skill() -> Self {
        Self::new("Skill Card", CardTypeCategory::Skill, [DeckSection::Main])
    }

    /// Check if this type may be placed into `section`.
    #[must_use]
    pub fn is_eligible_for(&self, section: DeckSection) -> bool {
        self.sections.contains(&section)
    }
}

/// Game formats with their own banlists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Tcg,
    Ocg,
    Goat,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Tcg, Format::Ocg, Format::Goat];
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Tcg => "TCG",
            Format::Ocg => "OCG",
            Format::Goat => "GOAT",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tcg" => Ok(Format::Tcg),
            "ocg" => Ok(Format::Ocg),
            "goat" => Ok(Format::Goat),
            _ => Err(DeckError::UnknownFormat(s.to_string())),
        }
    }
}

/// Per-format copy limits (banlist status).
///
/// A format without an entry is treated as a limit of 0: the card is not
/// legal there.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legality {
    limits: FxHashMap<Format, u8>,
}

impl Legality {
    /// No format allows the card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Three copies in every format.
    #[must_use]
    pub fn unlimited() -> Self {
        Format::ALL
            .into_iter()
            .fold(Self::new(), |legality, format| legality.with(format, DEFAULT_COPY_LIMIT))
    }

    /// Set the limit for a format (builder pattern). Values above 3 are clamped.
    #[must_use]
    pub fn with(mut self, format: Format, limit: u8) -> Self {
        self.limits.insert(format, limit.min(DEFAULT_COPY_LIMIT));
        self
    }

    /// Copy limit for a format.
    #[must_use]
    pub fn limit(&self, format: Format) -> u8 {
        self.limits.get(&format).copied().unwrap_or(0)
    }

    /// Check if at least one copy is allowed in `format`.
    #[must_use]
    pub fn is_legal_in(&self, format: Format) -> bool {
        self.limit(format) > 0
    }
}

/// Static card data.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::cards::{Card, CardId, CardType, Format, Legality};
///
/// let card = Card::new(CardId::new(89631139), "Blue-Eyes White Dragon", CardType::main_monster("Normal Monster"))
///     .with_stats(3000, 2500, 8)
///     .with_archetype("Blue-Eyes")
///     .with_legality(Legality::unlimited().with(Format::Goat, 1));
///
/// assert_eq!(card.legality.limit(Format::Goat), 1);
/// assert_eq!(card.legality.limit(Format::Tcg), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Display name, also used for deck names and "same card" checks.
    pub name: String,

    pub card_type: CardType,

    pub legality: Legality,

    /// Archetype this card belongs to, if any.
    pub archetype: Option<String>,

    /// Name of the card this one counts as for copy limits.
    pub treated_as: Option<String>,

    pub atk: Option<i32>,
    pub def: Option<i32>,
    pub level: Option<u8>,
}

impl Card {
    /// Create a card that is legal nowhere until `with_legality` is applied.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            legality: Legality::new(),
            archetype: None,
            treated_as: None,
            atk: None,
            def: None,
            level: None,
        }
    }

    #[must_use]
    pub fn with_legality(mut self, legality: Legality) -> Self {
        self.legality = legality;
        self
    }

    #[must_use]
    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = Some(archetype.into());
        self
    }

    #[must_use]
    pub fn with_treated_as(mut self, name: impl Into<String>) -> Self {
        self.treated_as = Some(name.into());
        self
    }

    /// Set monster stats (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, atk: i32, def: i32, level: u8) -> Self {
        self.atk = Some(atk);
        self.def = Some(def);
        self.level = Some(level);
        self
    }

    /// Category of this card's type.
    #[must_use]
    pub fn category(&self) -> CardTypeCategory {
        self.card_type.category
    }
}
