//! Card pool fixtures shared by the integration tests.

#![allow(dead_code)]

use ccg_deckbuilder::cards::{Card, CardId, CardType, Format, InMemoryCardDatabase, Legality};

/// `count` main deck monsters legal 3x everywhere, IDs starting at `first_id`.
pub fn monsters(first_id: u32, count: u32) -> Vec<Card> {
    (first_id..first_id + count)
        .map(|id| {
            Card::new(CardId::new(id), format!("Monster {id}"), CardType::main_monster("Effect Monster"))
                .with_stats(1000, 1000, 4)
                .with_legality(Legality::unlimited())
        })
        .collect()
}

pub fn spells(first_id: u32, count: u32) -> Vec<Card> {
    (first_id..first_id + count)
        .map(|id| {
            Card::new(CardId::new(id), format!("Spell {id}"), CardType::spell())
                .with_legality(Legality::unlimited())
        })
        .collect()
}

pub fn traps(first_id: u32, count: u32) -> Vec<Card> {
    (first_id..first_id + count)
        .map(|id| {
            Card::new(CardId::new(id), format!("Trap {id}"), CardType::trap())
                .with_legality(Legality::unlimited())
        })
        .collect()
}

pub fn fusions(first_id: u32, count: u32) -> Vec<Card> {
    (first_id..first_id + count)
        .map(|id| {
            Card::new(CardId::new(id), format!("Fusion {id}"), CardType::extra_monster("Fusion Monster"))
                .with_stats(2500, 2000, 8)
                .with_legality(Legality::unlimited())
        })
        .collect()
}

/// Archetype members named "<Archetype> <Word> <n>".
pub fn archetype_cards(archetype: &str, word: &str, first_id: u32, count: u32) -> Vec<Card> {
    (first_id..first_id + count)
        .map(|id| {
            Card::new(
                CardId::new(id),
                format!("{archetype} {word} {id}"),
                CardType::main_monster("Effect Monster"),
            )
            .with_archetype(archetype)
            .with_legality(Legality::unlimited())
        })
        .collect()
}

/// A realistic mixed pool: monsters, spells, traps and extra deck monsters.
pub fn mixed_database() -> InMemoryCardDatabase {
    let cards = monsters(1, 60)
        .into_iter()
        .chain(spells(100, 30))
        .chain(traps(200, 20))
        .chain(fusions(300, 20));
    InMemoryCardDatabase::from_cards(cards).unwrap()
}

/// Mixed pool where half of the spells are banned in GOAT and some monsters
/// are limited there.
pub fn banlist_database() -> InMemoryCardDatabase {
    let monsters = monsters(1, 40).into_iter().enumerate().map(|(i, card)| {
        let goat = if i % 4 == 0 { 1 } else { 3 };
        card.with_legality(Legality::unlimited().with(Format::Goat, goat))
    });
    let spells = spells(100, 30).into_iter().enumerate().map(|(i, card)| {
        let goat = if i % 2 == 0 { 0 } else { 2 };
        card.with_legality(Legality::unlimited().with(Format::Goat, goat))
    });
    InMemoryCardDatabase::from_cards(monsters.chain(spells).chain(traps(200, 20))).unwrap()
}
