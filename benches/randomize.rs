use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ccg_deckbuilder::cards::{Card, CardId, CardType, InMemoryCardDatabase, Legality};
use ccg_deckbuilder::core::DeckRng;
use ccg_deckbuilder::deck::{DeckRandomizer, RandomizationOptions, RandomizationStrategy};

fn database() -> InMemoryCardDatabase {
    let archetypes = ["HERO", "Blackwing", "Lightsworn", "Six Samurai", "Gadget"];
    let cards = (0..2000u32).map(|id| {
        let card_type = match id % 10 {
            0..=4 => CardType::main_monster("Effect Monster"),
            5..=6 => CardType::spell(),
            7 => CardType::trap(),
            _ => CardType::extra_monster("Fusion Monster"),
        };
        let card = Card::new(CardId::new(id), format!("Card {id}"), card_type).with_legality(Legality::unlimited());
        if id % 7 == 0 {
            card.with_archetype(archetypes[(id as usize / 7) % archetypes.len()])
        } else {
            card
        }
    });
    InMemoryCardDatabase::from_cards(cards).expect("unique ids")
}

fn bench_randomize(c: &mut Criterion) {
    let db = database();
    let randomizer = DeckRandomizer::new(&db);
    let options = RandomizationOptions::default();

    for strategy in [
        RandomizationStrategy::Normal,
        RandomizationStrategy::Archetype3,
        RandomizationStrategy::Highlander,
    ] {
        c.bench_function(&format!("randomize {strategy}"), |b| {
            let mut rng = DeckRng::new(42);
            b.iter(|| randomizer.randomize(black_box(strategy), &options, &mut rng))
        });
    }
}

criterion_group!(benches, bench_randomize);
criterion_main!(benches);
