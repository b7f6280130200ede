use loot_core::rarity::roll_rarity;
use loot_core::Rarity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn high_rarity_share(luck: f32, seed: u64, draws: u32) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut high = 0u32;
    for _ in 0..draws {
        let r = roll_rarity(luck, &mut rng);
        if matches!(r, Rarity::Rare | Rarity::Legendary) {
            high += 1;
        }
    }
    f64::from(high) / f64::from(draws)
}

#[test]
fn luck_100_strictly_increases_rare_and_legendary_share() {
    let p0 = high_rarity_share(0.0, 99, 10_000);
    let p100 = high_rarity_share(100.0, 99, 10_000);
    assert!(
        p100 > p0,
        "luck 100 share {p100:.4} not above luck 0 share {p0:.4}"
    );
}

#[test]
fn corrupted_never_comes_out_of_the_weighted_roll() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..10_000 {
        assert_ne!(roll_rarity(500.0, &mut rng), Rarity::Corrupted);
    }
}
