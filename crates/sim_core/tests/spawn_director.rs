//! Spawn cadence: shrinking interval, boss/elite beats, and the live-boss
//! guard.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sim_core::actor::EnemyKind;
use sim_core::systems::spawn::{decide, spawn_interval};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[test]
fn interval_shrinks_with_elapsed_minutes_down_to_the_floor() {
    assert_eq!(spawn_interval(0), 60);
    assert_eq!(spawn_interval(4), 40);
    assert_eq!(spawn_interval(10), 10);
    assert_eq!(spawn_interval(60), 10, "interval never drops below the floor");
}

#[test]
fn off_cadence_ticks_spawn_nothing() {
    assert_eq!(decide(1, false, 0, &mut rng()), None);
    assert_eq!(decide(59, false, 0, &mut rng()), None);
}

#[test]
fn frozen_time_suppresses_all_spawning() {
    assert_eq!(decide(60, false, 7, &mut rng()), None);
}

#[test]
fn boss_beat_spawns_a_boss_unless_one_lives() {
    // Minute 5, interval 35; tick 18025 is the cadence tick inside the
    // 300-second window.
    let tick = 18_025;
    assert_eq!(tick % spawn_interval(tick / 3600), 0);
    assert_eq!((tick / 60) % 300, 0);
    assert_eq!(decide(tick, false, 0, &mut rng()), Some(EnemyKind::Boss));
    assert_eq!(
        decide(tick, true, 0, &mut rng()),
        None,
        "a live boss must suppress the spawn outright, not downgrade it"
    );
}

#[test]
fn elite_beat_spawns_an_elite() {
    // Minute 1, interval 55; tick 3630 is the cadence tick inside the
    // 60-second window.
    let tick = 3_630;
    assert_eq!(tick % spawn_interval(tick / 3600), 0);
    assert_eq!((tick / 60) % 60, 0);
    assert_eq!(decide(tick, false, 0, &mut rng()), Some(EnemyKind::Elite));
}

#[test]
fn ordinary_beats_split_between_basic_and_bat() {
    let mut rng = rng();
    let mut basics = 0u32;
    let mut bats = 0u32;
    for _ in 0..2_000 {
        match decide(0, false, 0, &mut rng) {
            Some(EnemyKind::Basic) => basics += 1,
            Some(EnemyKind::Bat) => bats += 1,
            other => panic!("tick 0 must spawn a common kind, got {other:?}"),
        }
    }
    assert!(basics > bats, "basics dominate the common roll");
    let bat_share = bats as f32 / 2_000.0;
    assert!(
        (0.05..0.2).contains(&bat_share),
        "bat share {bat_share} strays far from the 10% roll"
    );
}
