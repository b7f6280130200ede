//! Whole-run behavior: kills award drops that the player scoops up, and a
//! seeded run replays identically.

use glam::Vec2;
use sim_core::actor::{Enemy, EnemyId, EnemyKind, ProjectileId, WeaponId};
use sim_core::events::SimEvent;
use sim_core::input::InputSnapshot;
use sim_core::player::CharacterTemplate;
use sim_core::projectile::Projectile;
use sim_core::tuning::SimTuning;
use sim_core::RunState;

fn bare_state(seed: u64) -> RunState {
    let tpl = CharacterTemplate {
        weapons: vec![],
        ..CharacterTemplate::default()
    };
    RunState::new(SimTuning::default(), &tpl, &[], seed)
}

#[test]
fn a_kill_drops_pickups_the_player_collects() {
    let mut state = bare_state(5);
    let id = EnemyId(state.alloc_enemy_id());
    let pos = state.player.pos + Vec2::new(40.0, 0.0);
    state.enemies.push(Enemy::new(id, EnemyKind::Basic, pos, 0));
    let pid = ProjectileId(state.alloc_projectile_id());
    state.projectiles.push(Projectile {
        id: pid,
        weapon: WeaponId(0),
        pos,
        prev_pos: pos,
        vel: Vec2::ZERO,
        dmg: 50,
        pierce: 1,
        radius: 6.0,
        hit_list: Vec::new(),
        crit: false,
        hostile: false,
        explode_radius: 0.0,
        knockback: 0.0,
        homing: false,
        life: 100,
        age: 0,
        marked: false,
    });
    state.step(&InputSnapshot::default());
    assert_eq!(state.kills, 1, "a 50-damage hit must kill a basic enemy");
    assert!(
        state.enemies.iter().all(|e| e.id != id),
        "dead enemies are removed at end-of-tick cleanup"
    );
    // The xp drop lands within pickup range and is scooped up in the same
    // tick it appears; the gold bounty is credited at the kill itself.
    assert_eq!(state.gold, 2, "basic kills pay their gold bounty at death");
    let events = state.drain_events();
    assert!(
        events.iter().any(|e| matches!(e, SimEvent::GoldGained { amount: 2 })),
        "the gold bounty must surface an event"
    );
    assert!(
        events.iter().any(|e| matches!(e, SimEvent::Particles { .. })),
        "a death must surface a particle burst"
    );
    assert!(state.player.ult_charge > 0.0, "kills feed the ultimate charge");
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let run = |seed: u64| -> String {
        let mut state = RunState::new(
            SimTuning::default(),
            &CharacterTemplate::default(),
            &[],
            seed,
        );
        let mut input = InputSnapshot::default();
        for i in 0..1_200u32 {
            input.move_dir = Vec2::new(((i / 60) % 3) as f32 - 1.0, 0.5);
            input.aim = (i as f32) * 0.01;
            input.ultimate = i % 400 == 399;
            state.step(&input);
            state.events.clear();
        }
        format!("{:?}", state.snapshot())
    };
    assert_eq!(run(9), run(9), "identical seeds must replay identically");
    assert_ne!(run(9), run(10), "different seeds must diverge");
}

#[test]
fn gold_is_credited_even_when_the_kill_is_out_of_pickup_range() {
    let mut state = bare_state(6);
    let id = EnemyId(state.alloc_enemy_id());
    // Well outside the 60-unit pickup range, so nothing gets collected.
    let pos = state.player.pos + Vec2::new(300.0, 0.0);
    state.enemies.push(Enemy::new(id, EnemyKind::Basic, pos, 0));
    let pid = ProjectileId(state.alloc_projectile_id());
    state.projectiles.push(Projectile {
        id: pid,
        weapon: WeaponId(0),
        pos,
        prev_pos: pos,
        vel: Vec2::ZERO,
        dmg: 50,
        pierce: 1,
        radius: 6.0,
        hit_list: Vec::new(),
        crit: false,
        hostile: false,
        explode_radius: 0.0,
        knockback: 0.0,
        homing: false,
        life: 100,
        age: 0,
        marked: false,
    });
    state.step(&InputSnapshot::default());
    assert_eq!(state.kills, 1);
    assert_eq!(
        state.gold, 2,
        "gold is awarded at death, not deferred to pickup collection"
    );
    assert!(
        state.pickups.iter().any(|p| !p.marked),
        "the xp drop waits out of range instead of being scooped"
    );
}

#[test]
fn extraction_ends_the_run_alive() {
    let mut state = bare_state(4);
    for _ in 0..120 {
        state.step(&InputSnapshot::default());
    }
    let summary = state.extract();
    assert!(!summary.died, "extraction is not a death");
    assert_eq!(summary.ticks, 120);
    state.step(&InputSnapshot::default());
    assert_eq!(state.tick, 120, "an extracted run is inert");
}

#[test]
fn lethal_contact_ends_the_run_exactly_once() {
    let mut state = bare_state(8);
    state.player.hp = 1;
    // A boss parked on the player lands lethal contact on the phase tick.
    let id = EnemyId(state.alloc_enemy_id());
    state
        .enemies
        .push(Enemy::new(id, EnemyKind::Boss, state.player.pos, 0));
    state.step(&InputSnapshot::default());
    assert!(state.game_over, "lethal contact must end the run");
    let overs = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, SimEvent::GameOver { .. }))
        .count();
    assert_eq!(overs, 1, "exactly one game-over event");
    let tick = state.tick;
    state.step(&InputSnapshot::default());
    assert_eq!(state.tick, tick, "a dead run does not advance");
}
