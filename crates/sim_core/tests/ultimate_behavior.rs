//! Ultimate side effects observed through whole ticks: Bulwark immunity,
//! Stasis world-freeze, and Mend healing.

use glam::Vec2;
use sim_core::actor::{Enemy, EnemyId, EnemyKind};
use sim_core::input::InputSnapshot;
use sim_core::player::CharacterTemplate;
use sim_core::tuning::SimTuning;
use sim_core::ultimate::UltimateKind;
use sim_core::RunState;

fn state_with(ultimate: UltimateKind) -> RunState {
    let tpl = CharacterTemplate {
        ultimate,
        weapons: vec![],
        ..CharacterTemplate::default()
    };
    RunState::new(SimTuning::default(), &tpl, &[], 3)
}

fn place_enemy(state: &mut RunState, offset: Vec2) {
    let id = EnemyId(state.alloc_enemy_id());
    let pos = state.player.pos + offset;
    state.enemies.push(Enemy::new(id, EnemyKind::Basic, pos, 0));
}

fn fire_ultimate() -> InputSnapshot {
    InputSnapshot {
        ultimate: true,
        ..InputSnapshot::default()
    }
}

#[test]
fn bulwark_swallows_contact_damage_while_active() {
    // Enemy inside contact range on the contact-phase tick.
    let mut with_ult = state_with(UltimateKind::Bulwark);
    place_enemy(&mut with_ult, Vec2::new(10.0, 0.0));
    with_ult.player.ult_charge = with_ult.player.ult_max;
    with_ult.step(&fire_ultimate());
    assert_eq!(
        with_ult.player.hp, with_ult.player.max_hp,
        "contact damage must not land through an active Bulwark"
    );
    assert!(with_ult.player.ult_active > 0);
    assert_eq!(with_ult.player.ult_charge, 0.0, "triggering spends the charge");

    let mut without = state_with(UltimateKind::Bulwark);
    place_enemy(&mut without, Vec2::new(10.0, 0.0));
    without.step(&InputSnapshot::default());
    assert!(
        without.player.hp < without.player.max_hp,
        "the same contact tick hurts an unshielded player"
    );
}

#[test]
fn uncharged_ultimate_input_is_ignored() {
    let mut state = state_with(UltimateKind::Bulwark);
    state.player.ult_charge = state.player.ult_max - 1.0;
    state.step(&fire_ultimate());
    assert_eq!(state.player.ult_active, 0, "partial charge must not trigger");
}

#[test]
fn stasis_freezes_spawning_and_enemy_motion() {
    let mut state = state_with(UltimateKind::Stasis);
    place_enemy(&mut state, Vec2::new(200.0, 0.0));
    let before = state.enemies[0].pos;
    state.player.ult_charge = state.player.ult_max;
    state.step(&fire_ultimate());
    assert!(state.time_frozen > 0, "Stasis must raise the freeze counter");
    assert_eq!(
        state.enemies.len(),
        1,
        "the tick-0 spawn beat must be suppressed while frozen"
    );
    assert_eq!(state.enemies[0].pos, before, "frozen enemies do not move");

    // The freeze wears off tick by tick.
    let frozen = state.time_frozen;
    state.step(&InputSnapshot::default());
    assert_eq!(state.time_frozen, frozen - 1);
}

#[test]
fn mend_restores_half_of_max_hp() {
    let mut state = state_with(UltimateKind::Mend);
    state.player.hp = 10;
    state.player.ult_charge = state.player.ult_max;
    state.step(&fire_ultimate());
    assert_eq!(
        state.player.hp,
        10 + state.player.max_hp / 2,
        "Mend heals half of max hp at the base heal modifier"
    );
}

#[test]
fn arc_storm_rings_the_player_with_projectiles() {
    let mut state = state_with(UltimateKind::ArcStorm);
    state.player.ult_charge = state.player.ult_max;
    state.step(&fire_ultimate());
    let burst = state.projectiles.iter().filter(|p| !p.hostile).count();
    assert_eq!(burst, 12, "Arc Storm fires a 12-projectile radial burst");
}
