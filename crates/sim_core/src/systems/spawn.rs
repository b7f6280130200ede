//! Spawn director: per-tick cadence decision plus enemy instantiation.

use glam::Vec2;
use rand::Rng;

use crate::actor::{Enemy, EnemyId, EnemyKind};
use crate::{torus, RunState};

/// Ticks between spawn attempts; shrinks as the run progresses, floor 10.
#[inline]
pub fn spawn_interval(minutes: u64) -> u64 {
    (60i64 - (minutes as i64) * 5).max(10) as u64
}

/// Decide whether this tick spawns an enemy and of what kind.
///
/// Boss cadence wins over elite cadence; a boss attempt while another boss
/// lives produces no spawn at all (it is not downgraded to an elite).
pub fn decide(tick: u64, boss_alive: bool, time_frozen: u32, rng: &mut impl Rng) -> Option<EnemyKind> {
    if time_frozen > 0 {
        return None;
    }
    let seconds = tick / 60;
    let minutes = seconds / 60;
    if tick % spawn_interval(minutes) != 0 {
        return None;
    }
    if seconds > 0 && seconds % 300 == 0 {
        if boss_alive {
            return None;
        }
        return Some(EnemyKind::Boss);
    }
    if seconds > 0 && seconds % 60 == 0 {
        return Some(EnemyKind::Elite);
    }
    if rng.random::<f32>() > 0.9 {
        Some(EnemyKind::Bat)
    } else {
        Some(EnemyKind::Basic)
    }
}

pub fn tick(state: &mut RunState) {
    let boss_alive = state
        .enemies
        .iter()
        .any(|e| e.kind == EnemyKind::Boss && e.alive());
    let Some(kind) = decide(state.tick, boss_alive, state.time_frozen, &mut state.rng) else {
        return;
    };
    let minutes = state.tick / 3600;
    let angle = state.rng.random_range(0.0..std::f32::consts::TAU);
    let jitter = Vec2::new(
        state.rng.random_range(-state.tuning.spawn_jitter..state.tuning.spawn_jitter),
        state.rng.random_range(-state.tuning.spawn_jitter..state.tuning.spawn_jitter),
    );
    let pos = torus::wrap(
        state.player.pos + Vec2::from_angle(angle) * state.tuning.spawn_distance + jitter,
        state.tuning.world_side,
    );
    let id = EnemyId(state.alloc_enemy_id());
    state.enemies.push(Enemy::new(id, kind, pos, minutes));
    if kind == EnemyKind::Boss {
        log::info!("boss spawned at minute {minutes}");
    }
    metrics::counter!("sim.spawns_total", "kind" => kind.name()).increment(1);
}
