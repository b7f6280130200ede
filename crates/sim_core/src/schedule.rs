//! Per-tick context and ordered system schedule.
//!
//! One tick owns all mutable state: spawn -> enemy AI -> weapons ->
//! projectile integration -> collisions -> explosions -> contact ->
//! damage apply -> deaths -> pickups -> cleanup. Nothing outside this
//! window mutates the run state.

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::actor::{EnemyId, WeaponId};
use crate::events::SimEvent;
use crate::input::InputSnapshot;
use crate::{systems, torus, ultimate, RunState};

#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Firing weapon group, if the source participates in hit sharing.
    pub weapon: Option<WeaponId>,
    pub dst: EnemyId,
    pub amount: i32,
    pub crit: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ExplodeEvent {
    pub weapon: WeaponId,
    pub center: Vec2,
    pub dmg: i32,
    pub radius: f32,
}

/// Transient per-tick scratch state. Rebuilt each tick and discarded; in
/// particular the shared hit lists never leak across ticks.
#[derive(Default)]
pub struct Ctx {
    pub dmg: Vec<DamageEvent>,
    pub boom: Vec<ExplodeEvent>,
    /// Per-weapon set of enemies already damaged this tick. A weapon's
    /// whole projectile group damages any one enemy at most once per tick.
    pub hit_lists: HashMap<WeaponId, HashSet<EnemyId>>,
}

impl Ctx {
    #[inline]
    pub fn already_hit(&self, weapon: WeaponId, enemy: EnemyId) -> bool {
        self.hit_lists
            .get(&weapon)
            .is_some_and(|s| s.contains(&enemy))
    }

    #[inline]
    pub fn record_hit(&mut self, weapon: WeaponId, enemy: EnemyId) {
        self.hit_lists.entry(weapon).or_default().insert(enemy);
    }
}

pub struct Schedule;

impl Schedule {
    pub fn run(&mut self, state: &mut RunState, ctx: &mut Ctx, input: &InputSnapshot) {
        tick_timers(state, input);
        player_move(state, input);
        systems::spawn::tick(state);
        systems::enemies::seek_and_fire(state);
        systems::weapons::fire(state, ctx, input);
        systems::projectiles::integrate(state, ctx);
        systems::projectiles::collide_player(state);
        systems::projectiles::collide_enemies(state, ctx);
        systems::projectiles::apply_explosions(state, ctx);
        systems::contact::tick(state);
        apply_damage(state, ctx);
        systems::death::resolve(state);
        systems::pickups::collect(state);
        cleanup(state);
    }
}

fn tick_timers(state: &mut RunState, input: &InputSnapshot) {
    if state.player.ult_active > 0 {
        state.player.ult_active -= 1;
    }
    if state.time_frozen > 0 {
        state.time_frozen -= 1;
    }
    if input.ultimate && state.player.ult_charge >= state.player.ult_max {
        ultimate::trigger(state);
    }
}

fn player_move(state: &mut RunState, input: &InputSnapshot) {
    let dir = input.move_dir.normalize_or_zero();
    let step = dir * state.player.stats.speed;
    state.player.pos = torus::wrap(state.player.pos + step, state.tuning.world_side);
}

/// Drain enemy damage events, mutate hp, and surface damage numbers.
fn apply_damage(state: &mut RunState, ctx: &mut Ctx) {
    for ev in ctx.dmg.drain(..) {
        let Some(e) = state.enemies.iter_mut().find(|e| e.id == ev.dst && !e.marked) else {
            continue;
        };
        e.hp -= ev.amount;
        state.events.push(SimEvent::DamageNumber {
            pos: e.pos.into(),
            amount: ev.amount,
            crit: ev.crit,
            hostile: false,
        });
    }
}

/// In-place stable filters; no per-tick reallocation of the entity lists.
fn cleanup(state: &mut RunState) {
    state.enemies.retain(|e| !e.marked);
    state.projectiles.retain(|p| !p.marked);
    state.pickups.retain(|p| !p.marked);
}
