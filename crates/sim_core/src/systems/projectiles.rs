//! Projectile lifecycle: integration with homing steer and trail damage,
//! collision passes against the player and enemies, then chained
//! explosion resolution.

use crate::actor::EnemyId;
use crate::events::SimEvent;
use crate::schedule::{Ctx, DamageEvent, ExplodeEvent};
use crate::{torus, ultimate, RunState};

/// Ticks between trail-damage pulses on homing projectiles.
const TRAIL_PERIOD: u32 = 6;
/// Homing turn rate, fraction of the steer correction applied per tick.
const HOMING_TURN: f32 = 0.18;

/// Advance every live projectile one tick: steer homing shots toward the
/// nearest enemy, move and wrap, age out, and queue expiry explosions for
/// homing shots that die with pierce remaining.
pub fn integrate(state: &mut RunState, ctx: &mut Ctx) {
    let side = state.tuning.world_side;
    let frozen = state.time_frozen > 0;
    let RunState {
        enemies,
        projectiles,
        ..
    } = state;
    for p in projectiles.iter_mut().filter(|p| p.live()) {
        // Stasis halts enemy-owned shots along with their owners.
        if p.hostile && frozen {
            continue;
        }
        if p.homing {
            let target = enemies
                .iter()
                .filter(|e| e.alive() && !p.hit_list.contains(&e.id))
                .min_by(|a, b| {
                    torus::dist(p.pos, a.pos, side)
                        .total_cmp(&torus::dist(p.pos, b.pos, side))
                });
            if let Some(e) = target {
                let speed = p.vel.length();
                let want = torus::wrap_delta(p.pos, e.pos, side).normalize_or_zero() * speed;
                p.vel = (p.vel + (want - p.vel) * HOMING_TURN).normalize_or_zero() * speed;
            }
        }
        p.pos = torus::wrap(p.pos + p.vel, side);
        p.age += 1;
        p.life -= 1;
        if p.homing && p.age % TRAIL_PERIOD == 0 {
            let trail_dmg = (p.dmg / 4).max(1);
            let reach = p.radius * 2.0;
            for e in enemies.iter().filter(|e| e.alive()) {
                // Trail pulses share the weapon group's hit list, same as
                // direct impacts.
                if p.has_hit(e.id) || ctx.already_hit(p.weapon, e.id) {
                    continue;
                }
                if torus::dist(p.pos, e.pos, side) <= reach + e.radius {
                    ctx.dmg.push(DamageEvent {
                        weapon: Some(p.weapon),
                        dst: e.id,
                        amount: trail_dmg,
                        crit: false,
                    });
                    ctx.record_hit(p.weapon, e.id);
                }
            }
        }
        if p.life == 0 {
            if p.homing && p.pierce > 0 && p.explode_radius > 0.0 {
                ctx.boom.push(ExplodeEvent {
                    weapon: p.weapon,
                    center: p.pos,
                    dmg: p.dmg,
                    radius: p.explode_radius,
                });
            }
            p.marked = true;
        }
    }
}

/// Hostile projectiles against the player. Immunity swallows the hit but
/// still consumes the projectile.
pub fn collide_player(state: &mut RunState) {
    let side = state.tuning.world_side;
    let immune = ultimate::damage_immune(state.player.ultimate, state.player.ult_active);
    let mut hits: Vec<i32> = Vec::new();
    for p in state
        .projectiles
        .iter_mut()
        .filter(|p| p.hostile && p.live())
    {
        let overlap = torus::dist(p.pos, state.player.pos, side) <= p.radius + state.player.radius;
        if overlap {
            p.marked = true;
            if !immune {
                hits.push(p.dmg);
            }
        }
    }
    for dmg in hits {
        state.damage_player(dmg);
    }
}

/// Player projectiles against enemies, honoring each projectile's own hit
/// list and the weapon group's shared per-tick hit list.
pub fn collide_enemies(state: &mut RunState, ctx: &mut Ctx) {
    let side = state.tuning.world_side;
    let RunState {
        enemies,
        projectiles,
        ..
    } = state;
    for p in projectiles.iter_mut().filter(|p| !p.hostile && p.live()) {
        for e in enemies.iter_mut().filter(|e| e.alive()) {
            if p.has_hit(e.id) || ctx.already_hit(p.weapon, e.id) {
                continue;
            }
            if torus::dist(p.pos, e.pos, side) > p.radius + e.radius {
                continue;
            }
            ctx.dmg.push(DamageEvent {
                weapon: Some(p.weapon),
                dst: e.id,
                amount: p.dmg,
                crit: p.crit,
            });
            p.hit_list.push(e.id);
            ctx.record_hit(p.weapon, e.id);
            if p.knockback > 0.0 {
                let push = torus::wrap_delta(p.pos, e.pos, side).normalize_or_zero() * p.knockback;
                e.pos = torus::wrap(e.pos + push, side);
            }
            if p.explode_radius > 0.0 {
                ctx.boom.push(ExplodeEvent {
                    weapon: p.weapon,
                    center: e.pos,
                    dmg: p.dmg,
                    radius: p.explode_radius,
                });
            }
            p.pierce -= 1;
            if p.pierce <= 0 {
                p.marked = true;
                break;
            }
        }
    }
}

/// Drain queued explosions, damaging every enemy in radius with linear
/// falloff. Explosions share the firing weapon's hit list, so an enemy
/// already struck by the group this tick is skipped rather than
/// double-dipped; newly struck enemies are recorded, which also keeps a
/// chain of explosions from re-hitting the same victims.
pub fn apply_explosions(state: &mut RunState, ctx: &mut Ctx) {
    let side = state.tuning.world_side;
    while let Some(boom) = ctx.boom.pop() {
        let mut struck: Vec<(EnemyId, i32, glam::Vec2)> = Vec::new();
        for e in state.enemies.iter().filter(|e| e.alive()) {
            if ctx.already_hit(boom.weapon, e.id) {
                continue;
            }
            let d = torus::dist(boom.center, e.pos, side);
            if d > boom.radius + e.radius {
                continue;
            }
            let falloff = 1.0 - 0.5 * (d / boom.radius).min(1.0);
            let amount = ((boom.dmg as f32) * falloff).round().max(1.0) as i32;
            struck.push((e.id, amount, e.pos));
        }
        for (id, amount, pos) in struck {
            ctx.dmg.push(DamageEvent {
                weapon: Some(boom.weapon),
                dst: id,
                amount,
                crit: false,
            });
            ctx.record_hit(boom.weapon, id);
            state.events.push(SimEvent::Particles {
                pos: pos.into(),
                count: 3,
            });
        }
    }
}
