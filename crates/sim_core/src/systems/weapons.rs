//! Weapon cooldowns and firing: aura pulses, homing shots, cone spreads,
//! and cleaves, with the crit roll made at fire time.

use glam::Vec2;
use rand::Rng;

use crate::actor::{ProjectileId, WeaponId};
use crate::input::InputSnapshot;
use crate::projectile::Projectile;
use crate::schedule::{Ctx, DamageEvent};
use crate::weapons::WeaponKind;
use crate::{stats, torus, ultimate, RunState};

struct FireOrder {
    weapon: WeaponId,
    kind: WeaponKind,
    dmg: i32,
    crit: bool,
}

pub fn fire(state: &mut RunState, ctx: &mut Ctx, input: &InputSnapshot) {
    let rate = ultimate::cooldown_rate(state.player.ultimate, state.player.ult_active);
    let crit_mult = state.tuning.crit_mult;
    let side = state.tuning.world_side;
    let mut orders: Vec<FireOrder> = Vec::new();

    // Phase 1: advance cooldowns, resolve aura pulses, queue fire orders.
    {
        let RunState {
            player,
            enemies,
            rng,
            ..
        } = state;
        let p_stats = player.stats;
        let p_pos = player.pos;
        for w in &mut player.weapons {
            w.cur_cd = w.cur_cd.saturating_sub(rate);
            if w.cur_cd > 0 {
                continue;
            }
            let spec = w.kind.spec();
            let crit = rng.random::<f32>() < p_stats.crit_chance;
            let mut dmg = (w.leveled_dmg() + p_stats.flat_damage) * p_stats.dmg_mult;
            if crit {
                dmg *= crit_mult;
            }
            let dmg = dmg.round().max(1.0) as i32;
            if w.kind.is_aura() {
                let radius = stats::effective_area(spec.area, p_stats.area_flat, p_stats.area_pct);
                for e in enemies.iter().filter(|e| e.alive()) {
                    if torus::dist(p_pos, e.pos, side) <= radius + e.radius {
                        ctx.dmg.push(DamageEvent {
                            weapon: Some(w.id),
                            dst: e.id,
                            amount: dmg,
                            crit,
                        });
                        ctx.record_hit(w.id, e.id);
                    }
                }
            } else {
                orders.push(FireOrder {
                    weapon: w.id,
                    kind: w.kind,
                    dmg,
                    crit,
                });
            }
            w.cur_cd = stats::weapon_cooldown(spec.cooldown, p_stats.cdr_pct);
        }
    }

    // Phase 2: materialize projectiles for the queued orders.
    let aim_dir = Vec2::from_angle(input.aim);
    for order in orders {
        let spec = order.kind.spec();
        let p_stats = state.player.stats;
        let origin = state.player.pos;
        let life = stats::effective_duration(spec.life, p_stats.duration_bonus);
        let explode = if spec.explode_radius > 0.0 {
            stats::effective_area(spec.explode_radius, 0.0, p_stats.area_pct)
        } else {
            0.0
        };
        let toward_nearest = state
            .nearest_enemy(origin)
            .map(|p| torus::wrap_delta(origin, p, state.tuning.world_side).normalize_or_zero())
            .filter(|d| d.length_squared() > 1e-6)
            .unwrap_or(aim_dir);
        let shots = spec.shots.max(1);
        for i in 0..shots {
            let dir = match order.kind {
                WeaponKind::SeekerDart | WeaponKind::Cleaver => toward_nearest,
                WeaponKind::FanSpray => {
                    let t = if shots > 1 {
                        (i as f32) / ((shots - 1) as f32) - 0.5
                    } else {
                        0.0
                    };
                    Vec2::from_angle(input.aim + t * spec.spread)
                }
                WeaponKind::PulseField => aim_dir,
            };
            let id = state.alloc_projectile_id();
            state.projectiles.push(Projectile {
                id: ProjectileId(id),
                weapon: order.weapon,
                pos: origin,
                prev_pos: origin,
                vel: dir * spec.speed,
                dmg: order.dmg,
                pierce: spec.pierce,
                radius: spec.radius,
                hit_list: Vec::new(),
                crit: order.crit,
                hostile: false,
                explode_radius: explode,
                knockback: spec.knockback,
                homing: spec.homing,
                life,
                age: 0,
                marked: false,
            });
        }
    }
}
