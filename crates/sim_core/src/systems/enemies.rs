//! Enemy AI: seek the player along the wrapped shortest path, and ranged
//! kinds fire hostile projectiles on a per-enemy cooldown.

use crate::actor::{ProjectileId, WeaponId};
use crate::projectile::Projectile;
use crate::{torus, RunState};

pub fn seek_and_fire(state: &mut RunState) {
    if state.time_frozen > 0 {
        return;
    }
    let side = state.tuning.world_side;
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    let mut shots: Vec<(glam::Vec2, glam::Vec2, i32)> = Vec::new();
    for e in state.enemies.iter_mut().filter(|e| e.alive()) {
        let to = torus::wrap_delta(e.pos, player_pos, side);
        let dist = to.length();
        let contact = e.radius + player_radius;
        if dist > contact {
            let step = e.speed.min(dist - contact);
            e.pos = torus::wrap(e.pos + to.normalize_or_zero() * step, side);
        }
        if e.kind.fire_interval().is_some() {
            e.fire_cd = e.fire_cd.saturating_sub(1);
            if e.fire_cd == 0 {
                let dmg = (e.kind.contact_damage() * 1.5).round() as i32;
                shots.push((e.pos, to.normalize_or_zero() * 3.0, dmg));
                e.fire_cd = e.kind.fire_interval().unwrap_or(u32::MAX);
            }
        }
    }
    for (pos, vel, dmg) in shots {
        let id = state.alloc_projectile_id();
        state.projectiles.push(Projectile {
            id: ProjectileId(id),
            weapon: WeaponId::HOSTILE,
            pos,
            prev_pos: pos,
            vel,
            dmg,
            pierce: 1,
            radius: 6.0,
            hit_list: Vec::new(),
            crit: false,
            hostile: true,
            explode_radius: 0.0,
            knockback: 0.0,
            homing: false,
            life: 240,
            age: 0,
            marked: false,
        });
    }
}
