//! Projectile state shared by player weapons, ultimates, and ranged enemies.

use glam::Vec2;

use crate::actor::{EnemyId, ProjectileId, WeaponId};

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: ProjectileId,
    /// Firing weapon group; hit sharing is keyed by this.
    pub weapon: WeaponId,
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub vel: Vec2,
    pub dmg: i32,
    /// Remaining enemy hits before the projectile is consumed. Never goes
    /// negative; the projectile is marked the tick it reaches zero.
    pub pierce: i32,
    pub radius: f32,
    /// Enemies this instance has already struck (persists across ticks so a
    /// piercing shot cannot re-hit the same enemy).
    pub hit_list: Vec<EnemyId>,
    pub crit: bool,
    pub hostile: bool,
    /// Explosion radius on impact/expiry; zero disables.
    pub explode_radius: f32,
    pub knockback: f32,
    pub homing: bool,
    /// Remaining lifetime in ticks.
    pub life: u32,
    /// Ticks lived, used for periodic trail damage.
    pub age: u32,
    pub marked: bool,
}

impl Projectile {
    #[inline]
    pub fn live(&self) -> bool {
        !self.marked && self.life > 0
    }

    #[inline]
    pub fn has_hit(&self, id: EnemyId) -> bool {
        self.hit_list.contains(&id)
    }
}
