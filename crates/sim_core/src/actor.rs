//! Enemy and pickup state plus the id newtypes shared across systems.

use glam::Vec2;
use serde::Serialize;

use loot_core::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EnemyId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectileId(pub u32);

/// Identity of the firing weapon slot; the per-tick shared hit lists are
/// keyed by this so stacked shots from one weapon cannot multi-hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeaponId(pub u32);

impl WeaponId {
    /// Enemy-owned projectiles; they only collide with the player.
    pub const HOSTILE: WeaponId = WeaponId(u32::MAX);
    /// Ultimate bursts share one hit list like any other weapon group.
    pub const ULTIMATE: WeaponId = WeaponId(u32::MAX - 1);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnemyKind {
    Basic,
    Bat,
    Elite,
    Boss,
}

impl EnemyKind {
    pub const fn radius(self) -> f32 {
        match self {
            Self::Basic => 14.0,
            Self::Bat => 10.0,
            Self::Elite => 22.0,
            Self::Boss => 40.0,
        }
    }

    pub const fn base_hp(self) -> i32 {
        match self {
            Self::Basic => 20,
            Self::Bat => 10,
            Self::Elite => 160,
            Self::Boss => 1200,
        }
    }

    /// Movement speed in units per tick.
    pub const fn speed(self) -> f32 {
        match self {
            Self::Basic => 1.2,
            Self::Bat => 2.6,
            Self::Elite => 1.0,
            Self::Boss => 0.8,
        }
    }

    pub const fn contact_damage(self) -> f32 {
        match self {
            Self::Basic => 5.0,
            Self::Bat => 3.0,
            Self::Elite => 12.0,
            Self::Boss => 25.0,
        }
    }

    pub const fn gold(self) -> u64 {
        match self {
            Self::Basic => 2,
            Self::Bat => 1,
            Self::Elite => 12,
            Self::Boss => 120,
        }
    }

    /// Death-effect particle count scales with tier.
    pub const fn particles(self) -> u32 {
        match self {
            Self::Basic => 6,
            Self::Bat => 4,
            Self::Elite => 14,
            Self::Boss => 40,
        }
    }

    /// Ranged kinds fire a hostile projectile at the player on this
    /// per-enemy cooldown; melee-only kinds never fire.
    pub const fn fire_interval(self) -> Option<u32> {
        match self {
            Self::Elite => Some(120),
            Self::Boss => Some(90),
            _ => None,
        }
    }

    /// Rarity boost applied when this kind rolls a loot drop.
    pub const fn drop_boost(self) -> u8 {
        match self {
            Self::Elite => 1,
            Self::Boss => 2,
            _ => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Bat => "bat",
            Self::Elite => "elite",
            Self::Boss => "boss",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    pub radius: f32,
    pub speed: f32,
    /// Ticks until the next hostile shot, for ranged kinds.
    pub fire_cd: u32,
    /// Pending removal at end-of-tick cleanup.
    pub marked: bool,
}

impl Enemy {
    pub fn new(id: EnemyId, kind: EnemyKind, pos: Vec2, minutes: u64) -> Self {
        // Later minutes spawn tougher copies of the same kind.
        let hp = (kind.base_hp() as f32 * (1.0 + 0.15 * minutes as f32)).round() as i32;
        Self {
            id,
            kind,
            pos,
            prev_pos: pos,
            hp,
            max_hp: hp,
            radius: kind.radius(),
            speed: kind.speed(),
            fire_cd: kind.fire_interval().unwrap_or(0),
            marked: false,
        }
    }

    #[inline]
    pub fn alive(&self) -> bool {
        self.hp > 0 && !self.marked
    }
}

#[derive(Debug, Clone)]
pub enum PickupKind {
    Xp(u32),
    Heal(i32),
    /// Opens into an item orb on collection.
    Chest,
    /// A generated item waiting to be picked up.
    Orb(Item),
}

#[derive(Debug, Clone)]
pub struct Pickup {
    pub pos: Vec2,
    pub kind: PickupKind,
    /// Despawn countdown in ticks.
    pub life: u32,
    pub marked: bool,
}
