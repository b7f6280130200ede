//! Weapon archetypes as a closed enumeration with per-kind specs.
//!
//! Adding a weapon means adding a variant and filling in every exhaustive
//! match; there is no string-keyed table to fall through.

use serde::Serialize;

use crate::actor::WeaponId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeaponKind {
    /// Single homing shot at the nearest enemy; explodes on impact and on
    /// expiry with pierce left.
    SeekerDart,
    /// Area aura pulsing around the player.
    PulseField,
    /// Five-shot cone spread along the aim direction.
    FanSpray,
    /// Heavy shot toward the nearest enemy with knockback.
    Cleaver,
}

#[derive(Debug, Clone, Copy)]
pub struct WeaponSpec {
    pub base_dmg: f32,
    /// Cooldown in ticks between firings.
    pub cooldown: u32,
    pub speed: f32,
    pub radius: f32,
    pub pierce: i32,
    /// Projectile lifetime in ticks (before duration bonuses).
    pub life: u32,
    /// Aura radius; zero for non-aura kinds.
    pub area: f32,
    /// Explosion radius carried by spawned projectiles; zero disables.
    pub explode_radius: f32,
    pub knockback: f32,
    pub shots: u32,
    /// Total cone angle in radians for multi-shot kinds.
    pub spread: f32,
    pub homing: bool,
}

impl WeaponKind {
    pub const fn spec(self) -> WeaponSpec {
        match self {
            Self::SeekerDart => WeaponSpec {
                base_dmg: 10.0,
                cooldown: 36,
                speed: 7.0,
                radius: 6.0,
                pierce: 1,
                life: 180,
                area: 0.0,
                explode_radius: 36.0,
                knockback: 0.0,
                shots: 1,
                spread: 0.0,
                homing: true,
            },
            Self::PulseField => WeaponSpec {
                base_dmg: 6.0,
                cooldown: 48,
                speed: 0.0,
                radius: 0.0,
                pierce: 0,
                life: 0,
                area: 90.0,
                explode_radius: 0.0,
                knockback: 0.0,
                shots: 0,
                spread: 0.0,
                homing: false,
            },
            Self::FanSpray => WeaponSpec {
                base_dmg: 7.0,
                cooldown: 60,
                speed: 6.0,
                radius: 5.0,
                pierce: 2,
                life: 90,
                area: 0.0,
                explode_radius: 0.0,
                knockback: 0.0,
                shots: 5,
                spread: 0.6,
                homing: false,
            },
            Self::Cleaver => WeaponSpec {
                base_dmg: 18.0,
                cooldown: 90,
                speed: 5.0,
                radius: 18.0,
                pierce: 4,
                life: 70,
                area: 0.0,
                explode_radius: 0.0,
                knockback: 24.0,
                shots: 1,
                spread: 0.0,
                homing: false,
            },
        }
    }

    pub const fn is_aura(self) -> bool {
        matches!(self, Self::PulseField)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SeekerDart => "seeker_dart",
            Self::PulseField => "pulse_field",
            Self::FanSpray => "fan_spray",
            Self::Cleaver => "cleaver",
        }
    }
}

/// Runtime state of an equipped weapon slot.
#[derive(Debug, Clone)]
pub struct Weapon {
    pub id: WeaponId,
    pub kind: WeaponKind,
    pub level: u32,
    /// Ticks until the weapon may fire again.
    pub cur_cd: u32,
}

impl Weapon {
    pub fn new(id: WeaponId, kind: WeaponKind) -> Self {
        Self {
            id,
            kind,
            level: 1,
            cur_cd: 0,
        }
    }

    /// Per-level damage growth applied on top of the kind's base.
    #[inline]
    pub fn leveled_dmg(&self) -> f32 {
        self.kind.spec().base_dmg * (1.0 + 0.2 * (self.level.saturating_sub(1)) as f32)
    }
}
