//! Ultimate abilities: per-kind configuration, the damage-immunity
//! predicate, and trigger side effects.

use glam::Vec2;
use serde::Serialize;

use crate::actor::{ProjectileId, WeaponId};
use crate::events::SimEvent;
use crate::projectile::Projectile;
use crate::{stats, RunState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UltimateKind {
    /// Damage-immunity and double cooldown rate for the duration.
    Bulwark,
    /// Instant radial burst of arc projectiles.
    ArcStorm,
    /// World time-freeze: spawning, enemy motion, and enemy fire stop.
    Stasis,
    /// Instant heal for half of max hp, scaled by healing power.
    Mend,
}

#[derive(Debug, Clone, Copy)]
pub struct UltimateSpec {
    /// Active window in ticks; zero for instant effects.
    pub duration: u32,
    pub text: &'static str,
    pub color: &'static str,
}

impl UltimateKind {
    pub const fn spec(self) -> UltimateSpec {
        match self {
            Self::Bulwark => UltimateSpec {
                duration: 180,
                text: "BULWARK!",
                color: "#66d9ff",
            },
            Self::ArcStorm => UltimateSpec {
                duration: 0,
                text: "ARC STORM!",
                color: "#ffd166",
            },
            Self::Stasis => UltimateSpec {
                duration: 300,
                text: "STASIS!",
                color: "#b39ddb",
            },
            Self::Mend => UltimateSpec {
                duration: 0,
                text: "MEND!",
                color: "#7bd88f",
            },
        }
    }
}

/// True only while an immunity-granting ultimate window is active.
#[inline]
pub fn damage_immune(ultimate: UltimateKind, ult_active: u32) -> bool {
    matches!(ultimate, UltimateKind::Bulwark) && ult_active > 0
}

/// Cooldown ticks consumed per simulation tick (2 while Bulwark runs).
#[inline]
pub fn cooldown_rate(ultimate: UltimateKind, ult_active: u32) -> u32 {
    if matches!(ultimate, UltimateKind::Bulwark) && ult_active > 0 {
        2
    } else {
        1
    }
}

const ARC_COUNT: u32 = 12;

/// Fire the player's ultimate if charged: zero the charge, apply the
/// kind-specific side effect, and emit a status text event for the UI.
pub fn trigger(state: &mut RunState) {
    let kind = state.player.ultimate;
    let spec = kind.spec();
    state.player.ult_charge = 0.0;
    let duration = stats::effective_duration(spec.duration.max(1), state.player.stats.duration_bonus);
    match kind {
        UltimateKind::Bulwark => {
            state.player.ult_active = duration;
        }
        UltimateKind::ArcStorm => {
            let dmg = (40.0 * state.player.stats.dmg_mult).round() as i32;
            let origin = state.player.pos;
            for i in 0..ARC_COUNT {
                let angle = (i as f32) / (ARC_COUNT as f32) * std::f32::consts::TAU;
                let dir = Vec2::from_angle(angle);
                let id = state.alloc_projectile_id();
                state.projectiles.push(Projectile {
                    id: ProjectileId(id),
                    weapon: WeaponId::ULTIMATE,
                    pos: origin,
                    prev_pos: origin,
                    vel: dir * 5.0,
                    dmg,
                    pierce: 3,
                    radius: 8.0,
                    hit_list: Vec::new(),
                    crit: false,
                    hostile: false,
                    explode_radius: 0.0,
                    knockback: 0.0,
                    homing: false,
                    life: 90,
                    age: 0,
                    marked: false,
                });
            }
        }
        UltimateKind::Stasis => {
            state.time_frozen = duration;
        }
        UltimateKind::Mend => {
            let heal = stats::heal_amount(state.player.max_hp / 2, state.player.stats.heal_mult);
            state.player.hp = (state.player.hp + heal).min(state.player.max_hp);
        }
    }
    log::debug!("ultimate triggered: {:?}", kind);
    metrics::counter!("sim.ultimates_total").increment(1);
    state.events.push(SimEvent::StatusText {
        text: spec.text.to_string(),
        color: spec.color,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bulwark_grants_immunity_and_only_while_active() {
        assert!(damage_immune(UltimateKind::Bulwark, 1));
        assert!(!damage_immune(UltimateKind::Bulwark, 0));
        assert!(!damage_immune(UltimateKind::Stasis, 100));
        assert!(!damage_immune(UltimateKind::Mend, 100));
        assert!(!damage_immune(UltimateKind::ArcStorm, 100));
    }
}
