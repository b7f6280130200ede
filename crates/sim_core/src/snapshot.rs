//! Plain-data snapshots handed to the renderer once per frame, together
//! with the clock's interpolation alpha. The renderer never mutates
//! simulation state.

use serde::Serialize;

use crate::actor::{EnemyKind, PickupKind};
use crate::RunState;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerRep {
    pub pos: [f32; 2],
    pub prev_pos: [f32; 2],
    pub hp: i32,
    pub max_hp: i32,
    pub level: u32,
    pub ult_charge: f32,
    pub ult_max: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyRep {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: [f32; 2],
    pub prev_pos: [f32; 2],
    pub radius: f32,
    pub hp: i32,
    pub max_hp: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileRep {
    pub id: u32,
    pub pos: [f32; 2],
    pub prev_pos: [f32; 2],
    pub radius: f32,
    pub crit: bool,
    pub hostile: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PickupRep {
    pub pos: [f32; 2],
    pub tag: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TickSnapshot {
    pub tick: u64,
    pub kills: u32,
    pub gold: u64,
    pub player: PlayerRep,
    pub enemies: Vec<EnemyRep>,
    pub projectiles: Vec<ProjectileRep>,
    pub pickups: Vec<PickupRep>,
}

impl RunState {
    pub fn snapshot(&self) -> TickSnapshot {
        let p = &self.player;
        TickSnapshot {
            tick: self.tick,
            kills: self.kills,
            gold: self.gold,
            player: PlayerRep {
                pos: p.pos.into(),
                prev_pos: p.prev_pos.into(),
                hp: p.hp,
                max_hp: p.max_hp,
                level: p.level,
                ult_charge: p.ult_charge,
                ult_max: p.ult_max,
            },
            enemies: self
                .enemies
                .iter()
                .filter(|e| !e.marked)
                .map(|e| EnemyRep {
                    id: e.id.0,
                    kind: e.kind,
                    pos: e.pos.into(),
                    prev_pos: e.prev_pos.into(),
                    radius: e.radius,
                    hp: e.hp,
                    max_hp: e.max_hp,
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .filter(|p| p.live())
                .map(|p| ProjectileRep {
                    id: p.id.0,
                    pos: p.pos.into(),
                    prev_pos: p.prev_pos.into(),
                    radius: p.radius,
                    crit: p.crit,
                    hostile: p.hostile,
                })
                .collect(),
            pickups: self
                .pickups
                .iter()
                .filter(|k| !k.marked)
                .map(|k| PickupRep {
                    pos: k.pos.into(),
                    tag: match k.kind {
                        PickupKind::Xp(_) => "xp",
                        PickupKind::Heal(_) => "heal",
                        PickupKind::Chest => "chest",
                        PickupKind::Orb(_) => "orb",
                    },
                })
                .collect(),
        }
    }
}
