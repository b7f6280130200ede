//! Death resolution: mark dead enemies, credit gold, award ultimate
//! charge, and drop pickups (xp, heals, chests, and rolled loot orbs).

use rand::Rng;

use loot_core::{GenRequest, ItemSlot};

use crate::actor::{EnemyKind, Pickup, PickupKind};
use crate::events::SimEvent;
use crate::{stats, RunState};

const SLOT_POOL: [ItemSlot; 5] = [
    ItemSlot::Weapon,
    ItemSlot::Helm,
    ItemSlot::Armor,
    ItemSlot::Accessory,
    ItemSlot::Relic,
];

fn xp_reward(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Basic => 3,
        EnemyKind::Bat => 2,
        EnemyKind::Elite => 15,
        EnemyKind::Boss => 100,
    }
}

fn ult_charge(kind: EnemyKind) -> f32 {
    match kind {
        EnemyKind::Basic => 2.0,
        EnemyKind::Bat => 1.5,
        EnemyKind::Elite => 8.0,
        EnemyKind::Boss => 25.0,
    }
}

pub fn resolve(state: &mut RunState) {
    let pickup_life = state.tuning.pickup_life;
    let tick = state.tick;
    let minutes = tick / 3600;
    let luck = state.player.stats.luck;
    let class = state.player.class;
    let drop_chance =
        (state.tuning.loot_base + state.tuning.loot_per_minute * minutes as f32)
            * (1.0 + luck / 100.0);
    let mut drops: Vec<Pickup> = Vec::new();
    let RunState {
        enemies,
        rng,
        events,
        player,
        kills,
        boss_kills,
        gold,
        force_drops,
        ..
    } = state;
    for e in enemies.iter_mut().filter(|e| !e.marked && e.hp <= 0) {
        e.marked = true;
        *kills += 1;
        if e.kind == EnemyKind::Boss {
            *boss_kills += 1;
            log::info!("boss down at tick {tick}");
        }
        metrics::counter!("sim.kills_total", "kind" => e.kind.name()).increment(1);
        player.ult_charge = (player.ult_charge + ult_charge(e.kind)).min(player.ult_max);
        // Gold is credited at the kill itself; pickups only carry xp and
        // item drops, so an expired drop never voids the bounty.
        let bounty = stats::gold_gain(e.kind.gold(), player.stats.gold_mult);
        *gold += bounty;
        events.push(SimEvent::GoldGained { amount: bounty });
        events.push(SimEvent::Particles {
            pos: e.pos.into(),
            count: e.kind.particles(),
        });
        drops.push(Pickup {
            pos: e.pos,
            kind: PickupKind::Xp(xp_reward(e.kind)),
            life: pickup_life,
            marked: false,
        });
        if e.kind == EnemyKind::Bat && rng.random::<f32>() < 0.05 {
            drops.push(Pickup {
                pos: e.pos,
                kind: PickupKind::Heal(10),
                life: pickup_life,
                marked: false,
            });
        }
        if e.kind == EnemyKind::Elite && rng.random::<f32>() < 0.25 {
            drops.push(Pickup {
                pos: e.pos,
                kind: PickupKind::Chest,
                life: pickup_life,
                marked: false,
            });
        }
        let rolled = e.kind == EnemyKind::Boss
            || *force_drops
            || rng.random::<f32>() < drop_chance;
        if rolled {
            let slot = SLOT_POOL[rng.random_range(0..SLOT_POOL.len())];
            let req = GenRequest {
                slot,
                luck,
                rarity_boost: e.kind.drop_boost(),
                class: Some(class),
            };
            match loot_core::generate(&req, rng) {
                Ok(item) => drops.push(Pickup {
                    pos: e.pos,
                    kind: PickupKind::Orb(item),
                    life: pickup_life,
                    marked: false,
                }),
                Err(err) => log::warn!("loot roll failed: {err:#}"),
            }
        }
    }
    state.pickups.extend(drops);
}
