//! Pickup aging and collection: xp with level-ups, heals, chests that
//! open into item orbs, and the orbs themselves.

use rand::Rng;

use loot_core::{GenRequest, ItemSlot};

use crate::actor::{Pickup, PickupKind};
use crate::events::SimEvent;
use crate::{stats, torus, RunState};

/// Level curve: each level needs 35% more xp than the last.
const XP_GROWTH: f32 = 1.35;

pub fn collect(state: &mut RunState) {
    let side = state.tuning.world_side;
    let range = state.player.stats.pickup_range;
    let pickup_life = state.tuning.pickup_life;
    let player_pos = state.player.pos;
    let mut opened: Vec<Pickup> = Vec::new();
    let RunState {
        player,
        pickups,
        events,
        rng,
        ..
    } = state;
    for p in pickups.iter_mut().filter(|p| !p.marked) {
        p.life = p.life.saturating_sub(1);
        if p.life == 0 {
            p.marked = true;
            continue;
        }
        if torus::dist(p.pos, player_pos, side) > range {
            continue;
        }
        p.marked = true;
        match &p.kind {
            PickupKind::Xp(base) => {
                player.xp += stats::xp_gain(*base, player.stats.xp_mult) as u64;
                while player.xp >= player.xp_to_next {
                    player.xp -= player.xp_to_next;
                    player.level += 1;
                    player.xp_to_next =
                        ((player.xp_to_next as f32) * XP_GROWTH).round() as u64;
                    events.push(SimEvent::LevelUp {
                        level: player.level,
                    });
                }
            }
            PickupKind::Heal(base) => {
                let heal = stats::heal_amount(*base, player.stats.heal_mult);
                player.hp = (player.hp + heal).min(player.max_hp);
            }
            PickupKind::Chest => {
                // Chests never hold class relics; those only drop off kills.
                const CHEST_SLOTS: [ItemSlot; 4] = [
                    ItemSlot::Weapon,
                    ItemSlot::Helm,
                    ItemSlot::Armor,
                    ItemSlot::Accessory,
                ];
                let slot = CHEST_SLOTS[rng.random_range(0..CHEST_SLOTS.len())];
                let req = GenRequest {
                    slot,
                    luck: player.stats.luck,
                    rarity_boost: 1,
                    class: Some(player.class),
                };
                match loot_core::generate(&req, rng) {
                    Ok(item) => opened.push(Pickup {
                        pos: p.pos,
                        kind: PickupKind::Orb(item),
                        life: pickup_life,
                        marked: false,
                    }),
                    Err(err) => log::warn!("chest roll failed: {err:#}"),
                }
            }
            PickupKind::Orb(item) => {
                events.push(SimEvent::ItemCollected { item: item.clone() });
            }
        }
    }
    state.pickups.extend(opened);
}
