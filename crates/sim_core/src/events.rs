//! Discrete events emitted by the simulation for the UI and persistence
//! collaborators. Drained by the embedding layer after each tick; the core
//! never reads them back.

use loot_core::Item;

#[derive(Debug, Clone)]
pub enum SimEvent {
    DamageNumber {
        pos: [f32; 2],
        amount: i32,
        crit: bool,
        /// True when the player took the hit.
        hostile: bool,
    },
    StatusText {
        text: String,
        color: &'static str,
    },
    /// Cosmetic death-effect burst; count scales with enemy tier.
    Particles {
        pos: [f32; 2],
        count: u32,
    },
    GoldGained {
        amount: u64,
    },
    LevelUp {
        level: u32,
    },
    /// A generated item reached the player; persistence stores it.
    ItemCollected {
        item: Item,
    },
    GameOver {
        tick: u64,
    },
}
