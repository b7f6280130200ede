//! Deterministic survival-combat simulation core.
//!
//! The engine is a fixed-timestep loop over a single [`RunState`]: the
//! external scheduler feeds wall-clock timestamps to a [`frame::FrameClock`],
//! which runs zero or more logical ticks of [`RunState::step`]. All
//! randomness flows through the state's seeded RNG, so a given seed and
//! input sequence replays identically.

pub mod actor;
pub mod events;
pub mod frame;
pub mod input;
pub mod player;
pub mod projectile;
pub mod schedule;
pub mod snapshot;
pub mod stats;
pub mod systems;
pub mod telemetry;
pub mod torus;
pub mod tuning;
pub mod ultimate;
pub mod weapons;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use loot_core::Item;

use crate::actor::{Enemy, Pickup};
use crate::events::SimEvent;
use crate::input::InputSnapshot;
use crate::player::{CharacterTemplate, Player};
use crate::projectile::Projectile;
use crate::schedule::{Ctx, Schedule};
use crate::tuning::SimTuning;

/// Final stats handed to the persistence collaborator at run end.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub kills: u32,
    pub boss_kills: u32,
    pub gold: u64,
    pub level: u32,
    /// False when the run ended by extraction rather than death.
    pub died: bool,
}

/// Authoritative state of one run. Systems mutate it in the fixed order
/// defined by [`schedule::Schedule`]; nothing outside a tick touches it.
pub struct RunState {
    pub tuning: SimTuning,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub pickups: Vec<Pickup>,
    /// Ticks elapsed since run start.
    pub tick: u64,
    pub kills: u32,
    pub boss_kills: u32,
    pub gold: u64,
    /// Remaining stasis ticks; spawning, enemy motion, and enemy fire stop
    /// while positive.
    pub time_frozen: u32,
    pub game_over: bool,
    /// Debug switch: every kill rolls loot regardless of drop chance.
    pub force_drops: bool,
    /// Events queued this tick for the embedding layer to drain.
    pub events: Vec<SimEvent>,
    pub rng: ChaCha8Rng,
    next_enemy_id: u32,
    next_projectile_id: u32,
}

impl RunState {
    pub fn new(
        tuning: SimTuning,
        template: &CharacterTemplate,
        equipped: &[Item],
        seed: u64,
    ) -> Self {
        let spawn = Vec2::splat(tuning.world_side * 0.5);
        Self {
            tuning,
            player: Player::from_template(template, equipped, spawn),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            pickups: Vec::new(),
            tick: 0,
            kills: 0,
            boss_kills: 0,
            gold: 0,
            time_frozen: 0,
            game_over: false,
            force_drops: false,
            events: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_enemy_id: 0,
            next_projectile_id: 0,
        }
    }

    #[inline]
    pub fn alloc_enemy_id(&mut self) -> u32 {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        id
    }

    #[inline]
    pub fn alloc_projectile_id(&mut self) -> u32 {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        id
    }

    /// Position of the nearest live enemy, wrap-aware.
    pub fn nearest_enemy(&self, from: Vec2) -> Option<Vec2> {
        let side = self.tuning.world_side;
        self.enemies
            .iter()
            .filter(|e| e.alive())
            .min_by(|a, b| {
                torus::dist(from, a.pos, side).total_cmp(&torus::dist(from, b.pos, side))
            })
            .map(|e| e.pos)
    }

    /// Apply armor-reduced damage to the player and surface the hit.
    /// Callers gate on the immunity predicate first.
    pub fn damage_player(&mut self, raw: i32) {
        let dealt = stats::armor_reduce(raw as f32, self.player.armor).round() as i32;
        self.player.hp -= dealt;
        self.events.push(SimEvent::DamageNumber {
            pos: self.player.pos.into(),
            amount: dealt,
            crit: false,
            hostile: true,
        });
        if self.player.hp <= 0 && !self.game_over {
            self.game_over = true;
            log::info!("run over at tick {} with {} kills", self.tick, self.kills);
            self.events.push(SimEvent::GameOver { tick: self.tick });
        }
    }

    /// Record current positions as previous, for render interpolation.
    fn capture_prev(&mut self) {
        self.player.prev_pos = self.player.pos;
        for e in &mut self.enemies {
            e.prev_pos = e.pos;
        }
        for p in &mut self.projectiles {
            p.prev_pos = p.pos;
        }
    }

    /// Run one logical tick. A finished run is inert: stepping it again is
    /// a no-op rather than an error.
    pub fn step(&mut self, input: &InputSnapshot) {
        if self.game_over {
            return;
        }
        let start = std::time::Instant::now();
        self.capture_prev();
        let mut ctx = Ctx::default();
        Schedule.run(self, &mut ctx, input);
        self.tick += 1;
        metrics::histogram!("sim.tick_ms").record(start.elapsed().as_secs_f64() * 1000.0);
    }

    /// Drain the events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.tick,
            kills: self.kills,
            boss_kills: self.boss_kills,
            gold: self.gold,
            level: self.player.level,
            died: !self.player.alive(),
        }
    }

    /// Voluntary extraction: ends the run alive with its stats intact.
    pub fn extract(&mut self) -> RunSummary {
        self.game_over = true;
        log::info!(
            "extracted at tick {} with {} kills and {} gold",
            self.tick,
            self.kills,
            self.gold
        );
        self.summary()
    }
}
