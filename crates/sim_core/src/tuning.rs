//! Simulation tuning loaded from `data/config/sim.toml` with env overrides,
//! falling back to built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SimTuning {
    /// Side length of the square toroidal play field.
    pub world_side: f32,
    /// Distance from the player at which enemies materialize.
    pub spawn_distance: f32,
    /// Random jitter applied to the spawn point.
    pub spawn_jitter: f32,
    /// Contact damage fires on ticks where `tick % contact_period == 0`.
    pub contact_period: u64,
    /// Pickup despawn countdown in ticks.
    pub pickup_life: u32,
    /// Loot chance on kill: `(base + per_minute * minutes) * (1 + luck/100)`.
    pub loot_base: f32,
    pub loot_per_minute: f32,
    pub crit_mult: f32,
}

impl Default for SimTuning {
    fn default() -> Self {
        Self {
            world_side: 2048.0,
            spawn_distance: 600.0,
            spawn_jitter: 48.0,
            contact_period: 30,
            pickup_life: 1800,
            loot_base: 0.03,
            loot_per_minute: 0.002,
            crit_mult: 3.0,
        }
    }
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() {
        ws
    } else {
        here.join("data")
    }
}

impl SimTuning {
    pub fn load_default() -> Result<Self> {
        let path = data_root().join("config/sim.toml");
        let mut cfg = if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            toml::from_str::<SimTuning>(&txt).context("parse sim tuning TOML")?
        } else {
            Self::default()
        };
        if let Some(side) = std::env::var("SIM_WORLD_SIDE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            cfg.world_side = side;
        }
        Ok(cfg)
    }
}
