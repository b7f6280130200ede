//! Player/enemy contact damage on a global tick phase.

use crate::{torus, ultimate, RunState};

/// Apply contact damage from every overlapping enemy. Runs only on ticks
/// aligned to the global contact period, so overlap between pulses is
/// free; a damage-immune ultimate window swallows the whole pulse.
pub fn tick(state: &mut RunState) {
    if state.tick % state.tuning.contact_period != 0 {
        return;
    }
    if ultimate::damage_immune(state.player.ultimate, state.player.ult_active) {
        return;
    }
    let side = state.tuning.world_side;
    let mut total = 0.0f32;
    for e in state.enemies.iter().filter(|e| e.alive()) {
        if torus::dist(e.pos, state.player.pos, side) <= e.radius + state.player.radius {
            total += e.kind.contact_damage();
        }
    }
    if total > 0.0 {
        state.damage_player(total.round() as i32);
    }
}
