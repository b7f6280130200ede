//! Read-only input snapshot consumed once per tick.

use glam::Vec2;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Normalized movement direction (zero when idle).
    pub move_dir: Vec2,
    /// Aim angle in radians.
    pub aim: f32,
    /// Ultimate trigger edge for this tick.
    pub ultimate: bool,
}
