pub mod contact;
pub mod death;
pub mod enemies;
pub mod pickups;
pub mod projectiles;
pub mod spawn;
pub mod weapons;
