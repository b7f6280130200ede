//! Display-name synthesis and unique id nonces for generated items.

use rand::Rng;

use crate::{ItemSlot, Rarity};

const MAGIC_SUFFIXES: [&str; 6] = [
    "of Sparks",
    "of the Fox",
    "of Embers",
    "of Drift",
    "of the Current",
    "of Thorns",
];

const RARE_PREFIXES: [&str; 6] = ["Gleaming", "Vicious", "Stalwart", "Fleet", "Gilded", "Keen"];

const RARE_SUFFIXES: [&str; 6] = [
    "of the Tide",
    "of Ruin",
    "of the Depths",
    "of the Hunt",
    "of Storms",
    "of the Veil",
];

const LEGENDARY_PREFIXES: [&str; 5] = ["Sovereign", "Abyssal", "Radiant", "Dread", "Eternal"];

impl ItemSlot {
    pub const fn base_name(self) -> &'static str {
        match self {
            Self::Weapon => "Blade",
            Self::Helm => "Visor",
            Self::Armor => "Carapace",
            Self::Accessory => "Band",
            Self::Relic => "Idol",
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Weapon => "wpn",
            Self::Helm => "helm",
            Self::Armor => "armor",
            Self::Accessory => "acc",
            Self::Relic => "relic",
        }
    }
}

fn pick<'a>(pool: &'a [&'static str], rng: &mut impl Rng) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Compose a display name from rarity-appropriate prefix/suffix pools and
/// the slot's base name.
pub fn compose_name(slot: ItemSlot, rarity: Rarity, rng: &mut impl Rng) -> String {
    let base = slot.base_name();
    match rarity {
        Rarity::Common => base.to_string(),
        Rarity::Magic => format!("{} {}", base, pick(&MAGIC_SUFFIXES, rng)),
        Rarity::Rare => format!(
            "{} {} {}",
            pick(&RARE_PREFIXES, rng),
            base,
            pick(&RARE_SUFFIXES, rng)
        ),
        Rarity::Legendary => format!(
            "{} {} {}",
            pick(&LEGENDARY_PREFIXES, rng),
            base,
            pick(&RARE_SUFFIXES, rng)
        ),
        Rarity::Corrupted => format!("Corrupted {} {}", base, pick(&RARE_SUFFIXES, rng)),
    }
}

/// Unique item id: slot tag plus a random 64-bit nonce in hex.
pub fn compose_id(slot: ItemSlot, rng: &mut impl Rng) -> String {
    format!("{}-{:016x}", slot.tag(), rng.random::<u64>())
}
