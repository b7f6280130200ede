//! Affix definitions: closed kind enumeration, per-slot candidate pools,
//! weighted selection without replacement, and the tier roll.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Affix, ItemSlot};

/// Per-tier-index roll weights, skewed toward low tiers. Index 0 is tier 1.
const TIER_WEIGHTS: [f32; 5] = [42.0, 28.0, 16.0, 9.0, 5.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffixKind {
    AllStats,
    FlatDamage,
    PercentDamage,
    CritChance,
    CooldownReduction,
    MaxLife,
    Armor,
    MoveSpeed,
    PickupRange,
    GoldGain,
    XpGain,
    HealPower,
    Luck,
    AreaSize,
    DurationBonus,
}

impl AffixKind {
    /// Selection weight within a candidate pool.
    pub const fn weight(self) -> f32 {
        match self {
            Self::AllStats => 4.0,
            Self::FlatDamage => 12.0,
            Self::PercentDamage => 9.0,
            Self::CritChance => 7.0,
            Self::CooldownReduction => 6.0,
            Self::MaxLife => 12.0,
            Self::Armor => 10.0,
            Self::MoveSpeed => 7.0,
            Self::PickupRange => 8.0,
            Self::GoldGain => 8.0,
            Self::XpGain => 8.0,
            Self::HealPower => 6.0,
            Self::Luck => 5.0,
            Self::AreaSize => 6.0,
            Self::DurationBonus => 6.0,
        }
    }

    pub const fn is_percent(self) -> bool {
        !matches!(self, Self::FlatDamage | Self::MaxLife | Self::Armor)
    }

    /// Rolled value per tier (index 0 is tier 1). Percent kinds are in
    /// percentage points; flat kinds in raw stat units.
    pub const fn tier_values(self) -> [f32; 5] {
        match self {
            Self::AllStats => [1.0, 2.0, 3.0, 4.0, 6.0],
            Self::FlatDamage => [2.0, 4.0, 7.0, 11.0, 16.0],
            Self::PercentDamage => [4.0, 8.0, 13.0, 19.0, 26.0],
            Self::CritChance => [2.0, 4.0, 6.0, 9.0, 13.0],
            Self::CooldownReduction => [3.0, 6.0, 9.0, 13.0, 18.0],
            Self::MaxLife => [10.0, 22.0, 38.0, 58.0, 85.0],
            Self::Armor => [4.0, 9.0, 15.0, 23.0, 34.0],
            Self::MoveSpeed => [3.0, 5.0, 8.0, 11.0, 15.0],
            Self::PickupRange => [6.0, 12.0, 20.0, 30.0, 45.0],
            Self::GoldGain => [5.0, 10.0, 17.0, 26.0, 38.0],
            Self::XpGain => [5.0, 10.0, 17.0, 26.0, 38.0],
            Self::HealPower => [6.0, 12.0, 20.0, 30.0, 44.0],
            Self::Luck => [3.0, 7.0, 12.0, 18.0, 27.0],
            Self::AreaSize => [4.0, 8.0, 14.0, 21.0, 30.0],
            Self::DurationBonus => [4.0, 8.0, 14.0, 21.0, 30.0],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AllStats => "to All Stats",
            Self::FlatDamage => "Damage",
            Self::PercentDamage => "Increased Damage",
            Self::CritChance => "Critical Chance",
            Self::CooldownReduction => "Cooldown Reduction",
            Self::MaxLife => "Maximum Life",
            Self::Armor => "Armor",
            Self::MoveSpeed => "Movement Speed",
            Self::PickupRange => "Pickup Radius",
            Self::GoldGain => "Gold Find",
            Self::XpGain => "Experience Gain",
            Self::HealPower => "Healing Power",
            Self::Luck => "Luck",
            Self::AreaSize => "Effect Area",
            Self::DurationBonus => "Effect Duration",
        }
    }
}

/// Candidate pool for an equipment slot: the slot-specific kinds plus the
/// universal pool (currently just AllStats, available everywhere).
pub fn candidate_pool(slot: ItemSlot) -> Vec<AffixKind> {
    use AffixKind::*;
    let slot_pool: &[AffixKind] = match slot {
        ItemSlot::Weapon => &[FlatDamage, PercentDamage, CritChance, CooldownReduction],
        ItemSlot::Helm => &[MaxLife, Armor, XpGain, PickupRange],
        ItemSlot::Armor => &[MaxLife, Armor, MoveSpeed, HealPower],
        ItemSlot::Accessory => &[Luck, GoldGain, CritChance, PickupRange, MoveSpeed],
        ItemSlot::Relic => &[AreaSize, DurationBonus, CooldownReduction, Luck],
    };
    let mut pool = vec![AffixKind::AllStats];
    pool.extend_from_slice(slot_pool);
    pool
}

/// Tier roll over `min_tier..=5` with the fixed low-skewed weight table.
pub fn roll_tier(min_tier: u8, rng: &mut impl Rng) -> u8 {
    let min = min_tier.clamp(1, 5) as usize;
    let eligible = &TIER_WEIGHTS[min - 1..];
    let total: f32 = eligible.iter().sum();
    let mut pick = rng.random::<f32>() * total;
    for (i, w) in eligible.iter().enumerate() {
        if pick < *w {
            return (min + i) as u8;
        }
        pick -= w;
    }
    5
}

/// Roll `count` affixes for `slot` by repeated weighted draws from the
/// candidate pool, removing each chosen definition. Removal is what
/// guarantees no duplicate kinds on one item; if the pool runs dry the item
/// simply ends up with fewer affixes.
pub fn roll_affixes(slot: ItemSlot, count: u8, min_tier: u8, rng: &mut impl Rng) -> Vec<Affix> {
    let mut pool = candidate_pool(slot);
    let mut out = Vec::with_capacity(count as usize);
    while out.len() < count as usize && !pool.is_empty() {
        let total: f32 = pool.iter().map(|k| k.weight()).sum();
        let mut pick = rng.random::<f32>() * total;
        let mut chosen = pool.len() - 1;
        for (i, k) in pool.iter().enumerate() {
            if pick < k.weight() {
                chosen = i;
                break;
            }
            pick -= k.weight();
        }
        let kind = pool.remove(chosen);
        let tier = roll_tier(min_tier, rng);
        out.push(Affix {
            kind,
            tier,
            value: kind.tier_values()[tier as usize - 1],
            is_percent: kind.is_percent(),
        });
    }
    out
}
