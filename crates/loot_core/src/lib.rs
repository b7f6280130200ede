//! Procedural equipment generation: luck-weighted rarity roll, duplicate-free
//! affix selection, rarity-floored tier roll, and name/id synthesis.
//!
//! The generator never touches an ambient RNG; every entry point takes
//! `&mut impl Rng` so a seeded source reproduces identical items.

use anyhow::{bail, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod affix;
pub mod naming;
pub mod rarity;

pub use affix::AffixKind;
pub use rarity::{apply_boost, roll_rarity, Rarity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSlot {
    Weapon,
    Helm,
    Armor,
    Accessory,
    Relic,
}

/// Character class identity; relics are class-bound and carry a class
/// implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassId {
    Vanguard,
    Arcanist,
    Warden,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affix {
    pub kind: AffixKind,
    pub tier: u8,
    pub value: f32,
    pub is_percent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub slot: ItemSlot,
    pub rarity: Rarity,
    /// Highest affix tier on the item.
    pub tier: u8,
    pub affixes: Vec<Affix>,
    pub implicits: Vec<Affix>,
}

#[derive(Debug, Clone, Copy)]
pub struct GenRequest {
    pub slot: ItemSlot,
    pub luck: f32,
    pub rarity_boost: u8,
    /// Required when `slot` is `Relic`.
    pub class: Option<ClassId>,
}

impl GenRequest {
    pub fn new(slot: ItemSlot, luck: f32) -> Self {
        Self {
            slot,
            luck,
            rarity_boost: 0,
            class: None,
        }
    }
}

fn class_implicit(class: ClassId) -> Affix {
    let kind = match class {
        ClassId::Vanguard => AffixKind::Armor,
        ClassId::Arcanist => AffixKind::AreaSize,
        ClassId::Warden => AffixKind::HealPower,
    };
    Affix {
        kind,
        tier: 3,
        value: kind.tier_values()[2],
        is_percent: kind.is_percent(),
    }
}

fn build(slot: ItemSlot, rarity: Rarity, class: Option<ClassId>, rng: &mut impl Rng) -> Item {
    let count = rarity::roll_affix_count(rarity, rng);
    let affixes = affix::roll_affixes(slot, count, rarity.min_tier(), rng);
    let tier = affixes.iter().map(|a| a.tier).max().unwrap_or(1);
    let implicits = match (slot, class) {
        (ItemSlot::Relic, Some(c)) => vec![class_implicit(c)],
        _ => Vec::new(),
    };
    Item {
        id: naming::compose_id(slot, rng),
        name: naming::compose_name(slot, rarity, rng),
        slot,
        rarity,
        tier,
        affixes,
        implicits,
    }
}

/// Generate an item: weighted rarity roll scaled by luck, post-hoc rarity
/// boost, duplicate-free affix selection, and a rarity-floored tier roll.
///
/// Fails fast when a relic is requested without a class identity; relics
/// are class-bound and the generic path must not guess one.
pub fn generate(req: &GenRequest, rng: &mut impl Rng) -> Result<Item> {
    if req.slot == ItemSlot::Relic && req.class.is_none() {
        bail!("relic generation requires a class identity");
    }
    let rolled = roll_rarity(req.luck, rng);
    let rarity = apply_boost(rolled, req.rarity_boost);
    Ok(build(req.slot, rarity, req.class, rng))
}

/// Corrupted generation mode. Not reachable from the weighted rarity roll:
/// callers opt in explicitly (altar/gamble flows). Density matches the
/// legendary affix-count table with the tier-2 floor.
pub fn generate_corrupted(
    slot: ItemSlot,
    class: Option<ClassId>,
    rng: &mut impl Rng,
) -> Result<Item> {
    if slot == ItemSlot::Relic && class.is_none() {
        bail!("relic generation requires a class identity");
    }
    Ok(build(slot, Rarity::Corrupted, class, rng))
}
