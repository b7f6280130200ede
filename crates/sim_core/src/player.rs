//! Player state, character templates, and equipped-item stat aggregation.

use glam::Vec2;

use loot_core::{AffixKind, ClassId, Item};

use crate::actor::WeaponId;
use crate::ultimate::UltimateKind;
use crate::weapons::{Weapon, WeaponKind};

/// Stat multipliers and bonuses carried by the player. Multipliers start at
/// 1.0; percent-point bonuses start at 0.0.
#[derive(Debug, Clone, Copy)]
pub struct PlayerStats {
    /// Flat damage added to every weapon's base before multipliers.
    pub flat_damage: f32,
    pub dmg_mult: f32,
    /// Crit probability in [0,1].
    pub crit_chance: f32,
    /// Movement speed in units per tick.
    pub speed: f32,
    pub pickup_range: f32,
    pub gold_mult: f32,
    pub xp_mult: f32,
    pub heal_mult: f32,
    /// Percent points shaved off weapon cooldowns.
    pub cdr_pct: f32,
    /// Percent points added to effect durations.
    pub duration_bonus: f32,
    pub area_flat: f32,
    pub area_pct: f32,
    pub luck: f32,
}

/// Run-start template supplied by the persistence collaborator.
#[derive(Debug, Clone)]
pub struct CharacterTemplate {
    pub class: ClassId,
    pub max_hp: i32,
    pub armor: f32,
    pub speed: f32,
    pub crit_chance: f32,
    pub ultimate: UltimateKind,
    pub weapons: Vec<WeaponKind>,
}

impl Default for CharacterTemplate {
    fn default() -> Self {
        Self {
            class: ClassId::Vanguard,
            max_hp: 100,
            armor: 10.0,
            speed: 3.0,
            crit_chance: 0.05,
            ultimate: UltimateKind::Bulwark,
            weapons: vec![WeaponKind::SeekerDart],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub radius: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub armor: f32,
    pub class: ClassId,
    pub stats: PlayerStats,
    pub weapons: Vec<Weapon>,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next: u64,
    pub ultimate: UltimateKind,
    pub ult_charge: f32,
    pub ult_max: f32,
    /// Remaining ticks of the active ultimate window.
    pub ult_active: u32,
}

impl Player {
    /// Build the run-start player from a template plus equipped items,
    /// folding every affix into the matching stat. The match is exhaustive
    /// on purpose: a new affix kind without a mapping is a compile error.
    pub fn from_template(tpl: &CharacterTemplate, equipped: &[Item], spawn: Vec2) -> Self {
        let mut max_hp = tpl.max_hp as f32;
        let mut armor = tpl.armor;
        let mut stats = PlayerStats {
            flat_damage: 0.0,
            dmg_mult: 1.0,
            crit_chance: tpl.crit_chance,
            speed: tpl.speed,
            pickup_range: 60.0,
            gold_mult: 1.0,
            xp_mult: 1.0,
            heal_mult: 1.0,
            cdr_pct: 0.0,
            duration_bonus: 0.0,
            area_flat: 0.0,
            area_pct: 0.0,
            luck: 0.0,
        };
        for item in equipped {
            for a in item.affixes.iter().chain(item.implicits.iter()) {
                match a.kind {
                    AffixKind::AllStats => {
                        max_hp += a.value * 2.0;
                        armor += a.value;
                        stats.flat_damage += a.value * 0.5;
                    }
                    AffixKind::FlatDamage => stats.flat_damage += a.value,
                    AffixKind::PercentDamage => stats.dmg_mult += a.value / 100.0,
                    AffixKind::CritChance => stats.crit_chance += a.value / 100.0,
                    AffixKind::CooldownReduction => stats.cdr_pct += a.value,
                    AffixKind::MaxLife => max_hp += a.value,
                    AffixKind::Armor => armor += a.value,
                    AffixKind::MoveSpeed => stats.speed *= 1.0 + a.value / 100.0,
                    AffixKind::PickupRange => stats.pickup_range += a.value,
                    AffixKind::GoldGain => stats.gold_mult += a.value / 100.0,
                    AffixKind::XpGain => stats.xp_mult += a.value / 100.0,
                    AffixKind::HealPower => stats.heal_mult += a.value / 100.0,
                    AffixKind::Luck => stats.luck += a.value,
                    AffixKind::AreaSize => stats.area_pct += a.value,
                    AffixKind::DurationBonus => stats.duration_bonus += a.value,
                }
            }
        }
        let max_hp = max_hp.round() as i32;
        let weapons = tpl
            .weapons
            .iter()
            .enumerate()
            .map(|(i, k)| Weapon::new(WeaponId(i as u32), *k))
            .collect();
        Self {
            pos: spawn,
            prev_pos: spawn,
            radius: 16.0,
            hp: max_hp,
            max_hp,
            armor,
            class: tpl.class,
            stats,
            weapons,
            level: 1,
            xp: 0,
            xp_to_next: 20,
            ultimate: tpl.ultimate,
            ult_charge: 0.0,
            ult_max: 100.0,
            ult_active: 0,
        }
    }

    #[inline]
    pub fn alive(&self) -> bool {
        self.hp > 0
    }
}
