//! Rarity order, luck-scaled weighted roll, boost shift, and per-rarity tables.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Roll order for the standard weighted draw. `Corrupted` is deliberately
/// absent: corrupted items come only from the separate generation mode.
pub const ROLL_ORDER: [Rarity; 4] = [Rarity::Common, Rarity::Magic, Rarity::Rare, Rarity::Legendary];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Magic,
    Rare,
    Legendary,
    Corrupted,
}

impl Rarity {
    /// Base weight in the standard roll (before luck scaling).
    pub const fn base_weight(self) -> f32 {
        match self {
            Self::Common => 100.0,
            Self::Magic => 40.0,
            Self::Rare => 12.0,
            Self::Legendary => 2.0,
            Self::Corrupted => 0.0,
        }
    }

    /// Higher rarities get a larger luck factor, so luck skews the
    /// distribution upward rather than scaling it uniformly.
    pub const fn luck_factor(self) -> f32 {
        match self {
            Self::Common => 0.0,
            Self::Magic => 0.35,
            Self::Rare => 0.75,
            Self::Legendary => 1.5,
            Self::Corrupted => 0.0,
        }
    }

    /// Weighted options for how many affixes an item of this rarity rolls.
    pub fn affix_count_options(self) -> &'static [(u8, f32)] {
        match self {
            Self::Common => &[(1, 1.0)],
            Self::Magic => &[(2, 0.7), (3, 0.3)],
            Self::Rare => &[(3, 0.55), (4, 0.45)],
            // Corrupted borrows the legendary table (separate mode, same density).
            Self::Legendary | Self::Corrupted => &[(5, 0.8), (6, 0.2)],
        }
    }

    /// Minimum affix tier an item of this rarity may roll.
    pub const fn min_tier(self) -> u8 {
        match self {
            Self::Legendary | Self::Corrupted => 2,
            _ => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Magic => "Magic",
            Self::Rare => "Rare",
            Self::Legendary => "Legendary",
            Self::Corrupted => "Corrupted",
        }
    }
}

/// Weighted rarity draw over [`ROLL_ORDER`], with each weight scaled by
/// `1 + (luck/100) * luck_factor`.
pub fn roll_rarity(luck: f32, rng: &mut impl Rng) -> Rarity {
    let luck = luck.max(0.0);
    let weights: Vec<f32> = ROLL_ORDER
        .iter()
        .map(|r| r.base_weight() * (1.0 + (luck / 100.0) * r.luck_factor()))
        .collect();
    let total: f32 = weights.iter().sum();
    let mut pick = rng.random::<f32>() * total;
    for (r, w) in ROLL_ORDER.iter().zip(weights.iter()) {
        if pick < *w {
            return *r;
        }
        pick -= w;
    }
    Rarity::Legendary
}

/// Shift a rolled rarity upward by `steps` within the roll order, clamped at
/// the top. Corrupted is outside the order and passes through unchanged.
pub fn apply_boost(rarity: Rarity, steps: u8) -> Rarity {
    if rarity == Rarity::Corrupted {
        return rarity;
    }
    let idx = ROLL_ORDER
        .iter()
        .position(|r| *r == rarity)
        .unwrap_or(0)
        .saturating_add(steps as usize)
        .min(ROLL_ORDER.len() - 1);
    ROLL_ORDER[idx]
}

/// Weighted draw of how many affixes to roll for `rarity`.
pub fn roll_affix_count(rarity: Rarity, rng: &mut impl Rng) -> u8 {
    let options = rarity.affix_count_options();
    let total: f32 = options.iter().map(|(_, w)| w).sum();
    let mut pick = rng.random::<f32>() * total;
    for (count, w) in options {
        if pick < *w {
            return *count;
        }
        pick -= w;
    }
    options[options.len() - 1].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_zero_is_identity() {
        for r in ROLL_ORDER {
            assert_eq!(apply_boost(r, 0), r);
        }
    }

    #[test]
    fn boost_clamps_at_legendary() {
        assert_eq!(apply_boost(Rarity::Common, 2), Rarity::Rare);
        assert_eq!(apply_boost(Rarity::Rare, 5), Rarity::Legendary);
        assert_eq!(apply_boost(Rarity::Legendary, 1), Rarity::Legendary);
    }

    #[test]
    fn corrupted_is_not_in_the_roll_order() {
        assert!(!ROLL_ORDER.contains(&Rarity::Corrupted));
        assert_eq!(apply_boost(Rarity::Corrupted, 3), Rarity::Corrupted);
    }
}
