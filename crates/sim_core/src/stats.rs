//! Pure numeric modifier pipeline consumed by the combat systems.
//!
//! Every function here is total and side-effect free; the combat resolver
//! composes them rather than re-deriving formulas inline.

/// Armor damage reduction: `armor/(armor+100)` fraction removed, so 100
/// armor halves incoming damage. Never reduces a positive hit to zero.
#[inline]
pub fn armor_reduce(dmg: f32, armor: f32) -> f32 {
    let armor = armor.max(0.0);
    let out = dmg * (1.0 - armor / (armor + 100.0));
    if dmg > 0.0 { out.max(1.0) } else { 0.0 }
}

/// Effective radius for area effects: flat bonus first, then the percent
/// multiplier.
#[inline]
pub fn effective_area(base: f32, area_flat: f32, area_pct: f32) -> f32 {
    ((base + area_flat) * (1.0 + area_pct / 100.0)).max(0.0)
}

/// Effect duration in ticks scaled by the duration bonus (percent points).
#[inline]
pub fn effective_duration(base_ticks: u32, duration_bonus: f32) -> u32 {
    ((base_ticks as f32) * (1.0 + duration_bonus / 100.0)).round().max(1.0) as u32
}

/// Weapon cooldown in ticks after cooldown reduction, clamped to 60%.
/// Never drops below one tick.
#[inline]
pub fn weapon_cooldown(base_ticks: u32, cdr_pct: f32) -> u32 {
    let cdr = cdr_pct.clamp(0.0, 60.0);
    (((base_ticks as f32) * (1.0 - cdr / 100.0)).round() as u32).max(1)
}

#[inline]
pub fn gold_gain(base: u64, gold_mult: f32) -> u64 {
    ((base as f32) * gold_mult.max(0.0)).round() as u64
}

#[inline]
pub fn xp_gain(base: u32, xp_mult: f32) -> u32 {
    ((base as f32) * xp_mult.max(0.0)).round() as u32
}

#[inline]
pub fn heal_amount(base: i32, heal_mult: f32) -> i32 {
    ((base as f32) * heal_mult.max(0.0)).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_reduction_halves_at_100() {
        assert!((armor_reduce(40.0, 100.0) - 20.0).abs() < 1e-4);
        assert!((armor_reduce(40.0, 0.0) - 40.0).abs() < 1e-4);
        // Negative armor is treated as zero, not amplification.
        assert!((armor_reduce(40.0, -50.0) - 40.0).abs() < 1e-4);
    }

    #[test]
    fn positive_hits_always_land_at_least_one() {
        assert!(armor_reduce(1.0, 10_000.0) >= 1.0);
    }

    #[test]
    fn area_applies_flat_before_percent() {
        assert!((effective_area(90.0, 10.0, 50.0) - 150.0).abs() < 1e-3);
    }

    #[test]
    fn duration_never_rounds_to_zero() {
        assert_eq!(effective_duration(1, -99.0), 1);
        assert_eq!(effective_duration(60, 50.0), 90);
    }

    #[test]
    fn cooldown_reduction_caps_at_sixty_percent() {
        assert_eq!(weapon_cooldown(100, 50.0), 50);
        assert_eq!(weapon_cooldown(100, 95.0), 40);
        assert_eq!(weapon_cooldown(1, 60.0), 1);
    }
}
