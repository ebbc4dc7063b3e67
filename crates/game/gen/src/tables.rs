//! Generation balance tables.
//!
//! Every weighted draw and scaling factor the generator uses, in one place.

use game_core::{DamageType, EffectKind, Rarity, StatKind};

/// Rarity distribution for random drops.
///
/// Legendary is deliberately absent: it only appears on authored content,
/// never random drops. The cumulative-sum draw falls back to common if
/// rounding leaves no match.
pub const RARITY_WEIGHTS: [(Rarity, f64); 5] = [
    (Rarity::Common, 0.50),
    (Rarity::Uncommon, 0.25),
    (Rarity::Rare, 0.15),
    (Rarity::Epic, 0.08),
    (Rarity::Mythic, 0.02),
];

/// Per-stat level scaling factor for rolled stat lines.
pub const fn stat_factor(kind: StatKind) -> f64 {
    match kind {
        StatKind::MaxHp => 5.0,
        StatKind::MaxMana => 2.0,
        StatKind::Attack => 2.0,
        StatKind::Defense => 2.0,
        StatKind::Speed => 0.25,
        StatKind::Magic => 2.0,
        StatKind::CritChance => 0.5,
        StatKind::CritDamage => 2.0,
    }
}

/// All rollable stat kinds, in table order.
pub const ROLLABLE_STATS: [StatKind; 8] = [
    StatKind::MaxHp,
    StatKind::MaxMana,
    StatKind::Attack,
    StatKind::Defense,
    StatKind::Speed,
    StatKind::Magic,
    StatKind::CritChance,
    StatKind::CritDamage,
];

/// Base value of a skill's direct effect before level scaling.
pub const fn effect_base(kind: EffectKind) -> i32 {
    match kind {
        EffectKind::Damage => 10,
        EffectKind::Heal => 15,
        EffectKind::Buff => 20,
        EffectKind::Debuff => 15,
    }
}

/// Base mana cost of a skill. Higher damage tiers cost more.
pub const fn mana_cost_base(kind: EffectKind, damage_type: DamageType) -> i32 {
    match kind {
        EffectKind::Damage => match damage_type {
            DamageType::Physical => 5,
            DamageType::Magical => 10,
            DamageType::True => 15,
        },
        EffectKind::Heal => 10,
        EffectKind::Buff => 8,
        EffectKind::Debuff => 12,
    }
}

/// Real cooldown in seconds. Higher damage tiers cool down longer.
pub const fn cooldown_s(kind: EffectKind, damage_type: DamageType) -> u32 {
    match kind {
        EffectKind::Damage => match damage_type {
            DamageType::Physical => 1,
            DamageType::Magical => 2,
            DamageType::True => 3,
        },
        EffectKind::Heal => 2,
        EffectKind::Buff => 3,
        EffectKind::Debuff => 2,
    }
}

/// Scheduler action cost: how far using the skill pushes the next turn.
pub const fn action_cost(kind: EffectKind, damage_type: DamageType) -> u32 {
    match kind {
        EffectKind::Damage => match damage_type {
            DamageType::Physical => 20,
            DamageType::Magical => 30,
            DamageType::True => 40,
        },
        EffectKind::Heal => 25,
        EffectKind::Buff => 15,
        EffectKind::Debuff => 20,
    }
}

/// Damage-over-time per-tick amount tiers, indexed by effect level.
pub const DOT_AMOUNTS: [i32; 5] = [3, 5, 7, 10, 20];

/// Heal-over-time per-tick amount tiers.
pub const HOT_AMOUNTS: [i32; 7] = [3, 5, 7, 10, 25, 50, 75];

/// Stat-buff amount tiers.
pub const BUFF_AMOUNTS: [i32; 11] = [10, 20, 30, 50, 70, 100, 150, 200, 500, 1000, 2500];

/// Stat-debuff amount tiers.
pub const DEBUFF_AMOUNTS: [i32; 7] = [5, 10, 25, 50, 75, 90, 99];

/// Tier index scaled by skill level: `clamp(ceil(level / divisor), 1, max)`.
pub fn tier_index(level: u32, divisor: u32, max: usize) -> usize {
    let tier = level.div_ceil(divisor).max(1) as usize;
    tier.min(max)
}

/// Chance that a generated skill carries a status effect, rising with level.
pub fn status_chance(level: u32) -> f64 {
    (0.3 + level as f64 * 0.02).min(0.8)
}

/// Stats a buff payload may raise.
pub const BUFFABLE_STATS: [StatKind; 6] = StatKind::DIRECT;

/// Stats a debuff payload may lower.
pub const DEBUFFABLE_STATS: [StatKind; 3] = [StatKind::Attack, StatKind::Defense, StatKind::Speed];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_weights_sum_to_one() {
        let total: f64 = RARITY_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn damage_tiers_are_monotonic() {
        use DamageType::*;
        let kind = EffectKind::Damage;
        assert!(mana_cost_base(kind, Physical) < mana_cost_base(kind, Magical));
        assert!(mana_cost_base(kind, Magical) < mana_cost_base(kind, True));
        assert!(cooldown_s(kind, Physical) < cooldown_s(kind, Magical));
        assert!(cooldown_s(kind, Magical) < cooldown_s(kind, True));
        assert!(action_cost(kind, Physical) < action_cost(kind, Magical));
        assert!(action_cost(kind, Magical) < action_cost(kind, True));
    }

    #[test]
    fn status_chance_bounds() {
        assert!((status_chance(1) - 0.32).abs() < 1e-9);
        assert_eq!(status_chance(100), 0.8);
    }

    #[test]
    fn tier_index_scales_and_caps() {
        assert_eq!(tier_index(1, 10, 5), 1);
        assert_eq!(tier_index(10, 10, 5), 1);
        assert_eq!(tier_index(11, 10, 5), 2);
        assert_eq!(tier_index(999, 10, 5), 5);
    }
}
