//! Derived stats.
//!
//! Effective combat values combine the stored stat block (already including
//! equipment) with bonus-point contributions. All functions here are pure
//! and idempotent: same inputs, same outputs, no mutation.
//!
//! Formulas:
//! - attack   = stats.attack   + Str/2
//! - defense  = stats.defense  + Str/2 + Int/2
//! - speed    = stats.speed    + Agi/2
//! - magic    = stats.magic    + Int/2
//! - max_hp   = stats.max_hp   + Str×5
//! - max_mana = stats.max_mana + Int×5
//! - mana gain on attack = 5 + Int/2
//! - crit chance = stats.crit_chance + Luc/3
//! - crit damage = stats.crit_damage + Luc

use super::bonus::BonusPoints;
use super::core::Stats;
use crate::config::GameConfig;

pub fn attack(stats: &Stats, bonus: &BonusPoints) -> i32 {
    stats.attack + bonus.strength / 2
}

pub fn defense(stats: &Stats, bonus: &BonusPoints) -> i32 {
    stats.defense + bonus.strength / 2 + bonus.intellect / 2
}

pub fn speed(stats: &Stats, bonus: &BonusPoints) -> i32 {
    stats.speed + bonus.agility / 2
}

pub fn magic(stats: &Stats, bonus: &BonusPoints) -> i32 {
    stats.magic + bonus.intellect / 2
}

pub fn max_hp(stats: &Stats, bonus: &BonusPoints) -> i32 {
    stats.max_hp + bonus.strength * 5
}

pub fn max_mana(stats: &Stats, bonus: &BonusPoints) -> i32 {
    stats.max_mana + bonus.intellect * 5
}

pub fn mana_gain(bonus: &BonusPoints) -> i32 {
    GameConfig::MANA_GAIN_BASE + bonus.intellect / 2
}

pub fn crit_chance(stats: &Stats, bonus: &BonusPoints) -> i32 {
    stats.crit_chance + bonus.luck / 3
}

pub fn crit_damage(stats: &Stats, bonus: &BonusPoints) -> i32 {
    stats.crit_damage + bonus.luck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Attribute;

    fn sample() -> (Stats, BonusPoints) {
        let stats = Stats::starting();
        let mut bonus = BonusPoints::default();
        bonus.add(Attribute::Strength, 6);
        bonus.add(Attribute::Intellect, 4);
        bonus.add(Attribute::Agility, 3);
        bonus.add(Attribute::Luck, 7);
        (stats, bonus)
    }

    #[test]
    fn formulas() {
        let (stats, bonus) = sample();
        assert_eq!(attack(&stats, &bonus), 10 + 3);
        assert_eq!(defense(&stats, &bonus), 5 + 3 + 2);
        assert_eq!(speed(&stats, &bonus), 20 + 1);
        assert_eq!(magic(&stats, &bonus), 15 + 2);
        assert_eq!(max_hp(&stats, &bonus), 100 + 30);
        assert_eq!(max_mana(&stats, &bonus), 50 + 20);
        assert_eq!(mana_gain(&bonus), 5 + 2);
        assert_eq!(crit_chance(&stats, &bonus), 5 + 2);
        assert_eq!(crit_damage(&stats, &bonus), 50 + 7);
    }

    #[test]
    fn idempotent() {
        let (stats, bonus) = sample();
        let first = attack(&stats, &bonus);
        for _ in 0..10 {
            assert_eq!(attack(&stats, &bonus), first);
        }
    }
}
