//! Levelling and point allocation.
//!
//! Xp is granted in arbitrary chunks; levelling is iterative so one grant can
//! cascade through multiple level-ups, emitting one event per level gained.

use super::{Character, CharacterError};
use crate::config::GameConfig;
use crate::stats::Attribute;

/// Progression notifications returned from mutating operations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressEvent {
    XpGained { amount: i64 },
    LeveledUp { level: u32 },
    CoinsGained { amount: i64 },
}

/// Xp needed to advance past the given level.
///
/// `floor(100 * 1.1^level)`, strictly increasing in the level.
pub fn xp_required(level: u32) -> i64 {
    (GameConfig::XP_BASE * GameConfig::XP_GROWTH.powi(level as i32)).floor() as i64
}

impl Character {
    /// Grant xp and resolve any resulting level-ups.
    ///
    /// Supports multi-level-up in one call: the loop keeps consuming the
    /// requirement until the remaining xp no longer covers the next level.
    pub fn gain_xp(&mut self, amount: i64) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        if amount <= 0 {
            return events;
        }

        self.xp += amount;
        self.total_xp += amount;
        events.push(ProgressEvent::XpGained { amount });

        while self.xp >= xp_required(self.level) {
            self.xp -= xp_required(self.level);
            self.level += 1;
            self.stat_points += GameConfig::LEVEL_UP_STAT_POINTS;
            self.total_stat_points += GameConfig::LEVEL_UP_STAT_POINTS;
            events.push(ProgressEvent::LeveledUp { level: self.level });
        }

        events
    }

    /// Grant coins. Negative amounts are ignored.
    pub fn gain_coins(&mut self, amount: i64) -> Option<ProgressEvent> {
        if amount <= 0 {
            return None;
        }
        self.coins += amount;
        Some(ProgressEvent::CoinsGained { amount })
    }

    /// Move unspent stat points into an attribute.
    pub fn distribute_points(
        &mut self,
        attribute: Attribute,
        amount: u32,
    ) -> Result<(), CharacterError> {
        if self.stat_points < amount {
            return Err(CharacterError::InsufficientStatPoints {
                have: self.stat_points,
                need: amount,
            });
        }
        self.stat_points -= amount;
        self.bonus.add(attribute, amount as i32);
        Ok(())
    }

    /// Coin cost of the next inventory slot. Doubles with each purchase.
    pub fn next_capacity_cost(&self) -> i64 {
        GameConfig::CAPACITY_BASE_COST << self.capacity_purchases.min(32)
    }

    /// Buy one more inventory slot.
    pub fn purchase_capacity_slot(&mut self) -> Result<(), CharacterError> {
        let cost = self.next_capacity_cost();
        if self.coins < cost {
            return Err(CharacterError::InsufficientCoins {
                have: self.coins,
                need: cost,
            });
        }
        self.coins -= cost;
        self.capacity_purchases += 1;
        self.max_inventory_slots += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ObjectId;

    #[test]
    fn xp_requirement_is_strictly_increasing() {
        for level in 1..60 {
            assert!(xp_required(level + 1) > xp_required(level));
        }
    }

    #[test]
    fn xp_requirement_matches_curve() {
        assert_eq!(xp_required(1), 110);
        assert_eq!(xp_required(2), 121);
        assert_eq!(xp_required(3), 133);
    }

    #[test]
    fn single_level_up() {
        let mut hero = Character::new(ObjectId(1), "Hero");
        let events = hero.gain_xp(xp_required(1));
        assert_eq!(hero.level, 2);
        assert_eq!(hero.xp, 0);
        assert_eq!(hero.stat_points, 3);
        assert!(events.contains(&ProgressEvent::LeveledUp { level: 2 }));
    }

    #[test]
    fn double_level_up_in_one_grant() {
        let mut hero = Character::new(ObjectId(1), "Hero");
        let events = hero.gain_xp(xp_required(1) + xp_required(2));
        assert_eq!(hero.level, 3);
        assert_eq!(hero.xp, 0);
        assert_eq!(hero.stat_points, 6);
        let level_ups = events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::LeveledUp { .. }))
            .count();
        assert_eq!(level_ups, 2);
    }

    #[test]
    fn distribute_points_rejects_overdraw() {
        let mut hero = Character::new(ObjectId(1), "Hero");
        hero.stat_points = 2;
        let err = hero.distribute_points(Attribute::Strength, 3);
        assert_eq!(
            err,
            Err(CharacterError::InsufficientStatPoints { have: 2, need: 3 })
        );
        assert_eq!(hero.stat_points, 2);

        hero.distribute_points(Attribute::Strength, 2).unwrap();
        assert_eq!(hero.bonus.strength, 2);
        assert_eq!(hero.stat_points, 0);
    }

    #[test]
    fn capacity_cost_doubles() {
        let mut hero = Character::new(ObjectId(1), "Hero");
        hero.coins = 1_000;
        assert_eq!(hero.next_capacity_cost(), 50);
        hero.purchase_capacity_slot().unwrap();
        assert_eq!(hero.max_inventory_slots, 11);
        assert_eq!(hero.next_capacity_cost(), 100);
        hero.purchase_capacity_slot().unwrap();
        assert_eq!(hero.coins, 1_000 - 50 - 100);
    }

    #[test]
    fn capacity_purchase_rejects_when_broke() {
        let mut hero = Character::new(ObjectId(1), "Hero");
        hero.coins = 10;
        assert!(hero.purchase_capacity_slot().is_err());
        assert_eq!(hero.max_inventory_slots, 10);
        assert_eq!(hero.coins, 10);
    }
}
