//! Equipping and unequipping gear.
//!
//! Equipping moves a piece out of the inventory into its slot and adds its
//! stat lines onto the character's additive `stats` block (not `base_stats`).
//! Unequipping reverses the addition exactly and reinserts the piece, subject
//! to inventory capacity. Because an item never carries the same stat kind
//! twice, reversal is plain subtraction.

use super::{Character, CharacterError, InventoryEntry};
use crate::item::{EquipSlot, Equipment, ObjectId};

impl Character {
    /// Equip a piece of gear from the inventory.
    ///
    /// If the slot is occupied the pieces swap: the old piece's stats are
    /// reversed and it returns to the inventory. Swapping keeps the inventory
    /// length constant, so it only fails when the inventory is already over
    /// capacity.
    pub fn equip(&mut self, id: ObjectId) -> Result<(), CharacterError> {
        let gear = match self.inventory_entry(id) {
            Some(InventoryEntry::Equipment(gear)) => gear.clone(),
            Some(InventoryEntry::Item(_)) => return Err(CharacterError::NotEquipment(id)),
            None => return Err(CharacterError::ItemNotFound(id)),
        };

        if self.equipment.get(gear.slot).is_some() && self.inventory.len() > self.max_inventory_slots
        {
            return Err(CharacterError::InventoryFull);
        }

        self.remove_from_inventory(id);
        if let Some(previous) = self.equipment.take(gear.slot) {
            self.remove_gear_stats(&previous);
            self.inventory.push(InventoryEntry::Equipment(previous));
        }
        self.apply_gear_stats(&gear);
        self.equipment.set(gear);
        Ok(())
    }

    /// Unequip the piece in a slot back into the inventory.
    pub fn unequip(&mut self, slot: EquipSlot) -> Result<(), CharacterError> {
        if self.equipment.get(slot).is_none() {
            return Err(CharacterError::EquipSlotEmpty(slot));
        }
        if !self.has_inventory_space() {
            return Err(CharacterError::InventoryFull);
        }

        let Some(gear) = self.equipment.take(slot) else {
            return Err(CharacterError::EquipSlotEmpty(slot));
        };
        self.remove_gear_stats(&gear);
        self.inventory.push(InventoryEntry::Equipment(gear));
        Ok(())
    }

    /// Destroy the piece in a slot without returning it to the inventory.
    /// Its stat contribution is reversed first.
    pub fn discard_equipped(&mut self, slot: EquipSlot) -> Result<(), CharacterError> {
        let Some(gear) = self.equipment.take(slot) else {
            return Err(CharacterError::EquipSlotEmpty(slot));
        };
        self.remove_gear_stats(&gear);
        Ok(())
    }

    fn apply_gear_stats(&mut self, gear: &Equipment) {
        for line in gear.stats.lines() {
            self.stats.add(line.kind, line.value);
        }
    }

    fn remove_gear_stats(&mut self, gear: &Equipment) {
        for line in gear.stats.lines() {
            self.stats.add(line.kind, -line.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{GearStats, Rarity, StatLine};
    use crate::stats::StatKind;

    fn sword(id: u64, attack: i32) -> Equipment {
        Equipment {
            id: ObjectId(id),
            name: "sword".into(),
            slot: EquipSlot::Weapon,
            rarity: Rarity::Common,
            level: 1,
            stats: GearStats {
                main: Some(StatLine::new(StatKind::Attack, attack)),
                subs: vec![StatLine::new(StatKind::Speed, 2)],
            },
            value: 50,
        }
    }

    fn armor_with_hp(id: u64, hp: i32) -> Equipment {
        Equipment {
            id: ObjectId(id),
            name: "armor".into(),
            slot: EquipSlot::Armor,
            rarity: Rarity::Rare,
            level: 3,
            stats: GearStats {
                main: Some(StatLine::new(StatKind::MaxHp, hp)),
                subs: Vec::new(),
            },
            value: 200,
        }
    }

    #[test]
    fn equip_applies_stats_and_moves_item() {
        let mut hero = Character::new(ObjectId(1), "Hero");
        hero.add_to_inventory(InventoryEntry::Equipment(sword(10, 7)))
            .unwrap();

        hero.equip(ObjectId(10)).unwrap();
        assert_eq!(hero.stats.attack, 17);
        assert_eq!(hero.stats.speed, 22);
        assert!(hero.inventory.is_empty());
        assert!(hero.equipment.weapon.is_some());
    }

    #[test]
    fn equip_unequip_round_trips_stats_exactly() {
        let mut hero = Character::new(ObjectId(1), "Hero");
        let before = hero.stats;
        hero.add_to_inventory(InventoryEntry::Equipment(sword(10, 7)))
            .unwrap();

        hero.equip(ObjectId(10)).unwrap();
        hero.unequip(EquipSlot::Weapon).unwrap();
        assert_eq!(hero.stats, before);
        assert_eq!(hero.inventory.len(), 1);
    }

    #[test]
    fn equip_swaps_occupied_slot() {
        let mut hero = Character::new(ObjectId(1), "Hero");
        hero.add_to_inventory(InventoryEntry::Equipment(sword(10, 7)))
            .unwrap();
        hero.add_to_inventory(InventoryEntry::Equipment(sword(11, 9)))
            .unwrap();

        hero.equip(ObjectId(10)).unwrap();
        hero.equip(ObjectId(11)).unwrap();

        assert_eq!(hero.stats.attack, 19);
        assert_eq!(hero.inventory.len(), 1);
        assert_eq!(hero.inventory[0].id(), ObjectId(10));
        assert_eq!(hero.equipment.weapon.as_ref().unwrap().id, ObjectId(11));
    }

    #[test]
    fn max_hp_gear_raises_and_clamps_hp() {
        let mut hero = Character::new(ObjectId(1), "Hero");
        hero.add_to_inventory(InventoryEntry::Equipment(armor_with_hp(20, 40)))
            .unwrap();

        hero.equip(ObjectId(20)).unwrap();
        assert_eq!(hero.stats.max_hp, 140);
        assert_eq!(hero.stats.hp, 140);

        hero.unequip(EquipSlot::Armor).unwrap();
        assert_eq!(hero.stats.max_hp, 100);
        assert_eq!(hero.stats.hp, 100);
    }

    #[test]
    fn unequip_rejects_when_inventory_full() {
        let mut hero = Character::new(ObjectId(1), "Hero");
        hero.add_to_inventory(InventoryEntry::Equipment(sword(10, 7)))
            .unwrap();
        hero.equip(ObjectId(10)).unwrap();

        hero.max_inventory_slots = 0;
        assert_eq!(
            hero.unequip(EquipSlot::Weapon),
            Err(CharacterError::InventoryFull)
        );
        assert!(hero.equipment.weapon.is_some());
        assert_eq!(hero.stats.attack, 17);
    }
}
