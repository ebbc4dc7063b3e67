//! Character records.
//!
//! [`Character`] is the single source of truth for the player. Combat and UI
//! layers work on value-type clones and commit back at defined points; the
//! struct is plain data plus validated mutation methods. Every mutation
//! validates first and only then writes, so a returned error means nothing
//! changed.

pub mod equipment;
pub mod progression;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::item::{EquipSlot, Equipment, Item, ItemKind, ObjectId};
use crate::skill::Skill;
use crate::stats::{BonusPoints, Stats};

pub use progression::{ProgressEvent, xp_required};

/// Anything that can sit in an inventory slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryEntry {
    Equipment(Equipment),
    Item(Item),
}

impl InventoryEntry {
    pub fn id(&self) -> ObjectId {
        match self {
            InventoryEntry::Equipment(gear) => gear.id,
            InventoryEntry::Item(item) => item.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            InventoryEntry::Equipment(gear) => &gear.name,
            InventoryEntry::Item(item) => &item.name,
        }
    }
}

/// Typed equipment slots. One optional piece per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSlots {
    pub weapon: Option<Equipment>,
    pub helmet: Option<Equipment>,
    pub armor: Option<Equipment>,
    pub gloves: Option<Equipment>,
    pub boots: Option<Equipment>,
    pub ring: Option<Equipment>,
    pub necklace: Option<Equipment>,
}

impl EquipmentSlots {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&Equipment> {
        self.slot_ref(slot).as_ref()
    }

    /// Put a piece into its slot, returning whatever it replaced.
    pub fn set(&mut self, gear: Equipment) -> Option<Equipment> {
        self.slot_mut(gear.slot).replace(gear)
    }

    /// Empty a slot, returning the removed piece if any.
    pub fn take(&mut self, slot: EquipSlot) -> Option<Equipment> {
        self.slot_mut(slot).take()
    }

    /// Iterate all equipped pieces.
    pub fn iter(&self) -> impl Iterator<Item = &Equipment> {
        [
            &self.weapon,
            &self.helmet,
            &self.armor,
            &self.gloves,
            &self.boots,
            &self.ring,
            &self.necklace,
        ]
        .into_iter()
        .filter_map(|slot| slot.as_ref())
    }

    fn slot_ref(&self, slot: EquipSlot) -> &Option<Equipment> {
        match slot {
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Helmet => &self.helmet,
            EquipSlot::Armor => &self.armor,
            EquipSlot::Gloves => &self.gloves,
            EquipSlot::Boots => &self.boots,
            EquipSlot::Ring => &self.ring,
            EquipSlot::Necklace => &self.necklace,
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<Equipment> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Helmet => &mut self.helmet,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Gloves => &mut self.gloves,
            EquipSlot::Boots => &mut self.boots,
            EquipSlot::Ring => &mut self.ring,
            EquipSlot::Necklace => &mut self.necklace,
        }
    }
}

/// The player character record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: ObjectId,
    pub name: String,
    pub level: u32,
    pub xp: i64,
    pub total_xp: i64,
    pub coins: i64,
    /// Unspent stat points.
    pub stat_points: u32,
    pub total_stat_points: u32,
    pub bonus: BonusPoints,
    /// Stats without any equipment applied.
    pub base_stats: Stats,
    /// Stats with equipment applied. Combat reads these.
    pub stats: Stats,
    pub max_inventory_slots: usize,
    /// How many extra slots have been bought (drives the price curve).
    pub capacity_purchases: u32,
    pub inventory: Vec<InventoryEntry>,
    pub equipment: EquipmentSlots,
    pub skills: Vec<Skill>,
    pub equipped_skills: [Option<ObjectId>; GameConfig::MAX_SKILL_SLOTS],
    pub equipped_consumables: [Option<ObjectId>; GameConfig::MAX_CONSUMABLE_SLOTS],
}

impl Character {
    /// A fresh level-1 character.
    pub fn new(id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            level: 1,
            xp: 0,
            total_xp: 0,
            coins: 0,
            stat_points: 0,
            total_stat_points: 0,
            bonus: BonusPoints::default(),
            base_stats: Stats::starting(),
            stats: Stats::starting(),
            max_inventory_slots: GameConfig::STARTING_INVENTORY_SLOTS,
            capacity_purchases: 0,
            inventory: Vec::new(),
            equipment: EquipmentSlots::empty(),
            skills: Vec::new(),
            equipped_skills: [None; GameConfig::MAX_SKILL_SLOTS],
            equipped_consumables: [None; GameConfig::MAX_CONSUMABLE_SLOTS],
        }
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    pub fn has_inventory_space(&self) -> bool {
        self.inventory.len() < self.max_inventory_slots
    }

    pub fn empty_slots(&self) -> usize {
        self.max_inventory_slots.saturating_sub(self.inventory.len())
    }

    /// Add an entry, rejecting when the inventory is at capacity.
    pub fn add_to_inventory(&mut self, entry: InventoryEntry) -> Result<(), CharacterError> {
        if !self.has_inventory_space() {
            return Err(CharacterError::InventoryFull);
        }
        self.inventory.push(entry);
        Ok(())
    }

    pub fn inventory_entry(&self, id: ObjectId) -> Option<&InventoryEntry> {
        self.inventory.iter().find(|entry| entry.id() == id)
    }

    /// Remove an entry by id, returning it.
    pub fn remove_from_inventory(&mut self, id: ObjectId) -> Option<InventoryEntry> {
        let index = self.inventory.iter().position(|entry| entry.id() == id)?;
        Some(self.inventory.remove(index))
    }

    /// Destroy an inventory entry, clearing any consumable slot that
    /// referenced it.
    pub fn discard_item(&mut self, id: ObjectId) -> Result<(), CharacterError> {
        if self.remove_from_inventory(id).is_none() {
            return Err(CharacterError::ItemNotFound(id));
        }
        for slot in self.equipped_consumables.iter_mut() {
            if *slot == Some(id) {
                *slot = None;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Skills
    // ========================================================================

    pub fn skill(&self, id: ObjectId) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.id == id)
    }

    /// Equip an owned skill into an active slot.
    pub fn equip_skill(&mut self, id: ObjectId, slot: usize) -> Result<(), CharacterError> {
        if slot >= GameConfig::MAX_SKILL_SLOTS {
            return Err(CharacterError::InvalidSlot(slot));
        }
        if self.skill(id).is_none() {
            return Err(CharacterError::SkillNotFound(id));
        }
        self.equipped_skills[slot] = Some(id);
        Ok(())
    }

    pub fn unequip_skill(&mut self, slot: usize) -> Result<(), CharacterError> {
        if slot >= GameConfig::MAX_SKILL_SLOTS {
            return Err(CharacterError::InvalidSlot(slot));
        }
        if self.equipped_skills[slot].take().is_none() {
            return Err(CharacterError::SlotEmpty(slot));
        }
        Ok(())
    }

    /// Forget a skill entirely, clearing any slot that referenced it.
    pub fn delete_skill(&mut self, id: ObjectId) -> Result<(), CharacterError> {
        let index = self
            .skills
            .iter()
            .position(|skill| skill.id == id)
            .ok_or(CharacterError::SkillNotFound(id))?;
        self.skills.remove(index);
        for slot in self.equipped_skills.iter_mut() {
            if *slot == Some(id) {
                *slot = None;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Consumable slots
    // ========================================================================

    /// Equip an inventory consumable into a quick slot.
    pub fn equip_consumable(&mut self, id: ObjectId, slot: usize) -> Result<(), CharacterError> {
        if slot >= GameConfig::MAX_CONSUMABLE_SLOTS {
            return Err(CharacterError::InvalidSlot(slot));
        }
        match self.inventory_entry(id) {
            Some(InventoryEntry::Item(item)) if item.kind == ItemKind::Consumable => {}
            Some(_) => return Err(CharacterError::NotAConsumable(id)),
            None => return Err(CharacterError::ItemNotFound(id)),
        }
        self.equipped_consumables[slot] = Some(id);
        Ok(())
    }

    pub fn unequip_consumable(&mut self, slot: usize) -> Result<(), CharacterError> {
        if slot >= GameConfig::MAX_CONSUMABLE_SLOTS {
            return Err(CharacterError::InvalidSlot(slot));
        }
        if self.equipped_consumables[slot].take().is_none() {
            return Err(CharacterError::SlotEmpty(slot));
        }
        Ok(())
    }
}

/// An enemy combatant. A flat snapshot: enemies have no progression.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: ObjectId,
    pub name: String,
    pub level: u32,
    pub stats: Stats,
    pub skills: Vec<Skill>,
    pub coins: i64,
}

/// Errors from character mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterError {
    #[error("inventory is full")]
    InventoryFull,

    #[error("item {0} not found in inventory")]
    ItemNotFound(ObjectId),

    #[error("item {0} is not equippable")]
    NotEquipment(ObjectId),

    #[error("item {0} is not a consumable")]
    NotAConsumable(ObjectId),

    #[error("nothing equipped in {0} slot")]
    EquipSlotEmpty(EquipSlot),

    #[error("slot {0} is empty")]
    SlotEmpty(usize),

    #[error("slot index {0} out of range")]
    InvalidSlot(usize),

    #[error("skill {0} not found")]
    SkillNotFound(ObjectId),

    #[error("not enough stat points: have {have}, need {need}")]
    InsufficientStatPoints { have: u32, need: u32 },

    #[error("not enough coins: have {have}, need {need}")]
    InsufficientCoins { have: i64, need: i64 },
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        use CharacterError::*;
        match self {
            InventoryFull | InsufficientStatPoints { .. } | InsufficientCoins { .. } => {
                ErrorSeverity::Recoverable
            }
            ItemNotFound(_) | NotEquipment(_) | NotAConsumable(_) | SkillNotFound(_) => {
                ErrorSeverity::Validation
            }
            EquipSlotEmpty(_) | SlotEmpty(_) | InvalidSlot(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use CharacterError::*;
        match self {
            InventoryFull => "CHARACTER_INVENTORY_FULL",
            ItemNotFound(_) => "CHARACTER_ITEM_NOT_FOUND",
            NotEquipment(_) => "CHARACTER_NOT_EQUIPMENT",
            NotAConsumable(_) => "CHARACTER_NOT_A_CONSUMABLE",
            EquipSlotEmpty(_) => "CHARACTER_EQUIP_SLOT_EMPTY",
            SlotEmpty(_) => "CHARACTER_SLOT_EMPTY",
            InvalidSlot(_) => "CHARACTER_INVALID_SLOT",
            SkillNotFound(_) => "CHARACTER_SKILL_NOT_FOUND",
            InsufficientStatPoints { .. } => "CHARACTER_INSUFFICIENT_STAT_POINTS",
            InsufficientCoins { .. } => "CHARACTER_INSUFFICIENT_COINS",
        }
    }
}
