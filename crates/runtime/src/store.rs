//! Canonical character store.
//!
//! The store owns the single source-of-truth [`Character`] record. Readers
//! get value-type clones; writers go through validated methods guarded by a
//! single-flight flag, so an in-progress action makes overlapping calls fail
//! with [`RuntimeError::Busy`] instead of double-applying.

use game_core::{
    Attribute, Character, EquipSlot, GameConfig, InventoryEntry, ObjectId, ProgressEvent, Stats,
};
use serde::{Deserialize, Serialize};

use crate::error::RuntimeError;

/// Partial character update, applied with bounds validation.
///
/// Mirrors what external surfaces (admin console, progression UI) are allowed
/// to change directly. Unset fields are left alone.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub coins: Option<i64>,
    /// Xp to add; triggers the level-up cascade.
    pub xp_gain: Option<i64>,
    pub stats: Option<Stats>,
    pub base_stats: Option<Stats>,
}

/// Owner of the canonical character record.
pub struct CharacterStore {
    character: Character,
    busy: bool,
}

impl CharacterStore {
    pub fn new(character: Character) -> Self {
        Self {
            character,
            busy: false,
        }
    }

    /// Create a store with a fresh level-1 character.
    pub fn fresh(id: ObjectId, name: impl Into<String>) -> Self {
        Self::new(Character::new(id, name))
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Value-type snapshot of the current record.
    pub fn snapshot(&self) -> Character {
        self.character.clone()
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn has_inventory_space(&self) -> bool {
        self.character.has_inventory_space()
    }

    // ========================================================================
    // Writes (single-flight guarded)
    // ========================================================================

    /// Apply a partial update.
    ///
    /// Bounds are validated before anything sticks: stat blocks are clamped
    /// into their invariants and the configured cap. Xp gains run the
    /// level-up cascade and return one event per level gained.
    pub fn apply(&mut self, patch: CharacterPatch) -> Result<Vec<ProgressEvent>, RuntimeError> {
        self.guarded(|character| {
            let mut events = Vec::new();

            if let Some(name) = patch.name {
                character.name = name;
            }
            if let Some(coins) = patch.coins {
                character.coins = coins.max(0);
            }
            if let Some(mut stats) = patch.stats {
                stats.clamp_resources();
                character.stats = stats;
            }
            if let Some(mut base) = patch.base_stats {
                base.clamp_to_cap(GameConfig::STAT_CAP);
                character.base_stats = base;
            }
            if let Some(xp) = patch.xp_gain {
                events.extend(character.gain_xp(xp));
            }

            Ok(events)
        })
    }

    /// Replace the record with a combat-session snapshot (commit point).
    pub(crate) fn commit(&mut self, snapshot: Character) -> Result<(), RuntimeError> {
        self.guarded(|character| {
            *character = snapshot;
            character.stats.clamp_resources();
            Ok(())
        })
    }

    pub fn gain_xp(&mut self, amount: i64) -> Result<Vec<ProgressEvent>, RuntimeError> {
        self.guarded(|character| Ok(character.gain_xp(amount)))
    }

    pub fn gain_coins(&mut self, amount: i64) -> Result<Vec<ProgressEvent>, RuntimeError> {
        self.guarded(|character| Ok(character.gain_coins(amount).into_iter().collect()))
    }

    pub fn add_to_inventory(&mut self, entry: InventoryEntry) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.add_to_inventory(entry)?))
    }

    pub fn equip(&mut self, id: ObjectId) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.equip(id)?))
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.unequip(slot)?))
    }

    pub fn discard_item(&mut self, id: ObjectId) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.discard_item(id)?))
    }

    pub fn discard_equipped(&mut self, slot: EquipSlot) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.discard_equipped(slot)?))
    }

    pub fn equip_skill(&mut self, id: ObjectId, slot: usize) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.equip_skill(id, slot)?))
    }

    pub fn unequip_skill(&mut self, slot: usize) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.unequip_skill(slot)?))
    }

    pub fn delete_skill(&mut self, id: ObjectId) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.delete_skill(id)?))
    }

    pub fn equip_consumable(&mut self, id: ObjectId, slot: usize) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.equip_consumable(id, slot)?))
    }

    pub fn unequip_consumable(&mut self, slot: usize) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.unequip_consumable(slot)?))
    }

    pub fn distribute_points(
        &mut self,
        attribute: Attribute,
        amount: u32,
    ) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.distribute_points(attribute, amount)?))
    }

    pub fn purchase_capacity_slot(&mut self) -> Result<(), RuntimeError> {
        self.guarded(|character| Ok(character.purchase_capacity_slot()?))
    }

    // ========================================================================
    // Snapshot transfer
    // ========================================================================

    /// Serialize the record for an external save collaborator.
    pub fn export_snapshot(&self) -> Result<String, RuntimeError> {
        serde_json::to_string(&self.character)
            .map_err(|err| RuntimeError::MalformedSnapshot(err.to_string()))
    }

    /// Replace the record from a persisted snapshot.
    ///
    /// Parsing happens before any mutation: a malformed snapshot fails the
    /// load and leaves the in-memory character untouched.
    pub fn load_snapshot(&mut self, json: &str) -> Result<(), RuntimeError> {
        let mut loaded: Character = serde_json::from_str(json)
            .map_err(|err| RuntimeError::MalformedSnapshot(err.to_string()))?;
        loaded.stats.clamp_resources();
        loaded.base_stats.clamp_to_cap(GameConfig::STAT_CAP);
        self.guarded(|character| {
            *character = loaded;
            Ok(())
        })
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Run one mutation under the single-flight guard.
    fn guarded<T>(
        &mut self,
        operation: impl FnOnce(&mut Character) -> Result<T, RuntimeError>,
    ) -> Result<T, RuntimeError> {
        if self.busy {
            return Err(RuntimeError::Busy);
        }
        self.busy = true;
        let result = operation(&mut self.character);
        self.busy = false;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::xp_required;

    fn store() -> CharacterStore {
        CharacterStore::fresh(ObjectId(1), "Hero")
    }

    #[test]
    fn snapshot_is_a_detached_copy() {
        let mut store = store();
        let mut copy = store.snapshot();
        copy.coins = 999;
        assert_eq!(store.character().coins, 0);
        store.gain_coins(5).unwrap();
        assert_eq!(copy.coins, 999);
    }

    #[test]
    fn patch_xp_cascades_levels() {
        let mut store = store();
        let patch = CharacterPatch {
            xp_gain: Some(xp_required(1) + xp_required(2)),
            ..CharacterPatch::default()
        };
        let events = store.apply(patch).unwrap();
        assert_eq!(store.character().level, 3);
        assert_eq!(store.character().stat_points, 6);
        let level_ups = events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::LeveledUp { .. }))
            .count();
        assert_eq!(level_ups, 2);
    }

    #[test]
    fn patch_stats_are_clamped() {
        let mut store = store();
        let mut stats = Stats::starting();
        stats.hp = 9_999;
        stats.mana = -5;
        store
            .apply(CharacterPatch {
                stats: Some(stats),
                ..CharacterPatch::default()
            })
            .unwrap();
        let after = store.character().stats;
        assert_eq!(after.hp, after.max_hp);
        assert_eq!(after.mana, 0);
    }

    #[test]
    fn base_stat_patch_respects_cap() {
        let mut store = store();
        let mut base = Stats::starting();
        base.attack = 99_999;
        store
            .apply(CharacterPatch {
                base_stats: Some(base),
                ..CharacterPatch::default()
            })
            .unwrap();
        assert_eq!(store.character().base_stats.attack, GameConfig::STAT_CAP);
    }

    #[test]
    fn malformed_snapshot_leaves_character_untouched() {
        let mut store = store();
        store.gain_coins(42).unwrap();
        let err = store.load_snapshot("{not json");
        assert!(matches!(err, Err(RuntimeError::MalformedSnapshot(_))));
        assert_eq!(store.character().coins, 42);
    }

    #[test]
    fn snapshot_round_trip() {
        let mut store = store();
        store.gain_coins(17).unwrap();
        let json = store.export_snapshot().unwrap();

        let mut other = CharacterStore::fresh(ObjectId(2), "Other");
        other.load_snapshot(&json).unwrap();
        assert_eq!(other.character(), store.character());
    }
}
