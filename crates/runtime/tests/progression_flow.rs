//! Progression and inventory flows through the store.

use game_core::{
    Attribute, EquipSlot, GameRng, InventoryEntry, ObjectId, Rarity, StatKind, xp_required,
};
use game_gen::{EquipmentParams, generate_equipment};
use runtime::{CharacterPatch, CharacterStore};

fn store() -> CharacterStore {
    CharacterStore::fresh(ObjectId(1), "Hero")
}

#[test]
fn generated_gear_equips_and_round_trips() {
    let mut rng = GameRng::new(101);
    let mut store = store();
    let gear = generate_equipment(
        &mut rng,
        &EquipmentParams {
            level: Some(5),
            slot: Some(EquipSlot::Weapon),
            rarity: Some(Rarity::Rare),
        },
    );
    let gear_id = gear.id;
    let attack_bonus = gear.stats.bonus(StatKind::Attack);
    assert!(attack_bonus > 0);

    let stats_before = store.character().stats;
    store
        .add_to_inventory(InventoryEntry::Equipment(gear))
        .unwrap();
    store.equip(gear_id).unwrap();
    assert_eq!(
        store.character().stats.attack,
        stats_before.attack + attack_bonus
    );

    store.unequip(EquipSlot::Weapon).unwrap();
    assert_eq!(store.character().stats, stats_before);
    assert_eq!(store.character().inventory.len(), 1);
}

#[test]
fn distributed_points_feed_derived_stats() {
    let mut store = store();
    store
        .apply(CharacterPatch {
            xp_gain: Some(xp_required(1)),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.character().stat_points, 3);

    store.distribute_points(Attribute::Strength, 2).unwrap();
    store.distribute_points(Attribute::Luck, 1).unwrap();
    let character = store.character();
    assert_eq!(character.stat_points, 0);
    assert_eq!(character.bonus.strength, 2);
    assert_eq!(character.bonus.luck, 1);

    // attack = stats.attack + Str/2
    let attack = game_core::stats::derived::attack(&character.stats, &character.bonus);
    assert_eq!(attack, character.stats.attack + 1);
}

#[test]
fn capacity_purchase_extends_inventory() {
    let mut store = store();
    store
        .apply(CharacterPatch {
            coins: Some(200),
            ..Default::default()
        })
        .unwrap();

    store.purchase_capacity_slot().unwrap();
    assert_eq!(store.character().max_inventory_slots, 11);
    assert_eq!(store.character().coins, 150);

    store.purchase_capacity_slot().unwrap();
    assert_eq!(store.character().max_inventory_slots, 12);
    assert_eq!(store.character().coins, 50);

    // Third slot costs 200; the store must reject without mutating.
    assert!(store.purchase_capacity_slot().is_err());
    assert_eq!(store.character().max_inventory_slots, 12);
    assert_eq!(store.character().coins, 50);
}

#[test]
fn skill_slots_accept_generated_skills() {
    let mut rng = GameRng::new(55);
    let mut store = store();
    let skills = game_gen::generate_player_skills(&mut rng, 3, 3);
    let first_id = skills[0].id;

    // Attach skills directly to the record, then equip through the store.
    let mut snapshot = store.snapshot();
    snapshot.skills = skills;
    let json = serde_json::to_string(&snapshot).unwrap();
    store.load_snapshot(&json).unwrap();

    store.equip_skill(first_id, 0).unwrap();
    assert_eq!(store.character().equipped_skills[0], Some(first_id));

    store.unequip_skill(0).unwrap();
    assert_eq!(store.character().equipped_skills[0], None);
}
