//! End-to-end combat scenarios through the runtime.

use game_core::{
    CombatEvent, CombatPhase, Combatant, Enemy, GameRng, ObjectId, ProgressEvent, Stats,
};
use runtime::{CharacterPatch, CharacterStore, GameRuntime, RuntimeError};

fn weak_enemy(hp: i32, speed: i32) -> Enemy {
    let mut stats = Stats::starting();
    stats.hp = hp;
    stats.max_hp = hp;
    stats.speed = speed;
    stats.attack = 6;
    stats.defense = 0;
    Enemy {
        id: ObjectId(900),
        name: "Training Dummy".into(),
        level: 1,
        stats,
        skills: Vec::new(),
        coins: 0,
    }
}

fn runtime_with(enemy: Enemy) -> GameRuntime {
    let store = CharacterStore::fresh(ObjectId(1), "Hero");
    let mut runtime = GameRuntime::new(store, GameRng::new(1234));
    runtime.start_combat(enemy).unwrap();
    runtime
}

#[test]
fn player_with_higher_speed_acts_first() {
    // Player speed 20 vs enemy speed 10: the opening report must not contain
    // any enemy action before the player's first turn.
    let store = CharacterStore::fresh(ObjectId(1), "Hero");
    let mut runtime = GameRuntime::new(store, GameRng::new(7));
    let started = runtime.start_combat(weak_enemy(500, 10)).unwrap();

    let enemy_acted_first = started.events.iter().any(|event| {
        matches!(
            event,
            CombatEvent::DamageDealt {
                attacker: Combatant::Enemy,
                ..
            }
        )
    });
    assert!(!enemy_acted_first);
}

#[test]
fn victory_grants_rewards_exactly_once() {
    let mut runtime = runtime_with(weak_enemy(1, 10));
    let coins_before = runtime.store().character().coins;
    let xp_before = runtime.store().character().total_xp;

    let outcome = runtime.attack().unwrap();
    assert_eq!(outcome.phase, CombatPhase::Victory);

    let coins_gained = runtime.store().character().coins - coins_before;
    let xp_gained = runtime.store().character().total_xp - xp_before;
    assert!((10..=20).contains(&coins_gained));
    assert!((10..=20).contains(&xp_gained));

    let xp_events: i64 = outcome
        .progress
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::XpGained { amount } => Some(*amount),
            _ => None,
        })
        .sum();
    assert_eq!(xp_events, xp_gained);

    // The session is gone; further actions are rejected and grant nothing.
    assert!(matches!(
        runtime.attack(),
        Err(RuntimeError::NoActiveCombat)
    ));
    assert_eq!(runtime.store().character().coins, coins_before + coins_gained);
}

#[test]
fn combat_commits_player_state_every_turn() {
    let mut runtime = runtime_with(weak_enemy(100_000, 10));

    let mana_before = runtime.store().character().stats.mana;
    runtime.attack().unwrap();
    // Normal attacks restore mana; the store must reflect it immediately.
    let committed = runtime.store().character().stats.mana;
    assert!(committed > mana_before || committed == runtime.store().character().stats.max_mana);
}

#[test]
fn starting_combat_twice_is_rejected() {
    let mut runtime = runtime_with(weak_enemy(500, 10));
    let err = runtime.start_combat(weak_enemy(500, 10));
    assert!(matches!(err, Err(RuntimeError::CombatInProgress)));
}

#[test]
fn actions_without_combat_are_rejected() {
    let store = CharacterStore::fresh(ObjectId(1), "Hero");
    let mut runtime = GameRuntime::new(store, GameRng::new(9));
    assert!(matches!(runtime.attack(), Err(RuntimeError::NoActiveCombat)));
    assert!(matches!(runtime.flee(), Err(RuntimeError::NoActiveCombat)));
}

#[test]
fn fled_combat_preserves_character() {
    let store = CharacterStore::fresh(ObjectId(1), "Hero");
    let mut runtime = GameRuntime::new(store, GameRng::new(42));

    // Speed gap maxes the flee chance at 90%.
    let mut patch_stats = runtime.store().character().stats;
    patch_stats.speed = 500;
    runtime
        .store_mut()
        .apply(CharacterPatch {
            stats: Some(patch_stats),
            ..Default::default()
        })
        .unwrap();

    runtime.start_combat(weak_enemy(100_000, 10)).unwrap();
    for _ in 0..64 {
        let outcome = runtime.flee().unwrap();
        if outcome.phase == CombatPhase::Fled {
            assert!(!runtime.in_combat());
            assert_eq!(runtime.store().character().coins, 0);
            return;
        }
    }
    panic!("flee never succeeded at 90% chance");
}

#[test]
fn hp_and_mana_invariants_hold_across_a_whole_fight() {
    let mut runtime = runtime_with(weak_enemy(2_000, 25));

    for _ in 0..80 {
        if !runtime.in_combat() {
            break;
        }
        let _ = runtime.attack();
        let stats = runtime.store().character().stats;
        assert!(stats.hp >= 0 && stats.hp <= stats.max_hp);
        assert!(stats.mana >= 0 && stats.mana <= stats.max_mana);
    }
}

#[test]
fn encounter_generates_a_level_appropriate_enemy() {
    let store = CharacterStore::fresh(ObjectId(1), "Hero");
    let mut runtime = GameRuntime::new(store, GameRng::new(77));
    let started = runtime.encounter().unwrap();
    assert!(started.enemy.level >= 1);
    assert!(started.enemy.stats.hp > 0);
    assert!(runtime.in_combat() || started.events.iter().any(|e| matches!(e, CombatEvent::Ended { .. })));
}
