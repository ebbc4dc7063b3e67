//! Random enemy generation.
//!
//! Enemy level is drawn from a band around the player's level, then stats
//! are rolled from level-scaled ranges. Resources start full.

use game_core::{Enemy, GameRng, ObjectId, Stats};

use crate::names::ENEMY_NAMES;
use crate::skill::generate_enemy_skills;

/// Generate an enemy appropriate for a player of the given level.
pub fn generate_enemy(rng: &mut GameRng, player_level: u32) -> Enemy {
    let band_top = player_level as i64 + 5 * (player_level as i64 / 2) + 5;
    let level = (rng.between(player_level as i64, band_top) / 2).max(1) as u32;
    let l = level as i64;

    let max_hp = (rng.between(10, 50) * l) as i32;
    let max_mana = rng.between(0, 30 * l) as i32;
    let stats = Stats {
        hp: max_hp,
        max_hp,
        mana: max_mana,
        max_mana,
        attack: rng.between(1, 3 * l) as i32,
        defense: rng.between(0, 5 * l) as i32,
        speed: rng.between(3, 25 * l / 2) as i32,
        magic: rng.between(0, 10 * l) as i32,
        crit_chance: 0,
        crit_damage: 0,
    };

    let name = rng.choose(&ENEMY_NAMES).copied().unwrap_or("Slime");

    Enemy {
        id: ObjectId(rng.next_id()),
        name: name.to_string(),
        level,
        stats,
        skills: generate_enemy_skills(rng, level),
        coins: rng.between(10, 20) * l / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_floor_is_one() {
        let mut rng = GameRng::new(31);
        for _ in 0..100 {
            let enemy = generate_enemy(&mut rng, 1);
            assert!(enemy.level >= 1);
        }
    }

    #[test]
    fn resources_start_full_and_valid() {
        let mut rng = GameRng::new(32);
        for _ in 0..100 {
            let enemy = generate_enemy(&mut rng, 7);
            assert_eq!(enemy.stats.hp, enemy.stats.max_hp);
            assert_eq!(enemy.stats.mana, enemy.stats.max_mana);
            assert!(enemy.stats.hp > 0);
            assert!(!enemy.skills.is_empty());
        }
    }

    #[test]
    fn level_scales_with_player() {
        let mut rng = GameRng::new(33);
        let mut max_seen = 0;
        for _ in 0..100 {
            let enemy = generate_enemy(&mut rng, 20);
            // Band: between(20, 75) / 2 => 10..=37.
            assert!((10..=37).contains(&enemy.level));
            max_seen = max_seen.max(enemy.level);
        }
        assert!(max_seen > 15);
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let a = generate_enemy(&mut GameRng::new(55), 9);
        let b = generate_enemy(&mut GameRng::new(55), 9);
        assert_eq!(a, b);
    }
}
