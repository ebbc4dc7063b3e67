//! Random skill generation.
//!
//! Mana cost, cooldown and action cost are deterministic functions of level
//! and effect/damage type; status-effect attachment is probabilistic with a
//! chance that rises with level.

use game_core::{
    DamageType, EffectKind, GameRng, ObjectId, Skill, SkillEffect, SkillKind, StatusPayload,
};
use strum::IntoEnumIterator;

use crate::names;
use crate::tables::{
    self, BUFFABLE_STATS, BUFF_AMOUNTS, DEBUFFABLE_STATS, DEBUFF_AMOUNTS, DOT_AMOUNTS,
    HOT_AMOUNTS,
};

/// Constraints for skill generation. Unset fields are rolled.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkillParams {
    pub level: Option<u32>,
    pub effect: Option<EffectKind>,
    pub damage_type: Option<DamageType>,
    pub min_level: Option<u32>,
}

impl SkillParams {
    pub fn at_level(level: u32) -> Self {
        Self {
            level: Some(level),
            ..Self::default()
        }
    }

    pub fn damage_at_level(level: u32) -> Self {
        Self {
            level: Some(level),
            effect: Some(EffectKind::Damage),
            ..Self::default()
        }
    }
}

/// Elemental flavor of a magical damage skill, deciding its status pool.
#[derive(Clone, Copy)]
enum Element {
    Fire,
    Ice,
    Lightning,
    Arcane,
}

/// Generate a random skill.
pub fn generate_skill(rng: &mut GameRng, params: &SkillParams) -> Skill {
    let level = params.level.unwrap_or(1).max(1);
    let min_level = params.min_level.unwrap_or_else(|| level.saturating_sub(5).max(1));

    let effect_kind = params.effect.unwrap_or_else(|| {
        let kinds: Vec<EffectKind> = EffectKind::iter().collect();
        *rng.choose(&kinds).unwrap_or(&EffectKind::Damage)
    });
    let damage_type = if effect_kind == EffectKind::Damage {
        params.damage_type.unwrap_or_else(|| {
            let types: Vec<DamageType> = DamageType::iter().collect();
            *rng.choose(&types).unwrap_or(&DamageType::Physical)
        })
    } else {
        // Default tag for non-damage skills.
        DamageType::Physical
    };

    let name = rng
        .choose(names::skill_names(effect_kind, damage_type))
        .copied()
        .unwrap_or("Skill");
    let description = rng
        .choose(names::skill_descriptions(effect_kind, damage_type))
        .copied()
        .unwrap_or("");

    let effect_value = (tables::effect_base(effect_kind) as f64 + level as f64 * 1.5).floor() as i32;
    let mana_cost =
        (tables::mana_cost_base(effect_kind, damage_type) as f64 + level as f64 * 0.5).floor() as i32;

    let status_effects = roll_status_effects(rng, effect_kind, damage_type, level);

    Skill {
        id: ObjectId(rng.next_id()),
        name: name.to_string(),
        description: description.to_string(),
        level: 1,
        level_required: min_level,
        kind: SkillKind::Active,
        damage_type,
        mana_cost,
        cooldown_s: tables::cooldown_s(effect_kind, damage_type),
        action_cost: tables::action_cost(effect_kind, damage_type),
        effect: SkillEffect {
            kind: effect_kind,
            value: effect_value,
            duration_s: match effect_kind {
                EffectKind::Buff | EffectKind::Debuff => 3,
                _ => 0,
            },
            hits: match effect_kind {
                EffectKind::Damage | EffectKind::Heal => 1,
                _ => 0,
            },
        },
        status_effects,
    }
}

/// Generate a set of skills for a player of the given level.
///
/// Always includes at least one damage skill.
pub fn generate_player_skills(rng: &mut GameRng, level: u32, count: usize) -> Vec<Skill> {
    let mut skills = vec![generate_skill(rng, &SkillParams::damage_at_level(level))];
    for _ in 1..count.max(1) {
        skills.push(generate_skill(rng, &SkillParams::at_level(level)));
    }
    skills
}

/// Generate 1-2 skills for an enemy of the given level.
pub fn generate_enemy_skills(rng: &mut GameRng, level: u32) -> Vec<Skill> {
    let count = rng.between(1, 2) as usize;
    generate_player_skills(rng, level, count)
}

/// Roll the optional status-effect attachment for a skill.
///
/// Chance is `min(0.3 + level * 0.02, 0.8)`. One effect is drawn from a
/// type-appropriate pool; magical damage first picks an element.
fn roll_status_effects(
    rng: &mut GameRng,
    effect_kind: EffectKind,
    damage_type: DamageType,
    level: u32,
) -> Vec<StatusPayload> {
    if !rng.chance(tables::status_chance(level)) {
        return Vec::new();
    }

    let payload = match (effect_kind, damage_type) {
        (EffectKind::Damage, DamageType::Physical) => {
            if rng.percent(50) {
                bleed(level)
            } else {
                StatusPayload::Stun { duration_s: 1 }
            }
        }
        (EffectKind::Damage, DamageType::Magical) => {
            let element = [
                Element::Fire,
                Element::Ice,
                Element::Lightning,
                Element::Arcane,
            ];
            match element[rng.below(4) as usize] {
                Element::Fire => burn(level),
                Element::Ice => {
                    if rng.percent(50) {
                        chill(level)
                    } else {
                        StatusPayload::Freeze {
                            duration_s: 2,
                            slow_percent: 30,
                        }
                    }
                }
                Element::Lightning => StatusPayload::Stun { duration_s: 1 },
                Element::Arcane => StatusPayload::Silence { duration_s: 2 },
            }
        }
        (EffectKind::Damage, DamageType::True) => decrease_stat(rng, level),
        (EffectKind::Heal, _) => StatusPayload::HealOverTime {
            duration_s: 3,
            hits: 3,
            amount: HOT_AMOUNTS[tables::tier_index(level, 8, HOT_AMOUNTS.len()) - 1],
        },
        (EffectKind::Buff, _) => {
            let stat = *rng
                .choose(&BUFFABLE_STATS)
                .unwrap_or(&game_core::StatKind::Attack);
            StatusPayload::IncreaseStat {
                stat,
                amount: BUFF_AMOUNTS[tables::tier_index(level, 5, BUFF_AMOUNTS.len()) - 1],
                duration_s: 3,
            }
        }
        (EffectKind::Debuff, _) => match rng.below(3) {
            0 => decrease_stat(rng, level),
            1 => StatusPayload::Silence { duration_s: 2 },
            _ => StatusPayload::Blind { duration_s: 2 },
        },
    };

    vec![payload]
}

fn dot_amount(level: u32) -> i32 {
    DOT_AMOUNTS[tables::tier_index(level, 10, DOT_AMOUNTS.len()) - 1]
}

fn burn(level: u32) -> StatusPayload {
    StatusPayload::Burn {
        duration_s: 3,
        hits: 3,
        amount: dot_amount(level),
    }
}

fn chill(level: u32) -> StatusPayload {
    StatusPayload::Chill {
        duration_s: 2,
        hits: 2,
        amount: dot_amount(level),
    }
}

fn bleed(level: u32) -> StatusPayload {
    StatusPayload::Bleed {
        duration_s: 4,
        hits: 4,
        amount: dot_amount(level),
    }
}

fn decrease_stat(rng: &mut GameRng, level: u32) -> StatusPayload {
    let stat = *rng
        .choose(&DEBUFFABLE_STATS)
        .unwrap_or(&game_core::StatKind::Attack);
    StatusPayload::DecreaseStat {
        stat,
        amount: DEBUFF_AMOUNTS[tables::tier_index(level, 7, DEBUFF_AMOUNTS.len()) - 1],
        duration_s: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_constraint_is_respected() {
        let mut rng = GameRng::new(21);
        for _ in 0..50 {
            let skill = generate_skill(&mut rng, &SkillParams::damage_at_level(10));
            assert_eq!(skill.effect.kind, EffectKind::Damage);
            assert_eq!(skill.effect.hits, 1);
            assert!(skill.is_active());
        }
    }

    #[test]
    fn costs_scale_with_level() {
        let mut rng = GameRng::new(22);
        let params_low = SkillParams {
            level: Some(1),
            effect: Some(EffectKind::Damage),
            damage_type: Some(DamageType::Magical),
            min_level: None,
        };
        let params_high = SkillParams {
            level: Some(40),
            ..params_low
        };
        let low = generate_skill(&mut rng, &params_low);
        let high = generate_skill(&mut rng, &params_high);
        assert!(high.mana_cost > low.mana_cost);
        assert!(high.effect.value > low.effect.value);
        assert_eq!(low.cooldown_s, high.cooldown_s);
        assert_eq!(low.action_cost, 30);
    }

    #[test]
    fn buff_skills_carry_matching_payload_when_attached() {
        let mut rng = GameRng::new(23);
        for _ in 0..100 {
            let skill = generate_skill(
                &mut rng,
                &SkillParams {
                    level: Some(30),
                    effect: Some(EffectKind::Buff),
                    damage_type: None,
                    min_level: None,
                },
            );
            for payload in &skill.status_effects {
                assert!(matches!(payload, StatusPayload::IncreaseStat { .. }));
            }
        }
    }

    #[test]
    fn first_player_skill_is_damage() {
        let mut rng = GameRng::new(24);
        let skills = generate_player_skills(&mut rng, 5, 3);
        assert_eq!(skills.len(), 3);
        assert_eq!(skills[0].effect.kind, EffectKind::Damage);
    }

    #[test]
    fn enemy_skill_count_in_range() {
        let mut rng = GameRng::new(25);
        for _ in 0..50 {
            let skills = generate_enemy_skills(&mut rng, 4);
            assert!((1..=2).contains(&skills.len()));
        }
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let params = SkillParams::at_level(9);
        let a = generate_skill(&mut GameRng::new(77), &params);
        let b = generate_skill(&mut GameRng::new(77), &params);
        assert_eq!(a, b);
    }

    #[test]
    fn min_level_defaults_to_level_minus_five() {
        let mut rng = GameRng::new(26);
        let skill = generate_skill(&mut rng, &SkillParams::at_level(12));
        assert_eq!(skill.level_required, 7);
        let low = generate_skill(&mut rng, &SkillParams::at_level(2));
        assert_eq!(low.level_required, 1);
    }
}
