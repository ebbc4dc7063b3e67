//! Name and description pools for generated content.

use game_core::{DamageType, EffectKind};

pub const PHYSICAL_SKILL_NAMES: [&str; 8] = [
    "Slash", "Cleave", "Smash", "Strike", "Bash", "Pummel", "Crush", "Stab",
];

pub const MAGICAL_SKILL_NAMES: [&str; 7] = [
    "Fireball",
    "Ice Spike",
    "Lightning Bolt",
    "Arcane Missile",
    "Frost Nova",
    "Flame Burst",
    "Thunder Strike",
];

pub const TRUE_SKILL_NAMES: [&str; 5] = [
    "Divine Strike",
    "Void Blast",
    "Soul Pierce",
    "Ethereal Cut",
    "Cosmic Ray",
];

pub const HEAL_SKILL_NAMES: [&str; 6] = [
    "Healing Touch",
    "Rejuvenate",
    "Mend Wounds",
    "Life Surge",
    "Divine Blessing",
    "Renew",
];

pub const BUFF_SKILL_NAMES: [&str; 6] = [
    "Fortify",
    "Empower",
    "Battle Trance",
    "Arcane Intellect",
    "Divine Shield",
    "Valor",
];

pub const DEBUFF_SKILL_NAMES: [&str; 6] = [
    "Weaken",
    "Enfeeble",
    "Curse",
    "Sap Strength",
    "Vulnerability",
    "Hex",
];

pub const PHYSICAL_DESCRIPTIONS: [&str; 3] = [
    "A powerful strike that deals physical damage.",
    "Attacks the enemy with brute force.",
    "Delivers a devastating blow to the opponent.",
];

pub const MAGICAL_DESCRIPTIONS: [&str; 3] = [
    "Summons magical energy to damage the enemy.",
    "Channels arcane power into a devastating spell.",
    "Conjures elemental forces to strike the opponent.",
];

pub const TRUE_DESCRIPTIONS: [&str; 3] = [
    "A special attack that bypasses defense.",
    "Deals damage directly to the enemy's essence.",
    "An attack that cannot be mitigated by conventional means.",
];

pub const HEAL_DESCRIPTIONS: [&str; 3] = [
    "Restores health points.",
    "Channels healing energy to mend wounds.",
    "A soothing spell that repairs injuries.",
];

pub const BUFF_DESCRIPTIONS: [&str; 3] = [
    "Enhances abilities for a limited time.",
    "Temporarily boosts performance in battle.",
    "Grants superior capabilities for a short duration.",
];

pub const DEBUFF_DESCRIPTIONS: [&str; 3] = [
    "Weakens the enemy's capabilities.",
    "Reduces the opponent's combat effectiveness.",
    "Hampers the target's ability to fight.",
];

pub const ENEMY_NAMES: [&str; 8] = [
    "Slime", "Goblin", "Bat", "Skeleton", "Wolf", "Bandit", "Imp", "Wraith",
];

/// Name pool for a skill of the given shape.
pub fn skill_names(kind: EffectKind, damage_type: DamageType) -> &'static [&'static str] {
    match kind {
        EffectKind::Damage => match damage_type {
            DamageType::Physical => &PHYSICAL_SKILL_NAMES,
            DamageType::Magical => &MAGICAL_SKILL_NAMES,
            DamageType::True => &TRUE_SKILL_NAMES,
        },
        EffectKind::Heal => &HEAL_SKILL_NAMES,
        EffectKind::Buff => &BUFF_SKILL_NAMES,
        EffectKind::Debuff => &DEBUFF_SKILL_NAMES,
    }
}

/// Description pool for a skill of the given shape.
pub fn skill_descriptions(kind: EffectKind, damage_type: DamageType) -> &'static [&'static str] {
    match kind {
        EffectKind::Damage => match damage_type {
            DamageType::Physical => &PHYSICAL_DESCRIPTIONS,
            DamageType::Magical => &MAGICAL_DESCRIPTIONS,
            DamageType::True => &TRUE_DESCRIPTIONS,
        },
        EffectKind::Heal => &HEAL_DESCRIPTIONS,
        EffectKind::Buff => &BUFF_DESCRIPTIONS,
        EffectKind::Debuff => &DEBUFF_DESCRIPTIONS,
    }
}
