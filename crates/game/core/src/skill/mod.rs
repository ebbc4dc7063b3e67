//! Skills.
//!
//! A skill bundles a direct effect (damage/heal/buff/debuff), resource and
//! scheduling costs, and optional status-effect payloads that the combat
//! resolver turns into tracked instances.

pub mod status;

use strum::EnumIter;

use crate::item::ObjectId;
pub use status::StatusPayload;

/// Active skills require activation; passive skills are always on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    Active,
    Passive,
}

/// Damage classification for damage skills.
///
/// Higher tiers cost more mana and schedule slower: physical < magical < true.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageType {
    /// Mitigated by defense, scales with the attack rating.
    Physical,
    /// Mitigated by defense, scales with the magic rating.
    Magical,
    /// Deterministic, bypasses mitigation entirely.
    True,
}

impl DamageType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DamageType::Physical => "physical",
            DamageType::Magical => "magical",
            DamageType::True => "true",
        }
    }
}

impl core::fmt::Display for DamageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a skill does when it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    Damage,
    Heal,
    Buff,
    Debuff,
}

impl EffectKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Damage => "damage",
            EffectKind::Heal => "heal",
            EffectKind::Buff => "buff",
            EffectKind::Debuff => "debuff",
        }
    }
}

impl core::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The direct-hit effect of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillEffect {
    pub kind: EffectKind,
    /// Damage dealt, hp healed, or stat delta magnitude.
    pub value: i32,
    /// Buff/debuff duration in seconds; 0 for instantaneous effects.
    pub duration_s: u32,
    /// Hit count for damage/heal effects.
    pub hits: u32,
}

/// A skill owned by a character or enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub level: u32,
    pub level_required: u32,
    pub kind: SkillKind,
    pub damage_type: DamageType,
    pub mana_cost: i32,
    /// Real cooldown in seconds, aged by scheduler deltas.
    pub cooldown_s: u32,
    /// Scheduler cost: how far this action pushes the user's next turn.
    pub action_cost: u32,
    pub effect: SkillEffect,
    pub status_effects: Vec<StatusPayload>,
}

impl Skill {
    /// True when the skill can be triggered from a combat slot.
    pub const fn is_active(&self) -> bool {
        matches!(self.kind, SkillKind::Active)
    }
}
