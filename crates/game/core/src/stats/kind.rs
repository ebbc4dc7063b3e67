//! Stat keys.
//!
//! Every stat that equipment or status effects can modify is addressed
//! through [`StatKind`], an exhaustive enum dispatch. This replaces
//! stringly-keyed stat maps: an unknown key is unrepresentable and the
//! compiler enforces that every stat is handled.

use strum::EnumIter;

/// A modifiable stat key.
///
/// Current hp/mana are deliberately absent: they are resources with their own
/// bounds, mutated through [`super::Stats`] resource methods, never through
/// generic stat writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    MaxHp,
    MaxMana,
    Attack,
    Defense,
    Speed,
    Magic,
    CritChance,
    CritDamage,
}

impl StatKind {
    /// Stats that apply directly without resource bookkeeping.
    pub const DIRECT: [StatKind; 6] = [
        StatKind::Attack,
        StatKind::Defense,
        StatKind::Speed,
        StatKind::Magic,
        StatKind::CritChance,
        StatKind::CritDamage,
    ];

    /// True for the resource maximums, whose changes drag the matching
    /// current value along.
    pub const fn is_resource_max(&self) -> bool {
        matches!(self, StatKind::MaxHp | StatKind::MaxMana)
    }

    /// Display name as used in combat logs and item tooltips.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatKind::MaxHp => "max_hp",
            StatKind::MaxMana => "max_mana",
            StatKind::Attack => "attack",
            StatKind::Defense => "defense",
            StatKind::Speed => "speed",
            StatKind::Magic => "magic",
            StatKind::CritChance => "crit_chance",
            StatKind::CritDamage => "crit_damage",
        }
    }
}

impl core::fmt::Display for StatKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
