//! Combat events.
//!
//! The resolver does not notify anyone: every action returns the ordered
//! list of events it produced, and the caller forwards them to whatever
//! transport it likes. This keeps the resolver free of presentation
//! concerns and makes action outcomes directly assertable in tests.

use super::schedule::Combatant;
use crate::item::ObjectId;
use crate::skill::EffectKind;
use crate::stats::StatKind;

/// How a combat session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
    Fled,
}

impl CombatOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CombatOutcome::Victory => "victory",
            CombatOutcome::Defeat => "defeat",
            CombatOutcome::Fled => "fled",
        }
    }
}

impl core::fmt::Display for CombatOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One thing that happened during combat resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum CombatEvent {
    /// An entity's ticket came up.
    TurnStarted { entity: Combatant },

    DamageDealt {
        attacker: Combatant,
        target: Combatant,
        amount: i32,
        /// Skill name when the damage came from a skill.
        skill: Option<String>,
    },

    HealApplied {
        target: Combatant,
        amount: i32,
        skill: Option<String>,
    },

    ManaSpent { entity: Combatant, amount: i32 },

    ManaGained { entity: Combatant, amount: i32 },

    /// A stat was changed by a buff or debuff payload.
    StatChanged {
        target: Combatant,
        stat: StatKind,
        delta: i32,
        duration_s: u32,
    },

    /// A status effect started being tracked.
    StatusApplied {
        target: Combatant,
        effect: ObjectId,
        label: &'static str,
        kind: EffectKind,
        duration_s: u32,
        amount: i32,
    },

    /// A tracked over-time effect delivered damage or healing.
    EffectTicked {
        target: Combatant,
        effect: ObjectId,
        label: &'static str,
        kind: EffectKind,
        amount: i32,
    },

    /// A tracked effect ran out.
    EffectExpired {
        target: Combatant,
        effect: ObjectId,
        label: &'static str,
    },

    FleeAttempted { chance: i32, success: bool },

    /// The turn queue was found empty mid-combat and reseeded.
    ScheduleReseeded,

    /// Terminal transition. Coins/xp are non-zero only for victories.
    Ended {
        outcome: CombatOutcome,
        coins: i64,
        xp: i64,
    },
}
