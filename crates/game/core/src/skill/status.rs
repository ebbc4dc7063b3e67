//! Status-effect payloads attached to skills.
//!
//! Payloads are authored data: amounts are resolved at generation time, so
//! the resolver never consults tier tables. Durations are in seconds and
//! advance with scheduler deltas only.

use crate::skill::EffectKind;
use crate::stats::StatKind;

/// A status effect a skill may apply on hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum StatusPayload {
    /// Damage over time, `hits` ticks spread over `duration_s`.
    Poison {
        duration_s: u32,
        hits: u32,
        amount: i32,
    },
    Burn {
        duration_s: u32,
        hits: u32,
        amount: i32,
    },
    Chill {
        duration_s: u32,
        hits: u32,
        amount: i32,
    },
    Bleed {
        duration_s: u32,
        hits: u32,
        amount: i32,
    },
    /// Slows the target for the duration.
    Freeze { duration_s: u32, slow_percent: u32 },
    Stun { duration_s: u32 },
    Silence { duration_s: u32 },
    Blind { duration_s: u32 },
    /// Healing over time, `hits` ticks spread over `duration_s`.
    HealOverTime {
        duration_s: u32,
        hits: u32,
        amount: i32,
    },
    /// Immediate stat raise, tracked for the duration.
    IncreaseStat {
        stat: StatKind,
        amount: i32,
        duration_s: u32,
    },
    /// Immediate stat drop, tracked for the duration.
    DecreaseStat {
        stat: StatKind,
        amount: i32,
        duration_s: u32,
    },
}

impl StatusPayload {
    /// Short name used in events and logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatusPayload::Poison { .. } => "poison",
            StatusPayload::Burn { .. } => "burn",
            StatusPayload::Chill { .. } => "chill",
            StatusPayload::Bleed { .. } => "bleed",
            StatusPayload::Freeze { .. } => "freeze",
            StatusPayload::Stun { .. } => "stun",
            StatusPayload::Silence { .. } => "silence",
            StatusPayload::Blind { .. } => "blind",
            StatusPayload::HealOverTime { .. } => "heal_over_time",
            StatusPayload::IncreaseStat { .. } => "increase_stat",
            StatusPayload::DecreaseStat { .. } => "decrease_stat",
        }
    }

    /// Broad category the payload resolves into.
    pub const fn category(&self) -> EffectKind {
        match self {
            StatusPayload::Poison { .. }
            | StatusPayload::Burn { .. }
            | StatusPayload::Chill { .. }
            | StatusPayload::Bleed { .. } => EffectKind::Damage,
            StatusPayload::HealOverTime { .. } => EffectKind::Heal,
            StatusPayload::IncreaseStat { .. } => EffectKind::Buff,
            StatusPayload::Freeze { .. }
            | StatusPayload::Stun { .. }
            | StatusPayload::Silence { .. }
            | StatusPayload::Blind { .. }
            | StatusPayload::DecreaseStat { .. } => EffectKind::Debuff,
        }
    }

    /// Duration in seconds.
    pub const fn duration_s(&self) -> u32 {
        match self {
            StatusPayload::Poison { duration_s, .. }
            | StatusPayload::Burn { duration_s, .. }
            | StatusPayload::Chill { duration_s, .. }
            | StatusPayload::Bleed { duration_s, .. }
            | StatusPayload::Freeze { duration_s, .. }
            | StatusPayload::Stun { duration_s }
            | StatusPayload::Silence { duration_s }
            | StatusPayload::Blind { duration_s }
            | StatusPayload::HealOverTime { duration_s, .. }
            | StatusPayload::IncreaseStat { duration_s, .. }
            | StatusPayload::DecreaseStat { duration_s, .. } => *duration_s,
        }
    }

    /// Per-tick (or immediate) magnitude, when the payload has one.
    pub const fn amount(&self) -> Option<i32> {
        match self {
            StatusPayload::Poison { amount, .. }
            | StatusPayload::Burn { amount, .. }
            | StatusPayload::Chill { amount, .. }
            | StatusPayload::Bleed { amount, .. }
            | StatusPayload::HealOverTime { amount, .. }
            | StatusPayload::IncreaseStat { amount, .. }
            | StatusPayload::DecreaseStat { amount, .. } => Some(*amount),
            _ => None,
        }
    }

    /// Tick count for over-time payloads.
    pub const fn hits(&self) -> Option<u32> {
        match self {
            StatusPayload::Poison { hits, .. }
            | StatusPayload::Burn { hits, .. }
            | StatusPayload::Chill { hits, .. }
            | StatusPayload::Bleed { hits, .. }
            | StatusPayload::HealOverTime { hits, .. } => Some(*hits),
            _ => None,
        }
    }
}
