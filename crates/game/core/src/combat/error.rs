//! Combat action errors.
//!
//! Every variant is a rejected action: the session state is exactly as it
//! was before the call, and no turn was consumed.

use super::event::CombatOutcome;
use crate::error::{ErrorSeverity, GameError};
use crate::item::ObjectId;

/// Errors from player-facing combat actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// The session already reached a terminal state.
    #[error("combat is over ({0})")]
    Over(CombatOutcome),

    #[error("it is not the player's turn")]
    NotPlayersTurn,

    #[error("skill {0} is not owned by the player")]
    UnknownSkill(ObjectId),

    #[error("skill {0} is passive and cannot be activated")]
    PassiveSkill(ObjectId),

    #[error("skill {id} is on cooldown ({remaining_ticks} ticks left)")]
    OnCooldown { id: ObjectId, remaining_ticks: i64 },

    #[error("not enough mana: need {need}, have {have}")]
    InsufficientMana { need: i32, have: i32 },

    #[error("item {0} is not in a consumable slot")]
    NotInConsumableSlot(ObjectId),

    #[error("consumable {0} is missing from the inventory")]
    MissingConsumable(ObjectId),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        use CombatError::*;
        match self {
            Over(_) | NotPlayersTurn => ErrorSeverity::Recoverable,
            OnCooldown { .. } | InsufficientMana { .. } => ErrorSeverity::Recoverable,
            UnknownSkill(_) | PassiveSkill(_) | NotInConsumableSlot(_) => ErrorSeverity::Validation,
            MissingConsumable(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CombatError::*;
        match self {
            Over(_) => "COMBAT_OVER",
            NotPlayersTurn => "COMBAT_NOT_PLAYERS_TURN",
            UnknownSkill(_) => "COMBAT_UNKNOWN_SKILL",
            PassiveSkill(_) => "COMBAT_PASSIVE_SKILL",
            OnCooldown { .. } => "COMBAT_SKILL_ON_COOLDOWN",
            InsufficientMana { .. } => "COMBAT_INSUFFICIENT_MANA",
            NotInConsumableSlot(_) => "COMBAT_NOT_IN_CONSUMABLE_SLOT",
            MissingConsumable(_) => "COMBAT_MISSING_CONSUMABLE",
        }
    }
}
