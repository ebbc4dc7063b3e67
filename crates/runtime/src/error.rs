//! Runtime errors.

use game_core::{CharacterError, CombatError, ErrorSeverity, GameError};

/// Errors surfaced by the runtime layer.
///
/// Core errors pass through unchanged; the runtime adds session-level
/// conditions (overlapping actions, missing/duplicate combat sessions,
/// malformed snapshots).
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Another action is still in progress; overlapping calls are rejected,
    /// never queued, so a single user action cannot apply twice.
    #[error("another action is already in progress")]
    Busy,

    #[error("no combat session is active")]
    NoActiveCombat,

    #[error("a combat session is already active")]
    CombatInProgress,

    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    /// A persisted snapshot failed to parse. The load is aborted and the
    /// in-memory character is left untouched.
    #[error("malformed character snapshot: {0}")]
    MalformedSnapshot(String),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Busy => ErrorSeverity::Recoverable,
            RuntimeError::NoActiveCombat | RuntimeError::CombatInProgress => {
                ErrorSeverity::Validation
            }
            RuntimeError::Character(inner) => inner.severity(),
            RuntimeError::Combat(inner) => inner.severity(),
            RuntimeError::MalformedSnapshot(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Busy => "RUNTIME_BUSY",
            RuntimeError::NoActiveCombat => "RUNTIME_NO_ACTIVE_COMBAT",
            RuntimeError::CombatInProgress => "RUNTIME_COMBAT_IN_PROGRESS",
            RuntimeError::Character(inner) => inner.error_code(),
            RuntimeError::Combat(inner) => inner.error_code(),
            RuntimeError::MalformedSnapshot(_) => "RUNTIME_MALFORMED_SNAPSHOT",
        }
    }
}
