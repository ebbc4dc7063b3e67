//! Deterministic combat rules and data types shared across the workspace.
//!
//! `game-core` defines the canonical model (stats, items, skills, characters)
//! and the systems that mutate it: the progression calculator, the
//! speed-weighted turn scheduler and the combat resolver. All combat mutation
//! flows through [`combat::CombatSession`], which returns the resulting event
//! list instead of notifying anyone itself. Supporting crates depend on the
//! types re-exported here.
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod item;
pub mod rng;
pub mod skill;
pub mod stats;

pub use character::{
    Character, CharacterError, Enemy, EquipmentSlots, InventoryEntry, ProgressEvent, xp_required,
};
pub use combat::{
    CombatError, CombatEvent, CombatOutcome, CombatPhase, CombatSession, Combatant,
    EffectInstance, EffectTracker, TurnReport, TurnSchedule, TurnTicket, VictoryRewards,
};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use item::{
    EquipSlot, Equipment, GearStats, Item, ItemKind, ObjectId, Rarity, Restore, RestoreKind,
    StatLine,
};
pub use rng::GameRng;
pub use skill::{DamageType, EffectKind, Skill, SkillEffect, SkillKind, StatusPayload};
pub use stats::{Attribute, BonusPoints, StatKind, Stats};
