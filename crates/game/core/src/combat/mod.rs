//! Turn-based combat.
//!
//! - [`schedule`]: speed-weighted ticket queue deciding who acts next
//! - [`effects`]: tracked status-effect instances aged by scheduler deltas
//! - [`session`]: the combat state machine resolving actions into events
//! - [`event`]: the outbound event list returned from every resolver call
//! - [`error`]: typed action rejections

pub mod effects;
pub mod error;
pub mod event;
pub mod schedule;
pub mod session;

pub use effects::{EffectExpiry, EffectInstance, EffectPulse, EffectTickOutcome, EffectTracker};
pub use error::CombatError;
pub use event::{CombatEvent, CombatOutcome};
pub use schedule::{Combatant, TurnSchedule, TurnTicket};
pub use session::{CombatPhase, CombatSession, TurnReport, VictoryRewards};
