//! Session orchestration on top of `game-core`.
//!
//! The runtime owns the canonical [`Character`](game_core::Character) record
//! through [`CharacterStore`], an explicit context object handed to whoever
//! needs character access rather than a global, and drives combat encounters
//! through [`GameRuntime`]. Presentation layers consume the event lists
//! returned from every call; nothing here pushes notifications.

pub mod error;
pub mod session;
pub mod store;

pub use error::RuntimeError;
pub use session::{ActionOutcome, CombatStarted, GameRuntime};
pub use store::{CharacterPatch, CharacterStore};
