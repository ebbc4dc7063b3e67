//! Procedural content generation.
//!
//! Produces randomized [`Equipment`](game_core::Equipment),
//! [`Item`](game_core::Item), [`Skill`](game_core::Skill) and
//! [`Enemy`](game_core::Enemy) instances parameterized by level and weighted
//! rarity. All entry points take a `&mut GameRng`; given a fixed seed the
//! output is fully reproducible, while production callers seed from entropy.

pub mod enemy;
pub mod equipment;
pub mod item;
pub mod names;
pub mod skill;
pub mod tables;

pub use enemy::generate_enemy;
pub use equipment::{EquipmentParams, generate_equipment};
pub use item::{ItemParams, generate_item};
pub use skill::{SkillParams, generate_enemy_skills, generate_player_skills, generate_skill};
