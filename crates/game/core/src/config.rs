//! Game configuration constants.
//!
//! Centralizes tuning values and hard limits used across the crate. Keeping
//! them in one place makes the balance surface auditable and lets tests
//! reference the same numbers the systems use.

/// Compile-time game configuration.
///
/// These values define the rules of the game and are not meant to be
/// user-configurable at runtime.
pub struct GameConfig;

impl GameConfig {
    // ========================================================================
    // Character Limits
    // ========================================================================

    /// Number of active skill slots per character.
    pub const MAX_SKILL_SLOTS: usize = 4;

    /// Number of equipped consumable slots per character.
    pub const MAX_CONSUMABLE_SLOTS: usize = 4;

    /// Inventory capacity a fresh character starts with.
    pub const STARTING_INVENTORY_SLOTS: usize = 10;

    /// Base/direct stats are clamped to this value on writes.
    pub const STAT_CAP: i32 = 10_000;

    /// Upper bound on simultaneously tracked status-effect instances
    /// per combat session.
    pub const MAX_TRACKED_EFFECTS: usize = 16;

    // ========================================================================
    // Progression
    // ========================================================================

    /// Base xp requirement at level 0; requirement grows geometrically.
    pub const XP_BASE: f64 = 100.0;

    /// Per-level growth factor of the xp requirement.
    pub const XP_GROWTH: f64 = 1.1;

    /// Stat points granted per level-up.
    pub const LEVEL_UP_STAT_POINTS: u32 = 3;

    /// Coin cost of the first purchasable inventory slot; doubles per slot.
    pub const CAPACITY_BASE_COST: i64 = 50;

    /// Flat mana restored by a normal attack before the intellect bonus.
    pub const MANA_GAIN_BASE: i32 = 5;

    // ========================================================================
    // Turn Scheduling
    // ========================================================================

    /// Scheduler cost of a normal attack.
    pub const ATTACK_COST: u32 = 20;

    /// Scheduler cost of a failed flee attempt.
    pub const FLEE_FAIL_COST: u32 = 15;

    /// Scheduler cost of drinking a consumable.
    pub const CONSUMABLE_COST: u32 = 20;

    /// Scheduler cost of an enemy's plain attack.
    pub const ENEMY_ATTACK_COST: u32 = 20;

    /// Scheduler ticks corresponding to one second of effect duration.
    ///
    /// Skill cooldowns and status-effect timers are authored in seconds but
    /// advance only with scheduler deltas, never wall-clock time.
    pub const TICKS_PER_SECOND: u64 = 10;

    // ========================================================================
    // Combat Resolution
    // ========================================================================

    /// Percent chance that an enemy with skills uses one on its turn.
    pub const ENEMY_SKILL_CHANCE: u32 = 40;

    /// Flee chance bounds (percent).
    pub const FLEE_MIN_CHANCE: i32 = 10;
    pub const FLEE_MAX_CHANCE: i32 = 90;

    /// Victory coin reward range (inclusive).
    pub const VICTORY_COINS_MIN: i64 = 10;
    pub const VICTORY_COINS_MAX: i64 = 20;

    /// Victory xp reward range (inclusive).
    pub const VICTORY_XP_MIN: i64 = 10;
    pub const VICTORY_XP_MAX: i64 = 20;

    /// Chance that a victory yields any equipment drops at all.
    pub const LOOT_DROP_CHANCE: f64 = 0.5;

    /// Maximum number of equipment drops from a single victory.
    pub const LOOT_MAX_DROPS: u32 = 3;
}
