//! Combat orchestration.
//!
//! [`GameRuntime`] seeds combat sessions from the store's snapshot, forwards
//! player actions, commits the snapshot back at every turn boundary, and on
//! victory applies rewards through the progression calculator plus loot from
//! the generator.

use game_core::{
    Character, CombatEvent, CombatPhase, CombatSession, Enemy, Equipment, GameConfig, GameRng,
    InventoryEntry, ObjectId, ProgressEvent, TurnReport, TurnTicket,
};
use game_gen::{EquipmentParams, generate_enemy, generate_equipment};
use tracing::{debug, info, warn};

use crate::error::RuntimeError;
use crate::store::CharacterStore;

/// Snapshot pair and opening events handed to presentation at combat start.
#[derive(Clone, Debug)]
pub struct CombatStarted {
    pub player: Character,
    pub enemy: Enemy,
    pub turn_order: Vec<TurnTicket>,
    pub events: Vec<CombatEvent>,
}

/// Everything one resolved action produced.
#[derive(Clone, Debug)]
pub struct ActionOutcome {
    /// Combat events in resolution order.
    pub events: Vec<CombatEvent>,
    pub phase: CombatPhase,
    /// Progression events from terminal rewards (xp, level-ups, coins).
    pub progress: Vec<ProgressEvent>,
    /// Equipment dropped on victory.
    pub loot: Vec<Equipment>,
    /// Message shown on unfavorable endings.
    pub penalty: Option<String>,
}

/// Session orchestrator: owns the store, the RNG and the active combat.
pub struct GameRuntime {
    store: CharacterStore,
    rng: GameRng,
    combat: Option<CombatSession>,
}

impl GameRuntime {
    pub fn new(store: CharacterStore, rng: GameRng) -> Self {
        Self {
            store,
            rng,
            combat: None,
        }
    }

    pub fn store(&self) -> &CharacterStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CharacterStore {
        &mut self.store
    }

    pub fn in_combat(&self) -> bool {
        self.combat.is_some()
    }

    // ========================================================================
    // Session lifecycle
    // ========================================================================

    /// Start combat against a freshly generated enemy near the player level.
    pub fn encounter(&mut self) -> Result<CombatStarted, RuntimeError> {
        let level = self.store.character().level;
        let enemy = generate_enemy(&mut self.rng, level);
        self.start_combat(enemy)
    }

    /// Start combat against the given enemy.
    ///
    /// The session gets a deep copy of the character record and its own RNG
    /// stream; the canonical record is only touched at commit points.
    pub fn start_combat(&mut self, enemy: Enemy) -> Result<CombatStarted, RuntimeError> {
        if self.combat.is_some() {
            return Err(RuntimeError::CombatInProgress);
        }

        info!(enemy = %enemy.name, enemy_level = enemy.level, "combat started");
        let session_rng = GameRng::new(self.rng.next_id());
        let mut session = CombatSession::new(self.store.snapshot(), enemy, session_rng);
        let report = session.start();

        let started = CombatStarted {
            player: session.player().clone(),
            enemy: session.enemy().clone(),
            turn_order: session.turn_order().to_vec(),
            events: report.events,
        };
        self.combat = Some(session);

        // The enemy may have won outright before the player's first turn.
        if report.phase.is_over() {
            let report = TurnReport {
                events: Vec::new(),
                phase: report.phase,
            };
            self.settle(report)?;
        }

        Ok(started)
    }

    // ========================================================================
    // Player actions
    // ========================================================================

    pub fn attack(&mut self) -> Result<ActionOutcome, RuntimeError> {
        let session = self.combat.as_mut().ok_or(RuntimeError::NoActiveCombat)?;
        let report = session.normal_attack()?;
        debug!("player attacked");
        self.settle(report)
    }

    pub fn use_skill(&mut self, id: ObjectId) -> Result<ActionOutcome, RuntimeError> {
        let session = self.combat.as_mut().ok_or(RuntimeError::NoActiveCombat)?;
        let report = session.use_skill(id)?;
        debug!(skill = %id, "player used skill");
        self.settle(report)
    }

    pub fn use_consumable(&mut self, id: ObjectId) -> Result<ActionOutcome, RuntimeError> {
        let session = self.combat.as_mut().ok_or(RuntimeError::NoActiveCombat)?;
        let report = session.use_consumable(id)?;
        debug!(item = %id, "player used consumable");
        self.settle(report)
    }

    pub fn flee(&mut self) -> Result<ActionOutcome, RuntimeError> {
        let session = self.combat.as_mut().ok_or(RuntimeError::NoActiveCombat)?;
        let report = session.flee()?;
        self.settle(report)
    }

    /// Turn order of the active session, for display.
    pub fn turn_order(&self) -> Result<Vec<TurnTicket>, RuntimeError> {
        let session = self.combat.as_ref().ok_or(RuntimeError::NoActiveCombat)?;
        Ok(session.turn_order().to_vec())
    }

    /// Whose turn it is in the active session.
    pub fn current_turn(&self) -> Result<game_core::Combatant, RuntimeError> {
        let session = self.combat.as_ref().ok_or(RuntimeError::NoActiveCombat)?;
        Ok(session.current_turn())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Commit the per-turn snapshot and, on a terminal phase, apply rewards
    /// and tear the session down.
    fn settle(&mut self, report: TurnReport) -> Result<ActionOutcome, RuntimeError> {
        let Some(session) = self.combat.as_ref() else {
            return Err(RuntimeError::NoActiveCombat);
        };

        if report
            .events
            .iter()
            .any(|event| matches!(event, CombatEvent::ScheduleReseeded))
        {
            warn!("turn queue ran dry mid-combat; reseeded defensively");
        }

        let mut outcome = ActionOutcome {
            events: report.events,
            phase: report.phase,
            progress: Vec::new(),
            loot: Vec::new(),
            penalty: None,
        };

        if !report.phase.is_over() {
            // Per-turn sync point.
            self.store.commit(session.player().clone())?;
            return Ok(outcome);
        }

        // Terminal commit: take the session apart and settle rewards.
        let Some(session) = self.combat.take() else {
            return Err(RuntimeError::NoActiveCombat);
        };
        let rewards = session.rewards();
        let final_snapshot = session.into_player();
        self.store.commit(final_snapshot)?;

        match report.phase {
            CombatPhase::Victory => {
                if let Some(rewards) = rewards {
                    outcome
                        .progress
                        .extend(self.store.gain_coins(rewards.coins)?);
                    outcome.progress.extend(self.store.gain_xp(rewards.xp)?);
                }
                outcome.loot = self.roll_loot()?;
                info!(
                    coins = rewards.map_or(0, |r| r.coins),
                    xp = rewards.map_or(0, |r| r.xp),
                    drops = outcome.loot.len(),
                    "combat won"
                );
            }
            CombatPhase::Defeat => {
                outcome.penalty = Some("You lost the battle".to_string());
                info!("combat lost");
            }
            CombatPhase::Fled => {
                info!("combat fled");
            }
            CombatPhase::Ongoing => {}
        }

        Ok(outcome)
    }

    /// Victory drops: one 50% gate, then 0-3 pieces at the player's level.
    /// Drops that no longer fit the inventory are discarded.
    fn roll_loot(&mut self) -> Result<Vec<Equipment>, RuntimeError> {
        if !self.rng.chance(GameConfig::LOOT_DROP_CHANCE) {
            return Ok(Vec::new());
        }

        let count = self.rng.between(0, GameConfig::LOOT_MAX_DROPS as i64);
        let level = self.store.character().level;
        let mut drops = Vec::new();
        for _ in 0..count {
            let gear = generate_equipment(&mut self.rng, &EquipmentParams::at_level(level));
            match self
                .store
                .add_to_inventory(InventoryEntry::Equipment(gear.clone()))
            {
                Ok(()) => drops.push(gear),
                Err(_) => {
                    warn!("inventory full; dropping remaining loot");
                    break;
                }
            }
        }
        Ok(drops)
    }
}
