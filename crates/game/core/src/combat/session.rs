//! Combat session state machine.
//!
//! A session owns a deep-copied player snapshot and an enemy, resolves one
//! player action at a time, and automatically drains enemy turns until the
//! player is up again or the session terminates. Each action returns a
//! [`TurnReport`] carrying the ordered events it produced; the session never
//! notifies anyone directly.
//!
//! States: `Ongoing`, `Victory`, `Defeat`, `Fled`. The transition is
//! evaluated after every action; exactly one terminal state ends a session
//! and latches it, so rewards cannot be granted twice.

use std::collections::HashMap;

use super::effects::{EffectInstance, EffectTracker};
use super::error::CombatError;
use super::event::{CombatEvent, CombatOutcome};
use super::schedule::{Combatant, TurnSchedule, TurnTicket};
use crate::character::{Character, Enemy, InventoryEntry};
use crate::config::GameConfig;
use crate::item::{ItemKind, ObjectId, RestoreKind};
use crate::rng::GameRng;
use crate::skill::{DamageType, EffectKind, Skill, StatusPayload};
use crate::stats::derived;

/// Session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatPhase {
    Ongoing,
    Victory,
    Defeat,
    Fled,
}

impl CombatPhase {
    pub const fn outcome(&self) -> Option<CombatOutcome> {
        match self {
            CombatPhase::Ongoing => None,
            CombatPhase::Victory => Some(CombatOutcome::Victory),
            CombatPhase::Defeat => Some(CombatOutcome::Defeat),
            CombatPhase::Fled => Some(CombatOutcome::Fled),
        }
    }

    pub const fn is_over(&self) -> bool {
        !matches!(self, CombatPhase::Ongoing)
    }
}

/// Result of one resolved action: what happened, and where the session is now.
#[derive(Clone, Debug)]
pub struct TurnReport {
    pub events: Vec<CombatEvent>,
    pub phase: CombatPhase,
}

/// Victory rewards rolled exactly once at the terminal transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VictoryRewards {
    pub coins: i64,
    pub xp: i64,
}

/// A turn-based combat encounter between the player and one enemy.
pub struct CombatSession {
    player: Character,
    enemy: Enemy,
    schedule: TurnSchedule,
    effects: EffectTracker,
    /// Player skill cooldowns in scheduler ticks, session-scoped.
    cooldowns: HashMap<ObjectId, i64>,
    phase: CombatPhase,
    current: Combatant,
    rewards: Option<VictoryRewards>,
    rng: GameRng,
}

impl CombatSession {
    /// Seed a session from snapshots.
    ///
    /// The player is expected to be a clone of the canonical record; the
    /// session mutates only its own copies.
    pub fn new(player: Character, enemy: Enemy, rng: GameRng) -> Self {
        let player_speed = derived::speed(&player.stats, &player.bonus);
        let schedule = TurnSchedule::seeded(player_speed, enemy.stats.speed);
        Self {
            player,
            enemy,
            schedule,
            effects: EffectTracker::new(),
            cooldowns: HashMap::new(),
            phase: CombatPhase::Ongoing,
            current: Combatant::Player,
            rewards: None,
            rng,
        }
    }

    /// Resolve the opening of combat: advance to the first actor and, if the
    /// enemy is faster, let it act until the player is up.
    pub fn start(&mut self) -> TurnReport {
        let mut events = Vec::new();
        self.run_until_player(&mut events);
        self.report(events)
    }

    // ========================================================================
    // Player actions
    // ========================================================================

    /// Basic attack: random portion of the effective attack rating minus the
    /// enemy's defense, never below 1. Restores a flat chunk of mana.
    pub fn normal_attack(&mut self) -> Result<TurnReport, CombatError> {
        self.ensure_player_turn()?;
        let mut events = Vec::new();

        let attack = derived::attack(&self.player.stats, &self.player.bonus);
        let roll = self.rng.unit() * attack as f64;
        let damage = (roll - self.enemy.stats.defense as f64).max(1.0).floor() as i32;
        self.enemy.stats.take_damage(damage);
        events.push(CombatEvent::DamageDealt {
            attacker: Combatant::Player,
            target: Combatant::Enemy,
            amount: damage,
            skill: None,
        });

        let gained = self.player.stats.gain_mana(derived::mana_gain(&self.player.bonus));
        if gained > 0 {
            events.push(CombatEvent::ManaGained {
                entity: Combatant::Player,
                amount: gained,
            });
        }

        self.schedule_player(GameConfig::ATTACK_COST);
        self.run_until_player(&mut events);
        Ok(self.report(events))
    }

    /// Activate an equipped skill.
    ///
    /// Validation order: session ongoing, player's turn, skill owned, skill
    /// active, off cooldown, mana sufficient. Any failure rejects the action
    /// with no state change and no turn consumed.
    pub fn use_skill(&mut self, id: ObjectId) -> Result<TurnReport, CombatError> {
        self.ensure_player_turn()?;

        let skill = self
            .player
            .skill(id)
            .cloned()
            .ok_or(CombatError::UnknownSkill(id))?;
        if !skill.is_active() {
            return Err(CombatError::PassiveSkill(id));
        }
        if let Some(&remaining) = self.cooldowns.get(&id) {
            if remaining > 0 {
                return Err(CombatError::OnCooldown {
                    id,
                    remaining_ticks: remaining,
                });
            }
        }
        if self.player.stats.mana < skill.mana_cost {
            return Err(CombatError::InsufficientMana {
                need: skill.mana_cost,
                have: self.player.stats.mana,
            });
        }

        let mut events = Vec::new();
        self.player.stats.spend_mana(skill.mana_cost);
        events.push(CombatEvent::ManaSpent {
            entity: Combatant::Player,
            amount: skill.mana_cost,
        });

        self.resolve_skill(Combatant::Player, &skill, &mut events);

        self.cooldowns.insert(
            id,
            skill.cooldown_s as i64 * GameConfig::TICKS_PER_SECOND as i64,
        );
        self.schedule_player(skill.action_cost);
        self.run_until_player(&mut events);
        Ok(self.report(events))
    }

    /// Drink a consumable from an equipped quick slot.
    pub fn use_consumable(&mut self, id: ObjectId) -> Result<TurnReport, CombatError> {
        self.ensure_player_turn()?;

        if !self.player.equipped_consumables.contains(&Some(id)) {
            return Err(CombatError::NotInConsumableSlot(id));
        }
        let restore = match self.player.inventory_entry(id) {
            Some(InventoryEntry::Item(item)) if item.kind == ItemKind::Consumable => item.restore,
            _ => return Err(CombatError::MissingConsumable(id)),
        };

        let mut events = Vec::new();
        if let Some(restore) = restore {
            match restore.kind {
                RestoreKind::Hp => {
                    let healed = self.player.stats.heal(restore.amount);
                    events.push(CombatEvent::HealApplied {
                        target: Combatant::Player,
                        amount: healed,
                        skill: None,
                    });
                }
                RestoreKind::Mana => {
                    let gained = self.player.stats.gain_mana(restore.amount);
                    events.push(CombatEvent::ManaGained {
                        entity: Combatant::Player,
                        amount: gained,
                    });
                }
            }
        }

        self.player.remove_from_inventory(id);
        for slot in self.player.equipped_consumables.iter_mut() {
            if *slot == Some(id) {
                *slot = None;
            }
        }

        self.schedule_player(GameConfig::CONSUMABLE_COST);
        self.run_until_player(&mut events);
        Ok(self.report(events))
    }

    /// Attempt to run. One roll; failure still consumes a (cheap) turn.
    pub fn flee(&mut self) -> Result<TurnReport, CombatError> {
        self.ensure_player_turn()?;
        let mut events = Vec::new();

        let player_speed = derived::speed(&self.player.stats, &self.player.bonus);
        let chance = (player_speed - self.enemy.stats.speed + 50)
            .clamp(GameConfig::FLEE_MIN_CHANCE, GameConfig::FLEE_MAX_CHANCE);
        let success = (self.rng.below(100) as i32) < chance;
        events.push(CombatEvent::FleeAttempted { chance, success });

        if success {
            self.phase = CombatPhase::Fled;
            events.push(CombatEvent::Ended {
                outcome: CombatOutcome::Fled,
                coins: 0,
                xp: 0,
            });
        } else {
            self.schedule_player(GameConfig::FLEE_FAIL_COST);
            self.run_until_player(&mut events);
        }
        Ok(self.report(events))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    /// Entity whose turn it currently is.
    pub fn current_turn(&self) -> Combatant {
        self.current
    }

    /// Pending tickets in resolution order, for turn-order displays.
    pub fn turn_order(&self) -> &[TurnTicket] {
        self.schedule.pending()
    }

    /// Victory rewards, present exactly when the session ended in victory.
    pub fn rewards(&self) -> Option<VictoryRewards> {
        self.rewards
    }

    /// Tracked status-effect instances.
    pub fn active_effects(&self) -> &[EffectInstance] {
        self.effects.active()
    }

    /// Consume the session, yielding the final player snapshot for commit.
    pub fn into_player(self) -> Character {
        self.player
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn ensure_player_turn(&self) -> Result<(), CombatError> {
        if let Some(outcome) = self.phase.outcome() {
            return Err(CombatError::Over(outcome));
        }
        if self.current != Combatant::Player {
            return Err(CombatError::NotPlayersTurn);
        }
        Ok(())
    }

    fn report(&self, events: Vec<CombatEvent>) -> TurnReport {
        TurnReport {
            events,
            phase: self.phase,
        }
    }

    fn schedule_player(&mut self, base_cost: u32) {
        let speed = derived::speed(&self.player.stats, &self.player.bonus);
        self.schedule.insert(Combatant::Player, base_cost, speed);
    }

    /// Drive the schedule until it is the player's turn or combat is over.
    fn run_until_player(&mut self, events: &mut Vec<CombatEvent>) {
        loop {
            if self.check_termination(events) {
                return;
            }

            let Some((ticket, delta)) = self.schedule.advance() else {
                // The queue must never run dry mid-combat; repair and retry.
                self.reseed(events);
                continue;
            };

            self.age_cooldowns(delta);
            self.apply_effect_ticks(delta, events);
            if self.check_termination(events) {
                return;
            }

            self.current = ticket.entity;
            events.push(CombatEvent::TurnStarted {
                entity: ticket.entity,
            });

            match ticket.entity {
                Combatant::Player => return,
                Combatant::Enemy => self.enemy_act(events),
            }
        }
    }

    fn reseed(&mut self, events: &mut Vec<CombatEvent>) {
        let player_speed = derived::speed(&self.player.stats, &self.player.bonus);
        self.schedule = TurnSchedule::seeded(player_speed, self.enemy.stats.speed);
        events.push(CombatEvent::ScheduleReseeded);
    }

    fn age_cooldowns(&mut self, delta: u64) {
        if delta == 0 {
            return;
        }
        for remaining in self.cooldowns.values_mut() {
            *remaining -= delta as i64;
        }
        self.cooldowns.retain(|_, remaining| *remaining > 0);
    }

    fn apply_effect_ticks(&mut self, delta: u64, events: &mut Vec<CombatEvent>) {
        let outcome = self.effects.advance(delta);
        for pulse in outcome.pulses {
            let amount = match pulse.kind {
                EffectKind::Damage => {
                    let stats = self.stats_of_mut(pulse.target);
                    stats.take_damage(pulse.amount)
                }
                EffectKind::Heal => {
                    let stats = self.stats_of_mut(pulse.target);
                    stats.heal(pulse.amount)
                }
                // Tracked buffs/debuffs are pure timers; nothing to deliver.
                EffectKind::Buff | EffectKind::Debuff => continue,
            };
            events.push(CombatEvent::EffectTicked {
                target: pulse.target,
                effect: pulse.id,
                label: pulse.label,
                kind: pulse.kind,
                amount,
            });
        }
        for expiry in outcome.expired {
            events.push(CombatEvent::EffectExpired {
                target: expiry.target,
                effect: expiry.id,
                label: expiry.label,
            });
        }
    }

    /// Evaluate the terminal transition. Runs before resolving whose turn is
    /// next and latches the first terminal state it finds.
    fn check_termination(&mut self, events: &mut Vec<CombatEvent>) -> bool {
        if self.phase.is_over() {
            return true;
        }

        if self.enemy.stats.hp <= 0 {
            self.phase = CombatPhase::Victory;
            let rewards = VictoryRewards {
                coins: self
                    .rng
                    .between(GameConfig::VICTORY_COINS_MIN, GameConfig::VICTORY_COINS_MAX),
                xp: self
                    .rng
                    .between(GameConfig::VICTORY_XP_MIN, GameConfig::VICTORY_XP_MAX),
            };
            self.rewards = Some(rewards);
            events.push(CombatEvent::Ended {
                outcome: CombatOutcome::Victory,
                coins: rewards.coins,
                xp: rewards.xp,
            });
            return true;
        }

        if self.player.stats.hp <= 0 {
            self.phase = CombatPhase::Defeat;
            events.push(CombatEvent::Ended {
                outcome: CombatOutcome::Defeat,
                coins: 0,
                xp: 0,
            });
            return true;
        }

        false
    }

    /// Enemy AI: with skills and a 40% roll, use a random skill; otherwise a
    /// plain deterministic attack. Enemies pay no mana and ignore cooldowns.
    fn enemy_act(&mut self, events: &mut Vec<CombatEvent>) {
        let skill = if !self.enemy.skills.is_empty()
            && self.rng.percent(GameConfig::ENEMY_SKILL_CHANCE)
        {
            self.rng.choose(&self.enemy.skills).cloned()
        } else {
            None
        };

        let action_cost = match skill {
            Some(skill) => {
                let cost = skill.action_cost;
                self.resolve_skill(Combatant::Enemy, &skill, events);
                cost
            }
            None => {
                let damage = (self.enemy.stats.attack - self.player.stats.defense).max(1);
                self.player.stats.take_damage(damage);
                events.push(CombatEvent::DamageDealt {
                    attacker: Combatant::Enemy,
                    target: Combatant::Player,
                    amount: damage,
                    skill: None,
                });
                GameConfig::ENEMY_ATTACK_COST
            }
        };

        self.schedule
            .insert(Combatant::Enemy, action_cost, self.enemy.stats.speed);
    }

    /// Resolve a skill's direct effect and register its status payloads.
    /// Shared by both combatants; `actor` determines the formula inputs and
    /// which side each payload lands on.
    fn resolve_skill(&mut self, actor: Combatant, skill: &Skill, events: &mut Vec<CombatEvent>) {
        let target = actor.opponent();

        match skill.effect.kind {
            EffectKind::Damage => {
                let damage = self.roll_skill_damage(actor, skill);
                self.stats_of_mut(target).take_damage(damage);
                events.push(CombatEvent::DamageDealt {
                    attacker: actor,
                    target,
                    amount: damage,
                    skill: Some(skill.name.clone()),
                });
            }
            EffectKind::Heal => {
                let healed = self.stats_of_mut(actor).heal(skill.effect.value);
                events.push(CombatEvent::HealApplied {
                    target: actor,
                    amount: healed,
                    skill: Some(skill.name.clone()),
                });
            }
            // Buffs and debuffs act entirely through their attached
            // status payloads, applied below.
            EffectKind::Buff | EffectKind::Debuff => {}
        }

        for payload in &skill.status_effects {
            self.apply_payload(actor, payload, events);
        }
    }

    /// Damage roll for a skill, by damage type:
    /// - physical: random portion of (attack rating + skill value), mitigated
    /// - magical: random portion of (magic rating + skill value), mitigated
    /// - true: deterministic attack rating + skill value, unmitigated
    ///
    /// All floors at 1.
    fn roll_skill_damage(&mut self, actor: Combatant, skill: &Skill) -> i32 {
        let (attack, magic) = match actor {
            Combatant::Player => (
                derived::attack(&self.player.stats, &self.player.bonus),
                derived::magic(&self.player.stats, &self.player.bonus),
            ),
            Combatant::Enemy => (self.enemy.stats.attack, self.enemy.stats.magic),
        };
        let defense = self.stats_of(actor.opponent()).defense;

        match skill.damage_type {
            DamageType::Physical => {
                let roll = self.rng.unit() * (attack + skill.effect.value) as f64;
                (roll - defense as f64).max(1.0).floor() as i32
            }
            DamageType::Magical => {
                let roll = self.rng.unit() * (magic + skill.effect.value) as f64;
                (roll - defense as f64).max(1.0).floor() as i32
            }
            DamageType::True => (attack + skill.effect.value).max(1),
        }
    }

    /// Register a status payload as a tracked instance.
    ///
    /// Stat-changing payloads mutate the stat block immediately; the tracked
    /// duration only times the bookkeeping entry and expiry does not revert
    /// the change. Beneficial payloads land on the actor, hostile ones on
    /// the opponent.
    fn apply_payload(
        &mut self,
        actor: Combatant,
        payload: &StatusPayload,
        events: &mut Vec<CombatEvent>,
    ) {
        let target = match payload.category() {
            EffectKind::Heal | EffectKind::Buff => actor,
            EffectKind::Damage | EffectKind::Debuff => actor.opponent(),
        };

        match *payload {
            StatusPayload::IncreaseStat { stat, amount, duration_s } => {
                self.stats_of_mut(target).add(stat, amount);
                events.push(CombatEvent::StatChanged {
                    target,
                    stat,
                    delta: amount,
                    duration_s,
                });
            }
            StatusPayload::DecreaseStat { stat, amount, duration_s } => {
                self.stats_of_mut(target).add(stat, -amount);
                events.push(CombatEvent::StatChanged {
                    target,
                    stat,
                    delta: -amount,
                    duration_s,
                });
            }
            _ => {}
        }

        let id = crate::item::ObjectId(self.rng.next_id());
        let instance = EffectInstance::from_payload(id, target, payload);
        self.effects.register(instance);
        events.push(CombatEvent::StatusApplied {
            target,
            effect: id,
            label: payload.as_str(),
            kind: payload.category(),
            duration_s: payload.duration_s(),
            amount: payload.amount().unwrap_or(0),
        });
    }

    fn stats_of(&self, combatant: Combatant) -> &crate::stats::Stats {
        match combatant {
            Combatant::Player => &self.player.stats,
            Combatant::Enemy => &self.enemy.stats,
        }
    }

    fn stats_of_mut(&mut self, combatant: Combatant) -> &mut crate::stats::Stats {
        match combatant {
            Combatant::Player => &mut self.player.stats,
            Combatant::Enemy => &mut self.enemy.stats,
        }
    }
}
