//! Tracked status-effect instances.
//!
//! Session-scoped timers created from [`crate::skill::StatusPayload`]s.
//! Timers advance only with scheduler deltas. An instance with a tick
//! interval delivers its per-tick amount every interval; pure timers
//! (stun, silence, tracked buffs) just count down. Instances are discarded
//! when their duration runs out.

use arrayvec::ArrayVec;

use super::schedule::Combatant;
use crate::config::GameConfig;
use crate::item::ObjectId;
use crate::skill::{EffectKind, StatusPayload};

/// One live status effect on a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectInstance {
    pub id: ObjectId,
    pub target: Combatant,
    pub kind: EffectKind,
    /// Short label for events ("burn", "increase_stat", ...).
    pub label: &'static str,
    /// Ticks left before the instance expires.
    pub remaining: i64,
    /// Ticks between deliveries; 0 for pure timers.
    pub interval: i64,
    /// Ticks accumulated since the last delivery.
    pub elapsed: i64,
    /// Amount delivered per interval (damage or heal), 0 for pure timers.
    pub per_tick: i32,
}

impl EffectInstance {
    /// Build an instance from an authored payload.
    ///
    /// Over-time payloads spread `hits` deliveries evenly across the
    /// duration. Everything else becomes a pure timer.
    pub fn from_payload(id: ObjectId, target: Combatant, payload: &StatusPayload) -> Self {
        let duration = payload.duration_s() as i64 * GameConfig::TICKS_PER_SECOND as i64;
        let (interval, per_tick) = match payload.hits() {
            Some(hits) if hits > 0 => (
                (duration / hits as i64).max(1),
                payload.amount().unwrap_or(0),
            ),
            _ => (0, 0),
        };
        Self {
            id,
            target,
            kind: payload.category(),
            label: payload.as_str(),
            remaining: duration.max(1),
            interval,
            elapsed: 0,
            per_tick,
        }
    }
}

/// A delivery produced while advancing the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectPulse {
    pub id: ObjectId,
    pub target: Combatant,
    pub kind: EffectKind,
    pub label: &'static str,
    /// Total amount for this delta (several intervals may have elapsed).
    pub amount: i32,
}

/// An instance that ran out during an advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectExpiry {
    pub id: ObjectId,
    pub target: Combatant,
    pub label: &'static str,
}

/// What happened during one tracker advance.
#[derive(Clone, Debug, Default)]
pub struct EffectTickOutcome {
    pub pulses: Vec<EffectPulse>,
    pub expired: Vec<EffectExpiry>,
}

/// All tracked instances of one combat session.
#[derive(Clone, Debug, Default)]
pub struct EffectTracker {
    effects: ArrayVec<EffectInstance, { GameConfig::MAX_TRACKED_EFFECTS }>,
}

impl EffectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new instance. Silently dropped when the tracker is full.
    pub fn register(&mut self, instance: EffectInstance) -> bool {
        if self.effects.is_full() {
            return false;
        }
        self.effects.push(instance);
        true
    }

    /// Advance every timer by the scheduler delta.
    ///
    /// For each instance: accumulate elapsed time, deliver
    /// `floor(elapsed / interval)` pulses worth of amount, keep the
    /// remainder, then drop the instance once its duration is exhausted.
    pub fn advance(&mut self, delta: u64) -> EffectTickOutcome {
        let mut outcome = EffectTickOutcome::default();
        if delta == 0 {
            return outcome;
        }

        for effect in &mut self.effects {
            effect.remaining -= delta as i64;
            if effect.interval > 0 {
                effect.elapsed += delta as i64;
                let deliveries = effect.elapsed / effect.interval;
                if deliveries > 0 {
                    effect.elapsed -= deliveries * effect.interval;
                    outcome.pulses.push(EffectPulse {
                        id: effect.id,
                        target: effect.target,
                        kind: effect.kind,
                        label: effect.label,
                        amount: effect.per_tick.saturating_mul(deliveries as i32),
                    });
                }
            }
        }

        self.effects.retain(|effect| {
            if effect.remaining <= 0 {
                outcome.expired.push(EffectExpiry {
                    id: effect.id,
                    target: effect.target,
                    label: effect.label,
                });
                false
            } else {
                true
            }
        });

        outcome
    }

    pub fn active(&self) -> &[EffectInstance] {
        &self.effects
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burn() -> StatusPayload {
        StatusPayload::Burn {
            duration_s: 3,
            hits: 3,
            amount: 5,
        }
    }

    #[test]
    fn dot_delivers_per_interval() {
        let mut tracker = EffectTracker::new();
        let instance = EffectInstance::from_payload(ObjectId(1), Combatant::Enemy, &burn());
        // 3 seconds = 30 ticks, 3 hits => one delivery every 10 ticks.
        assert_eq!(instance.interval, 10);
        tracker.register(instance);

        let outcome = tracker.advance(10);
        assert_eq!(outcome.pulses.len(), 1);
        assert_eq!(outcome.pulses[0].amount, 5);
        assert!(outcome.expired.is_empty());
    }

    #[test]
    fn large_delta_batches_deliveries() {
        let mut tracker = EffectTracker::new();
        tracker.register(EffectInstance::from_payload(
            ObjectId(1),
            Combatant::Enemy,
            &burn(),
        ));

        // 25 ticks = two full intervals, 5 ticks carried over.
        let outcome = tracker.advance(25);
        assert_eq!(outcome.pulses.len(), 1);
        assert_eq!(outcome.pulses[0].amount, 10);
        assert!(outcome.expired.is_empty());
    }

    #[test]
    fn instance_expires_after_duration() {
        let mut tracker = EffectTracker::new();
        tracker.register(EffectInstance::from_payload(
            ObjectId(1),
            Combatant::Enemy,
            &burn(),
        ));

        let outcome = tracker.advance(30);
        assert_eq!(outcome.pulses[0].amount, 15);
        assert_eq!(outcome.expired.len(), 1);
        assert!(tracker.is_empty());
    }

    #[test]
    fn pure_timer_never_pulses() {
        let mut tracker = EffectTracker::new();
        tracker.register(EffectInstance::from_payload(
            ObjectId(2),
            Combatant::Enemy,
            &StatusPayload::Stun { duration_s: 1 },
        ));

        let outcome = tracker.advance(5);
        assert!(outcome.pulses.is_empty());
        let outcome = tracker.advance(5);
        assert!(outcome.pulses.is_empty());
        assert_eq!(outcome.expired.len(), 1);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut tracker = EffectTracker::new();
        tracker.register(EffectInstance::from_payload(
            ObjectId(1),
            Combatant::Enemy,
            &burn(),
        ));
        let outcome = tracker.advance(0);
        assert!(outcome.pulses.is_empty());
        assert!(outcome.expired.is_empty());
        assert!(!tracker.is_empty());
    }
}
