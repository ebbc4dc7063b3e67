//! Speed-weighted turn scheduling.
//!
//! The schedule is an ordered list of tickets on an absolute timeline.
//! Popping the lowest ticket rebases the rest, so remaining numbers always
//! express "time until that entity acts". Faster entities pay less per
//! action and therefore act more often.

/// A combat participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combatant {
    Player,
    Enemy,
}

impl Combatant {
    pub const fn opponent(&self) -> Combatant {
        match self {
            Combatant::Player => Combatant::Enemy,
            Combatant::Enemy => Combatant::Player,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Combatant::Player => "player",
            Combatant::Enemy => "enemy",
        }
    }
}

impl core::fmt::Display for Combatant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled turn: which entity acts, and when on the absolute timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnTicket {
    pub entity: Combatant,
    pub at: u64,
}

/// Ordered turn queue.
///
/// Invariant: tickets are sorted ascending by `at`; at most one ticket per
/// entity is pending between resolutions.
#[derive(Clone, Debug, Default)]
pub struct TurnSchedule {
    tickets: Vec<TurnTicket>,
}

impl TurnSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the queue at combat start: both combatants at 0, the faster one
    /// first. Ties keep insertion order, so the player wins an exact tie.
    pub fn seeded(player_speed: i32, enemy_speed: i32) -> Self {
        let mut schedule = Self::new();
        if enemy_speed > player_speed {
            schedule.tickets.push(TurnTicket { entity: Combatant::Enemy, at: 0 });
            schedule.tickets.push(TurnTicket { entity: Combatant::Player, at: 0 });
        } else {
            schedule.tickets.push(TurnTicket { entity: Combatant::Player, at: 0 });
            schedule.tickets.push(TurnTicket { entity: Combatant::Enemy, at: 0 });
        }
        schedule
    }

    /// Speed factor applied to action costs: `max(0.5, 100 / (speed + 50))`.
    ///
    /// Speed 50 is neutral; the factor bottoms out at 0.5 from speed 150 up.
    pub fn speed_factor(speed: i32) -> f64 {
        let speed = speed.max(0) as f64;
        (100.0 / (speed + 50.0)).max(0.5)
    }

    /// Schedule an entity's next turn after an action of the given base cost.
    ///
    /// The new ticket lands at `max(existing) + max(1, floor(cost * factor))`
    /// and is inserted before the first strictly greater ticket, so equal
    /// numbers resolve first-inserted-first.
    pub fn insert(&mut self, entity: Combatant, base_cost: u32, speed: i32) {
        let adjusted = ((base_cost as f64 * Self::speed_factor(speed)).floor() as u64).max(1);
        let horizon = self.tickets.iter().map(|t| t.at).max().unwrap_or(0);
        let at = horizon + adjusted;
        let position = self
            .tickets
            .iter()
            .position(|t| t.at > at)
            .unwrap_or(self.tickets.len());
        self.tickets.insert(position, TurnTicket { entity, at });
    }

    /// Pop the next ticket and rebase the rest of the timeline.
    ///
    /// Returns the ticket and the elapsed delta (the popped ticket's number);
    /// the caller uses the delta to age cooldowns and status-effect timers.
    /// Returns `None` on an empty schedule, which the session treats as a
    /// consistency violation and repairs by reseeding.
    pub fn advance(&mut self) -> Option<(TurnTicket, u64)> {
        if self.tickets.is_empty() {
            return None;
        }
        let ticket = self.tickets.remove(0);
        let delta = ticket.at;
        for remaining in &mut self.tickets {
            remaining.at -= delta;
        }
        Some((ticket, delta))
    }

    /// Pending tickets in resolution order.
    pub fn pending(&self) -> &[TurnTicket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
