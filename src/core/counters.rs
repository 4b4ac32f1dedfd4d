//! Per-player counters.

use serde::{Deserialize, Serialize};

/// A named per-player counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Counter {
    Trade,
    Combat,
    Authority,
    /// Cards the player still has to discard at the start of their turn.
    Discard,
    /// Ships bought while this is positive go on top of the deck.
    ShipsOnTop,
    /// While set, every ship played grants one extra combat.
    FleetBonus,
    /// Blob cards played this turn.
    Blobs,
}

/// How a counter changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Increase,
    Decrease,
    Set,
}

/// One player's counters.
///
/// No counter is clamped: authority and combat may go negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    pub trade: i64,
    pub combat: i64,
    pub authority: i64,
    pub discard: i64,
    pub ships_on_top: i64,
    pub fleet_bonus: i64,
    pub blobs: i64,
}

impl Counters {
    /// Fresh counters with the given starting authority.
    #[must_use]
    pub fn with_authority(authority: i64) -> Self {
        Self {
            authority,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn get(&self, counter: Counter) -> i64 {
        match counter {
            Counter::Trade => self.trade,
            Counter::Combat => self.combat,
            Counter::Authority => self.authority,
            Counter::Discard => self.discard,
            Counter::ShipsOnTop => self.ships_on_top,
            Counter::FleetBonus => self.fleet_bonus,
            Counter::Blobs => self.blobs,
        }
    }

    fn slot(&mut self, counter: Counter) -> &mut i64 {
        match counter {
            Counter::Trade => &mut self.trade,
            Counter::Combat => &mut self.combat,
            Counter::Authority => &mut self.authority,
            Counter::Discard => &mut self.discard,
            Counter::ShipsOnTop => &mut self.ships_on_top,
            Counter::FleetBonus => &mut self.fleet_bonus,
            Counter::Blobs => &mut self.blobs,
        }
    }

    /// Apply an operation to one counter, saturating at the `i64` bounds.
    pub fn apply(&mut self, counter: Counter, operation: Operation, value: i64) {
        let slot = self.slot(counter);
        match operation {
            Operation::Increase => *slot = slot.saturating_add(value),
            Operation::Decrease => *slot = slot.saturating_sub(value),
            Operation::Set => *slot = value,
        }
    }
}
