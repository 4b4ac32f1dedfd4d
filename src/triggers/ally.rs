//! Ally trigger bookkeeping.
//!
//! The first card of a faction played in a turn unlocks that faction's
//! ally bonus but does not get it itself: its ally abilities wait in a
//! queue. The next card of the same faction resolves its own ally
//! abilities together with everything queued, and the queue is emptied.
//! Later cards of that faction resolve their ally abilities at once.

use rustc_hash::FxHashMap;

use crate::cards::{Ability, Faction, InstanceId};
use crate::core::PlayerId;

/// An ally ability waiting for (or due for) resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAlly {
    pub ability: Ability,
    /// Card the ability belongs to.
    pub source: InstanceId,
    /// Player who played the card.
    pub player: PlayerId,
}

/// Per-faction unlock flags and queued ally abilities for one turn.
///
/// ## Example
///
/// ```
/// use star_realms_engine::cards::{Ability, Faction, InstanceId};
/// use star_realms_engine::core::{Counter, PlayerId};
/// use star_realms_engine::effects::Effect;
/// use star_realms_engine::triggers::{AllyState, PendingAlly};
///
/// let ally = |n| PendingAlly {
///     ability: Ability::ally(Effect::gain(Counter::Combat, 2)),
///     source: InstanceId::new("tradePod", n),
///     player: PlayerId::FIRST,
/// };
///
/// let mut allies = AllyState::new();
/// assert!(allies.register(Faction::Blob, vec![ally(1)]).is_empty());
/// assert_eq!(allies.register(Faction::Blob, vec![ally(2)]).len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AllyState {
    unlocked: FxHashMap<Faction, bool>,
    pending: FxHashMap<Faction, Vec<PendingAlly>>,
}

impl AllyState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_unlocked(&self, faction: Faction) -> bool {
        self.unlocked.get(&faction).copied().unwrap_or(false)
    }

    /// Ally abilities queued for `faction`.
    #[must_use]
    pub fn pending(&self, faction: Faction) -> &[PendingAlly] {
        self.pending.get(&faction).map_or(&[], Vec::as_slice)
    }

    /// Record a card of `faction` coming into play with `abilities` as
    /// its ally abilities. Returns the ally abilities due now.
    pub fn register(&mut self, faction: Faction, abilities: Vec<PendingAlly>) -> Vec<PendingAlly> {
        if !faction.has_allies() {
            return Vec::new();
        }

        if self.is_unlocked(faction) {
            let mut due = abilities;
            due.extend(self.pending.remove(&faction).unwrap_or_default());
            due
        } else {
            self.unlocked.insert(faction, true);
            self.pending.entry(faction).or_default().extend(abilities);
            Vec::new()
        }
    }

    /// Unlock every faction, returning all queued abilities.
    pub fn unlock_all(&mut self) -> Vec<PendingAlly> {
        let mut due = Vec::new();
        for faction in Faction::ALLIED {
            self.unlocked.insert(faction, true);
            due.extend(self.pending.remove(&faction).unwrap_or_default());
        }
        due
    }

    /// Forget everything about `faction` for this turn.
    pub fn revoke(&mut self, faction: Faction) {
        self.unlocked.remove(&faction);
        self.pending.remove(&faction);
    }

    pub fn reset(&mut self) {
        self.unlocked.clear();
        self.pending.clear();
    }
}
