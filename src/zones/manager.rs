//! Zone manager for card locations and ordering.
//!
//! The `ZoneManager` tracks where every card instance is and in which
//! order. Each card carries an order key that is unique within its zone;
//! the highest key is the top of the zone. Keys are handed out from a
//! per-zone counter that only grows, so keys need not be contiguous.
//!
//! It supports:
//! - Drawing the top card, recycling the owner's discard pile into an
//!   empty deck first
//! - Moving one card or a whole zone
//! - Shuffling a zone by permuting its existing keys

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::location::{Area, Location};
use crate::cards::InstanceId;
use crate::core::error::{EngineError, Result};
use crate::core::rng::ShuffleSource;

/// Where a card is and where it sits in that zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub location: Location,
    pub order_key: u32,
}

/// One card relocation, reported so callers can log it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Moved {
    pub id: InstanceId,
    pub from: Location,
    pub to: Location,
}

/// Manages card locations across zones.
///
/// Backed by a persistent map so cloning a snapshot is O(1).
///
/// ## Usage
///
/// ```
/// use star_realms_engine::cards::InstanceId;
/// use star_realms_engine::core::ShuffleSource;
/// use star_realms_engine::zones::{Location, ZoneManager};
///
/// let mut zones = ZoneManager::new();
/// zones.place(InstanceId::new("scout", 1), Location::FirstPlayerDeck);
/// zones.place(InstanceId::new("viper", 1), Location::FirstPlayerDeck);
///
/// let moved = zones.top_card(Location::FirstPlayerDeck, Location::FirstPlayerHand, &mut ShuffleSource::Entropy);
/// assert_eq!(moved[0].id, InstanceId::new("viper", 1));
/// ```
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ZoneManager {
    cards: im::OrdMap<InstanceId, Placement>,

    #[serde(skip)]
    last_key: FxHashMap<Location, u32>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_key(&mut self, location: Location) -> u32 {
        let key = self.last_key.entry(location).or_insert(0);
        *key += 1;
        *key
    }

    /// Put a card on top of `location`, creating it if it is new.
    pub fn place(&mut self, id: InstanceId, location: Location) {
        let order_key = self.next_key(location);
        self.cards.insert(id, Placement { location, order_key });
    }

    /// Total number of card instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &InstanceId) -> bool {
        self.cards.contains_key(id)
    }

    #[must_use]
    pub fn placement(&self, id: &InstanceId) -> Option<Placement> {
        self.cards.get(id).copied()
    }

    #[must_use]
    pub fn location_of(&self, id: &InstanceId) -> Option<Location> {
        self.cards.get(id).map(|p| p.location)
    }

    /// Iterate over every (card, placement) pair in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&InstanceId, &Placement)> {
        self.cards.iter()
    }

    /// Cards in `location`, bottom first.
    #[must_use]
    pub fn cards_in(&self, location: Location) -> Vec<InstanceId> {
        let mut found: Vec<(u32, &InstanceId)> = self
            .cards
            .iter()
            .filter(|(_, p)| p.location == location)
            .map(|(id, p)| (p.order_key, id))
            .collect();
        found.sort_unstable_by_key(|(key, _)| *key);
        found.into_iter().map(|(_, id)| id.clone()).collect()
    }

    #[must_use]
    pub fn count_in(&self, location: Location) -> usize {
        self.cards.values().filter(|p| p.location == location).count()
    }

    /// The card with the highest order key in `location`.
    #[must_use]
    pub fn top_of(&self, location: Location) -> Option<InstanceId> {
        self.cards
            .iter()
            .filter(|(_, p)| p.location == location)
            .max_by_key(|(_, p)| p.order_key)
            .map(|(id, _)| id.clone())
    }

    /// Move one card to the top of `to`.
    pub fn move_card(&mut self, id: &InstanceId, to: Location) -> Result<Moved> {
        let from = self
            .location_of(id)
            .ok_or_else(|| EngineError::InvalidCard(id.to_string()))?;
        let order_key = self.next_key(to);
        self.cards.insert(id.clone(), Placement { location: to, order_key });
        Ok(Moved { id: id.clone(), from, to })
    }

    /// Move every card of `from` onto `to`, keeping their relative order.
    pub fn move_all(&mut self, from: Location, to: Location) -> Vec<Moved> {
        let mut moved = Vec::new();
        if from == to {
            return moved;
        }
        for id in self.cards_in(from) {
            let order_key = self.next_key(to);
            self.cards.insert(id.clone(), Placement { location: to, order_key });
            moved.push(Moved { id, from, to });
        }
        moved
    }

    /// Randomly permute the order keys already used in `location`.
    pub fn shuffle(&mut self, location: Location, source: &mut ShuffleSource) {
        let ids = self.cards_in(location);
        if ids.len() < 2 {
            return;
        }
        let mut keys: Vec<u32> = ids
            .iter()
            .filter_map(|id| self.cards.get(id).map(|p| p.order_key))
            .collect();
        source.next_rng().shuffle(&mut keys);
        for (id, order_key) in ids.into_iter().zip(keys) {
            self.cards.insert(id, Placement { location, order_key });
        }
    }

    /// Move the top card of `from` to `to`.
    ///
    /// An empty player deck is first refilled from that player's discard
    /// pile and shuffled. Returns every relocation performed, the drawn
    /// card last; an empty result means there was nothing to draw.
    pub fn top_card(&mut self, from: Location, to: Location, source: &mut ShuffleSource) -> Vec<Moved> {
        let mut moved = Vec::new();

        if self.count_in(from) == 0 {
            if let Some(owner) = from.deck_owner() {
                moved = self.move_all(Location::of(owner, Area::Discard), from);
                if !moved.is_empty() {
                    self.shuffle(from, source);
                }
            }
        }

        if let Some(id) = self.top_of(from) {
            let order_key = self.next_key(to);
            self.cards.insert(id.clone(), Placement { location: to, order_key });
            moved.push(Moved { id, from, to });
        }

        moved
    }
}
