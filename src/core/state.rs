//! Game state: the single value the state manager owns.
//!
//! ## GameState
//!
//! - Whose turn it is
//! - Counters for both players
//! - Every card instance with its location and order key
//! - The input each player is expected to give next
//! - Which activated abilities are currently enabled, per card instance
//! - The action log since the last reset
//!
//! All collections are `im` persistent structures, so handing a snapshot
//! to a reader is an O(1) clone.

use std::collections::BTreeMap;

use im::{OrdMap, Vector};
use serde::Serialize;

use super::action::ActionCode;
use super::config::GameConfig;
use super::counters::Counters;
use super::error::{EngineError, Result};
use super::mutation::Mutation;
use super::player::{PlayerId, PlayerMap};
use super::rng::ShuffleSource;
use crate::cards::{AbilityId, Catalog, InstanceId, Supply};
use crate::zones::{Area, Location, Moved, ZoneManager};

/// What input the engine expects next from a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub action: ActionCode,
    /// Card whose ability asked for this input.
    pub card_id: Option<InstanceId>,
}

impl Default for ActionRequest {
    fn default() -> Self {
        Self {
            action: ActionCode::None,
            card_id: None,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Player whose turn it is.
    pub turn: PlayerId,

    pub counters: PlayerMap<Counters>,

    /// Card instance -> location and order key.
    pub cards: ZoneManager,

    pub action_requests: PlayerMap<ActionRequest>,

    /// Card instance -> ability -> enabled.
    pub activated_abilities: OrdMap<InstanceId, BTreeMap<AbilityId, bool>>,

    /// Mutations applied since the last `ResetActionLog`.
    pub actions: Vector<Mutation>,
}

impl GameState {
    /// An empty table: no cards, first player to move.
    #[must_use]
    pub fn new(initial_authority: i64) -> Self {
        Self {
            turn: PlayerId::FIRST,
            counters: PlayerMap::new(|_| Counters::with_authority(initial_authority)),
            cards: ZoneManager::new(),
            action_requests: PlayerMap::with_default(),
            activated_abilities: OrdMap::new(),
            actions: Vector::new(),
        }
    }

    /// Mint every card instance of `catalog` into its starting zone.
    ///
    /// Starter cards are split between the two decks, the first half of
    /// each starter key going to the first player. Unlimited-supply cards
    /// form their own supply pile; everything else is the trade deck.
    #[must_use]
    pub fn setup(catalog: &Catalog, config: &GameConfig) -> Self {
        let mut state = Self::new(config.initial_authority);

        for entry in catalog.entries_sorted() {
            for n in 1..=entry.qty {
                let location = match entry.supply {
                    Supply::Starter if n <= entry.qty / 2 => Location::FirstPlayerDeck,
                    Supply::Starter => Location::SecondPlayerDeck,
                    Supply::Unlimited => Location::Explorers,
                    Supply::TradeDeck => Location::TradeDeck,
                };
                state.cards.place(InstanceId::new(entry.key, n), location);
            }
        }

        state
    }

    #[must_use]
    pub fn counters(&self, player: PlayerId) -> &Counters {
        &self.counters[player]
    }

    #[must_use]
    pub fn request(&self, player: PlayerId) -> &ActionRequest {
        &self.action_requests[player]
    }

    /// Cards `player` has in `area`, bottom first.
    #[must_use]
    pub fn cards_of(&self, player: PlayerId, area: Area) -> Vec<InstanceId> {
        self.cards.cards_in(Location::of(player, area))
    }

    #[must_use]
    pub fn is_ability_enabled(&self, card_id: &InstanceId, ability: AbilityId) -> bool {
        self.activated_abilities
            .get(card_id)
            .and_then(|abilities| abilities.get(&ability))
            .copied()
            .unwrap_or(false)
    }

    /// The player whose opponent has run out of authority, if any.
    ///
    /// The engine never ends the game by itself; hosts poll this.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::all()
            .find(|&player| self.counters[player.opponent()].authority <= 0)
    }

    /// Apply one mutation.
    ///
    /// Every mutation except `GetState` is appended to the action log
    /// before it takes effect. A `MoveCard` naming an unknown card is
    /// rejected without being logged. Drawing from an exhausted deck is
    /// not an error.
    pub fn apply(&mut self, mutation: Mutation, source: &mut ShuffleSource) -> Result<()> {
        if mutation.is_get_state() {
            return Ok(());
        }

        if let Mutation::MoveCard { id, to, .. } = &mutation {
            let from = self
                .cards
                .location_of(id)
                .ok_or_else(|| EngineError::InvalidCard(id.to_string()))?;
            self.actions.push_back(Mutation::MoveCard {
                id: id.clone(),
                from: Some(from),
                to: *to,
            });
            self.cards.move_card(id, *to)?;
            return Ok(());
        }

        self.actions.push_back(mutation.clone());

        match mutation {
            Mutation::ChangeCounter { player, counter, operation, value } => {
                self.counters[player].apply(counter, operation, value);
            }
            Mutation::TopCard { from, to } => {
                let moved = self.cards.top_card(from, to, source);
                if moved.last().map_or(true, |m| m.from != from || m.to != to) {
                    tracing::debug!(%from, %to, "nothing left to draw");
                }
                self.log_moves(moved);
            }
            Mutation::MoveAll { from, to } => {
                let moved = self.cards.move_all(from, to);
                self.log_moves(moved);
            }
            Mutation::ShuffleDeck { location } => {
                self.cards.shuffle(location, source);
            }
            Mutation::ChangeTurn => {
                self.turn = self.turn.opponent();
            }
            Mutation::RequestUserAction { player, action, card_id } => {
                self.action_requests[player] = ActionRequest { action, card_id };
            }
            Mutation::AddActivatedAbility { card_id, ability } => {
                let mut abilities = self.activated_abilities.get(&card_id).cloned().unwrap_or_default();
                abilities.insert(ability, true);
                self.activated_abilities.insert(card_id, abilities);
            }
            Mutation::DisableActivatedAbility { card_id, ability } => {
                let Some(mut abilities) = self.activated_abilities.get(&card_id).cloned() else {
                    tracing::debug!(card = %card_id, ?ability, "disabling ability that was never enabled");
                    return Ok(());
                };
                if let Some(enabled) = abilities.get_mut(&ability) {
                    *enabled = false;
                }
                self.activated_abilities.insert(card_id, abilities);
            }
            Mutation::ResetActivatedAbilities => {
                self.activated_abilities.clear();
            }
            Mutation::ResetActionLog => {
                self.actions.clear();
            }
            Mutation::MoveCard { .. } | Mutation::GetState => {}
        }

        Ok(())
    }

    fn log_moves(&mut self, moved: Vec<Moved>) {
        for Moved { id, from, to } in moved {
            self.actions.push_back(Mutation::MoveCard { id, from: Some(from), to });
        }
    }

    /// Encode as camelCase JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}
