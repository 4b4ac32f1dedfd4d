//! The rules engine: one client action in, an ordered mutation list out.
//!
//! ## Flow
//!
//! 1. Resolve the deferred play, if a before-play prompt was outstanding
//! 2. Parse `code[,arg]*` and dispatch it to its handler
//! 3. Close with `GetState` so every action yields a fresh snapshot
//!
//! Handlers only read the snapshot they are given. Nothing they emit is
//! visible until the state manager has applied it, so two mutations of
//! one resolution never observe each other.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::cards::{CardEntry, Catalog, InstanceId};
use crate::core::{
    ActionCode, EngineError, GameConfig, GameState, Mutation, PlayerId, Result, UserAction,
};
use crate::triggers::{AllyState, PendingAlly};
use crate::zones::{Area, Location};

/// Outcome of handling one action.
///
/// `mutations` always ends with `GetState`, even when the action was
/// rejected; `outcome` says whether it was.
#[derive(Debug)]
pub struct Resolution {
    pub mutations: Vec<Mutation>,
    pub outcome: Result<()>,
}

impl Resolution {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_ok()
    }

    #[must_use]
    pub fn error(&self) -> Option<&EngineError> {
        self.outcome.as_ref().err()
    }
}

/// The one-step deferred call for two-phase cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PendingPlay {
    #[default]
    Idle,
    /// `card` was played with a before-play prompt; its own abilities
    /// resolve at the start of the next action, whatever that is.
    AwaitingBeforePlayResolution { card: InstanceId, player: PlayerId },
}

/// Translates raw actions into mutations.
///
/// Holds the per-turn state that is not part of [`GameState`]: ally
/// triggers, the deferred play slot, and which card each stealth needle
/// copies this turn.
pub struct RulesEngine {
    pub(super) catalog: Arc<Catalog>,
    pub(super) config: GameConfig,
    pub(super) allies: AllyState,
    pub(super) pending: PendingPlay,
    /// Needle instance -> catalog key of the ship it copies.
    pub(super) mimics: FxHashMap<InstanceId, &'static str>,
}

impl RulesEngine {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: GameConfig) -> Self {
        Self {
            catalog,
            config,
            allies: AllyState::new(),
            pending: PendingPlay::Idle,
            mimics: FxHashMap::default(),
        }
    }

    /// Engine over the shared standard catalog with default settings.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Catalog::shared(), GameConfig::default())
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn pending(&self) -> &PendingPlay {
        &self.pending
    }

    #[must_use]
    pub fn allies(&self) -> &AllyState {
        &self.allies
    }

    /// Mutations that turn a freshly set up state into the opening
    /// position: shuffled decks, opening hands, a full trade row.
    #[must_use]
    pub fn prepare(&self) -> Vec<Mutation> {
        let first = PlayerId::FIRST;
        let second = PlayerId::SECOND;

        let mut out = vec![
            Mutation::ShuffleDeck { location: Location::of(first, Area::Deck) },
            Mutation::ShuffleDeck { location: Location::of(second, Area::Deck) },
            Mutation::ShuffleDeck { location: Location::TradeDeck },
        ];
        draw(first, self.config.first_hand_size, &mut out);
        draw(second, self.config.hand_size, &mut out);
        for _ in 0..self.config.trade_row_size {
            out.push(refill());
        }
        out.push(Mutation::request(first, ActionCode::Start, None));
        out.push(Mutation::request(second, ActionCode::None, None));
        out.push(Mutation::GetState);
        out
    }

    /// Handle one raw action from `player` against the latest snapshot.
    pub fn handle(&mut self, raw: &str, player: PlayerId, state: &GameState) -> Resolution {
        let mut deferred = Vec::new();
        if let PendingPlay::AwaitingBeforePlayResolution { card, player: owner } =
            std::mem::take(&mut self.pending)
        {
            tracing::debug!(%card, player = %owner, "resolving deferred play");
            if let Err(err) = self.resolve_deferred(owner, &card, state, &mut deferred) {
                tracing::warn!(%card, error = %err, "deferred play could not resolve");
                deferred.clear();
            }
        }

        let mut actions = Vec::new();
        let outcome = UserAction::parse(raw).and_then(|action| {
            tracing::debug!(%player, code = %action.code, args = ?action.args, "handling action");
            self.dispatch(&action, player, state, &mut actions)
        });
        if let Err(err) = &outcome {
            tracing::warn!(%player, action = raw, kind = ?err.kind(), error = %err, "action rejected");
            actions.clear();
        }

        let mut mutations = Vec::with_capacity(deferred.len() + actions.len() + 2);
        if !deferred.is_empty() || !actions.is_empty() {
            mutations.push(Mutation::ResetActionLog);
        }
        mutations.extend(deferred);
        mutations.extend(actions);
        mutations.push(Mutation::GetState);

        Resolution { mutations, outcome }
    }

    fn resolve_deferred(
        &mut self,
        player: PlayerId,
        card: &InstanceId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let catalog = Arc::clone(&self.catalog);
        let entry = self.entry_of(&catalog, card)?;
        self.play_abilities(player, card, entry, state, out);
        Ok(())
    }

    /// The entry `id` currently behaves as: its own, or the ship a
    /// stealth needle copied this turn.
    pub(super) fn entry_of<'c>(&self, catalog: &'c Catalog, id: &InstanceId) -> Result<&'c CardEntry> {
        match self.mimics.get(id) {
            Some(key) => catalog
                .get(key)
                .ok_or_else(|| EngineError::InvalidCard((*key).to_owned())),
            None => catalog.entry_for(id),
        }
    }

    /// Resolve `entry`'s primary and ally abilities as card `source`.
    ///
    /// Instant abilities emit their mutations; activated ones are only
    /// enabled. Ally abilities go through the ally trigger state first.
    pub(super) fn play_abilities(
        &mut self,
        player: PlayerId,
        source: &InstanceId,
        entry: &CardEntry,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) {
        for ability in entry.primary() {
            match ability.ability_id() {
                Some(id) => out.push(Mutation::AddActivatedAbility {
                    card_id: source.clone(),
                    ability: id,
                }),
                None => out.extend(ability.resolve(player, source, state)),
            }
        }

        let allies = entry
            .ally()
            .map(|ability| PendingAlly {
                ability: ability.clone(),
                source: source.clone(),
                player,
            })
            .collect();
        let due = self.allies.register(entry.faction, allies);
        resolve_allies(&due, state, out);
    }
}

pub(super) fn resolve_allies(due: &[PendingAlly], state: &GameState, out: &mut Vec<Mutation>) {
    for pending in due {
        match pending.ability.ability_id() {
            Some(id) => out.push(Mutation::AddActivatedAbility {
                card_id: pending.source.clone(),
                ability: id,
            }),
            None => out.extend(pending.ability.resolve(pending.player, &pending.source, state)),
        }
    }
}

pub(super) fn draw(player: PlayerId, count: usize, out: &mut Vec<Mutation>) {
    for _ in 0..count {
        out.push(Mutation::TopCard {
            from: Location::of(player, Area::Deck),
            to: Location::of(player, Area::Hand),
        });
    }
}

pub(super) fn refill() -> Mutation {
    Mutation::TopCard {
        from: Location::TradeDeck,
        to: Location::TradeRow,
    }
}
