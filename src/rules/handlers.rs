//! Per-action handlers.
//!
//! Every handler validates against the snapshot, then appends mutations.
//! Engine-local state (allies, the deferred slot, needle copies) is only
//! touched once validation has passed, so a rejected action leaves the
//! engine as it found it.

use std::sync::Arc;

use super::engine::{draw, refill, resolve_allies, PendingPlay, RulesEngine};
use crate::cards::{AbilityId, CardEntry, CardKind, Faction, InstanceId};
use crate::core::{
    ActionCode, Counter, EngineError, GameState, Mutation, Operation, PlayerId, Result, UserAction,
};
use crate::zones::{Area, Location};

/// Where `id` is, provided it is one of `allowed`.
fn locate(state: &GameState, id: &InstanceId, allowed: &[Location]) -> Result<Location> {
    let location = state
        .cards
        .location_of(id)
        .ok_or_else(|| EngineError::InvalidCard(id.to_string()))?;
    if allowed.contains(&location) {
        Ok(location)
    } else {
        Err(EngineError::rule(format!("{id} is in {location}")))
    }
}

/// Append `emitted`, then prompt `player` for nothing unless `emitted`
/// already prompted them.
fn settle(player: PlayerId, emitted: Vec<Mutation>, out: &mut Vec<Mutation>) {
    let prompted = emitted
        .iter()
        .any(|m| matches!(m, Mutation::RequestUserAction { player: p, .. } if *p == player));
    out.extend(emitted);
    if !prompted {
        out.push(Mutation::request(player, ActionCode::None, None));
    }
}

/// The card behind `player`'s outstanding prompt, provided the prompt is
/// for `code`.
fn prompted(state: &GameState, player: PlayerId, code: ActionCode) -> Result<Option<InstanceId>> {
    let request = state.request(player);
    if request.action == code {
        Ok(request.card_id.clone())
    } else {
        Err(EngineError::rule(format!("{player} was not asked for {code}")))
    }
}

/// Optional card arguments `first..first + count`, without repeats.
fn distinct_cards(action: &UserAction, first: usize, count: usize) -> Result<Vec<InstanceId>> {
    let mut cards: Vec<InstanceId> = Vec::with_capacity(count);
    for index in first..first + count {
        if let Some(id) = action.optional_card(index)? {
            if cards.contains(&id) {
                return Err(EngineError::rule(format!("{id} named twice")));
            }
            cards.push(id);
        }
    }
    Ok(cards)
}

impl RulesEngine {
    pub(super) fn dispatch(
        &mut self,
        action: &UserAction,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        if action.code != ActionCode::None && state.turn != player {
            return Err(EngineError::rule(format!("not {player}'s turn")));
        }
        if action.code.answers_prompt() {
            prompted(state, player, action.code)?;
        }

        match action.code {
            ActionCode::None => Ok(()),
            ActionCode::Play => self.play(action, player, state, out),
            ActionCode::End => self.end(player, state, out),
            ActionCode::Damage => damage(action, player, out),
            ActionCode::Buy => self.buy(action, player, state, out),
            ActionCode::Utilize => {
                let id = action.card(0)?;
                self.activate(id, AbilityId::Utilization, player, state, out)
            }
            ActionCode::ActivateAbility => {
                let id = action.card(0)?;
                let raw = action.arg(1).ok_or(EngineError::MissingArgument {
                    action: action.code.name(),
                    expected: 2,
                })?;
                self.activate(id, AbilityId::parse(raw)?, player, state, out)
            }
            ActionCode::Start => self.start(player, state, out),
            ActionCode::DestroyBase => {
                let id = action.card(0)?;
                self.destroy_base(&id, true, player, state, out)?;
                Ok(())
            }
            ActionCode::DestroyBaseForFree => {
                if let Some(id) = action.optional_card(0)? {
                    self.destroy_base(&id, false, player, state, out)?;
                }
                out.push(Mutation::request(player, ActionCode::None, None));
                Ok(())
            }
            ActionCode::DiscardCard => self.discard(action, player, state, out),
            ActionCode::ScrapCard => {
                let allowed = [Location::of(player, Area::Hand), Location::of(player, Area::Discard)];
                self.scrap(action, player, &allowed, state, out)
            }
            ActionCode::ScrapCardTradeRow => self.scrap(action, player, &[Location::TradeRow], state, out),
            ActionCode::ScrapCardInHand => {
                self.scrap(action, player, &[Location::of(player, Area::Hand)], state, out)
            }
            ActionCode::AcquireShipForFree => self.acquire(action, player, state, out),
            ActionCode::DestroyBaseBlobDestroyer => self.blob_destroyer(action, player, state, out),
            ActionCode::ActivateBrainWorld => self.brain_world(action, player, state, out),
            ActionCode::ActivateMechWorld => {
                self.mech_world(player, state, out);
                Ok(())
            }
            ActionCode::ActivateRecyclingStation => self.recycling_station(action, player, state, out),
            ActionCode::ActivateNeedle => self.needle(action, player, state, out),
        }
    }

    fn play(
        &mut self,
        action: &UserAction,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let id = action.card(0)?;
        let catalog = Arc::clone(&self.catalog);
        let entry = catalog.entry_for(&id)?;
        locate(state, &id, &[Location::of(player, Area::Hand)])?;

        let area = if entry.is_base() { Area::Bases } else { Area::Table };
        out.push(Mutation::move_card(id.clone(), Location::of(player, area)));

        if entry.faction == Faction::Blob {
            out.push(Mutation::counter(player, Counter::Blobs, Operation::Increase, 1));
        }
        if entry.kind == CardKind::Ship && state.counters(player).fleet_bonus > 0 {
            out.push(Mutation::counter(player, Counter::Combat, Operation::Increase, 1));
        }

        if !self.defer_play(player, &id, entry, state, out) {
            self.play_abilities(player, &id, entry, state, out);
        }
        Ok(())
    }

    /// Ask `entry`'s before-play prompt as card `id` and hold back the
    /// rest of its abilities. False when `entry` has no such prompt.
    fn defer_play(
        &mut self,
        player: PlayerId,
        id: &InstanceId,
        entry: &CardEntry,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> bool {
        if entry.before_play().next().is_none() {
            return false;
        }
        for ability in entry.before_play() {
            out.extend(ability.resolve(player, id, state));
        }
        self.pending = PendingPlay::AwaitingBeforePlayResolution { card: id.clone(), player };
        true
    }

    fn end(&mut self, player: PlayerId, state: &GameState, out: &mut Vec<Mutation>) -> Result<()> {
        let opponent = player.opponent();
        self.allies.reset();
        self.mimics.clear();

        out.push(Mutation::MoveAll {
            from: Location::of(player, Area::Table),
            to: Location::of(player, Area::Discard),
        });
        for counter in [Counter::Trade, Counter::Combat, Counter::ShipsOnTop, Counter::FleetBonus, Counter::Blobs] {
            out.push(Mutation::counter(player, counter, Operation::Set, 0));
        }
        draw(player, self.config.hand_size, out);

        let next = if state.counters(opponent).discard > 0 {
            ActionCode::DiscardCard
        } else {
            ActionCode::Start
        };
        out.push(Mutation::request(player, ActionCode::None, None));
        out.push(Mutation::request(opponent, next, None));
        out.push(Mutation::ResetActivatedAbilities);
        out.push(Mutation::ChangeTurn);
        Ok(())
    }

    fn buy(
        &self,
        action: &UserAction,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let id = action.card(0)?;
        let entry = self.catalog.entry_for(&id)?;
        let from = locate(state, &id, &[Location::TradeRow, Location::Explorers])?;

        if entry.kind == CardKind::Ship && state.counters(player).ships_on_top > 0 {
            out.push(Mutation::move_card(id, Location::of(player, Area::Deck)));
            out.push(Mutation::counter(player, Counter::ShipsOnTop, Operation::Decrease, 1));
        } else {
            out.push(Mutation::move_card(id, Location::of(player, Area::Discard)));
        }
        out.push(Mutation::counter(player, Counter::Trade, Operation::Decrease, entry.cost));

        if from == Location::TradeRow && !entry.has_unlimited_supply() {
            out.push(refill());
        }
        Ok(())
    }

    fn activate(
        &mut self,
        id: InstanceId,
        ability_id: AbilityId,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let catalog = Arc::clone(&self.catalog);
        let entry = self.entry_of(&catalog, &id)?;
        let in_play = [Location::of(player, Area::Table), Location::of(player, Area::Bases)];
        locate(state, &id, &in_play)?;

        if !state.is_ability_enabled(&id, ability_id) {
            return Err(EngineError::rule(format!("{ability_id:?} is not enabled on {id}")));
        }
        let ability = entry
            .find_activated(ability_id)
            .ok_or_else(|| EngineError::rule(format!("{id} has no {ability_id:?} ability")))?;

        out.extend(ability.resolve(player, &id, state));
        out.push(Mutation::DisableActivatedAbility {
            card_id: id.clone(),
            ability: ability_id,
        });

        if ability_id == AbilityId::Utilization {
            out.push(Mutation::move_card(id.clone(), Location::ScrapHeap));

            let faction_remains = in_play
                .iter()
                .flat_map(|location| state.cards.cards_in(*location))
                .filter(|other| *other != id)
                .any(|other| self.entry_of(&catalog, &other).is_ok_and(|e| e.faction == entry.faction));
            if !faction_remains {
                tracing::debug!(card = %id, faction = ?entry.faction, "last card of faction scrapped");
                self.allies.revoke(entry.faction);
            }
        }
        Ok(())
    }

    fn start(
        &mut self,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let catalog = Arc::clone(&self.catalog);
        let bases = state
            .cards_of(player, Area::Bases)
            .into_iter()
            .map(|id| catalog.entry_for(&id).map(|entry| (id, entry)))
            .collect::<Result<Vec<_>>>()?;

        let mut emitted = Vec::new();
        for (id, entry) in bases {
            self.play_abilities(player, &id, entry, state, &mut emitted);
        }
        settle(player, emitted, out);
        Ok(())
    }

    /// Destroy opposing base `id`; the paid variant spends its defense in combat.
    fn destroy_base(
        &self,
        id: &InstanceId,
        paid: bool,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let opponent = player.opponent();
        let entry = self.catalog.entry_for(id)?;
        if !entry.is_base() {
            return Err(EngineError::rule(format!("{id} is not a base")));
        }
        locate(state, id, &[Location::of(opponent, Area::Bases)])?;

        if paid {
            out.push(Mutation::counter(player, Counter::Combat, Operation::Decrease, entry.defense));
        }
        out.push(Mutation::move_card(id.clone(), Location::of(opponent, Area::Discard)));
        Ok(())
    }

    fn discard(
        &self,
        action: &UserAction,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let id = action.card(0)?;
        self.catalog.entry_for(&id)?;
        locate(state, &id, &[Location::of(player, Area::Hand)])?;
        let owed = state.counters(player).discard;
        if owed <= 0 {
            return Err(EngineError::rule(format!("{player} owes no discard")));
        }

        out.push(Mutation::move_card(id, Location::of(player, Area::Discard)));
        out.push(Mutation::counter(player, Counter::Discard, Operation::Decrease, 1));
        if owed == 1 {
            out.push(Mutation::request(player, ActionCode::Start, None));
        }
        Ok(())
    }

    fn scrap(
        &self,
        action: &UserAction,
        player: PlayerId,
        allowed: &[Location],
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        if let Some(id) = action.optional_card(0)? {
            self.catalog.entry_for(&id)?;
            let from = locate(state, &id, allowed)?;
            out.push(Mutation::move_card(id, Location::ScrapHeap));
            if from == Location::TradeRow {
                out.push(refill());
            }
        }
        out.push(Mutation::request(player, ActionCode::None, None));
        Ok(())
    }

    fn acquire(
        &self,
        action: &UserAction,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let id = action.card(0)?;
        let entry = self.catalog.entry_for(&id)?;
        if entry.kind != CardKind::Ship {
            return Err(EngineError::rule(format!("{id} is not a ship")));
        }
        locate(state, &id, &[Location::TradeRow])?;

        out.push(Mutation::move_card(id, Location::of(player, Area::Deck)));
        out.push(refill());
        out.push(Mutation::request(player, ActionCode::None, None));
        Ok(())
    }

    /// `[baseId],[tradeRowCardId]`: either part may be left out.
    fn blob_destroyer(
        &self,
        action: &UserAction,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        if let Some(base) = action.optional_card(0)? {
            self.destroy_base(&base, false, player, state, out)?;
        }
        if let Some(id) = action.optional_card(1)? {
            self.catalog.entry_for(&id)?;
            locate(state, &id, &[Location::TradeRow])?;
            out.push(Mutation::move_card(id, Location::ScrapHeap));
            out.push(refill());
        }
        out.push(Mutation::request(player, ActionCode::None, None));
        Ok(())
    }

    fn brain_world(
        &self,
        action: &UserAction,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let allowed = [Location::of(player, Area::Hand), Location::of(player, Area::Discard)];
        let cards = distinct_cards(action, 0, 2)?;
        for id in &cards {
            self.catalog.entry_for(id)?;
            locate(state, id, &allowed)?;
        }

        let count = cards.len();
        out.extend(cards.into_iter().map(|id| Mutation::move_card(id, Location::ScrapHeap)));
        draw(player, count, out);
        out.push(Mutation::request(player, ActionCode::None, None));
        Ok(())
    }

    fn recycling_station(
        &self,
        action: &UserAction,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let cards = distinct_cards(action, 0, 2)?;
        for id in &cards {
            self.catalog.entry_for(id)?;
            locate(state, id, &[Location::of(player, Area::Hand)])?;
        }

        let count = cards.len();
        out.extend(
            cards
                .into_iter()
                .map(|id| Mutation::move_card(id, Location::of(player, Area::Discard))),
        );
        draw(player, count, out);
        out.push(Mutation::request(player, ActionCode::None, None));
        Ok(())
    }

    fn mech_world(&mut self, player: PlayerId, state: &GameState, out: &mut Vec<Mutation>) {
        let due = self.allies.unlock_all();
        let mut emitted = Vec::new();
        resolve_allies(&due, state, &mut emitted);
        settle(player, emitted, out);
    }

    /// The needle asking for a target becomes a copy of that ship.
    fn needle(
        &mut self,
        action: &UserAction,
        player: PlayerId,
        state: &GameState,
        out: &mut Vec<Mutation>,
    ) -> Result<()> {
        let needle = prompted(state, player, ActionCode::ActivateNeedle)?
            .ok_or_else(|| EngineError::rule(format!("{player} has no needle awaiting a target")))?;

        let target = action.card(0)?;
        let catalog = Arc::clone(&self.catalog);
        let entry = catalog.entry_for(&target)?;
        if target == needle || entry.kind != CardKind::Ship {
            return Err(EngineError::rule(format!("{target} cannot be copied")));
        }
        locate(state, &target, &[Location::of(player, Area::Table)])?;

        tracing::debug!(%needle, copies = entry.key, "needle copies ship");
        self.mimics.insert(needle.clone(), entry.key);

        if !self.defer_play(player, &needle, entry, state, out) {
            let mut emitted = Vec::new();
            self.play_abilities(player, &needle, entry, state, &mut emitted);
            settle(player, emitted, out);
        }
        Ok(())
    }
}

fn damage(action: &UserAction, player: PlayerId, out: &mut Vec<Mutation>) -> Result<()> {
    let amount = action.amount(0)?;
    out.push(Mutation::counter(player.opponent(), Counter::Authority, Operation::Decrease, amount));
    out.push(Mutation::counter(player, Counter::Combat, Operation::Decrease, amount));
    Ok(())
}
