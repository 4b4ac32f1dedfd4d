//! Primitive state mutations.
//!
//! The rules engine turns every client action into an ordered list of
//! `Mutation`s; the state manager applies them one at a time. Applied
//! mutations (all but `GetState`) are also the entries of the action log
//! shipped with each snapshot.

use serde::{Deserialize, Serialize};

use super::action::ActionCode;
use super::counters::{Counter, Operation};
use super::player::PlayerId;
use crate::cards::{AbilityId, InstanceId};
use crate::zones::Location;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Mutation {
    /// Increase, decrease or set one counter of one player.
    #[serde(rename_all = "camelCase")]
    ChangeCounter {
        player: PlayerId,
        counter: Counter,
        operation: Operation,
        value: i64,
    },

    /// Draw the top card of `from` onto `to`, recycling an empty deck.
    TopCard { from: Location, to: Location },

    /// Move one card to the top of `to`. `from` is filled in when the
    /// move is logged.
    MoveCard {
        id: InstanceId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<Location>,
        to: Location,
    },

    /// Move every card of `from` onto `to`.
    MoveAll { from: Location, to: Location },

    ShuffleDeck { location: Location },

    /// Hand the turn to the other player.
    ChangeTurn,

    /// Record what input is expected next from `player`.
    #[serde(rename_all = "camelCase")]
    RequestUserAction {
        player: PlayerId,
        action: ActionCode,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        card_id: Option<InstanceId>,
    },

    #[serde(rename_all = "camelCase")]
    AddActivatedAbility { card_id: InstanceId, ability: AbilityId },

    #[serde(rename_all = "camelCase")]
    DisableActivatedAbility { card_id: InstanceId, ability: AbilityId },

    ResetActivatedAbilities,

    ResetActionLog,

    /// Publish a snapshot. Never mutates and is never logged.
    GetState,
}

impl Mutation {
    /// Shorthand for a counter change.
    #[must_use]
    pub fn counter(player: PlayerId, counter: Counter, operation: Operation, value: i64) -> Self {
        Self::ChangeCounter { player, counter, operation, value }
    }

    /// Shorthand for a card move.
    #[must_use]
    pub fn move_card(id: InstanceId, to: Location) -> Self {
        Self::MoveCard { id, from: None, to }
    }

    /// Shorthand for a prompt.
    #[must_use]
    pub fn request(player: PlayerId, action: ActionCode, card_id: Option<InstanceId>) -> Self {
        Self::RequestUserAction { player, action, card_id }
    }

    #[must_use]
    pub fn is_get_state(&self) -> bool {
        matches!(self, Self::GetState)
    }
}
