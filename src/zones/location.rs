//! Fixed card locations.
//!
//! Every card instance sits in exactly one `Location`. Shared zones
//! (trade deck, trade row, explorer supply, scrap heap) belong to nobody;
//! the remaining ten are one per player per `Area`.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::core::PlayerId;

/// A zone a card instance can occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Location {
    TradeDeck = 1,
    TradeRow = 2,
    Explorers = 3,
    ScrapHeap = 4,
    FirstPlayerDeck = 5,
    FirstPlayerHand = 6,
    FirstPlayerTable = 7,
    FirstPlayerDiscard = 8,
    FirstPlayerBases = 9,
    SecondPlayerDeck = 10,
    SecondPlayerHand = 11,
    SecondPlayerTable = 12,
    SecondPlayerDiscard = 13,
    SecondPlayerBases = 14,
}

/// A per-player area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Deck,
    Hand,
    Table,
    Discard,
    Bases,
}

impl Location {
    /// Every location, shared zones first.
    pub const ALL: [Location; 14] = [
        Location::TradeDeck,
        Location::TradeRow,
        Location::Explorers,
        Location::ScrapHeap,
        Location::FirstPlayerDeck,
        Location::FirstPlayerHand,
        Location::FirstPlayerTable,
        Location::FirstPlayerDiscard,
        Location::FirstPlayerBases,
        Location::SecondPlayerDeck,
        Location::SecondPlayerHand,
        Location::SecondPlayerTable,
        Location::SecondPlayerDiscard,
        Location::SecondPlayerBases,
    ];

    /// The location of `area` for `player`.
    ///
    /// ```
    /// use star_realms_engine::core::PlayerId;
    /// use star_realms_engine::zones::{Area, Location};
    ///
    /// assert_eq!(Location::of(PlayerId::SECOND, Area::Hand), Location::SecondPlayerHand);
    /// ```
    #[must_use]
    pub const fn of(player: PlayerId, area: Area) -> Location {
        match (player.0, area) {
            (0, Area::Deck) => Location::FirstPlayerDeck,
            (0, Area::Hand) => Location::FirstPlayerHand,
            (0, Area::Table) => Location::FirstPlayerTable,
            (0, Area::Discard) => Location::FirstPlayerDiscard,
            (0, Area::Bases) => Location::FirstPlayerBases,
            (_, Area::Deck) => Location::SecondPlayerDeck,
            (_, Area::Hand) => Location::SecondPlayerHand,
            (_, Area::Table) => Location::SecondPlayerTable,
            (_, Area::Discard) => Location::SecondPlayerDiscard,
            (_, Area::Bases) => Location::SecondPlayerBases,
        }
    }

    /// Owner and area for player zones, `None` for shared zones.
    #[must_use]
    pub const fn owner(self) -> Option<(PlayerId, Area)> {
        let owned = match self {
            Location::FirstPlayerDeck => (PlayerId::FIRST, Area::Deck),
            Location::FirstPlayerHand => (PlayerId::FIRST, Area::Hand),
            Location::FirstPlayerTable => (PlayerId::FIRST, Area::Table),
            Location::FirstPlayerDiscard => (PlayerId::FIRST, Area::Discard),
            Location::FirstPlayerBases => (PlayerId::FIRST, Area::Bases),
            Location::SecondPlayerDeck => (PlayerId::SECOND, Area::Deck),
            Location::SecondPlayerHand => (PlayerId::SECOND, Area::Hand),
            Location::SecondPlayerTable => (PlayerId::SECOND, Area::Table),
            Location::SecondPlayerDiscard => (PlayerId::SECOND, Area::Discard),
            Location::SecondPlayerBases => (PlayerId::SECOND, Area::Bases),
            _ => return None,
        };
        Some(owned)
    }

    /// Owner of a deck location, used to find the discard pile to recycle.
    #[must_use]
    pub fn deck_owner(self) -> Option<PlayerId> {
        match self.owner() {
            Some((player, Area::Deck)) => Some(player),
            _ => None,
        }
    }

    /// Stable wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a wire code.
    pub fn from_code(code: u8) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|location| location.code() == code)
            .ok_or_else(|| EngineError::InvalidPointer(format!("location {code}")))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
