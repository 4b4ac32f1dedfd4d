//! Card classification: faction, category, and ability identities.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};

/// Card affiliation. Two cards of the same faction in play unlock
/// ally abilities; unaligned cards never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Faction {
    Unaligned,
    Blob,
    MachineCult,
    StarEmpire,
    TradeFederation,
}

impl Faction {
    /// Factions that take part in ally unlocking.
    pub const ALLIED: [Faction; 4] = [
        Faction::Blob,
        Faction::MachineCult,
        Faction::StarEmpire,
        Faction::TradeFederation,
    ];

    #[must_use]
    pub fn has_allies(self) -> bool {
        self != Faction::Unaligned
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Played to the table and discarded at end of turn.
    Ship,
    /// Stays in play and has a defense value.
    Base,
}

/// Stable identity of an activatable ability.
///
/// Ids are unique per card, not globally: two different cards may both
/// carry a `Utilization` ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum AbilityId {
    Default = 0,
    Utilization = 1,
    PatrolMechTrade = 2,
    PatrolMechCombat = 3,
    PatrolMechScrap = 4,
    BlobCarrierAcquire = 5,
    BlobDestroyerDestroyBase = 6,
    CommandShipDestroyBase = 7,
    TradingPostAuthority = 8,
    TradingPostTrade = 9,
    BarterWorldAuthority = 10,
    BarterWorldTrade = 11,
    DefenseCenterAuthority = 12,
    DefenseCenterCombat = 13,
    Junkyard = 14,
    MachineBase = 15,
    BrainWorld = 16,
    RecyclingStation = 17,
    BlobWorldCombat = 18,
    BlobWorldDraw = 19,
}

impl AbilityId {
    pub const ALL: [AbilityId; 20] = [
        AbilityId::Default,
        AbilityId::Utilization,
        AbilityId::PatrolMechTrade,
        AbilityId::PatrolMechCombat,
        AbilityId::PatrolMechScrap,
        AbilityId::BlobCarrierAcquire,
        AbilityId::BlobDestroyerDestroyBase,
        AbilityId::CommandShipDestroyBase,
        AbilityId::TradingPostAuthority,
        AbilityId::TradingPostTrade,
        AbilityId::BarterWorldAuthority,
        AbilityId::BarterWorldTrade,
        AbilityId::DefenseCenterAuthority,
        AbilityId::DefenseCenterCombat,
        AbilityId::Junkyard,
        AbilityId::MachineBase,
        AbilityId::BrainWorld,
        AbilityId::RecyclingStation,
        AbilityId::BlobWorldCombat,
        AbilityId::BlobWorldDraw,
    ];

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse an ability by wire integer or by (case-insensitive) name.
    ///
    /// ```
    /// use star_realms_engine::cards::AbilityId;
    ///
    /// assert_eq!(AbilityId::parse("1").unwrap(), AbilityId::Utilization);
    /// assert_eq!(AbilityId::parse("patrolMechTrade").unwrap(), AbilityId::PatrolMechTrade);
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let found = match raw.parse::<u8>() {
            Ok(code) => Self::ALL.iter().copied().find(|a| a.code() == code),
            Err(_) => Self::ALL
                .iter()
                .copied()
                .find(|a| format!("{a:?}").eq_ignore_ascii_case(raw)),
        };
        found.ok_or_else(|| EngineError::InvalidPointer(format!("ability `{raw}`")))
    }
}
