//! Client action representation: code + arguments.
//!
//! Clients send one comma-separated line per action, `code[,arg]*`.
//! The code is a stable integer (or its name); each argument is a card
//! instance id, an ability id, or a small integer. Empty arguments are
//! treated as absent, so `15,,ram_1` skips the first optional target.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};
use crate::cards::InstanceId;

/// What a client can ask the engine to do, and what the engine can
/// prompt a client for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ActionCode {
    None = 0,
    Play = 1,
    End = 2,
    Damage = 3,
    Buy = 4,
    Utilize = 5,
    Start = 6,
    DestroyBase = 7,
    DiscardCard = 8,
    ActivateAbility = 9,
    ScrapCard = 10,
    ScrapCardTradeRow = 11,
    ScrapCardInHand = 12,
    DestroyBaseForFree = 13,
    AcquireShipForFree = 14,
    DestroyBaseBlobDestroyer = 15,
    ActivateBrainWorld = 16,
    ActivateMechWorld = 17,
    ActivateRecyclingStation = 18,
    ActivateNeedle = 19,
}

impl ActionCode {
    pub const ALL: [ActionCode; 20] = [
        ActionCode::None,
        ActionCode::Play,
        ActionCode::End,
        ActionCode::Damage,
        ActionCode::Buy,
        ActionCode::Utilize,
        ActionCode::Start,
        ActionCode::DestroyBase,
        ActionCode::DiscardCard,
        ActionCode::ActivateAbility,
        ActionCode::ScrapCard,
        ActionCode::ScrapCardTradeRow,
        ActionCode::ScrapCardInHand,
        ActionCode::DestroyBaseForFree,
        ActionCode::AcquireShipForFree,
        ActionCode::DestroyBaseBlobDestroyer,
        ActionCode::ActivateBrainWorld,
        ActionCode::ActivateMechWorld,
        ActionCode::ActivateRecyclingStation,
        ActionCode::ActivateNeedle,
    ];

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Codes that only answer an outstanding prompt of the same code.
    #[must_use]
    pub const fn answers_prompt(self) -> bool {
        matches!(
            self,
            ActionCode::ScrapCard
                | ActionCode::ScrapCardTradeRow
                | ActionCode::ScrapCardInHand
                | ActionCode::DestroyBaseForFree
                | ActionCode::AcquireShipForFree
                | ActionCode::DestroyBaseBlobDestroyer
                | ActionCode::ActivateBrainWorld
                | ActionCode::ActivateMechWorld
                | ActionCode::ActivateRecyclingStation
                | ActionCode::ActivateNeedle
        )
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ActionCode::None => "None",
            ActionCode::Play => "Play",
            ActionCode::End => "End",
            ActionCode::Damage => "Damage",
            ActionCode::Buy => "Buy",
            ActionCode::Utilize => "Utilize",
            ActionCode::Start => "Start",
            ActionCode::DestroyBase => "DestroyBase",
            ActionCode::DiscardCard => "DiscardCard",
            ActionCode::ActivateAbility => "ActivateAbility",
            ActionCode::ScrapCard => "ScrapCard",
            ActionCode::ScrapCardTradeRow => "ScrapCardTradeRow",
            ActionCode::ScrapCardInHand => "ScrapCardInHand",
            ActionCode::DestroyBaseForFree => "DestroyBaseForFree",
            ActionCode::AcquireShipForFree => "AcquireShipForFree",
            ActionCode::DestroyBaseBlobDestroyer => "DestroyBaseBlobDestroyer",
            ActionCode::ActivateBrainWorld => "ActivateBrainWorld",
            ActionCode::ActivateMechWorld => "ActivateMechWorld",
            ActionCode::ActivateRecyclingStation => "ActivateRecyclingStation",
            ActionCode::ActivateNeedle => "ActivateNeedle",
        }
    }

    /// Parse a code by integer or case-insensitive name.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let found = match raw.parse::<i64>() {
            Ok(n) => Self::ALL.iter().copied().find(|c| i64::from(c.code()) == n),
            Err(_) => Self::ALL.iter().copied().find(|c| c.name().eq_ignore_ascii_case(raw)),
        };
        found.ok_or_else(|| EngineError::UnknownAction(raw.to_owned()))
    }
}

impl std::fmt::Display for ActionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed client action.
///
/// ## Example
///
/// ```
/// use star_realms_engine::core::{ActionCode, UserAction};
///
/// let play = UserAction::parse("1,scout_1").unwrap();
/// assert_eq!(play.code, ActionCode::Play);
/// assert_eq!(play.card(0).unwrap().as_str(), "scout_1");
///
/// let named = UserAction::parse("Buy,ram_1").unwrap();
/// assert_eq!(named.code, ActionCode::Buy);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserAction {
    pub code: ActionCode,

    /// Raw arguments after the code. SmallVec keeps the common 0-2
    /// argument case off the heap.
    pub args: SmallVec<[String; 2]>,
}

impl UserAction {
    /// Parse `code[,arg]*`.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.trim().split(',');
        let head = parts.next().unwrap_or_default();
        if head.trim().is_empty() {
            return Err(EngineError::MalformedAction(raw.to_owned()));
        }
        let code = ActionCode::parse(head)?;
        let args = parts.map(|arg| arg.trim().to_owned()).collect();
        Ok(Self { code, args })
    }

    /// Argument `index`, `None` when missing or empty.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str).filter(|a| !a.is_empty())
    }

    /// A required card id argument.
    pub fn card(&self, index: usize) -> Result<InstanceId> {
        let raw = self.arg(index).ok_or(EngineError::MissingArgument {
            action: self.code.name(),
            expected: index + 1,
        })?;
        InstanceId::parse(raw)
    }

    /// An optional card id argument.
    pub fn optional_card(&self, index: usize) -> Result<Option<InstanceId>> {
        self.arg(index).map(InstanceId::parse).transpose()
    }

    /// A required non-negative integer argument.
    pub fn amount(&self, index: usize) -> Result<i64> {
        let raw = self.arg(index).ok_or(EngineError::MissingArgument {
            action: self.code.name(),
            expected: index + 1,
        })?;
        match raw.parse::<i64>() {
            Ok(n) if n >= 0 => Ok(n),
            _ => Err(EngineError::InvalidArgument {
                action: self.code.name(),
                value: raw.to_owned(),
            }),
        }
    }
}
