//! Relative player targeting.
//!
//! Card text says "you" or "your opponent". Abilities store a
//! `PlayerPointer` and resolve it against the acting player at call time.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Who an ability affects, relative to the player resolving it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPointer {
    #[default]
    Current,
    Opponent,
}

impl PlayerPointer {
    /// The concrete seat this pointer names when `actor` is acting.
    #[must_use]
    pub const fn resolve(self, actor: PlayerId) -> PlayerId {
        match self {
            PlayerPointer::Current => actor,
            PlayerPointer::Opponent => actor.opponent(),
        }
    }
}
