//! Effect definitions.
//!
//! Effects are the data half of card text. The full card set is known
//! up front, so a closed set of primitives covers it; the two cards that
//! need to look at the board use `Custom`.

use serde::{Deserialize, Serialize};

use crate::cards::AbilityId;
use crate::core::{ActionCode, Counter, Operation};

/// An effect an ability produces when it resolves.
///
/// ## Primitives
///
/// - `ChangeCounter`: Adjust one counter of the targeted player
/// - `DrawCards`: Draw from the targeted player's deck to their hand
/// - `RequestInput`: Prompt the targeted player for a follow-up action
/// - `DisableAbility`: Switch off a sibling activated ability on the same card
///
/// ## Composite
///
/// - `Batch`: Several effects in order
/// - `Custom`: Board-dependent effects
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    ChangeCounter {
        counter: Counter,
        operation: Operation,
        value: i64,
    },

    DrawCards(u32),

    RequestInput(ActionCode),

    DisableAbility(AbilityId),

    Batch(Vec<Effect>),

    Custom(CustomEffect),
}

/// Effects that depend on the board at resolution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomEffect {
    /// Draw `draw` cards if the player controls at least `bases` bases.
    DrawIfBases { bases: usize, draw: u32 },

    /// Draw one card per Blob card played this turn.
    DrawPerBlob,
}

impl Effect {
    /// Gain `amount` of a counter.
    #[must_use]
    pub fn gain(counter: Counter, amount: i64) -> Self {
        Self::ChangeCounter {
            counter,
            operation: Operation::Increase,
            value: amount,
        }
    }

    /// Set a counter to a fixed value.
    #[must_use]
    pub fn set(counter: Counter, value: i64) -> Self {
        Self::ChangeCounter {
            counter,
            operation: Operation::Set,
            value,
        }
    }

    /// Draw one card.
    #[must_use]
    pub fn draw() -> Self {
        Self::DrawCards(1)
    }

    #[must_use]
    pub fn request(action: ActionCode) -> Self {
        Self::RequestInput(action)
    }

    /// Run effects in order.
    #[must_use]
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }
}
