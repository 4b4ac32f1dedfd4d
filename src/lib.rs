//! # star-realms-engine
//!
//! Rules engine and authoritative state manager for a two-player
//! deck-building card game played over a network.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: One state manager task owns the game state and
//!    applies mutations strictly in the order they were queued.
//!
//! 2. **Pure Resolution**: The rules engine reads a snapshot and emits
//!    mutations. It never writes state, so resolving an action is
//!    repeatable against the same snapshot.
//!
//! 3. **Cards as Data**: Card text is a closed set of effect primitives;
//!    the full catalog is known at compile time.
//!
//! ## Architecture
//!
//! client action -> `RulesEngine` (snapshot in, `Vec<Mutation>` out)
//! -> `StateManager` (applies one mutation at a time) -> snapshot
//! broadcast.
//!
//! - **Persistent Data Structures**: O(1) snapshot clones via `im-rs`.
//!
//! - **Explicit Rejections**: Malformed input, bad pointers and rule
//!   violations come back as `EngineError`s while the client still gets
//!   a fresh snapshot.
//!
//! ## Modules
//!
//! - `core`: Players, counters, mutations, actions, state, RNG, config, errors
//! - `zones`: Card locations with per-zone ordering and reshuffle-on-empty
//! - `cards`: Card definitions, instances and the standard catalog
//! - `effects`: Effect primitives and their resolution into mutations
//! - `triggers`: Faction ally bonus bookkeeping
//! - `rules`: Action parsing and handling
//! - `session`: State manager task and game session wiring

pub mod core;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod triggers;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActionCode, UserAction,
    Counter, Counters, Operation,
    EngineError, ErrorKind, Result,
    GameConfig, GameRng, ShuffleSource,
    Mutation, PlayerId, PlayerMap,
    ActionRequest, GameState,
};

pub use crate::zones::{Area, Location, ZoneManager};

pub use crate::cards::{
    AbilityId, CardKind, Faction,
    Ability, AbilityGroup, CardEntry, Catalog, InstanceId, Supply,
};

pub use crate::effects::{Effect, EffectResolver, PlayerPointer, ResolverContext};

pub use crate::triggers::AllyState;

pub use crate::rules::{PendingPlay, Resolution, RulesEngine};

pub use crate::session::{GameSession, StateHandle, StateManager};
