//! Core engine types: players, state, counters, mutations, actions, RNG,
//! configuration and errors.

pub mod action;
pub mod config;
pub mod counters;
pub mod error;
pub mod mutation;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionCode, UserAction};
pub use config::GameConfig;
pub use counters::{Counter, Counters, Operation};
pub use error::{EngineError, ErrorKind, Result};
pub use mutation::Mutation;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, ShuffleSource};
pub use state::{ActionRequest, GameState};
