//! Trigger system for cross-card abilities.
//!
//! The only cross-card trigger in this game is the faction ally bonus.
//! [`AllyState`] is engine-local: it lives in the rules engine, not in
//! the game state, and is rebuilt from scratch every turn.

pub mod ally;

pub use ally::{AllyState, PendingAlly};
