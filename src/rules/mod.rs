//! Rules engine: client actions to mutation lists.
//!
//! `RulesEngine::handle` parses one `code[,arg]*` action, checks it
//! against the latest snapshot and the card catalog, and returns the
//! mutations the state manager must apply, in order. It never mutates
//! the game state itself.
//!
//! Rejections are recoverable: the returned `Resolution` still carries
//! a `GetState` so the client is never left on a stale snapshot.

pub mod engine;
mod handlers;

pub use engine::{PendingPlay, Resolution, RulesEngine};
