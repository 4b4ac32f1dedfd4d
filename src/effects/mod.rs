//! Effect system for card abilities.
//!
//! - `Effect`: Closed set of effect primitives plus board-dependent customs
//! - `PlayerPointer`: "you" or "your opponent", resolved per call
//! - `EffectResolver`: Turns an effect into mutations against a snapshot
//!
//! ## Design Philosophy
//!
//! Resolution is pure. Effects read a snapshot and emit `Mutation`s;
//! only the state manager ever applies them.

mod effect;
mod resolver;
mod targeting;

pub use effect::{CustomEffect, Effect};
pub use resolver::{EffectResolver, ResolverContext};
pub use targeting::PlayerPointer;
