//! Zone system for card locations.
//!
//! Zones are fixed for this game: four shared zones and five per player.
//! Player-relative lookups go through the pure `Location::of` table.
//!
//! ## Key Types
//!
//! - `Location`: One of the fourteen zones
//! - `Area`: A per-player zone kind (deck, hand, table, discard, bases)
//! - `ZoneManager`: Card location tracking, ordering and movement
//! - `Placement`: A card's zone plus its order key

pub mod location;
pub mod manager;

pub use location::{Area, Location};
pub use manager::{Moved, Placement, ZoneManager};
