//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `InstanceId`: One physical card, `<catalogKey>_<n>`
//! - `Faction`, `CardKind`, `AbilityId`: Card classification
//! - `Ability`: One effect plus when and on whom it resolves
//! - `CardEntry`: Static card data with its abilities
//! - `Catalog`: Card definition lookup; `Catalog::standard()` is the base set

pub mod attributes;
mod catalog;
pub mod definition;
pub mod instance;
pub mod registry;

pub use attributes::{AbilityId, CardKind, Faction};
pub use definition::{Ability, AbilityGroup, Activation, CardEntry, Supply};
pub use instance::InstanceId;
pub use registry::Catalog;
