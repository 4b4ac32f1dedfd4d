//! Card catalog for definition lookup.
//!
//! The `Catalog` maps catalog keys to `CardEntry`s. The standard set is
//! built once per process and shared by reference.

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;

use super::definition::CardEntry;
use super::instance::InstanceId;
use crate::core::error::{EngineError, Result};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use star_realms_engine::cards::{CardEntry, Catalog, Faction, InstanceId};
///
/// let mut catalog = Catalog::new();
/// catalog.register(CardEntry::ship("ram", Faction::Blob).cost(3).qty(2));
///
/// let ram = catalog.entry_for(&InstanceId::new("ram", 2)).unwrap();
/// assert_eq!(ram.cost, 3);
/// assert!(catalog.entry_for(&InstanceId::new("viper", 1)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: FxHashMap<&'static str, CardEntry>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide standard catalog.
    #[must_use]
    pub fn shared() -> Arc<Catalog> {
        static STANDARD: OnceLock<Arc<Catalog>> = OnceLock::new();
        Arc::clone(STANDARD.get_or_init(|| Arc::new(Catalog::standard())))
    }

    /// Register a card definition, replacing any entry with the same key.
    pub fn register(&mut self, entry: CardEntry) -> Option<CardEntry> {
        self.entries.insert(entry.key, entry)
    }

    /// Get a card definition by catalog key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CardEntry> {
        self.entries.get(key)
    }

    /// Get the definition an instance was minted from.
    pub fn entry_for(&self, id: &InstanceId) -> Result<&CardEntry> {
        self.get(id.catalog_key())
            .ok_or_else(|| EngineError::InvalidCard(id.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries ordered by key, for deterministic setup.
    #[must_use]
    pub fn entries_sorted(&self) -> Vec<&CardEntry> {
        let mut entries: Vec<&CardEntry> = self.entries.values().collect();
        entries.sort_unstable_by_key(|e| e.key);
        entries
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardEntry>
    where
        F: Fn(&CardEntry) -> bool,
    {
        self.entries.values().filter(move |e| predicate(e))
    }
}
