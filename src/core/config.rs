//! Session configuration.
//!
//! `GameConfig` holds the table constants a session is built from. It
//! deserializes from JSON (missing fields fall back to the defaults) and
//! offers `with_*` builders for programmatic use.

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Table constants for one game session.
///
/// ## Example
///
/// ```
/// use star_realms_engine::core::GameConfig;
///
/// let config = GameConfig::default().with_shuffle_seed(7);
/// assert_eq!(config.initial_authority, 50);
/// assert_eq!(config.shuffle_seed, Some(7));
///
/// let parsed = GameConfig::from_json(r#"{ "hand_size": 6 }"#).unwrap();
/// assert_eq!(parsed.hand_size, 6);
/// assert_eq!(parsed.trade_row_size, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Starting authority for both players.
    pub initial_authority: i64,

    /// Cards drawn at the end of every turn.
    pub hand_size: usize,

    /// Opening hand of the player who moves first.
    pub first_hand_size: usize,

    /// Number of face-up cards in the shared trade row.
    pub trade_row_size: usize,

    /// Capacity of the snapshot broadcast channel. Slow subscribers
    /// that fall further behind than this skip to the latest snapshot.
    pub snapshot_buffer: usize,

    /// Fixed root seed for shuffles. `None` draws fresh entropy per shuffle.
    pub shuffle_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_authority: 50,
            hand_size: 5,
            first_hand_size: 3,
            trade_row_size: 5,
            snapshot_buffer: 64,
            shuffle_seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set starting authority.
    #[must_use]
    pub fn with_initial_authority(mut self, authority: i64) -> Self {
        self.initial_authority = authority;
        self
    }

    /// Set the end-of-turn hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Fix the shuffle seed for reproducible sessions.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Set the snapshot broadcast capacity.
    #[must_use]
    pub fn with_snapshot_buffer(mut self, capacity: usize) -> Self {
        self.snapshot_buffer = capacity.max(1);
        self
    }
}
