//! Card instance identifiers.
//!
//! Every physical card in a session is named `<catalogKey>_<n>`, with
//! `n` counting from 1 per catalog key. Instances are created once when
//! the session is set up and are never destroyed, only relocated.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};

/// Identifier of one physical card, e.g. `scout_7`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    /// Build the id of the `n`th copy of `key`.
    #[must_use]
    pub fn new(key: &str, n: u32) -> Self {
        Self(format!("{key}_{n}"))
    }

    /// Validate the `<key>_<n>` shape of a client-supplied id.
    ///
    /// This only checks the shape; whether the key exists in the
    /// catalog is the catalog's call.
    ///
    /// ```
    /// use star_realms_engine::cards::InstanceId;
    ///
    /// let id = InstanceId::parse("blobFighter_2").unwrap();
    /// assert_eq!(id.catalog_key(), "blobFighter");
    /// assert!(InstanceId::parse("blobFighter").is_err());
    /// assert!(InstanceId::parse("_3").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        match raw.rsplit_once('_') {
            Some((key, n)) if !key.is_empty() && n.parse::<u32>().is_ok() => Ok(Self(raw.to_owned())),
            _ => Err(EngineError::InvalidCard(raw.to_owned())),
        }
    }

    /// The catalog key this instance was minted from.
    #[must_use]
    pub fn catalog_key(&self) -> &str {
        self.0.rsplit_once('_').map_or(self.0.as_str(), |(key, _)| key)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
