//! # Good Types
//!
//! Identity of a kind of merchandise. Goods are created once by the caller
//! and shared by every container that counts them.

use crate::error::{StockError, StockResult};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier of a good
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoodId(Uuid);

impl GoodId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. one restored from storage)
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GoodId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A kind of merchandise.
///
/// Equality and hashing only look at the id: two goods that happen to share
/// a display name are still different goods. Cloning yields a handle to the
/// same good.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GoodRecord")]
pub struct Good {
    /// Identity used by every ledger lookup
    id: GoodId,

    /// Display name
    name: String,
}

impl Good {
    /// Create a new good with a freshly generated id
    pub fn new(name: impl Into<String>) -> StockResult<Self> {
        Self::with_id(GoodId::new(), name)
    }

    /// Create a good with a known id
    pub fn with_id(id: GoodId, name: impl Into<String>) -> StockResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StockError::invalid_argument("good name cannot be empty"));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> GoodId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Unchecked wire form of a [`Good`]
#[derive(Deserialize)]
struct GoodRecord {
    id: GoodId,
    name: String,
}

impl TryFrom<GoodRecord> for Good {
    type Error = StockError;

    fn try_from(record: GoodRecord) -> StockResult<Self> {
        Good::with_id(record.id, record.name)
    }
}

impl PartialEq for Good {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Good {}

impl Hash for Good {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Good {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
