//! # Stock Manifest
//!
//! TOML description of the goods a warehouse starts with, plus optional
//! carts to check out against it. Loaded by the `stockroom` binary from
//! `config/stock.toml`.
//!
//! ```toml
//! [[goods]]
//! key = "iphone-12"
//! name = "IPhone 12"
//! stock = 10
//!
//! [[carts]]
//! lines = [{ good = "iphone-12", count = 4 }]
//! ```

use crate::error::{StockError, StockResult};
use crate::good::Good;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A good declared in the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodEntry {
    /// Manifest-local key referenced by cart lines (e.g., "iphone-12")
    pub key: String,

    /// Display name
    pub name: String,

    /// Units shipped into the warehouse on load
    #[serde(default)]
    pub stock: u32,
}

/// One requested line of a manifest cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Key of a declared good
    pub good: String,

    /// Units requested
    pub count: u32,
}

/// A cart to check out after stocking the warehouse
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartEntry {
    /// Optional label used in logs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub lines: Vec<CartLine>,
}

/// Parsed manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockManifest {
    #[serde(default)]
    pub goods: Vec<GoodEntry>,

    #[serde(default)]
    pub carts: Vec<CartEntry>,
}

impl StockManifest {
    /// Parse and validate a manifest from a TOML string
    pub fn from_toml(toml_str: &str) -> StockResult<Self> {
        let manifest: StockManifest = toml::from_str(toml_str)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check keys are unique and non-blank, and that cart lines only
    /// reference declared goods
    pub fn validate(&self) -> StockResult<()> {
        let mut keys = HashSet::new();
        for entry in &self.goods {
            if entry.key.trim().is_empty() {
                return Err(StockError::invalid_argument("good key cannot be empty"));
            }
            if !keys.insert(entry.key.as_str()) {
                return Err(StockError::invalid_argument(format!(
                    "duplicate good key: {}",
                    entry.key
                )));
            }
        }

        for line in self.carts.iter().flat_map(|c| &c.lines) {
            if !keys.contains(line.good.as_str()) {
                return Err(StockError::invalid_argument(format!(
                    "cart line references unknown good: {}",
                    line.good
                )));
            }
        }
        Ok(())
    }
}

/// Goods addressable by manifest key
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    goods: HashMap<String, Good>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a good under `key`, replacing any previous one
    pub fn insert(&mut self, key: impl Into<String>, good: Good) {
        self.goods.insert(key.into(), good);
    }

    /// Find a good by key
    pub fn get(&self, key: &str) -> Option<&Good> {
        self.goods.get(key)
    }

    /// Find a good by key, failing with `InvalidArgument` when unknown
    pub fn require(&self, key: &str) -> StockResult<&Good> {
        self.get(key)
            .ok_or_else(|| StockError::invalid_argument(format!("unknown good: {}", key)))
    }

    /// All registered goods
    pub fn goods(&self) -> impl Iterator<Item = &Good> {
        self.goods.values()
    }

    pub fn len(&self) -> usize {
        self.goods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goods.is_empty()
    }
}
