//! # Warehouse
//!
//! Ground truth for available stock. The ledger sits behind a `RwLock`:
//! availability queries share the read lock, while stock-in and checkout
//! deductions take the write lock, so a checkout's validate-then-deduct
//! step is never interleaved with another mutation.

use crate::error::{StockError, StockResult};
use crate::good::{Good, GoodId};
use crate::ledger::{ensure_positive, Ledger};
use crate::manifest::{Catalog, StockManifest};
use crate::order::LineItem;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A single warehouse's stock
#[derive(Debug, Default)]
pub struct Warehouse {
    ledger: RwLock<Ledger>,
}

impl Warehouse {
    /// Create an empty warehouse
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a warehouse stocked from a manifest, along with the catalog of
    /// goods the manifest declares
    pub fn from_manifest(manifest: &StockManifest) -> StockResult<(Self, Catalog)> {
        manifest.validate()?;

        let warehouse = Self::new();
        let mut catalog = Catalog::new();
        for entry in &manifest.goods {
            let good = Good::new(&entry.name)?;
            if entry.stock > 0 {
                warehouse.ship(&good, entry.stock)?;
            }
            catalog.insert(&entry.key, good);
        }
        Ok((warehouse, catalog))
    }

    // Ledger mutations are all-or-nothing, so a poisoned lock still guards
    // a consistent ledger.
    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.ledger.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.ledger.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stock-in: add `count` units of `good`
    pub fn ship(&self, good: &Good, count: u32) -> StockResult<()> {
        self.write().add(good, count)
    }

    /// Units of `good` currently in stock
    pub fn count(&self, good: &Good) -> u32 {
        self.read().count(good)
    }

    /// Whether at least `count` units of `good` are in stock
    pub fn is_good_enough(&self, good: &Good, count: u32) -> bool {
        self.read().count(good) >= count
    }

    /// Whether every `(good, count)` pair can be covered at once.
    /// Repeated goods are summed.
    pub fn is_all_goods_enough<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = (&'a Good, u32)>,
    {
        let ledger = self.read();
        find_shortfall(&ledger, items).is_none()
    }

    /// Remove every `(good, count)` pair as one transaction.
    ///
    /// Either all deductions are applied or none are; on failure the
    /// warehouse is left exactly as it was.
    pub fn withdraw_all<'a, I>(&self, items: I) -> StockResult<()>
    where
        I: IntoIterator<Item = (&'a Good, u32)>,
    {
        let items: Vec<(&Good, u32)> = items.into_iter().collect();
        for (_, count) in &items {
            ensure_positive(*count)?;
        }

        let mut ledger = self.write();

        if let Some(shortfall) = find_shortfall(&ledger, items.iter().copied()) {
            return Err(shortfall.into_error());
        }

        let mut applied: Vec<(&Good, u32)> = Vec::with_capacity(items.len());
        for (good, count) in items {
            if let Err(err) = ledger.remove(good, count) {
                for (good, count) in applied.into_iter().rev() {
                    let restored = ledger.add(good, count);
                    debug_assert!(restored.is_ok(), "re-adding removed units cannot overflow");
                }
                return Err(err);
            }
            applied.push((good, count));
        }
        Ok(())
    }

    /// Snapshot of the current stock
    pub fn stock(&self) -> Vec<LineItem> {
        self.read().line_items()
    }

    /// Number of distinct goods in stock
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

struct Shortfall {
    good: Good,
    requested: u64,
    available: u32,
}

impl Shortfall {
    fn into_error(self) -> StockError {
        StockError::invalid_state(format!(
            "not enough {}: requested {}, available {}",
            self.good, self.requested, self.available
        ))
    }
}

fn find_shortfall<'a, I>(ledger: &Ledger, items: I) -> Option<Shortfall>
where
    I: IntoIterator<Item = (&'a Good, u32)>,
{
    let mut requested: HashMap<GoodId, (&Good, u64)> = HashMap::new();
    for (good, count) in items {
        requested.entry(good.id()).or_insert((good, 0)).1 += u64::from(count);
    }

    requested.into_values().find_map(|(good, requested)| {
        let available = ledger.count(good);
        (u64::from(available) < requested).then(|| Shortfall {
            good: good.clone(),
            requested,
            available,
        })
    })
}
