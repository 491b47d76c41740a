//! # Quantity Ledger
//!
//! Per-good unit counts shared by [`Warehouse`](crate::Warehouse) and
//! [`Cart`](crate::Cart). An entry only exists while its count is positive.

use crate::error::{StockError, StockResult};
use crate::good::{Good, GoodId};
use crate::order::LineItem;
use std::collections::hash_map::{self, HashMap};

/// A mapping from good to a positive unit count
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: HashMap<GoodId, LineItem>,
}

pub(crate) fn ensure_positive(count: u32) -> StockResult<()> {
    if count == 0 {
        return Err(StockError::invalid_argument("count must be positive"));
    }
    Ok(())
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Units held for `good` (0 when absent)
    pub fn count(&self, good: &Good) -> u32 {
        self.entries.get(&good.id()).map(|e| e.count).unwrap_or(0)
    }

    /// Add units of `good`, merging with any existing entry
    pub fn add(&mut self, good: &Good, count: u32) -> StockResult<()> {
        ensure_positive(count)?;

        match self.entries.get_mut(&good.id()) {
            Some(entry) => {
                entry.count = entry.count.checked_add(count).ok_or_else(|| {
                    StockError::invalid_argument(format!("count overflow for {}", good))
                })?;
            }
            None => {
                self.entries.insert(good.id(), LineItem::new(good.clone(), count));
            }
        }
        Ok(())
    }

    /// Remove units of `good`. Fails without touching the entry if `good`
    /// is absent or fewer than `count` units are held. Removing 0 units of a
    /// present good is a no-op.
    pub fn remove(&mut self, good: &Good, count: u32) -> StockResult<()> {
        let entry = self
            .entries
            .get_mut(&good.id())
            .ok_or_else(|| StockError::invalid_state(format!("{} is not present", good)))?;

        if entry.count < count {
            return Err(StockError::invalid_state(format!(
                "cannot remove {} of {}: only {} held",
                count, good, entry.count
            )));
        }

        entry.count -= count;
        if entry.count == 0 {
            self.entries.remove(&good.id());
        }
        Ok(())
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct goods
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all unit counts
    pub fn total_units(&self) -> u64 {
        self.entries.values().map(|e| u64::from(e.count)).sum()
    }

    /// Iterate over `(good, count)` pairs in no particular order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.values(),
        }
    }

    /// Snapshot the current entries
    pub fn line_items(&self) -> Vec<LineItem> {
        self.entries.values().cloned().collect()
    }
}

/// Borrowing iterator over a [`Ledger`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_map::Values<'a, GoodId, LineItem>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Good, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.good, e.count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Ledger {
    type Item = (&'a Good, u32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
