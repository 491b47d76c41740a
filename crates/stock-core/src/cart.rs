//! # Cart
//!
//! A customer's tentative selection, bound to the warehouse it was opened
//! against. Adding checks availability but holds nothing back; checkout
//! re-checks and deducts under the warehouse write lock.

use crate::error::{StockError, StockResult};
use crate::good::Good;
use crate::ledger::{ensure_positive, Iter, Ledger};
use crate::order::Order;
use crate::payment::BoxedReferenceIssuer;
use crate::warehouse::Warehouse;
use std::sync::Arc;

/// A cart issued by a [`Shop`](crate::Shop)
pub struct Cart {
    ledger: Ledger,
    warehouse: Arc<Warehouse>,
    issuer: BoxedReferenceIssuer,
}

impl Cart {
    pub(crate) fn new(warehouse: Arc<Warehouse>, issuer: BoxedReferenceIssuer) -> Self {
        Self {
            ledger: Ledger::new(),
            warehouse,
            issuer,
        }
    }

    /// Add `count` units of `good`.
    ///
    /// The warehouse must hold at least the cart's resulting total for
    /// `good`, not just the units added by this call.
    pub fn add(&mut self, good: &Good, count: u32) -> StockResult<()> {
        ensure_positive(count)?;

        let requested = self
            .ledger
            .count(good)
            .checked_add(count)
            .ok_or_else(|| StockError::invalid_argument(format!("count overflow for {}", good)))?;

        if !self.warehouse.is_good_enough(good, requested) {
            return Err(StockError::invalid_state(format!(
                "not enough {} in warehouse: requested {}, available {}",
                good,
                requested,
                self.warehouse.count(good)
            )));
        }

        self.ledger.add(good, count)
    }

    /// Drop `count` units of `good` from the cart
    pub fn remove(&mut self, good: &Good, count: u32) -> StockResult<()> {
        self.ledger.remove(good, count)
    }

    /// Empty the cart without ordering
    pub fn clear(&mut self) {
        self.ledger.clear();
    }

    /// Units of `good` in the cart
    pub fn count(&self, good: &Good) -> u32 {
        self.ledger.count(good)
    }

    pub fn iter(&self) -> Iter<'_> {
        self.ledger.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn warehouse(&self) -> &Arc<Warehouse> {
        &self.warehouse
    }

    /// Check out: deduct every line from the warehouse and emit an order.
    ///
    /// Fails with `InvalidState` when the cart is empty or the warehouse can
    /// no longer cover it, and with `InvalidArgument` when the issuer hands
    /// back an unusable payment reference. On any failure the cart and the
    /// warehouse are unchanged. On success the cart is empty and can be reused.
    pub fn order(&mut self) -> StockResult<Order> {
        if self.ledger.is_empty() {
            return Err(StockError::invalid_state("cannot order an empty cart"));
        }

        // The order must be fully built before any stock leaves the warehouse.
        let line_items = self.ledger.line_items();
        let reference = self.issuer.issue(&line_items);
        let order = Order::new(line_items, reference)?;

        self.warehouse.withdraw_all(order.iter())?;

        self.ledger.clear();
        Ok(order)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = (&'a Good, u32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart")
            .field("ledger", &self.ledger)
            .finish_non_exhaustive()
    }
}
