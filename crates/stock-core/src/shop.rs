//! # Shop
//!
//! Issues carts bound to a single warehouse.

use crate::cart::Cart;
use crate::payment::{BoxedReferenceIssuer, UuidReferenceIssuer};
use crate::warehouse::Warehouse;
use std::sync::Arc;

/// Cart factory for one warehouse
#[derive(Clone)]
pub struct Shop {
    warehouse: Arc<Warehouse>,
    issuer: BoxedReferenceIssuer,
}

impl Shop {
    /// Create a shop that issues `pay_<uuid>` payment references
    pub fn new(warehouse: Arc<Warehouse>) -> Self {
        Self::with_issuer(warehouse, Arc::new(UuidReferenceIssuer))
    }

    /// Create a shop with a custom payment reference issuer
    pub fn with_issuer(warehouse: Arc<Warehouse>, issuer: BoxedReferenceIssuer) -> Self {
        Self { warehouse, issuer }
    }

    /// Open an empty cart against this shop's warehouse
    pub fn open_cart(&self) -> Cart {
        Cart::new(Arc::clone(&self.warehouse), Arc::clone(&self.issuer))
    }

    pub fn warehouse(&self) -> &Arc<Warehouse> {
        &self.warehouse
    }
}

impl std::fmt::Debug for Shop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shop")
            .field("warehouse", &self.warehouse)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Good, LineItem};

    #[test]
    fn test_carts_share_the_warehouse() {
        let shop = Shop::new(Arc::new(Warehouse::new()));
        let first = shop.open_cart();
        let second = shop.open_cart();

        assert!(Arc::ptr_eq(first.warehouse(), second.warehouse()));
        assert!(Arc::ptr_eq(first.warehouse(), shop.warehouse()));
        assert!(first.is_empty());
    }

    #[test]
    fn test_custom_issuer() {
        let good = Good::new("A").unwrap();
        let warehouse = Arc::new(Warehouse::new());
        warehouse.ship(&good, 2).unwrap();

        let shop = Shop::with_issuer(
            warehouse,
            Arc::new(|items: &[LineItem]| format!("invoice-{}", items.len())),
        );
        let mut cart = shop.open_cart();
        cart.add(&good, 2).unwrap();

        let order = cart.order().unwrap();
        assert_eq!(order.payment_reference(), "invoice-1");
    }
}
