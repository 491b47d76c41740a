//! # Manifest Runner
//!
//! Stocks a warehouse from a manifest and checks out each manifest cart,
//! reporting every rejection through `tracing`.

use std::sync::Arc;
use stock_core::{Catalog, Order, Shop, StockManifest, StockResult, Warehouse};
use tracing::{info, instrument, warn};

/// Outcome of a manifest run
#[derive(Debug)]
pub struct RunSummary {
    /// Orders that were checked out successfully
    pub orders: Vec<Order>,
    /// Cart lines the warehouse could not cover when added
    pub rejected_lines: usize,
    /// Carts whose checkout failed
    pub failed_checkouts: usize,
    /// Shop holding the warehouse after all checkouts
    pub shop: Shop,
    /// Goods declared by the manifest
    pub catalog: Catalog,
}

/// Build the warehouse and run every cart in the manifest.
///
/// Only manifest problems (blank, duplicate or unknown keys) abort the run;
/// rejected adds and failed checkouts are logged and counted.
#[instrument(skip_all, fields(goods = manifest.goods.len(), carts = manifest.carts.len()))]
pub fn run(manifest: &StockManifest) -> StockResult<RunSummary> {
    let (warehouse, catalog) = Warehouse::from_manifest(manifest)?;
    let shop = Shop::new(Arc::new(warehouse));
    info!("Warehouse stocked with {} goods", shop.warehouse().len());

    let mut summary = RunSummary {
        orders: Vec::new(),
        rejected_lines: 0,
        failed_checkouts: 0,
        shop,
        catalog,
    };

    for (index, entry) in manifest.carts.iter().enumerate() {
        let label = entry
            .label
            .clone()
            .unwrap_or_else(|| format!("cart-{}", index + 1));
        let mut cart = summary.shop.open_cart();

        for line in &entry.lines {
            let good = summary.catalog.require(&line.good)?;
            if let Err(e) = cart.add(good, line.count) {
                warn!(cart = %label, good = %good, count = line.count, "Line rejected: {}", e);
                summary.rejected_lines += 1;
            }
        }

        if cart.is_empty() {
            warn!(cart = %label, "Nothing to check out");
            summary.failed_checkouts += 1;
            continue;
        }

        match cart.order() {
            Ok(order) => {
                info!(
                    cart = %label,
                    order_id = %order.id(),
                    payment_reference = %order.payment_reference(),
                    units = order.item_count(),
                    "Order placed"
                );
                summary.orders.push(order);
            }
            Err(e) => {
                warn!(cart = %label, "Checkout failed: {}", e);
                summary.failed_checkouts += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        [[goods]]
        key = "iphone-12"
        name = "IPhone 12"
        stock = 10

        [[goods]]
        key = "iphone-11"
        name = "IPhone 11"
        stock = 3

        [[carts]]
        label = "first"
        lines = [
            { good = "iphone-12", count = 4 },
            { good = "iphone-11", count = 3 },
        ]

        [[carts]]
        label = "too-late"
        lines = [{ good = "iphone-11", count = 1 }]

        [[carts]]
        label = "partial"
        lines = [
            { good = "iphone-12", count = 6 },
            { good = "iphone-12", count = 1 },
        ]
    "#;

    #[test]
    fn test_run_manifest() {
        let manifest = StockManifest::from_toml(MANIFEST).unwrap();
        let summary = run(&manifest).unwrap();

        let iphone12 = summary.catalog.require("iphone-12").unwrap();
        let iphone11 = summary.catalog.require("iphone-11").unwrap();

        assert_eq!(summary.orders.len(), 2);
        assert_eq!(summary.orders[0].count(iphone12), 4);
        assert_eq!(summary.orders[0].count(iphone11), 3);
        assert_eq!(summary.orders[1].count(iphone12), 6);

        // "too-late" line and the 7th IPhone 12 in "partial"
        assert_eq!(summary.rejected_lines, 2);
        assert_eq!(summary.failed_checkouts, 1);

        let warehouse = summary.shop.warehouse();
        assert_eq!(warehouse.count(iphone12), 0);
        assert_eq!(warehouse.count(iphone11), 0);
        assert!(warehouse.is_empty());
    }

    #[test]
    fn test_run_without_carts() {
        let manifest =
            StockManifest::from_toml("[[goods]]\nkey = \"a\"\nname = \"A\"\nstock = 1\n").unwrap();
        let summary = run(&manifest).unwrap();

        assert!(summary.orders.is_empty());
        assert_eq!(summary.shop.warehouse().len(), 1);
    }
}
