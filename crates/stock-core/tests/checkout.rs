//! End-to-end checkout scenarios against a shared warehouse.

use std::sync::{Arc, Barrier};
use std::thread;

use stock_core::{Good, Shop, StockManifest, Warehouse};

#[test]
fn iphone_scenario() {
    let iphone12 = Good::new("IPhone 12").unwrap();
    let iphone11 = Good::new("IPhone 11").unwrap();

    let warehouse = Arc::new(Warehouse::new());
    warehouse.ship(&iphone12, 10).unwrap();
    warehouse.ship(&iphone11, 3).unwrap();

    let shop = Shop::new(Arc::clone(&warehouse));
    let mut cart = shop.open_cart();
    cart.add(&iphone12, 4).unwrap();
    cart.add(&iphone11, 3).unwrap();

    let order = cart.order().unwrap();

    assert_eq!(order.line_items().len(), 2);
    assert_eq!(order.count(&iphone12), 4);
    assert_eq!(order.count(&iphone11), 3);
    assert!(!order.payment_reference().is_empty());

    assert_eq!(warehouse.count(&iphone12), 6);
    assert_eq!(warehouse.count(&iphone11), 0);
    let stock = warehouse.stock();
    assert_eq!(stock.len(), 1);
    assert_eq!(stock[0].good, iphone12);
}

#[test]
fn second_checkout_of_same_stock_fails() {
    let a = Good::new("A").unwrap();
    let warehouse = Arc::new(Warehouse::new());
    warehouse.ship(&a, 10).unwrap();
    let shop = Shop::new(Arc::clone(&warehouse));

    let mut first = shop.open_cart();
    let mut second = shop.open_cart();
    first.add(&a, 6).unwrap();
    second.add(&a, 6).unwrap();

    first.order().unwrap();
    let err = second.order().unwrap_err();

    assert!(err.is_invalid_state());
    assert_eq!(warehouse.count(&a), 4);
    assert_eq!(second.count(&a), 6);
}

#[test]
fn concurrent_checkouts_never_oversell() {
    const CARTS: usize = 16;

    let a = Good::new("A").unwrap();
    let b = Good::new("B").unwrap();
    let warehouse = Arc::new(Warehouse::new());
    warehouse.ship(&a, 20).unwrap();
    warehouse.ship(&b, 20).unwrap();
    let shop = Shop::new(Arc::clone(&warehouse));

    let barrier = Arc::new(Barrier::new(CARTS));
    let handles: Vec<_> = (0..CARTS)
        .map(|_| {
            let mut cart = shop.open_cart();
            cart.add(&a, 3).unwrap();
            cart.add(&b, 2).unwrap();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cart.order().is_ok()
            })
        })
        .collect();

    let orders = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count() as u32;

    // 20 / 3 = 6 carts can be covered for A, which is the tighter good.
    assert_eq!(orders, 6);
    assert_eq!(warehouse.count(&a), 20 - 3 * orders);
    assert_eq!(warehouse.count(&b), 20 - 2 * orders);
}

#[test]
fn manifest_driven_checkout() {
    let manifest = StockManifest::from_toml(
        r#"
        [[goods]]
        key = "iphone-12"
        name = "IPhone 12"
        stock = 10

        [[goods]]
        key = "iphone-11"
        name = "IPhone 11"
        stock = 1

        [[carts]]
        lines = [{ good = "iphone-11", count = 3 }]
        "#,
    )
    .unwrap();

    let (warehouse, catalog) = Warehouse::from_manifest(&manifest).unwrap();
    let shop = Shop::new(Arc::new(warehouse));
    let mut cart = shop.open_cart();

    let line = &manifest.carts[0].lines[0];
    let good = catalog.require(&line.good).unwrap();
    let err = cart.add(good, line.count).unwrap_err();

    assert!(err.is_invalid_state());
    assert!(cart.is_empty());
    assert_eq!(shop.warehouse().count(good), 1);
}
