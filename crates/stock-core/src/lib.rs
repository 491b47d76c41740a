//! # stock-core
//!
//! In-memory inventory and checkout for a single warehouse.
//!
//! This crate provides:
//! - `Good` and `GoodId` for merchandise identity
//! - `Ledger`, the non-negative per-good count mapping
//! - `Warehouse` with availability checks and atomic withdrawals
//! - `Shop` and `Cart` for building and checking out selections
//! - `Order` and `LineItem`, the committed result of a checkout
//! - `PaymentReferenceIssuer` for pluggable payment references
//! - `StockManifest` and `Catalog` for loading stock from TOML
//! - `StockError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use stock_core::{Good, Shop, Warehouse};
//!
//! let iphone12 = Good::new("IPhone 12")?;
//! let warehouse = Arc::new(Warehouse::new());
//! warehouse.ship(&iphone12, 10)?;
//!
//! let shop = Shop::new(Arc::clone(&warehouse));
//! let mut cart = shop.open_cart();
//! cart.add(&iphone12, 4)?;
//!
//! let order = cart.order()?;
//! assert_eq!(order.count(&iphone12), 4);
//! assert_eq!(warehouse.count(&iphone12), 6);
//! # Ok::<(), stock_core::StockError>(())
//! ```

pub mod cart;
pub mod error;
pub mod good;
pub mod ledger;
pub mod manifest;
pub mod order;
pub mod payment;
pub mod shop;
pub mod warehouse;

// Re-exports for convenience
pub use cart::Cart;
pub use error::{StockError, StockResult};
pub use good::{Good, GoodId};
pub use ledger::Ledger;
pub use manifest::{CartEntry, CartLine, Catalog, GoodEntry, StockManifest};
pub use order::{LineItem, Order};
pub use payment::{BoxedReferenceIssuer, PaymentReferenceIssuer, UuidReferenceIssuer};
pub use shop::Shop;
pub use warehouse::Warehouse;
