//! # Order Types
//!
//! Line items and the immutable order produced by a cart checkout.

use crate::error::{StockError, StockResult};
use crate::good::Good;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A `(good, count)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The good being counted
    pub good: Good,

    /// Units of the good
    pub count: u32,
}

impl LineItem {
    pub fn new(good: Good, count: u32) -> Self {
        Self { good, count }
    }
}

/// A committed order.
///
/// Built once at checkout and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    /// Unique order ID (generated)
    id: String,

    /// Committed line items
    line_items: Vec<LineItem>,

    /// Opaque reference handed to the payment collaborator
    payment_reference: String,

    /// Created timestamp
    created_at: DateTime<Utc>,
}

impl Order {
    /// Create an order from committed line items
    pub fn new(line_items: Vec<LineItem>, payment_reference: impl Into<String>) -> StockResult<Self> {
        Self::validated(OrderRecord {
            id: Uuid::new_v4().to_string(),
            line_items,
            payment_reference: payment_reference.into(),
            created_at: Utc::now(),
        })
    }

    fn validated(record: OrderRecord) -> StockResult<Self> {
        if record.id.trim().is_empty() {
            return Err(StockError::invalid_argument("order id cannot be empty"));
        }
        if record.payment_reference.trim().is_empty() {
            return Err(StockError::invalid_argument("payment reference cannot be empty"));
        }
        if let Some(item) = record.line_items.iter().find(|item| item.count == 0) {
            return Err(StockError::invalid_argument(format!(
                "line item for {} has zero count",
                item.good
            )));
        }

        Ok(Self {
            id: record.id,
            line_items: record.line_items,
            payment_reference: record.payment_reference,
            created_at: record.created_at,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Iterate over `(good, count)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Good, u32)> + '_ {
        self.line_items.iter().map(|item| (&item.good, item.count))
    }

    pub fn payment_reference(&self) -> &str {
        &self.payment_reference
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Units of `good` in this order (0 when absent)
    pub fn count(&self, good: &Good) -> u32 {
        self.line_items
            .iter()
            .filter(|item| &item.good == good)
            .map(|item| item.count)
            .sum()
    }

    /// Total units across all line items
    pub fn item_count(&self) -> u64 {
        self.line_items.iter().map(|i| u64::from(i.count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Unchecked wire form of an [`Order`]
#[derive(Deserialize)]
struct OrderRecord {
    id: String,
    line_items: Vec<LineItem>,
    payment_reference: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = StockError;

    fn try_from(record: OrderRecord) -> StockResult<Self> {
        Order::validated(record)
    }
}
