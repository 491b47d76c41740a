//! # Payment References
//!
//! Every order carries an opaque payment reference handed to whatever
//! collaborator takes the money. How the reference is produced is a
//! strategy chosen when the shop is built.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │      PaymentReferenceIssuer (trait)      │
//! │  └── issue(line_items) -> String         │
//! └──────────────────────────────────────────┘
//!                     ▲
//!          ┌──────────┴──────────┐
//!  ┌───────┴───────┐     ┌───────┴───────┐
//!  │ UuidReference │     │  caller's own │
//!  │    Issuer     │     │    issuer     │
//!  └───────────────┘     └───────────────┘
//! ```

use crate::order::LineItem;
use std::sync::Arc;
use uuid::Uuid;

/// Produces the payment reference for a freshly checked-out order.
pub trait PaymentReferenceIssuer: Send + Sync {
    /// Issue a reference for the given committed line items.
    ///
    /// Must return a non-empty string; references should be unique per order.
    fn issue(&self, line_items: &[LineItem]) -> String;
}

/// Type alias for a shared issuer (dynamic dispatch)
pub type BoxedReferenceIssuer = Arc<dyn PaymentReferenceIssuer>;

/// Default issuer: `pay_` followed by a random UUID
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidReferenceIssuer;

impl UuidReferenceIssuer {
    pub const PREFIX: &'static str = "pay_";
}

impl PaymentReferenceIssuer for UuidReferenceIssuer {
    fn issue(&self, _line_items: &[LineItem]) -> String {
        format!("{}{}", Self::PREFIX, Uuid::new_v4().simple())
    }
}

impl<F> PaymentReferenceIssuer for F
where
    F: Fn(&[LineItem]) -> String + Send + Sync,
{
    fn issue(&self, line_items: &[LineItem]) -> String {
        self(line_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_issuer_format() {
        let reference = UuidReferenceIssuer.issue(&[]);

        assert!(reference.starts_with("pay_"));
        assert_eq!(reference.len(), "pay_".len() + 32);
        assert_ne!(reference, UuidReferenceIssuer.issue(&[]));
    }

    #[test]
    fn test_closure_issuer() {
        let issuer: BoxedReferenceIssuer =
            Arc::new(|items: &[LineItem]| format!("ref-{}", items.len()));
        assert_eq!(issuer.issue(&[]), "ref-0");
    }
}
