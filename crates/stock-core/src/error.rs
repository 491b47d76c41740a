//! # Stock Error Types
//!
//! Typed error handling for the stockroom core.
//! All fallible operations return `Result<T, StockError>`.

use thiserror::Error;

/// Core error type for all stock operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    /// Malformed input (zero counts, blank names, overflowing totals).
    /// Always raised before any mutation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The current contents cannot satisfy the request
    /// (insufficient stock, missing entry, empty cart)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Stock manifest could not be parsed
    #[error("Manifest error: {0}")]
    Manifest(String),
}

impl StockError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Returns true for malformed-input failures
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StockError::InvalidArgument(_))
    }

    /// Returns true for failures caused by the current stock or cart contents
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, StockError::InvalidState(_))
    }
}

impl From<toml::de::Error> for StockError {
    fn from(err: toml::de::Error) -> Self {
        StockError::Manifest(err.to_string())
    }
}

/// Result type alias for stock operations
pub type StockResult<T> = Result<T, StockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert!(StockError::invalid_argument("count must be positive").is_invalid_argument());
        assert!(StockError::invalid_state("not enough stock").is_invalid_state());
        assert!(!StockError::Manifest("bad toml".into()).is_invalid_state());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StockError::invalid_state("not enough IPhone 11").to_string(),
            "Invalid state: not enough IPhone 11"
        );
        assert_eq!(
            StockError::invalid_argument("count must be positive").to_string(),
            "Invalid argument: count must be positive"
        );
    }

    #[test]
    fn test_toml_error_converts_to_manifest() {
        let err: StockError = toml::from_str::<toml::Value>("goods = [").unwrap_err().into();
        assert!(matches!(err, StockError::Manifest(_)));
    }
}
