//! Error types for the tally-core library.
//!
//! Data-quality problems inside invoice markup are never errors here: extraction
//! is best-effort and missing fields propagate as `None`. Errors cover the state
//! store only (I/O, serialization, and references to ids that do not exist).

use thiserror::Error;

/// Main error type for the tally library.
#[derive(Error, Debug)]
pub enum TallyError {
    /// No receipt with the given id exists in the state.
    #[error("receipt not found: {0}")]
    ReceiptNotFound(String),

    /// No line item with the given id exists on the receipt.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// State serialization error.
    #[error("state error: {0}")]
    State(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the tally library.
pub type Result<T> = std::result::Result<T, TallyError>;
