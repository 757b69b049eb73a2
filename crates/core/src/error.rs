//! Error types shared across the voice ledger crates

use crate::record::TransactionType;
use thiserror::Error;

/// Errors surfaced by core collaborators
#[derive(Debug, Error)]
pub enum Error {
    /// The category catalog backend failed or timed out
    #[error("category catalog unavailable for {transaction_type}: {message}")]
    CatalogUnavailable {
        transaction_type: TransactionType,
        message: String,
    },
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
