//! Category catalog provider trait

use crate::catalog::CategoryCatalog;
use crate::error::Result;
use crate::record::TransactionType;
use async_trait::async_trait;

/// Supplies the category catalog for a transaction type
///
/// The single capability the parse pipeline consumes from its environment.
/// Implementations must be safe to call repeatedly and return a consistent
/// ordering for the duration of one parse call; the backing store may be a
/// database, an HTTP service or an in-memory fixture.
#[async_trait]
pub trait CategoryProvider: Send + Sync {
    async fn categories(&self, transaction_type: TransactionType) -> Result<CategoryCatalog>;
}
