//! Category catalog model
//!
//! Catalogs are owned by the surrounding application (user-editable there)
//! and handed to the parser read-only, scoped to one transaction type. Scan
//! order follows declaration order, so providers must return a consistent
//! ordering for the duration of one parse call.

use crate::record::TransactionType;
use serde::{Deserialize, Serialize};

/// One category with its ordered subcategories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub subcategories: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, subcategories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            subcategories,
        }
    }
}

/// Ordered category list for one transaction type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    pub transaction_type: TransactionType,
    pub categories: Vec<Category>,
}

impl CategoryCatalog {
    pub fn new(transaction_type: TransactionType, categories: Vec<Category>) -> Self {
        Self {
            transaction_type,
            categories,
        }
    }

    /// Empty catalog for a type (a valid state: resolution simply finds nothing)
    pub fn empty(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            categories: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
