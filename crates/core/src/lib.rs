//! Core traits and types for the voice ledger
//!
//! This crate provides foundational types used across all other crates:
//! - The structured transaction record produced by the parse pipeline
//! - Field and confidence types
//! - The category catalog model (externally owned, read-only)
//! - The `CategoryProvider` trait for pluggable catalog backends
//! - Error types

pub mod catalog;
pub mod error;
pub mod record;
pub mod traits;

pub use catalog::{Category, CategoryCatalog};
pub use error::{Error, Result};
pub use record::{FieldExtraction, ParseResult, RecordField, TransactionType};
pub use traits::CategoryProvider;
