//! Rule-based transcript parse pipeline for the voice ledger
//!
//! Turns a free-form speech-to-text transcript describing a financial
//! transaction into a structured record — amount, date, income/expense type,
//! category and subcategory, payment method, merchant, description — each
//! with an independent confidence score, plus an aggregate confidence gating
//! overall success.
//!
//! Everything is ordered pattern matching over static rule tables: no
//! statistical model, no general-purpose parsing. Partial results compose
//! without hard failure, so a usable record comes back even when most fields
//! cannot be determined.
//!
//! # Example
//!
//! ```ignore
//! use voice_ledger_parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new(provider);
//! let record = parser.parse("昨天在星巴克花了150元買咖啡").await;
//!
//! assert_eq!(record.amount, Some(150.0));
//! assert_eq!(record.merchant.as_deref(), Some("星巴克"));
//! ```

pub mod amount;
pub mod category;
pub mod confidence;
pub mod date;
pub mod description;
pub mod merchant;
pub mod normalizer;
pub mod numerals;
pub mod payment;
pub mod transaction_type;

mod error;
mod pipeline;

pub use error::{ParseError, Result};
pub use pipeline::TranscriptParser;

// Re-export key types
pub use amount::AmountMatch;
pub use category::{CategoryMatch, CategoryResolver};
pub use date::{DateExtractor, DateMatch};
pub use description::{DescriptionMatch, PLACEHOLDER_DESCRIPTION};
pub use merchant::{MerchantExtractor, MerchantMatch};
pub use payment::{PaymentMatch, PaymentMethodExtractor};
pub use transaction_type::TypeMatch;
