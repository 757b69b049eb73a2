//! Parser error types

use thiserror::Error;

/// Internal pipeline faults
///
/// Only the category-catalog fetch can fail; everything else in the pipeline
/// treats "nothing found" as a plain non-error absence. Callers of
/// [`crate::TranscriptParser::parse`] never see this type directly — it is
/// folded into the result's error message.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The external category provider failed or timed out
    #[error("category catalog fetch failed: {0}")]
    CatalogFetch(String),
}

/// Result alias for pipeline internals
pub type Result<T> = std::result::Result<T, ParseError>;
