//! The structured transaction record and its field types
//!
//! A parse call turns one transcript into exactly one [`ParseResult`]. Every
//! populated field carries an entry in the confidence map and vice versa;
//! consumers render low-confidence fields as editable suggestions, never as
//! authoritative values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of the structured record, used to key the confidence map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Amount,
    Date,
    TransactionType,
    PaymentMethod,
    Merchant,
    Category,
    SubCategory,
    Description,
    Note,
}

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Amount => "amount",
            RecordField::Date => "date",
            RecordField::TransactionType => "transaction_type",
            RecordField::PaymentMethod => "payment_method",
            RecordField::Merchant => "merchant",
            RecordField::Category => "category",
            RecordField::SubCategory => "sub_category",
            RecordField::Description => "description",
            RecordField::Note => "note",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An extracted value paired with its confidence score
///
/// Absence of an extraction is modeled as `Option<FieldExtraction<T>>` being
/// `None` — distinct from a zero-confidence value, and never written into the
/// confidence map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldExtraction<T> {
    pub value: T,
    /// Confidence in `[0.0, 1.0]`
    pub confidence: f32,
}

impl<T> FieldExtraction<T> {
    pub fn new(value: T, confidence: f32) -> Self {
        Self { value, confidence }
    }
}

/// The structured record produced by one parse call
///
/// Built exactly once per call and immutable thereafter. `transaction_type`
/// and `description` are always populated; everything else is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    /// Raw transcript as received
    pub transcript: String,
    /// Normalized-text snapshot the extractors ran against
    pub normalized: String,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub transaction_type: TransactionType,
    pub payment_method: Option<String>,
    pub merchant: Option<String>,
    pub category: Option<String>,
    /// Present only when `category` is present
    pub sub_category: Option<String>,
    pub description: String,
    /// Structurally always absent; the description absorbs the full remainder
    pub note: Option<String>,
    /// Per-field confidence, one entry per populated field
    pub confidence: HashMap<RecordField, f32>,
    /// Weighted combination of the populated confidences, in `[0.0, 1.0]`;
    /// `None` only when the pipeline halted before aggregation
    pub aggregate_confidence: Option<f32>,
    pub success: bool,
    /// Set only when the pipeline hit an internal fault
    pub error_message: Option<String>,
    /// Normalized text not attributable to any recognized field
    pub unparsed: Option<String>,
}

impl ParseResult {
    /// Confidence for a single field, if that field was populated
    pub fn confidence_for(&self, field: RecordField) -> Option<f32> {
        self.confidence.get(&field).copied()
    }

    /// Amount paired with its confidence
    pub fn amount_extraction(&self) -> Option<FieldExtraction<f64>> {
        let confidence = self.confidence_for(RecordField::Amount)?;
        Some(FieldExtraction::new(self.amount?, confidence))
    }

    /// Date paired with its confidence
    pub fn date_extraction(&self) -> Option<FieldExtraction<NaiveDate>> {
        let confidence = self.confidence_for(RecordField::Date)?;
        Some(FieldExtraction::new(self.date?, confidence))
    }

    /// Merchant name paired with its confidence
    pub fn merchant_extraction(&self) -> Option<FieldExtraction<&str>> {
        let confidence = self.confidence_for(RecordField::Merchant)?;
        Some(FieldExtraction::new(self.merchant.as_deref()?, confidence))
    }
}
