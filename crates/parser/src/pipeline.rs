//! The parse pipeline orchestrator
//!
//! Runs the stages in a fixed, unconditional order — normalize, amount, date,
//! type, payment method, merchant, category, description, aggregate. A stage
//! finding nothing leaves its field unset and execution proceeds; the only
//! suspension point, and the only thing that can fail, is the category
//! catalog fetch. On that fault the pipeline halts with everything extracted
//! so far still in the result, so the caller keeps partial information for
//! manual correction.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use voice_ledger_core::{CategoryProvider, ParseResult, RecordField};

use crate::amount::{self, AmountMatch};
use crate::category::CategoryResolver;
use crate::date::{DateExtractor, DateMatch};
use crate::description::{self, AttributedSpans, PLACEHOLDER_DESCRIPTION};
use crate::error::ParseError;
use crate::merchant::{MerchantExtractor, MerchantMatch};
use crate::payment::{PaymentMatch, PaymentMethodExtractor};
use crate::transaction_type::{self, TypeMatch};
use crate::{confidence, normalizer};

/// Minimum aggregate confidence for a successful parse
const SUCCESS_THRESHOLD: f32 = 0.4;

/// The transcript parse pipeline
///
/// Stateless per call apart from the configured tables; one instance can
/// serve many concurrent calls.
pub struct TranscriptParser {
    provider: Arc<dyn CategoryProvider>,
    payment: PaymentMethodExtractor,
    merchant: MerchantExtractor,
    category: CategoryResolver,
    today: Option<NaiveDate>,
}

impl TranscriptParser {
    /// Parser with the built-in vocabularies
    pub fn new(provider: Arc<dyn CategoryProvider>) -> Self {
        Self {
            provider,
            payment: PaymentMethodExtractor::new(),
            merchant: MerchantExtractor::new(),
            category: CategoryResolver::new(),
            today: None,
        }
    }

    /// Parser with application-configured extractors
    pub fn with_extractors(
        provider: Arc<dyn CategoryProvider>,
        payment: PaymentMethodExtractor,
        merchant: MerchantExtractor,
        category: CategoryResolver,
    ) -> Self {
        Self {
            provider,
            payment,
            merchant,
            category,
            today: None,
        }
    }

    /// Anchor relative dates to a fixed day, for deterministic tests
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Parse one transcript into a structured record
    ///
    /// Never panics and never returns an error for any input string; all
    /// failure is represented inside the returned record.
    pub async fn parse(&self, transcript: &str) -> ParseResult {
        let normalized = normalizer::normalize(transcript);
        tracing::debug!(%normalized, "transcript normalized");

        let dates = match self.today {
            Some(day) => DateExtractor::with_today(day),
            None => DateExtractor::new(),
        };

        let amount = amount::extract(&normalized);
        let date = dates.extract(&normalized);
        let type_match = transaction_type::classify(&normalized);
        let payment = self.payment.extract(&normalized);
        let merchant = self.merchant.extract(&normalized);

        // The single external call; its failure is the only fatal condition
        let catalog = match self.provider.categories(type_match.value).await {
            Ok(catalog) => catalog,
            Err(err) => {
                let err = ParseError::CatalogFetch(err.to_string());
                tracing::warn!(error = %err, "parse halted on catalog fetch");
                return failed_result(
                    transcript, &normalized, amount, date, type_match, payment, merchant, err,
                );
            }
        };

        let category = self.category.resolve(
            &normalized,
            merchant.as_ref().map(|m| m.name.as_str()),
            &catalog,
        );

        let spans = AttributedSpans {
            amount: amount.as_ref().map(|m| m.text.as_str()),
            payment: payment.as_ref().map(|m| m.text.as_str()),
            merchant: merchant.as_ref().map(|m| m.text.as_str()),
        };
        let (desc, unparsed) = description::split(&normalized, &spans);

        // Two views of the confidences: `confidences` mirrors every populated
        // field; `matched` holds only evidence-bearing entries and drives the
        // aggregate, so a defaulted type or placeholder description cannot
        // lift it.
        let mut confidences = HashMap::new();
        let mut matched = HashMap::new();

        if let Some(m) = &amount {
            confidences.insert(RecordField::Amount, m.confidence);
            matched.insert(RecordField::Amount, m.confidence);
        }
        if let Some(m) = &date {
            confidences.insert(RecordField::Date, m.confidence);
            matched.insert(RecordField::Date, m.confidence);
        }
        confidences.insert(RecordField::TransactionType, type_match.confidence);
        if type_match.keyword.is_some() {
            matched.insert(RecordField::TransactionType, type_match.confidence);
        }
        if let Some(m) = &payment {
            confidences.insert(RecordField::PaymentMethod, m.confidence);
            matched.insert(RecordField::PaymentMethod, m.confidence);
        }
        if let Some(m) = &merchant {
            confidences.insert(RecordField::Merchant, m.confidence);
            matched.insert(RecordField::Merchant, m.confidence);
        }
        if let Some(m) = &category {
            confidences.insert(RecordField::Category, m.confidence);
            matched.insert(RecordField::Category, m.confidence);
            if m.sub_category.is_some() {
                confidences.insert(RecordField::SubCategory, m.confidence);
                matched.insert(RecordField::SubCategory, m.confidence);
            }
        }
        confidences.insert(RecordField::Description, desc.confidence);
        if !desc.placeholder {
            matched.insert(RecordField::Description, desc.confidence);
        }

        let aggregate = confidence::aggregate(&matched);
        let success = aggregate >= SUCCESS_THRESHOLD;
        tracing::debug!(aggregate, success, "parse complete");

        ParseResult {
            transcript: transcript.to_string(),
            normalized,
            amount: amount.map(|m| m.value),
            date: date.map(|m| m.date),
            transaction_type: type_match.value,
            payment_method: payment.map(|m| m.method),
            merchant: merchant.map(|m| m.name),
            category: category.as_ref().map(|m| m.category.clone()),
            sub_category: category.and_then(|m| m.sub_category),
            description: desc.text,
            note: None,
            confidence: confidences,
            aggregate_confidence: Some(aggregate),
            success,
            error_message: None,
            unparsed,
        }
    }
}

// Terminal failure: aggregation never runs, the error message is set, and
// already-extracted fields are kept.
#[allow(clippy::too_many_arguments)]
fn failed_result(
    transcript: &str,
    normalized: &str,
    amount: Option<AmountMatch>,
    date: Option<DateMatch>,
    type_match: TypeMatch,
    payment: Option<PaymentMatch>,
    merchant: Option<MerchantMatch>,
    err: ParseError,
) -> ParseResult {
    let mut confidences = HashMap::new();
    if let Some(m) = &amount {
        confidences.insert(RecordField::Amount, m.confidence);
    }
    if let Some(m) = &date {
        confidences.insert(RecordField::Date, m.confidence);
    }
    confidences.insert(RecordField::TransactionType, type_match.confidence);
    if let Some(m) = &payment {
        confidences.insert(RecordField::PaymentMethod, m.confidence);
    }
    if let Some(m) = &merchant {
        confidences.insert(RecordField::Merchant, m.confidence);
    }
    confidences.insert(RecordField::Description, 0.3);

    ParseResult {
        transcript: transcript.to_string(),
        normalized: normalized.to_string(),
        amount: amount.map(|m| m.value),
        date: date.map(|m| m.date),
        transaction_type: type_match.value,
        payment_method: payment.map(|m| m.method),
        merchant: merchant.map(|m| m.name),
        category: None,
        sub_category: None,
        description: PLACEHOLDER_DESCRIPTION.to_string(),
        note: None,
        confidence: confidences,
        aggregate_confidence: None,
        success: false,
        error_message: Some(err.to_string()),
        unparsed: None,
    }
}
