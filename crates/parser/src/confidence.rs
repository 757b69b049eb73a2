//! Aggregate confidence computation
//!
//! A fixed-weight average over whichever fields were populated from actual
//! matches. Fields carrying no evidence (the default transaction type, the
//! placeholder description) appear in the result's confidence map but do not
//! lift the aggregate. With nothing weighted at all, a floor value keeps the
//! aggregate defined.

use std::collections::HashMap;
use voice_ledger_core::RecordField;

/// Aggregate returned when no weighted field matched
pub const FLOOR_CONFIDENCE: f32 = 0.2;

// Explicit ordered weight table; fields without an entry never contribute
static FIELD_WEIGHTS: &[(RecordField, f32)] = &[
    (RecordField::Amount, 0.30),
    (RecordField::TransactionType, 0.20),
    (RecordField::Category, 0.20),
    (RecordField::Date, 0.10),
    (RecordField::PaymentMethod, 0.10),
    (RecordField::Merchant, 0.05),
    (RecordField::Description, 0.03),
    (RecordField::SubCategory, 0.02),
];

/// Weighted mean of the matched confidences, clamped to `[0, 1]`
pub fn aggregate(matched: &HashMap<RecordField, f32>) -> f32 {
    if matched.is_empty() {
        return FLOOR_CONFIDENCE;
    }

    let mut weighted_sum = 0.0;
    let mut weights_used = 0.0;
    for (field, weight) in FIELD_WEIGHTS {
        if let Some(confidence) = matched.get(field) {
            weighted_sum += confidence * weight;
            weights_used += weight;
        }
    }

    if weights_used == 0.0 {
        return FLOOR_CONFIDENCE;
    }
    (weighted_sum / weights_used).clamp(0.0, 1.0)
}
