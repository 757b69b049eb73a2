//! Payment method extraction
//!
//! An ordered alias→canonical table scanned top-to-bottom; the first alias
//! found as a substring of the text wins. Built-in aliases cover the payment
//! rails common in Taiwan; the surrounding application can replace the table
//! with entries from its own configuration.

use once_cell::sync::Lazy;

/// Confidence assigned to any payment-method hit
const PAYMENT_CONFIDENCE: f32 = 0.9;

// (alias, canonical) — aliases are matched against lowercased text
static PAYMENT_ALIASES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("信用卡", "信用卡"),
        ("刷卡", "信用卡"),
        ("visa", "信用卡"),
        ("mastercard", "信用卡"),
        ("line pay", "LINE Pay"),
        ("linepay", "LINE Pay"),
        ("apple pay", "Apple Pay"),
        ("applepay", "Apple Pay"),
        ("悠遊卡", "悠遊卡"),
        ("一卡通", "一卡通"),
        ("街口", "街口支付"),
        ("轉帳", "銀行轉帳"),
        ("匯款", "銀行轉帳"),
        ("付現", "現金"),
        ("現金", "現金"),
    ]
});

/// A matched payment method
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMatch {
    /// Canonical method name
    pub method: String,
    /// Alias as it appeared in the text
    pub text: String,
    pub confidence: f32,
}

/// Payment method extractor over an ordered alias table
pub struct PaymentMethodExtractor {
    aliases: Vec<(String, String)>,
}

impl PaymentMethodExtractor {
    /// Extractor with the built-in alias table
    pub fn new() -> Self {
        Self {
            aliases: PAYMENT_ALIASES
                .iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
        }
    }

    /// Extractor with caller-supplied `(alias, canonical)` entries, scanned
    /// in the given order — for application-configured vocabularies
    pub fn with_aliases(aliases: Vec<(String, String)>) -> Self {
        Self { aliases }
    }

    /// First alias found as a substring wins; none found is a non-error
    pub fn extract(&self, text: &str) -> Option<PaymentMatch> {
        for (alias, canonical) in &self.aliases {
            if text.contains(alias.as_str()) {
                return Some(PaymentMatch {
                    method: canonical.clone(),
                    text: alias.clone(),
                    confidence: PAYMENT_CONFIDENCE,
                });
            }
        }
        None
    }
}

impl Default for PaymentMethodExtractor {
    fn default() -> Self {
        Self::new()
    }
}
