//! Monetary amount extraction
//!
//! An ordered regex cascade: the first pattern in list order that matches
//! wins, later patterns are not tried. A captured literal that fails to parse
//! as a decimal is treated as a no-match for that pattern, never as an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// Confidence assigned to any successful amount match
const AMOUNT_CONFIDENCE: f32 = 0.9;

// Ordered cascade: unit-suffixed number, spend-verb-prefixed number,
// international-currency-suffixed number.
static AMOUNT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(\d+(?:\.\d+)?)\s*(?:元|圓)").unwrap(),
        Regex::new(r"(?:花了|花費|付了|支付|用了|買了|賺了|收了)\s*(\d+(?:\.\d+)?)").unwrap(),
        Regex::new(r"(\d+(?:\.\d+)?)\s*(?:美元|美金|歐元|日圓|usd|eur|jpy)").unwrap(),
    ]
});

/// A matched monetary amount with its text span
#[derive(Debug, Clone, PartialEq)]
pub struct AmountMatch {
    pub value: f64,
    /// Full matched span, used later to carve the description
    pub text: String,
    pub confidence: f32,
}

/// Extract the transaction amount from normalized text
pub fn extract(text: &str) -> Option<AmountMatch> {
    for pattern in AMOUNT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let literal = match caps.get(1) {
                Some(m) => m.as_str(),
                None => continue,
            };
            match literal.parse::<f64>() {
                Ok(value) => {
                    return Some(AmountMatch {
                        value,
                        text: caps.get(0).map(|m| m.as_str().to_string())?,
                        confidence: AMOUNT_CONFIDENCE,
                    });
                }
                // unparsable literal: fall through to the next pattern
                Err(_) => continue,
            }
        }
    }
    None
}
