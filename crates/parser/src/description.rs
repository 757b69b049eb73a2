//! Description extraction from the leftover text
//!
//! Starting from the normalized text, removes everything already attributed
//! to other fields — the amount span, date-pattern spans (re-applied
//! structurally), the payment-method and merchant alias spans — plus a fixed
//! stop-word list of verbs and particles, then collapses whitespace. What
//! remains is the description; a remainder too short to be meaningful is
//! replaced by a fixed placeholder at a lower confidence.
//!
//! A separate note field is not split out: the full remainder stays in the
//! description and the note is structurally always absent.

use unicode_segmentation::UnicodeSegmentation;

use crate::date;

/// Description used when the leftover carries no meaning
pub const PLACEHOLDER_DESCRIPTION: &str = "日常消費";

/// Shortest remainder (in graphemes) still treated as meaningful
const MIN_MEANINGFUL_GRAPHEMES: usize = 2;

// Spoken filler removed from the leftover; multi-grapheme entries first so
// 花了 is consumed before 花 and 了 would split it
static STOP_WORDS: &[&str] = &[
    "然後", "還有", "總共", "大概", "左右", "這個", "那個", "一下",
    "花了", "花費", "買了", "付了", "支付", "用了", "收了", "賺了",
    "我", "在", "了", "的", "去", "到", "跟", "和", "從", "共",
    "花", "買", "付", "用", "元", "塊", "錢",
];

/// Spans already attributed to other fields
#[derive(Debug, Default)]
pub struct AttributedSpans<'a> {
    pub amount: Option<&'a str>,
    pub payment: Option<&'a str>,
    pub merchant: Option<&'a str>,
}

/// Description outcome; `placeholder` marks the fallback path
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionMatch {
    pub text: String,
    pub confidence: f32,
    pub placeholder: bool,
}

/// Split the description out of the normalized text
///
/// Returns the description plus the raw leftover (the unparsed span), which
/// is `None` when every part of the text was accounted for.
pub fn split(normalized: &str, spans: &AttributedSpans<'_>) -> (DescriptionMatch, Option<String>) {
    let mut leftover = normalized.to_string();

    if let Some(amount) = spans.amount {
        leftover = leftover.replace(amount, " ");
    }
    leftover = date::strip_date_spans(&leftover);
    if let Some(payment) = spans.payment {
        leftover = leftover.replace(payment, " ");
    }
    if let Some(merchant) = spans.merchant {
        leftover = leftover.replace(merchant, " ");
    }
    for word in STOP_WORDS {
        leftover = leftover.replace(word, " ");
    }

    let leftover = leftover.split_whitespace().collect::<Vec<_>>().join(" ");
    let unparsed = if leftover.is_empty() {
        None
    } else {
        Some(leftover.clone())
    };

    let description = if leftover.graphemes(true).count() < MIN_MEANINGFUL_GRAPHEMES {
        DescriptionMatch {
            text: PLACEHOLDER_DESCRIPTION.to_string(),
            confidence: 0.3,
            placeholder: true,
        }
    } else {
        DescriptionMatch {
            text: leftover,
            confidence: 0.6,
            placeholder: false,
        }
    };

    (description, unparsed)
}
