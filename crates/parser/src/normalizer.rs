//! Transcript text normalization
//!
//! First stage of the pipeline: trims and lowercases the transcript, rewrites
//! informal spoken idioms into their canonical written forms, and collapses
//! whitespace. Pure function, idempotent, never fails — an empty transcript
//! normalizes to an empty string and downstream stages simply find nothing.

use once_cell::sync::Lazy;
use regex::Regex;

// 「150塊」/「150塊錢」→「150元」
static INFORMAL_CURRENCY_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*塊(?:錢)?").unwrap());

// 「5號」/「十五號」→「5日」/「十五日」, for both digit and numeral-word days
static INFORMAL_DAY_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9一二三四五六七八九十兩]{1,3})號").unwrap());

/// Normalize a raw transcript
///
/// Applied in order: trim, lowercase (Latin loanwords like "LINE Pay" arrive
/// in mixed case from the speech-to-text layer), currency-unit rewrite,
/// day-suffix rewrite, whitespace collapse.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let rewritten = INFORMAL_CURRENCY_UNIT.replace_all(&lowered, "${1}元");
    let rewritten = INFORMAL_DAY_SUFFIX.replace_all(&rewritten, "${1}日");
    rewritten.split_whitespace().collect::<Vec<_>>().join(" ")
}
