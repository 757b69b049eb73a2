//! Transaction date extraction
//!
//! Four ordered strategies, first success wins:
//! 1. relative-day keyword table (今天/昨天/...), confidence 0.9
//! 2. full 年月日 numeric pattern, confidence 0.95
//! 3. 月日 numeric pattern with the year inferred, confidence 0.8
//! 4. 月日 in numeral words via [`crate::numerals`], confidence 0.7
//!
//! Strategies 3 and 4 roll the inferred date forward one year when it falls
//! strictly before today. A captured combination that does not form a valid
//! calendar date is a no-match for that strategy and falls through — never an
//! error.

use chrono::{Datelike, Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::numerals;

// Scan order is declaration order; the 前天 family is listed longest-first so
// 大前天 is not shadowed by its 前天 suffix.
static RELATIVE_DAYS: &[(&str, i64)] = &[
    ("今天", 0),
    ("昨天", -1),
    ("大前天", -3),
    ("前天", -2),
    ("明天", 1),
    ("後天", 2),
];

static FULL_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})日").unwrap());

static MONTH_DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2})月(\d{1,2})日").unwrap());

static WORD_MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([一二三四五六七八九十兩]{1,3})月([一二三四五六七八九十兩]{1,3})日").unwrap()
});

/// A matched calendar date with its text span
#[derive(Debug, Clone, PartialEq)]
pub struct DateMatch {
    pub date: NaiveDate,
    /// Matched span (a keyword or a date expression)
    pub text: String,
    pub confidence: f32,
}

/// Date extractor with an injectable reference day
pub struct DateExtractor {
    today: NaiveDate,
}

impl DateExtractor {
    /// Extractor anchored to the local calendar day
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Extractor anchored to a fixed day, for deterministic tests
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Resolve a date from normalized text, absent when nothing matches
    pub fn extract(&self, text: &str) -> Option<DateMatch> {
        self.relative_day(text)
            .or_else(|| self.full_date(text))
            .or_else(|| self.month_day(text))
            .or_else(|| self.word_month_day(text))
    }

    fn relative_day(&self, text: &str) -> Option<DateMatch> {
        for (keyword, offset) in RELATIVE_DAYS {
            if text.contains(keyword) {
                return Some(DateMatch {
                    date: self.today + Duration::days(*offset),
                    text: (*keyword).to_string(),
                    confidence: 0.9,
                });
            }
        }
        None
    }

    fn full_date(&self, text: &str) -> Option<DateMatch> {
        let caps = FULL_DATE.captures(text)?;
        let year: i32 = caps.get(1)?.as_str().parse().ok()?;
        let month: u32 = caps.get(2)?.as_str().parse().ok()?;
        let day: u32 = caps.get(3)?.as_str().parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(DateMatch {
            date,
            text: caps.get(0)?.as_str().to_string(),
            confidence: 0.95,
        })
    }

    fn month_day(&self, text: &str) -> Option<DateMatch> {
        let caps = MONTH_DAY.captures(text)?;
        let month: u32 = caps.get(1)?.as_str().parse().ok()?;
        let day: u32 = caps.get(2)?.as_str().parse().ok()?;
        self.resolve_inferred_year(month, day, caps.get(0)?.as_str(), 0.8)
    }

    fn word_month_day(&self, text: &str) -> Option<DateMatch> {
        let caps = WORD_MONTH_DAY.captures(text)?;
        let month = numerals::word_to_number(caps.get(1)?.as_str())?;
        let day = numerals::word_to_number(caps.get(2)?.as_str())?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        self.resolve_inferred_year(month, day, caps.get(0)?.as_str(), 0.7)
    }

    // Year inference: current year, rolled forward one year when the result
    // is already past. A roll-forward landing on an invalid date (Feb 29) is
    // a no-match.
    fn resolve_inferred_year(
        &self,
        month: u32,
        day: u32,
        span: &str,
        confidence: f32,
    ) -> Option<DateMatch> {
        let mut date = NaiveDate::from_ymd_opt(self.today.year(), month, day)?;
        if date < self.today {
            date = NaiveDate::from_ymd_opt(self.today.year() + 1, month, day)?;
        }
        Some(DateMatch {
            date,
            text: span.to_string(),
            confidence,
        })
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove every date-pattern span from the text
///
/// Re-applies the strategies structurally so the description splitter does
/// not depend on stored offsets.
pub fn strip_date_spans(text: &str) -> String {
    let mut out = FULL_DATE.replace_all(text, " ").into_owned();
    out = MONTH_DAY.replace_all(&out, " ").into_owned();
    out = WORD_MONTH_DAY.replace_all(&out, " ").into_owned();
    for (keyword, _) in RELATIVE_DAYS {
        out = out.replace(keyword, " ");
    }
    out
}
