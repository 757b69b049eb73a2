//! Income/expense classification
//!
//! Two keyword sets scanned in a fixed order: income keywords strictly before
//! expense keywords, so a phrase containing both resolves to income. With no
//! keyword at all the classifier still answers — expense, at a deliberately
//! weak confidence.

use voice_ledger_core::TransactionType;

static INCOME_KEYWORDS: &[&str] = &[
    "收入", "薪水", "薪資", "獎金", "紅利", "退款", "利息", "進帳", "入帳", "賺",
];

static EXPENSE_KEYWORDS: &[&str] = &["花", "買", "付", "繳", "支出", "消費", "購"];

/// Classification outcome; `keyword` is `None` on the default path
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMatch {
    pub value: TransactionType,
    pub confidence: f32,
    pub keyword: Option<&'static str>,
}

/// Classify normalized text as income or expense — always yields a value
pub fn classify(text: &str) -> TypeMatch {
    for &keyword in INCOME_KEYWORDS {
        if text.contains(keyword) {
            return TypeMatch {
                value: TransactionType::Income,
                confidence: 0.8,
                keyword: Some(keyword),
            };
        }
    }
    for &keyword in EXPENSE_KEYWORDS {
        if text.contains(keyword) {
            return TypeMatch {
                value: TransactionType::Expense,
                confidence: 0.7,
                keyword: Some(keyword),
            };
        }
    }
    TypeMatch {
        value: TransactionType::Expense,
        confidence: 0.5,
        keyword: None,
    }
}
