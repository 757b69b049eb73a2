//! Integration tests for the transcript parse pipeline
//!
//! These run the full pipeline against an in-memory category provider and
//! verify the structured records end to end.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use voice_ledger_core::{
    Category, CategoryCatalog, CategoryProvider, Error, ParseResult, RecordField, Result,
    TransactionType,
};
use voice_ledger_parser::{TranscriptParser, PLACEHOLDER_DESCRIPTION};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("voice_ledger_parser=debug")
        .with_test_writer()
        .try_init();
}

fn subs(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// In-memory catalogs, one per transaction type
struct FixtureCatalogs;

#[async_trait]
impl CategoryProvider for FixtureCatalogs {
    async fn categories(&self, transaction_type: TransactionType) -> Result<CategoryCatalog> {
        let categories = match transaction_type {
            TransactionType::Expense => vec![
                Category::new("餐飲美食", subs(&["咖啡茶飲", "正餐"])),
                Category::new("交通出行", subs(&["計程車", "大眾運輸"])),
                Category::new("居住費用", subs(&["房租", "水電瓦斯"])),
            ],
            TransactionType::Income => vec![
                Category::new("職業收入", subs(&["薪資", "獎金"])),
                Category::new("投資理財", subs(&["股利", "利息"])),
            ],
        };
        Ok(CategoryCatalog::new(transaction_type, categories))
    }
}

/// Provider that always fails, to exercise the terminal failure path
struct FailingCatalogs;

#[async_trait]
impl CategoryProvider for FailingCatalogs {
    async fn categories(&self, transaction_type: TransactionType) -> Result<CategoryCatalog> {
        Err(Error::CatalogUnavailable {
            transaction_type,
            message: "backend offline".to_string(),
        })
    }
}

fn anchored_parser() -> TranscriptParser {
    TranscriptParser::new(Arc::new(FixtureCatalogs))
        .with_today(NaiveDate::from_ymd_opt(2025, 6, 18).unwrap())
}

/// Every populated field must have a confidence entry in [0, 1], and vice versa
fn assert_confidence_invariant(result: &ParseResult) {
    let mut populated = HashSet::new();
    if result.amount.is_some() {
        populated.insert(RecordField::Amount);
    }
    if result.date.is_some() {
        populated.insert(RecordField::Date);
    }
    populated.insert(RecordField::TransactionType);
    if result.payment_method.is_some() {
        populated.insert(RecordField::PaymentMethod);
    }
    if result.merchant.is_some() {
        populated.insert(RecordField::Merchant);
    }
    if result.category.is_some() {
        populated.insert(RecordField::Category);
    }
    if result.sub_category.is_some() {
        populated.insert(RecordField::SubCategory);
    }
    populated.insert(RecordField::Description);
    if result.note.is_some() {
        populated.insert(RecordField::Note);
    }

    let mapped: HashSet<RecordField> = result.confidence.keys().copied().collect();
    assert_eq!(mapped, populated, "confidence map out of sync: {result:?}");

    for (field, confidence) in &result.confidence {
        assert!(
            (0.0..=1.0).contains(confidence),
            "confidence for {field} out of range: {confidence}"
        );
    }
}

/// A rich expense transcript fills in every major field
#[tokio::test]
async fn test_full_expense_transcript() {
    init_tracing();
    let parser = anchored_parser();

    let result = parser.parse("昨天在星巴克花了150元買咖啡").await;

    assert_eq!(result.amount, Some(150.0));
    assert_eq!(result.date, NaiveDate::from_ymd_opt(2025, 6, 17));
    assert_eq!(result.transaction_type, TransactionType::Expense);
    assert_eq!(result.merchant.as_deref(), Some("星巴克"));
    assert_eq!(result.category.as_deref(), Some("餐飲美食"));
    assert_eq!(result.sub_category.as_deref(), Some("咖啡茶飲"));
    assert_eq!(result.description, "咖啡");
    assert_eq!(result.note, None);
    assert!(result.success);
    assert!(result.aggregate_confidence.unwrap() >= 0.4);
    assert_eq!(result.error_message, None);
    assert_confidence_invariant(&result);

    let merchant = result.merchant_extraction().unwrap();
    assert_eq!(merchant.value, "星巴克");
    assert_eq!(merchant.confidence, 0.8);
}

/// An empty transcript still yields a well-formed record: defaulted type,
/// placeholder description, floor aggregate, no success
#[tokio::test]
async fn test_empty_transcript() {
    let parser = anchored_parser();

    let result = parser.parse("").await;

    assert_eq!(result.amount, None);
    assert_eq!(result.date, None);
    assert_eq!(result.transaction_type, TransactionType::Expense);
    assert_eq!(
        result.confidence_for(RecordField::TransactionType),
        Some(0.5)
    );
    assert_eq!(result.description, PLACEHOLDER_DESCRIPTION);
    assert_eq!(result.confidence_for(RecordField::Description), Some(0.3));
    assert_eq!(result.category, None);
    assert_eq!(result.aggregate_confidence, Some(0.2));
    assert!(!result.success);
    assert_eq!(result.unparsed, None);
    assert_confidence_invariant(&result);
}

/// Income keywords classify before expense keywords and the income catalog
/// is fetched for category resolution
#[tokio::test]
async fn test_income_salary() {
    let parser = anchored_parser();

    let result = parser.parse("薪水收入50000元").await;

    assert_eq!(result.transaction_type, TransactionType::Income);
    assert_eq!(
        result.confidence_for(RecordField::TransactionType),
        Some(0.8)
    );
    assert_eq!(result.amount, Some(50000.0));
    assert_eq!(result.category.as_deref(), Some("職業收入"));
    assert!(result.success);
    assert_confidence_invariant(&result);
}

/// A provider fault is the only fatal condition: no aggregate, an error
/// message, and everything already extracted still present
#[tokio::test]
async fn test_catalog_fetch_failure() {
    init_tracing();
    let parser = TranscriptParser::new(Arc::new(FailingCatalogs))
        .with_today(NaiveDate::from_ymd_opt(2025, 6, 18).unwrap());

    let result = parser.parse("昨天花了150元").await;

    assert!(!result.success);
    assert!(result.error_message.is_some());
    assert_eq!(result.aggregate_confidence, None);
    assert_eq!(result.amount, Some(150.0));
    assert_eq!(result.date, NaiveDate::from_ymd_opt(2025, 6, 17));
    assert_eq!(result.category, None);
    assert_eq!(result.description, PLACEHOLDER_DESCRIPTION);
    assert_confidence_invariant(&result);
}

/// A relative-day keyword outranks an absolute date in the same transcript
#[tokio::test]
async fn test_relative_date_outranks_absolute() {
    let parser = anchored_parser();

    let result = parser.parse("今天補記2024年3月5日的帳").await;

    assert_eq!(result.date, NaiveDate::from_ymd_opt(2025, 6, 18));
    assert_eq!(result.confidence_for(RecordField::Date), Some(0.9));
}

/// Amount round-trip across the supported unit words
#[tokio::test]
async fn test_amount_round_trip() {
    let parser = anchored_parser();

    for unit in ["元", "圓"] {
        let result = parser.parse(&format!("137.5{unit}")).await;
        assert_eq!(result.amount, Some(137.5), "unit {unit}");
        assert_eq!(result.confidence_for(RecordField::Amount), Some(0.9));
    }

    // The informal unit is rewritten by the normalizer before extraction
    let result = parser.parse("137.5塊錢").await;
    assert_eq!(result.amount, Some(137.5));
}

/// Payment method aliases map to canonical names
#[tokio::test]
async fn test_payment_method_extraction() {
    let parser = anchored_parser();

    let result = parser.parse("用line pay買飲料").await;

    assert_eq!(result.payment_method.as_deref(), Some("LINE Pay"));
    assert_eq!(
        result.confidence_for(RecordField::PaymentMethod),
        Some(0.9)
    );
    assert_eq!(result.category.as_deref(), Some("餐飲美食"));
    assert_confidence_invariant(&result);
}

/// A transcript no extractor fully covers still succeeds on type plus
/// description alone, with the category left for manual classification
#[tokio::test]
async fn test_sparse_transcript_still_usable() {
    let parser = anchored_parser();

    let result = parser.parse("買東西").await;

    assert_eq!(result.transaction_type, TransactionType::Expense);
    assert_eq!(result.category, None);
    assert_eq!(result.sub_category, None);
    assert_eq!(result.description, "東西");
    assert!(result.success);
    assert_confidence_invariant(&result);
}

/// Leftover text not attributable to any field surfaces as unparsed content
#[tokio::test]
async fn test_unparsed_leftover() {
    let parser = anchored_parser();

    let result = parser.parse("昨天在星巴克花了150元買咖啡").await;
    assert_eq!(result.unparsed.as_deref(), Some("咖啡"));

    let fully_attributed = parser.parse("昨天在星巴克花了150元").await;
    assert_eq!(fully_attributed.unparsed, None);
}

/// One parser instance serves concurrent calls
#[tokio::test]
async fn test_concurrent_parses() {
    let parser = Arc::new(anchored_parser());

    let first = parser.parse("昨天花了150元");
    let second = parser.parse("薪水收入50000元");
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first.amount, Some(150.0));
    assert_eq!(second.transaction_type, TransactionType::Income);
}
