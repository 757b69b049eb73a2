//! Category and subcategory resolution
//!
//! Three ordered strategies, first success wins:
//! 1. merchant→(category, subcategory) table, confidence 0.8
//! 2. scan of the externally supplied catalog, in catalog order: a category
//!    name contained in the text matches at 0.9; otherwise a subcategory name
//!    contained in the text matches at 0.85, returning the parent category
//! 3. keyword→(category, optional subcategory) table, confidence 0.7
//!
//! No strategy matching is an explicit, non-error outcome: an empty category
//! means "needs manual classification", never a pipeline fault.

use once_cell::sync::Lazy;
use voice_ledger_core::CategoryCatalog;

// Canonical merchant → (category, subcategory)
static MERCHANT_CATEGORIES: Lazy<Vec<(&'static str, &'static str, Option<&'static str>)>> =
    Lazy::new(|| {
        vec![
            ("星巴克", "餐飲美食", Some("咖啡茶飲")),
            ("麥當勞", "餐飲美食", Some("速食")),
            ("肯德基", "餐飲美食", Some("速食")),
            ("摩斯漢堡", "餐飲美食", Some("速食")),
            ("Uber Eats", "餐飲美食", Some("外送")),
            ("foodpanda", "餐飲美食", Some("外送")),
            ("7-ELEVEN", "日常購物", Some("便利商店")),
            ("全家", "日常購物", Some("便利商店")),
            ("全聯", "日常購物", Some("超市量販")),
            ("家樂福", "日常購物", Some("超市量販")),
            ("蝦皮購物", "日常購物", Some("網路購物")),
            ("momo購物網", "日常購物", Some("網路購物")),
            ("屈臣氏", "醫療保健", Some("藥妝")),
            ("康是美", "醫療保健", Some("藥妝")),
            ("台灣中油", "交通出行", Some("加油")),
            ("台灣高鐵", "交通出行", Some("火車高鐵")),
            ("誠品", "學習進修", Some("書籍")),
        ]
    });

// Keyword → (category, optional subcategory), scanned in table order
static CATEGORY_KEYWORDS: Lazy<Vec<(&'static str, &'static str, Option<&'static str>)>> =
    Lazy::new(|| {
        vec![
            ("咖啡", "餐飲美食", Some("咖啡茶飲")),
            ("手搖", "餐飲美食", Some("咖啡茶飲")),
            ("飲料", "餐飲美食", Some("咖啡茶飲")),
            ("早餐", "餐飲美食", Some("正餐")),
            ("午餐", "餐飲美食", Some("正餐")),
            ("晚餐", "餐飲美食", Some("正餐")),
            ("宵夜", "餐飲美食", Some("正餐")),
            ("聚餐", "餐飲美食", None),
            ("計程車", "交通出行", Some("計程車")),
            ("捷運", "交通出行", Some("大眾運輸")),
            ("公車", "交通出行", Some("大眾運輸")),
            ("客運", "交通出行", Some("大眾運輸")),
            ("加油", "交通出行", Some("加油")),
            ("停車", "交通出行", Some("停車")),
            ("電影", "休閒娛樂", Some("電影")),
            ("遊戲", "休閒娛樂", Some("遊戲")),
            ("健身", "休閒娛樂", Some("運動健身")),
            ("房租", "居住費用", Some("房租")),
            ("電費", "居住費用", Some("水電瓦斯")),
            ("水費", "居住費用", Some("水電瓦斯")),
            ("瓦斯", "居住費用", Some("水電瓦斯")),
            ("網路費", "居住費用", Some("通訊")),
            ("電話費", "居住費用", Some("通訊")),
            ("掛號", "醫療保健", Some("門診")),
            ("診所", "醫療保健", Some("門診")),
            ("醫院", "醫療保健", Some("門診")),
            ("藥", "醫療保健", Some("藥品")),
            ("衣服", "日常購物", Some("服飾")),
            ("鞋", "日常購物", Some("服飾")),
            ("書", "學習進修", Some("書籍")),
            ("課程", "學習進修", Some("課程")),
            ("補習", "學習進修", Some("課程")),
            ("薪水", "職業收入", Some("薪資")),
            ("薪資", "職業收入", Some("薪資")),
            ("獎金", "職業收入", Some("獎金")),
            ("股息", "投資理財", Some("股利")),
            ("利息", "投資理財", Some("利息")),
        ]
    });

/// A resolved category, optionally with a subcategory
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatch {
    pub category: String,
    pub sub_category: Option<String>,
    pub confidence: f32,
}

/// Category resolver over the fixed tables plus a per-call catalog
pub struct CategoryResolver {
    merchant_table: Vec<(String, String, Option<String>)>,
    keyword_table: Vec<(String, String, Option<String>)>,
}

impl CategoryResolver {
    /// Resolver with the built-in tables
    pub fn new() -> Self {
        Self {
            merchant_table: to_owned_table(&MERCHANT_CATEGORIES),
            keyword_table: to_owned_table(&CATEGORY_KEYWORDS),
        }
    }

    /// Resolver with caller-supplied tables, scanned in the given order
    pub fn with_tables(
        merchant_table: Vec<(String, String, Option<String>)>,
        keyword_table: Vec<(String, String, Option<String>)>,
    ) -> Self {
        Self {
            merchant_table,
            keyword_table,
        }
    }

    /// Resolve a category from the text, the extracted merchant (if any) and
    /// the catalog for the already-classified transaction type
    pub fn resolve(
        &self,
        text: &str,
        merchant: Option<&str>,
        catalog: &CategoryCatalog,
    ) -> Option<CategoryMatch> {
        if let Some(found) = self.by_merchant(merchant) {
            tracing::debug!(category = %found.category, "category resolved via merchant");
            return Some(found);
        }
        if let Some(found) = self.by_catalog(text, catalog) {
            tracing::debug!(category = %found.category, "category resolved via catalog");
            return Some(found);
        }
        if let Some(found) = self.by_keyword(text) {
            tracing::debug!(category = %found.category, "category resolved via keyword");
            return Some(found);
        }
        None
    }

    fn by_merchant(&self, merchant: Option<&str>) -> Option<CategoryMatch> {
        let merchant = merchant?;
        self.merchant_table
            .iter()
            .find(|(name, _, _)| name.as_str() == merchant)
            .map(|(_, category, sub)| CategoryMatch {
                category: category.clone(),
                sub_category: sub.clone(),
                confidence: 0.8,
            })
    }

    fn by_catalog(&self, text: &str, catalog: &CategoryCatalog) -> Option<CategoryMatch> {
        for category in &catalog.categories {
            if !category.name.is_empty() && text.contains(category.name.as_str()) {
                return Some(CategoryMatch {
                    category: category.name.clone(),
                    sub_category: None,
                    confidence: 0.9,
                });
            }
            for sub in &category.subcategories {
                if !sub.is_empty() && text.contains(sub.as_str()) {
                    return Some(CategoryMatch {
                        category: category.name.clone(),
                        sub_category: Some(sub.clone()),
                        confidence: 0.85,
                    });
                }
            }
        }
        None
    }

    fn by_keyword(&self, text: &str) -> Option<CategoryMatch> {
        self.keyword_table
            .iter()
            .find(|(keyword, _, _)| text.contains(keyword.as_str()))
            .map(|(_, category, sub)| CategoryMatch {
                category: category.clone(),
                sub_category: sub.clone(),
                confidence: 0.7,
            })
    }
}

impl Default for CategoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn to_owned_table(
    table: &[(&str, &str, Option<&str>)],
) -> Vec<(String, String, Option<String>)> {
    table
        .iter()
        .map(|(key, category, sub)| {
            (
                key.to_string(),
                category.to_string(),
                sub.map(str::to_string),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use voice_ledger_core::{Category, TransactionType};

    fn expense_catalog() -> CategoryCatalog {
        CategoryCatalog::new(
            TransactionType::Expense,
            vec![
                Category::new(
                    "餐飲美食",
                    vec!["咖啡茶飲".to_string(), "正餐".to_string()],
                ),
                Category::new("交通出行", vec!["計程車".to_string()]),
            ],
        )
    }

    #[test]
    fn test_merchant_table_first() {
        let resolver = CategoryResolver::new();
        // Text also contains the catalog category name; the merchant table
        // is the first strategy and wins
        let got = resolver
            .resolve("星巴克 餐飲美食", Some("星巴克"), &expense_catalog())
            .unwrap();
        assert_eq!(got.category, "餐飲美食");
        assert_eq!(got.sub_category.as_deref(), Some("咖啡茶飲"));
        assert_eq!(got.confidence, 0.8);
    }

    #[test]
    fn test_unknown_merchant_falls_through() {
        let resolver = CategoryResolver::new();
        let got = resolver
            .resolve("搭計程車回家", Some("路邊攤"), &expense_catalog())
            .unwrap();
        // Catalog subcategory 計程車 matches, returning the parent category
        assert_eq!(got.category, "交通出行");
        assert_eq!(got.sub_category.as_deref(), Some("計程車"));
        assert_eq!(got.confidence, 0.85);
    }

    #[test]
    fn test_catalog_category_name() {
        let resolver = CategoryResolver::new();
        let got = resolver
            .resolve("這筆算餐飲美食", None, &expense_catalog())
            .unwrap();
        assert_eq!(got.category, "餐飲美食");
        assert_eq!(got.sub_category, None);
        assert_eq!(got.confidence, 0.9);
    }

    #[test]
    fn test_catalog_order_category_before_own_subcategories() {
        let resolver = CategoryResolver::new();
        // Both the name and a subcategory of the first catalog entry appear;
        // the name check runs first within each entry
        let got = resolver
            .resolve("餐飲美食 咖啡茶飲", None, &expense_catalog())
            .unwrap();
        assert_eq!(got.sub_category, None);
        assert_eq!(got.confidence, 0.9);
    }

    #[test]
    fn test_keyword_table_fallback() {
        let resolver = CategoryResolver::new();
        let got = resolver
            .resolve("買了一雙鞋", None, &expense_catalog())
            .unwrap();
        assert_eq!(got.category, "日常購物");
        assert_eq!(got.sub_category.as_deref(), Some("服飾"));
        assert_eq!(got.confidence, 0.7);
    }

    #[test]
    fn test_no_match_is_none() {
        let resolver = CategoryResolver::new();
        assert!(resolver
            .resolve("零零總總一些東西", None, &expense_catalog())
            .is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let resolver = CategoryResolver::new();
        let empty = CategoryCatalog::empty(TransactionType::Expense);
        let got = resolver.resolve("喝咖啡", None, &empty).unwrap();
        // Only the keyword table can answer
        assert_eq!(got.confidence, 0.7);
    }
}
