//! Merchant name extraction
//!
//! Location prepositions are stripped first (treated as separators, never
//! deleting adjacent content), then an ordered alias→canonical table is
//! scanned top-to-bottom for the first alias contained in the text. The
//! built-in table covers common Taiwanese chains plus their Latin-script
//! spellings; applications can substitute their own table.

use once_cell::sync::Lazy;

/// Confidence assigned to any merchant hit
const MERCHANT_CONFIDENCE: f32 = 0.8;

// Prepositions introducing a location; replaced with a space so adjacent
// content survives intact
static LOCATION_PREPOSITIONS: &[&str] = &["在", "去", "到", "從"];

// (alias, canonical) — aliases are matched against lowercased text
static MERCHANT_ALIASES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("星巴克", "星巴克"),
        ("starbucks", "星巴克"),
        ("7-11", "7-ELEVEN"),
        ("711", "7-ELEVEN"),
        ("小七", "7-ELEVEN"),
        ("seven", "7-ELEVEN"),
        ("全家", "全家"),
        ("familymart", "全家"),
        ("全聯", "全聯"),
        ("家樂福", "家樂福"),
        ("carrefour", "家樂福"),
        ("麥當勞", "麥當勞"),
        ("mcdonald", "麥當勞"),
        ("肯德基", "肯德基"),
        ("kfc", "肯德基"),
        ("摩斯", "摩斯漢堡"),
        ("uber eats", "Uber Eats"),
        ("ubereats", "Uber Eats"),
        ("foodpanda", "foodpanda"),
        ("蝦皮", "蝦皮購物"),
        ("shopee", "蝦皮購物"),
        ("momo", "momo購物網"),
        ("屈臣氏", "屈臣氏"),
        ("watsons", "屈臣氏"),
        ("康是美", "康是美"),
        ("中油", "台灣中油"),
        ("高鐵", "台灣高鐵"),
        ("誠品", "誠品"),
    ]
});

/// A matched merchant
#[derive(Debug, Clone, PartialEq)]
pub struct MerchantMatch {
    /// Canonical merchant name
    pub name: String,
    /// Alias as it appeared in the text
    pub text: String,
    pub confidence: f32,
}

/// Merchant extractor over an ordered alias table
pub struct MerchantExtractor {
    aliases: Vec<(String, String)>,
}

impl MerchantExtractor {
    /// Extractor with the built-in alias table
    pub fn new() -> Self {
        Self {
            aliases: MERCHANT_ALIASES
                .iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
        }
    }

    /// Extractor with caller-supplied `(alias, canonical)` entries
    pub fn with_aliases(aliases: Vec<(String, String)>) -> Self {
        Self { aliases }
    }

    /// First alias contained in the preposition-stripped text wins
    pub fn extract(&self, text: &str) -> Option<MerchantMatch> {
        let stripped = strip_prepositions(text);
        for (alias, canonical) in &self.aliases {
            if stripped.contains(alias.as_str()) {
                return Some(MerchantMatch {
                    name: canonical.clone(),
                    text: alias.clone(),
                    confidence: MERCHANT_CONFIDENCE,
                });
            }
        }
        None
    }
}

impl Default for MerchantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_prepositions(text: &str) -> String {
    let mut out = text.to_string();
    for preposition in LOCATION_PREPOSITIONS {
        out = out.replace(preposition, " ");
    }
    out
}
