//! Category classifier.
//!
//! Compiles the keyword rule table once and applies the full classification
//! cascade to one channel title at a time.

use regex::Regex;

use crate::error::Result;

use super::builtin::Category;
use super::rules::{KEYWORD_RULES, TURKEY_FALLBACK_PATTERN};

/// A keyword rule with its compiled regex.
#[derive(Debug, Clone)]
struct KeywordRule {
    category: Category,
    regex: Regex,
}

/// Classifies channel titles into categories.
///
/// Evaluation order: keyword rules, then bracket country codes, then the
/// Turkey token fallback, then [`Category::Other`]. Keyword rules and the
/// fallback run against the lowercased title; bracket codes are matched on
/// the original text.
#[derive(Debug, Clone)]
pub struct Categorizer {
    keyword_rules: Vec<KeywordRule>,
    bracket_code: Regex,
    turkey_fallback: Regex,
}

impl Categorizer {
    /// Compile the builtin rule table.
    pub fn new() -> Result<Self> {
        let mut keyword_rules = Vec::with_capacity(KEYWORD_RULES.len());
        for def in KEYWORD_RULES {
            keyword_rules.push(KeywordRule {
                category: def.category.clone(),
                regex: Regex::new(def.pattern)?,
            });
        }

        Ok(Self {
            keyword_rules,
            bracket_code: Regex::new(r"\[([A-Z]{2})\]")?,
            turkey_fallback: Regex::new(TURKEY_FALLBACK_PATTERN)?,
        })
    }

    /// Classify one title.
    ///
    /// Total and deterministic: every input, including the empty string,
    /// maps to exactly one category.
    pub fn classify(&self, title: &str) -> Category {
        let lower = title.to_lowercase();

        for rule in &self.keyword_rules {
            if rule.regex.is_match(&lower) {
                return rule.category.clone();
            }
        }

        // First bracketed two-letter code, on the original casing.
        if let Some(caps) = self.bracket_code.captures(title) {
            return Category::from_bracket_code(&caps[1]);
        }

        if self.turkey_fallback.is_match(&lower) {
            return Category::Turkey;
        }

        Category::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorizer() -> Categorizer {
        Categorizer::new().unwrap()
    }

    #[test]
    fn test_keyword_rules_basic() {
        let c = categorizer();
        assert_eq!(c.classify("Kanal D Dizi"), Category::Series);
        assert_eq!(c.classify("Sinema TV"), Category::Movie);
        assert_eq!(c.classify("TRT Spor"), Category::Sports);
        assert_eq!(c.classify("TRT Haber"), Category::News);
        assert_eq!(c.classify("Power Radyo"), Category::Music);
        assert_eq!(c.classify("TRT Çocuk"), Category::Kids);
        assert_eq!(c.classify("Discovery Channel"), Category::Documentary);
        assert_eq!(c.classify("XXX Night"), Category::Adult);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let c = categorizer();
        assert_eq!(c.classify("DIZI MAX"), Category::Series);
        assert_eq!(c.classify("CNN International"), Category::News);
    }

    #[test]
    fn test_keyword_wins_over_bracket_code() {
        let c = categorizer();
        assert_eq!(c.classify("BeIN Sports 1 [TR]"), Category::Sports);
        assert_eq!(c.classify("Discovery Channel [EN]"), Category::Documentary);
        assert_eq!(c.classify("Dizi Kanali [DE]"), Category::Series);
    }

    #[test]
    fn test_rule_order_first_match_wins() {
        // "fox" belongs to the News rule but "sports" hits first.
        let c = categorizer();
        assert_eq!(c.classify("Fox Sports"), Category::Sports);
        // "film" (Movie, rule 2) outranks "haber" (News, rule 4).
        assert_eq!(c.classify("Film Haber"), Category::Movie);
    }

    #[test]
    fn test_bracket_code_when_no_keyword() {
        let c = categorizer();
        assert_eq!(c.classify("Kanal 7 [TR]"), Category::Turkey);
        assert_eq!(c.classify("Das Erste [DE]"), Category::Europe);
        assert_eq!(c.classify("Al Arabiya [AE]"), Category::MiddleEast);
    }

    #[test]
    fn test_unlisted_bracket_code_keeps_raw_code() {
        let c = categorizer();
        assert_eq!(
            c.classify("Unknown Channel [ZZ]"),
            Category::Region("ZZ".to_string())
        );
    }

    #[test]
    fn test_lowercase_bracket_code_is_ignored() {
        // Codes are matched on the original casing only.
        let c = categorizer();
        assert_eq!(c.classify("Some Channel [de]"), Category::Other);
    }

    #[test]
    fn test_first_bracket_code_is_used() {
        let c = categorizer();
        assert_eq!(c.classify("Promo [ZZ] [TR]"), Category::Region("ZZ".to_string()));
    }

    #[test]
    fn test_turkey_token_fallback() {
        let c = categorizer();
        assert_eq!(c.classify("TR: Kanal 7"), Category::Turkey);
        assert_eq!(c.classify("Turkiye Kanali"), Category::Turkey);
    }

    #[test]
    fn test_bracket_code_wins_over_turkey_token() {
        let c = categorizer();
        assert_eq!(c.classify("Türk Kanali [DE]"), Category::Europe);
    }

    #[test]
    fn test_classification_is_total() {
        let c = categorizer();
        assert_eq!(c.classify(""), Category::Other);
        assert_eq!(c.classify("Random Local TV"), Category::Other);
        assert_eq!(c.classify("[X] not a code"), Category::Other);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let c = categorizer();
        let title = "BeIN Sports 1 [TR]";
        assert_eq!(c.classify(title), c.classify(title));
    }
}
