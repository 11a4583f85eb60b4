//! Keyword rule table.
//!
//! Ordered rules evaluated against the lowercased title. The rules are not
//! mutually exclusive; the first match wins, so ordering here is a semantic
//! contract, not a layout choice.

use super::builtin::Category;

/// One keyword rule: the category assigned when its pattern matches.
#[derive(Debug, Clone)]
pub struct KeywordRuleDef {
    pub category: Category,
    /// Regex alternation, matched against the lowercased title.
    pub pattern: &'static str,
}

/// Ordered keyword rules, first match wins.
pub const KEYWORD_RULES: &[KeywordRuleDef] = &[
    KeywordRuleDef {
        category: Category::Series,
        pattern: r"(dizi|series|türk dizi|ask-i memnu|ezel|medcezir)",
    },
    KeywordRuleDef {
        category: Category::Movie,
        pattern: r"(film|movie|cinema|sinema|4k movie|full hd film)",
    },
    KeywordRuleDef {
        category: Category::Sports,
        pattern: r"(spor|sports|futbol|football|nba|nfl|f1|tennis|voleybol|basketball|cricket)",
    },
    KeywordRuleDef {
        category: Category::News,
        pattern: r"(haber|news|habertürk|cnn|bbc|skynews|ntv|fox)",
    },
    KeywordRuleDef {
        category: Category::Music,
        pattern: r"(müzik|music|radyo|radio)",
    },
    KeywordRuleDef {
        category: Category::Kids,
        pattern: r"(çocuk|kids|cartoon|babytv|nickelodeon|trt çocuk)",
    },
    KeywordRuleDef {
        category: Category::Documentary,
        pattern: r"(belgesel|documentary|discovery|nat geo|history)",
    },
    KeywordRuleDef {
        category: Category::Adult,
        pattern: r"(adult|xxx|erotik|18\+)",
    },
];

/// Tokens that mark a title as Turkish when no keyword rule or bracket code
/// matched. Also matched against the lowercased title.
pub const TURKEY_FALLBACK_PATTERN: &str = r"(turkey|türk|tr:|turkiye)";
