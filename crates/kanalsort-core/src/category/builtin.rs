//! Builtin category definitions.
//!
//! The closed set of categories a channel title can classify into, the
//! bracket-code region table, and the display-label lookup.

use std::fmt;

/// Classification bucket for a channel title.
///
/// Carries identity only; the decorated display string comes from
/// [`Category::label`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Series,
    Movie,
    Sports,
    News,
    Music,
    Kids,
    Documentary,
    Adult,
    Turkey,
    Europe,
    Balkans,
    MiddleEast,
    Asia,
    Americas,
    /// Bracket code not present in the region table, kept verbatim.
    Region(String),
    Other,
}

/// Bracket code -> region category, grouped.
///
/// Codes missing from every group fall back to [`Category::Region`] with the
/// raw code.
const REGION_GROUPS: &[(&[&str], Category)] = &[
    (&["TR"], Category::Turkey),
    (
        &["EN", "GB", "DE", "FR", "IT", "ES", "NL", "BE", "AT", "CH"],
        Category::Europe,
    ),
    (
        &["RS", "BG", "GR", "XK", "BA", "HR", "ME", "RO", "UA"],
        Category::Balkans,
    ),
    (
        &["AE", "SA", "EG", "IQ", "IL", "LB", "JO"],
        Category::MiddleEast,
    ),
    (
        &["CN", "IN", "JP", "KR", "TH", "ID", "MY", "VN"],
        Category::Asia,
    ),
    (&["BR", "AR", "MX", "CO", "CL"], Category::Americas),
];

impl Category {
    /// Map a two-letter uppercase bracket code to its region category.
    pub fn from_bracket_code(code: &str) -> Self {
        for (codes, category) in REGION_GROUPS {
            if codes.contains(&code) {
                return category.clone();
            }
        }
        Self::Region(code.to_string())
    }

    /// Display label: decorative prefix plus human-readable name.
    pub fn label(&self) -> String {
        match self {
            Self::Series => "📺 Series".to_string(),
            Self::Movie => "🎬 Movies".to_string(),
            Self::Sports => "⚽ Sports".to_string(),
            Self::News => "📰 News".to_string(),
            Self::Music => "🎵 Music".to_string(),
            Self::Kids => "🎨 Kids".to_string(),
            Self::Documentary => "🎬 Documentary".to_string(),
            Self::Adult => "⚠️ Adult".to_string(),
            Self::Turkey => "🇹🇷 Turkey".to_string(),
            Self::Europe => "🌍 Europe".to_string(),
            Self::Balkans => "🇷🇸 Balkans".to_string(),
            Self::MiddleEast => "🕌 Middle East".to_string(),
            Self::Asia => "🏯 Asia".to_string(),
            Self::Americas => "🌎 Americas".to_string(),
            Self::Region(code) => format!("🌐 {}", code),
            Self::Other => "🔹 Other".to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
