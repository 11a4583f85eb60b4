pub mod category;
pub mod config;
pub mod error;
pub mod extract;
pub mod playlist;
pub mod report;

pub use category::{Category, Categorizer, KeywordRuleDef, KEYWORD_RULES, TURKEY_FALLBACK_PATTERN};
pub use config::Config;
pub use error::{KanalsortError, Result};
pub use extract::extract_title;
pub use playlist::{
    classify_titles, scan_playlist, CategoryGroup, ClassifiedPlaylist, PROGRESS_INTERVAL,
};
pub use report::{render_report, write_report};
