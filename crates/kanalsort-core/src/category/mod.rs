//! # Category module
//!
//! Classifies channel titles into a fixed set of categories.
//!
//! Classification is a pure, total function: every title yields exactly one
//! category, decided by an ordered cascade of signals:
//!
//! 1. Keyword rules (strongest signal, first match wins)
//! 2. Bracketed two-letter country codes, e.g. `[TR]`
//! 3. Generic Turkey tokens
//! 4. The `Other` catch-all
//!
//! ## Module layout
//!
//! - `builtin`: the [`Category`] set, display labels, region table
//! - `rules`: the ordered keyword rule table
//! - `classifier`: the compiled [`Categorizer`]
//!
//! ## Example
//!
//! ```rust
//! use kanalsort_core::category::{Categorizer, Category};
//!
//! let categorizer = Categorizer::new().unwrap();
//! assert_eq!(categorizer.classify("TRT Haber"), Category::News);
//! // Keyword rules outrank bracket codes.
//! assert_eq!(categorizer.classify("BeIN Sports 1 [TR]"), Category::Sports);
//! // Unlisted codes keep the raw code.
//! assert_eq!(
//!     categorizer.classify("Unknown Channel [ZZ]"),
//!     Category::Region("ZZ".into())
//! );
//! ```

mod builtin;
mod classifier;
mod rules;

// Re-exports
pub use builtin::Category;
pub use classifier::Categorizer;
pub use rules::{KeywordRuleDef, KEYWORD_RULES, TURKEY_FALLBACK_PATTERN};
