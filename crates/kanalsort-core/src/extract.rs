//! Title extractor.
//!
//! Pulls the channel title out of a playlist line by locating the first
//! `tvg-name="..."` attribute. Lines without one are skipped by callers;
//! a malformed attribute is a skip, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

static TVG_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r#"tvg-name="([^"]+)""#).unwrap());

/// Extract the channel title from one playlist line.
///
/// Returns the value of the first `tvg-name="..."` attribute, or `None` when
/// the line carries no well-formed attribute (an unterminated quote simply
/// fails to match).
pub fn extract_title(line: &str) -> Option<&str> {
    TVG_NAME
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
