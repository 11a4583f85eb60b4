//! Report rendering and persistence.
//!
//! Rendering is split from writing so the report body can be asserted on
//! without a filesystem.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::error::{KanalsortError, Result};
use crate::playlist::ClassifiedPlaylist;

const RULE_WIDTH: usize = 70;

/// Render the full report as one string.
///
/// Categories appear sorted by channel count, largest first, each under its
/// own banner with the uppercased label and every title numbered from 1.
pub fn render_report(playlist: &ClassifiedPlaylist) -> String {
    let rule = "═".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str("CHANNEL CATEGORIZATION REPORT\n");
    out.push_str(&format!(
        "Generated: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&rule);
    out.push('\n');

    for group in playlist.sorted_by_size() {
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "{} ({} channels)\n",
            group.category.label().to_uppercase(),
            group.titles.len()
        ));
        out.push_str(&rule);
        out.push_str("\n\n");

        for (i, title) in group.titles.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, title));
        }
    }

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "SUMMARY: {} channels, {} categories\n",
        playlist.total(),
        playlist.len()
    ));
    out.push_str(&rule);
    out.push('\n');

    out
}

/// Write the report to `path`.
///
/// A failure here is a write error: callers have already shown the console
/// summary by the time this runs, so partial results stay visible.
pub fn write_report(path: &Path, playlist: &ClassifiedPlaylist) -> Result<()> {
    let content = render_report(playlist);
    fs::write(path, content).map_err(|source| KanalsortError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}
