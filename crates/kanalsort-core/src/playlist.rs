//! Playlist scanning and grouping.
//!
//! Streams a playlist file line by line, extracts channel titles and
//! accumulates them into per-category groups. The grouping itself is pure
//! and file-free ([`classify_titles`]), so the classification pass can be
//! tested without touching the filesystem.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::category::{Category, Categorizer};
use crate::error::{KanalsortError, Result};
use crate::extract::extract_title;

/// How often the progress callback fires, in lines.
pub const PROGRESS_INTERVAL: usize = 10_000;

/// One category and the titles assigned to it, in first-seen order.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub category: Category,
    pub titles: Vec<String>,
}

/// The result of one categorization pass.
///
/// Groups appear in the order their category was first seen; every title
/// lives in exactly one group. Built once per run and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedPlaylist {
    groups: Vec<CategoryGroup>,
}

impl ClassifiedPlaylist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one classified title to its category group.
    pub fn push(&mut self, category: Category, title: String) {
        match self.groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.titles.push(title),
            None => self.groups.push(CategoryGroup {
                category,
                titles: vec![title],
            }),
        }
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of classified titles.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.titles.len()).sum()
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Titles assigned to one category, if any were.
    pub fn titles_in(&self, category: &Category) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.category == *category)
            .map(|g| g.titles.as_slice())
    }

    /// Groups sorted by channel count, largest first.
    ///
    /// The sort is stable: equal-sized categories keep their first-seen
    /// order.
    pub fn sorted_by_size(&self) -> Vec<&CategoryGroup> {
        let mut sorted: Vec<_> = self.groups.iter().collect();
        sorted.sort_by(|a, b| b.titles.len().cmp(&a.titles.len()));
        sorted
    }
}

/// Classify a sequence of titles into a grouping, without file I/O.
pub fn classify_titles<I>(titles: I, categorizer: &Categorizer) -> ClassifiedPlaylist
where
    I: IntoIterator<Item = String>,
{
    let mut playlist = ClassifiedPlaylist::new();
    for title in titles {
        let category = categorizer.classify(&title);
        playlist.push(category, title);
    }
    playlist
}

/// Scan a playlist file and classify every extracted title.
///
/// `on_progress` fires every [`PROGRESS_INTERVAL`] lines with the number of
/// lines read so far. Lines without a `tvg-name` attribute are skipped
/// silently; only I/O and encoding failures abort the scan.
pub fn scan_playlist(
    path: &Path,
    categorizer: &Categorizer,
    on_progress: Option<&dyn Fn(usize)>,
) -> Result<ClassifiedPlaylist> {
    if !path.exists() {
        return Err(KanalsortError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut playlist = ClassifiedPlaylist::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        // The first line may carry a UTF-8 byte order mark.
        let line = if index == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            line.as_str()
        };

        let count = index + 1;
        if count % PROGRESS_INTERVAL == 0 {
            if let Some(progress) = on_progress {
                progress(count);
            }
        }

        if let Some(title) = extract_title(line) {
            let category = categorizer.classify(title);
            playlist.push(category, title.to_string());
        }
    }

    Ok(playlist)
}
