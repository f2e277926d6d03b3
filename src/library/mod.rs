//! Chord sheet library.
//!
//! Indexes a directory of chord sheet text files (`.txt`, `.cho`, `.chords`)
//! named `Artist - Title.ext` or just `Title.ext`, parses every sheet, and
//! provides lookup by title.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Instant;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use rayon::prelude::*;
use regex::Regex;
use walkdir::WalkDir;

use crate::constants::library::{MIN_FUZZY_SCORE, SHEET_EXTENSIONS};
use crate::error::{Error, Result};
use crate::lyrics::{parse_content, ParsedContent};

/// Regex matching sheet filenames like `Traditional - Amazing Grace`.
#[allow(clippy::expect_used)]
static RE_ARTIST_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+-\s+(.+)$").expect("valid regex: RE_ARTIST_TITLE")
});

/// A single chord sheet loaded from disk.
#[derive(Debug, Clone)]
pub struct SheetEntry {
    /// Song title from the file name.
    pub title: String,
    /// Artist from the file name, when present.
    pub artist: Option<String>,
    /// Lowercased title for case-insensitive matching.
    title_lower: String,
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Raw chord+lyric content.
    pub content: String,
    /// Parsed content.
    pub parsed: ParsedContent,
}

/// Read and parse one sheet file.
pub fn load_sheet(path: &Path) -> Result<SheetEntry> {
    let content = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Library(format!("Sheet file name is not valid UTF-8: {}", path.display())))?;
    let (artist, title) = split_artist_title(stem);

    Ok(SheetEntry {
        title_lower: title.to_lowercase(),
        title,
        artist,
        path: path.to_path_buf(),
        parsed: parse_content(&content),
        content,
    })
}

/// Whether a path has one of the sheet extensions.
pub fn is_sheet_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SHEET_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
}

/// Split a file stem like `Artist - Title` into (artist, title).
fn split_artist_title(stem: &str) -> (Option<String>, String) {
    RE_ARTIST_TITLE.captures(stem).map_or_else(
        || (None, stem.trim().to_string()),
        |caps| {
            let artist = caps.get(1).map(|m| m.as_str().trim().to_string());
            let title = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
            (artist, title)
        },
    )
}

/// Parsed index of a sheet directory.
#[derive(Debug)]
pub struct SheetLibrary {
    root: PathBuf,
    entries: Vec<SheetEntry>,
}

impl SheetLibrary {
    /// Scan `root` recursively and parse every sheet in parallel.
    ///
    /// Unreadable files are logged and skipped.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::Library(format!(
                "Library path does not exist or is not a directory: {}",
                root.display()
            )));
        }

        let start = Instant::now();
        let paths: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && is_sheet_file(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();

        let mut entries: Vec<SheetEntry> = paths
            .par_iter()
            .filter_map(|path| match load_sheet(path) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping sheet {}: {e}", path.display());
                    None
                }
            })
            .collect();

        entries.sort_by(|a, b| a.title_lower.cmp(&b.title_lower).then_with(|| a.path.cmp(&b.path)));

        let count = entries.len();
        let elapsed = start.elapsed();
        tracing::info!("Indexed {count} sheets from {} in {elapsed:?}", root.display());

        Ok(Self {
            root: root.to_path_buf(),
            entries,
        })
    }

    /// Directory this library was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All sheets, sorted by title.
    pub fn entries(&self) -> &[SheetEntry] {
        &self.entries
    }

    /// Number of sheets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no sheets were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact title lookup, ignoring case.
    pub fn get(&self, title: &str) -> Option<&SheetEntry> {
        let wanted = title.trim().to_lowercase();
        self.entries.iter().find(|e| e.title_lower == wanted)
    }

    /// Search titles and artists.
    ///
    /// Substring matches come first in title order, followed by fuzzy title
    /// matches ranked by score.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&SheetEntry> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }

        let is_substring = |entry: &SheetEntry| {
            entry.title_lower.contains(&query_lower)
                || entry
                    .artist
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase().contains(&query_lower))
        };

        let mut results: Vec<&SheetEntry> =
            self.entries.iter().filter(|&e| is_substring(e)).collect();

        let matcher = SkimMatcherV2::default();
        let mut fuzzy: Vec<(i64, &SheetEntry)> = self
            .entries
            .iter()
            .filter(|&e| !is_substring(e))
            .filter_map(|entry| {
                let score = matcher.fuzzy_match(&entry.title_lower, &query_lower)?;
                (score >= MIN_FUZZY_SCORE).then_some((score, entry))
            })
            .collect();
        fuzzy.sort_by(|a, b| b.0.cmp(&a.0));

        results.extend(fuzzy.into_iter().map(|(_, e)| e));
        results.truncate(limit);
        results
    }
}
