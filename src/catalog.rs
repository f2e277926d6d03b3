//! Song catalog rules.
//!
//! The checks and arithmetic the song catalog applies to form input before it
//! touches storage: field limits, ratings, version numbering and ownership.
//! Validation messages are user-facing and are shown as-is.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{limits, rating};
use crate::error::{Error, Result};
use crate::lyrics::{parse_content, ParsedContent};
use crate::types::{SongId, UserId, VersionId};

/// Check chord content submitted for a song version.
///
/// Content must be non-empty and at most `max_length` characters.
pub fn validate_content(content: &str, max_length: usize) -> Result<&str> {
    if content.is_empty() {
        return Err(Error::validation("content", "Content is required"));
    }
    if content.chars().count() > max_length {
        return Err(Error::validation(
            "content",
            format!("Content must be {max_length} characters or less"),
        ));
    }
    Ok(content)
}

fn check_length(field: &'static str, label: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(Error::validation(field, format!("{label} must be {max} characters or less")));
    }
    Ok(())
}

/// A song submitted for the catalog, with trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    /// Song title.
    pub title: String,
    /// Artist name; looked up or created by name.
    pub artist: String,
    /// Genre name; looked up or created by name.
    pub genre: String,
}

impl NewSong {
    /// Trim and validate the three song fields.
    pub fn new(title: &str, artist: &str, genre: &str) -> Result<Self> {
        let (title, artist, genre) = (title.trim(), artist.trim(), genre.trim());

        if title.is_empty() || artist.is_empty() || genre.is_empty() {
            let field = if title.is_empty() {
                "title"
            } else if artist.is_empty() {
                "artist"
            } else {
                "genre"
            };
            return Err(Error::validation(field, "All fields are required"));
        }

        check_length("title", "Title", title, limits::MAX_TITLE_LENGTH)?;
        check_length("artist", "Artist name", artist, limits::MAX_ARTIST_NAME_LENGTH)?;
        check_length("genre", "Genre name", genre, limits::MAX_GENRE_NAME_LENGTH)?;

        Ok(Self {
            title: title.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
        })
    }
}

/// A validated search term matched against title, artist and genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim and validate a search term.
    pub fn new(query: &str) -> Result<Self> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::validation("q", "Please enter a search term."));
        }
        if query.chars().count() > limits::MAX_SEARCH_QUERY_LENGTH {
            return Err(Error::validation(
                "q",
                format!(
                    "Search query must be {} characters or less.",
                    limits::MAX_SEARCH_QUERY_LENGTH
                ),
            ));
        }
        Ok(Self(query.to_string()))
    }

    /// The trimmed query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring pattern for a SQL `LIKE` clause.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        format!("%{}%", self.0)
    }

    /// Substring match ignoring ASCII case only, like SQLite `LIKE`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.to_ascii_lowercase().contains(&self.0.to_ascii_lowercase())
    }
}

/// A star rating for a song version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Accept ratings in `1..=5`.
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (rating::MIN_RATING..=rating::MAX_RATING).contains(v))
            .map(Self)
            .ok_or_else(|| {
                Error::validation(
                    "rating",
                    format!(
                        "Invalid rating. Please select a rating between {} and {}.",
                        rating::MIN_RATING,
                        rating::MAX_RATING
                    ),
                )
            })
    }

    /// Number of stars.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Mean rating rounded to one decimal place, `None` when unrated.
#[allow(clippy::cast_precision_loss)]
pub fn average_rating(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let total: u32 = ratings.iter().map(|r| u32::from(r.get())).sum();
    let mean = f64::from(total) / ratings.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Version number for the next version of a song: one past the highest
/// existing number, starting at 1.
pub fn next_version_number(existing: impl IntoIterator<Item = u32>) -> u32 {
    existing.into_iter().max().map_or(1, |max| max.saturating_add(1))
}

/// What [`rate_version`] did with a user's rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingOutcome {
    /// First rating from this user for the version.
    Added,
    /// Replaced the user's earlier rating.
    Updated,
}

impl RatingOutcome {
    /// Flash message shown after rating.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Added => "Your rating has been added.",
            Self::Updated => "Your rating has been updated.",
        }
    }
}

/// Record `user`'s rating of one version. Each user holds at most one rating
/// per version; rating again replaces it.
pub fn rate_version(
    ratings: &mut HashMap<UserId, Rating>,
    user: UserId,
    rating: Rating,
) -> RatingOutcome {
    match ratings.insert(user, rating) {
        Some(_) => RatingOutcome::Updated,
        None => RatingOutcome::Added,
    }
}

/// Order a song's versions best-rated first by their [`average_rating`].
///
/// Unrated versions go last. Ties keep their incoming order.
pub fn rank_versions(versions: &mut [(SongVersion, Option<f64>)]) {
    versions.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// One user's chord+lyric version of a song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongVersion {
    /// Row id of the version.
    pub id: VersionId,
    /// Song this version belongs to.
    pub song_id: SongId,
    /// Per-song sequence number, starting at 1.
    pub version_number: u32,
    /// User who created the version.
    pub creator_id: UserId,
    /// Raw chord+lyric content.
    pub content: String,
}

impl SongVersion {
    /// Only the creator may edit or delete a version.
    #[must_use]
    pub fn is_editable_by(&self, user: UserId) -> bool {
        self.creator_id == user
    }

    /// Parse the version's content for rendering.
    #[must_use]
    pub fn parsed(&self) -> ParsedContent {
        parse_content(&self.content)
    }
}
