//! Application constants.
//!
//! Centralizes the limits the song catalog enforces on user input.

/// Form input limits, counted in characters.
pub mod limits {
    /// Maximum length of a song version's chord content.
    pub const MAX_CONTENT_LENGTH: usize = 10_000;

    /// Maximum length of a song title.
    pub const MAX_TITLE_LENGTH: usize = 200;

    /// Maximum length of an artist name.
    pub const MAX_ARTIST_NAME_LENGTH: usize = 100;

    /// Maximum length of a genre name.
    pub const MAX_GENRE_NAME_LENGTH: usize = 50;

    /// Maximum length of a search query.
    pub const MAX_SEARCH_QUERY_LENGTH: usize = 100;
}

/// Rating constants.
pub mod rating {
    /// Lowest accepted rating.
    pub const MIN_RATING: u8 = 1;

    /// Highest accepted rating.
    pub const MAX_RATING: u8 = 5;
}

/// Sheet library constants.
pub mod library {
    /// File extensions recognized as chord sheets (compared case-insensitively).
    pub const SHEET_EXTENSIONS: &[&str] = &["txt", "cho", "chords"];

    /// Default library folder under the user's home directory.
    pub const DEFAULT_LIBRARY_DIR: &str = "Documents/Chord Sheets";

    /// Maximum number of search results to return.
    pub const MAX_SEARCH_RESULTS: usize = 20;

    /// Minimum fuzzy match score for title search.
    pub const MIN_FUZZY_SCORE: i64 = 50;
}
