//! `chordsheet` - chord+lyric song sheets.
//!
//! Parses chord-annotated text (`[G]Amazing [C]grace`) into a token stream,
//! lays it out as chords over lyrics, applies the song catalog's input rules,
//! and indexes directories of sheet files.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod library;
pub mod lyrics;
pub mod types;

pub use error::{Error, Result};
pub use lyrics::{parse_content, render_chord_sheet, ParsedContent, Token, TokenKind};
