//! Lyrics processing module.
//!
//! Turns chord+lyric text (chords inline in square brackets) into a token
//! stream, and lays that stream out as chords above lyrics.

pub mod parser;
pub mod render;
pub mod token;

pub use parser::{parse_content, ParsedContent};
pub use render::{layout_lines, render_chord_sheet, RenderedLine};
pub use token::{Token, TokenKind};
