//! Plain-text chord sheet layout.
//!
//! Places each chord on its own row, directly above the lyric text that
//! followed it in the source:
//!
//! ```text
//! G       C
//! Amazing grace
//! ```

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::parser::{is_chord_padding, ParsedContent};
use super::token::{Token, TokenKind};

/// One source line laid out as an optional chord row over a lyric row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    /// Chord row, `None` when the line has no chords.
    pub chords: Option<String>,
    /// Lyric text with chords and their padding removed.
    pub lyrics: String,
}

impl RenderedLine {
    /// Text form: chord row, newline, lyric row. Empty rows are skipped when
    /// the other row carries content.
    #[must_use]
    pub fn to_text(&self) -> String {
        match &self.chords {
            Some(chords) if self.lyrics.is_empty() => chords.clone(),
            Some(chords) => format!("{chords}\n{}", self.lyrics),
            None => self.lyrics.clone(),
        }
    }
}

/// Lay out every line of parsed content.
pub fn layout_lines(parsed: &ParsedContent) -> Vec<RenderedLine> {
    parsed.lines().map(layout_line).collect()
}

/// Render parsed content as chords-over-lyrics text.
pub fn render_chord_sheet(parsed: &ParsedContent) -> String {
    layout_lines(parsed)
        .iter()
        .map(RenderedLine::to_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn layout_line(tokens: &[Token]) -> RenderedLine {
    let mut lyrics = String::new();
    let mut chord_row = String::new();
    let mut has_chords = false;

    for (i, token) in tokens.iter().enumerate() {
        if is_chord_padding(tokens, i) {
            continue;
        }
        match token.kind() {
            TokenKind::Chord => {
                let column = lyrics.width();
                let current = chord_row.width();
                // Chords that would touch or overlap shift right past the previous one.
                let target = if has_chords && current >= column { current + 1 } else { column };
                chord_row.extend(std::iter::repeat(' ').take(target - current));
                chord_row.push_str(chord_label(token.value()));
                has_chords = true;
            }
            TokenKind::Lyric | TokenKind::Spaces => lyrics.push_str(token.value()),
            TokenKind::LineBreak => {}
        }
    }

    RenderedLine {
        chords: has_chords
            .then(|| chord_row.trim_end().to_string())
            .filter(|row| !row.is_empty()),
        lyrics,
    }
}

/// First line of a chord's text. Only an unterminated chord can span lines.
fn chord_label(chord: &str) -> &str {
    chord.find('\n').map_or(chord, |end| &chord[..end])
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::lyrics::parse_content;

    fn render(content: &str) -> String {
        render_chord_sheet(&parse_content(content))
    }

    #[test]
    fn test_chords_sit_over_following_text() {
        assert_eq!(
            render("[G]Amazing [C]grace, how [G]sweet"),
            "G       C          G\nAmazing grace, how sweet"
        );
    }

    #[test]
    fn test_plain_lines_have_no_chord_row() {
        assert_eq!(render("just words\nmore"), "just words\nmore");
    }

    #[test]
    fn test_trailing_line_break_is_kept() {
        assert_eq!(render("[C]Hello world\n"), "C\nHello world\n");
    }

    #[test]
    fn test_chord_only_line() {
        assert_eq!(render("[C][G][Am]\nla"), "C G Am\nla");
    }

    #[test]
    fn test_touching_chords_are_separated() {
        assert_eq!(render("[Am]x[G]y"), "Am G\nxy");
    }

    #[test]
    fn test_mid_word_chord() {
        assert_eq!(render("A[D]men"), " D\nAmen");
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        assert_eq!(render("[C]日本[G]語"), "C   G\n日本語");
    }

    #[test]
    fn test_unterminated_chord_stays_on_one_row() {
        assert_eq!(
            layout_lines(&parse_content("la [G la\nla")),
            vec![RenderedLine { chords: Some("   G la".to_string()), lyrics: "la ".to_string() }]
        );
        assert_eq!(render("la [G la\nla"), "   G la\nla ");
    }

    #[test]
    fn test_blank_chords_leave_no_chord_row() {
        assert_eq!(render("[]x"), "x");
        assert_eq!(render("[ ]x"), "x");
        assert_eq!(
            layout_lines(&parse_content("[ ]x")),
            vec![RenderedLine { chords: None, lyrics: "x".to_string() }]
        );
    }

    #[test]
    fn test_chord_label_cuts_at_line_break() {
        assert_eq!(chord_label("G la\nla"), "G la");
        assert_eq!(chord_label("Am7"), "Am7");
        assert_eq!(chord_label(""), "");
    }

    #[test]
    fn test_empty_content_renders_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_layout_lines_exposes_rows() {
        let lines = layout_lines(&parse_content("[D]Joy\n\nto the world"));
        assert_eq!(
            lines,
            vec![
                RenderedLine { chords: Some("D".to_string()), lyrics: "Joy".to_string() },
                RenderedLine { chords: None, lyrics: String::new() },
                RenderedLine { chords: None, lyrics: "to the world".to_string() },
            ]
        );
    }
}
