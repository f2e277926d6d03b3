//! Chord+lyric content parser.
//!
//! Content is plain text with chords written inline in square brackets:
//!
//! ```text
//! [G]Amazing [C]grace, how [G]sweet the sound
//! ```
//!
//! [`parse_content`] scans it once, left to right, and classifies every
//! character into a [`Token`]. Each chord is padded with a one-space
//! [`TokenKind::Spaces`] token on both sides so renderers always have a gap to
//! hang the chord over.
//!
//! Malformed markup never fails:
//! - an unterminated `[` swallows the rest of the input as one chord;
//! - a stray `]` becomes its own one-character lyric token (a known oddity of
//!   the format).

use serde::{Deserialize, Serialize};

use super::token::{Token, TokenKind};

/// Characters that end a lyric run.
const DELIMITERS: [char; 4] = [' ', '[', ']', '\n'];

/// Parse raw chord+lyric content into tokens.
///
/// Total over every input, linear in its length, and free of side effects
/// apart from logging.
pub fn parse_content(content: &str) -> ParsedContent {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(c) = content[cursor..].chars().next() {
        let rest = &content[cursor..];
        match c {
            ' ' => {
                let run = rest.len() - rest.trim_start_matches(' ').len();
                tokens.push(Token::spaces(&rest[..run]));
                cursor += run;
            }
            '[' => {
                let body = &rest[1..];
                let (chord, consumed) = match body.find(']') {
                    Some(end) => (&body[..end], end + 2),
                    None => {
                        tracing::trace!("Unterminated chord at byte {cursor} runs to end of input");
                        (body, rest.len())
                    }
                };
                tokens.push(Token::padding());
                tokens.push(Token::chord(chord));
                tokens.push(Token::padding());
                cursor += consumed;
            }
            '\n' => {
                tokens.push(Token::line_break());
                cursor += 1;
            }
            ']' => {
                tokens.push(Token::lyric("]"));
                cursor += 1;
            }
            _ => {
                let run = rest.find(&DELIMITERS[..]).unwrap_or(rest.len());
                tokens.push(Token::lyric(&rest[..run]));
                cursor += run;
            }
        }
    }

    tracing::debug!("Parsed {} bytes of content into {} tokens", content.len(), tokens.len());
    ParsedContent { tokens }
}

/// Whether the token at `index` is the synthetic space placed beside a chord.
pub(crate) fn is_chord_padding(tokens: &[Token], index: usize) -> bool {
    let Some(token) = tokens.get(index) else {
        return false;
    };
    if token.kind() != TokenKind::Spaces || token.value() != " " {
        return false;
    }
    let next_is_chord = tokens.get(index + 1).is_some_and(Token::is_chord);
    let prev_is_chord = index
        .checked_sub(1)
        .and_then(|i| tokens.get(i))
        .is_some_and(Token::is_chord);
    next_is_chord || prev_is_chord
}

/// Ordered tokens produced by one [`parse_content`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedContent {
    tokens: Vec<Token>,
}

impl ParsedContent {
    /// All tokens in source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Take ownership of the tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True for empty content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Tokens grouped into lines, split at (and excluding) line breaks.
    ///
    /// Behaves like `str::split('\n')`: trailing line break yields a final
    /// empty line, and empty content yields one empty line.
    pub fn lines(&self) -> impl Iterator<Item = &[Token]> {
        self.tokens.split(|t| t.kind() == TokenKind::LineBreak)
    }

    /// Chord names in order of appearance.
    pub fn chords(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter(|t| t.is_chord()).map(Token::value)
    }

    /// Rebuild the source text: chords get their brackets back and the chord
    /// padding is dropped.
    ///
    /// Matches the original input whenever every `[` was closed; an
    /// unterminated chord comes back with a closing `]` added.
    #[must_use]
    pub fn to_source(&self) -> String {
        self.tokens
            .iter()
            .enumerate()
            .filter(|&(i, _)| !is_chord_padding(&self.tokens, i))
            .map(|(_, t)| t.source_text())
            .collect()
    }
}

impl AsRef<[Token]> for ParsedContent {
    fn as_ref(&self) -> &[Token] {
        &self.tokens
    }
}

impl IntoIterator for ParsedContent {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedContent {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for ParsedContent {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}
