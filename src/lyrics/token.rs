//! Token model for chord+lyric content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a piece of chord+lyric content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Bracketed chord annotation, e.g. `[Am7]`.
    Chord,
    /// Run of ordinary song text.
    Lyric,
    /// Run of one or more spaces, including the padding placed around chords.
    Spaces,
    /// A single `\n`.
    LineBreak,
}

impl TokenKind {
    /// Name used in serialized output and templates.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chord => "chord",
            Self::Lyric => "lyric",
            Self::Spaces => "spaces",
            Self::LineBreak => "line-break",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified piece of content.
///
/// Serializes as `{"type": "...", "value": "..."}`, the shape the rendering
/// templates iterate over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    kind: TokenKind,
    value: String,
}

impl Token {
    /// Create a token of any kind.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }

    /// Chord token holding the text between the brackets.
    pub fn chord(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Chord, value)
    }

    /// Lyric token.
    pub fn lyric(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Lyric, value)
    }

    /// Spaces token.
    pub fn spaces(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Spaces, value)
    }

    /// The single-space token placed on each side of a chord.
    pub fn padding() -> Self {
        Self::spaces(" ")
    }

    /// Line break token.
    pub fn line_break() -> Self {
        Self::new(TokenKind::LineBreak, "\n")
    }

    /// Kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Literal text of this token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this is a chord token.
    #[must_use]
    pub const fn is_chord(&self) -> bool {
        matches!(self.kind, TokenKind::Chord)
    }

    /// Source form of the token: chords get their brackets back.
    #[must_use]
    pub fn source_text(&self) -> String {
        match self.kind {
            TokenKind::Chord => format!("[{}]", self.value),
            _ => self.value.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.value)
    }
}
