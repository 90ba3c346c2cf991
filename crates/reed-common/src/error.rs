use std::fmt;

use serde::Serialize;

use crate::pos::SourcePos;

/// A fatal lexical error with the position where scanning stopped.
///
/// Scanning is fail-fast: the first structural error aborts the whole scan
/// and is returned to the caller. Unrecognized characters are not errors at
/// this layer; they lex as `Unknown` tokens for downstream handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub pos: SourcePos,
}

impl LexError {
    /// Create a new lexical error.
    pub fn new(kind: LexErrorKind, pos: SourcePos) -> Self {
        Self { kind, pos }
    }
}

/// The specific kind of lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LexErrorKind {
    /// A bare (unescaped) line break inside a quoted string literal.
    UnexpectedLineBreak,
    /// A quoted string literal was not closed before end of input.
    UnterminatedString,
    /// A template literal (or one of its interpolations) was not closed
    /// before end of input.
    UnterminatedTemplate,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedLineBreak => write!(f, "line break inside string literal"),
            Self::UnterminatedString => write!(f, "unterminated string literal"),
            Self::UnterminatedTemplate => write!(f, "unterminated template literal"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for LexError {}
