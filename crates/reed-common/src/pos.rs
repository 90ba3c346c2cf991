use std::fmt;

use serde::Serialize;

/// A 1-based (line, column) position in source text.
///
/// Positions are tracked by the character cursor as it consumes input and
/// attached to lexical errors. Columns count Unicode scalar values, not
/// bytes, so a position is meaningful to show to a user directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourcePos {
    pub line: u32,
    pub col: u32,
}

impl SourcePos {
    /// Create a position from 1-based line and column numbers.
    pub fn new(line: u32, col: u32) -> Self {
        debug_assert!(line >= 1 && col >= 1, "positions are 1-based");
        Self { line, col }
    }

    /// The position of the first character of a source text.
    pub fn start() -> Self {
        Self { line: 1, col: 1 }
    }

    /// The position one step past this one, given the character consumed.
    ///
    /// A line feed moves to column 1 of the next line; any other character
    /// advances the column by one.
    pub fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self {
                line: self.line + 1,
                col: 1,
            }
        } else {
            Self {
                line: self.line,
                col: self.col + 1,
            }
        }
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_line_one_column_one() {
        assert_eq!(SourcePos::start(), SourcePos::new(1, 1));
    }

    #[test]
    fn advance_moves_within_a_line() {
        let pos = SourcePos::start().advance('a').advance('b');
        assert_eq!(pos, SourcePos::new(1, 3));
    }

    #[test]
    fn advance_over_line_feed_starts_a_new_line() {
        let pos = SourcePos::new(1, 5).advance('\n');
        assert_eq!(pos, SourcePos::new(2, 1));
    }

    #[test]
    fn carriage_return_is_an_ordinary_column() {
        // Only '\n' ends a line; a bare '\r' advances the column so that
        // CRLF input still lands on the right line.
        let pos = SourcePos::new(1, 5).advance('\r');
        assert_eq!(pos, SourcePos::new(1, 6));
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(SourcePos::new(3, 14).to_string(), "line 3, column 14");
    }
}
