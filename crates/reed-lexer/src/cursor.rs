use reed_common::pos::SourcePos;

/// Character-level source iterator for the Reed lexer.
///
/// The cursor decodes the source once into Unicode scalar values and walks
/// them with an explicit index. Relative offsets are 1-based: `peek(1)` is
/// the immediately next unread character, and `consume(1)` consumes it.
/// Peeks never move the cursor, so `peek(1)` followed by `consume(1)` yields
/// the same character.
///
/// Backward movement is bounded: `peek_back` looks one character behind the
/// last consumed one, and `consume_back` undoes the most recent `consume`
/// call. Arbitrary backward seeking is not supported.
pub struct CharCursor {
    chars: Vec<char>,
    /// Number of characters consumed so far; `chars[idx]` is the next
    /// unread character.
    idx: usize,
    pos: SourcePos,
    /// State before the most recent `consume`, for single-step undo.
    prev: Option<(usize, SourcePos)>,
}

impl CharCursor {
    /// Create a cursor at the start of the source text.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            idx: 0,
            pos: SourcePos::start(),
            prev: None,
        }
    }

    /// The most recently consumed character, if any.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.idx.checked_sub(1)?).copied()
    }

    /// Look at the character `offset` steps ahead without consuming
    /// anything. `peek(1)` is the next unread character.
    pub fn peek(&self, offset: usize) -> Option<char> {
        debug_assert!(offset >= 1, "offsets are 1-based");
        self.chars.get(self.idx + offset - 1).copied()
    }

    /// Consume `offset` characters and return the last one consumed.
    ///
    /// `consume(1)` consumes the next character; a larger offset skips the
    /// intervening characters. Returns `None` if the input runs out before
    /// `offset` characters were available (everything up to the end is
    /// still consumed).
    pub fn consume(&mut self, offset: usize) -> Option<char> {
        debug_assert!(offset >= 1, "offsets are 1-based");
        self.prev = Some((self.idx, self.pos));
        let mut last = None;
        for _ in 0..offset {
            let c = self.chars.get(self.idx).copied()?;
            self.idx += 1;
            self.pos = self.pos.advance(c);
            last = Some(c);
        }
        last
    }

    /// Look at the character immediately before the last consumed one.
    pub fn peek_back(&self) -> Option<char> {
        self.chars.get(self.idx.checked_sub(2)?).copied()
    }

    /// Undo the most recent `consume` call and return the character that is
    /// current afterwards. Only one step of undo is retained; a second
    /// consecutive call returns `None` without moving.
    pub fn consume_back(&mut self) -> Option<char> {
        let (idx, pos) = self.prev.take()?;
        self.idx = idx;
        self.pos = pos;
        self.current()
    }

    /// True exactly when `peek(1)` has no character to yield.
    pub fn at_end(&self) -> bool {
        self.idx >= self.chars.len()
    }

    /// The 1-based (line, column) position of the next unread character.
    pub fn pos(&self) -> SourcePos {
        self.pos
    }
}
