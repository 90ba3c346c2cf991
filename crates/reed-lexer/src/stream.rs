use reed_common::token::{Token, TokenKind};
use rustc_hash::FxHashSet;

/// The finished, immutable output of a scan.
///
/// Tokens are appended only while scanning runs; once the stream is handed
/// to the caller nothing is inserted, removed or mutated. Navigation happens
/// through a [`TokenCursor`] borrowed from the stream, so any number of
/// readers can look ahead independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the stream holds no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// All tokens, in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the stream into its backing vector.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// A read cursor positioned at the first token.
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor {
            tokens: &self.tokens,
            pos: 0,
        }
    }
}

/// A movable read position over a [`TokenStream`].
///
/// Built for a parser doing bounded speculative lookahead: peeks are pure,
/// movement is explicit, and every operation is bounds-checked. Reading past
/// the end yields the `Eof` sentinel token rather than failing; reading
/// before the start reports absence.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// The token at the current position. `None` on an empty stream or once
    /// the cursor has moved past the last token.
    pub fn now(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Pure peek `n` tokens ahead of the current position, without moving.
    /// Past the end this returns the `Eof` sentinel.
    pub fn forwards(&self, n: usize) -> Token {
        self.tokens
            .get(self.pos + n)
            .cloned()
            .unwrap_or_else(Token::eof)
    }

    /// Pure peek `n` tokens behind the current position, without moving.
    /// `None` if that would land before the first token.
    pub fn backwards(&self, n: usize) -> Option<Token> {
        self.tokens.get(self.pos.checked_sub(n)?).cloned()
    }

    /// Move the cursor `n` tokens forward and return the new current token.
    ///
    /// Movement saturates at one past the last token, where the `Eof`
    /// sentinel is returned.
    pub fn go(&mut self, n: usize) -> Token {
        self.pos = (self.pos + n).min(self.tokens.len());
        self.tokens.get(self.pos).cloned().unwrap_or_else(Token::eof)
    }

    /// Move the cursor `n` tokens backward and return the new current
    /// token. Movement saturates at the first token; on an empty stream
    /// the `Eof` sentinel is returned.
    pub fn last(&mut self, n: usize) -> Token {
        self.pos = self.pos.saturating_sub(n);
        self.tokens.get(self.pos).cloned().unwrap_or_else(Token::eof)
    }

    /// Current position index into the stream.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether the cursor has moved past the last token.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Scan forward from the cursor, only through tokens whose kind belongs
    /// to `patterns`, for the first token of kind `target`.
    ///
    /// Returns the offset of that token from the cursor, or 0 if the scan
    /// leaves `patterns` (or the stream) first. The cursor does not move.
    pub fn try_finding(&self, patterns: &FxHashSet<TokenKind>, target: TokenKind) -> usize {
        let mut i = self.pos;
        while let Some(tok) = self.tokens.get(i) {
            if !patterns.contains(&tok.kind) {
                break;
            }
            if tok.kind == target {
                return i - self.pos;
            }
            i += 1;
        }
        0
    }

    /// Like [`TokenCursor::try_finding`], but looks for a token of kind
    /// `t1` immediately followed by one of kind `t2`, and returns the
    /// offset of the `t2` token. Returns 0 when the pair is not found
    /// within `patterns`. The cursor does not move.
    pub fn try_finding_after(
        &self,
        patterns: &FxHashSet<TokenKind>,
        t1: TokenKind,
        t2: TokenKind,
    ) -> usize {
        let mut i = self.pos;
        while let Some(tok) = self.tokens.get(i) {
            if !patterns.contains(&tok.kind) {
                break;
            }
            if tok.kind == t1 {
                return match self.tokens.get(i + 1) {
                    Some(next) if next.kind == t2 => i + 1 - self.pos,
                    _ => 0,
                };
            }
            i += 1;
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(kinds: &[TokenKind]) -> TokenStream {
        TokenStream::new(
            kinds
                .iter()
                .map(|&k| Token::new(k, format!("{k:?}")))
                .collect(),
        )
    }

    fn set(kinds: &[TokenKind]) -> FxHashSet<TokenKind> {
        kinds.iter().copied().collect()
    }

    #[test]
    fn now_on_empty_stream_is_none() {
        let s = stream(&[]);
        assert!(s.is_empty());
        assert_eq!(s.cursor().now(), None);
    }

    #[test]
    fn forwards_peeks_without_moving() {
        let s = stream(&[TokenKind::Ident, TokenKind::Eq, TokenKind::Number]);
        let cursor = s.cursor();
        assert!(cursor.forwards(1).is(TokenKind::Eq));
        assert!(cursor.forwards(2).is(TokenKind::Number));
        assert_eq!(cursor.pos(), 0);
        assert!(cursor.now().is_some_and(|t| t.is(TokenKind::Ident)));
    }

    #[test]
    fn forwards_past_end_is_eof_sentinel() {
        let s = stream(&[TokenKind::Ident]);
        let cursor = s.cursor();
        assert!(cursor.forwards(1).is(TokenKind::Eof));
        assert!(cursor.forwards(100).is(TokenKind::Eof));
    }

    #[test]
    fn backwards_before_start_is_none() {
        let s = stream(&[TokenKind::Ident, TokenKind::Eq]);
        let mut cursor = s.cursor();
        assert_eq!(cursor.backwards(1), None);
        cursor.go(1);
        assert!(cursor.backwards(1).is_some_and(|t| t.is(TokenKind::Ident)));
        assert_eq!(cursor.backwards(2), None);
    }

    #[test]
    fn go_and_last_move_the_cursor() {
        let s = stream(&[TokenKind::Ident, TokenKind::Eq, TokenKind::Number]);
        let mut cursor = s.cursor();
        assert!(cursor.go(2).is(TokenKind::Number));
        assert!(cursor.last(1).is(TokenKind::Eq));
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn go_saturates_past_end() {
        let s = stream(&[TokenKind::Ident]);
        let mut cursor = s.cursor();
        assert!(cursor.go(10).is(TokenKind::Eof));
        assert!(cursor.at_end());
        assert_eq!(cursor.now(), None);
        // And comes back.
        assert!(cursor.last(10).is(TokenKind::Ident));
    }

    #[test]
    fn last_saturates_at_start() {
        let s = stream(&[TokenKind::Ident, TokenKind::Eq]);
        let mut cursor = s.cursor();
        cursor.go(1);
        assert!(cursor.last(5).is(TokenKind::Ident));
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn try_finding_within_pattern_set() {
        // [LParen, Ident, RParen, FatArrow], cursor at LParen.
        let s = stream(&[
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::FatArrow,
        ]);
        let cursor = s.cursor();
        let patterns = set(&[TokenKind::LParen, TokenKind::Ident, TokenKind::RParen]);
        assert_eq!(cursor.try_finding(&patterns, TokenKind::RParen), 2);
        assert_eq!(cursor.pos(), 0, "tryFinding must not move the cursor");
    }

    #[test]
    fn try_finding_stops_when_leaving_pattern_set() {
        let s = stream(&[
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::FatArrow,
        ]);
        let cursor = s.cursor();
        // RParen is reachable only through Ident, which this set excludes.
        let patterns = set(&[TokenKind::LParen, TokenKind::RParen]);
        assert_eq!(cursor.try_finding(&patterns, TokenKind::RParen), 0);
        // Target entirely absent.
        let all = set(&[
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::FatArrow,
        ]);
        assert_eq!(cursor.try_finding(&all, TokenKind::Semicolon), 0);
    }

    #[test]
    fn try_finding_after_matches_adjacent_pair() {
        // Arrow-function lookahead: find `)` immediately followed by `=>`.
        let s = stream(&[
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::FatArrow,
        ]);
        let cursor = s.cursor();
        let patterns = set(&[
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::RParen,
        ]);
        assert_eq!(
            cursor.try_finding_after(&patterns, TokenKind::RParen, TokenKind::FatArrow),
            5
        );
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn try_finding_after_rejects_non_adjacent_pair() {
        let s = stream(&[
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Semicolon,
            TokenKind::FatArrow,
        ]);
        let cursor = s.cursor();
        let patterns = set(&[TokenKind::LParen, TokenKind::RParen, TokenKind::Semicolon]);
        assert_eq!(
            cursor.try_finding_after(&patterns, TokenKind::RParen, TokenKind::FatArrow),
            0
        );
    }

    #[test]
    fn try_finding_after_pair_at_stream_end() {
        let s = stream(&[TokenKind::RParen]);
        let cursor = s.cursor();
        let patterns = set(&[TokenKind::RParen]);
        // t1 is the final token; there is no following token to match t2.
        assert_eq!(
            cursor.try_finding_after(&patterns, TokenKind::RParen, TokenKind::FatArrow),
            0
        );
    }

    #[test]
    fn stream_indexing() {
        let s = stream(&[TokenKind::Ident, TokenKind::Eq]);
        assert_eq!(s.len(), 2);
        assert!(s.get(1).is_some_and(|t| t.is(TokenKind::Eq)));
        assert_eq!(s.get(2), None);
        let tokens = s.clone().into_tokens();
        assert_eq!(tokens.len(), 2);
    }
}
