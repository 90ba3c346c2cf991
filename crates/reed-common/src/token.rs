use serde::Serialize;

/// A token produced by the Reed lexer.
///
/// `text` holds the exact source substring that produced the token, with one
/// exception: string and template-segment tokens hold the escape-decoded
/// content instead. Numbers in particular are kept verbatim; the lexer never
/// parses their value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Create a new token from a kind and its text.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input sentinel returned by stream navigation past the end.
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
        }
    }

    /// Whether this token has the given kind.
    ///
    /// Explicit replacement for kind comparison via conversions; tokens
    /// never coerce to their kind implicitly.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Every kind of token in the Reed language.
///
/// This enum is the complete vocabulary for the lexer: end markers,
/// literals, keywords, and operators/punctuation. Kinds carry no payload;
/// the text lives on [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // ── End markers (2) ────────────────────────────────────────────────
    /// A character no lexer rule recognizes. Not fatal; the parser decides.
    Unknown,
    /// End of input. Never stored in a scanned stream; materialized by
    /// stream navigation as a sentinel.
    Eof,

    // ── Literals (6) ───────────────────────────────────────────────────
    /// Numeric literal, kept verbatim, e.g. `42`, `1.5e-3`, `.5`.
    Number,
    /// String literal or template-literal segment, escape-decoded.
    Str,
    /// The `none` literal. Named `NoneKw` to stay clear of `Option::None`.
    NoneKw,
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// Identifier, e.g. `foo`, `_tmp`, `$el`.
    Ident,

    // ── Keywords (22) ──────────────────────────────────────────────────
    If,
    Else,
    Switch,
    Case,
    Default,
    While,
    Do,
    For,
    In,
    Of,
    Break,
    Continue,
    Return,
    Throw,
    Yield,
    Let,
    Const,
    Class,
    Import,
    Export,
    From,
    As,

    // ── Operators (33) ─────────────────────────────────────────────────
    /// `+`
    Plus,
    /// `+=`
    PlusEq,
    /// `-`
    Minus,
    /// `-=`
    MinusEq,
    /// `*`
    Star,
    /// `*=`
    StarEq,
    /// `**`
    StarStar,
    /// `**=`
    StarStarEq,
    /// `/`
    Slash,
    /// `/=`
    SlashEq,
    /// `//` (integer division)
    SlashSlash,
    /// `//=`
    SlashSlashEq,
    /// `%`
    Percent,
    /// `%=`
    PercentEq,
    /// `%%`
    PercentPercent,
    /// `%%=`
    PercentPercentEq,
    /// `|`
    Pipe,
    /// `|=`
    PipeEq,
    /// `||`
    PipePipe,
    /// `&`
    Amp,
    /// `&=`
    AmpEq,
    /// `&&`
    AmpAmp,
    /// `<<`
    Shl,
    /// `<<=`
    ShlEq,
    /// `>>`
    Shr,
    /// `>>=`
    ShrEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `=`
    Eq,
    /// `=>`
    FatArrow,
    /// `...` (spread). `.` and `..` are listed under punctuation.
    DotDotDot,

    // ── Punctuation and delimiters (12) ────────────────────────────────
    /// `.` (member access)
    Dot,
    /// `..`
    DotDot,
    /// `:`
    Colon,
    /// `?`
    Question,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
}

/// Look up a keyword (or keyword literal) from its string representation.
///
/// Returns `Some(TokenKind)` if the word is reserved, `None` otherwise. The
/// lexer calls this after scanning an identifier-shaped word, except right
/// after a `.` where every word is a plain identifier.
pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
    match s {
        "none" => Some(TokenKind::NoneKw),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "switch" => Some(TokenKind::Switch),
        "case" => Some(TokenKind::Case),
        "default" => Some(TokenKind::Default),
        "while" => Some(TokenKind::While),
        "do" => Some(TokenKind::Do),
        "for" => Some(TokenKind::For),
        "in" => Some(TokenKind::In),
        "of" => Some(TokenKind::Of),
        "break" => Some(TokenKind::Break),
        "continue" => Some(TokenKind::Continue),
        "return" => Some(TokenKind::Return),
        "throw" => Some(TokenKind::Throw),
        "yield" => Some(TokenKind::Yield),
        "let" => Some(TokenKind::Let),
        "const" => Some(TokenKind::Const),
        "class" => Some(TokenKind::Class),
        "import" => Some(TokenKind::Import),
        "export" => Some(TokenKind::Export),
        "from" => Some(TokenKind::From),
        "as" => Some(TokenKind::As),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_from_str_recognizes_all_keywords() {
        let keywords = [
            ("none", TokenKind::NoneKw),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("switch", TokenKind::Switch),
            ("case", TokenKind::Case),
            ("default", TokenKind::Default),
            ("while", TokenKind::While),
            ("do", TokenKind::Do),
            ("for", TokenKind::For),
            ("in", TokenKind::In),
            ("of", TokenKind::Of),
            ("break", TokenKind::Break),
            ("continue", TokenKind::Continue),
            ("return", TokenKind::Return),
            ("throw", TokenKind::Throw),
            ("yield", TokenKind::Yield),
            ("let", TokenKind::Let),
            ("const", TokenKind::Const),
            ("class", TokenKind::Class),
            ("import", TokenKind::Import),
            ("export", TokenKind::Export),
            ("from", TokenKind::From),
            ("as", TokenKind::As),
        ];

        for (s, expected) in &keywords {
            assert_eq!(
                keyword_from_str(s),
                Some(*expected),
                "keyword_from_str({s:?}) should return Some({expected:?})"
            );
        }

        assert_eq!(keywords.len(), 25, "must test all 25 reserved words");
    }

    #[test]
    fn keyword_from_str_rejects_non_keywords() {
        assert_eq!(keyword_from_str("foo"), None);
        assert_eq!(keyword_from_str("iff"), None);
        assert_eq!(keyword_from_str(""), None);
        assert_eq!(keyword_from_str("IF"), None); // case-sensitive
        assert_eq!(keyword_from_str("True"), None); // case-sensitive
    }

    #[test]
    fn token_new_constructor() {
        let tok = Token::new(TokenKind::Number, "42");
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.text, "42");
    }

    #[test]
    fn token_is_checks_kind_only() {
        let tok = Token::new(TokenKind::Ident, "x");
        assert!(tok.is(TokenKind::Ident));
        assert!(!tok.is(TokenKind::Number));
    }

    #[test]
    fn eof_sentinel_has_empty_text() {
        let tok = Token::eof();
        assert!(tok.is(TokenKind::Eof));
        assert!(tok.text.is_empty());
    }
}
