// Reed lexer -- tokenizer for the Reed programming language.
//
// Scanning is a single forward pass over a character cursor that materializes
// the whole token stream before anything reads it. The only fatal conditions
// are structural literal errors; unrecognized characters lex as `Unknown`
// tokens and are left to the parser.

pub mod cursor;
mod stream;

pub use stream::{TokenCursor, TokenStream};

use cursor::CharCursor;
use reed_common::error::{LexError, LexErrorKind};
use reed_common::token::{keyword_from_str, Token, TokenKind};

/// Tokenize an entire source text.
///
/// Returns the finished, immutable [`TokenStream`], or the first structural
/// error (an unterminated literal or a bare line break inside a quoted
/// string) tagged with the position where scanning stopped.
pub fn scan(source: &str) -> Result<TokenStream, LexError> {
    Lexer::new(source).run()
}

/// The Reed scanner state machine.
///
/// Owns the character cursor and the per-scan interpolation state; its sole
/// output is the token stream handed back by [`Lexer::run`].
struct Lexer {
    cursor: CharCursor,
    tokens: Vec<Token>,
    /// Brace depth of each active template interpolation, innermost last.
    ///
    /// A `}` closes the innermost interpolation only when its own depth is
    /// zero; otherwise it belongs to an object or block inside the embedded
    /// expression. The stack length is the template nesting depth, so the
    /// depth can never go negative and sequential templates are never
    /// confused with nested ones.
    frames: Vec<u32>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            cursor: CharCursor::new(source),
            tokens: Vec::new(),
            frames: Vec::new(),
        }
    }

    fn run(mut self) -> Result<TokenStream, LexError> {
        while let Some(c) = self.cursor.consume(1) {
            if is_blank(c) {
                continue;
            }

            match c {
                // ── Literals, identifiers, keywords ──────────────────────
                '0'..='9' => self.lex_number(c),
                '.' if self.cursor.peek(1).is_some_and(|d| d.is_ascii_digit()) => {
                    self.lex_number(c)
                }
                c if is_ident_start(c) => self.lex_ident(c),
                '\'' | '"' => self.lex_string(c)?,
                '`' => self.lex_template_segment()?,

                // ── Multi-character operators ────────────────────────────
                '+' => self.lex_plus(),
                '-' => self.lex_minus(),
                '*' => self.lex_star(),
                '/' => self.lex_slash(),
                '%' => self.lex_percent(),
                '|' => self.lex_pipe(),
                '&' => self.lex_amp(),
                '<' => self.lex_lt(),
                '>' => self.lex_gt(),
                '=' => self.lex_eq(),
                '.' => self.lex_dot(),

                // ── Structural delimiters ────────────────────────────────
                '(' => self.push(TokenKind::LParen, "("),
                ')' => self.push(TokenKind::RParen, ")"),
                '[' => self.push(TokenKind::LBracket, "["),
                ']' => self.push(TokenKind::RBracket, "]"),
                '{' => self.lex_lbrace(),
                '}' => self.lex_rbrace()?,
                ':' => self.push(TokenKind::Colon, ":"),
                ',' => self.push(TokenKind::Comma, ","),
                '?' => self.push(TokenKind::Question, "?"),
                ';' => self.push(TokenKind::Semicolon, ";"),

                // ── Fallback ─────────────────────────────────────────────
                other => self.push(TokenKind::Unknown, other.to_string()),
            }
        }

        if !self.frames.is_empty() {
            return Err(self.error(LexErrorKind::UnterminatedTemplate));
        }

        Ok(TokenStream::new(self.tokens))
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    fn push(&mut self, kind: TokenKind, text: impl Into<String>) {
        self.tokens.push(Token::new(kind, text));
    }

    /// Consume the next character if it equals `c`.
    fn eat(&mut self, c: char) -> bool {
        if self.cursor.peek(1) == Some(c) {
            self.cursor.consume(1);
            true
        } else {
            false
        }
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.cursor.pos())
    }

    /// The kind of the most recently emitted token, if any.
    fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|t| t.kind)
    }

    /// Pop the most recently emitted token and push its replacement.
    fn replace_last(&mut self, kind: TokenKind, text: &str) {
        self.tokens.pop();
        self.push(kind, text);
    }

    // ── Operator lexing ──────────────────────────────────────────────────

    /// `+` -> `Plus`, `+=` -> `PlusEq`
    fn lex_plus(&mut self) {
        if self.eat('=') {
            self.push(TokenKind::PlusEq, "+=");
        } else {
            self.push(TokenKind::Plus, "+");
        }
    }

    /// `-` -> `Minus`, `-=` -> `MinusEq`
    fn lex_minus(&mut self) {
        if self.eat('=') {
            self.push(TokenKind::MinusEq, "-=");
        } else {
            self.push(TokenKind::Minus, "-");
        }
    }

    /// `*` -> `Star`, `*=` -> `StarEq`, `**` -> `StarStar`
    fn lex_star(&mut self) {
        if self.eat('*') {
            self.push(TokenKind::StarStar, "**");
        } else if self.eat('=') {
            self.push(TokenKind::StarEq, "*=");
        } else {
            self.push(TokenKind::Star, "*");
        }
    }

    /// `/` -> `Slash`, `/=` -> `SlashEq`, `//` -> `SlashSlash`
    fn lex_slash(&mut self) {
        if self.eat('/') {
            self.push(TokenKind::SlashSlash, "//");
        } else if self.eat('=') {
            self.push(TokenKind::SlashEq, "/=");
        } else {
            self.push(TokenKind::Slash, "/");
        }
    }

    /// `%` -> `Percent`, `%=` -> `PercentEq`, `%%` -> `PercentPercent`
    fn lex_percent(&mut self) {
        if self.eat('%') {
            self.push(TokenKind::PercentPercent, "%%");
        } else if self.eat('=') {
            self.push(TokenKind::PercentEq, "%=");
        } else {
            self.push(TokenKind::Percent, "%");
        }
    }

    /// `|` -> `Pipe`, `|=` -> `PipeEq`, `||` -> `PipePipe`
    fn lex_pipe(&mut self) {
        if self.eat('|') {
            self.push(TokenKind::PipePipe, "||");
        } else if self.eat('=') {
            self.push(TokenKind::PipeEq, "|=");
        } else {
            self.push(TokenKind::Pipe, "|");
        }
    }

    /// `&` -> `Amp`, `&=` -> `AmpEq`, `&&` -> `AmpAmp`
    fn lex_amp(&mut self) {
        if self.eat('&') {
            self.push(TokenKind::AmpAmp, "&&");
        } else if self.eat('=') {
            self.push(TokenKind::AmpEq, "&=");
        } else {
            self.push(TokenKind::Amp, "&");
        }
    }

    /// `<` -> `Lt`, `<=` -> `LtEq`, `<<` -> `Shl`
    fn lex_lt(&mut self) {
        if self.eat('<') {
            self.push(TokenKind::Shl, "<<");
        } else if self.eat('=') {
            self.push(TokenKind::LtEq, "<=");
        } else {
            self.push(TokenKind::Lt, "<");
        }
    }

    /// `>` -> `Gt`, `>=` -> `GtEq`, `>>` -> `Shr`
    fn lex_gt(&mut self) {
        if self.eat('>') {
            self.push(TokenKind::Shr, ">>");
        } else if self.eat('=') {
            self.push(TokenKind::GtEq, ">=");
        } else {
            self.push(TokenKind::Gt, ">");
        }
    }

    /// `=` -> `Eq`, `=>` -> `FatArrow`, or a compound-assign upgrade.
    ///
    /// `**`, `%%`, `//`, `<<` and `>>` have no direct three-character
    /// spelling in the scanner; when `=` follows one of them as the most
    /// recently emitted token, that token is popped and replaced by its
    /// assign form.
    fn lex_eq(&mut self) {
        if self.eat('>') {
            self.push(TokenKind::FatArrow, "=>");
            return;
        }

        match self.last_kind() {
            Some(TokenKind::StarStar) => self.replace_last(TokenKind::StarStarEq, "**="),
            Some(TokenKind::PercentPercent) => {
                self.replace_last(TokenKind::PercentPercentEq, "%%=")
            }
            Some(TokenKind::SlashSlash) => self.replace_last(TokenKind::SlashSlashEq, "//="),
            Some(TokenKind::Shl) => self.replace_last(TokenKind::ShlEq, "<<="),
            Some(TokenKind::Shr) => self.replace_last(TokenKind::ShrEq, ">>="),
            _ => self.push(TokenKind::Eq, "="),
        }
    }

    /// `.` -> `Dot`, collapsing a preceding `Dot` into `DotDot` and a
    /// preceding `DotDot` into `DotDotDot` by look-back replacement.
    fn lex_dot(&mut self) {
        match self.last_kind() {
            Some(TokenKind::Dot) => self.replace_last(TokenKind::DotDot, ".."),
            Some(TokenKind::DotDot) => self.replace_last(TokenKind::DotDotDot, "..."),
            _ => self.push(TokenKind::Dot, "."),
        }
    }

    // ── Brace tracking for template interpolations ───────────────────────

    /// `{` -- inside an interpolation it also deepens the innermost frame.
    fn lex_lbrace(&mut self) {
        if let Some(depth) = self.frames.last_mut() {
            *depth += 1;
        }
        self.push(TokenKind::LBrace, "{");
    }

    /// `}` -- an ordinary brace unless it closes the innermost
    /// interpolation, in which case the template resumes literal scanning.
    fn lex_rbrace(&mut self) -> Result<(), LexError> {
        match self.frames.pop() {
            None => self.push(TokenKind::RBrace, "}"),
            Some(depth) if depth > 0 => {
                // Belongs to an object or block inside the expression.
                self.frames.push(depth - 1);
                self.push(TokenKind::RBrace, "}");
            }
            Some(_) => {
                self.push(TokenKind::RParen, ")");
                self.push(TokenKind::Plus, "+");
                self.lex_template_segment()?;
            }
        }
        Ok(())
    }

    // ── Numeric literals ─────────────────────────────────────────────────

    /// Scan the longest valid numeral starting at the already-consumed
    /// `first` (a digit, or a `.` known to be followed by a digit).
    ///
    /// Digits accumulate freely; one decimal point is allowed before the
    /// exponent; one `e` is allowed once a digit has been seen; a sign only
    /// immediately after the `e`. The first character that would violate
    /// these rules is left unconsumed for the next main-loop iteration. The
    /// literal text is kept verbatim; no value is parsed.
    fn lex_number(&mut self, first: char) {
        let mut text = String::new();
        text.push(first);

        let mut seen_digit = first.is_ascii_digit();
        let mut seen_dot = first == '.';
        let mut seen_exp = false;
        let mut after_exp = false;

        while let Some(c) = self.cursor.peek(1) {
            match c {
                '0'..='9' => {
                    seen_digit = true;
                    after_exp = false;
                }
                '.' if !seen_dot && !seen_exp => {
                    seen_dot = true;
                }
                'e' if seen_digit && !seen_exp => {
                    seen_exp = true;
                    after_exp = true;
                }
                '+' | '-' if after_exp => {
                    after_exp = false;
                }
                _ => break,
            }
            self.cursor.consume(1);
            text.push(c);
        }

        self.push(TokenKind::Number, text);
    }

    // ── Identifiers and keywords ─────────────────────────────────────────

    /// Scan the maximal identifier run starting at `first`, then classify.
    ///
    /// Right after a member-access `.` every word is a plain identifier, so
    /// `obj.if` reads `if` as a property name rather than the keyword.
    fn lex_ident(&mut self, first: char) {
        let mut word = String::new();
        word.push(first);
        while let Some(c) = self.cursor.peek(1) {
            if !is_ident_continue(c) {
                break;
            }
            self.cursor.consume(1);
            word.push(c);
        }

        let kind = if self.last_kind() == Some(TokenKind::Dot) {
            TokenKind::Ident
        } else {
            keyword_from_str(&word).unwrap_or(TokenKind::Ident)
        };
        self.push(kind, word);
    }

    // ── Quoted string literals ───────────────────────────────────────────

    /// Scan a quoted string body; the opening `mark` is already consumed.
    ///
    /// Characters are copied until an unescaped `mark`. Escapes decode per
    /// [`Lexer::lex_escape`]. A bare carriage return or line feed is a
    /// fatal structural error reported at the break.
    fn lex_string(&mut self, mark: char) -> Result<(), LexError> {
        let mut text = String::new();
        loop {
            let at = self.cursor.pos();
            let Some(c) = self.cursor.consume(1) else {
                return Err(self.error(LexErrorKind::UnterminatedString));
            };
            match c {
                c if c == mark => break,
                '\\' => {
                    if let Some(decoded) = self.lex_escape() {
                        text.push(decoded);
                    }
                }
                '\r' | '\n' => {
                    return Err(LexError::new(LexErrorKind::UnexpectedLineBreak, at));
                }
                other => text.push(other),
            }
        }
        self.push(TokenKind::Str, text);
        Ok(())
    }

    /// Decode the escape sequence after an already-consumed backslash.
    ///
    /// Returns `None` for a line continuation (backslash before `\r`,
    /// `\r\n` or `\n`) and for a backslash at end of input; the caller's
    /// loop then sees the end and reports the unterminated literal itself.
    fn lex_escape(&mut self) -> Option<char> {
        let c = self.cursor.consume(1)?;
        match c {
            'b' => Some('\x08'),
            't' => Some('\t'),
            'n' => Some('\n'),
            'v' => Some('\x0b'),
            'f' => Some('\x0c'),
            'r' => Some('\r'),
            '\r' => {
                // Escaped line break: swallow an optional following '\n'.
                self.eat('\n');
                None
            }
            '\n' => None,
            // Covers '\'', '"', '\\' and everything else: the character
            // stands for itself.
            other => Some(other),
        }
    }

    // ── Template literals ────────────────────────────────────────────────

    /// Scan one literal segment of a template literal.
    ///
    /// Entered after the opening backtick, and re-entered after each
    /// interpolation closes. A template lexes to the token form of a string
    /// concatenation: `${` emits `Str(segment) + (` and opens an
    /// interpolation frame, handing the embedded expression back to the
    /// main loop; the closing backtick emits the final `Str(segment)`.
    fn lex_template_segment(&mut self) -> Result<(), LexError> {
        let mut text = String::new();
        loop {
            let Some(c) = self.cursor.consume(1) else {
                return Err(self.error(LexErrorKind::UnterminatedTemplate));
            };
            match c {
                '`' => {
                    self.push(TokenKind::Str, text);
                    return Ok(());
                }
                '\\' => {
                    if let Some(decoded) = self.lex_escape() {
                        text.push(decoded);
                    }
                }
                '$' if self.cursor.peek(1) == Some('{') => {
                    self.cursor.consume(1);
                    self.push(TokenKind::Str, text);
                    self.push(TokenKind::Plus, "+");
                    self.push(TokenKind::LParen, "(");
                    self.frames.push(0);
                    return Ok(());
                }
                // Raw line breaks are legal template content.
                other => text.push(other),
            }
        }
    }
}

/// Whitespace skipped between tokens: the ASCII blanks plus the Unicode
/// space and line separators.
fn is_blank(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\n'
            | '\r'
            | '\x0b'
            | '\x0c'
            | '\u{a0}'
            | '\u{2000}'..='\u{200b}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{3000}'
    )
}

/// Whether a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Whether a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
