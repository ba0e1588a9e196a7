//! A lexer over `&str` input producing [`GraphQLToken`]s.
//!
//! This lexer implements zero-copy lexing: token values borrow directly from
//! the source string using `Cow::Borrowed`.
//!
//! - **Ignored tokens**: whitespace, line terminators and the BOM are skipped.
//!   Commas and `#` comments are also ignored by the grammar but preserved as
//!   trivia on the following token.
//! - **Dual column tracking**: positions carry both UTF-8 character columns
//!   and UTF-16 code unit columns.
//! - **Error recovery**: invalid input produces `Error` tokens and lexing
//!   continues, so a malformed document is still fully tokenized.
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_tag::token_source::StrGraphQLTokenSource;
//!
//! let lexer = StrGraphQLTokenSource::new("{ name }");
//! for token in lexer {
//!     println!("{:?}", token.kind);
//! }
//! // Output:
//! // CurlyBraceOpen
//! // Name("name")
//! // CurlyBraceClose
//! // Eof
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use crate::token::GraphQLTriviaToken;
use crate::token::GraphQLTriviaTokenVec;
use crate::SourcePosition;
use smallvec::smallvec;
use std::borrow::Cow;

/// A lexer that produces [`GraphQLToken`]s from a `&str`.
///
/// See module documentation for details.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`, so that `\r\n` counts as a
    /// single line terminator.
    last_char_was_cr: bool,

    /// Trivia (comments, commas) accumulated before the next token.
    pending_trivia: GraphQLTriviaTokenVec<'src>,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// Handles `\n`, `\r` and `\r\n` line terminators and tracks both the
    /// UTF-8 character column and the UTF-16 code unit column.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                // Second half of `\r\n`; the line was already advanced.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Advances past `text`, which must be the next bytes of input and must
    /// not contain line terminators.
    fn consume_within_line(&mut self, text: &str) {
        self.curr_col_utf8 += text.chars().count();
        self.curr_col_utf16 += text.encode_utf16().count();
        self.curr_byte_offset += text.len();
        if !text.is_empty() {
            self.last_char_was_cr = false;
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLTokenSpan {
        GraphQLTokenSpan::new(start, self.curr_position())
    }

    fn make_token(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        span: GraphQLTokenSpan,
    ) -> GraphQLToken<'src> {
        GraphQLToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    fn punctuator(
        &mut self,
        start: SourcePosition,
        kind: GraphQLTokenKind<'src>,
    ) -> GraphQLToken<'src> {
        self.consume();
        let span = self.make_span(start);
        self.make_token(kind, span)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Advances to the next token, skipping whitespace and collecting trivia.
    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            self.skip_whitespace();

            let start = self.curr_position();

            match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    return self.make_token(GraphQLTokenKind::Eof, span);
                }

                Some('#') => {
                    self.lex_comment(start);
                    continue;
                }

                Some(',') => {
                    self.consume();
                    let span = self.make_span(start);
                    self.pending_trivia.push(GraphQLTriviaToken::Comma { span });
                    continue;
                }

                Some('!') => return self.punctuator(start, GraphQLTokenKind::Bang),
                Some('$') => return self.punctuator(start, GraphQLTokenKind::Dollar),
                Some('&') => return self.punctuator(start, GraphQLTokenKind::Ampersand),
                Some('(') => return self.punctuator(start, GraphQLTokenKind::ParenOpen),
                Some(')') => return self.punctuator(start, GraphQLTokenKind::ParenClose),
                Some(':') => return self.punctuator(start, GraphQLTokenKind::Colon),
                Some('=') => return self.punctuator(start, GraphQLTokenKind::Equals),
                Some('@') => return self.punctuator(start, GraphQLTokenKind::At),
                Some('[') => return self.punctuator(start, GraphQLTokenKind::SquareBracketOpen),
                Some(']') => return self.punctuator(start, GraphQLTokenKind::SquareBracketClose),
                Some('{') => return self.punctuator(start, GraphQLTokenKind::CurlyBraceOpen),
                Some('}') => return self.punctuator(start, GraphQLTokenKind::CurlyBraceClose),
                Some('|') => return self.punctuator(start, GraphQLTokenKind::Pipe),

                Some('.') => return self.lex_dot_or_ellipsis(start),

                Some('"') => return self.lex_string(start),

                Some(c) if is_name_start(c) => return self.lex_name(start),

                Some(c) if c == '-' || c.is_ascii_digit() => {
                    return self.lex_number(start);
                }

                Some(_) => return self.lex_invalid_character(start),
            }
        }
    }

    // =========================================================================
    // Whitespace and comments
    // =========================================================================

    /// Skips whitespace characters.
    ///
    /// Per the GraphQL spec these are "ignored tokens": space, tab, line
    /// terminators (LF, CR, CRLF) and the Unicode BOM. Commas are ignored
    /// tokens too, but are handled separately to preserve them as trivia.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                }
                _ => break,
            }
        }
    }

    /// Lexes a comment (from `#` to end of line) into pending trivia.
    fn lex_comment(&mut self, start: SourcePosition) {
        self.consume();
        let rest = self.remaining();
        let content_len = memchr::memchr2(b'\n', b'\r', rest.as_bytes())
            .unwrap_or(rest.len());
        let content = &rest[..content_len];
        self.consume_within_line(content);

        let span = self.make_span(start);
        self.pending_trivia.push(GraphQLTriviaToken::Comment {
            value: Cow::Borrowed(content),
            span,
        });
    }

    // =========================================================================
    // Dot / Ellipsis
    // =========================================================================

    /// Lexes `...`. Any other run of dots is an error token covering the
    /// dots that were consumed.
    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            let span = self.make_span(start);
            return self.make_token(GraphQLTokenKind::Ellipsis, span);
        }

        let mut num_dots = 0;
        while self.peek_char() == Some('.') {
            self.consume();
            num_dots += 1;
        }
        let span = self.make_span(start);
        let message = if num_dots == 2 {
            "Unexpected `..` (use `...` for spread operator)".to_string()
        } else {
            "Unexpected `.`".to_string()
        };
        self.make_token(GraphQLTokenKind::error(message), span)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes a name or keyword.
    ///
    /// Names match the pattern: `/[_A-Za-z][_0-9A-Za-z]*/`. The keywords
    /// `true`, `false`, and `null` are emitted as distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let rest = self.remaining();
        let name_len = rest
            .bytes()
            .position(|b| !is_name_continue(b as char))
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        self.consume_within_line(name);

        let span = self.make_span(start);
        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };

        self.make_token(kind, span)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional decimal part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if let Some(ch) = self.peek_char()
                    && ch.is_ascii_digit() {
                    return self.lex_number_error(
                        start,
                        "Invalid number: leading zeros are not allowed",
                    );
                }
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_digits();
            }
            Some(_) | None => {
                let span = self.make_span(start);
                return self.make_token(GraphQLTokenKind::error("Unexpected `-`"), span);
            }
        }

        if self.peek_char() == Some('.')
            && let Some(ch) = self.peek_char_nth(1)
            && ch.is_ascii_digit() {
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if let Some(ch) = self.peek_char()
            && (ch == 'e' || ch == 'E') {
            is_float = true;
            self.consume();

            if let Some(ch) = self.peek_char()
                && (ch == '+' || ch == '-') {
                self.consume();
            }

            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    "Invalid number: exponent must have at least one digit",
                );
            }
            self.consume_digits();
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(num_text)
        } else {
            GraphQLTokenKind::int_value_borrowed(num_text)
        };

        self.make_token(kind, span)
    }

    fn consume_digits(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.consume();
        }
    }

    /// Creates an error token for an invalid number, first consuming the rest
    /// of the number-like characters.
    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        message: &str,
    ) -> GraphQLToken<'src> {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-') {
                self.consume();
            } else {
                break;
            }
        }

        let invalid_text = &self.source[start.byte_offset()..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind = GraphQLTokenKind::error(format!("{message}: `{invalid_text}`"));
        self.make_token(kind, span)
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a string literal (single-line or block string).
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.consume();

        loop {
            match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    let kind = GraphQLTokenKind::error("Unterminated string literal");
                    return self.make_token(kind, span);
                }
                Some('\n') | Some('\r') => {
                    self.consume();
                    if self.last_char_was_cr && self.peek_char() == Some('\n') {
                        self.consume();
                    }
                    let span = self.make_span(start);
                    let kind = GraphQLTokenKind::error(
                        "Unterminated string literal (single-line strings cannot \
                        contain unescaped newlines)",
                    );
                    return self.make_token(kind, span);
                }
                Some('"') => {
                    self.consume();
                    break;
                }
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some() {
                        self.consume();
                    }
                }
                Some(_) => {
                    self.consume();
                }
            }
        }

        let string_text = &self.source[start.byte_offset()..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::string_value_borrowed(string_text), span)
    }

    /// Lexes a block string literal (`"""..."""`), honoring the `\"""`
    /// escape.
    fn lex_block_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        for _ in 0..3 {
            self.consume();
        }

        loop {
            if self.remaining().starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
                continue;
            }
            if self.remaining().starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume();
                }
                break;
            }
            if self.consume().is_none() {
                let span = self.make_span(start);
                let kind = GraphQLTokenKind::error("Unterminated block string");
                return self.make_token(kind, span);
            }
        }

        let string_text = &self.source[start.byte_offset()..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::string_value_borrowed(string_text), span)
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let message = match self.consume() {
            Some(ch) => format!("Unexpected character {}", describe_char(ch)),
            None => "Unexpected end of input".to_string(),
        };
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::error(message), span)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }

        Some(token)
    }
}

/// Returns `true` if `ch` can start a GraphQL name.
///
/// <https://spec.graphql.org/September2025/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name.
///
/// <https://spec.graphql.org/September2025/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Printable characters are shown in backticks; invisible ones also get
/// their code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
