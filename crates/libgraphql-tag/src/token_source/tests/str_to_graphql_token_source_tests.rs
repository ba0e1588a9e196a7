//! Tests for `StrGraphQLTokenSource`.

use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token_source::StrGraphQLTokenSource;
use std::borrow::Cow;

fn token_kinds(source: &str) -> Vec<GraphQLTokenKind<'_>> {
    StrGraphQLTokenSource::new(source)
        .map(|t| t.kind)
        .collect()
}

fn name(s: &str) -> GraphQLTokenKind<'_> {
    GraphQLTokenKind::Name(Cow::Borrowed(s))
}

#[test]
fn punctuators() {
    let kinds = token_kinds("{ } ( ) [ ] : = @ ! $ & | ...");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::Ampersand,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::Ellipsis,
            GraphQLTokenKind::Eof,
        ]
    );
}

#[test]
fn adjacent_punctuators_without_whitespace() {
    let kinds = token_kinds("{}[]()");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::Eof,
        ]
    );
}

#[test]
fn names_and_keywords() {
    let kinds = token_kinds("query _private true false null nullable");
    assert_eq!(
        kinds,
        vec![
            name("query"),
            name("_private"),
            GraphQLTokenKind::True,
            GraphQLTokenKind::False,
            GraphQLTokenKind::Null,
            name("nullable"),
            GraphQLTokenKind::Eof,
        ]
    );
}

#[test]
fn numbers() {
    let kinds = token_kinds("0 -12 3.5 -1.25e-4 6E2");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::IntValue(Cow::Borrowed("0")),
            GraphQLTokenKind::IntValue(Cow::Borrowed("-12")),
            GraphQLTokenKind::FloatValue(Cow::Borrowed("3.5")),
            GraphQLTokenKind::FloatValue(Cow::Borrowed("-1.25e-4")),
            GraphQLTokenKind::FloatValue(Cow::Borrowed("6E2")),
            GraphQLTokenKind::Eof,
        ]
    );
}

#[test]
fn leading_zero_is_an_error() {
    let kinds = token_kinds("007");
    assert_eq!(kinds.len(), 2);
    assert!(kinds[0].is_error());
}

#[test]
fn strings_keep_their_raw_text() {
    let kinds = token_kinds(r#""a,  b # not a comment" """block "quoted" text""""#);
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::StringValue(Cow::Borrowed(r#""a,  b # not a comment""#)),
            GraphQLTokenKind::StringValue(Cow::Borrowed(r#""""block "quoted" text""""#)),
            GraphQLTokenKind::Eof,
        ]
    );
}

#[test]
fn escaped_quote_does_not_end_string() {
    let kinds = token_kinds(r#""say \"hi\"" x"#);
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::StringValue(Cow::Borrowed(r#""say \"hi\"""#)),
            name("x"),
            GraphQLTokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_string_is_an_error() {
    let kinds = token_kinds("\"abc\n}");
    assert!(kinds[0].is_error());
    assert_eq!(kinds[1], GraphQLTokenKind::CurlyBraceClose);
}

#[test]
fn commas_and_comments_are_trivia() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("a, # note\n b").collect();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, name("a"));
    assert_eq!(tokens[1].kind, name("b"));

    let trivia = &tokens[1].preceding_trivia;
    assert_eq!(trivia.len(), 2);
    assert!(matches!(trivia[0], GraphQLTriviaToken::Comma { .. }));
    assert!(matches!(
        &trivia[1],
        GraphQLTriviaToken::Comment { value, .. } if value == " note"
    ));
}

#[test]
fn trailing_trivia_attaches_to_eof() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("a ,,").collect();
    assert_eq!(tokens[1].kind, GraphQLTokenKind::Eof);
    assert_eq!(tokens[1].preceding_trivia.len(), 2);
}

#[test]
fn byte_order_mark_is_ignored() {
    let kinds = token_kinds("\u{FEFF}{ a }");
    assert_eq!(kinds.len(), 4);
    assert_eq!(kinds[0], GraphQLTokenKind::CurlyBraceOpen);
}

#[test]
fn dots_that_are_not_an_ellipsis_are_errors() {
    let kinds = token_kinds(".. x");
    assert!(kinds[0].is_error());
    assert_eq!(kinds[1], name("x"));
}

#[test]
fn invalid_character_is_an_error_and_lexing_continues() {
    let kinds = token_kinds("a ? b");
    assert_eq!(kinds[0], name("a"));
    assert!(kinds[1].is_error());
    assert_eq!(kinds[2], name("b"));
}

#[test]
fn positions_track_lines_and_columns() {
    let source = "{\r\n  🎉: x\n}";
    let tokens: Vec<_> = StrGraphQLTokenSource::new(source).collect();

    // `🎉` is an invalid character; its span still reports the position.
    let emoji = &tokens[1];
    assert!(emoji.kind.is_error());
    assert_eq!(emoji.span.start_inclusive.line(), 1);
    assert_eq!(emoji.span.start_inclusive.col_utf8(), 2);
    assert_eq!(emoji.span.end_exclusive.col_utf8(), 3);
    assert_eq!(emoji.span.end_exclusive.col_utf16(), 4);

    let x = &tokens[3];
    assert_eq!(x.kind, name("x"));
    assert_eq!(x.span.start_inclusive.col_utf8(), 5);
    assert_eq!(x.span.start_inclusive.col_utf16(), 6);
    assert_eq!(x.source_text(source), "x");

    let close = &tokens[4];
    assert_eq!(close.span.start_inclusive.line(), 2);
    assert_eq!(close.span.start_inclusive.to_ast_pos().line, 3);
}

#[test]
fn emits_exactly_one_eof() {
    let mut lexer = StrGraphQLTokenSource::new("");
    assert_eq!(lexer.next().map(|t| t.kind), Some(GraphQLTokenKind::Eof));
    assert!(lexer.next().is_none());
}
