use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use crate::token::GraphQLTriviaToken;
use smallvec::SmallVec;

/// Type alias for trivia storage. Uses SmallVec to avoid heap allocation
/// for the common case of 0-2 trivia items per token.
pub type GraphQLTriviaTokenVec<'src> = SmallVec<[GraphQLTriviaToken<'src>; 2]>;

/// A GraphQL token with location (span) information and an ordered list of any
/// preceding trivia (comments, commas).
///
/// Trivia is attached to the *following* token, so consumers that only care
/// about significant tokens never see it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token (including Error for lexer errors).
    pub kind: GraphQLTokenKind<'src>,

    /// Trivia (comments, commas) that precede this token.
    pub preceding_trivia: GraphQLTriviaTokenVec<'src>,

    /// The source location span of this token.
    pub span: GraphQLTokenSpan,
}

impl<'src> GraphQLToken<'src> {
    /// Returns the exact source text this token was lexed from.
    ///
    /// `source` must be the same string the token was lexed from.
    pub fn source_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start_inclusive.byte_offset()
            ..self.span.end_exclusive.byte_offset()]
    }
}
