use crate::token::GraphQLTokenSpan;
use std::borrow::Cow;

/// A "trivia token" is a token that doesn't affect parsing (and therefore
/// never affects a [`NormalizedKey`](crate::NormalizedKey)) but is still
/// preserved for tooling.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTriviaToken<'src> {
    /// A GraphQL comment, which starts with `#` and extends to the end of the
    /// line.
    Comment {
        /// The comment text (excluding the leading `#`).
        value: Cow<'src, str>,
        span: GraphQLTokenSpan,
    },

    /// A comma separator. In GraphQL, commas are optional and treated as
    /// whitespace.
    Comma {
        span: GraphQLTokenSpan,
    },
}
