//! Core token types produced by
//! [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource).

mod graphql_token;
mod graphql_token_kind;
mod graphql_token_span;
mod graphql_trivia_token;

pub use graphql_token::GraphQLToken;
pub use graphql_token::GraphQLTriviaTokenVec;
pub use graphql_token_kind::GraphQLTokenKind;
pub use graphql_token_span::GraphQLTokenSpan;
pub use graphql_trivia_token::GraphQLTriviaToken;
