//! Lexing of GraphQL source text into [`GraphQLToken`](crate::token::GraphQLToken)s.

mod str_to_graphql_token_source;

pub use str_to_graphql_token_source::StrGraphQLTokenSource;

#[cfg(test)]
mod tests;
