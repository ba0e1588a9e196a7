use crate::file_reader::ReadContentError;

/// An error raised while producing a [`Document`](crate::ast::Document).
///
/// A failed call never populates the document cache or the fragment
/// registry.
#[derive(Debug, thiserror::Error)]
pub enum GraphQLTagParseError {
    /// The source text is not a valid GraphQL executable document.
    #[error("GraphQL syntax error: {message}")]
    Syntax {
        message: String,
    },

    /// A file-based entry point failed to read its input.
    #[error("{0}")]
    FileRead(#[from] ReadContentError),
}

impl GraphQLTagParseError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}

impl From<graphql_parser::query::ParseError> for GraphQLTagParseError {
    fn from(err: graphql_parser::query::ParseError) -> Self {
        Self::syntax(err.to_string())
    }
}
