//! Canonicalization of GraphQL source text for cache keys.
//!
//! Normalization follows the GraphQL lexical grammar: the text is lexed and
//! only significant tokens survive, joined by single spaces. Everything the
//! grammar ignores (whitespace, line terminators, commas, comments, the BOM)
//! disappears, while string literals keep their exact contents.

use crate::raw_source;
use crate::raw_source::RawSource;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

/// A canonical cache key for GraphQL source text.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes GraphQL source text.
///
/// Lexer error tokens contribute their raw source text, so malformed input
/// still produces a deterministic key (such input never parses, so the key is
/// never stored).
pub fn normalize(text: &str) -> NormalizedKey {
    let mut normalized = String::with_capacity(text.len());
    for token in StrGraphQLTokenSource::new(text) {
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            break;
        }
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(token.source_text(text));
    }
    NormalizedKey(normalized)
}

/// Computes the cache key of a [`RawSource`]: the normalized form of its
/// [assembled](raw_source::assemble) text.
pub fn normalize_raw_source(raw: &RawSource) -> NormalizedKey {
    normalize(&raw_source::assemble(raw))
}

/// Returns `true` if `text` contains anything other than ignored tokens.
pub fn has_significant_tokens(text: &str) -> bool {
    StrGraphQLTokenSource::new(text)
        .next()
        .is_some_and(|token| !matches!(token.kind, GraphQLTokenKind::Eof))
}

/// Splits `text` into the normalized source of each top-level definition.
///
/// Every executable definition ends with a selection set, so a definition
/// ends at the `}` that brings bracket nesting back to zero. Tokens after the
/// last such `}` (only present in malformed input) form a final chunk.
pub fn split_definitions(text: &str) -> Vec<String> {
    let mut chunks = vec![];
    let mut current = String::new();
    let mut depth: isize = 0;

    for token in StrGraphQLTokenSource::new(text) {
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            break;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(token.source_text(text));

        depth += token.kind.nesting_delta();
        if matches!(token.kind, GraphQLTokenKind::CurlyBraceClose) && depth <= 0 {
            chunks.push(std::mem::take(&mut current));
            depth = 0;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
