//! A caching layer over GraphQL executable-document parsing for
//! template-embedded GraphQL.
//!
//! Sources are given as a [`RawSource`]: literal text interleaved with
//! substitution values, some of which may be previously parsed documents.
//! A [`GraphQLTagEngine`] turns a source into an `Arc<Document>`:
//!
//! * equivalent sources (same text modulo whitespace, commas and comments)
//!   resolve to the very same `Arc`;
//! * embedded documents contribute their definitions, so fragments can be
//!   composed into queries;
//! * a fragment seen again with the same body is reused as the same
//!   instance, and a different fragment reusing a name produces a
//!   [`DuplicateFragmentNameWarning`].
//!
//! The free functions of this crate ([`parse_cached`], [`gql`],
//! [`reset_caches`], ...) operate on a lazily created process-wide engine.

pub mod ast;
mod default_engine;
mod document_cache;
mod document_parser;
mod duplicate_fragment_name_warning;
mod embedding_resolver;
pub mod file_reader;
mod fragment_registry;
mod graphql_tag_config;
mod graphql_tag_engine;
mod graphql_tag_parse_error;
mod raw_source;
mod source_normalizer;
mod source_position;
pub mod token;
pub mod token_source;

pub use default_engine::disable_experimental_fragment_variables;
pub use default_engine::disable_fragment_warnings;
pub use default_engine::enable_experimental_fragment_variables;
pub use default_engine::enable_fragment_warnings;
pub use default_engine::gql;
pub use default_engine::parse_cached;
pub use default_engine::reset_caches;
pub use default_engine::with_default_engine;
pub use document_cache::DocumentCache;
pub use document_parser::parse;
pub use document_parser::ParseOptions;
pub use duplicate_fragment_name_warning::DuplicateFragmentNameWarning;
pub use duplicate_fragment_name_warning::FragmentWarningSink;
pub use fragment_registry::FragmentRegistration;
pub use fragment_registry::FragmentRegistry;
pub use graphql_tag_config::GraphQLTagConfig;
pub use graphql_tag_engine::GraphQLTagEngine;
pub use graphql_tag_parse_error::GraphQLTagParseError;
pub use raw_source::assemble;
pub use raw_source::RawSource;
pub use raw_source::SourceSegment;
pub use raw_source::SubstitutionValue;
pub use source_normalizer::has_significant_tokens;
pub use source_normalizer::normalize;
pub use source_normalizer::normalize_raw_source;
pub use source_normalizer::split_definitions;
pub use source_normalizer::NormalizedKey;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
