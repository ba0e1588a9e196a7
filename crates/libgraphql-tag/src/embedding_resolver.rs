//! Merges embedded documents into a parsed source and deduplicates the
//! fragments of the combined definition list.

use crate::ast::Definition;
use crate::ast::Document;
use crate::document_parser;
use crate::duplicate_fragment_name_warning::FragmentWarningSink;
use crate::fragment_registry::FragmentRegistration;
use crate::fragment_registry::FragmentRegistry;
use crate::raw_source::RawSource;
use crate::source_normalizer;
use crate::DuplicateFragmentNameWarning;
use crate::GraphQLTagConfig;
use crate::GraphQLTagParseError;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, GraphQLTagParseError>;

pub(crate) struct EmbeddingResolver<'a> {
    pub(crate) config: &'a GraphQLTagConfig,
    pub(crate) registry: &'a mut FragmentRegistry,
    pub(crate) warning_sink: &'a mut FragmentWarningSink,
}

impl EmbeddingResolver<'_> {
    /// Produces the resolved [`Document`] for `raw`, whose assembled text is
    /// `assembled`.
    ///
    /// Parsing happens before the registry is touched, so a syntax error
    /// leaves the registry exactly as it was.
    pub(crate) fn resolve(
        &mut self,
        raw: &RawSource,
        assembled: String,
    ) -> Result<Document> {
        let primary_definitions = self.parse_primary(raw)?;
        let combined = primary_definitions
            .into_iter()
            .chain(
                raw.embedded_documents()
                    .flat_map(|document| document.definitions().iter().cloned()),
            );

        let definitions = self.deduplicate(combined);
        Ok(Document::new(definitions, assembled))
    }

    fn parse_primary(&self, raw: &RawSource) -> Result<Vec<Definition>> {
        let primary_text = raw.primary_text();
        let has_embedded_documents = raw.embedded_documents().next().is_some();
        if has_embedded_documents
            && !source_normalizer::has_significant_tokens(&primary_text)
        {
            return Ok(vec![]);
        }

        let parsed = document_parser::parse(
            &primary_text,
            self.config.parse_options(),
        )?;
        Ok(parsed.into_definitions())
    }

    fn deduplicate(
        &mut self,
        definitions: impl Iterator<Item = Definition>,
    ) -> Vec<Definition> {
        let mut kept_fragments: HashSet<(String, String)> = HashSet::new();
        let mut resolved = vec![];

        for definition in definitions {
            let fragment = match definition {
                Definition::Operation(_) => {
                    resolved.push(definition);
                    continue;
                },
                Definition::Fragment(fragment) => fragment,
            };

            let key = (
                fragment.name().to_string(),
                fragment.source_body().to_string(),
            );
            if kept_fragments.contains(&key) {
                continue;
            }

            let fragment = match self.registry.register(&fragment) {
                FragmentRegistration::Registered => fragment,
                FragmentRegistration::Known(existing) => existing,
                FragmentRegistration::Collision { first_body } => {
                    if self.config.fragment_warnings_enabled {
                        (self.warning_sink)(&DuplicateFragmentNameWarning {
                            fragment_name: key.0.clone(),
                            first_body,
                            new_body: key.1.clone(),
                        });
                    }
                    fragment
                },
            };

            kept_fragments.insert(key);
            resolved.push(Definition::Fragment(fragment));
        }

        resolved
    }
}
