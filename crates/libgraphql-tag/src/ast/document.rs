use crate::ast::AstNodeKind;
use crate::ast::Definition;
use crate::ast::FragmentDefinitionNode;
use crate::ast::OperationDefinitionNode;
use std::sync::Arc;

/// A parsed (and, when produced by a
/// [`GraphQLTagEngine`](crate::GraphQLTagEngine), fully resolved and
/// deduplicated) GraphQL executable document.
///
/// Documents are immutable once built. The engine hands them out as
/// `Arc<Document>` and returns the same `Arc` for every equivalent source
/// until its caches are reset.
#[derive(Debug)]
pub struct Document {
    definitions: Vec<Definition>,
    source: String,
}

impl Document {
    pub(crate) fn new(definitions: Vec<Definition>, source: String) -> Self {
        Self {
            definitions,
            source,
        }
    }

    pub(crate) fn into_definitions(self) -> Vec<Definition> {
        self.definitions
    }

    pub fn kind(&self) -> AstNodeKind {
        AstNodeKind::Document
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// The assembled source text this document was produced from. When a
    /// document is embedded into another source, this is the text it
    /// contributes to the embedding source's cache key.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn fragments(&self) -> impl Iterator<Item = &Arc<FragmentDefinitionNode>> {
        self.definitions.iter().filter_map(Definition::as_fragment)
    }

    pub fn operations(&self) -> impl Iterator<Item = &Arc<OperationDefinitionNode>> {
        self.definitions.iter().filter_map(Definition::as_operation)
    }

    /// Finds the first fragment definition with the given name.
    pub fn fragment(&self, name: &str) -> Option<&Arc<FragmentDefinitionNode>> {
        self.fragments().find(|fragment| fragment.name() == name)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, definition) in self.definitions.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            f.write_str(&definition.to_graphql_string())?;
        }
        Ok(())
    }
}
