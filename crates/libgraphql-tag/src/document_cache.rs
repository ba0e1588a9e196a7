use crate::ast::Document;
use crate::NormalizedKey;
use indexmap::IndexMap;
use std::sync::Arc;

/// Maps [`NormalizedKey`]s to the resolved [`Document`] produced for them.
///
/// `get` after `put` with the same key returns the very same `Arc`, which is
/// what makes equivalent sources reference-stable.
#[derive(Debug, Default)]
pub struct DocumentCache {
    documents: IndexMap<NormalizedKey, Arc<Document>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &NormalizedKey) -> Option<Arc<Document>> {
        self.documents.get(key).map(Arc::clone)
    }

    pub fn put(&mut self, key: NormalizedKey, document: Arc<Document>) {
        self.documents.insert(key, document);
    }

    /// Drops every cached document. Callers still holding an `Arc` keep their
    /// document alive, but equivalent sources will resolve to new instances.
    pub fn reset_all(&mut self) {
        self.documents.clear();
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Cached keys in the order they were first stored.
    pub fn keys(&self) -> impl Iterator<Item = &NormalizedKey> {
        self.documents.keys()
    }
}
