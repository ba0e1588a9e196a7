//! Various test utils.

use crate::DuplicateFragmentNameWarning;
use crate::GraphQLTagEngine;
use std::sync::Arc;
use std::sync::Mutex;

pub type CollectedWarnings = Arc<Mutex<Vec<DuplicateFragmentNameWarning>>>;

/// Creates an isolated engine whose duplicate-fragment-name warnings are
/// collected into the returned list.
pub fn engine_collecting_warnings() -> (GraphQLTagEngine, CollectedWarnings) {
    let warnings = CollectedWarnings::default();
    let mut engine = GraphQLTagEngine::new();
    let sink_warnings = Arc::clone(&warnings);
    engine.set_warning_sink(move |warning| {
        sink_warnings.lock().unwrap().push(warning.clone());
    });
    (engine, warnings)
}

pub fn warning_count(warnings: &CollectedWarnings) -> usize {
    warnings.lock().unwrap().len()
}

/// Names of the fragment definitions of `document`, in order.
pub fn fragment_names(document: &crate::ast::Document) -> Vec<&str> {
    document.fragments().map(|fragment| fragment.name()).collect()
}
