//! The process-wide [`GraphQLTagEngine`] behind the crate's free functions.

use crate::ast::Document;
use crate::raw_source::RawSource;
use crate::GraphQLTagEngine;
use crate::GraphQLTagParseError;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

static DEFAULT_ENGINE: OnceLock<Mutex<GraphQLTagEngine>> = OnceLock::new();

/// Runs `f` with exclusive access to the process-wide engine.
///
/// The engine is created on first use. The lock is held for the whole call,
/// so a parse (cache lookup, resolution and store) is atomic with respect to
/// every other caller.
pub fn with_default_engine<R>(f: impl FnOnce(&mut GraphQLTagEngine) -> R) -> R {
    let engine = DEFAULT_ENGINE.get_or_init(|| Mutex::new(GraphQLTagEngine::new()));
    let mut engine = engine.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *engine)
}

/// [`GraphQLTagEngine::parse_cached`] on the process-wide engine.
pub fn parse_cached(
    source: impl Into<RawSource>,
) -> Result<Arc<Document>, GraphQLTagParseError> {
    let source = source.into();
    with_default_engine(|engine| engine.parse_cached(source))
}

/// [`GraphQLTagEngine::gql`] on the process-wide engine.
pub fn gql(source: &str) -> Result<Arc<Document>, GraphQLTagParseError> {
    with_default_engine(|engine| engine.gql(source))
}

pub fn reset_caches() {
    with_default_engine(GraphQLTagEngine::reset_caches)
}

pub fn enable_experimental_fragment_variables() {
    with_default_engine(GraphQLTagEngine::enable_experimental_fragment_variables)
}

pub fn disable_experimental_fragment_variables() {
    with_default_engine(GraphQLTagEngine::disable_experimental_fragment_variables)
}

pub fn enable_fragment_warnings() {
    with_default_engine(GraphQLTagEngine::enable_fragment_warnings)
}

pub fn disable_fragment_warnings() {
    with_default_engine(GraphQLTagEngine::disable_fragment_warnings)
}
