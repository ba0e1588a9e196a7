use crate::ast::Document;
use crate::document_cache::DocumentCache;
use crate::duplicate_fragment_name_warning;
use crate::duplicate_fragment_name_warning::FragmentWarningSink;
use crate::embedding_resolver::EmbeddingResolver;
use crate::file_reader;
use crate::fragment_registry::FragmentRegistry;
use crate::raw_source;
use crate::raw_source::RawSource;
use crate::source_normalizer;
use crate::DuplicateFragmentNameWarning;
use crate::GraphQLTagConfig;
use crate::GraphQLTagParseError;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, GraphQLTagParseError>;

/// A caching GraphQL parse session.
///
/// Equivalent sources (same text modulo ignored tokens) resolve to the very
/// same `Arc<Document>` until [`reset_caches`](Self::reset_caches) is called.
/// Fragments are tracked across every document the engine resolves: a
/// structurally identical fragment is reused as the same instance, and a
/// second, different fragment with an already-used name produces a
/// [`DuplicateFragmentNameWarning`].
///
/// Most callers use the process-wide engine through
/// [`parse_cached`](crate::parse_cached) and friends; owning an engine
/// directly gives a fully isolated cache.
pub struct GraphQLTagEngine {
    cache: DocumentCache,
    config: GraphQLTagConfig,
    registry: FragmentRegistry,
    warning_sink: FragmentWarningSink,
}

impl GraphQLTagEngine {
    pub fn new() -> Self {
        Self::with_config(GraphQLTagConfig::default())
    }

    pub fn with_config(config: GraphQLTagConfig) -> Self {
        Self {
            cache: DocumentCache::new(),
            config,
            registry: FragmentRegistry::new(),
            warning_sink: duplicate_fragment_name_warning::default_warning_sink(),
        }
    }

    /// Parses `source`, or returns the cached document for an equivalent
    /// source.
    ///
    /// Embedded documents contribute their definitions (already resolved)
    /// after the source's own definitions. Fragments that are structurally
    /// identical to one seen earlier are dropped or replaced by the earlier
    /// instance. A syntax error leaves the engine's caches untouched.
    pub fn parse_cached(
        &mut self,
        source: impl Into<RawSource>,
    ) -> Result<Arc<Document>> {
        let raw = source.into();
        let assembled = raw_source::assemble(&raw);
        let key = source_normalizer::normalize(&assembled);

        if let Some(document) = self.cache.get(&key) {
            log::trace!("Document cache hit for `{key}`.");
            return Ok(document);
        }
        log::debug!("Document cache miss for `{key}`.");

        let document = Arc::new(EmbeddingResolver {
            config: &self.config,
            registry: &mut self.registry,
            warning_sink: &mut self.warning_sink,
        }.resolve(&raw, assembled)?);

        log::debug!(
            "Caching a document with {} definitions ({} cached documents).",
            document.definitions().len(),
            self.cache.len() + 1,
        );
        self.cache.put(key, Arc::clone(&document));
        Ok(document)
    }

    /// Parses a single literal source with no substitutions.
    pub fn gql(&mut self, source: &str) -> Result<Arc<Document>> {
        self.parse_cached(source)
    }

    /// Reads a UTF-8 file and parses its contents as a single literal
    /// source.
    pub fn parse_cached_file<P: AsRef<Path>>(
        &mut self,
        file_path: P,
    ) -> Result<Arc<Document>> {
        let content = file_reader::read_content(file_path)?;
        self.parse_cached(content)
    }

    /// Forgets every cached document and registered fragment. Configuration
    /// and the warning sink are kept.
    pub fn reset_caches(&mut self) {
        log::debug!(
            "Resetting {} cached documents and {} registered fragment names.",
            self.cache.len(),
            self.registry.len(),
        );
        self.cache.reset_all();
        self.registry.reset_all();
    }

    pub fn config(&self) -> &GraphQLTagConfig {
        &self.config
    }

    pub fn enable_experimental_fragment_variables(&mut self) {
        self.config.experimental_fragment_variables = true;
    }

    pub fn disable_experimental_fragment_variables(&mut self) {
        self.config.experimental_fragment_variables = false;
    }

    pub fn enable_fragment_warnings(&mut self) {
        self.config.fragment_warnings_enabled = true;
    }

    pub fn disable_fragment_warnings(&mut self) {
        self.config.fragment_warnings_enabled = false;
    }

    /// Replaces the function that receives duplicate-fragment-name warnings.
    /// The default sink logs each warning with `log::warn!`.
    pub fn set_warning_sink(
        &mut self,
        sink: impl FnMut(&DuplicateFragmentNameWarning) + Send + 'static,
    ) {
        self.warning_sink = Box::new(sink);
    }

    pub fn cached_document_count(&self) -> usize {
        self.cache.len()
    }

    /// Names of every fragment registered since the last reset, in the order
    /// they were first seen.
    pub fn registered_fragment_names(&self) -> Vec<String> {
        self.registry
            .fragment_names()
            .map(str::to_string)
            .collect()
    }
}

impl Default for GraphQLTagEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GraphQLTagEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQLTagEngine")
            .field("cache", &self.cache)
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
