use crate::ast::Document;
use std::borrow::Cow;
use std::sync::Arc;

/// A value substituted between literal text segments of a [`RawSource`].
#[derive(Clone, Debug)]
pub enum SubstitutionValue {
    /// A previously parsed document. It contributes its
    /// [`source()`](Document::source) to the cache key and its definitions
    /// to the resolved document.
    Document(Arc<Document>),

    /// A nullish value; renders as empty text.
    Null,

    /// Any other value, already rendered to text. Inserted verbatim (no
    /// escaping).
    Text(String),
}

impl SubstitutionValue {
    /// Renders any [`Display`](std::fmt::Display) value as a text
    /// substitution.
    pub fn display(value: impl std::fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    pub fn as_document(&self) -> Option<&Arc<Document>> {
        match self {
            Self::Document(document) => Some(document),
            Self::Null | Self::Text(_) => None,
        }
    }

    /// The text this value contributes to an assembled source.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Document(document) => Cow::Borrowed(document.source()),
            Self::Null => Cow::Borrowed(""),
            Self::Text(text) => Cow::Borrowed(text),
        }
    }
}

impl From<Arc<Document>> for SubstitutionValue {
    fn from(document: Arc<Document>) -> Self {
        Self::Document(document)
    }
}

impl From<&Arc<Document>> for SubstitutionValue {
    fn from(document: &Arc<Document>) -> Self {
        Self::Document(Arc::clone(document))
    }
}

impl From<String> for SubstitutionValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for SubstitutionValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<T: Into<SubstitutionValue>> From<Option<T>> for SubstitutionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SubstitutionValue {
                fn from(value: $ty) -> Self {
                    Self::display(value)
                }
            }
        )*
    };
}

impl_from_display!(bool, char, i32, i64, u32, u64, usize, f64);

/// One piece of a [`RawSource`].
#[derive(Clone, Debug)]
pub enum SourceSegment {
    Literal(String),
    Substitution(SubstitutionValue),
}

/// The raw input of a parse: literal GraphQL text segments interleaved, in
/// order, with substitution values.
///
/// ```rust
/// use libgraphql_tag::GraphQLTagEngine;
/// use libgraphql_tag::RawSource;
///
/// let mut engine = GraphQLTagEngine::new();
/// let fragment = engine.gql("fragment UserFields on User { id }").unwrap();
/// let query = engine.parse_cached(
///     RawSource::new()
///         .literal("query { user { ...UserFields } } ")
///         .substitute(&fragment),
/// ).unwrap();
/// assert_eq!(query.definitions().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RawSource {
    segments: Vec<SourceSegment>,
}

impl RawSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interleaves `literals` and `substitutions` in order:
    /// `literals[0], substitutions[0], literals[1], substitutions[1], ...`.
    /// Whichever list is longer contributes its remaining items at the end.
    pub fn from_parts<L, S>(
        literals: impl IntoIterator<Item = L>,
        substitutions: impl IntoIterator<Item = S>,
    ) -> Self
    where
        L: Into<String>,
        S: Into<SubstitutionValue>,
    {
        let mut literals = literals.into_iter();
        let mut substitutions = substitutions.into_iter();
        let mut segments = vec![];
        loop {
            let literal = literals.next();
            let substitution = substitutions.next();
            if literal.is_none() && substitution.is_none() {
                break;
            }
            if let Some(literal) = literal {
                segments.push(SourceSegment::Literal(literal.into()));
            }
            if let Some(substitution) = substitution {
                segments.push(SourceSegment::Substitution(substitution.into()));
            }
        }
        Self { segments }
    }

    /// Appends a literal text segment.
    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.segments.push(SourceSegment::Literal(text.into()));
        self
    }

    /// Appends a substitution value.
    pub fn substitute(mut self, value: impl Into<SubstitutionValue>) -> Self {
        self.segments.push(SourceSegment::Substitution(value.into()));
        self
    }

    pub fn segments(&self) -> &[SourceSegment] {
        &self.segments
    }

    /// Embedded documents, in interpolation order.
    pub fn embedded_documents(&self) -> impl Iterator<Item = &Arc<Document>> {
        self.segments.iter().filter_map(|segment| match segment {
            SourceSegment::Substitution(value) => value.as_document(),
            SourceSegment::Literal(_) => None,
        })
    }

    /// The text parsed for this source's own definitions: literal segments
    /// and rendered non-document substitutions. Embedded documents are
    /// elided; their definitions are merged in already parsed.
    pub fn primary_text(&self) -> String {
        let mut text = String::new();
        for segment in &self.segments {
            match segment {
                SourceSegment::Literal(literal) => text.push_str(literal),
                SourceSegment::Substitution(SubstitutionValue::Document(_)) => (),
                SourceSegment::Substitution(value) => text.push_str(&value.render()),
            }
        }
        text
    }
}

impl From<&str> for RawSource {
    fn from(text: &str) -> Self {
        Self::new().literal(text)
    }
}

impl From<String> for RawSource {
    fn from(text: String) -> Self {
        Self::new().literal(text)
    }
}

impl From<&String> for RawSource {
    fn from(text: &String) -> Self {
        Self::new().literal(text.as_str())
    }
}

/// Concatenates every segment of `raw` in order. Documents render as their
/// original source text, nullish values as empty text, and everything else
/// verbatim.
pub fn assemble(raw: &RawSource) -> String {
    let mut text = String::new();
    for segment in raw.segments() {
        match segment {
            SourceSegment::Literal(literal) => text.push_str(literal),
            SourceSegment::Substitution(value) => text.push_str(&value.render()),
        }
    }
    text
}
