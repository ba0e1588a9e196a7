use crate::ParseOptions;

/// Toggles owned by a [`GraphQLTagEngine`](crate::GraphQLTagEngine).
///
/// Resetting an engine's caches leaves its config untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphQLTagConfig {
    /// Emit a [`DuplicateFragmentNameWarning`](crate::DuplicateFragmentNameWarning)
    /// when two different fragment bodies share a name. Defaults to `true`.
    pub fragment_warnings_enabled: bool,

    /// Accept variable definitions on fragments
    /// (`fragment F($id: ID!) on T { .. }`). Defaults to `false`.
    pub experimental_fragment_variables: bool,
}

impl GraphQLTagConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            experimental_fragment_variables: self.experimental_fragment_variables,
        }
    }
}

impl Default for GraphQLTagConfig {
    fn default() -> Self {
        Self {
            fragment_warnings_enabled: true,
            experimental_fragment_variables: false,
        }
    }
}
