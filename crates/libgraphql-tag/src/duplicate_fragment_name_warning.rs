/// Emitted (never returned or raised) when a fragment name is seen with a
/// body that differs from every body already registered under that name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateFragmentNameWarning {
    pub fragment_name: String,
    /// Source body of the first fragment registered under this name.
    pub first_body: String,
    /// Source body of the newly encountered, differing fragment.
    pub new_body: String,
}

impl std::fmt::Display for DuplicateFragmentNameWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Warning: fragment with name `{}` already exists. Fragment names \
            must be unique across every document parsed by the same engine, \
            otherwise spreads of `...{}` are ambiguous.",
            self.fragment_name,
            self.fragment_name,
        )
    }
}

/// Receives every [`DuplicateFragmentNameWarning`] an engine emits.
pub type FragmentWarningSink =
    Box<dyn FnMut(&DuplicateFragmentNameWarning) + Send + 'static>;

pub(crate) fn default_warning_sink() -> FragmentWarningSink {
    Box::new(|warning| log::warn!("{warning}"))
}
