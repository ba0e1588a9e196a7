/// The `kind` discriminator of a node, spelled exactly as the GraphQL
/// reference AST spells it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AstNodeKind {
    Document,
    FragmentDefinition,
    OperationDefinition,
}

impl AstNodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::OperationDefinition => "OperationDefinition",
        }
    }
}

impl std::fmt::Display for AstNodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for AstNodeKind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
