use crate::ast::AstNodeKind;
use crate::ast::FragmentDefinitionNode;
use crate::ast::OperationDefinitionNode;
use std::sync::Arc;

/// A top-level executable definition of a [`Document`](crate::ast::Document).
///
/// Nodes are shared through [`Arc`] so that the same fragment definition can
/// appear (as the very same instance) in many cached documents. Use
/// [`Definition::ptr_eq`] to check instance identity.
#[derive(Clone, Debug)]
pub enum Definition {
    Fragment(Arc<FragmentDefinitionNode>),
    Operation(Arc<OperationDefinitionNode>),
}

impl Definition {
    pub fn kind(&self) -> AstNodeKind {
        match self {
            Self::Fragment(_) => AstNodeKind::FragmentDefinition,
            Self::Operation(_) => AstNodeKind::OperationDefinition,
        }
    }

    pub fn as_fragment(&self) -> Option<&Arc<FragmentDefinitionNode>> {
        match self {
            Self::Fragment(fragment) => Some(fragment),
            Self::Operation(_) => None,
        }
    }

    pub fn as_operation(&self) -> Option<&Arc<OperationDefinitionNode>> {
        match self {
            Self::Fragment(_) => None,
            Self::Operation(operation) => Some(operation),
        }
    }

    pub fn source_body(&self) -> &str {
        match self {
            Self::Fragment(fragment) => fragment.source_body(),
            Self::Operation(operation) => operation.source_body(),
        }
    }

    /// Returns `true` if both definitions are the very same node instance.
    pub fn ptr_eq(&self, other: &Definition) -> bool {
        match (self, other) {
            (Self::Fragment(a), Self::Fragment(b)) => Arc::ptr_eq(a, b),
            (Self::Operation(a), Self::Operation(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub(crate) fn to_graphql_string(&self) -> String {
        match self {
            Self::Fragment(fragment) => fragment.to_graphql_string(),
            Self::Operation(operation) => crate::ast::GraphQLParserDocument {
                definitions: vec![
                    crate::ast::GraphQLParserDefinition::Operation(
                        operation.definition().clone(),
                    ),
                ],
            }.to_string(),
        }
    }
}
