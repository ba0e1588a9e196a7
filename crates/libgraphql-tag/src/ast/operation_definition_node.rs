use crate::ast::AstNodeKind;
use crate::ast::OperationDefinition;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use graphql_parser::query::OperationDefinition as Op;

/// An operation (query, mutation, subscription, or selection-set shorthand)
/// together with its normalized source body.
#[derive(Debug, PartialEq)]
pub struct OperationDefinitionNode {
    definition: OperationDefinition,
    source_body: String,
}

impl OperationDefinitionNode {
    pub(crate) fn new(definition: OperationDefinition, source_body: String) -> Self {
        Self {
            definition,
            source_body,
        }
    }

    pub fn kind(&self) -> AstNodeKind {
        AstNodeKind::OperationDefinition
    }

    /// The underlying `graphql_parser` operation.
    pub fn definition(&self) -> &OperationDefinition {
        &self.definition
    }

    /// The operation's name, if it has one (shorthand and anonymous
    /// operations do not).
    pub fn name(&self) -> Option<&str> {
        match &self.definition {
            Op::SelectionSet(_) => None,
            Op::Query(query) => query.name.as_deref(),
            Op::Mutation(mutation) => mutation.name.as_deref(),
            Op::Subscription(subscription) => subscription.name.as_deref(),
        }
    }

    /// `"query"`, `"mutation"` or `"subscription"`. Selection-set shorthand
    /// is a query.
    pub fn operation_type(&self) -> &'static str {
        match &self.definition {
            Op::SelectionSet(_) | Op::Query(_) => "query",
            Op::Mutation(_) => "mutation",
            Op::Subscription(_) => "subscription",
        }
    }

    pub fn selection_set(&self) -> &SelectionSet {
        match &self.definition {
            Op::SelectionSet(selection_set) => selection_set,
            Op::Query(query) => &query.selection_set,
            Op::Mutation(mutation) => &mutation.selection_set,
            Op::Subscription(subscription) => &subscription.selection_set,
        }
    }

    pub fn variable_definitions(&self) -> &[VariableDefinition] {
        match &self.definition {
            Op::SelectionSet(_) => &[],
            Op::Query(query) => &query.variable_definitions,
            Op::Mutation(mutation) => &mutation.variable_definitions,
            Op::Subscription(subscription) => &subscription.variable_definitions,
        }
    }

    /// Normalized token text of this definition.
    pub fn source_body(&self) -> &str {
        &self.source_body
    }
}
