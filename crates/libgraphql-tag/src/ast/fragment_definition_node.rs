use crate::ast::AstNodeKind;
use crate::ast::Directive;
use crate::ast::FragmentDefinition;
use crate::ast::GraphQLParserDefinition;
use crate::ast::GraphQLParserDocument;
use crate::ast::SelectionSet;
use crate::ast::TypeCondition;
use crate::ast::VariableDefinition;

/// A fragment definition together with the bookkeeping the document cache
/// needs: its normalized source body (which, with the name, identifies the
/// fragment structurally) and any experimental fragment variables.
#[derive(Debug, PartialEq)]
pub struct FragmentDefinitionNode {
    definition: FragmentDefinition,
    source_body: String,
    variables: Option<FragmentVariables>,
}

/// Variable definitions declared on a fragment under the experimental
/// fragment variables syntax (`fragment F($id: ID!) on T { .. }`).
#[derive(Debug, PartialEq)]
pub(crate) struct FragmentVariables {
    pub(crate) definitions: Vec<VariableDefinition>,
    /// Source text of the parenthesized group, or `None` when the fragment
    /// declared no group.
    pub(crate) source: Option<String>,
}

impl FragmentDefinitionNode {
    pub(crate) fn new(
        definition: FragmentDefinition,
        source_body: String,
        variables: Option<FragmentVariables>,
    ) -> Self {
        Self {
            definition,
            source_body,
            variables,
        }
    }

    pub fn kind(&self) -> AstNodeKind {
        AstNodeKind::FragmentDefinition
    }

    /// The underlying `graphql_parser` fragment definition.
    pub fn definition(&self) -> &FragmentDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// The name of the type this fragment applies to.
    pub fn type_condition(&self) -> &str {
        let TypeCondition::On(type_name) = &self.definition.type_condition;
        type_name
    }

    pub fn directives(&self) -> &[Directive] {
        &self.definition.directives
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.definition.selection_set
    }

    /// Variable definitions declared on this fragment.
    ///
    /// `None` unless experimental fragment variables were enabled when the
    /// fragment was parsed; `Some` (possibly empty) otherwise.
    pub fn variable_definitions(&self) -> Option<&[VariableDefinition]> {
        self.variables
            .as_ref()
            .map(|variables| variables.definitions.as_slice())
    }

    /// Normalized token text of this definition. Two fragments with the same
    /// name and the same source body are structurally identical.
    pub fn source_body(&self) -> &str {
        &self.source_body
    }

    /// Prints this fragment using `graphql_parser`'s formatter, re-inserting
    /// any experimental variable group after the fragment name.
    pub(crate) fn to_graphql_string(&self) -> String {
        let printed = GraphQLParserDocument {
            definitions: vec![
                GraphQLParserDefinition::Fragment(self.definition.clone()),
            ],
        }.to_string();

        match self.variables.as_ref().and_then(|vars| vars.source.as_deref()) {
            Some(variable_source) => {
                let prefix = format!("fragment {} ", self.name());
                printed.replacen(
                    &prefix,
                    &format!("fragment {}{variable_source} ", self.name()),
                    1,
                )
            },
            None => printed,
        }
    }
}
