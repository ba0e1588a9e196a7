//! AST node types produced by the document cache.
//!
//! Definition bodies reuse [`graphql_parser`]'s owned (`'static`, `String`)
//! query AST. The wrappers here add the node `kind` discriminators, the
//! normalized source body used for fragment identity, and the experimental
//! fragment variable definitions that `graphql_parser` has no slot for.

mod ast_node_kind;
mod definition;
mod document;
mod fragment_definition_node;
mod operation_definition_node;

pub use ast_node_kind::AstNodeKind;
pub use definition::Definition;
pub use document::Document;
pub use fragment_definition_node::FragmentDefinitionNode;
pub(crate) use fragment_definition_node::FragmentVariables;
pub use operation_definition_node::OperationDefinitionNode;

pub type Directive = graphql_parser::query::Directive<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type GraphQLParserDefinition = graphql_parser::query::Definition<'static, String>;
pub type GraphQLParserDocument = graphql_parser::query::Document<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;
