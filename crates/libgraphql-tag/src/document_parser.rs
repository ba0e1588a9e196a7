//! Adapter over [`graphql_parser`]'s executable-document grammar.
//!
//! `graphql_parser` does not know the experimental fragment variables syntax
//! (`fragment F($id: ID!) on T { .. }`). When that syntax is enabled, each
//! top-level fragment's parenthesized variable group is located with the
//! lexer, parsed on its own as variable definitions, and blanked out of the
//! text handed to the grammar. Blanking keeps every line terminator, so
//! line/column positions in the remaining AST still match the input.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::FragmentDefinitionNode;
use crate::ast::FragmentVariables;
use crate::ast::GraphQLParserDefinition;
use crate::ast::GraphQLParserDocument;
use crate::ast::OperationDefinitionNode;
use crate::ast::VariableDefinition;
use crate::source_normalizer;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLTagParseError;
use graphql_parser::query::OperationDefinition;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, GraphQLTagParseError>;

/// Options forwarded to every parse.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Accept a parenthesized variable definition list after a fragment's
    /// name.
    pub experimental_fragment_variables: bool,
}

/// Parses `text` as a GraphQL executable document.
///
/// Every definition in the returned document is a fresh node instance. This
/// function neither caches nor deduplicates; see
/// [`GraphQLTagEngine`](crate::GraphQLTagEngine) for that.
pub fn parse(text: &str, options: ParseOptions) -> Result<Document> {
    let (grammar_text, mut fragment_variables) =
        if options.experimental_fragment_variables {
            extract_fragment_variables(text)?
        } else {
            (Cow::Borrowed(text), HashMap::new())
        };

    let ast = graphql_parser::query::parse_query::<String>(&grammar_text)?
        .into_static();

    let source_bodies = source_normalizer::split_definitions(text);
    let bodies_align = source_bodies.len() == ast.definitions.len();
    let mut source_bodies = source_bodies.into_iter();

    let definitions: Vec<Definition> = ast.definitions
        .into_iter()
        .enumerate()
        .map(|(def_idx, definition)| {
            let source_body = source_bodies.next()
                .filter(|_| bodies_align)
                .unwrap_or_else(|| printed_source_body(&definition));

            match definition {
                GraphQLParserDefinition::Operation(operation) => {
                    Definition::Operation(Arc::new(
                        OperationDefinitionNode::new(operation, source_body),
                    ))
                },

                GraphQLParserDefinition::Fragment(fragment) => {
                    let variables = options.experimental_fragment_variables
                        .then(|| {
                            fragment_variables.remove(&def_idx).unwrap_or(
                                FragmentVariables {
                                    definitions: vec![],
                                    source: None,
                                },
                            )
                        });
                    Definition::Fragment(Arc::new(
                        FragmentDefinitionNode::new(fragment, source_body, variables),
                    ))
                },
            }
        })
        .collect();

    log::trace!("Parsed a GraphQL document with {} definitions.", definitions.len());
    Ok(Document::new(definitions, text.to_string()))
}

fn printed_source_body(definition: &GraphQLParserDefinition) -> String {
    let printed = GraphQLParserDocument {
        definitions: vec![definition.clone()],
    }.to_string();
    source_normalizer::normalize(&printed).into_string()
}

/// A `fragment <Name> ( ... )` variable group found at the top level of a
/// document.
struct VariableGroup {
    def_idx: usize,
    fragment_name: String,
    open_idx: usize,
    close_idx: usize,
}

/// Lifts experimental fragment variable groups out of `text`.
///
/// Returns the text to hand to the grammar (groups blanked out) and the
/// parsed variables of each affected fragment, keyed by the index of its
/// top-level definition.
fn extract_fragment_variables(
    text: &str,
) -> Result<(Cow<'_, str>, HashMap<usize, FragmentVariables>)> {
    let tokens: Vec<GraphQLToken<'_>> = StrGraphQLTokenSource::new(text).collect();
    let groups = find_variable_groups(&tokens);
    if groups.is_empty() {
        return Ok((Cow::Borrowed(text), HashMap::new()));
    }

    let mut grammar_text = String::with_capacity(text.len());
    let mut copied_up_to = 0;
    let mut fragment_variables = HashMap::new();

    for group in groups {
        let open = &tokens[group.open_idx];
        let close = &tokens[group.close_idx];
        let group_start = open.span.start_inclusive.byte_offset();
        let group_end = close.span.end_exclusive.byte_offset();
        let inner = &text[open.span.end_exclusive.byte_offset()
            ..close.span.start_inclusive.byte_offset()];

        let definitions = parse_variable_definitions(
            inner,
            &group.fragment_name,
            open,
        )?;

        grammar_text.push_str(&text[copied_up_to..group_start]);
        grammar_text.extend(text[group_start..group_end].chars().map(|ch| {
            if ch == '\n' || ch == '\r' { ch } else { ' ' }
        }));
        copied_up_to = group_end;

        fragment_variables.insert(group.def_idx, FragmentVariables {
            definitions,
            source: Some(text[group_start..group_end].to_string()),
        });
    }
    grammar_text.push_str(&text[copied_up_to..]);

    Ok((Cow::Owned(grammar_text), fragment_variables))
}

fn find_variable_groups(tokens: &[GraphQLToken<'_>]) -> Vec<VariableGroup> {
    let mut groups = vec![];
    let mut depth: isize = 0;
    let mut def_idx = 0;
    let mut idx = 0;

    while idx < tokens.len() {
        let kind = &tokens[idx].kind;

        if depth == 0
            && kind.is_name("fragment")
            && let Some(GraphQLTokenKind::Name(fragment_name)) =
                tokens.get(idx + 1).map(|token| &token.kind)
            && tokens.get(idx + 2)
                .is_some_and(|token| token.kind == GraphQLTokenKind::ParenOpen)
            && let Some(close_idx) = find_matching_close(tokens, idx + 2)
        {
            groups.push(VariableGroup {
                def_idx,
                fragment_name: fragment_name.to_string(),
                open_idx: idx + 2,
                close_idx,
            });
            idx = close_idx + 1;
            continue;
        }

        depth += kind.nesting_delta();
        if *kind == GraphQLTokenKind::CurlyBraceClose && depth <= 0 {
            def_idx += 1;
            depth = 0;
        }
        idx += 1;
    }

    groups
}

fn find_matching_close(tokens: &[GraphQLToken<'_>], open_idx: usize) -> Option<usize> {
    let mut depth: isize = 0;
    for (idx, token) in tokens.iter().enumerate().skip(open_idx) {
        depth += token.kind.nesting_delta();
        if depth == 0 {
            return Some(idx);
        }
        if token.kind == GraphQLTokenKind::Eof {
            return None;
        }
    }
    None
}

/// Parses the inside of a fragment's variable group by handing the grammar
/// an equivalent operation variable list.
fn parse_variable_definitions(
    inner: &str,
    fragment_name: &str,
    open_paren: &GraphQLToken<'_>,
) -> Result<Vec<VariableDefinition>> {
    let pos = open_paren.span.start_inclusive.to_ast_pos();
    let invalid = |detail: String| GraphQLTagParseError::syntax(format!(
        "Invalid variable definitions on fragment `{fragment_name}` at \
        {}:{}: {detail}",
        pos.line,
        pos.column,
    ));

    let synthetic = format!("query({inner}) {{ __typename }}");
    let parsed = graphql_parser::query::parse_query::<String>(&synthetic)
        .map_err(|err| invalid(err.to_string()))?
        .into_static();

    let mut definitions = parsed.definitions.into_iter();
    match (definitions.next(), definitions.next()) {
        (Some(GraphQLParserDefinition::Operation(OperationDefinition::Query(query))), None) => {
            Ok(query.variable_definitions)
        },
        _ => Err(invalid("expected a list of variable definitions".to_string())),
    }
}
