use crate::ast::Definition;
use crate::tests::utils::engine_collecting_warnings;
use crate::tests::utils::fragment_names;
use crate::tests::utils::warning_count;
use crate::GraphQLTagConfig;
use crate::GraphQLTagEngine;
use crate::GraphQLTagParseError;
use crate::RawSource;
use crate::SubstitutionValue;
use std::sync::Arc;

// =============================================================================
// Caching
// =============================================================================

#[test]
fn same_text_returns_the_same_instance() {
    let mut engine = GraphQLTagEngine::new();
    let first = engine.gql("{ a }").unwrap();
    let second = engine.gql("{ a }").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(engine.cached_document_count(), 1);
}

#[test]
fn formatting_differences_share_an_instance() {
    let mut engine = GraphQLTagEngine::new();
    let first = engine.gql("{ a }").unwrap();
    let second = engine.gql("  { a,  }").unwrap();
    let third = engine.gql("# comment\n{\n  a\n}\n").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
}

#[test]
fn different_text_yields_different_instances() {
    let mut engine = GraphQLTagEngine::new();
    let a = engine.gql("{ a }").unwrap();
    let b = engine.gql("{ b }").unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(engine.cached_document_count(), 2);
}

#[test]
fn engines_do_not_share_caches() {
    let mut first_engine = GraphQLTagEngine::new();
    let mut second_engine = GraphQLTagEngine::new();
    let first = first_engine.gql("{ a }").unwrap();
    let second = second_engine.gql("{ a }").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn syntax_errors_are_not_cached() {
    let mut engine = GraphQLTagEngine::new();
    let err = engine.gql("query { a").unwrap_err();
    assert!(matches!(err, GraphQLTagParseError::Syntax { .. }));
    assert_eq!(engine.cached_document_count(), 0);
    assert!(engine.registered_fragment_names().is_empty());

    assert!(engine.gql("query { a").is_err());
}

#[test]
fn failed_parse_does_not_register_fragments() {
    let mut engine = GraphQLTagEngine::new();
    assert!(engine.gql("fragment F on T { f } query {").is_err());
    assert!(engine.registered_fragment_names().is_empty());
}

#[test]
fn reset_yields_new_instances() {
    let mut engine = GraphQLTagEngine::new();
    let before = engine.gql("{ a }").unwrap();
    engine.reset_caches();
    assert_eq!(engine.cached_document_count(), 0);

    let after = engine.gql("{ a }").unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
}

// =============================================================================
// Embedding and deduplication
// =============================================================================

#[test]
fn embedded_fragment_definitions_follow_primary_definitions() {
    let mut engine = GraphQLTagEngine::new();
    let fragment = engine.gql("fragment UserFields on User { id name }").unwrap();
    let query = engine.parse_cached(
        RawSource::new()
            .literal("query { user { ...UserFields } }\n")
            .substitute(&fragment),
    ).unwrap();

    let kinds: Vec<_> = query.definitions().iter().map(Definition::kind).collect();
    assert_eq!(kinds, vec!["OperationDefinition", "FragmentDefinition"]);
    assert_eq!(
        query.source(),
        "query { user { ...UserFields } }\nfragment UserFields on User { id name }",
    );
}

#[test]
fn embedded_fragments_keep_their_identity_across_queries() {
    let mut engine = GraphQLTagEngine::new();
    let fragment = engine.gql("fragment F on T { f }").unwrap();
    let first = engine.parse_cached(
        RawSource::new().literal("query A { ...F } ").substitute(&fragment),
    ).unwrap();
    let second = engine.parse_cached(
        RawSource::new().literal("query B { t { ...F } } ").substitute(&fragment),
    ).unwrap();

    let original = fragment.fragment("F").unwrap();
    assert!(Arc::ptr_eq(first.fragment("F").unwrap(), original));
    assert!(Arc::ptr_eq(second.fragment("F").unwrap(), original));
}

#[test]
fn reparsed_identical_fragment_reuses_the_registered_instance() {
    let (mut engine, warnings) = engine_collecting_warnings();
    let query = engine.gql("query { ...F }\nfragment F on T { f }").unwrap();
    let fragment = engine.gql("fragment F on T {\n  f\n}\n# same fragment").unwrap();

    assert!(!Arc::ptr_eq(&query, &fragment));
    assert!(Arc::ptr_eq(
        query.fragment("F").unwrap(),
        fragment.fragment("F").unwrap(),
    ));
    assert_eq!(warning_count(&warnings), 0);
}

#[test]
fn same_document_embedded_twice_is_kept_once() {
    let mut engine = GraphQLTagEngine::new();
    let fragment = engine.gql("fragment F on T { f }").unwrap();
    let query = engine.parse_cached(
        RawSource::from_parts(
            ["query { ...F } ", " ", ""],
            [&fragment, &fragment],
        ),
    ).unwrap();

    assert_eq!(fragment_names(&query), vec!["F"]);
    assert_eq!(query.definitions().len(), 2);
}

#[test]
fn fragment_duplicated_in_literal_text_is_kept_once() {
    let mut engine = GraphQLTagEngine::new();
    let document = engine.gql(
        "fragment F on T { f }\nquery { ...F }\nfragment F on T { f }",
    ).unwrap();
    assert_eq!(fragment_names(&document), vec!["F"]);
    assert_eq!(document.definitions().len(), 2);
}

#[test]
fn transitive_embedding_keeps_one_copy_of_each_fragment() {
    let mut engine = GraphQLTagEngine::new();
    let a = engine.gql("fragment A on T { a }").unwrap();
    let b = engine.parse_cached(
        RawSource::new()
            .literal("fragment B on T { b ...A }\n")
            .substitute(&a),
    ).unwrap();
    let query = engine.parse_cached(
        RawSource::new()
            .literal("query { ...A ...B }\n")
            .substitute(&a)
            .substitute(&b),
    ).unwrap();

    assert_eq!(fragment_names(&b), vec!["B", "A"]);
    assert_eq!(fragment_names(&query), vec!["A", "B"]);
    assert!(Arc::ptr_eq(query.fragment("A").unwrap(), a.fragment("A").unwrap()));
    assert!(Arc::ptr_eq(query.fragment("B").unwrap(), b.fragment("B").unwrap()));
}

#[test]
fn document_made_only_of_embeddings() {
    let mut engine = GraphQLTagEngine::new();
    let a = engine.gql("fragment A on T { a }").unwrap();
    let b = engine.gql("fragment B on T { b }").unwrap();
    let both = engine.parse_cached(
        RawSource::from_parts(["", "\n", "  "], [&a, &b]),
    ).unwrap();

    assert_eq!(fragment_names(&both), vec!["A", "B"]);
}

#[test]
fn empty_source_is_a_syntax_error() {
    let mut engine = GraphQLTagEngine::new();
    assert!(engine.gql("   ").unwrap_err().is_syntax_error());
}

#[test]
fn weird_substitutions_parse() {
    let mut engine = GraphQLTagEngine::new();
    let missing: Option<&str> = None;

    let with_null = engine.parse_cached(
        RawSource::new()
            .literal("query { field(input: \"")
            .substitute(SubstitutionValue::Null)
            .literal("\") }"),
    ).unwrap();
    let with_missing = engine.parse_cached(
        RawSource::from_parts(["query { field(input: \"", "\") }"], [missing]),
    ).unwrap();
    let with_zero = engine.parse_cached(
        RawSource::from_parts(["query { field(input: \"", "\") }"], [0]),
    ).unwrap();

    assert!(Arc::ptr_eq(&with_null, &with_missing));
    assert!(!Arc::ptr_eq(&with_null, &with_zero));
    assert_eq!(with_zero.source(), "query { field(input: \"0\") }");
}

// =============================================================================
// Duplicate fragment name warnings
// =============================================================================

#[test]
fn colliding_fragment_names_warn_once() {
    let (mut engine, warnings) = engine_collecting_warnings();
    let x = engine.gql("fragment T on Bar { x }").unwrap();
    let y = engine.gql("fragment T on Bar { y }").unwrap();

    assert!(!Arc::ptr_eq(&x, &y));
    assert!(!Arc::ptr_eq(x.fragment("T").unwrap(), y.fragment("T").unwrap()));

    {
        let warnings = warnings.lock().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].fragment_name, "T");
        assert_eq!(warnings[0].first_body, "fragment T on Bar { x }");
        assert_eq!(warnings[0].new_body, "fragment T on Bar { y }");
        assert!(warnings[0].to_string().contains("`T`"));
    }

    // Both remain retrievable as distinct cached documents.
    assert!(Arc::ptr_eq(&engine.gql("fragment T on Bar { x }").unwrap(), &x));
    assert!(Arc::ptr_eq(&engine.gql("fragment T on Bar { y }").unwrap(), &y));
    assert_eq!(warning_count(&warnings), 1);
}

#[test]
fn identical_fragments_do_not_warn() {
    let (mut engine, warnings) = engine_collecting_warnings();
    let first = engine.gql("fragment T on Bar { x }").unwrap();
    let second = engine.gql("query { ...T } fragment T on Bar { x }").unwrap();

    assert_eq!(warning_count(&warnings), 0);
    assert!(Arc::ptr_eq(
        first.fragment("T").unwrap(),
        second.fragment("T").unwrap(),
    ));
}

#[test]
fn colliding_body_seen_again_does_not_warn_again() {
    let (mut engine, warnings) = engine_collecting_warnings();
    engine.gql("fragment T on Bar { x }").unwrap();
    let y = engine.gql("fragment T on Bar { y }").unwrap();
    let query = engine.gql("query { ...T }\nfragment T on Bar { y }").unwrap();

    assert_eq!(warning_count(&warnings), 1);
    assert!(Arc::ptr_eq(query.fragment("T").unwrap(), y.fragment("T").unwrap()));
}

#[test]
fn collision_within_one_source_warns() {
    let (mut engine, warnings) = engine_collecting_warnings();
    let document = engine.gql(
        "fragment T on Bar { x }\nfragment T on Bar { y }",
    ).unwrap();

    assert_eq!(fragment_names(&document), vec!["T", "T"]);
    assert_eq!(warning_count(&warnings), 1);
}

#[test]
fn disabled_warnings_are_not_emitted() {
    let (mut engine, warnings) = engine_collecting_warnings();
    engine.disable_fragment_warnings();
    engine.gql("fragment T on Bar { x }").unwrap();
    engine.gql("fragment T on Bar { y }").unwrap();
    assert_eq!(warning_count(&warnings), 0);

    engine.enable_fragment_warnings();
    engine.gql("fragment T on Bar { z }").unwrap();
    assert_eq!(warning_count(&warnings), 1);
}

#[test]
fn reset_forgets_colliding_names() {
    let (mut engine, warnings) = engine_collecting_warnings();
    engine.gql("fragment T on Bar { x }").unwrap();
    engine.reset_caches();
    assert!(engine.registered_fragment_names().is_empty());

    engine.gql("fragment T on Bar { y }").unwrap();
    assert_eq!(warning_count(&warnings), 0);
    assert_eq!(engine.registered_fragment_names(), vec!["T".to_string()]);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn default_config() {
    let engine = GraphQLTagEngine::default();
    assert_eq!(engine.config(), &GraphQLTagConfig::default());
    assert!(engine.config().fragment_warnings_enabled);
    assert!(!engine.config().experimental_fragment_variables);
}

#[test]
fn fragment_variables_toggle() {
    let text = "fragment A($arg: String!) on Type { f }";
    let mut engine = GraphQLTagEngine::new();
    assert!(engine.gql(text).unwrap_err().is_syntax_error());

    engine.enable_experimental_fragment_variables();
    let document = engine.gql(text).unwrap();
    let variables = document.fragment("A").unwrap().variable_definitions().unwrap();
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].name, "arg");

    engine.disable_experimental_fragment_variables();
    assert!(!engine.config().experimental_fragment_variables);
    assert!(engine.gql("fragment B($arg: String!) on Type { f }").is_err());
}

#[test]
fn with_config_applies_toggles() {
    let mut engine = GraphQLTagEngine::with_config(GraphQLTagConfig {
        fragment_warnings_enabled: false,
        experimental_fragment_variables: true,
    });
    assert!(engine.gql("fragment A($x: Int) on T { f }").is_ok());
}

#[test]
fn reset_keeps_config() {
    let mut engine = GraphQLTagEngine::new();
    engine.enable_experimental_fragment_variables();
    engine.disable_fragment_warnings();
    engine.reset_caches();
    assert_eq!(
        engine.config(),
        &GraphQLTagConfig {
            fragment_warnings_enabled: false,
            experimental_fragment_variables: true,
        },
    );
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn parse_cached_file_shares_the_text_cache() {
    let path = std::env::temp_dir().join(format!(
        "libgraphql-tag-engine-{}.graphql",
        std::process::id(),
    ));
    std::fs::write(&path, "query Q {\n  a\n}\n").unwrap();

    let mut engine = GraphQLTagEngine::new();
    let from_file = engine.parse_cached_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let from_text = engine.gql("query Q { a }").unwrap();
    assert!(Arc::ptr_eq(&from_file, &from_text));
}

#[test]
fn parse_cached_file_reports_read_errors() {
    let mut engine = GraphQLTagEngine::new();
    let err = engine.parse_cached_file(std::env::temp_dir()).unwrap_err();
    assert!(matches!(err, GraphQLTagParseError::FileRead(_)));
    assert!(!err.is_syntax_error());
}
