mod graphql_tag_engine_tests;
mod utils;
