use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_tag::GraphQLTagEngine;
use libgraphql_tag::RawSource;

const USER_FRAGMENT: &str = r#"
fragment UserFields on User {
  id
  name
  avatar(size: 64) { url width height }
}
"#;

fn query_text(field_count: usize) -> String {
    let mut text = String::from("query Feed($first: Int = 10) {\n  feed(first: $first) {\n");
    for idx in 0..field_count {
        text.push_str(&format!("    field{idx}(arg: \"value, {idx}\") {{ id ...UserFields }}\n"));
    }
    text.push_str("  }\n}\n");
    text
}

// ─── Group 1: Normalization ──────────────────────────────

fn normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for field_count in [1, 16, 256] {
        let text = query_text(field_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(field_count),
            &text,
            |b, text| b.iter(|| black_box(libgraphql_tag::normalize(text))),
        );
    }
    group.finish();
}

// ─── Group 2: Cache hits vs. misses ──────────────────────

fn parse_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_cached");
    for field_count in [1, 16, 256] {
        let text = query_text(field_count);

        group.bench_with_input(
            BenchmarkId::new("hit", field_count),
            &text,
            |b, text| {
                let mut engine = GraphQLTagEngine::new();
                let fragment = engine.gql(USER_FRAGMENT).unwrap();
                b.iter(|| {
                    black_box(engine.parse_cached(
                        RawSource::new().literal(text.as_str()).substitute(&fragment),
                    ))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("miss", field_count),
            &text,
            |b, text| {
                let mut engine = GraphQLTagEngine::new();
                let fragment = engine.gql(USER_FRAGMENT).unwrap();
                b.iter(|| {
                    let document = engine.parse_cached(
                        RawSource::new().literal(text.as_str()).substitute(&fragment),
                    );
                    engine.reset_caches();
                    black_box(document)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, normalization, parse_cached);
criterion_main!(benches);
