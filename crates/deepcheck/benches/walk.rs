// Walker and combinator throughput
// Run with: cargo bench --bench walk

use std::collections::BTreeMap;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use deepcheck::prelude::*;

struct Port(u16);

impl Validatable for Port {
    fn validate(&self) -> Result<(), ValidationError> {
        gte(1024).validate(&self.0)
    }
}

impl Walkable for Port {
    fn node(&self) -> Node<'_> {
        Node::Scalar
    }

    fn validatable(&self) -> Option<&dyn Validatable> {
        Some(self)
    }
}

struct Service {
    name: String,
    ports: Vec<Port>,
    labels: BTreeMap<String, String>,
    fallback: Option<Box<Service>>,
}

impl Walkable for Service {
    fn node(&self) -> Node<'_> {
        Node::Record(vec![
            Member::public("name", &self.name),
            Member::public("ports", &self.ports),
            Member::public("labels", &self.labels),
            Member::public("fallback", &self.fallback),
        ])
    }
}

fn service(ports: u16, depth: usize) -> Service {
    Service {
        name: format!("svc-{depth}"),
        ports: (0..ports).map(|i| Port(2000 + i)).collect(),
        labels: (0..4).map(|i| (format!("k{i}"), format!("v{i}"))).collect(),
        fallback: (depth > 0).then(|| Box::new(service(ports, depth - 1))),
    }
}

/// Full walk over records, sequences, maps and references
fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for ports in [8_u16, 64, 512] {
        let root = service(ports, 4);
        group.bench_with_input(BenchmarkId::from_parameter(ports), &root, |b, root| {
            b.iter(|| black_box(walk(black_box(root))));
        });
    }

    group.finish();
}

/// Depth accounting overhead
fn bench_walk_with_limit(c: &mut Criterion) {
    let root = service(64, 4);
    let walker = Walker::new().with_max_depth(32);

    c.bench_function("walk_with_max_depth", |b| {
        b.iter(|| black_box(walker.walk(black_box(&root))));
    });
}

/// Composed validators on the hot path
fn bench_combinators(c: &mut Criterion) {
    let username = deepcheck::all![len::<str, _>(gte(3)), not(contains(" ")), starts_with("u_")];
    let outlier = deepcheck::any![lt(-100), gt(100), eq(0)];

    c.bench_function("all_chain_str", |b| {
        b.iter(|| black_box(username.validate(black_box("u_alice"))));
    });

    c.bench_function("any_chain_reports_last", |b| {
        b.iter(|| black_box(outlier.validate(black_box(&7))));
    });
}

criterion_group!(benches, bench_walk, bench_walk_with_limit, bench_combinators);
criterion_main!(benches);
