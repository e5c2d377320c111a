use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use topolife::core::Board;
use topolife::engine::{next_generation, next_generation_direct, Life, LifeConfig};
use topolife::types::Geometry;

fn seeded(rows: usize, cols: usize, geometry: Geometry) -> Life {
    let mut life = Life::new(
        &LifeConfig::new(rows, cols)
            .with_geometry(geometry)
            .with_prob(0.3)
            .with_seed(12345),
    )
    .unwrap();
    life.randomize();
    life
}

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_200x200");
    for geometry in Geometry::ALL {
        let mut life = seeded(200, 200, geometry);
        group.bench_function(BenchmarkId::from_parameter(geometry.as_str()), |b| {
            b.iter(|| life.evolve())
        });
    }
    group.finish();
}

fn bench_rule(c: &mut Criterion) {
    let life = seeded(100, 100, Geometry::Torus);
    let board: &Board = life.board();
    let mut out = Vec::with_capacity(100 * 100);

    c.bench_function("next_generation_kernel", |b| {
        b.iter(|| next_generation(black_box(board), &mut out))
    });
    c.bench_function("next_generation_direct", |b| {
        b.iter(|| next_generation_direct(black_box(board), &mut out))
    });
}

fn bench_randomize(c: &mut Criterion) {
    let mut life = seeded(200, 200, Geometry::KleinBottle);
    c.bench_function("randomize_200x200", |b| b.iter(|| life.randomize()));
}

fn bench_toggle(c: &mut Criterion) {
    let mut life = seeded(200, 200, Geometry::ProjectivePlane);
    c.bench_function("toggle_cell_with_sync", |b| {
        b.iter(|| life.toggle_cell(black_box(100), black_box(100)))
    });
}

criterion_group!(benches, bench_evolve, bench_rule, bench_randomize, bench_toggle);
criterion_main!(benches);
