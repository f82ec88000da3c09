//! Criterion comparison of loop vs apply on fixed matrices.

use colstat::matrix::{MatrixGenerator, ValueRange};
use colstat::{Method, Statistic, compute};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_statistic(c: &mut Criterion, statistic: Statistic) {
    let mut group = c.benchmark_group(format!("column_{}", statistic));
    let mut generator = MatrixGenerator::new(ValueRange::default(), Some(42)).unwrap();

    for rows in [2, 100, 1000] {
        let matrix = generator.generate(rows, 1000).unwrap();

        for method in Method::ALL {
            group.bench_with_input(
                BenchmarkId::new(method.to_string(), matrix.cell_count()),
                &matrix,
                |b, m| b.iter(|| compute(black_box(m), statistic, method)),
            );
        }
    }

    group.finish();
}

fn bench_simple(c: &mut Criterion) {
    bench_statistic(c, Statistic::Simple);
}

fn bench_complex(c: &mut Criterion) {
    bench_statistic(c, Statistic::Complex);
}

criterion_group!(benches, bench_simple, bench_complex);
criterion_main!(benches);
