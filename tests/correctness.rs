use colstat::matrix::{MatrixGenerator, ValueRange};
use colstat::statistic::mean::{column_means_apply, column_means_loop};
use colstat::statistic::smallest::{
    SMALLEST_COUNT, column_smallest_mean_apply, column_smallest_mean_loop,
};
use colstat::{Matrix, Method, Statistic, compute};
use proptest::prelude::*;

fn assert_vectors_equal(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            (expected[i] - actual[i]).abs() < 1e-9,
            "{}: mismatch at column {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

fn seeded(rows: usize, cols: usize, seed: u64) -> Matrix {
    let mut generator = MatrixGenerator::new(ValueRange::default(), Some(seed)).unwrap();
    generator.generate(rows, cols).unwrap()
}

// ============================================================
// Published scenarios: 2x1000 and 1000x1000
// ============================================================

#[test]
fn test_2x1000_simple() {
    let m = seeded(2, 1000, 1);
    assert_eq!(m.cell_count(), 2000);

    let looped = compute(&m, Statistic::Simple, Method::Loop);
    let applied = compute(&m, Statistic::Simple, Method::Apply);

    assert_eq!(looped.len(), 1000);
    assert_eq!(applied.len(), 1000);
    assert_vectors_equal(&looped, &applied, "2x1000 simple");

    for j in 0..1000 {
        let expected = (m.get(0, j) + m.get(1, j)) / 2.0;
        assert!((looped[j] - expected).abs() < 1e-12);
    }
}

#[test]
fn test_1000x1000_complex() {
    let m = seeded(1000, 1000, 2);
    assert_eq!(m.cell_count(), 1_000_000);

    let looped = compute(&m, Statistic::Complex, Method::Loop);
    let applied = compute(&m, Statistic::Complex, Method::Apply);

    assert_eq!(looped.len(), 1000);
    assert_eq!(applied.len(), 1000);
    assert_vectors_equal(&looped, &applied, "1000x1000 complex");

    for j in 0..1000 {
        let mut column = m.column(j).to_vec();
        column.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected = column[..6].iter().sum::<f64>() / 6.0;
        assert!(
            (looped[j] - expected).abs() < 1e-9,
            "column {}: expected {}, got {}",
            j,
            expected,
            looped[j]
        );
    }
}

// ============================================================
// Shape edge cases
// ============================================================

#[test]
fn test_odd_shapes_agree() {
    let shapes = [(1, 1), (1, 7), (5, 1), (5, 5), (6, 3), (7, 11), (13, 17)];

    for (rows, cols) in shapes {
        let m = seeded(rows, cols, (rows * 31 + cols) as u64);

        assert_vectors_equal(
            &column_means_loop(&m),
            &column_means_apply(&m),
            &format!("mean_{}x{}", rows, cols),
        );
        assert_vectors_equal(
            &column_smallest_mean_loop(&m),
            &column_smallest_mean_apply(&m),
            &format!("smallest_{}x{}", rows, cols),
        );
    }
}

#[test]
fn test_smallest_bounded_by_column_mean() {
    // The six smallest values can't average above the full column.
    let m = seeded(40, 25, 9);
    let means = column_means_apply(&m);
    let smallest = column_smallest_mean_apply(&m);

    for j in 0..m.cols() {
        assert!(smallest[j] <= means[j] + 1e-12);
    }
}

#[test]
fn test_constant_columns() {
    let m = Matrix::from_columns(10, 3, [vec![2.5; 10], vec![0.11; 10], vec![10.0; 10]].concat())
        .unwrap();

    assert_vectors_equal(&column_means_loop(&m), &[2.5, 0.11, 10.0], "constant mean");
    assert_vectors_equal(&column_smallest_mean_loop(&m), &[2.5, 0.11, 10.0], "constant smallest");
}

#[test]
fn test_generated_values_in_bounds() {
    for seed in [0, 1, 99, 12345] {
        let m = seeded(100, 100, seed);
        assert!(
            m.as_slice().iter().all(|v| (0.11..=10.0).contains(v)),
            "seed {} produced an out-of-range value",
            seed
        );
    }
}

// ============================================================
// Property tests: loop and apply must agree
// ============================================================

proptest! {
    #[test]
    fn prop_means_agree(rows in 1usize..40, cols in 1usize..40, seed in any::<u64>()) {
        let m = seeded(rows, cols, seed);
        let looped = column_means_loop(&m);
        let applied = column_means_apply(&m);

        prop_assert_eq!(looped.len(), cols);
        for (a, b) in looped.iter().zip(&applied) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_smallest_agree(rows in 1usize..40, cols in 1usize..40, seed in any::<u64>()) {
        let m = seeded(rows, cols, seed);
        let looped = column_smallest_mean_loop(&m);
        let applied = column_smallest_mean_apply(&m);

        prop_assert_eq!(applied.len(), cols);
        for (a, b) in looped.iter().zip(&applied) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_smallest_from_arbitrary_columns(
        column in proptest::collection::vec(-1e6f64..1e6, 1..64)
    ) {
        let m = Matrix::from_columns(column.len(), 1, column.clone()).unwrap();

        let mut sorted = column;
        sorted.sort_by(f64::total_cmp);
        let take = SMALLEST_COUNT.min(sorted.len());
        let expected = sorted[..take].iter().sum::<f64>() / take as f64;

        let looped = column_smallest_mean_loop(&m)[0];
        let applied = column_smallest_mean_apply(&m)[0];
        prop_assert!((looped - expected).abs() < 1e-6);
        prop_assert!((applied - expected).abs() < 1e-6);
    }
}
