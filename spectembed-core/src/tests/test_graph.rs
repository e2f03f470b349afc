use crate::graph::{build_adjacency, build_degree, euclidean_distance, inverse_sqrt_degree};
use crate::matrix::DenseMatrix;
use crate::tests::{gaussian_blobs, init};
use approx::assert_abs_diff_eq;
use log::debug;

#[test]
fn test_euclidean_distance_known_values() {
    init();
    assert_abs_diff_eq!(
        euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]),
        5.0,
        epsilon = 1e-12
    );
    assert_eq!(euclidean_distance(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
}

#[test]
fn test_adjacency_structural_invariants() {
    init();
    let points = gaussian_blobs(&[vec![0.0, 0.0], vec![3.0, 3.0]], 5, 0.2, 42);
    let adjacency = build_adjacency(&points);
    let n = adjacency.rows();
    assert_eq!(n, 10);

    for i in 0..n {
        // 1. No self loops
        assert_eq!(adjacency.get(i, i), 0.0, "diagonal [{i},{i}] must be zero");
        for j in 0..n {
            if i == j {
                continue;
            }
            // 2. Symmetry
            assert_eq!(
                adjacency.get(i, j),
                adjacency.get(j, i),
                "adjacency must be symmetric at ({i},{j})"
            );
            // 3. Gaussian kernel is strictly positive for finite distances
            assert!(
                adjacency.get(i, j) > 0.0,
                "weight [{i},{j}] must be positive, got {}",
                adjacency.get(i, j)
            );
            // 4. And never exceeds exp(0) = 1
            assert!(
                adjacency.get(i, j) <= 1.0,
                "weight [{i},{j}] must be <= 1, got {}",
                adjacency.get(i, j)
            );
        }
    }
    debug!("✓ adjacency invariants verified for {n}x{n}");
}

#[test]
fn test_collinear_points_weight_ordering() {
    init();
    // Three equally spaced points on a line: adjacent pairs share the same
    // weight, the far pair gets strictly less.
    let points =
        DenseMatrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]]);
    let adjacency = build_adjacency(&points);

    assert_abs_diff_eq!(
        adjacency.get(0, 1),
        adjacency.get(1, 2),
        epsilon = 1e-12
    );
    assert!(
        adjacency.get(0, 1) > adjacency.get(0, 2),
        "closer pair should weigh more: {} > {}",
        adjacency.get(0, 1),
        adjacency.get(0, 2)
    );
    assert_abs_diff_eq!(adjacency.get(0, 1), (-0.5f64).exp(), epsilon = 1e-12);
    assert_abs_diff_eq!(adjacency.get(0, 2), (-1.0f64).exp(), epsilon = 1e-12);
}

#[test]
fn test_coinciding_points_get_unit_weight() {
    init();
    let points = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![1.0, 2.0]]);
    let adjacency = build_adjacency(&points);
    // distinct indices at zero distance: exp(0) = 1, intentional
    assert_eq!(adjacency.get(0, 1), 1.0);
    assert_eq!(adjacency.get(0, 0), 0.0);
}

#[test]
fn test_degree_matrix_row_sums() {
    init();
    let points = gaussian_blobs(&[vec![0.0], vec![2.0]], 4, 0.3, 7);
    let adjacency = build_adjacency(&points);
    let degree = build_degree(&adjacency);
    let n = degree.rows();

    for i in 0..n {
        let row_sum: f64 = adjacency.row(i).iter().sum();
        assert_abs_diff_eq!(degree.get(i, i), row_sum, epsilon = 1e-12);
        for j in 0..n {
            if i != j {
                assert_eq!(
                    degree.get(i, j),
                    0.0,
                    "degree matrix must be diagonal, found [{i},{j}]"
                );
            }
        }
    }
}

#[test]
fn test_inverse_sqrt_degree_values() {
    init();
    let points =
        DenseMatrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]);
    let adjacency = build_adjacency(&points);
    let degree = build_degree(&adjacency);
    let inv_sqrt = inverse_sqrt_degree(&degree);

    for i in 0..3 {
        assert_abs_diff_eq!(
            inv_sqrt.get(i, i),
            1.0 / degree.get(i, i).sqrt(),
            epsilon = 1e-12
        );
        for j in 0..3 {
            if i != j {
                assert_eq!(inv_sqrt.get(i, j), 0.0);
            }
        }
    }
}

#[test]
fn test_isolated_point_propagates_non_finite() {
    init();
    // Two points so far apart the kernel underflows to exactly zero: both
    // degrees are zero and 1/sqrt(0) must flow through as +inf, not be
    // masked.
    let points = DenseMatrix::from_rows(&[vec![0.0], vec![5000.0]]);
    let adjacency = build_adjacency(&points);
    assert_eq!(adjacency.get(0, 1), 0.0, "kernel should underflow to zero");

    let degree = build_degree(&adjacency);
    assert_eq!(degree.get(0, 0), 0.0);

    let inv_sqrt = inverse_sqrt_degree(&degree);
    assert!(
        inv_sqrt.get(0, 0).is_infinite(),
        "zero degree must produce a non-finite scaling, got {}",
        inv_sqrt.get(0, 0)
    );
}
