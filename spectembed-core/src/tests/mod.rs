mod test_graph;

use crate::matrix::DenseMatrix;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Initialize logging for tests.
pub fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Points sampled around the given centers with Gaussian noise.
pub fn gaussian_blobs(
    centers: &[Vec<f64>],
    per_center: usize,
    noise: f64,
    seed: u64,
) -> DenseMatrix {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, noise).unwrap();
    let d = centers[0].len();
    let mut data = Vec::with_capacity(centers.len() * per_center * d);
    for center in centers {
        for _ in 0..per_center {
            for &coord in center {
                data.push(coord + normal.sample(&mut rng));
            }
        }
    }
    DenseMatrix::from_vec(data, centers.len() * per_center, d)
}

/// Random symmetric matrix with entries in (-1, 1).
pub fn random_symmetric(n: usize, seed: u64) -> DenseMatrix {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut m = DenseMatrix::zeros(n, n);
    for i in 0..n {
        for j in i..n {
            let v = rng.random_range(-1.0..1.0);
            m.set(i, j, v);
            m.set(j, i, v);
        }
    }
    m
}
