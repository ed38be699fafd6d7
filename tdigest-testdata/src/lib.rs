//! tdigest-testdata
//! Synthetic `(mean, count)` streams shared by gr-summary benches and tests.
//! Means are squashed into \[0,1] so shapes are comparable; counts are small
//! positive weights like the ones a digest hands its summary.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Available synthetic mean distributions.
#[derive(Clone, Copy, Debug)]
pub enum PointKind {
    /// Uniform in \[0,1)
    Uniform,
    /// Gaussian mapped to \[0,1]
    Normal,
    /// Only `distinct` different means, so equal-mean runs are long
    Ties { distinct: u32 },
    /// Already ascending; every insert lands at the tail
    Ascending,
    /// Already descending; every insert lands at the head (worst-case shift)
    Descending,
}

/// Generate `n` points for the chosen distribution. Counts are in `1..=max_count`.
pub fn gen_points(kind: PointKind, n: usize, max_count: u64, seed: u64) -> Vec<(f64, u64)> {
    assert!(max_count > 0, "max_count must be > 0");
    let mut rng = StdRng::seed_from_u64(seed);
    let means = gen_means(kind, n, &mut rng);
    means
        .into_iter()
        .map(|m| (m, rng.random_range(1..=max_count)))
        .collect()
}

fn gen_means(kind: PointKind, n: usize, rng: &mut StdRng) -> Vec<f64> {
    let mut out = Vec::with_capacity(n);
    match kind {
        PointKind::Uniform => {
            for _ in 0..n {
                out.push(rng.random::<f64>());
            }
        }
        PointKind::Normal => {
            let normal = Normal::new(0.0, 1.0).unwrap();
            for _ in 0..n {
                let z: f64 = normal.sample(rng);
                out.push((0.5 + 0.2 * z).clamp(0.0, 1.0));
            }
        }
        PointKind::Ties { distinct } => {
            let d = distinct.max(1);
            for _ in 0..n {
                let k = rng.random_range(0..d);
                out.push(f64::from(k) / f64::from(d));
            }
        }
        PointKind::Ascending | PointKind::Descending => {
            let denom = n.max(1) as f64;
            for i in 0..n {
                out.push(i as f64 / denom);
            }
            if matches!(kind, PointKind::Descending) {
                out.reverse();
            }
        }
    }
    out
}
