use ndarray::Array1;
use rand::Rng;

use crate::common::Individual;

/// Draw every gene uniformly from `0..=upper[i]`.
pub fn random_individual<R: Rng + ?Sized>(upper: &Array1<u32>, rng: &mut R) -> Individual {
    upper.mapv(|stock| rng.gen_range(0..=stock))
}

/// Build `size` independent random individuals.
pub fn random_population<R: Rng + ?Sized>(
    upper: &Array1<u32>,
    size: usize,
    rng: &mut R,
) -> Vec<Individual> {
    (0..size).map(|_| random_individual(upper, rng)).collect()
}
