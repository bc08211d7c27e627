use rand::seq::index;
use rand::Rng;

use crate::common::{Individual, SelectionStrategy};

/// Pick one parent with `strategy` and return an owned copy of it.
pub fn select<R: Rng + ?Sized>(
    strategy: SelectionStrategy,
    population: &[Individual],
    fitness: &[f64],
    rng: &mut R,
) -> Individual {
    match strategy {
        SelectionStrategy::Tournament { k } => tournament(population, fitness, k, rng),
        SelectionStrategy::Roulette => roulette(population, fitness, rng),
    }
}

/// Best of `k` distinct uniformly sampled individuals.
///
/// Ties keep the first maximum in sampling order. `k` is clamped to the
/// population size; the solver rejects larger values up front.
pub fn tournament<R: Rng + ?Sized>(
    population: &[Individual],
    fitness: &[f64],
    k: usize,
    rng: &mut R,
) -> Individual {
    debug_assert_eq!(population.len(), fitness.len());
    let sampled = index::sample(rng, population.len(), k.min(population.len()));

    let mut best: Option<usize> = None;
    for idx in sampled.iter() {
        match best {
            Some(b) if fitness[idx] <= fitness[b] => {}
            _ => best = Some(idx),
        }
    }

    population[best.unwrap_or(0)].clone()
}

/// Fitness-proportionate pick over weights shifted so the minimum is 1.
///
/// Falls back to a uniform pick when the weights degenerate, and to the last
/// individual if accumulated rounding never passes the drawn point.
pub fn roulette<R: Rng + ?Sized>(
    population: &[Individual],
    fitness: &[f64],
    rng: &mut R,
) -> Individual {
    debug_assert_eq!(population.len(), fitness.len());
    let min = fitness.iter().copied().fold(f64::INFINITY, f64::min);
    let shifted: Vec<f64> = fitness.iter().map(|f| f - min + 1.0).collect();
    let total: f64 = shifted.iter().sum();

    if !(total.is_finite() && total > 0.0) {
        tracing::trace!(total, "degenerate roulette weights, picking uniformly");
        let idx = rng.gen_range(0..population.len());
        return population[idx].clone();
    }

    let pick = rng.gen_range(0.0..total);
    let mut current = 0.0;
    for (ind, weight) in population.iter().zip(&shifted) {
        current += weight;
        if current > pick {
            return ind.clone();
        }
    }

    population[population.len() - 1].clone()
}
