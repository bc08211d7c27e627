use ndarray::Array1;
use rand::Rng;

use crate::common::Individual;

/// Nudge each gene by +/-1 with probability `probability`, clamped to
/// `0..=upper[i]`. Mutates `genes` in place.
pub fn step_mutation<R: Rng + ?Sized>(
    genes: &mut Individual,
    upper: &Array1<u32>,
    probability: f64,
    rng: &mut R,
) {
    debug_assert_eq!(genes.len(), upper.len());
    for (gene, &stock) in genes.iter_mut().zip(upper.iter()) {
        if rng.gen::<f64>() < probability {
            if rng.gen::<f64>() < 0.5 {
                *gene = gene.saturating_sub(1);
            } else {
                *gene = gene.saturating_add(1).min(stock);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_probability_is_identity() {
        let mut rng = StdRng::seed_from_u64(21);
        let upper = array![5, 5, 5];
        let mut genes: Individual = array![1, 2, 3];
        step_mutation(&mut genes, &upper, 0.0, &mut rng);
        assert_eq!(genes, array![1u32, 2, 3]);
    }

    #[test]
    fn test_full_probability_moves_every_gene_by_one() {
        let mut rng = StdRng::seed_from_u64(22);
        let upper = array![10, 10, 10, 10];
        let original: Individual = array![5, 5, 5, 5];
        for _ in 0..20 {
            let mut genes = original.clone();
            step_mutation(&mut genes, &upper, 1.0, &mut rng);
            for (&g, &o) in genes.iter().zip(original.iter()) {
                assert!(g == o + 1 || g + 1 == o);
            }
        }
    }

    #[test]
    fn test_clamps_at_bounds() {
        let mut rng = StdRng::seed_from_u64(23);
        let upper = array![0, 3];
        for _ in 0..100 {
            let mut genes: Individual = array![0, 3];
            step_mutation(&mut genes, &upper, 1.0, &mut rng);
            assert_eq!(genes[0], 0);
            assert!(genes[1] == 2 || genes[1] == 3);
        }
    }
}
