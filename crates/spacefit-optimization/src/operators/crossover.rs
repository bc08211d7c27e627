use rand::Rng;

use crate::common::Individual;

/// Uniform crossover: each position is swapped between the children with
/// probability 0.5. Genes are only exchanged, never combined, so both
/// children stay within the parents' per-position bounds.
pub fn uniform_crossover<R: Rng + ?Sized>(
    p1: &Individual,
    p2: &Individual,
    rng: &mut R,
) -> (Individual, Individual) {
    debug_assert_eq!(p1.len(), p2.len());
    let mut c1 = p1.clone();
    let mut c2 = p2.clone();

    for (a, b) in c1.iter_mut().zip(c2.iter_mut()) {
        if rng.gen_bool(0.5) {
            std::mem::swap(a, b);
        }
    }
    (c1, c2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_children_draw_from_parent_genes() {
        let mut rng = StdRng::seed_from_u64(11);
        let p1: Individual = array![0, 1, 2, 3, 4, 5, 6, 7];
        let p2: Individual = array![10, 11, 12, 13, 14, 15, 16, 17];

        for _ in 0..50 {
            let (c1, c2) = uniform_crossover(&p1, &p2, &mut rng);
            for i in 0..p1.len() {
                // Each position is either kept or swapped as a pair
                assert!(
                    (c1[i] == p1[i] && c2[i] == p2[i]) || (c1[i] == p2[i] && c2[i] == p1[i])
                );
            }
        }
    }

    #[test]
    fn test_parents_are_untouched() {
        let mut rng = StdRng::seed_from_u64(12);
        let p1: Individual = array![1, 1, 1];
        let p2: Individual = array![2, 2, 2];
        let _ = uniform_crossover(&p1, &p2, &mut rng);
        assert_eq!(p1, array![1u32, 1, 1]);
        assert_eq!(p2, array![2u32, 2, 2]);
    }
}
