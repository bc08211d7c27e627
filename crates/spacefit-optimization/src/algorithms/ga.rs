use crate::common::{Individual, OptimizationResult, Problem, SolverConfig};
use crate::error::ConfigResult;
use crate::operators::{random_population, select, step_mutation, uniform_crossover};
use rand::prelude::*;
use rayon::prelude::*;
use tracing::{debug, info};

/// Generational genetic algorithm with elitism over bounded integer genes.
pub struct GASolver {
    pub config: SolverConfig,
}

/// Mutable state of a single run. Dropped once the result is extracted.
struct RunState {
    population: Vec<Individual>,
    fitness: Vec<f64>,
    best: Option<Individual>,
    best_fitness: f64,
    history: Vec<f64>,
}

impl RunState {
    fn new(population: Vec<Individual>, generations: usize) -> Self {
        Self {
            population,
            fitness: Vec::new(),
            best: None,
            best_fitness: f64::NEG_INFINITY,
            history: Vec::with_capacity(generations),
        }
    }

    fn into_result(self) -> OptimizationResult {
        OptimizationResult {
            best_individual: self.best.map(|b| b.to_vec()).unwrap_or_default(),
            best_fitness: self.best_fitness,
            history: self.history,
        }
    }
}

impl GASolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Run with a generator seeded from `config.seed`, or from OS entropy
    /// when no seed is set.
    pub fn solve<P: Problem>(&self, problem: &P) -> ConfigResult<OptimizationResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.solve_with_rng(problem, &mut rng)
    }

    /// Run every generation to completion, drawing all randomness from `rng`.
    pub fn solve_with_rng<P: Problem, R: Rng + ?Sized>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> ConfigResult<OptimizationResult> {
        self.config.validate()?;
        info!(
            genes = problem.dim(),
            population = self.config.population_size,
            generations = self.config.generations,
            selection = ?self.config.selection,
            "starting evolutionary search"
        );

        // 1. Initialize Population
        let population =
            random_population(problem.upper_bounds(), self.config.population_size, rng);
        let mut state = RunState::new(population, self.config.generations);

        // 2. Evolution
        for generation in 0..self.config.generations {
            self.evolve(problem, &mut state, rng);
            debug!(generation, best_fitness = state.best_fitness, "generation complete");
        }

        info!(best_fitness = state.best_fitness, "evolutionary search finished");
        Ok(state.into_result())
    }

    fn evaluate<P: Problem>(&self, problem: &P, population: &[Individual]) -> Vec<f64> {
        if self.config.parallel_evaluation {
            population.par_iter().map(|ind| problem.fitness(ind)).collect()
        } else {
            population.iter().map(|ind| problem.fitness(ind)).collect()
        }
    }

    /// One generation: evaluate, track the best-ever, then breed the replacement.
    fn evolve<P: Problem, R: Rng + ?Sized>(&self, problem: &P, state: &mut RunState, rng: &mut R) {
        let size = self.config.population_size;
        state.fitness = self.evaluate(problem, &state.population);

        // Stable descending sort, ties keep population order
        let mut ranked: Vec<usize> = (0..state.population.len()).collect();
        ranked.sort_by(|&a, &b| state.fitness[b].total_cmp(&state.fitness[a]));

        if let Some(&top) = ranked.first() {
            if state.fitness[top] > state.best_fitness {
                state.best_fitness = state.fitness[top];
                state.best = Some(state.population[top].clone());
            }
        }
        state.history.push(state.best_fitness);

        let mut next: Vec<Individual> = Vec::with_capacity(size);
        next.extend(
            ranked
                .iter()
                .take(self.config.elitism)
                .map(|&i| state.population[i].clone()),
        );

        let upper = problem.upper_bounds();
        while next.len() < size {
            let p1 = select(self.config.selection, &state.population, &state.fitness, rng);
            let p2 = select(self.config.selection, &state.population, &state.fitness, rng);

            // Crossover
            let (mut c1, mut c2) = if rng.gen::<f64>() < self.config.crossover_probability {
                uniform_crossover(&p1, &p2, rng)
            } else {
                (p1, p2)
            };

            // Mutation
            step_mutation(&mut c1, upper, self.config.mutation_probability, rng);
            step_mutation(&mut c2, upper, self.config.mutation_probability, rng);

            next.push(c1);
            if next.len() < size {
                next.push(c2);
            }
        }

        state.population = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Item, SelectionStrategy};
    use crate::problem::KnapsackProblem;
    use proptest::prelude::*;

    fn showroom() -> KnapsackProblem {
        let items = vec![
            Item::new(1, "Mini fridge", 0.25, 40.0, 20),
            Item::new(2, "Television", 0.1125, 60.0, 6),
            Item::new(3, "Washer", 0.36, 90.0, 3),
            Item::new(4, "Microwave", 0.20, 25.0, 8),
            Item::new(5, "Air conditioner", 0.27, 110.0, 2),
        ];
        KnapsackProblem::new(items, 2.0).unwrap()
    }

    fn assert_within_bounds(population: &[Individual], upper: &ndarray::Array1<u32>) {
        for ind in population {
            assert_eq!(ind.len(), upper.len());
            assert!(ind.iter().zip(upper.iter()).all(|(g, s)| g <= s));
        }
    }

    fn run_generations(
        problem: &KnapsackProblem,
        config: SolverConfig,
        generations: usize,
        seed: u64,
    ) {
        let solver = GASolver::new(config.clone());
        let mut rng = StdRng::seed_from_u64(seed);
        let upper = problem.upper_bounds();
        let population = random_population(upper, config.population_size, &mut rng);
        assert_within_bounds(&population, upper);
        let mut state = RunState::new(population, generations);

        let mut previous_best = f64::NEG_INFINITY;
        for _ in 0..generations {
            solver.evolve(problem, &mut state, &mut rng);

            assert_eq!(state.fitness.len(), config.population_size);
            assert_eq!(state.population.len(), config.population_size);
            assert_within_bounds(&state.population, upper);
            assert!(state.best_fitness >= previous_best);
            previous_best = state.best_fitness;
        }
        assert_eq!(state.history.len(), generations);
    }

    #[test]
    fn test_state_invariants_hold_with_tournament() {
        run_generations(
            &showroom(),
            SolverConfig {
                population_size: 21,
                elitism: 3,
                ..Default::default()
            },
            25,
            99,
        );
    }

    #[test]
    fn test_state_invariants_hold_with_roulette_and_no_elitism() {
        run_generations(
            &showroom(),
            SolverConfig {
                population_size: 10,
                elitism: 0,
                mutation_probability: 1.0,
                crossover_probability: 1.0,
                selection: SelectionStrategy::Roulette,
                ..Default::default()
            },
            25,
            99,
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn every_generation_stays_within_stock(
            rows in prop::collection::vec((0.05f64..5.0, 0.0f64..200.0, 0u32..12), 0..8),
            area_maximum in 0.5f64..20.0,
            seed in any::<u64>(),
            roulette in any::<bool>(),
            mutation_probability in 0.0f64..=1.0,
        ) {
            let items = rows
                .iter()
                .enumerate()
                .map(|(i, &(area, profit, stock))| {
                    Item::new(i as u64, format!("item-{}", i), area, profit, stock)
                })
                .collect();
            let problem = KnapsackProblem::new(items, area_maximum).unwrap();
            let selection = if roulette {
                SelectionStrategy::Roulette
            } else {
                SelectionStrategy::Tournament { k: 3 }
            };
            let config = SolverConfig {
                population_size: 9,
                elitism: 1,
                mutation_probability,
                selection,
                ..Default::default()
            };
            run_generations(&problem, config, 12, seed);
        }
    }

    #[test]
    fn test_elites_survive_into_next_generation() {
        let problem = showroom();
        let config = SolverConfig {
            population_size: 12,
            elitism: 2,
            mutation_probability: 1.0,
            ..Default::default()
        };
        let solver = GASolver::new(config.clone());
        let mut rng = StdRng::seed_from_u64(5);
        let population = random_population(problem.upper_bounds(), 12, &mut rng);
        let mut state = RunState::new(population, 1);

        solver.evolve(&problem, &mut state, &mut rng);
        let best = state.best.clone().unwrap();
        assert_eq!(state.population[0], best);
        assert_eq!(problem.fitness(&state.population[0]), state.best_fitness);
    }

    #[test]
    fn test_odd_population_is_filled_exactly() {
        let problem = showroom();
        let solver = GASolver::new(SolverConfig {
            population_size: 7,
            elitism: 0,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(3);
        let population = random_population(problem.upper_bounds(), 7, &mut rng);
        let mut state = RunState::new(population, 1);
        solver.evolve(&problem, &mut state, &mut rng);
        assert_eq!(state.population.len(), 7);
    }

    #[test]
    fn test_parallel_evaluation_matches_sequential() {
        let problem = showroom();
        let sequential = GASolver::new(SolverConfig {
            seed: Some(17),
            ..Default::default()
        });
        let parallel = GASolver::new(SolverConfig {
            seed: Some(17),
            parallel_evaluation: true,
            ..Default::default()
        });
        assert_eq!(
            sequential.solve(&problem).unwrap(),
            parallel.solve(&problem).unwrap()
        );
    }
}
