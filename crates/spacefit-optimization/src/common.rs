use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A candidate solution: one quantity per catalog item, in catalog order.
pub type Individual = Array1<u32>;

/// A catalog item that may be placed in the area budget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    /// Area consumed by a single unit.
    pub area: f64,
    /// Profit earned by a single unit.
    pub profit: f64,
    /// Maximum number of units available.
    pub stock: u32,
}

impl Item {
    pub fn new(id: u64, name: impl Into<String>, area: f64, profit: f64, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            area,
            profit,
            stock,
        }
    }
}

/// Defines the optimization problem over bounded integer vectors.
///
/// Fitness is maximized. Implementors report the raw objective and a
/// constraint penalty; the combined fitness is floored at zero so it can be
/// used directly as a roulette weight.
pub trait Problem: Send + Sync {
    /// The objective function to maximize.
    fn objective(&self, genes: &Individual) -> f64;

    /// Optional constraints. Returns a penalty score (0 if all satisfied).
    fn penalty(&self, _genes: &Individual) -> f64 {
        0.0
    }

    /// Combined fitness (objective - penalty), never negative.
    fn fitness(&self, genes: &Individual) -> f64 {
        (self.objective(genes) - self.penalty(genes)).max(0.0)
    }

    /// Number of genes.
    fn dim(&self) -> usize;

    /// Inclusive upper bound of every gene. The lower bound is always zero.
    fn upper_bounds(&self) -> &Array1<u32>;
}

/// Parent selection strategy, fixed for a whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Best of `k` distinct, uniformly sampled individuals.
    Tournament {
        #[serde(default = "default_tournament_k")]
        k: usize,
    },
    /// Fitness-proportionate selection over min-shifted weights.
    Roulette,
}

pub const DEFAULT_TOURNAMENT_K: usize = 3;

fn default_tournament_k() -> usize {
    DEFAULT_TOURNAMENT_K
}

impl Default for SelectionStrategy {
    fn default() -> Self {
        SelectionStrategy::Tournament {
            k: DEFAULT_TOURNAMENT_K,
        }
    }
}

/// Configuration for the solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub population_size: usize,
    pub generations: usize,
    pub crossover_probability: f64,
    pub mutation_probability: f64,
    /// Number of top individuals copied unchanged into the next generation.
    pub elitism: usize,
    pub selection: SelectionStrategy,
    /// Seed for the run's random stream. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Evaluate the fitness vector on the rayon pool.
    pub parallel_evaluation: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 50,
            crossover_probability: 0.6,
            mutation_probability: 0.15,
            elitism: 2,
            selection: SelectionStrategy::default(),
            seed: None,
            parallel_evaluation: false,
        }
    }
}

impl SolverConfig {
    /// Reject configurations the generational loop cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        check_probability("crossover_probability", self.crossover_probability)?;
        check_probability("mutation_probability", self.mutation_probability)?;
        if self.elitism >= self.population_size {
            return Err(ConfigError::ElitismTooLarge {
                elitism: self.elitism,
                population_size: self.population_size,
            });
        }
        if let SelectionStrategy::Tournament { k } = self.selection {
            if k == 0 || k > self.population_size {
                return Err(ConfigError::InvalidTournamentSize {
                    k,
                    population_size: self.population_size,
                });
            }
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

/// The result of an optimization run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Best-ever quantities, aligned with the catalog order. Empty for an empty catalog.
    pub best_individual: Vec<u32>,
    pub best_fitness: f64,
    /// Best-ever fitness after each generation.
    pub history: Vec<f64>,
}
