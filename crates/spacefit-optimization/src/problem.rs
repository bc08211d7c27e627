use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::common::{Individual, Item, Problem};
use crate::error::{ConfigError, ConfigResult};

/// Fitness lost per unit of area over the budget.
pub const DEFAULT_PENALTY_COEFFICIENT: f64 = 1000.0;

/// Area and profit totals of one individual.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub area: f64,
    pub profit: f64,
    pub fitness: f64,
}

/// Bounded knapsack over a fixed item catalog with a soft area budget.
///
/// Infeasible individuals are not rejected. Their profit is reduced by
/// `penalty_coefficient * (area - area_maximum)` and floored at zero.
#[derive(Clone, Debug)]
pub struct KnapsackProblem {
    items: Vec<Item>,
    areas: Array1<f64>,
    profits: Array1<f64>,
    stocks: Array1<u32>,
    area_maximum: f64,
    penalty_coefficient: f64,
}

impl KnapsackProblem {
    pub fn new(items: Vec<Item>, area_maximum: f64) -> ConfigResult<Self> {
        if !(area_maximum.is_finite() && area_maximum > 0.0) {
            return Err(ConfigError::InvalidAreaMaximum(area_maximum));
        }
        for item in &items {
            let reason = if !(item.area.is_finite() && item.area > 0.0) {
                Some("area must be positive and finite")
            } else if !(item.profit.is_finite() && item.profit >= 0.0) {
                Some("profit must be non-negative and finite")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ConfigError::InvalidItem {
                    id: item.id,
                    name: item.name.clone(),
                    reason,
                });
            }
        }

        let areas = items.iter().map(|i| i.area).collect();
        let profits = items.iter().map(|i| i.profit).collect();
        let stocks = items.iter().map(|i| i.stock).collect();

        Ok(Self {
            items,
            areas,
            profits,
            stocks,
            area_maximum,
            penalty_coefficient: DEFAULT_PENALTY_COEFFICIENT,
        })
    }

    pub fn with_penalty_coefficient(mut self, coefficient: f64) -> Self {
        self.penalty_coefficient = coefficient;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn area_maximum(&self) -> f64 {
        self.area_maximum
    }

    pub fn penalty_coefficient(&self) -> f64 {
        self.penalty_coefficient
    }

    /// Area and profit of `genes` in one pass.
    pub fn totals(&self, genes: &Individual) -> (f64, f64) {
        genes
            .iter()
            .zip(self.areas.iter().zip(self.profits.iter()))
            .fold((0.0, 0.0), |(area, profit), (&q, (&a, &p))| {
                let q = f64::from(q);
                (area + q * a, profit + q * p)
            })
    }

    pub fn total_area(&self, genes: &Individual) -> f64 {
        self.totals(genes).0
    }

    pub fn total_profit(&self, genes: &Individual) -> f64 {
        self.totals(genes).1
    }

    fn overflow_penalty(&self, area: f64) -> f64 {
        if area <= self.area_maximum {
            0.0
        } else {
            self.penalty_coefficient * (area - self.area_maximum)
        }
    }

    fn score(&self, area: f64, profit: f64) -> f64 {
        (profit - self.overflow_penalty(area)).max(0.0)
    }

    pub fn evaluate(&self, genes: &Individual) -> Evaluation {
        let (area, profit) = self.totals(genes);
        Evaluation {
            area,
            profit,
            fitness: self.score(area, profit),
        }
    }
}

impl Problem for KnapsackProblem {
    fn objective(&self, genes: &Individual) -> f64 {
        self.total_profit(genes)
    }

    fn penalty(&self, genes: &Individual) -> f64 {
        self.overflow_penalty(self.total_area(genes))
    }

    fn fitness(&self, genes: &Individual) -> f64 {
        let (area, profit) = self.totals(genes);
        self.score(area, profit)
    }

    fn dim(&self) -> usize {
        self.items.len()
    }

    fn upper_bounds(&self) -> &Array1<u32> {
        &self.stocks
    }
}
