//! Summary metrics and area breakdown for a finished run

use serde::{Deserialize, Serialize};
use spacefit_optimization::{Item, OptimizationResult};

/// Free area below this is not shown as its own region.
pub const FREE_SPACE_THRESHOLD: f64 = 0.01;

/// Quantity chosen for one catalog item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    pub used_area: f64,
    pub profit: f64,
}

/// One proportional block of the area-usage chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaRegion {
    pub label: String,
    pub area: f64,
    /// Fraction of the summed region areas, in [0, 1].
    pub share: f64,
    pub free_space: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Items with a non-zero quantity, in catalog order.
    pub allocations: Vec<Allocation>,
    /// Full quantity vector aligned with the selected items.
    pub quantities: Vec<u32>,
    pub total_profit: f64,
    pub used_area: f64,
    /// May be negative when the best individual overflows the budget.
    pub free_area: f64,
    pub area_maximum: f64,
    pub best_fitness: f64,
    pub history: Vec<f64>,
    pub regions: Vec<AreaRegion>,
}

impl PlanReport {
    pub fn build(items: &[Item], area_maximum: f64, result: OptimizationResult) -> Self {
        let allocations: Vec<Allocation> = items
            .iter()
            .zip(&result.best_individual)
            .filter(|(_, &q)| q > 0)
            .map(|(item, &quantity)| Allocation {
                id: item.id,
                name: item.name.clone(),
                quantity,
                used_area: f64::from(quantity) * item.area,
                profit: f64::from(quantity) * item.profit,
            })
            .collect();

        let used_area: f64 = allocations.iter().map(|a| a.used_area).sum();
        let total_profit: f64 = allocations.iter().map(|a| a.profit).sum();
        let free_area = area_maximum - used_area;

        let mut regions: Vec<AreaRegion> = allocations
            .iter()
            .map(|a| AreaRegion {
                label: format!("{} ({} units)", a.name, a.quantity),
                area: a.used_area,
                share: 0.0,
                free_space: false,
            })
            .collect();
        if free_area > FREE_SPACE_THRESHOLD {
            regions.push(AreaRegion {
                label: format!("Free space ({:.2})", free_area),
                area: free_area,
                share: 0.0,
                free_space: true,
            });
        }
        let region_total: f64 = regions.iter().map(|r| r.area).sum();
        if region_total > 0.0 {
            for region in &mut regions {
                region.share = region.area / region_total;
            }
        }

        Self {
            allocations,
            quantities: result.best_individual,
            total_profit,
            used_area,
            free_area,
            area_maximum,
            best_fitness: result.best_fitness,
            history: result.history,
            regions,
        }
    }

    /// Number of generations that ran.
    pub fn generations(&self) -> usize {
        self.history.len()
    }

    pub fn is_within_budget(&self) -> bool {
        self.used_area <= self.area_maximum
    }
}
