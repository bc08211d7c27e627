//! Spacefit
//!
//! Chooses how many units of each catalog item to place in a fixed floor
//! area so that total profit is as high as possible. The search itself lives
//! in the `spacefit-optimization` crate; this crate loads the catalog and run
//! parameters, rejects empty selections, and turns the solver output into
//! summary metrics and an area breakdown.
//!
//! ## Example Usage
//!
//! ```rust
//! use spacefit::{plan, Catalog, RunConfig};
//!
//! let mut config = RunConfig::default();
//! config.area_maximum = 5.0;
//! config.solver.generations = 20;
//! config.solver.seed = Some(7);
//!
//! let report = plan(&config).unwrap();
//! assert_eq!(report.history.len(), 20);
//! assert_eq!(report.quantities.len(), Catalog::default_showroom().entries().len());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod planner;
pub mod report;

pub use catalog::{Catalog, CatalogEntry};
pub use config::RunConfig;
pub use error::{SpacefitError, SpacefitResult};
pub use planner::plan;
pub use report::{Allocation, AreaRegion, PlanReport};

pub use spacefit_optimization as optimization;
pub use spacefit_optimization::{Item, SelectionStrategy, SolverConfig};

/// Get the version of Spacefit
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
