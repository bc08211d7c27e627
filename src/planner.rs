//! Single-run entry point tying catalog, solver and report together

use crate::config::RunConfig;
use crate::error::{SpacefitError, SpacefitResult};
use crate::report::PlanReport;
use spacefit_optimization::algorithms::GASolver;
use spacefit_optimization::KnapsackProblem;
use tracing::info;

/// Run the evolutionary search once over the selected catalog items.
///
/// An empty selection is rejected here; the engine itself would accept it
/// and return a degenerate result.
pub fn plan(config: &RunConfig) -> SpacefitResult<PlanReport> {
    let items = config.catalog.selected_items();
    if items.is_empty() {
        return Err(SpacefitError::EmptyCatalog);
    }

    let problem = KnapsackProblem::new(items, config.area_maximum)?;
    info!(
        "Planning {} items into {} area units",
        problem.items().len(),
        config.area_maximum
    );

    let solver = GASolver::new(config.solver.clone());
    let result = solver.solve(&problem)?;
    let report = PlanReport::build(problem.items(), config.area_maximum, result);

    info!(
        "Best plan: profit {:.2}, area {:.2}/{}",
        report.total_profit, report.used_area, report.area_maximum
    );
    Ok(report)
}
