//! Run configuration loaded from YAML or JSON files

use crate::catalog::Catalog;
use crate::error::{SpacefitError, SpacefitResult};
use serde::{Deserialize, Serialize};
use spacefit_optimization::SolverConfig;
use std::path::Path;
use tracing::{debug, warn};

/// Environment variable overriding the solver seed.
pub const SEED_ENV: &str = "SPACEFIT_SEED";

/// Everything one planning run needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Area budget, in the same unit as item areas.
    pub area_maximum: f64,
    pub solver: SolverConfig,
    pub catalog: Catalog,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            area_maximum: 50.0,
            solver: SolverConfig::default(),
            catalog: Catalog::default_showroom(),
        }
    }
}

impl RunConfig {
    /// Load from a `.yaml`/`.yml` or `.json` file. A file without a
    /// `catalog` key gets the built-in showroom; an explicit empty catalog
    /// is kept as-is and rejected by the planner.
    pub fn from_path(path: impl AsRef<Path>) -> SpacefitResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let config: RunConfig = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&text)?,
            "json" => serde_json::from_str(&text)?,
            other => return Err(SpacefitError::UnsupportedFormat(other.to_string())),
        };
        debug!("Loaded run config from {}", path.display());
        Ok(config)
    }

    /// Apply `SPACEFIT_SEED` when it is set to a valid integer.
    pub fn apply_env(mut self) -> Self {
        if let Ok(raw) = std::env::var(SEED_ENV) {
            self.apply_seed_override(&raw);
        }
        self
    }

    fn apply_seed_override(&mut self, raw: &str) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => self.solver.seed = Some(seed),
            Err(_) => warn!("Ignoring {}={:?}: not an unsigned integer", SEED_ENV, raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacefit_optimization::SelectionStrategy;
    use std::io::Write;

    #[test]
    fn test_loads_yaml_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "area_maximum: 4.5\nsolver:\n  generations: 10\n  selection:\n    method: roulette\n"
        )
        .unwrap();

        let config = RunConfig::from_path(file.path()).unwrap();
        assert_eq!(config.area_maximum, 4.5);
        assert_eq!(config.solver.generations, 10);
        assert_eq!(config.solver.population_size, 100);
        assert_eq!(config.solver.selection, SelectionStrategy::Roulette);
        assert_eq!(config.catalog, Catalog::default_showroom());
    }

    #[test]
    fn test_loads_json_catalog() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{
                "area_maximum": 3.0,
                "solver": {{"selection": {{"method": "tournament", "k": 4}}, "seed": 9}},
                "catalog": [{{"id": 1, "name": "Crate", "area": 1.0, "profit": 10.0, "stock": 5}}]
            }}"#
        )
        .unwrap();

        let config = RunConfig::from_path(file.path()).unwrap();
        assert_eq!(config.solver.selection, SelectionStrategy::Tournament { k: 4 });
        assert_eq!(config.solver.seed, Some(9));
        assert_eq!(config.catalog.entries().len(), 1);
    }

    #[test]
    fn test_keeps_explicit_empty_catalog() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "area_maximum: 3.0\ncatalog: []\n").unwrap();

        let config = RunConfig::from_path(file.path()).unwrap();
        assert!(config.catalog.is_empty());
        assert!(matches!(
            crate::planner::plan(&config),
            Err(SpacefitError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            RunConfig::from_path(file.path()),
            Err(SpacefitError::UnsupportedFormat(ext)) if ext == "toml"
        ));
    }

    #[test]
    fn test_seed_override() {
        let mut config = RunConfig::default();
        config.apply_seed_override(" 77 ");
        assert_eq!(config.solver.seed, Some(77));
        config.apply_seed_override("not-a-seed");
        assert_eq!(config.solver.seed, Some(77));
    }
}
