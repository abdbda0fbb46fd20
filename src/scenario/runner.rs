//! Scenario runner for batch and sensitivity projections
//!
//! Every run is independent: the engine holds no mutable state, so batches fan
//! out across threads with no coordination.

use rayon::prelude::*;

use crate::inputs::ScenarioInputs;
use crate::projection::{ProjectionConfig, ProjectionEngine, RoiCalculation, Trajectory};

/// Runs projections for many input sets under one config
///
/// # Example
/// ```
/// use education_roi::ScenarioRunner;
/// use education_roi::inputs::{CostInputs, EarningsInputs, FinancialAid, ScenarioInputs};
///
/// let inputs = ScenarioInputs::new(
///     CostInputs { tuition: 9_000.0, program_length: 2.0, ..Default::default() },
///     FinancialAid::none(),
///     EarningsInputs {
///         baseline_salary: 32_000.0,
///         projected_salary: 48_000.0,
///         career_length: 30,
///         salary_growth_rate: 2.0,
///     },
/// );
///
/// let runner = ScenarioRunner::new();
/// let results = runner.salary_sensitivity(&inputs, &[40_000.0, 48_000.0, 56_000.0]);
/// assert!(results[2].1.net_roi > results[0].1.net_roi);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a specific config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Engine used for every run
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Run a single projection
    pub fn run(&self, inputs: &ScenarioInputs) -> RoiCalculation {
        self.engine.project_scenario(inputs)
    }

    /// Run a single projection with its trajectory
    pub fn run_with_trajectory(&self, inputs: &ScenarioInputs) -> (RoiCalculation, Trajectory) {
        let result = self.engine.project_scenario(inputs);
        let trajectory = self.engine.simulate_trajectory(&inputs.costs, &inputs.earnings);
        (result, trajectory)
    }

    /// Run projections for many input sets in parallel, preserving order
    pub fn run_batch(&self, scenarios: &[ScenarioInputs]) -> Vec<RoiCalculation> {
        log::info!("running {} scenarios", scenarios.len());
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    /// Re-run one input set across alternative projected salaries
    pub fn salary_sensitivity(&self, inputs: &ScenarioInputs, projected_salaries: &[f64]) -> Vec<(f64, RoiCalculation)> {
        projected_salaries
            .par_iter()
            .map(|&salary| {
                let mut variant = inputs.clone();
                variant.earnings.projected_salary = salary;
                (salary, self.run(&variant))
            })
            .collect()
    }
}

/// Sort labelled results by net ROI, best first
pub fn rank_by_net_roi<T>(results: &mut [(T, RoiCalculation)]) {
    results.sort_by(|a, b| b.1.net_roi.total_cmp(&a.1.net_roi));
}
