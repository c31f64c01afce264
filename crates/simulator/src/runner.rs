//! Experiment runner.

use crate::config::ExperimentConfig;
use crate::metrics::{MetricsError, TimeInDepartmentSummary};
use edflow_simulation::{MonteCarloSimulator, SimulationError};
use edflow_types::ScenarioConfiguration;
use rayon::prelude::*;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Runs every scenario of an experiment and collects the results.
#[derive(Debug)]
pub struct Experiment {
    config: ExperimentConfig,
}

impl Experiment {
    /// Create an experiment, rejecting invalid configurations up front.
    pub fn new(config: ExperimentConfig) -> Result<Self, ExperimentError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Simulate every scenario once.
    ///
    /// Each scenario gets its own simulator, so scenarios run in parallel.
    /// Results are returned in scenario order.
    pub fn run(&self) -> Result<Vec<ScenarioResult>, ExperimentError> {
        info!(
            scenarios = self.config.scenarios.len(),
            n_patients = self.config.n_patients,
            seed = ?self.config.seed,
            common_random_numbers = self.config.common_random_numbers,
            "Starting experiment"
        );

        if self.config.seed.is_none() {
            warn!("No seed configured, results will not be reproducible");
        }

        let results = self
            .config
            .scenarios
            .par_iter()
            .enumerate()
            .map(|(index, scenario)| -> Result<ScenarioResult, SimulationError> {
                let mut simulator =
                    MonteCarloSimulator::new(Arc::clone(scenario), self.config.seed_for(index))?;
                let total_times = simulator.simulate(self.config.n_patients);
                Ok(ScenarioResult::new(Arc::clone(scenario), total_times))
            })
            .collect::<Result<Vec<_>, SimulationError>>()?;

        for result in &results {
            let summary = result.summary()?;
            info!(
                scenario = result.name(),
                patients = summary.count,
                mean = summary.mean,
                p50 = summary.p50,
                p90 = summary.p90,
                p99 = summary.p99,
                "Scenario complete"
            );
        }

        Ok(results)
    }
}

/// Times in department produced by one scenario.
#[derive(Clone, Debug)]
pub struct ScenarioResult {
    /// The scenario that produced the times.
    pub scenario: Arc<ScenarioConfiguration>,

    /// Total time in department per patient, admitted patients first.
    pub total_times: Vec<f64>,
}

impl ScenarioResult {
    pub fn new(scenario: Arc<ScenarioConfiguration>, total_times: Vec<f64>) -> Self {
        Self {
            scenario,
            total_times,
        }
    }

    pub fn name(&self) -> &str {
        self.scenario.name()
    }

    pub fn summary(&self) -> Result<TimeInDepartmentSummary, MetricsError> {
        TimeInDepartmentSummary::from_samples(&self.total_times)
    }

    /// Fraction of patients whose time in department exceeds `threshold`
    /// minutes. Zero for an empty result.
    pub fn proportion_over(&self, threshold: f64) -> f64 {
        if self.total_times.is_empty() {
            return 0.0;
        }
        let over = self.total_times.iter().filter(|&&t| t > threshold).count();
        over as f64 / self.total_times.len() as f64
    }
}

/// Errors that can occur while running an experiment.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("Experiment has no scenarios")]
    NoScenarios,

    #[error("Scenario name '{0}' is used more than once")]
    DuplicateScenario(String),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}
