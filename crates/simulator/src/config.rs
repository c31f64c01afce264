//! Configuration types for experiments.

use crate::runner::ExperimentError;
use edflow_types::ScenarioConfiguration;
use std::collections::HashSet;
use std::sync::Arc;

/// Default number of patients simulated per scenario.
pub const DEFAULT_N_PATIENTS: usize = 1000;

/// Default random seed.
pub const DEFAULT_SEED: u64 = 909;

/// Configuration for comparing scenarios.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Scenarios to simulate, in reporting order.
    pub scenarios: Vec<Arc<ScenarioConfiguration>>,

    /// Number of patients per scenario.
    pub n_patients: usize,

    /// Base random seed. `None` seeds every simulator from system entropy.
    pub seed: Option<u64>,

    /// Give every scenario the same seed so that comparisons share the
    /// same underlying random streams.
    pub common_random_numbers: bool,
}

impl ExperimentConfig {
    /// Create an experiment over the given scenarios.
    pub fn new(scenarios: Vec<ScenarioConfiguration>) -> Self {
        Self {
            scenarios: scenarios.into_iter().map(Arc::new).collect(),
            n_patients: DEFAULT_N_PATIENTS,
            seed: Some(DEFAULT_SEED),
            common_random_numbers: true,
        }
    }

    /// Add a scenario.
    pub fn with_scenario(self, scenario: ScenarioConfiguration) -> Self {
        self.with_shared_scenario(Arc::new(scenario))
    }

    /// Add a scenario that is already shared elsewhere.
    pub fn with_shared_scenario(mut self, scenario: Arc<ScenarioConfiguration>) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Set the number of patients per scenario.
    pub fn with_n_patients(mut self, n_patients: usize) -> Self {
        self.n_patients = n_patients;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed every simulator from system entropy.
    pub fn without_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Enable or disable common random numbers.
    pub fn with_common_random_numbers(mut self, enabled: bool) -> Self {
        self.common_random_numbers = enabled;
        self
    }

    /// Seed for the scenario at `index`.
    ///
    /// With common random numbers every scenario gets the base seed;
    /// otherwise each scenario is offset by its index.
    pub fn seed_for(&self, index: usize) -> Option<u64> {
        let seed = self.seed?;
        if self.common_random_numbers {
            Some(seed)
        } else {
            Some(seed.wrapping_add(index as u64))
        }
    }

    /// Check that the experiment can run.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        if self.scenarios.is_empty() {
            return Err(ExperimentError::NoScenarios);
        }

        let mut names = HashSet::new();
        for scenario in &self.scenarios {
            if !names.insert(scenario.name()) {
                return Err(ExperimentError::DuplicateScenario(scenario.name().to_string()));
            }
        }

        Ok(())
    }
}

impl Default for ExperimentConfig {
    /// Baseline against a flu pandemic.
    fn default() -> Self {
        Self::new(vec![
            ScenarioConfiguration::baseline(),
            ScenarioConfiguration::flu_pandemic(),
        ])
    }
}
