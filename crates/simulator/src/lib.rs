//! ED Simulator
//!
//! Runs one or more ED scenarios side by side on top of
//! `edflow-simulation` and summarises the resulting distributions of time
//! in department.
//!
//! # Architecture
//!
//! - **Configuration**: scenarios to compare, cohort size and seeding policy
//! - **Runner**: one simulator per scenario, executed in parallel
//! - **Metrics**: mean and percentiles of time in department per scenario
//!
//! When common random numbers are enabled every scenario shares the same
//! seed, which reduces sampling noise when comparing scenarios.
//!
//! # Example
//!
//! ```
//! use edflow_simulator::{Experiment, ExperimentConfig};
//!
//! let config = ExperimentConfig::default()
//!     .with_n_patients(1000)
//!     .with_seed(909);
//!
//! let results = Experiment::new(config).unwrap().run().unwrap();
//! for result in &results {
//!     let summary = result.summary().unwrap();
//!     println!("{}: mean {:.1} min, p90 {} min", result.name(), summary.mean, summary.p90);
//! }
//! ```

pub mod config;
pub mod metrics;
pub mod runner;

pub use config::ExperimentConfig;
pub use metrics::{MetricsError, TimeInDepartmentSummary};
pub use runner::{Experiment, ExperimentError, ScenarioResult};
