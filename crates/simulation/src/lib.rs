//! Monte Carlo simulation of ED patient flow.
//!
//! Given the same scenario and seed, a simulator produces identical results
//! every run.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  MonteCarloSimulator                     │
//! │                                                          │
//! │  Arc<ScenarioConfiguration>        ChaCha8Rng (owned)    │
//! │              │                            │              │
//! │              ▼                            ▼              │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │ draw(n): process times → admissions → DTA delays   │  │
//! │  └────────────────────────┬───────────────────────────┘  │
//! │                           ▼                              │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │ PatientDraws::total_times(): admitted ++ discharged│  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use edflow_simulation::MonteCarloSimulator;
//! use edflow_types::ScenarioConfiguration;
//! use std::sync::Arc;
//!
//! let scenario = Arc::new(ScenarioConfiguration::baseline());
//! let mut simulator = MonteCarloSimulator::new(scenario, Some(909)).unwrap();
//!
//! let total_times = simulator.simulate(1000);
//! assert_eq!(total_times.len(), 1000);
//! assert!(total_times.iter().all(|&t| t >= 0.0));
//! ```

mod cohort;
mod error;
mod simulator;

pub use cohort::{PatientDraws, PatientOutcome};
pub use error::SimulationError;
pub use simulator::MonteCarloSimulator;
