//! Scenario parameters.

use crate::error::ScenarioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default mean triage, assessment and treatment time (minutes).
pub const DEFAULT_MEAN_PROCESS_TIME: f64 = 150.0;

/// Default mean decision-to-admit delay (minutes).
pub const DEFAULT_MEAN_DTA: f64 = 120.0;

/// Default probability that a patient is admitted.
pub const DEFAULT_P_ADMIT: f64 = 0.4;

/// Identifies one field of a [`ScenarioConfiguration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioField {
    Name,
    MeanProcessTime,
    MeanDta,
    PAdmit,
}

impl ScenarioField {
    /// Every field, in declaration order.
    pub const ALL: [ScenarioField; 4] = [
        ScenarioField::Name,
        ScenarioField::MeanProcessTime,
        ScenarioField::MeanDta,
        ScenarioField::PAdmit,
    ];

    /// The snake_case field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioField::Name => "name",
            ScenarioField::MeanProcessTime => "mean_process_time",
            ScenarioField::MeanDta => "mean_dta",
            ScenarioField::PAdmit => "p_admit",
        }
    }
}

impl fmt::Display for ScenarioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioField {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ScenarioError::UnknownField(s.to_string()))
    }
}

/// Parameters for one ED scenario.
///
/// All fields are fixed at construction. There are no mutating methods:
/// [`set`](Self::set) always fails with
/// [`ScenarioError::ImmutabilityViolation`], and variants are derived with
/// [`with_parameter`](Self::with_parameter) or [`renamed`](Self::renamed),
/// which return a new instance and leave `self` untouched.
///
/// Every constructor that takes caller input validates it, including
/// deserialization, so an invalid scenario cannot be built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScenarioDefinition")]
pub struct ScenarioConfiguration {
    /// Scenario label.
    name: String,

    /// Mean triage, assessment and treatment time.
    mean_process_time: f64,

    /// Mean delay between the decision to admit and admission.
    mean_dta: f64,

    /// Probability of admission.
    p_admit: f64,
}

impl ScenarioConfiguration {
    /// Create a scenario with the default parameters.
    pub fn new(name: impl Into<String>) -> Result<Self, ScenarioError> {
        Self::with_parameters(
            name,
            DEFAULT_MEAN_PROCESS_TIME,
            DEFAULT_MEAN_DTA,
            DEFAULT_P_ADMIT,
        )
    }

    /// Create a scenario with every parameter given explicitly.
    pub fn with_parameters(
        name: impl Into<String>,
        mean_process_time: f64,
        mean_dta: f64,
        p_admit: f64,
    ) -> Result<Self, ScenarioError> {
        let scenario = Self {
            name: name.into(),
            mean_process_time,
            mean_dta,
            p_admit,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// The reference scenario, using the defaults.
    pub fn baseline() -> Self {
        Self {
            name: "baseline".to_string(),
            mean_process_time: DEFAULT_MEAN_PROCESS_TIME,
            mean_dta: DEFAULT_MEAN_DTA,
            p_admit: DEFAULT_P_ADMIT,
        }
    }

    /// Longer processing, longer admission delays and more admissions.
    pub fn flu_pandemic() -> Self {
        Self {
            name: "flu_pandemic".to_string(),
            mean_process_time: 160.0,
            mean_dta: 180.0,
            p_admit: 0.7,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mean_process_time(&self) -> f64 {
        self.mean_process_time
    }

    pub fn mean_dta(&self) -> f64 {
        self.mean_dta
    }

    pub fn p_admit(&self) -> f64 {
        self.p_admit
    }

    /// Attempt to overwrite a field in place.
    ///
    /// Scenarios are frozen, so this always returns
    /// [`ScenarioError::ImmutabilityViolation`] and never changes `self`.
    /// Callers addressing fields by name should use
    /// [`with_parameter`](Self::with_parameter) instead.
    pub fn set<V>(&self, field: ScenarioField, _value: V) -> Result<(), ScenarioError> {
        Err(ScenarioError::ImmutabilityViolation {
            scenario: self.name.clone(),
            field,
        })
    }

    /// Derive a new scenario with one numeric parameter replaced.
    ///
    /// The name cannot be replaced through this method; use
    /// [`renamed`](Self::renamed).
    pub fn with_parameter(&self, field: ScenarioField, value: f64) -> Result<Self, ScenarioError> {
        let mut derived = self.clone();
        match field {
            ScenarioField::Name => {
                return Err(ScenarioError::InvalidParameter {
                    field,
                    value: value.to_string(),
                    reason: "name is not a numeric parameter",
                })
            }
            ScenarioField::MeanProcessTime => derived.mean_process_time = value,
            ScenarioField::MeanDta => derived.mean_dta = value,
            ScenarioField::PAdmit => derived.p_admit = value,
        }
        derived.validate()?;
        Ok(derived)
    }

    /// Derive a new scenario with the same parameters under another name.
    pub fn renamed(&self, name: impl Into<String>) -> Result<Self, ScenarioError> {
        let derived = Self {
            name: name.into(),
            ..self.clone()
        };
        derived.validate()?;
        Ok(derived)
    }

    /// Check every parameter against its domain.
    ///
    /// Means must be finite and strictly positive, the admission
    /// probability must lie in `[0, 1]`, and the name must not be blank.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.name.trim().is_empty() {
            return Err(ScenarioError::InvalidParameter {
                field: ScenarioField::Name,
                value: format!("{:?}", self.name),
                reason: "must not be empty",
            });
        }
        validate_mean(ScenarioField::MeanProcessTime, self.mean_process_time)?;
        validate_mean(ScenarioField::MeanDta, self.mean_dta)?;
        if !(0.0..=1.0).contains(&self.p_admit) {
            return Err(ScenarioError::InvalidParameter {
                field: ScenarioField::PAdmit,
                value: self.p_admit.to_string(),
                reason: "must be a probability in [0, 1]",
            });
        }
        Ok(())
    }
}

fn validate_mean(field: ScenarioField, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::InvalidParameter {
            field,
            value: value.to_string(),
            reason: "must be finite and greater than zero",
        })
    }
}

/// Unvalidated wire form of a scenario; omitted parameters take defaults.
#[derive(Deserialize)]
struct ScenarioDefinition {
    name: String,
    #[serde(default = "default_mean_process_time")]
    mean_process_time: f64,
    #[serde(default = "default_mean_dta")]
    mean_dta: f64,
    #[serde(default = "default_p_admit")]
    p_admit: f64,
}

fn default_mean_process_time() -> f64 {
    DEFAULT_MEAN_PROCESS_TIME
}

fn default_mean_dta() -> f64 {
    DEFAULT_MEAN_DTA
}

fn default_p_admit() -> f64 {
    DEFAULT_P_ADMIT
}

impl TryFrom<ScenarioDefinition> for ScenarioConfiguration {
    type Error = ScenarioError;

    fn try_from(def: ScenarioDefinition) -> Result<Self, Self::Error> {
        Self::with_parameters(def.name, def.mean_process_time, def.mean_dta, def.p_admit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_defaults() {
        let scenario = ScenarioConfiguration::new("x").unwrap();
        assert_eq!(scenario.name(), "x");
        assert_eq!(scenario.mean_process_time(), 150.0);
        assert_eq!(scenario.mean_dta(), 120.0);
        assert_eq!(scenario.p_admit(), 0.4);
    }

    #[test]
    fn test_reference_scenarios() {
        let baseline = ScenarioConfiguration::baseline();
        assert_eq!(baseline, ScenarioConfiguration::new("baseline").unwrap());

        let flu = ScenarioConfiguration::flu_pandemic();
        assert_eq!(
            flu,
            ScenarioConfiguration::with_parameters("flu_pandemic", 160.0, 180.0, 0.7).unwrap()
        );
    }

    #[test]
    fn test_set_is_rejected_for_every_field() {
        let scenario = ScenarioConfiguration::new("x").unwrap();
        let before = scenario.clone();

        for field in ScenarioField::ALL {
            let err = scenario.set(field, 10_000.0).unwrap_err();
            assert_eq!(
                err,
                ScenarioError::ImmutabilityViolation {
                    scenario: "x".to_string(),
                    field,
                }
            );
        }
        assert!(scenario.set(ScenarioField::Name, "renamed").is_err());

        assert_eq!(scenario, before, "Failed writes must not change the scenario");
    }

    #[test]
    fn test_new_rejects_blank_name() {
        for name in ["", "   "] {
            let err = ScenarioConfiguration::new(name).unwrap_err();
            assert!(matches!(
                err,
                ScenarioError::InvalidParameter {
                    field: ScenarioField::Name,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_with_parameter_derives_new_instance() {
        let baseline = ScenarioConfiguration::baseline();
        let derived = baseline
            .with_parameter(ScenarioField::MeanProcessTime, 10_000.0)
            .unwrap();

        assert_eq!(derived.mean_process_time(), 10_000.0);
        assert_eq!(derived.mean_dta(), baseline.mean_dta());
        assert_eq!(baseline.mean_process_time(), 150.0);
    }

    #[test]
    fn test_with_parameter_rejects_name() {
        let err = ScenarioConfiguration::baseline()
            .with_parameter(ScenarioField::Name, 1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::InvalidParameter {
                field: ScenarioField::Name,
                ..
            }
        ));
    }

    #[test]
    fn test_renamed() {
        let renamed = ScenarioConfiguration::flu_pandemic().renamed("flu_2").unwrap();
        assert_eq!(renamed.name(), "flu_2");
        assert_eq!(renamed.p_admit(), 0.7);
        assert!(ScenarioConfiguration::baseline().renamed("  ").is_err());
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            (0.0, 120.0, 0.4, ScenarioField::MeanProcessTime),
            (-1.0, 120.0, 0.4, ScenarioField::MeanProcessTime),
            (f64::INFINITY, 120.0, 0.4, ScenarioField::MeanProcessTime),
            (150.0, 0.0, 0.4, ScenarioField::MeanDta),
            (150.0, f64::NAN, 0.4, ScenarioField::MeanDta),
            (150.0, 120.0, -0.1, ScenarioField::PAdmit),
            (150.0, 120.0, 1.5, ScenarioField::PAdmit),
            (150.0, 120.0, f64::NAN, ScenarioField::PAdmit),
        ];

        for (mean_process_time, mean_dta, p_admit, expected) in cases {
            let err =
                ScenarioConfiguration::with_parameters("x", mean_process_time, mean_dta, p_admit)
                    .unwrap_err();
            match err {
                ScenarioError::InvalidParameter { field, .. } => assert_eq!(field, expected),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_probability_bounds_are_inclusive() {
        assert!(ScenarioConfiguration::with_parameters("never", 150.0, 120.0, 0.0).is_ok());
        assert!(ScenarioConfiguration::with_parameters("always", 150.0, 120.0, 1.0).is_ok());
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ScenarioField::ALL {
            assert_eq!(field.to_string().parse::<ScenarioField>().unwrap(), field);
        }
        assert_eq!(
            "triage".parse::<ScenarioField>().unwrap_err(),
            ScenarioError::UnknownField("triage".to_string())
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let scenario: ScenarioConfiguration =
            serde_json::from_str(r#"{"name": "surge", "p_admit": 0.55}"#).unwrap();
        assert_eq!(scenario.name(), "surge");
        assert_eq!(scenario.mean_process_time(), DEFAULT_MEAN_PROCESS_TIME);
        assert_eq!(scenario.mean_dta(), DEFAULT_MEAN_DTA);
        assert_eq!(scenario.p_admit(), 0.55);
    }

    #[test]
    fn test_deserialize_validates() {
        let result: Result<ScenarioConfiguration, _> =
            serde_json::from_str(r#"{"name": "bad", "mean_dta": -5.0}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("mean_dta"), "unexpected error: {err}");
    }

    #[test]
    fn test_serialize_round_trip() {
        let flu = ScenarioConfiguration::flu_pandemic();
        let json = serde_json::to_string(&flu).unwrap();
        let parsed: ScenarioConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, flu);
    }

    #[test]
    fn test_shared_across_threads() {
        let scenario = Arc::new(ScenarioConfiguration::baseline());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let scenario = Arc::clone(&scenario);
                std::thread::spawn(move || scenario.mean_process_time())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 150.0);
        }
    }
}
