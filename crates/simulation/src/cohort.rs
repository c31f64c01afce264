//! Raw per-patient draws and the outcomes derived from them.

/// The three independent draws for one cohort of patients.
///
/// All three vectors always have the same length, one entry per patient, in
/// patient order. A delay is drawn for every patient but only contributes to
/// the time in department of admitted patients.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientDraws {
    process_times: Vec<f64>,
    admissions: Vec<bool>,
    admit_delays: Vec<f64>,
}

impl PatientDraws {
    pub(crate) fn new(
        process_times: Vec<f64>,
        admissions: Vec<bool>,
        admit_delays: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(process_times.len(), admissions.len());
        debug_assert_eq!(process_times.len(), admit_delays.len());
        Self {
            process_times,
            admissions,
            admit_delays,
        }
    }

    /// Number of patients in the cohort.
    pub fn len(&self) -> usize {
        self.process_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.process_times.is_empty()
    }

    pub fn process_times(&self) -> &[f64] {
        &self.process_times
    }

    pub fn admissions(&self) -> &[bool] {
        &self.admissions
    }

    /// Decision-to-admit delays, including the discarded draws for patients
    /// who were not admitted.
    pub fn admit_delays(&self) -> &[f64] {
        &self.admit_delays
    }

    pub fn admitted_count(&self) -> usize {
        self.admissions.iter().filter(|&&admitted| admitted).count()
    }

    /// Per-patient outcomes in patient order.
    pub fn outcomes(&self) -> impl Iterator<Item = PatientOutcome> + '_ {
        self.process_times
            .iter()
            .zip(&self.admissions)
            .zip(&self.admit_delays)
            .enumerate()
            .map(|(index, ((&process_time, &admitted), &delay))| {
                let admit_delay = admitted.then_some(delay);
                PatientOutcome {
                    index,
                    process_time,
                    admitted,
                    admit_delay,
                    total_time: process_time + admit_delay.unwrap_or(0.0),
                }
            })
    }

    /// Total time in department for every patient.
    ///
    /// Admitted patients come first, followed by those who were not
    /// admitted. Each group keeps patient order, but the groups are not
    /// interleaved, so the i-th value is not necessarily the i-th patient.
    pub fn total_times(&self) -> Vec<f64> {
        let mut admitted = Vec::with_capacity(self.len());
        let mut not_admitted = Vec::new();

        for outcome in self.outcomes() {
            if outcome.admitted {
                admitted.push(outcome.total_time);
            } else {
                not_admitted.push(outcome.total_time);
            }
        }

        admitted.append(&mut not_admitted);
        admitted
    }
}

/// What happened to a single patient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatientOutcome {
    /// Position of the patient in the cohort.
    pub index: usize,

    /// Triage, assessment and treatment time.
    pub process_time: f64,

    /// Whether the patient was admitted.
    pub admitted: bool,

    /// Decision-to-admit delay; `None` for patients who were not admitted.
    pub admit_delay: Option<f64>,

    /// Total time in department.
    pub total_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draws() -> PatientDraws {
        PatientDraws::new(
            vec![10.0, 20.0, 30.0, 40.0],
            vec![false, true, false, true],
            vec![1.0, 2.0, 3.0, 4.0],
        )
    }

    #[test]
    fn test_total_times_groups_admitted_first() {
        let draws = sample_draws();
        assert_eq!(draws.total_times(), vec![22.0, 44.0, 10.0, 30.0]);
    }

    #[test]
    fn test_discarded_delays_do_not_affect_totals() {
        let draws = sample_draws();
        let altered = PatientDraws::new(
            draws.process_times().to_vec(),
            draws.admissions().to_vec(),
            vec![999.0, 2.0, 999.0, 4.0],
        );
        assert_eq!(draws.total_times(), altered.total_times());
    }

    #[test]
    fn test_outcomes_keep_patient_order() {
        let outcomes: Vec<_> = sample_draws().outcomes().collect();
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].index, 0);
        assert_eq!(outcomes[0].admit_delay, None);
        assert_eq!(outcomes[0].total_time, 10.0);
        assert_eq!(outcomes[1].admit_delay, Some(2.0));
        assert_eq!(outcomes[1].total_time, 22.0);
    }

    #[test]
    fn test_admitted_count() {
        assert_eq!(sample_draws().admitted_count(), 2);
    }

    #[test]
    fn test_empty_cohort() {
        let draws = PatientDraws::default();
        assert!(draws.is_empty());
        assert!(draws.total_times().is_empty());
        assert_eq!(draws.outcomes().count(), 0);
    }
}
