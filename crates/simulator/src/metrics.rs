//! Summary statistics for time in department.

use hdrhistogram::{CreationError, Histogram, RecordError};
use thiserror::Error;

/// Significant figures kept by the percentile histogram.
const SIGNIFICANT_FIGURES: u8 = 3;

/// Distribution summary of time in department, in minutes.
///
/// Mean, min and max are exact. Percentiles are read from a histogram at
/// whole-minute resolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeInDepartmentSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub p50: u64,
    pub p90: u64,
    pub p95: u64,
    pub p99: u64,
}

impl TimeInDepartmentSummary {
    /// Summarise a sample of total times. An empty sample yields an
    /// all-zero summary.
    pub fn from_samples(samples: &[f64]) -> Result<Self, MetricsError> {
        if samples.is_empty() {
            return Ok(Self::default());
        }

        let mut histogram = Histogram::<u64>::new(SIGNIFICANT_FIGURES)?;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for &sample in samples {
            histogram.record(sample.round() as u64)?;
            sum += sample;
            min = min.min(sample);
            max = max.max(sample);
        }

        Ok(Self {
            count: samples.len(),
            mean: sum / samples.len() as f64,
            min,
            max,
            p50: histogram.value_at_quantile(0.50),
            p90: histogram.value_at_quantile(0.90),
            p95: histogram.value_at_quantile(0.95),
            p99: histogram.value_at_quantile(0.99),
        })
    }
}

/// Errors building a summary.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to create histogram: {0}")]
    Creation(#[from] CreationError),

    #[error("Failed to record sample: {0}")]
    Record(#[from] RecordError),
}
