use super::metric::MetricKind;

/// Failures raised by the scoring engine itself.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("climate input must be a finite number, got {value}")]
    NonFiniteInput { value: f64 },
    #[error("{0} sub-score missing; all six metrics are required")]
    MissingMetric(MetricKind),
    #[error("score {value} is outside the 1-10 range")]
    OutOfRange { value: u8 },
}
