use thiserror::Error;

/// Ways a fit over a [`SampleSet`](crate::SampleSet) can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("Need at least two data points! (got {n})")]
    InsufficientData { n: usize },

    #[error("Denominator is zero! ({denom:e})")]
    DegenerateDenominator { denom: f64 },

    #[error("Distances and velocities differ in length: {distances} vs {velocities}")]
    LengthMismatch { distances: usize, velocities: usize },

    #[error("cross-check fit failed: {0}")]
    CrossCheck(String),

    #[error("could not write report: {0}")]
    Output(String),
}

pub type FitResult<T> = Result<T, FitError>;
