use linregress::{FormulaRegressionBuilder, RegressionDataBuilder};

use crate::{
    data::SampleSet,
    error::{FitError, FitResult},
    lin_reg::LinearRegression,
};

/// Degree one polynomial fit computed by `linregress`, used to validate
/// [`least_squares`](crate::least_squares).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossCheckFit {
    pub slope: f64,
    pub intercept: f64,
    pub sigma_slope: f64,
    pub sigma_intercept: f64,
}

impl CrossCheckFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    pub fn agrees_with(&self, fit: &LinearRegression, rel_tol: f64) -> bool {
        close(self.slope, fit.slope, rel_tol) && close(self.intercept, fit.intercept, rel_tol)
    }
}

fn close(a: f64, b: f64, rel_tol: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
    (a - b).abs() <= rel_tol * scale
}

pub fn polyfit_line(samples: &SampleSet) -> FitResult<CrossCheckFit> {
    let columns = vec![
        ("v", samples.velocities().to_vec()),
        ("r", samples.distances().to_vec()),
    ];
    let data = RegressionDataBuilder::new()
        .build_from(columns)
        .map_err(|err| FitError::CrossCheck(err.to_string()))?;
    let model = FormulaRegressionBuilder::new()
        .data(&data)
        .formula("v ~ r")
        .fit()
        .map_err(|err| FitError::CrossCheck(err.to_string()))?;

    // intercept first, then the regressors in formula order
    match (model.parameters(), model.se()) {
        ([intercept, slope], [sigma_intercept, sigma_slope]) => Ok(CrossCheckFit {
            slope: *slope,
            intercept: *intercept,
            sigma_slope: *sigma_slope,
            sigma_intercept: *sigma_intercept,
        }),
        (params, _) => Err(FitError::CrossCheck(format!(
            "expected 2 parameters, got {}",
            params.len()
        ))),
    }
}
