use crate::{
    data::SampleSet,
    error::{FitError, FitResult},
    DEGENERATE_DENOMINATOR,
};

/// Running sums over a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sums {
    pub n: usize,
    pub s_x: f64,
    pub s_y: f64,
    pub s_xx: f64,
    pub s_xy: f64,
    /// sum of squared deviations of x from its mean
    pub s_dd: f64,
}

impl Sums {
    pub fn of(samples: &SampleSet) -> Self {
        let sums = samples.points().fold(
            Sums {
                n: 0,
                s_x: 0.0,
                s_y: 0.0,
                s_xx: 0.0,
                s_xy: 0.0,
                s_dd: 0.0,
            },
            |acc, (x, y)| Sums {
                n: acc.n + 1,
                s_x: acc.s_x + x,
                s_y: acc.s_y + y,
                s_xx: acc.s_xx + x * x,
                s_xy: acc.s_xy + x * y,
                s_dd: 0.0,
            },
        );
        if sums.n == 0 {
            return sums;
        }
        let mean_x = sums.s_x / sums.n as f64;
        let s_dd = samples
            .distances()
            .iter()
            .map(|x| x - mean_x)
            .fold(0.0, |acc, dev| acc + dev * dev);
        Sums { s_dd, ..sums }
    }

    /// `n * S_xx - S_x^2`, evaluated in centred form so it is never negative
    /// and exactly zero when every x is equal.
    pub fn denominator(&self) -> f64 {
        self.n as f64 * self.s_dd
    }
}

/// Fit of `v = intercept + slope * r` with its uncertainties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    pub n: usize,
    pub intercept: f64,
    pub slope: f64,
    /// residual standard deviation
    pub sigma: f64,
    pub sigma_intercept: f64,
    pub sigma_slope: f64,
}

impl LinearRegression {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Closed-form ordinary least squares.
pub fn least_squares(samples: &SampleSet) -> FitResult<LinearRegression> {
    let n = samples.len();
    if n <= 2 {
        return Err(FitError::InsufficientData { n });
    }

    let sums = Sums::of(samples);
    let denom = sums.denominator();
    if denom.abs() < DEGENERATE_DENOMINATOR {
        return Err(FitError::DegenerateDenominator { denom });
    }

    let n_f = n as f64;
    let intercept = (sums.s_xx * sums.s_y - sums.s_x * sums.s_xy) / denom;
    let slope = (n_f * sums.s_xy - sums.s_x * sums.s_y) / denom;

    // no residual degrees of freedom below three points
    let (sigma, sigma_intercept, sigma_slope) = if n > 2 {
        let squared_residuals = samples
            .points()
            .map(|(x, y)| y - (intercept + slope * x))
            .fold(0.0, |acc, res| acc + res * res);
        let variance = squared_residuals / (n_f - 2.0);
        (
            variance.sqrt(),
            (variance * sums.s_xx / denom).sqrt(),
            (variance * n_f / denom).sqrt(),
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    Ok(LinearRegression {
        n,
        intercept,
        slope,
        sigma,
        sigma_intercept,
        sigma_slope,
    })
}
