use std::{fmt, io};

use log::{error, warn};

use crate::{
    cross_check::{polyfit_line, CrossCheckFit},
    data::SampleSet,
    error::{FitError, FitResult},
    lin_reg::{least_squares, LinearRegression},
    AGREEMENT_TOLERANCE,
};

const SEPARATOR: &str = " -----------------------------------";

#[derive(Debug)]
pub struct Report {
    pub fit: LinearRegression,
    pub cross_check: Option<CrossCheckFit>,
}

impl Report {
    pub fn new(fit: LinearRegression, cross_check: Option<CrossCheckFit>) -> Self {
        Self { fit, cross_check }
    }
}

/// Fits `samples`, cross-checks the result and writes the report to `out`.
///
/// Nothing is written when the fit itself fails. A failed cross-check is
/// logged and the report goes out without it.
pub fn write_report<W: io::Write>(samples: &SampleSet, out: &mut W) -> FitResult<Report> {
    let fit = least_squares(samples)?;

    let cross_check = match polyfit_line(samples) {
        Ok(check) => {
            if !check.agrees_with(&fit, AGREEMENT_TOLERANCE) {
                warn!(
                    "least squares fit disagrees with cross-check: b = {} vs {}, a = {} vs {}",
                    fit.slope, check.slope, fit.intercept, check.intercept
                );
            }
            Some(check)
        }
        Err(err) => {
            error!("{}", err);
            None
        }
    };

    let report = Report::new(fit, cross_check);
    write!(out, "{}", report).map_err(|err| FitError::Output(err.to_string()))?;
    Ok(report)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fit = &self.fit;
        writeln!(f, " Least squares fit of {} data points", fit.n)?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(
            f,
            " Hubble's constant slope   b = {:6.2} +- {:6.2}  km/s/Mpc",
            fit.slope, fit.sigma_slope
        )?;
        writeln!(
            f,
            " Intercept with r axis     a = {:6.2} +- {:6.2}  km/s",
            fit.intercept, fit.sigma_intercept
        )?;
        writeln!(f, " Estimated v error bar sigma = {:.1} km/s", fit.sigma)?;
        if let Some(check) = &self.cross_check {
            writeln!(
                f,
                " cross-check values:       b = {:6.2} +- {:6.2}  km/s/Mpc",
                check.slope, check.sigma_slope
            )?;
            writeln!(
                f,
                "                           a = {:6.2} +- {:6.2}  km/s",
                check.intercept, check.sigma_intercept
            )?;
        }
        Ok(())
    }
}
