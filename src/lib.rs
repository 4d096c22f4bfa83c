mod app;
mod chart;
mod cross_check;
mod data;
mod error;
mod lin_reg;
mod logging;
mod report;

pub use app::show_chart;
pub use chart::{linspace, ChartConfig, ChartData};
pub use cross_check::{polyfit_line, CrossCheckFit};
pub use data::{SampleSet, HUBBLE_DISTANCES_MPC, HUBBLE_VELOCITIES_KMS};
pub use error::{FitError, FitResult};
pub use lin_reg::{least_squares, LinearRegression, Sums};
pub use logging::init_native_log;
pub use report::{write_report, Report};

/// Below this `n * S_xx - S_x^2` is treated as zero.
pub const DEGENERATE_DENOMINATOR: f64 = 1e-6;
/// Relative tolerance between the closed-form fit and the cross-check.
pub const AGREEMENT_TOLERANCE: f64 = 1e-6;

pub const CHART_X_MIN: f64 = 0.0;
pub const CHART_X_MAX: f64 = 2.0;
pub const CHART_SAMPLES: usize = 21;
