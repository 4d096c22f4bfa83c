use itertools::Itertools;

use crate::{
    cross_check::CrossCheckFit, data::SampleSet, lin_reg::LinearRegression, CHART_SAMPLES,
    CHART_X_MAX, CHART_X_MIN,
};

/// `count` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        stop
                    } else {
                        start + i as f64 * step
                    }
                })
                .collect_vec()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub samples: usize,
    pub x_label: String,
    pub y_label: String,
    pub data_name: String,
    pub fit_name: String,
    pub cross_check_name: String,
    pub point_radius: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_min: CHART_X_MIN,
            x_max: CHART_X_MAX,
            samples: CHART_SAMPLES,
            x_label: "Distance (Mpc)".to_string(),
            y_label: "Velocity (km/s)".to_string(),
            data_name: "Data".to_string(),
            fit_name: "Our fit".to_string(),
            cross_check_name: "Cross-check fit".to_string(),
            point_radius: 3.0,
        }
    }
}

/// Everything the viewer draws, precomputed.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub points: Vec<[f64; 2]>,
    pub fit_line: Vec<[f64; 2]>,
    pub cross_check_line: Option<Vec<[f64; 2]>>,
}

impl ChartData {
    pub fn new(
        samples: &SampleSet,
        fit: &LinearRegression,
        cross_check: Option<&CrossCheckFit>,
        config: &ChartConfig,
    ) -> Self {
        let xs = linspace(config.x_min, config.x_max, config.samples);
        let points = samples.points().map(|(x, y)| [x, y]).collect_vec();
        let fit_line = xs.iter().map(|&x| [x, fit.predict(x)]).collect_vec();
        let cross_check_line =
            cross_check.map(|check| xs.iter().map(|&x| [x, check.predict(x)]).collect_vec());
        Self {
            points,
            fit_line,
            cross_check_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cross_check::polyfit_line, lin_reg::least_squares};
    use approx::assert_relative_eq;

    #[test]
    fn linspace_covers_range() {
        let xs = linspace(0.0, 2.0, 21);
        assert_eq!(xs.len(), 21);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[20], 2.0);
        for (a, b) in xs.iter().tuple_windows() {
            assert_relative_eq!(b - a, 0.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
    }

    #[test]
    fn chart_series_follow_fits() {
        let samples = SampleSet::hubble_1929();
        let fit = least_squares(&samples).unwrap();
        let check = polyfit_line(&samples).unwrap();
        let chart = ChartData::new(&samples, &fit, Some(&check), &ChartConfig::default());

        assert_eq!(chart.points.len(), 24);
        assert_eq!(chart.fit_line.len(), 21);
        assert_relative_eq!(chart.fit_line[0][1], fit.intercept);
        assert_relative_eq!(chart.fit_line[20][1], fit.predict(2.0));

        let cross = chart.cross_check_line.unwrap();
        assert_eq!(cross.len(), 21);
        for (ours, theirs) in chart.fit_line.iter().zip(&cross) {
            assert_eq!(ours[0], theirs[0]);
            assert_relative_eq!(ours[1], theirs[1], max_relative = 1e-6, epsilon = 1e-6);
        }
    }

    #[test]
    fn chart_without_cross_check() {
        let samples = SampleSet::hubble_1929();
        let fit = least_squares(&samples).unwrap();
        let chart = ChartData::new(&samples, &fit, None, &ChartConfig::default());
        assert!(chart.cross_check_line.is_none());
    }
}
