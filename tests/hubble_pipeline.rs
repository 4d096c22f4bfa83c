use approx::assert_relative_eq;
use hubble_fit::{
    least_squares, polyfit_line, ChartConfig, ChartData, FitError, Report, SampleSet,
    write_report, AGREEMENT_TOLERANCE, HUBBLE_DISTANCES_MPC, HUBBLE_VELOCITIES_KMS,
};

#[test]
fn test_full_pipeline() {
    let samples = SampleSet::new(&HUBBLE_DISTANCES_MPC, &HUBBLE_VELOCITIES_KMS).unwrap();
    let fit = least_squares(&samples).unwrap();
    let check = polyfit_line(&samples).unwrap();

    assert!(check.agrees_with(&fit, AGREEMENT_TOLERANCE));
    assert_relative_eq!(fit.slope, 454.158, max_relative = 1e-5);

    let report = Report::new(fit, Some(check)).to_string();
    assert!(report.starts_with(" Least squares fit of 24 data points\n"));
    assert!(report.contains("454.16 +-  75.24"));

    let chart = ChartData::new(&samples, &fit, Some(&check), &ChartConfig::default());
    assert_eq!(chart.points.len(), samples.len());
    assert_eq!(chart.fit_line.len(), 21);
    assert_eq!(chart.fit_line.last().unwrap()[0], 2.0);
}

#[test]
fn test_two_points_never_fit() {
    let samples = SampleSet::new(&[0.5, 1.0], &[100.0, 200.0]).unwrap();
    assert_eq!(
        least_squares(&samples).unwrap_err(),
        FitError::InsufficientData { n: 2 }
    );
}

#[test]
fn test_single_distance_is_degenerate() {
    let distances = [2.0; 4];
    let velocities = [500.0, 850.0, 800.0, 1090.0];
    let samples = SampleSet::new(&distances, &velocities).unwrap();
    assert!(matches!(
        least_squares(&samples),
        Err(FitError::DegenerateDenominator { .. })
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        FitError::InsufficientData { n: 1 }.to_string(),
        "Need at least two data points! (got 1)"
    );
    assert!(FitError::DegenerateDenominator { denom: 0.0 }
        .to_string()
        .starts_with("Denominator is zero!"));
}

#[test]
fn test_report_only_written_on_success() {
    let distances = [123_456.789; 3];
    let velocities = [0.0, 10.0, 20.0];
    let samples = SampleSet::new(&distances, &velocities).unwrap();
    let mut out = Vec::new();
    assert!(matches!(
        write_report(&samples, &mut out),
        Err(FitError::DegenerateDenominator { .. })
    ));
    assert!(out.is_empty());

    let report = write_report(&SampleSet::hubble_1929(), &mut out).unwrap();
    assert_eq!(report.fit.n, 24);
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("Estimated v error bar sigma = 232.9 km/s"));
}
