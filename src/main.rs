use hubble_fit::{init_native_log, show_chart, write_report, ChartConfig, ChartData, SampleSet};

fn main() {
    init_native_log();

    let samples = SampleSet::hubble_1929();
    let report = match write_report(&samples, &mut std::io::stdout()) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error! {}", err);
            std::process::exit(1);
        }
    };

    let config = ChartConfig::default();
    let chart = ChartData::new(
        &samples,
        &report.fit,
        report.cross_check.as_ref(),
        &config,
    );
    show_chart(chart, &report, config);
}
