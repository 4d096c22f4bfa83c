use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Installs the global subscriber. Diagnostics go to stderr so that stdout
/// only carries the fit report.
pub fn init_native_log() {
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .pretty()
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry().with(stderr_log).init();
}
