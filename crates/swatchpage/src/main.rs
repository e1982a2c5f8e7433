use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SWATCHPAGE_LOG=debug`.
const LOG_ENV: &str = "SWATCHPAGE_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    init_logging();
    swatchpage::cli::run(std::env::args_os())
}
