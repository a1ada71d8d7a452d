//! Tracing subscriber setup

use citynext_domain::LogLevel;
use tracing_subscriber::EnvFilter;

/// Filter directive for `level`, scoped so dependency noise stays at `warn`.
pub fn filter_directive(level: LogLevel) -> String {
    format!("warn,citynext={level},citynext_api={level},citynext_core={level},citynext_infra={level}")
}

/// Install the JSON log subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Calling this more
/// than once is harmless; only the first call installs a subscriber.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .try_init();
}
