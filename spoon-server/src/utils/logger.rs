//! Logging Infrastructure
//!
//! Human-readable output on stdout; when `LOG_DIR` names an existing
//! directory, output goes to a daily-rolling file there instead.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "spoon_server=info,tower_http=info,http_access=info";

/// Initialize the logger
pub fn init_logger() {
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_dir.as_deref());
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_dir: Option<&str>) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "spoon-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
