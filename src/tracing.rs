//! Logging setup
//!
//! The terminal belongs to the table, so logs only go to a file:
//! `~/.config/tabless/logs/tabless.log`, rotated daily.
//!
//! Filter with `RUST_LOG`, e.g. `RUST_LOG=tabless::table=trace` to follow
//! every fill cycle and demand.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the file subscriber
///
/// Without a writable config directory logging is simply disabled.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tabless.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_filter(filter),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry().with(file_layer).init();
}
