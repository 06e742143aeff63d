//! Log setup for the REPL.
//!
//! Logs go to a daily-rolling file so they never interleave with the chat.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use visa_core::paths::AdvisorPaths;
use visa_core::AdvisorConfig;

const LOG_ENV: &str = "VISA_ADVISOR_LOG";

/// Installs the global subscriber. The returned guard must be kept alive
/// until exit so buffered lines are flushed.
pub fn init(config: &AdvisorConfig) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let appender = AdvisorPaths::logs_dir().ok().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("visa-advisor")
            .filename_suffix("log")
            .build(dir)
            .ok()
    });

    match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(true),
                )
                .init();
            tracing::info!(level = %config.log_level, "Logging initialized");
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(EnvFilter::new("warn"))
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
            tracing::warn!("No log directory available, logging warnings to stderr");
            None
        }
    }
}
