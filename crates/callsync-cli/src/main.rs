//! callsync - copies ward callings from the reporting portal into a Google Sheet.
//!
//! Takes no arguments. Configuration comes from environment variables,
//! optionally via a `.env` file in the working directory. The exit status
//! reports whether the run completed.

use std::io;
use std::process::ExitCode;

use callsync_core::utils::format_run_timestamp;
use callsync_core::{sync_callings, Config, RunOutcome};
use chrono::Local;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directory for daily rolling log files, if set
const LOG_DIR_ENV: &str = "CALLSYNC_LOG_DIR";

const LOG_FILE_PREFIX: &str = "callsync.log";

/// Initialize the tracing subscriber for logging.
/// The returned guard must live until exit so buffered file logs are flushed.
fn init_tracing() -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match std::env::var(LOG_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    guard
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let _log_guard = init_tracing();
    info!("callsync starting");

    let result: anyhow::Result<RunOutcome> = match Config::load() {
        Ok(config) => {
            info!(
                credential_source = ?config.credential_source,
                session_target = ?config.browser.target,
                headless = config.browser.headless,
                "Configuration loaded"
            );
            sync_callings(&config).await
        }
        Err(e) => Err(e.into()),
    };

    let finished_at = format_run_timestamp(Local::now().naive_local());
    match result {
        Ok(outcome) => {
            info!(
                records = outcome.records,
                published = outcome.published,
                classes = outcome.enrichment.enriched,
                "Full run completed successfully: {}",
                finished_at
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{:#}", e), "Full run failed: {}", finished_at);
            ExitCode::FAILURE
        }
    }
}
