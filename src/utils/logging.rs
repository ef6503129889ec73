//! Logging initialisation
//!
//! JSON structured logs go to stderr so stdout stays untouched for the Sensu
//! backend. When `LOG_DIR` is set, records are also appended to a daily file.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise the global tracing subscriber.
///
/// The level is taken from `RUST_LOG`; the default is
/// `info,sensu_teams_handler=debug`.
///
/// The returned guards must be held by `main` until exit, otherwise buffered
/// records are lost when the process terminates.
pub fn init_logging() -> Vec<WorkerGuard> {
    let mut guards = Vec::with_capacity(2);

    let (stderr_writer, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());
    guards.push(stderr_guard);

    let stderr_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false)
        .with_writer(stderr_writer);

    let file_layer = std::env::var("LOG_DIR").ok().map(|log_dir| {
        let file_appender = rolling::daily(log_dir, "handler.log");
        let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);
        guards.push(file_guard);

        fmt::layer()
            .json()
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_current_span(true)
            .flatten_event(false)
            .with_ansi(false)
            .with_writer(file_writer)
    });

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sensu_teams_handler=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .or_else(|err| {
            // Detect "already initialized" via source downcasting
            use std::error::Error;
            if err
                .source()
                .and_then(|s| s.downcast_ref::<tracing::dispatcher::SetGlobalDefaultError>())
                .is_some()
            {
                return Ok(());
            }
            eprintln!("Failed to initialize tracing: {}", err);
            Err(err)
        })
        .ok(); // a broken logger must not stop the notification

    guards
}
