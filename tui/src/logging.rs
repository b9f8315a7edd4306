use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub(crate) const LOG_FILENAME: &str = "admin-console.log";
const DEFAULT_FILTER: &str = "admin_tui=info,admin_core=info";

/// Route `tracing` output to `<log_dir>/admin-console.log`. The terminal is
/// owned by the UI, so nothing is written to stdout or stderr. Keep the
/// returned guard alive until exit so buffered lines are flushed.
pub(crate) fn init_file_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILENAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(env_filter);

    // A subscriber may already be installed in tests.
    let _ = tracing_subscriber::registry().with(file_layer).try_init();
    Ok(guard)
}
