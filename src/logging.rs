use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn env_filter(debug: bool) -> EnvFilter {
    // When debug logging is disabled we force `info` level regardless of the
    // `RUST_LOG` environment variable.
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

/// Initialise logging. `debug` enables the `debug` level and lets `RUST_LOG`
/// override it. When `log_file` is set the output is also appended to that
/// file. Only the first successful call installs a subscriber.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let file_layer = log_file.as_deref().and_then(|path| {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let name = path.file_name()?;
        let appender = tracing_appender::rolling::never(dir, name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        Some(fmt::layer().with_writer(writer).with_ansi(false))
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter(debug))
        .with(fmt::layer())
        .with(file_layer)
        .try_init();
}
