use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system.
///
/// Logs go to stderr in compact form, filtered by `RUST_LOG` or a
/// `subhub=info` default (`subhub=debug` with `verbose`). When `log_file`
/// is set, structured JSON lines are also written through a non-blocking
/// daily-rolling appender. The returned guard flushes the file writer when
/// dropped; the caller should hold it for the life of the process.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Option<WorkerGuard> {
    let default_directive = if verbose { "subhub=debug" } else { "subhub=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let mut guard = None;
    let file_layer = log_file.map(|path| {
        let (writer, worker_guard) = tracing_appender::non_blocking(rolling_appender(&path));
        guard = Some(worker_guard);
        fmt::layer().with_writer(writer).with_ansi(false).json()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(file_layer)
        .init();

    guard
}

/// Daily-rolling appender for `path`, creating its directory if needed.
/// A bare file name rolls in the working directory.
fn rolling_appender(path: &Path) -> tracing_appender::rolling::RollingFileAppender {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let _ = std::fs::create_dir_all(&dir);

    let file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("subhub.log"));

    tracing_appender::rolling::daily(dir, file_name)
}
