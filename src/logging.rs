use std::path::PathBuf;
use std::sync::OnceLock;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

// The handle must stay alive for the process lifetime or the writer shuts down
static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Session log location: `<state dir>/desk/logs`
fn log_dir() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("desk").join("logs"))
}

/// Initialize rotating file logging once per process.
///
/// The TUI owns the terminal, so nothing may log to stdout/stderr after
/// startup; everything goes to files. `spec` is a flexi_logger level spec
/// ("info", "debug", ...). Calling twice is a no-op.
pub fn init(spec: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let dir = log_dir().ok_or_else(|| "no state directory available".to_string())?;
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("cannot create log directory {}: {e}", dir.display()))?;

    let logger = Logger::try_with_str(spec)
        .map_err(|e| format!("invalid log level {spec:?}: {e}"))?
        .log_to_file(FileSpec::default().directory(&dir).basename("desk"))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
        .map_err(|e| format!("cannot start logger: {e}"))?;

    let _ = LOGGER.set(logger);
    log::info!(
        "desk v{} started, logging to {}",
        env!("CARGO_PKG_VERSION"),
        dir.display()
    );
    Ok(())
}
