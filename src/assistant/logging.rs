//! Log file bootstrap.
//!
//! Logs go to `<home>/logs/assistant*.log`, never to the terminal: stdout
//! belongs to the REPL. Initialization happens at most once per process and
//! never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::Path;

const LOG_FILE_BASENAME: &str = "assistant";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Lowercases and checks a level name.
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    let lower = level.trim().to_ascii_lowercase();
    LEVELS
        .iter()
        .find(|l| **l == lower)
        .copied()
        .ok_or_else(|| format!("unsupported log level `{}`", level))
}

/// Starts file logging under `log_dir`. Later calls are no-ops.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let level = normalize_level(level)?;

    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    let _ = LOGGER.set(handle);
    info!(
        "event=start version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );
    Ok(())
}
