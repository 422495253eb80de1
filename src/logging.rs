//! Process-wide logging setup
//!
//! Logging is initialized exactly once at startup by [`init_logging`], which
//! installs `env_logger` as the `log` backend and hands back a
//! [`SharedLogger`]. Components that report user-visible outcomes take that
//! handle explicitly instead of reaching for the global logger, which keeps
//! them testable with a capturing logger.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::platform::Platform;
use env_logger::{Builder, Env, Target};
use log::{debug, warn, Level, Log, Metadata, Record};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable that overrides the configured log level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Folder name used for log files, matching the product name.
const PRODUCT_DIR_NAME: &str = "Threat Dragon";

/// Log file name
const LOG_FILE_NAME: &str = "main.log";

/// Injected logger handle.
pub type SharedLogger = Arc<dyn Log>;

/// Forwards every record to whatever logger is installed globally.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalLogger;

impl Log for GlobalLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}

/// Write one record to an injected logger.
pub fn emit(logger: &dyn Log, target: &str, level: Level, args: fmt::Arguments<'_>) {
    let metadata = Metadata::builder().level(level).target(target).build();
    if logger.enabled(&metadata) {
        logger.log(
            &Record::builder()
                .metadata(metadata)
                .args(args)
                .module_path(Some(target))
                .build(),
        );
    }
}

/// Where the log file lives on each platform.
///
/// - **macOS**: `~/Library/Logs/Threat Dragon/main.log`
/// - **Windows**: `%APPDATA%\Threat Dragon\logs\main.log`
/// - **Linux**: `~/.config/Threat Dragon/logs/main.log`
pub fn log_file_path(platform: Platform) -> Option<PathBuf> {
    match platform {
        Platform::MacOs => dirs::home_dir().map(|home| {
            home.join("Library")
                .join("Logs")
                .join(PRODUCT_DIR_NAME)
                .join(LOG_FILE_NAME)
        }),
        Platform::Windows | Platform::Other => dirs::config_dir().map(|base| {
            base.join(PRODUCT_DIR_NAME)
                .join("logs")
                .join(LOG_FILE_NAME)
        }),
    }
}

/// Open `path` for appending, creating its folder first.
fn open_log_at(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

fn open_log_file(platform: Platform) -> Result<(PathBuf, File)> {
    let path = log_file_path(platform).ok_or(Error::ConfigDirNotFound)?;
    let file = open_log_at(&path)?;
    Ok((path, file))
}

/// Writes every line to the console and to the log file.
struct ConsoleAndFile<C, F> {
    console: C,
    file: F,
}

impl<C: Write, F: Write> Write for ConsoleAndFile<C, F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // A closed console must not stop file logging
        let _ = self.console.write_all(buf);
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = self.console.flush();
        self.file.flush()
    }
}

/// Install the global logger.
///
/// The level comes from `LOG_LEVEL` when set, otherwise from the settings.
/// Output always goes to stderr. With `log_to_file` enabled it is also
/// appended to [`log_file_path`]; if that file cannot be opened, logging
/// stays on stderr alone.
///
/// # Errors
///
/// Returns `Error::LoggerInit` when a logger was already installed.
pub fn init_logging(settings: &Settings, platform: Platform) -> Result<SharedLogger> {
    let configured = settings.log_level.as_filter();
    let mut builder = Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV, configured));

    let mut file_error = None;
    if settings.log_to_file {
        match open_log_file(platform) {
            Ok((path, file)) => {
                if cfg!(debug_assertions) {
                    eprintln!("** Copying console log to {}", path.display());
                }
                builder.target(Target::Pipe(Box::new(ConsoleAndFile {
                    console: io::stderr(),
                    file,
                })));
            }
            Err(e) => file_error = Some(e),
        }
    }

    builder.try_init()?;

    if let Some(e) = file_error {
        warn!("Log file unavailable, logging to stderr: {}", e);
    }
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| configured.to_string());
    debug!("Log level is set to: {}", level);

    Ok(Arc::new(GlobalLogger))
}

// ─────────────────────────────────────────────────────────────────────────────
// Test support
// ─────────────────────────────────────────────────────────────────────────────
