//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr. When a log file or directory is
//! configured, JSON lines are also written there through a non-blocking
//! `tracing-appender` writer; the returned [`LogGuard`] must live until exit
//! so buffered lines are flushed.
//!
//! Log file resolution, first match wins:
//! 1. `JOBBMATCH_LOG_PATH` (exact file, no rotation)
//! 2. `JOBBMATCH_LOG_DIR` (daily rotation)
//! 3. `log_dir` from config (daily rotation)

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "JOBBMATCH_LOG_PATH";
const LOG_DIR_ENV: &str = "JOBBMATCH_LOG_DIR";
const LOG_FILE_PREFIX: &str = "jobbmatch.jsonl";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file path.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to the configured `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
            return Self {
                log_path: Some(path),
                log_dir: None,
            };
        }
        Self {
            log_path: None,
            log_dir: env_dir
                .filter(|d| !d.as_os_str().is_empty())
                .or(config_dir),
        }
    }

    /// Whether any file logging is configured.
    pub const fn writes_file(&self) -> bool {
        self.log_path.is_some() || self.log_dir.is_some()
    }
}

/// Flushes file logs on drop.
#[derive(Debug)]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Build the global filter. `RUST_LOG` wins when set; otherwise `--quiet`
/// forces `error`, `-v` raises to `debug`, `-vv` to `trace`, and the
/// configured level applies by default.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(filter_directive(quiet, verbose, default_level))
}

fn filter_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Stderr stays at `warn` unless asked for more, so command output is not
/// drowned in progress events.
const fn stderr_level(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the log directory cannot be created or a subscriber is already
/// installed.
pub fn init_observability(
    cfg: &ObservabilityConfig,
    filter: EnvFilter,
    quiet: bool,
    verbose: u8,
) -> anyhow::Result<LogGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(stderr_level(quiet, verbose));

    let (file_layer, guard) = match file_appender(cfg)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(LogGuard { _file: guard })
}

fn file_appender(
    cfg: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = cfg.log_path {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("log path {} has no file name", path.display()))?;
        ensure_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::never(dir, file_name)));
    }
    if let Some(ref dir) = cfg.log_dir {
        ensure_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)));
    }
    Ok(None)
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
