//! Logging and tracing setup.
//!
//! Every run appends JSON-lines events to `suffixtab.jsonl` in the log
//! directory. With `-v`, human-readable events also go to stderr.
//!
//! Log directory resolution, highest precedence first:
//! 1. `SUFFIXTAB_LOG_PATH` (full file path)
//! 2. `SUFFIXTAB_LOG_DIR`
//! 3. `log_dir` from configuration
//! 4. the platform data-local directory, under `logs/`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const ENV_LOG_PATH: &str = "SUFFIXTAB_LOG_PATH";
const ENV_LOG_DIR: &str = "SUFFIXTAB_LOG_DIR";
const LOG_FILE_NAME: &str = "suffixtab.jsonl";

/// Where and how logs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory holding the log file.
    pub log_dir: PathBuf,
    /// Log file name inside `log_dir`.
    pub file_name: OsString,
    /// Also write human-readable events to stderr.
    pub stderr: bool,
}

impl ObservabilityConfig {
    /// Resolve the log location from the environment, then `config_log_dir`,
    /// then platform defaults.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH),
            std::env::var_os(ENV_LOG_DIR),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<OsString>,
        log_dir: Option<OsString>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let explicit_file = log_path.filter(|p| !p.is_empty()).map(PathBuf::from);
        if let Some(path) = explicit_file
            && let Some(file_name) = path.file_name()
        {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: dir,
                file_name: file_name.to_os_string(),
                stderr: false,
            };
        }

        let log_dir = log_dir
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .or(config_log_dir)
            .unwrap_or_else(default_log_dir);
        Self {
            log_dir,
            file_name: OsString::from(LOG_FILE_NAME),
            stderr: false,
        }
    }

    /// Enable or disable stderr output.
    #[must_use]
    pub const fn with_stderr(mut self, stderr: bool) -> Self {
        self.stderr = stderr;
        self
    }

    /// Full path of the log file.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.file_name)
    }
}

fn default_log_dir() -> PathBuf {
    suffixtab_core::config::user_data_local_dir()
        .map(|dir| dir.join("logs").into_std_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("suffixtab"))
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` selects `error`, `-v` selects
/// `debug`, `-vv` and beyond select `trace`, and the configured level
/// applies to the rest.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    EnvFilter::new(filter_directive(quiet, verbose, config_level))
}

fn filter_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global subscriber.
///
/// Returns the guard that flushes the log file on drop; keep it alive for
/// the whole process. When the log directory cannot be created, file
/// logging is skipped and a warning is emitted instead.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let appender = std::fs::create_dir_all(&config.log_dir)
        .map_err(anyhow::Error::from)
        .and_then(|()| {
            RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(config.file_name.to_string_lossy().into_owned())
                .build(&config.log_dir)
                .map_err(anyhow::Error::from)
        });
    let (file_layer, guard, file_error) = match appender {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Err(err) => (None, None, Some(err)),
    };

    let stderr_layer = config.stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(err) = file_error {
        tracing::warn!(
            dir = %config.log_dir.display(),
            error = %err,
            "file logging disabled"
        );
    }
    Ok(guard)
}
