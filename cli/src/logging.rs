use std::path::PathBuf;
use std::sync::OnceLock;

use dagmenu_core::api::{get_dagmenu_data_dir, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

// Scheduler round-trips are traced under `dagmenu.http`; the client stack
// below it is only interesting when it fails.
const QUIET_DEPS: &str = "hyper=warn,hyper_util=warn,reqwest=warn";

/// Where the log file goes: the configured directory, else `~/.dagmenu/logs`,
/// else the OS temp dir.
pub fn log_directory(logging: &LoggingConfig, data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return PathBuf::from(dir);
    }
    match data_dir {
        Some(base) => base.join("logs"),
        None => std::env::temp_dir().join("dagmenu"),
    }
}

/// `RUST_LOG` wins over the configured level.
pub fn log_filter(level: &str, rust_log: Option<String>) -> Result<EnvFilter, CliError> {
    let directives = match rust_log.filter(|v| !v.trim().is_empty()) {
        Some(v) => v,
        None => format!("{},{QUIET_DEPS}", level.trim()),
    };
    EnvFilter::try_new(&directives)
        .map_err(|e| CliError::Logging(format!("invalid filter {directives:?}: {e}")))
}

pub fn init_tracing(logging: &LoggingConfig) -> Result<(), CliError> {
    if !logging.enabled {
        return Ok(());
    }
    if !logging.console && !logging.file {
        return Err(CliError::Logging(
            "logging enabled with neither console nor file output".into(),
        ));
    }

    let filter = log_filter(&logging.level, std::env::var("RUST_LOG").ok())?;

    let file_writer = if logging.file {
        let dir = log_directory(logging, get_dagmenu_data_dir().ok());
        std::fs::create_dir_all(&dir).map_err(|e| {
            CliError::Logging(format!("create log dir {} failed: {e}", dir.display()))
        })?;
        let appender = tracing_appender::rolling::daily(dir, "dagmenu.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        Some(writer)
    } else {
        None
    };

    // stdout carries the event stream.
    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });
    let file_layer = file_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn logging(directory: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            directory: directory.map(str::to_string),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_configured_directory_wins() {
        let dir = log_directory(&logging(Some(" /var/log/dagmenu ")), Some("/home/u/.dagmenu".into()));
        assert_eq!(dir, PathBuf::from("/var/log/dagmenu"));
    }

    #[test]
    fn test_defaults_to_data_dir_logs() {
        let dir = log_directory(&logging(Some("")), Some("/home/u/.dagmenu".into()));
        assert_eq!(dir, PathBuf::from("/home/u/.dagmenu/logs"));
    }

    #[test]
    fn test_falls_back_to_temp_without_home() {
        let dir = log_directory(&logging(None), None);
        assert_eq!(dir, std::env::temp_dir().join("dagmenu"));
    }

    #[test]
    fn test_filter_rejects_bad_level() {
        let err = log_filter("dagmenu_core=loud", None).unwrap_err();
        assert!(matches!(err, CliError::Logging(_)));
        assert!(log_filter("info", Some("  ".into())).is_ok());
        assert!(log_filter("nonsense=loud", Some("debug".into())).is_ok());
    }

    #[test]
    fn test_neither_output_is_an_error() {
        let cfg = LoggingConfig {
            console: false,
            file: false,
            ..LoggingConfig::default()
        };
        assert!(matches!(init_tracing(&cfg), Err(CliError::Logging(_))));
    }
}
