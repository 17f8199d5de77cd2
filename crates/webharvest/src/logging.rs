//! Log sink configuration.
//!
//! Three thresholds gate diagnostics: a process-wide root level, a console
//! sink level, and a file sink level. All three names are validated against
//! the five-level set before any sink is attached; a bad name rejects the
//! whole configuration with no partial state. Installation happens once per
//! process; later calls keep the existing sinks.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use tracing::{error, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::error::{HarvestError, Result};

/// Severity names accepted by [`configure_logging`], ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Case-insensitive parse. Logs which parameter carried the bad name
    /// before rejecting, so a misconfigured caller sees the valid set.
    pub fn parse(param: &'static str, name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" => Ok(Severity::Critical),
            _ => {
                error!(
                    level = name,
                    "logging level unavailable for {param}; valid levels: DEBUG INFO WARNING ERROR CRITICAL"
                );
                Err(HarvestError::InvalidLogLevel {
                    param,
                    given: name.to_string(),
                })
            }
        }
    }

    /// tracing has four ceilings; CRITICAL shares ERROR.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Severity::Debug => LevelFilter::DEBUG,
            Severity::Info => LevelFilter::INFO,
            Severity::Warning => LevelFilter::WARN,
            Severity::Error | Severity::Critical => LevelFilter::ERROR,
        }
    }

    fn directive(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error | Severity::Critical => "error",
        }
    }
}

/// Sink configuration: where the log file lives and the three thresholds.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory for the log file; current directory when `None`.
    pub path: Option<PathBuf>,
    pub filename: String,
    pub root_level: String,
    pub console_level: String,
    pub file_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            filename: "webharvest.log".into(),
            root_level: "DEBUG".into(),
            console_level: "INFO".into(),
            file_level: "WARNING".into(),
        }
    }
}

static CONFIGURED: OnceLock<()> = OnceLock::new();

/// Install the console and file sinks.
///
/// Validates every level name first; the first invalid one aborts the call
/// and nothing is attached. A second successful call is a no-op with a
/// warning rather than a second set of sinks.
pub fn configure_logging(config: &LogConfig) -> Result<()> {
    let root = Severity::parse("root level", &config.root_level)?;
    let console = Severity::parse("console level", &config.console_level)?;
    let file = Severity::parse("file level", &config.file_level)?;

    if CONFIGURED.get().is_some() {
        warn!("logging already configured; keeping existing sinks");
        return Ok(());
    }

    let dir = match &config.path {
        Some(p) => p.clone(),
        None => std::env::current_dir()?,
    };
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(&config.filename))?;

    let file_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .with_filter(file.level_filter());

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(console.level_filter());

    tracing_subscriber::registry()
        .with(root_filter(root))
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| HarvestError::LoggingInit(e.to_string()))?;

    let _ = CONFIGURED.set(());
    Ok(())
}

/// Root filter: RUST_LOG overrides the configured threshold, and the
/// hyper_util cap is appended to whichever source won — its connection-pool
/// chatter drowns everything at debug.
fn root_filter(root: Severity) -> EnvFilter {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(root.directive()));
    match "hyper_util=warn".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parse_is_case_insensitive() {
        assert_eq!(Severity::parse("root level", "debug").unwrap(), Severity::Debug);
        assert_eq!(Severity::parse("root level", "Warning").unwrap(), Severity::Warning);
        assert_eq!(Severity::parse("root level", "CRITICAL").unwrap(), Severity::Critical);
    }

    #[test]
    fn invalid_level_names_the_parameter() {
        let err = Severity::parse("console level", "LOUD").unwrap_err();
        match err {
            HarvestError::InvalidLogLevel { param, given } => {
                assert_eq!(param, "console level");
                assert_eq!(given, "LOUD");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_config_is_rejected_before_install() {
        let config = LogConfig {
            file_level: "VERBOSE".into(),
            ..LogConfig::default()
        };
        assert!(matches!(
            configure_logging(&config),
            Err(HarvestError::InvalidLogLevel { param: "file level", .. })
        ));
    }

    #[test]
    fn configure_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            path: Some(dir.path().to_path_buf()),
            filename: "test.log".into(),
            ..LogConfig::default()
        };
        configure_logging(&config).unwrap();
        // Second call keeps the existing sinks instead of stacking new ones.
        configure_logging(&config).unwrap();
        assert!(dir.path().join("test.log").exists());
    }

    #[test]
    fn critical_maps_to_error_ceiling() {
        assert_eq!(Severity::Critical.level_filter(), LevelFilter::ERROR);
    }

    #[test]
    fn noisy_third_party_cap_is_always_present() {
        // Whether the threshold came from RUST_LOG or the config, the
        // hyper_util directive must be part of the root filter.
        let filter = root_filter(Severity::Debug);
        assert!(filter.to_string().contains("hyper_util=warn"));
    }
}
