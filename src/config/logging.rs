use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Configuration for application logging
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub format: LogFormat,
    pub app_log_file: Option<PathBuf>,
    pub app_log_retention_days: usize,
}

impl LoggingConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());

        let format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let app_log_file = std::env::var("APP_LOG_FILE").ok().map(PathBuf::from);

        let app_log_retention_days = std::env::var("APP_LOG_RETENTION_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7);

        Self {
            log_level,
            format,
            app_log_file,
            app_log_retention_days,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the global subscriber from environment configuration
pub fn init_logging() -> Result<(), LoggingError> {
    init_logging_with(&LoggingConfig::from_env())
}

/// Initialize the global subscriber with console and optional rolling file output
pub fn init_logging_with(config: &LoggingConfig) -> Result<(), LoggingError> {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);
    match config.format {
        LogFormat::Json => layers.push(
            console_layer
                .json()
                .with_filter(env_filter(&config.log_level)?)
                .boxed(),
        ),
        LogFormat::Pretty => layers.push(
            console_layer
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter(&config.log_level)?)
                .boxed(),
        ),
    }

    if let Some(log_file_path) = &config.app_log_file {
        let appender = file_appender(log_file_path, config.app_log_retention_days)?;
        layers.push(
            fmt::layer()
                .with_writer(appender)
                .with_target(true)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter(&config.log_level)?)
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| LoggingError::InitializationError(e.to_string()))
}

fn env_filter(log_level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", log_level, e)))
}

fn file_appender(path: &Path, retention_days: usize) -> Result<RollingFileAppender, LoggingError> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .max_log_files(retention_days.max(1))
        .build(directory)
        .map_err(|e| LoggingError::InitializationError(e.to_string()))
}
