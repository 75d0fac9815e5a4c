use rolling_file::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
}

/// Initialize tracing/logging with the specified configuration
///
/// The pseudo-level "http" enables per-request logging from the HTTP
/// middleware while keeping everything else at info.
///
/// # Log Rotation
/// When a log file reaches `write_max_file_size`, it is rotated:
/// - Current: logs.log
/// - After rotation: logs.log.1, logs.log.2, etc.
/// - Keeps up to `write_max_files` rotated files
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    // Resolve "http" log level to "debug" for the http target only
    let filter_level = if config.level == "http" {
        "info,http=debug"
    } else {
        config.level
    };

    let filter =
        EnvFilter::try_new(filter_level).map_err(|source| LoggingError::InvalidLogLevel {
            level: config.level.to_string(),
            source,
        })?;

    let registry = tracing_subscriber::registry();

    if config.write_to_file {
        std::fs::create_dir_all(config.write_path)?;

        let log_file_path = PathBuf::from(config.write_path).join("logs.log");
        // write_max_files includes the current file
        let rotated_files_count = config.write_max_files.saturating_sub(1);
        let file_appender = BasicRollingFileAppender::new(
            log_file_path,
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            rotated_files_count,
        )?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The guard must outlive the program for the writer to flush.
        std::mem::forget(guard);

        if config.json_format {
            let console_layer = fmt::layer().json();
            let file_layer = fmt::layer().json().with_writer(non_blocking);
            registry
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .init();
        } else {
            let console_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(!config.strip_ansi);
            let file_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(non_blocking);
            registry
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .init();
        }
    } else if config.json_format {
        registry.with(filter).with(fmt::layer().json()).init();
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(!config.strip_ansi);
        registry.with(filter).with(console_layer).init();
    }

    Ok(())
}
