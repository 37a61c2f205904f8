//! Logging for debug purposes.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::io::{Error as IOError, Write};
use std::path::PathBuf;
use std::thread;

use flexi_logger::{
    DeferredNow, FileSpec, FlexiLoggerError, LogSpecification, Logger, LoggerHandle, Record,
};

/// Configure logging to the file at `path` using the log specification `spec`.
pub fn configure_logging(path: PathBuf, spec: &str) -> ConfigureLoggingResult {
    let log_specification: LogSpecification =
        LogSpecification::parse(spec).map_err(ConfigureLoggingError::BadSpecification)?;

    let file_spec: FileSpec = FileSpec::try_from(&path)
        .map_err(|error| ConfigureLoggingError::BadPath(path.clone(), error))?;

    Logger::with(log_specification)
        .format(log_format)
        .log_to_file(file_spec)
        .start()
        .map_err(ConfigureLoggingError::StartFailed)
}

pub type ConfigureLoggingResult = Result<LoggerHandle, ConfigureLoggingError>;

#[derive(Debug)]
pub enum ConfigureLoggingError {
    BadSpecification(FlexiLoggerError),
    BadPath(PathBuf, FlexiLoggerError),
    StartFailed(FlexiLoggerError),
}

impl Display for ConfigureLoggingError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            ConfigureLoggingError::BadSpecification(error) => {
                write!(formatter, "Invalid log level: {}", error)
            }
            ConfigureLoggingError::BadPath(path, error) => {
                write!(
                    formatter,
                    "Invalid log file \"{}\": {}",
                    path.to_string_lossy(),
                    error
                )
            }
            ConfigureLoggingError::StartFailed(error) => {
                write!(formatter, "Failed to start logging: {}", error)
            }
        }
    }
}

/// Format log records.
fn log_format(writer: &mut dyn Write, now: &mut DeferredNow, record: &Record) -> Result<(), IOError> {
    write!(
        writer,
        "{} {} [{}] [{}] {}",
        now.now().format("%d-%m-%Y %H:%M.%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        thread::current().name().unwrap_or("<unnamed>"),
        &record.args()
    )
}
