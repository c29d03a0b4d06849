use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool reads a schedule workbook, interprets its rows, or emits CSV.
///
/// Every variant is fatal: the conversion stops at the first error and no
/// partial output is produced.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors bubbled up from the CSV writer.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when the workbook has no sheet with the requested name.
    #[error("missing sheet '{0}'")]
    MissingSheet(String),

    /// Raised when a C–G merge address carries an unusable row number.
    #[error("invalid merge range: {0}")]
    InvalidMergeRange(String),

    /// Raised when a non-empty date cell does not contain a `DD.MM.YYYY` date.
    #[error("can't parse date: {0}")]
    InvalidDate(String),

    /// Raised when a time cell does not contain an `H.MM-H.MM` range.
    #[error("can't parse time: {date} {value}")]
    InvalidTime { date: String, value: String },

    /// Raised when an hour component is not an integer.
    #[error("invalid hour value '{0}'")]
    InvalidHour(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
