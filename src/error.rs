//! Error types for sheetcopy.

use std::io;
use thiserror::Error;

/// Result type alias for sheetcopy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while fetching, parsing or configuring content.
///
/// The loader never returns these to its caller; they end up in the
/// [`LoadReport`](crate::loader::LoadReport) as per-source outcomes.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The source answered with a non-success status.
    #[error("{locator} responded with status {code}")]
    Status { code: u16, locator: String },

    /// The source did not answer within the configured timeout.
    #[error("Timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No fetcher is registered for the locator's scheme.
    #[error("Unsupported source scheme: {0}")]
    UnsupportedScheme(String),

    /// Error while rendering output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Error::Io(e),
            _ => Error::Csv(message),
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Status {
            code: 404,
            locator: "https://example.com/sheet.csv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "https://example.com/sheet.csv responded with status 404"
        );

        let err = Error::UnsupportedScheme("ftp".to_string());
        assert_eq!(err.to_string(), "Unsupported source scheme: ftp");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: Error = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
