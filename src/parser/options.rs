//! Parsing options and configuration.

use crate::cleanup::CleanupOptions;

/// Options for parsing sheet CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Cell cleanup (None = keep cells verbatim)
    pub cleanup: Option<CleanupOptions>,

    /// Field delimiter
    pub delimiter: u8,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip malformed rows).
    pub fn lenient(self) -> Self {
        self.with_error_mode(ErrorMode::Lenient)
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Keep cells exactly as published.
    pub fn without_cleanup(mut self) -> Self {
        self.cleanup = None;
        self
    }

    /// Set the field delimiter (e.g. `b'\t'` for TSV exports).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            cleanup: Some(CleanupOptions::default()),
            delimiter: b',',
        }
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// A malformed row fails the whole sheet
    #[default]
    Strict,
    /// Skip malformed rows and continue
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .lenient()
            .without_cleanup()
            .with_delimiter(b'\t');

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.cleanup.is_none());
        assert_eq!(options.delimiter, b'\t');
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert_eq!(options.cleanup, Some(CleanupOptions::standard()));
        assert_eq!(options.delimiter, b',');
    }
}
