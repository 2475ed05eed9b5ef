//! Loader options and configuration.

use std::time::Duration;

use crate::model::{Brand, ContentDocument};
use crate::parser::ParseOptions;
use crate::source::SheetSource;

/// Default per-source timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Options for a [`ContentLoader`](super::ContentLoader).
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Sources fetched concurrently
    pub sources: Vec<SheetSource>,

    /// Combined source consulted when `sources` yield no rows
    pub fallback: Option<SheetSource>,

    /// Document the records are applied on
    pub defaults: ContentDocument,

    /// Per-source timeout
    pub timeout: Duration,

    /// CSV parsing options
    pub parse: ParseOptions,
}

impl LoaderOptions {
    /// Create new loader options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a single combined sheet.
    pub fn combined(locator: impl Into<String>) -> Self {
        Self::new().with_fallback(SheetSource::combined(locator))
    }

    /// Add a source.
    pub fn with_source(mut self, source: SheetSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a per-section source.
    pub fn with_section(self, section: impl Into<String>, locator: impl Into<String>) -> Self {
        self.with_source(SheetSource::section(section, locator))
    }

    /// Set the combined fallback source.
    pub fn with_fallback(mut self, source: SheetSource) -> Self {
        self.fallback = Some(source);
        self
    }

    /// Use a brand's compiled-in content as defaults.
    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.defaults = brand.default_content();
        self
    }

    /// Use a custom default document.
    pub fn with_defaults(mut self, defaults: ContentDocument) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set the per-source timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Skip malformed rows instead of discarding the sheet.
    pub fn lenient(mut self) -> Self {
        self.parse = self.parse.lenient();
        self
    }

    /// The sources fetched in the parallel phase and the fallback, if any.
    ///
    /// With no `sources`, the fallback is fetched directly. A lone source
    /// without a fallback is treated as the combined source.
    pub(crate) fn plan(&self) -> (Vec<SheetSource>, Option<SheetSource>) {
        match (self.sources.len(), &self.fallback) {
            (0, fallback) => (Vec::new(), fallback.clone()),
            (1, None) => (Vec::new(), Some(self.sources[0].clone())),
            (_, fallback) => (self.sources.clone(), fallback.clone()),
        }
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            fallback: None,
            defaults: ContentDocument::default(),
            timeout: DEFAULT_TIMEOUT,
            parse: ParseOptions::default(),
        }
    }
}
