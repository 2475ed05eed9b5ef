//! Tabular sources and the fetchers that retrieve them.
//!
//! A [`SheetSource`] names where a sheet lives; a [`SourceFetcher`] knows how
//! to retrieve text for one or more URL schemes. The [`FetcherRegistry`]
//! dispatches a locator to the fetcher registered for its scheme.
//!
//! # Example
//!
//! ```no_run
//! use sheetcopy::source::{FetcherRegistry, SheetSource};
//!
//! # async fn run() -> sheetcopy::Result<()> {
//! let registry = FetcherRegistry::with_defaults();
//! let source = SheetSource::combined("fixtures/landing.csv");
//! let text = registry.fetch(&source.locator).await?;
//! println!("{} bytes", text.len());
//! # Ok(())
//! # }
//! ```

mod file;
#[cfg(feature = "http")]
mod http;

pub use file::FileFetcher;
#[cfg(feature = "http")]
pub use http::HttpFetcher;

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Scheme used for locators that are plain filesystem paths.
pub const FILE_SCHEME: &str = "file";

/// Where a sheet is published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSource {
    /// URL or path of the CSV export
    #[serde(alias = "url")]
    pub locator: String,

    /// Section assigned to rows that carry none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl SheetSource {
    /// A source whose rows carry their own `section` column.
    pub fn combined(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            section: None,
        }
    }

    /// A source holding the rows of a single section.
    pub fn section(section: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            section: Some(section.into()),
        }
    }

    /// Whether this is a combined (section-less) source.
    pub fn is_combined(&self) -> bool {
        self.section.is_none()
    }
}

impl fmt::Display for SheetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.section {
            Some(section) => write!(f, "{} ({})", self.locator, section),
            None => f.write_str(&self.locator),
        }
    }
}

/// Trait for sheet fetchers.
///
/// Implement this trait to add support for another transport.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// URL schemes handled by this fetcher, lowercase (e.g. `["https"]`).
    fn supported_schemes(&self) -> &[&str];

    /// Name of this fetcher.
    fn name(&self) -> &str;

    /// Retrieve the raw text behind a locator.
    async fn fetch(&self, locator: &str) -> Result<String>;

    /// Check if this fetcher supports the given scheme.
    fn supports_scheme(&self, scheme: &str) -> bool {
        let scheme = scheme.to_lowercase();
        self.supported_schemes().iter().any(|s| *s == scheme)
    }
}

/// Scheme of a locator; plain paths map to [`FILE_SCHEME`].
pub fn scheme_of(locator: &str) -> String {
    match url::Url::parse(locator.trim()) {
        // Single letters are Windows drive prefixes ("C:\sheets\a.csv").
        Ok(url) if url.scheme().len() > 1 => url.scheme().to_lowercase(),
        _ => FILE_SCHEME.to_string(),
    }
}

/// Registry mapping URL schemes to fetchers.
pub struct FetcherRegistry {
    fetchers: HashMap<String, Arc<dyn SourceFetcher>>,
    by_name: HashMap<String, Arc<dyn SourceFetcher>>,
}

impl FetcherRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            fetchers: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the file fetcher and, when enabled, HTTP(S).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FileFetcher::new()));
        #[cfg(feature = "http")]
        registry.register(Arc::new(HttpFetcher::new()));
        registry
    }

    /// Like [`with_defaults`](Self::with_defaults), with HTTP requests
    /// bounded by `timeout`.
    #[cfg_attr(not(feature = "http"), allow(unused_variables))]
    pub fn with_timeout(timeout: Duration) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FileFetcher::new()));
        #[cfg(feature = "http")]
        registry.register(Arc::new(HttpFetcher::with_timeout(timeout)));
        registry
    }

    /// Register a fetcher for all its schemes.
    pub fn register(&mut self, fetcher: Arc<dyn SourceFetcher>) {
        for scheme in fetcher.supported_schemes() {
            self.fetchers.insert(scheme.to_lowercase(), fetcher.clone());
        }
        self.by_name.insert(fetcher.name().to_lowercase(), fetcher);
    }

    /// Get a fetcher by scheme.
    pub fn get_by_scheme(&self, scheme: &str) -> Option<Arc<dyn SourceFetcher>> {
        self.fetchers.get(&scheme.to_lowercase()).cloned()
    }

    /// Get a fetcher by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn SourceFetcher>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if a scheme is supported.
    pub fn supports(&self, scheme: &str) -> bool {
        self.fetchers.contains_key(&scheme.to_lowercase())
    }

    /// All registered schemes.
    pub fn supported_schemes(&self) -> Vec<&str> {
        self.fetchers.keys().map(|s| s.as_str()).collect()
    }

    /// Fetch a locator with the fetcher registered for its scheme.
    pub async fn fetch(&self, locator: &str) -> Result<String> {
        let scheme = scheme_of(locator);
        let fetcher = self
            .get_by_scheme(&scheme)
            .ok_or(Error::UnsupportedScheme(scheme))?;
        fetcher.fetch(locator).await
    }
}

impl Default for FetcherRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
