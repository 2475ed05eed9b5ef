//! # sheetcopy
//!
//! Landing-page copy loader backed by published spreadsheets.
//!
//! Page copy is edited in a spreadsheet and published as CSV. This library
//! fetches one or more published sheets, parses the rows and routes them into
//! a [`ContentDocument`] built on compiled-in brand defaults. Loading never
//! fails: unreachable sheets, error responses and malformed text all degrade
//! to the defaults.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sheetcopy::{load_combined, render, Brand};
//!
//! # async fn run() -> sheetcopy::Result<()> {
//! let doc = load_combined(
//!     "https://docs.google.com/spreadsheets/d/e/.../pub?output=csv",
//!     Brand::Seyu,
//! )
//! .await;
//!
//! let json = render::to_json(&doc, render::JsonFormat::Pretty)?;
//! println!("{}", json);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Per-section sheets**: fetched concurrently, with a combined sheet as fallback
//! - **Group replacement**: navigation, buttons, items and links are replaced wholesale
//! - **Brand defaults**: every field always has a value
//! - **Validation**: completes hand-edited or older JSON documents
//! - **Cell cleanup**: Unicode normalization and invisible character removal

pub mod cleanup;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;
pub mod validate;

// Re-export commonly used types
pub use cleanup::{CellCleanup, CleanupOptions};
pub use config::LoaderConfig;
pub use error::{Error, Result};
pub use loader::{apply_records, ContentLoader, LoadReport, LoaderOptions, SourceStatus};
pub use model::{
    Brand, Button, ButtonKind, ContentDocument, FeatureItem, Features, Footer, Header, Hero,
    Link, Meta, RawRecord, StatItem, Statistics,
};
pub use parser::{parse_records, ErrorMode, ParseOptions, SheetParser};
pub use render::{render_copyright, JsonFormat};
pub use source::{FetcherRegistry, SheetSource, SourceFetcher};
pub use validate::{validate, validate_json, PartialDocument, Validated};

use std::sync::Arc;
use std::time::Duration;

/// Load the content document with the given options.
///
/// # Example
///
/// ```no_run
/// use sheetcopy::{load, Brand, LoaderOptions};
///
/// # async fn run() {
/// let options = LoaderOptions::new()
///     .with_brand(Brand::Bfound)
///     .with_section("hero", "https://example.com/hero.csv")
///     .with_section("statistics", "https://example.com/stats.csv");
/// let doc = load(options).await;
/// println!("{}", doc.hero.title);
/// # }
/// ```
pub async fn load(options: LoaderOptions) -> ContentDocument {
    ContentLoader::new(options).load().await
}

/// Load the content document from a single combined sheet.
pub async fn load_combined(locator: impl Into<String>, brand: Brand) -> ContentDocument {
    load(LoaderOptions::combined(locator).with_brand(brand)).await
}

/// Parse CSV text and apply its rows to the brand's defaults.
///
/// Unlike the loader, a malformed sheet is reported as an error.
///
/// # Example
///
/// ```
/// use sheetcopy::{parse_csv, Brand};
///
/// let csv = "section,key,title\nhero,title,Hello\n";
/// let doc = parse_csv(csv, Brand::Seyu).unwrap();
/// assert_eq!(doc.hero.title, "Hello");
/// ```
pub fn parse_csv(text: &str, brand: Brand) -> Result<ContentDocument> {
    let records = parse_records(text, &ParseOptions::default())?;
    Ok(apply_records(&brand.default_content(), &records))
}

/// Builder for loading content documents.
///
/// # Example
///
/// ```no_run
/// use sheetcopy::{Brand, Sheetcopy};
/// use std::time::Duration;
///
/// # async fn run() {
/// let (doc, report) = Sheetcopy::new()
///     .with_brand(Brand::Bfound)
///     .with_section("hero", "https://example.com/hero.csv")
///     .with_combined("https://example.com/all.csv")
///     .with_timeout(Duration::from_secs(5))
///     .lenient()
///     .load_with_report()
///     .await;
/// println!("{} records applied", report.records_applied);
/// # }
/// ```
pub struct Sheetcopy {
    options: LoaderOptions,
    fetchers: Vec<Arc<dyn SourceFetcher>>,
}

impl Sheetcopy {
    /// Create a new builder with the default fetchers.
    pub fn new() -> Self {
        Self {
            options: LoaderOptions::default(),
            fetchers: Vec::new(),
        }
    }

    /// Start from a configuration file's settings.
    pub fn from_config(config: LoaderConfig) -> Result<Self> {
        Ok(Self {
            options: config.into_options()?,
            fetchers: Vec::new(),
        })
    }

    /// Use a brand's defaults.
    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.options = self.options.with_brand(brand);
        self
    }

    /// Add a per-section sheet.
    pub fn with_section(mut self, section: impl Into<String>, locator: impl Into<String>) -> Self {
        self.options = self.options.with_section(section, locator);
        self
    }

    /// Set the combined sheet.
    pub fn with_combined(mut self, locator: impl Into<String>) -> Self {
        self.options = self.options.with_fallback(SheetSource::combined(locator));
        self
    }

    /// Set the per-source timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.with_timeout(timeout);
        self
    }

    /// Skip malformed rows instead of discarding a sheet.
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Register an additional fetcher. It takes precedence over the
    /// default fetcher for the same scheme.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn SourceFetcher>) -> Self {
        self.fetchers.push(fetcher);
        self
    }

    /// The options the loader will run with.
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Build the loader.
    pub fn build(self) -> ContentLoader {
        let mut registry = loader::default_registry(self.options.timeout);
        for fetcher in self.fetchers {
            registry.register(fetcher);
        }
        ContentLoader::with_registry(self.options, registry)
    }

    /// Load the document.
    pub async fn load(self) -> ContentDocument {
        self.build().load().await
    }

    /// Load the document with a report.
    pub async fn load_with_report(self) -> (ContentDocument, LoadReport) {
        self.build().load_with_report().await
    }
}

impl Default for Sheetcopy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let csv = "section,key,title,description\n\
                   features,item,A,a\n\
                   features,item,B,b\n";
        let doc = parse_csv(csv, Brand::Seyu).unwrap();
        assert_eq!(
            doc.features.items,
            vec![
                FeatureItem {
                    title: "A".to_string(),
                    description: "a".to_string()
                },
                FeatureItem {
                    title: "B".to_string(),
                    description: "b".to_string()
                },
            ]
        );
        assert_eq!(doc.hero, Brand::Seyu.default_content().hero);
    }

    #[test]
    fn test_parse_csv_empty() {
        assert_eq!(parse_csv("", Brand::Bfound).unwrap(), Brand::Bfound.default_content());
    }

    #[test]
    fn test_builder_options() {
        let builder = Sheetcopy::new()
            .with_brand(Brand::Bfound)
            .with_section("hero", "hero.csv")
            .with_combined("all.csv")
            .with_timeout(Duration::from_secs(2))
            .lenient();

        let options = builder.options();
        assert_eq!(options.sources.len(), 1);
        assert_eq!(options.fallback, Some(SheetSource::combined("all.csv")));
        assert_eq!(options.timeout, Duration::from_secs(2));
        assert_eq!(options.parse.error_mode, ErrorMode::Lenient);
    }

    #[tokio::test]
    async fn test_builder_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        std::fs::write(&path, "section,key,value\nmeta,title,From file\n").unwrap();

        let doc = Sheetcopy::new()
            .with_combined(path.to_string_lossy())
            .load()
            .await;
        assert_eq!(doc.meta.title, "From file");
    }
}
