//! Content loading: fetch sheets, parse rows, route them into a document.
//!
//! [`ContentLoader::load`] never fails. A source that cannot be reached,
//! answers with an error status, times out or returns unparseable text simply
//! contributes no rows; with no rows at all the result is the defaults.
//!
//! # Example
//!
//! ```no_run
//! use sheetcopy::loader::{ContentLoader, LoaderOptions};
//! use sheetcopy::Brand;
//!
//! # async fn run() {
//! let options = LoaderOptions::new()
//!     .with_brand(Brand::Seyu)
//!     .with_section("hero", "https://example.com/hero.csv")
//!     .with_section("features", "https://example.com/features.csv")
//!     .with_fallback(sheetcopy::SheetSource::combined("https://example.com/all.csv"));
//!
//! let doc = ContentLoader::new(options).load().await;
//! println!("{}", doc.hero.title);
//! # }
//! ```

mod builder;
mod options;
mod report;

pub use builder::{apply_records, ContentBuilder, STATISTICS_BUTTON_HREF};
pub use options::{LoaderOptions, DEFAULT_TIMEOUT};
pub use report::{LoadReport, SourceOutcome, SourceStatus};

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use crate::error::Error;
use crate::model::{ContentDocument, RawRecord};
use crate::parser::SheetParser;
use crate::source::{FetcherRegistry, SheetSource};

/// Extra time HTTP requests get past the per-source timeout, so that a
/// stalled source is reported as timed out rather than as a transport error.
const HTTP_TIMEOUT_GRACE: Duration = Duration::from_secs(1);

/// Default fetchers for a loader with the given per-source timeout.
pub fn default_registry(timeout: Duration) -> FetcherRegistry {
    FetcherRegistry::with_timeout(timeout.saturating_add(HTTP_TIMEOUT_GRACE))
}

/// Loads the content document from configured sheets.
pub struct ContentLoader {
    options: LoaderOptions,
    registry: Arc<FetcherRegistry>,
}

/// Rows and outcome of a single source.
struct FetchedSource {
    outcome: SourceOutcome,
    records: Vec<RawRecord>,
    diagnostics: Vec<String>,
}

impl ContentLoader {
    /// Create a loader with the default fetchers.
    pub fn new(options: LoaderOptions) -> Self {
        let registry = default_registry(options.timeout);
        Self::with_registry(options, registry)
    }

    /// Create a loader with a custom fetcher registry.
    pub fn with_registry(options: LoaderOptions, registry: FetcherRegistry) -> Self {
        Self {
            options,
            registry: Arc::new(registry),
        }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Load the document. Always resolves to a usable document.
    pub async fn load(&self) -> ContentDocument {
        self.load_with_report().await.0
    }

    /// Load the document and describe what happened.
    pub async fn load_with_report(&self) -> (ContentDocument, LoadReport) {
        let mut report = LoadReport::default();
        let records = self.fetch_records(&mut report).await;

        let mut builder = ContentBuilder::new(&self.options.defaults);
        builder.apply_all(&records);
        report.records_applied = builder.applied();
        report.records_ignored = builder.ignored();
        let (content, diagnostics) = builder.finish_with_diagnostics();
        report.diagnostics.extend(diagnostics);

        log::info!(
            "Loaded content: {} records applied, {} ignored, {} of {} sources failed",
            report.records_applied,
            report.records_ignored,
            report.failed_sources(),
            report.sources.len()
        );
        (content, report)
    }

    /// Fetch and parse every source; rows of all sources in configuration order.
    pub async fn fetch_records(&self, report: &mut LoadReport) -> Vec<RawRecord> {
        let (parallel, fallback) = self.options.plan();
        let mut records = Vec::new();

        if !parallel.is_empty() {
            let fetched = join_all(parallel.iter().map(|s| self.fetch_source(s, false))).await;
            for source in fetched {
                records.extend(self.collect(source, report));
            }
        }

        if records.is_empty() {
            match fallback {
                Some(source) => {
                    let is_fallback = !parallel.is_empty();
                    if is_fallback {
                        report.diagnostic(format!(
                            "No rows from {} section sources, trying combined source {}",
                            parallel.len(),
                            source.locator
                        ));
                        report.used_fallback = true;
                    }
                    let fetched = self.fetch_source(&source, is_fallback).await;
                    records.extend(self.collect(fetched, report));
                }
                None if parallel.is_empty() => {
                    report.diagnostic("No sources configured, using default content".to_string());
                }
                None => {}
            }
        }

        if records.is_empty() && !report.sources.is_empty() {
            report.diagnostic("No data in sheet, using default content".to_string());
        }

        log::info!("Fetched {} records from sheet", records.len());
        records
    }

    fn collect(&self, source: FetchedSource, report: &mut LoadReport) -> Vec<RawRecord> {
        for message in source.diagnostics {
            report.diagnostic(message);
        }
        report.sources.push(source.outcome);
        source.records
    }

    async fn fetch_source(&self, source: &SheetSource, fallback: bool) -> FetchedSource {
        let mut fetched = FetchedSource {
            outcome: SourceOutcome {
                locator: source.locator.clone(),
                section: source.section.clone(),
                status: SourceStatus::TimedOut,
                fallback,
            },
            records: Vec::new(),
            diagnostics: Vec::new(),
        };

        let text = match tokio::time::timeout(
            self.options.timeout,
            self.registry.fetch(&source.locator),
        )
        .await
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                fetched
                    .diagnostics
                    .push(format!("Failed to fetch {}: {}", source, e));
                fetched.outcome.status = SourceStatus::Failed {
                    reason: e.to_string(),
                };
                return fetched;
            }
            Err(_) => {
                let err = Error::Timeout(self.options.timeout);
                fetched
                    .diagnostics
                    .push(format!("{} fetching {}", err, source));
                return fetched;
            }
        };

        let parser = SheetParser::from_text_with_options(text, self.options.parse.clone());
        match parser.parse() {
            Ok(sheet) => {
                if sheet.skipped_rows > 0 {
                    fetched.diagnostics.push(format!(
                        "Skipped {} malformed rows in {}",
                        sheet.skipped_rows, source
                    ));
                }
                let mut records = sheet.records;
                if let Some(section) = &source.section {
                    for record in &mut records {
                        record.default_section(section);
                    }
                }
                fetched.outcome.status = SourceStatus::Loaded {
                    records: records.len(),
                };
                fetched.records = records;
            }
            Err(e) => {
                fetched
                    .diagnostics
                    .push(format!("Failed to parse {}: {}", source, e));
                fetched.outcome.status = SourceStatus::Failed {
                    reason: e.to_string(),
                };
            }
        }
        fetched
    }
}
