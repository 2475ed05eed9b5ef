//! Outcome of a load cycle.

use serde::Serialize;
use std::fmt;

/// What happened to one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    /// Retrieved and parsed
    Loaded { records: usize },
    /// Transport, status or parse failure
    Failed { reason: String },
    /// No answer within the timeout
    TimedOut,
}

impl SourceStatus {
    /// Records contributed by the source.
    pub fn records(&self) -> usize {
        match self {
            SourceStatus::Loaded { records } => *records,
            _ => 0,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, SourceStatus::Loaded { .. })
    }
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceStatus::Loaded { records } => write!(f, "{} records", records),
            SourceStatus::Failed { reason } => write!(f, "failed: {}", reason),
            SourceStatus::TimedOut => f.write_str("timed out"),
        }
    }
}

/// Outcome for one configured source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceOutcome {
    pub locator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(flatten)]
    pub status: SourceStatus,
    /// Whether this was the combined fallback source
    pub fallback: bool,
}

/// Summary of one load cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Per-source outcomes in configuration order, fallback last
    pub sources: Vec<SourceOutcome>,
    /// Whether the combined fallback source was consulted
    pub used_fallback: bool,
    /// Records that changed the document
    pub records_applied: usize,
    /// Records with unknown section/key or no usable value
    pub records_ignored: usize,
    /// Operator-facing messages
    pub diagnostics: Vec<String>,
}

impl LoadReport {
    /// Total records retrieved across sources.
    pub fn records_fetched(&self) -> usize {
        self.sources.iter().map(|s| s.status.records()).sum()
    }

    /// Number of sources that failed or timed out.
    pub fn failed_sources(&self) -> usize {
        self.sources.iter().filter(|s| !s.status.is_loaded()).count()
    }

    /// True when nothing from any source reached the document.
    pub fn is_pure_defaults(&self) -> bool {
        self.records_applied == 0
    }

    pub(crate) fn diagnostic(&mut self, message: String) {
        log::warn!("{}", message);
        self.diagnostics.push(message);
    }
}
