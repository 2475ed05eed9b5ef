//! Content document as the JSON the landing page consumes.
//!
//! Buttons carry their kind under `type`, a missing statistics title and
//! stat subtitles are left out, and the copyright keeps its `{year}`
//! placeholder for the page to fill in.

use crate::error::{Error, Result};
use crate::model::ContentDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Indented, for files people edit
    #[default]
    Pretty,
    /// Single line, for embedding
    Compact,
}

/// Serialize a document in the page's JSON shape.
pub fn to_json(doc: &ContentDocument, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };
    json.map_err(|e| Error::Render(format!("cannot serialize content document: {}", e)))
}
