//! CSV sheet parser using the `csv` crate.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::cleanup::CellCleanup;
use crate::error::{Error, Result};
use crate::model::{ContentDocument, RawRecord};

use super::options::{ErrorMode, ParseOptions};

/// Records parsed from one sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSheet {
    /// Rows in sheet order
    pub records: Vec<RawRecord>,

    /// Malformed rows dropped in lenient mode
    pub skipped_rows: usize,

    /// Rows without a key (blank or annotation rows)
    pub keyless_rows: usize,
}

/// Parser for a published sheet in CSV form.
pub struct SheetParser {
    text: String,
    options: ParseOptions,
}

impl SheetParser {
    /// Parser over CSV text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_text_with_options(text, ParseOptions::default())
    }

    /// Parser over CSV text with custom options.
    pub fn from_text_with_options(text: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// Parser over a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_text_with_options(text, options))
    }

    /// Parse the sheet.
    pub fn parse(&self) -> Result<ParsedSheet> {
        let text = self.text.strip_prefix('\u{FEFF}').unwrap_or(&self.text);
        let mut sheet = ParsedSheet::default();
        if text.trim().is_empty() {
            return Ok(sheet);
        }

        let cleanup = self.options.cleanup.clone().map(CellCleanup::new);
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.options.delimiter)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        if !headers.iter().any(|h| h == "key") {
            let err = Error::Csv(format!(
                "header row has no 'key' column (found: {})",
                headers.join(", ")
            ));
            return match self.options.error_mode {
                ErrorMode::Strict => Err(err),
                ErrorMode::Lenient => {
                    log::warn!("{}", err);
                    Ok(sheet)
                }
            };
        }

        let layout = Layout::new(&headers, self.options.delimiter);

        for (index, row) in reader.records().enumerate() {
            let checked = row
                .map_err(Error::from)
                .and_then(|row| match layout.defect(&row) {
                    Some(defect) => Err(Error::Csv(format!(
                        "row {}: {}",
                        row.position().map_or(index as u64 + 2, |p| p.line()),
                        defect
                    ))),
                    None => Ok(row),
                });
            let row = match checked {
                Ok(row) => row,
                Err(e) => match self.options.error_mode {
                    ErrorMode::Strict => return Err(e),
                    ErrorMode::Lenient => {
                        log::warn!("Skipping malformed row: {}", e);
                        sheet.skipped_rows += 1;
                        continue;
                    }
                },
            };

            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            let record = build_record(&headers, &row, cleanup.as_ref());
            if record.key().is_empty() {
                sheet.keyless_rows += 1;
                continue;
            }
            sheet.records.push(record);
        }

        log::debug!(
            "Parsed {} records ({} skipped, {} without key)",
            sheet.records.len(),
            sheet.skipped_rows,
            sheet.keyless_rows
        );
        Ok(sheet)
    }
}

/// Column positions used to recognize malformed rows.
///
/// The reader is flexible, so the `csv` crate reports no row errors. A row is
/// malformed when it has non-empty cells past the last header (an unquoted
/// delimiter inside a cell) or when one of its cells swallowed whole rows
/// (an unterminated quote).
struct Layout {
    width: usize,
    section: Option<usize>,
    key: Option<usize>,
    delimiter: char,
}

impl Layout {
    fn new(headers: &[String], delimiter: u8) -> Self {
        Self {
            width: headers.len(),
            section: headers.iter().position(|h| h == "section"),
            key: headers.iter().position(|h| h == "key"),
            delimiter: char::from(delimiter),
        }
    }

    fn defect(&self, row: &StringRecord) -> Option<String> {
        let extra = row
            .iter()
            .skip(self.width)
            .filter(|cell| !cell.trim().is_empty())
            .count();
        if extra > 0 {
            return Some(format!(
                "{} cells beyond the {} header columns",
                extra, self.width
            ));
        }

        row.iter().find_map(|cell| {
            cell.lines()
                .skip(1)
                .find(|line| self.looks_like_row(line))
                .map(|line| format!("cell swallowed the row '{}'", line.trim()))
        })
    }

    /// Whether an embedded line reads like a sheet row of its own.
    fn looks_like_row(&self, line: &str) -> bool {
        let Some(key) = self.key else {
            return false;
        };
        let fields: Vec<&str> = line
            .split(self.delimiter)
            .map(|f| f.trim().trim_matches('"'))
            .collect();
        let known = |names: &[&str], field: Option<&&str>| {
            field.is_some_and(|f| names.iter().any(|n| f.eq_ignore_ascii_case(n)))
        };
        if fields.len() < 2 || !known(&ContentDocument::KEYS, fields.get(key)) {
            return false;
        }
        match self.section {
            Some(section) => known(&ContentDocument::SECTIONS, fields.get(section)),
            None => true,
        }
    }
}

fn build_record(headers: &[String], row: &StringRecord, cleanup: Option<&CellCleanup>) -> RawRecord {
    let mut record = RawRecord::default();
    for (header, cell) in headers.iter().zip(row.iter()) {
        if header.is_empty() {
            continue;
        }
        let value = match cleanup {
            Some(cleanup) => cleanup.process(cell),
            None => cell.to_string(),
        };
        record.set(header, value);
    }
    record
}

/// Parse CSV text into records.
pub fn parse_records(text: &str, options: &ParseOptions) -> Result<Vec<RawRecord>> {
    SheetParser::from_text_with_options(text, options.clone())
        .parse()
        .map(|sheet| sheet.records)
}

/// Parse CSV text, turning any failure into an empty record list.
pub fn parse_records_lossy(text: &str, options: &ParseOptions) -> Vec<RawRecord> {
    parse_records(text, options).unwrap_or_else(|e| {
        log::warn!("Discarding unparseable sheet: {}", e);
        Vec::new()
    })
}
