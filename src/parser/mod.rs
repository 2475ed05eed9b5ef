//! Sheet parsing module.

mod options;
mod sheet_parser;

pub use options::{ErrorMode, ParseOptions};
pub use sheet_parser::{parse_records, parse_records_lossy, ParsedSheet, SheetParser};
