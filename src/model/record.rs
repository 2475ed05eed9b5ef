//! Raw sheet rows before classification.

use std::collections::BTreeMap;

/// One parsed row of a tabular source.
///
/// `section` and `key` are stored lower-cased. Other columns are kept under
/// their lower-cased header name; empty cells are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    section: String,
    key: String,
    columns: BTreeMap<String, String>,
}

impl RawRecord {
    /// Create a record for a section/key pair.
    pub fn new(section: impl AsRef<str>, key: impl AsRef<str>) -> Self {
        Self {
            section: normalize_name(section.as_ref()),
            key: normalize_name(key.as_ref()),
            columns: BTreeMap::new(),
        }
    }

    /// Builder-style column setter.
    pub fn with(mut self, column: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// Set a column. `section` and `key` update the discriminators.
    pub fn set(&mut self, column: impl AsRef<str>, value: impl Into<String>) {
        let column = normalize_name(column.as_ref());
        let value = value.into();
        match column.as_str() {
            "section" => self.section = normalize_name(&value),
            "key" => self.key = normalize_name(&value),
            _ if value.is_empty() => {
                self.columns.remove(&column);
            }
            _ => {
                self.columns.insert(column, value);
            }
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Assign a section when the row has none.
    pub fn default_section(&mut self, section: &str) {
        if self.section.is_empty() {
            self.section = normalize_name(section);
        }
    }

    /// Non-empty value of a column (case-insensitive name).
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .get(&normalize_name(column))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// First non-empty value among the candidate columns.
    pub fn first_of(&self, columns: &[&str]) -> Option<&str> {
        columns.iter().find_map(|c| self.get(c))
    }

    /// Number of non-empty value columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether section and key match, ignoring case.
    pub fn is(&self, section: &str, key: &str) -> bool {
        self.section == normalize_name(section) && self.key == normalize_name(key)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_and_key_are_case_insensitive() {
        let record = RawRecord::new("HEADER", "Logo");
        assert_eq!(record.section(), "header");
        assert_eq!(record.key(), "logo");
        assert!(record.is("header", "LOGO"));
    }

    #[test]
    fn test_first_of_skips_empty() {
        let record = RawRecord::new("hero", "title")
            .with("title", "")
            .with("Value", "From value");
        assert_eq!(record.get("title"), None);
        assert_eq!(record.first_of(&["title", "value"]), Some("From value"));
    }

    #[test]
    fn test_set_section_column() {
        let mut record = RawRecord::default();
        record.set("Section", " Footer ");
        record.set("KEY", "link");
        assert!(record.is("footer", "link"));
        assert_eq!(record.column_count(), 0);
    }

    #[test]
    fn test_default_section_only_fills_missing() {
        let mut record = RawRecord::new("", "title");
        record.default_section("Hero");
        assert_eq!(record.section(), "hero");

        let mut record = RawRecord::new("meta", "title");
        record.default_section("hero");
        assert_eq!(record.section(), "meta");
    }
}
