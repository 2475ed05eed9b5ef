//! Cell text cleanup.
//!
//! Published spreadsheets carry the usual copy-paste debris: Windows line
//! endings, non-breaking spaces, zero-width characters, stray BOMs. Each cell
//! passes through [`CellCleanup`] before it reaches a [`RawRecord`].
//!
//! [`RawRecord`]: crate::model::RawRecord

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Options for cell cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Turn `\r\n` and lone `\r` into `\n`
    pub normalize_line_endings: bool,

    /// Remove zero-width characters, BOM and U+FFFD
    pub remove_invisible: bool,

    /// Replace non-breaking spaces with plain spaces
    pub replace_nbsp: bool,

    /// Collapse runs of spaces and tabs into one space
    pub collapse_spaces: bool,

    /// Trim whitespace around every line of the cell
    pub trim_lines: bool,
}

impl CleanupOptions {
    /// Only NFC normalization and outer trimming.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            normalize_line_endings: false,
            remove_invisible: false,
            replace_nbsp: false,
            collapse_spaces: false,
            trim_lines: false,
        }
    }

    /// Everything on.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            normalize_line_endings: true,
            remove_invisible: true,
            replace_nbsp: true,
            collapse_spaces: true,
            trim_lines: true,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Cell cleanup pipeline.
#[derive(Debug, Clone)]
pub struct CellCleanup {
    options: CleanupOptions,
    spaces: Regex,
}

impl CellCleanup {
    /// Create a pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            spaces: Regex::new(r"[ \t]{2,}").expect("static pattern"),
        }
    }

    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Clean one cell.
    pub fn process(&self, cell: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            cell.nfc().collect::<String>()
        } else {
            cell.to_string()
        };

        if self.options.normalize_line_endings {
            result = result.replace("\r\n", "\n").replace('\r', "\n");
        }

        if self.options.remove_invisible {
            result.retain(|c| !is_invisible(c));
        }

        if self.options.replace_nbsp {
            result = result.replace(['\u{00A0}', '\u{202F}'], " ");
        }

        if self.options.collapse_spaces {
            result = self.spaces.replace_all(&result, " ").into_owned();
        }

        if self.options.trim_lines {
            result = result
                .split('\n')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n");
        }

        result.trim().to_string()
    }
}

impl Default for CellCleanup {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}

fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}' | '\u{FFFD}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_cleanup() {
        let cleanup = CellCleanup::default();
        assert_eq!(cleanup.process("  Hello\u{00A0}\u{200B}World  "), "Hello World");
    }

    #[test]
    fn test_line_endings_keep_newlines() {
        let cleanup = CellCleanup::default();
        assert_eq!(
            cleanup.process("35% \r\n Boost in Live Fan Engagement"),
            "35%\nBoost in Live Fan Engagement"
        );
    }

    #[test]
    fn test_nfc_normalization() {
        let cleanup = CellCleanup::new(CleanupOptions::minimal());
        // "e" + combining acute accent
        assert_eq!(cleanup.process("Cafe\u{0301}"), "Caf\u{00E9}");
    }

    #[test]
    fn test_minimal_keeps_inner_spacing() {
        let cleanup = CellCleanup::new(CleanupOptions::minimal());
        assert_eq!(cleanup.process(" a   b "), "a   b");
    }

    #[test]
    fn test_remove_replacement_char() {
        let cleanup = CellCleanup::default();
        assert_eq!(cleanup.process("Hello\u{FFFD}World"), "HelloWorld");
    }
}
