//! Copyright year substitution.

use chrono::Datelike;

/// Placeholder replaced by the current year at render time.
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Replace every `{year}` in a copyright template.
pub fn render_copyright(template: &str, year: i32) -> String {
    template.replace(YEAR_PLACEHOLDER, &year.to_string())
}

/// The current year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
