//! Rendering helpers for the hosting process.
//!
//! Page rendering itself happens elsewhere; this module only serializes the
//! document and performs the `{year}` substitution the page needs.

mod copyright;
mod json;
mod text;

pub use copyright::{current_year, render_copyright, YEAR_PLACEHOLDER};
pub use json::{to_json, JsonFormat};
pub use text::to_outline;
