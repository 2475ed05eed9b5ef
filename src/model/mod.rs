//! Content model for the landing page.
//!
//! [`ContentDocument`] is what the rendering layer consumes; [`RawRecord`] is
//! a sheet row before it is routed into the document.

mod brand;
mod document;
mod items;
mod record;

pub use brand::Brand;
pub use document::{ContentDocument, Features, Footer, Header, Hero, Meta, Statistics};
pub use items::{Button, ButtonKind, FeatureItem, Link, StatItem};
pub use record::RawRecord;

pub(crate) use items::DEFAULT_HREF;
