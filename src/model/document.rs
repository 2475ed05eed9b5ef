//! Document-level types.

use super::{Brand, Button, FeatureItem, Link, StatItem};
use serde::{Deserialize, Serialize};

/// The normalized, renderer-ready content of one landing page.
///
/// Every field is always populated: values come either from the sheet or
/// from the brand defaults the document was built on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub meta: Meta,
    pub header: Header,
    pub hero: Hero,
    pub features: Features,
    pub statistics: Statistics,
    pub footer: Footer,
}

impl ContentDocument {
    /// Section names, as written in the sheet's `section` column.
    pub const SECTIONS: [&'static str; 6] =
        ["meta", "header", "hero", "features", "statistics", "footer"];

    /// Row keys routed into a section.
    pub const KEYS: [&'static str; 9] = [
        "title",
        "subtitle",
        "description",
        "logo",
        "navigation_item",
        "button",
        "item",
        "link",
        "copyright",
    ];

    /// The compiled-in content for a brand.
    pub fn for_brand(brand: Brand) -> Self {
        brand.default_content()
    }

    /// Number of entries across all grouped sequences.
    pub fn group_item_count(&self) -> usize {
        self.header.navigation.len()
            + self.header.buttons.len()
            + self.hero.buttons.len()
            + self.features.items.len()
            + self.features.buttons.len()
            + self.statistics.items.len()
            + self.statistics.buttons.len()
            + self.footer.links.len()
    }
}

impl Default for ContentDocument {
    fn default() -> Self {
        Brand::default().default_content()
    }
}

/// Page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Browser title
    pub title: String,
}

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Logo URL or path
    pub logo: String,
    pub navigation: Vec<Link>,
    #[serde(default)]
    pub buttons: Vec<Link>,
}

/// Hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub buttons: Vec<Button>,
}

/// Features grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub title: String,
    pub items: Vec<FeatureItem>,
    pub buttons: Vec<Button>,
}

/// Statistics band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<StatItem>,
    #[serde(default)]
    pub buttons: Vec<Button>,
}

/// Page footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub logo: String,
    pub links: Vec<Link>,
    /// Template with a literal `{year}` placeholder, substituted at render time.
    pub copyright: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seyu() {
        assert_eq!(ContentDocument::default(), Brand::Seyu.default_content());
    }

    #[test]
    fn test_group_item_count() {
        let doc = ContentDocument::for_brand(Brand::Seyu);
        // 0 nav + 0 header buttons + 2 hero buttons + 3 features + 2 feature
        // buttons + 3 stats + 2 stat buttons + 4 footer links
        assert_eq!(doc.group_item_count(), 16);
    }

    #[test]
    fn test_json_shape() {
        let doc = ContentDocument::for_brand(Brand::Bfound);
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value["hero"]["buttons"][0]["type"].is_string());
        assert!(value["footer"]["copyright"]
            .as_str()
            .unwrap()
            .contains("{year}"));
        assert!(value["statistics"].get("title").is_none());
    }
}
