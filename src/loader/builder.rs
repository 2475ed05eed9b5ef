//! Routing of raw records into a content document.

use crate::model::{
    Button, ButtonKind, ContentDocument, FeatureItem, Link, RawRecord, StatItem, DEFAULT_HREF,
};

/// Default target for statistics buttons, which point at the contact form.
pub const STATISTICS_BUTTON_HREF: &str = "#connect";

const TITLE: &[&str] = &["title", "value"];
const SUBTITLE: &[&str] = &["subtitle", "value"];
const DESCRIPTION: &[&str] = &["description", "value"];
const VALUE: &[&str] = &["value"];
const LABEL: &[&str] = &["label", "value"];
const FEATURE_TITLE: &[&str] = &["title", "subtitle"];
const STAT_NUMBER: &[&str] = &["number", "title"];

/// Accumulates records on top of a default document.
///
/// Scalars are overwritten as records arrive. Grouped sequences collect into
/// temporary lists and replace the defaults in [`finish`](Self::finish) only
/// when they received at least one item.
#[derive(Debug)]
pub struct ContentBuilder {
    content: ContentDocument,
    navigation: Vec<Link>,
    header_buttons: Vec<Link>,
    hero_buttons: Vec<Button>,
    feature_items: Vec<FeatureItem>,
    feature_buttons: Vec<Button>,
    stat_items: Vec<StatItem>,
    stat_buttons: Vec<Button>,
    footer_links: Vec<Link>,
    applied: usize,
    ignored: usize,
    diagnostics: Vec<String>,
}

impl ContentBuilder {
    /// Start from a copy of the defaults.
    pub fn new(defaults: &ContentDocument) -> Self {
        Self {
            content: defaults.clone(),
            navigation: Vec::new(),
            header_buttons: Vec::new(),
            hero_buttons: Vec::new(),
            feature_items: Vec::new(),
            feature_buttons: Vec::new(),
            stat_items: Vec::new(),
            stat_buttons: Vec::new(),
            footer_links: Vec::new(),
            applied: 0,
            ignored: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Route one record. Unknown section/key pairs are ignored.
    pub fn apply(&mut self, record: &RawRecord) {
        let content = &mut self.content;
        let handled = match (record.section(), record.key()) {
            ("meta", "title") => set_scalar(&mut content.meta.title, record, TITLE),
            ("header", "logo") => set_scalar(&mut content.header.logo, record, VALUE),
            ("header", "navigation_item") => {
                self.navigation.push(link(record));
                true
            }
            ("header", "button") => {
                self.header_buttons.push(link(record));
                true
            }
            ("hero", "title") => set_scalar(&mut content.hero.title, record, TITLE),
            ("hero", "subtitle") => set_scalar(&mut content.hero.subtitle, record, SUBTITLE),
            ("hero", "description") => {
                set_scalar(&mut content.hero.description, record, DESCRIPTION)
            }
            ("hero", "button") => {
                let button = self.button(record, DEFAULT_HREF);
                self.hero_buttons.push(button);
                true
            }
            ("features", "title") => set_scalar(&mut content.features.title, record, TITLE),
            ("features", "item") => {
                self.feature_items.push(FeatureItem {
                    title: text(record, FEATURE_TITLE),
                    description: text(record, DESCRIPTION),
                });
                true
            }
            ("features", "button") => {
                let button = self.button(record, DEFAULT_HREF);
                self.feature_buttons.push(button);
                true
            }
            ("statistics", "title") => match record.first_of(TITLE) {
                Some(title) => {
                    content.statistics.title = Some(title.to_string());
                    true
                }
                None => false,
            },
            ("statistics", "item") => {
                self.stat_items.push(stat_item(record));
                true
            }
            ("statistics", "button") => {
                let button = self.button(record, STATISTICS_BUTTON_HREF);
                self.stat_buttons.push(button);
                true
            }
            ("footer", "logo") => set_scalar(&mut content.footer.logo, record, VALUE),
            ("footer", "copyright") => set_scalar(&mut content.footer.copyright, record, VALUE),
            ("footer", "link") => {
                self.footer_links.push(link(record));
                true
            }
            _ => false,
        };

        if handled {
            self.applied += 1;
        } else {
            log::debug!(
                "Ignoring record section='{}' key='{}'",
                record.section(),
                record.key()
            );
            self.ignored += 1;
        }
    }

    /// Route every record in order.
    pub fn apply_all<'a>(&mut self, records: impl IntoIterator<Item = &'a RawRecord>) {
        for record in records {
            self.apply(record);
        }
    }

    /// Records that changed the document.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Records with an unknown section/key or no usable value.
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Diagnostics raised while routing.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Commit non-empty groups and return the document.
    pub fn finish(self) -> ContentDocument {
        self.finish_with_diagnostics().0
    }

    /// Like [`finish`](Self::finish), also returning the diagnostics.
    pub fn finish_with_diagnostics(self) -> (ContentDocument, Vec<String>) {
        let mut content = self.content;
        replace_if_any(&mut content.header.navigation, self.navigation);
        replace_if_any(&mut content.header.buttons, self.header_buttons);
        replace_if_any(&mut content.hero.buttons, self.hero_buttons);
        replace_if_any(&mut content.features.items, self.feature_items);
        replace_if_any(&mut content.features.buttons, self.feature_buttons);
        replace_if_any(&mut content.statistics.items, self.stat_items);
        replace_if_any(&mut content.statistics.buttons, self.stat_buttons);
        replace_if_any(&mut content.footer.links, self.footer_links);
        (content, self.diagnostics)
    }

    fn button(&mut self, record: &RawRecord, default_href: &str) -> Button {
        let kind = match record.get("type") {
            None => ButtonKind::default(),
            Some(raw) => raw.parse::<ButtonKind>().unwrap_or_else(|e| {
                let message = format!(
                    "{}.button '{}': {}, using primary",
                    record.section(),
                    text(record, LABEL),
                    e
                );
                log::warn!("{}", message);
                self.diagnostics.push(message);
                ButtonKind::default()
            }),
        };
        Button {
            label: text(record, LABEL),
            href: record.get("href").unwrap_or(default_href).to_string(),
            kind,
        }
    }
}

/// Apply records to a copy of the defaults.
pub fn apply_records<'a>(
    defaults: &ContentDocument,
    records: impl IntoIterator<Item = &'a RawRecord>,
) -> ContentDocument {
    let mut builder = ContentBuilder::new(defaults);
    builder.apply_all(records);
    builder.finish()
}

fn set_scalar(target: &mut String, record: &RawRecord, columns: &[&str]) -> bool {
    match record.first_of(columns) {
        Some(value) => {
            *target = value.to_string();
            true
        }
        None => false,
    }
}

fn text(record: &RawRecord, columns: &[&str]) -> String {
    record.first_of(columns).unwrap_or_default().to_string()
}

fn link(record: &RawRecord) -> Link {
    Link {
        label: text(record, LABEL),
        href: record.get("href").unwrap_or(DEFAULT_HREF).to_string(),
    }
}

fn stat_item(record: &RawRecord) -> StatItem {
    let label = text(record, LABEL);
    let subtitle = record.get("subtitle");

    match record.first_of(STAT_NUMBER) {
        Some(number) => StatItem {
            number: number.to_string(),
            subtitle: subtitle.map(str::to_string),
            label,
        },
        // "35%\nBoost in Live Fan Engagement" in a single cell
        None => {
            let mut lines = subtitle.unwrap_or_default().splitn(2, '\n');
            let number = lines.next().unwrap_or_default().trim().to_string();
            let subtitle = lines
                .next()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            StatItem {
                number,
                subtitle,
                label,
            }
        }
    }
}

fn replace_if_any<T>(target: &mut Vec<T>, collected: Vec<T>) {
    if !collected.is_empty() {
        *target = collected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Brand;

    fn defaults() -> ContentDocument {
        Brand::Seyu.default_content()
    }

    #[test]
    fn test_no_records_returns_defaults() {
        let records: Vec<RawRecord> = Vec::new();
        assert_eq!(apply_records(&defaults(), &records), defaults());
    }

    #[test]
    fn test_scalar_overwrite() {
        let records = vec![RawRecord::new("hero", "title").with("title", "X")];
        let doc = apply_records(&defaults(), &records);

        let mut expected = defaults();
        expected.hero.title = "X".to_string();
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_scalar_falls_back_to_value_column() {
        let records = vec![RawRecord::new("meta", "title").with("value", "From value")];
        let doc = apply_records(&defaults(), &records);
        assert_eq!(doc.meta.title, "From value");
    }

    #[test]
    fn test_blank_scalar_keeps_default() {
        let records = vec![RawRecord::new("footer", "logo").with("value", "")];
        let mut builder = ContentBuilder::new(&defaults());
        builder.apply_all(&records);
        assert_eq!(builder.ignored(), 1);
        assert_eq!(builder.finish().footer.logo, "Seyu");
    }

    #[test]
    fn test_case_insensitive_dispatch() {
        let records = vec![RawRecord::new("HEADER", "Logo").with("value", "/new.png")];
        let doc = apply_records(&defaults(), &records);
        assert_eq!(doc.header.logo, "/new.png");
    }

    #[test]
    fn test_feature_items_replace_defaults_in_order() {
        let records = vec![
            RawRecord::new("features", "item")
                .with("title", "A")
                .with("description", "a"),
            RawRecord::new("features", "item")
                .with("title", "B")
                .with("description", "b"),
        ];
        let doc = apply_records(&defaults(), &records);
        assert_eq!(
            doc.features.items,
            vec![FeatureItem::new("A", "a"), FeatureItem::new("B", "b")]
        );
        assert_eq!(doc.features.buttons, defaults().features.buttons);
    }

    #[test]
    fn test_feature_item_legacy_columns() {
        let records = vec![RawRecord::new("features", "item")
            .with("subtitle", "Legacy")
            .with("value", "Body")];
        let doc = apply_records(&defaults(), &records);
        assert_eq!(doc.features.items, vec![FeatureItem::new("Legacy", "Body")]);
    }

    #[test]
    fn test_buttons_defaults() {
        let records = vec![
            RawRecord::new("hero", "button").with("label", "Go"),
            RawRecord::new("statistics", "button").with("value", "Demo"),
        ];
        let doc = apply_records(&defaults(), &records);
        assert_eq!(doc.hero.buttons, vec![Button::primary("Go", "#")]);
        assert_eq!(doc.statistics.buttons, vec![Button::primary("Demo", "#connect")]);
    }

    #[test]
    fn test_unknown_button_type_is_reported() {
        let records = vec![RawRecord::new("features", "button")
            .with("value", "Try")
            .with("type", "ghost")];
        let mut builder = ContentBuilder::new(&defaults());
        builder.apply_all(&records);
        assert_eq!(builder.diagnostics().len(), 1);
        let doc = builder.finish();
        assert_eq!(doc.features.buttons[0].kind, ButtonKind::Primary);
    }

    #[test]
    fn test_stat_item_split_subtitle() {
        let records = vec![RawRecord::new("statistics", "item")
            .with("subtitle", "35%\nBoost in Live Fan Engagement")
            .with("value", "Real-time interactions")];
        let doc = apply_records(&defaults(), &records);
        assert_eq!(
            doc.statistics.items,
            vec![StatItem::new("35%", "Real-time interactions")
                .with_subtitle("Boost in Live Fan Engagement")]
        );
    }

    #[test]
    fn test_stat_item_explicit_number() {
        let records = vec![RawRecord::new("statistics", "item")
            .with("number", "95%")
            .with("label", "Recovery Rate")];
        let doc = apply_records(&defaults(), &records);
        assert_eq!(doc.statistics.items, vec![StatItem::new("95%", "Recovery Rate")]);
    }

    #[test]
    fn test_statistics_title_set() {
        let mut base = Brand::Bfound.default_content();
        assert!(base.statistics.title.is_none());
        let records = vec![RawRecord::new("statistics", "title").with("title", "Numbers")];
        base = apply_records(&base, &records);
        assert_eq!(base.statistics.title.as_deref(), Some("Numbers"));
    }

    #[test]
    fn test_unknown_records_ignored() {
        let records = vec![
            RawRecord::new("pricing", "tier").with("value", "Pro"),
            RawRecord::new("hero", "tagline").with("value", "x"),
        ];
        let mut builder = ContentBuilder::new(&defaults());
        builder.apply_all(&records);
        assert_eq!(builder.applied(), 0);
        assert_eq!(builder.ignored(), 2);
        assert_eq!(builder.finish(), defaults());
    }

    #[test]
    fn test_copyright_placeholder_kept() {
        let records = vec![RawRecord::new("footer", "copyright").with("value", "\u{a9} {year} X")];
        let doc = apply_records(&defaults(), &records);
        assert_eq!(doc.footer.copyright, "\u{a9} {year} X");
    }

    #[test]
    fn test_navigation_and_footer_links() {
        let records = vec![
            RawRecord::new("header", "navigation_item")
                .with("label", "Services")
                .with("href", "#services"),
            RawRecord::new("footer", "link").with("value", "Jobs"),
            RawRecord::new("header", "button").with("value", "Sign up"),
        ];
        let doc = apply_records(&defaults(), &records);
        assert_eq!(doc.header.navigation, vec![Link::new("Services", "#services")]);
        assert_eq!(doc.header.buttons, vec![Link::new("Sign up", "#")]);
        assert_eq!(doc.footer.links, vec![Link::new("Jobs", "#")]);
    }
}
