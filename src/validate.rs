//! Defensive completion of loosely-typed documents.
//!
//! A [`PartialDocument`] is a content document in which every section and
//! every field may be missing, e.g. a JSON snapshot written by an older
//! version or edited by hand. [`validate`] fills every gap from the defaults
//! and never rejects its input.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{
    Button, ContentDocument, FeatureItem, Features, Footer, Header, Hero, Link, Meta, StatItem,
    Statistics,
};

/// A content document with every section and field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialDocument {
    pub meta: Option<PartialMeta>,
    pub header: Option<PartialHeader>,
    pub hero: Option<PartialHero>,
    pub features: Option<PartialFeatures>,
    pub statistics: Option<PartialStatistics>,
    pub footer: Option<PartialFooter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialMeta {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialHeader {
    pub logo: Option<String>,
    pub navigation: Option<Vec<Link>>,
    pub buttons: Option<Vec<Link>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialHero {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub buttons: Option<Vec<Button>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFeatures {
    pub title: Option<String>,
    pub items: Option<Vec<FeatureItem>>,
    pub buttons: Option<Vec<Button>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialStatistics {
    pub title: Option<String>,
    pub items: Option<Vec<StatItem>>,
    pub buttons: Option<Vec<Button>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFooter {
    pub logo: Option<String>,
    pub links: Option<Vec<Link>>,
    pub copyright: Option<String>,
}

impl From<ContentDocument> for PartialDocument {
    fn from(doc: ContentDocument) -> Self {
        Self {
            meta: Some(PartialMeta {
                title: Some(doc.meta.title),
            }),
            header: Some(PartialHeader {
                logo: Some(doc.header.logo),
                navigation: Some(doc.header.navigation),
                buttons: Some(doc.header.buttons),
            }),
            hero: Some(PartialHero {
                title: Some(doc.hero.title),
                subtitle: Some(doc.hero.subtitle),
                description: Some(doc.hero.description),
                buttons: Some(doc.hero.buttons),
            }),
            features: Some(PartialFeatures {
                title: Some(doc.features.title),
                items: Some(doc.features.items),
                buttons: Some(doc.features.buttons),
            }),
            statistics: Some(PartialStatistics {
                title: doc.statistics.title,
                items: Some(doc.statistics.items),
                buttons: Some(doc.statistics.buttons),
            }),
            footer: Some(PartialFooter {
                logo: Some(doc.footer.logo),
                links: Some(doc.footer.links),
                copyright: Some(doc.footer.copyright),
            }),
        }
    }
}

/// A validated document with the gaps that were filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    pub document: ContentDocument,
    pub diagnostics: Vec<String>,
}

impl Validated {
    /// Whether the input was already complete.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Complete a partial document from the defaults.
pub fn validate(doc: PartialDocument, defaults: &ContentDocument) -> ContentDocument {
    validate_with_diagnostics(doc, defaults).document
}

/// Complete a document and report each filled gap.
pub fn validate_with_diagnostics(doc: PartialDocument, defaults: &ContentDocument) -> Validated {
    complete(doc, defaults, Filler::default())
}

fn complete(doc: PartialDocument, defaults: &ContentDocument, mut filler: Filler) -> Validated {
    let defaults = defaults.clone();

    let meta = filler.section("meta", doc.meta);
    let header = filler.section("header", doc.header);
    let hero = filler.section("hero", doc.hero);
    let features = filler.section("features", doc.features);
    let statistics = filler.section("statistics", doc.statistics);
    let footer = filler.section("footer", doc.footer);

    let document = ContentDocument {
        meta: Meta {
            title: filler.text("meta.title", meta.title, defaults.meta.title),
        },
        header: Header {
            logo: filler.text("header.logo", header.logo, defaults.header.logo),
            navigation: filler.list(
                "header.navigation",
                header.navigation,
                defaults.header.navigation,
            ),
            buttons: filler.list("header.buttons", header.buttons, defaults.header.buttons),
        },
        hero: Hero {
            title: filler.text("hero.title", hero.title, defaults.hero.title),
            subtitle: filler.text("hero.subtitle", hero.subtitle, defaults.hero.subtitle),
            description: filler.text(
                "hero.description",
                hero.description,
                defaults.hero.description,
            ),
            buttons: filler.list("hero.buttons", hero.buttons, defaults.hero.buttons),
        },
        features: Features {
            title: filler.text("features.title", features.title, defaults.features.title),
            items: filler.list("features.items", features.items, defaults.features.items),
            buttons: filler.list(
                "features.buttons",
                features.buttons,
                defaults.features.buttons,
            ),
        },
        statistics: Statistics {
            // Optional: only a blank title is dropped.
            title: statistics
                .title
                .filter(|t| !t.trim().is_empty())
                .or(defaults.statistics.title),
            items: filler.list(
                "statistics.items",
                statistics.items,
                defaults.statistics.items,
            ),
            buttons: filler.list(
                "statistics.buttons",
                statistics.buttons,
                defaults.statistics.buttons,
            ),
        },
        footer: Footer {
            logo: filler.text("footer.logo", footer.logo, defaults.footer.logo),
            links: filler.list("footer.links", footer.links, defaults.footer.links),
            copyright: filler.text(
                "footer.copyright",
                footer.copyright,
                defaults.footer.copyright,
            ),
        },
    };

    Validated {
        document,
        diagnostics: filler.diagnostics,
    }
}

/// Parse JSON into a partial document and validate it.
///
/// Each field is read on its own: a field of the wrong type falls back to
/// its default without affecting its neighbours, and unreadable list entries
/// are dropped. Text that is not a JSON object yields the defaults.
pub fn validate_json(text: &str, defaults: &ContentDocument) -> Validated {
    let root = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(root)) => root,
        Ok(other) => {
            let reason = format!("expected an object, found {}", json_kind(&other));
            return unreadable_document(reason, defaults);
        }
        Err(e) => return unreadable_document(e.to_string(), defaults),
    };

    let mut filler = Filler::default();
    let doc = filler.read_document(&root);
    complete(doc, defaults, filler)
}

fn unreadable_document(reason: String, defaults: &ContentDocument) -> Validated {
    let message = format!("Unreadable content document, using defaults: {}", reason);
    log::warn!("{}", message);
    Validated {
        document: defaults.clone(),
        diagnostics: vec![message],
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

type Fields = Map<String, Value>;

#[derive(Default)]
struct Filler {
    diagnostics: Vec<String>,
    /// Paths already reported as unreadable.
    reported: HashSet<String>,
}

impl Filler {
    fn read_document(&mut self, root: &Fields) -> PartialDocument {
        let meta = self.read_section(root, "meta");
        let header = self.read_section(root, "header");
        let hero = self.read_section(root, "hero");
        let features = self.read_section(root, "features");
        let statistics = self.read_section(root, "statistics");
        let footer = self.read_section(root, "footer");

        PartialDocument {
            meta: meta.map(|f| PartialMeta {
                title: self.read_text("meta", f, "title"),
            }),
            header: header.map(|f| PartialHeader {
                logo: self.read_text("header", f, "logo"),
                navigation: self.read_list("header", f, "navigation"),
                buttons: self.read_list("header", f, "buttons"),
            }),
            hero: hero.map(|f| PartialHero {
                title: self.read_text("hero", f, "title"),
                subtitle: self.read_text("hero", f, "subtitle"),
                description: self.read_text("hero", f, "description"),
                buttons: self.read_list("hero", f, "buttons"),
            }),
            features: features.map(|f| PartialFeatures {
                title: self.read_text("features", f, "title"),
                items: self.read_list("features", f, "items"),
                buttons: self.read_list("features", f, "buttons"),
            }),
            statistics: statistics.map(|f| PartialStatistics {
                title: self.read_text("statistics", f, "title"),
                items: self.read_list("statistics", f, "items"),
                buttons: self.read_list("statistics", f, "buttons"),
            }),
            footer: footer.map(|f| PartialFooter {
                logo: self.read_text("footer", f, "logo"),
                links: self.read_list("footer", f, "links"),
                copyright: self.read_text("footer", f, "copyright"),
            }),
        }
    }

    fn unreadable(&mut self, path: String, reason: impl std::fmt::Display) {
        self.note(format!("Unreadable field '{}', using default: {}", path, reason));
        self.reported.insert(path);
    }

    fn read_section<'v>(&mut self, root: &'v Fields, name: &str) -> Option<&'v Fields> {
        match root.get(name)? {
            Value::Object(fields) => Some(fields),
            Value::Null => None,
            other => {
                let reason = format!("expected an object, found {}", json_kind(other));
                self.note(format!("Unreadable section '{}', using defaults: {}", name, reason));
                self.reported.insert(name.to_string());
                None
            }
        }
    }

    fn read_text(&mut self, section: &str, fields: &Fields, key: &str) -> Option<String> {
        match fields.get(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Null => None,
            other => {
                let reason = format!("expected a string, found {}", json_kind(other));
                self.unreadable(format!("{}.{}", section, key), reason);
                None
            }
        }
    }

    fn read_list<T: DeserializeOwned>(
        &mut self,
        section: &str,
        fields: &Fields,
        key: &str,
    ) -> Option<Vec<T>> {
        let path = format!("{}.{}", section, key);
        let entries = match fields.get(key)? {
            Value::Array(entries) => entries,
            Value::Null => return None,
            other => {
                let reason = format!("expected an array, found {}", json_kind(other));
                self.unreadable(path, reason);
                return None;
            }
        };

        let mut items = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match T::deserialize(entry) {
                Ok(item) => items.push(item),
                Err(e) => self.note(format!("Dropped entry {} of '{}': {}", index, path, e)),
            }
        }

        if items.is_empty() && !entries.is_empty() {
            self.unreadable(path, "no readable entries");
            return None;
        }
        Some(items)
    }
}

impl Filler {
    fn note(&mut self, message: String) {
        log::warn!("{}", message);
        self.diagnostics.push(message);
    }

    fn section<T: Default>(&mut self, name: &str, section: Option<T>) -> T {
        section.unwrap_or_else(|| {
            if !self.reported.contains(name) {
                self.note(format!("Missing section '{}', using defaults", name));
            }
            T::default()
        })
    }

    fn text(&mut self, field: &str, value: Option<String>, default: String) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            Some(_) => {
                self.note(format!("Blank field '{}', using default", field));
                default
            }
            None => {
                self.missing(field);
                default
            }
        }
    }

    fn list<T>(&mut self, field: &str, value: Option<Vec<T>>, default: Vec<T>) -> Vec<T> {
        value.unwrap_or_else(|| {
            self.missing(field);
            default
        })
    }

    fn missing(&mut self, field: &str) {
        if !self.reported.contains(field) {
            self.note(format!("Missing field '{}', using default", field));
        }
    }
}
