//! Integration tests for document validation.

use sheetcopy::render::{render_copyright, to_json, JsonFormat};
use sheetcopy::validate::{validate, validate_json, validate_with_diagnostics, PartialDocument};
use sheetcopy::{apply_records, Brand, Button, RawRecord};

#[test]
fn test_loaded_document_is_complete() {
    let defaults = Brand::Bfound.default_content();
    let records = vec![
        RawRecord::new("hero", "title").with("title", "Lost your wallet?"),
        RawRecord::new("header", "navigation_item").with("label", "Home"),
    ];
    let loaded = apply_records(&defaults, &records);

    let validated = validate_with_diagnostics(loaded.clone().into(), &defaults);
    assert!(validated.is_clean());
    assert_eq!(validated.document, loaded);
}

#[test]
fn test_validate_is_idempotent() {
    let defaults = Brand::Seyu.default_content();
    let partial: PartialDocument = serde_json::from_str(
        r#"{
            "meta": {},
            "hero": {"title": "Hello", "subtitle": "  "},
            "features": {"items": [{"title": "Only", "description": "one"}]},
            "statistics": {"title": ""}
        }"#,
    )
    .unwrap();

    let once = validate(partial, &defaults);
    let twice = validate(once.clone().into(), &defaults);
    assert_eq!(once, twice);
    assert_eq!(once.hero.title, "Hello");
    assert_eq!(once.hero.subtitle, defaults.hero.subtitle);
    assert_eq!(once.features.items.len(), 1);
    assert_eq!(once.statistics.title, defaults.statistics.title);
}

#[test]
fn test_json_round_trip_through_validation() {
    let doc = Brand::Bfound.default_content();
    let json = to_json(&doc, JsonFormat::Compact).unwrap();
    let validated = validate_json(&json, &doc);
    assert!(validated.is_clean());
    assert_eq!(validated.document, doc);
}

#[test]
fn test_missing_optional_fields_in_json() {
    let defaults = Brand::Seyu.default_content();
    let json = r#"{
        "header": {"logo": "/l.svg", "navigation": [{"label": "Home"}]},
        "statistics": {"items": [{"number": "1", "label": "one"}]}
    }"#;
    let validated = validate_json(json, &defaults);
    let doc = validated.document;

    assert_eq!(doc.header.navigation[0].href, "#");
    assert_eq!(doc.header.buttons, defaults.header.buttons);
    assert_eq!(doc.statistics.items[0].subtitle, None);
    assert_eq!(doc.statistics.buttons, defaults.statistics.buttons);
    assert!(validated
        .diagnostics
        .contains(&"Missing section 'footer', using defaults".to_string()));
}

#[test]
fn test_wrong_type_only_replaces_that_field() {
    let defaults = Brand::Seyu.default_content();
    let json = r#"{
        "meta": {"title": "Kept"},
        "hero": {
            "title": 42,
            "subtitle": "Mine",
            "buttons": [{"label": "Go", "type": "Primary"}, {"label": 7}]
        }
    }"#;
    let validated = validate_json(json, &defaults);
    let doc = &validated.document;

    assert_eq!(doc.meta.title, "Kept");
    assert_eq!(doc.hero.title, defaults.hero.title);
    assert_eq!(doc.hero.subtitle, "Mine");
    assert_eq!(doc.hero.buttons, vec![Button::primary("Go", "#")]);
    assert_eq!(doc.footer, defaults.footer);
    assert_eq!(
        validated
            .diagnostics
            .iter()
            .filter(|d| d.contains("'hero.title'"))
            .count(),
        1
    );
}

#[test]
fn test_copyright_rendering() {
    let doc = Brand::Seyu.default_content();
    let rendered = render_copyright(&doc.footer.copyright, 2031);
    assert!(rendered.contains("2031"));
    assert!(!rendered.contains("{year}"));
    assert!(doc.footer.copyright.contains("{year}"));
}
