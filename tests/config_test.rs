//! Integration tests for configuration files.

use std::fs;
use std::time::Duration;

use sheetcopy::{Brand, ContentLoader, LoaderConfig, Sheetcopy};

#[tokio::test]
async fn test_config_with_local_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let hero = dir.path().join("hero.csv");
    let footer = dir.path().join("footer.csv");
    fs::write(&hero, "key,title\ntitle,Configured Hero\n").unwrap();
    fs::write(&footer, "key,label,href\nlink,Imprint,/imprint\n").unwrap();

    let config_path = dir.path().join("sheetcopy.toml");
    let config_text = format!(
        "brand = \"bfound\"\ntimeout_secs = 2\n\n\
         [[sections]]\nsection = \"hero\"\nurl = {:?}\n\n\
         [[sections]]\nsection = \"footer\"\nurl = {:?}\n",
        hero.to_string_lossy(),
        footer.to_string_lossy()
    );
    fs::write(&config_path, config_text).unwrap();

    let config = LoaderConfig::from_file(&config_path).unwrap();
    assert_eq!(config.timeout(), Duration::from_secs(2));

    let options = config.into_options().unwrap();
    let (doc, report) = ContentLoader::new(options).load_with_report().await;
    let defaults = Brand::Bfound.default_content();

    assert_eq!(doc.hero.title, "Configured Hero");
    assert_eq!(doc.hero.subtitle, defaults.hero.subtitle);
    assert_eq!(doc.footer.links.len(), 1);
    assert_eq!(doc.footer.links[0].href, "/imprint");
    assert_eq!(report.failed_sources(), 0);
}

#[tokio::test]
async fn test_config_combined_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let all = dir.path().join("all.csv");
    fs::write(&all, "section,key,value\nmeta,title,From Combined\n").unwrap();

    let config_text = format!(
        "[combined]\nurl = {:?}\n\n\
         [[sections]]\nsection = \"hero\"\nurl = {:?}\n\n\
         [[sections]]\nsection = \"footer\"\nurl = {:?}\n",
        all.to_string_lossy(),
        dir.path().join("missing-hero.csv").to_string_lossy(),
        dir.path().join("missing-footer.csv").to_string_lossy()
    );
    let config = LoaderConfig::from_toml(&config_text).unwrap();

    let (doc, report) = Sheetcopy::from_config(config)
        .unwrap()
        .load_with_report()
        .await;
    assert_eq!(doc.meta.title, "From Combined");
    assert!(report.used_fallback);
    assert_eq!(report.failed_sources(), 2);
}

#[test]
fn test_invalid_toml() {
    assert!(LoaderConfig::from_toml("brand = ").is_err());
    assert!(LoaderConfig::from_toml("[[sections]]\nsection = \"hero\"\nurl = \"\"\n").is_err());
}
