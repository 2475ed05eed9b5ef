//! Loader configuration file support.
//!
//! Reads the list of sheets, the brand and the timeouts from TOML:
//!
//! ```toml
//! brand = "seyu"
//! timeout_secs = 10
//! refresh_secs = 3600
//!
//! [combined]
//! url = "https://docs.google.com/spreadsheets/d/e/.../pub?output=csv"
//!
//! [[sections]]
//! section = "hero"
//! url = "https://docs.google.com/spreadsheets/d/e/.../pub?gid=1&output=csv"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::loader::LoaderOptions;
use crate::model::Brand;
use crate::source::SheetSource;

/// Loader configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Brand whose defaults the sheet is applied on
    #[serde(default)]
    pub brand: Option<String>,

    /// Per-source timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Skip malformed rows instead of discarding a sheet
    #[serde(default)]
    pub lenient: bool,

    /// Refresh interval for `watch`, in seconds
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,

    /// Combined sheet; the fallback when section sheets yield nothing
    #[serde(default)]
    pub combined: Option<SheetSource>,

    /// Per-section sheets, fetched concurrently
    #[serde(default)]
    pub sections: Vec<SheetSource>,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_refresh_secs() -> u64 {
    3600
}

impl LoaderConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: LoaderConfig = toml::from_str(content)?;
        config.brand()?;
        for source in config.sections.iter().chain(&config.combined) {
            if source.locator.trim().is_empty() {
                return Err(Error::Config("source with empty url".to_string()));
            }
        }
        Ok(config)
    }

    /// The configured brand, default when unset.
    pub fn brand(&self) -> Result<Brand> {
        match &self.brand {
            Some(name) => name.parse().map_err(Error::Config),
            None => Ok(Brand::default()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    /// Build loader options from this configuration.
    pub fn into_options(self) -> Result<LoaderOptions> {
        let mut options = LoaderOptions::new()
            .with_brand(self.brand()?)
            .with_timeout(self.timeout());
        if self.lenient {
            options = options.lenient();
        }
        for source in self.sections {
            options = options.with_source(source);
        }
        if let Some(combined) = self.combined {
            options = options.with_fallback(combined);
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ErrorMode;

    const CONFIG: &str = r#"
brand = "bfound"
timeout_secs = 5
lenient = true

[combined]
url = "https://example.com/all.csv"

[[sections]]
section = "hero"
url = "https://example.com/hero.csv"

[[sections]]
section = "footer"
url = "footer.csv"
"#;

    #[test]
    fn test_parse_config() {
        let config = LoaderConfig::from_toml(CONFIG).unwrap();
        assert_eq!(config.brand().unwrap(), Brand::Bfound);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.refresh_interval(), Duration::from_secs(3600));
        assert_eq!(config.sections.len(), 2);
        assert_eq!(config.sections[0], SheetSource::section("hero", "https://example.com/hero.csv"));
    }

    #[test]
    fn test_into_options() {
        let options = LoaderConfig::from_toml(CONFIG).unwrap().into_options().unwrap();
        assert_eq!(options.sources.len(), 2);
        assert_eq!(
            options.fallback,
            Some(SheetSource::combined("https://example.com/all.csv"))
        );
        assert_eq!(options.defaults, Brand::Bfound.default_content());
        assert_eq!(options.parse.error_mode, ErrorMode::Lenient);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LoaderConfig::from_toml("").unwrap();
        assert_eq!(config.brand().unwrap(), Brand::Seyu);
        assert_eq!(config.timeout_secs, 10);
        assert!(config.sections.is_empty());
    }

    #[test]
    fn test_unknown_brand() {
        let err = LoaderConfig::from_toml("brand = \"acme\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(LoaderConfig::from_toml("brnad = \"seyu\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheetcopy.toml");
        std::fs::write(&path, CONFIG).unwrap();
        let config = LoaderConfig::from_file(&path).unwrap();
        assert!(config.lenient);

        assert!(LoaderConfig::from_file(dir.path().join("missing.toml")).is_err());
    }
}
