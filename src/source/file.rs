//! Local file fetcher.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::{SourceFetcher, FILE_SCHEME};

/// Reads sheets from `file://` URLs or plain paths.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    _private: (),
}

impl FileFetcher {
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn resolve(locator: &str) -> Result<PathBuf> {
        let locator = locator.trim();
        if locator.to_ascii_lowercase().starts_with("file:") {
            let url = url::Url::parse(locator)
                .map_err(|e| Error::Other(format!("Invalid file URL '{}': {}", locator, e)))?;
            return url
                .to_file_path()
                .map_err(|_| Error::Other(format!("Not a local file URL: {}", locator)));
        }
        Ok(PathBuf::from(locator))
    }
}

#[async_trait]
impl SourceFetcher for FileFetcher {
    fn supported_schemes(&self) -> &[&str] {
        &[FILE_SCHEME]
    }

    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self, locator: &str) -> Result<String> {
        let path = Self::resolve(locator)?;
        log::debug!("Reading sheet from {}", path.display());
        Ok(tokio::fs::read_to_string(&path).await?)
    }
}
