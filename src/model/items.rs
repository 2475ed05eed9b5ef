//! Item types stored in grouped sequences.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub(crate) const DEFAULT_HREF: &str = "#";

fn default_href() -> String {
    DEFAULT_HREF.to_string()
}

/// A plain link (navigation entries, header buttons, footer links).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible text
    #[serde(default)]
    pub label: String,

    /// Link target
    #[serde(default = "default_href")]
    pub href: String,
}

impl Link {
    /// Create a new link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Visual weight of a call-to-action button.
///
/// Read case-insensitively. An unknown name falls back to primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
}

impl ButtonKind {
    /// Name as written in the sheet and in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonKind::Primary => "primary",
            ButtonKind::Secondary => "secondary",
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ButtonKind::Primary),
            "secondary" => Ok(ButtonKind::Secondary),
            other => Err(format!("unknown button type '{}'", other)),
        }
    }
}

impl<'de> Deserialize<'de> for ButtonKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or_else(|e| {
            log::warn!("{}, using primary", e);
            ButtonKind::Primary
        }))
    }
}

/// A call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    #[serde(default)]
    pub label: String,

    #[serde(default = "default_href")]
    pub href: String,

    /// Serialized as `type` to match the sheet column.
    #[serde(rename = "type", default)]
    pub kind: ButtonKind,
}

impl Button {
    /// Create a primary button.
    pub fn primary(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind: ButtonKind::Primary,
        }
    }

    /// Create a secondary button.
    pub fn secondary(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind: ButtonKind::Secondary,
        }
    }
}

/// One entry of the features grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,
}

impl FeatureItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One figure in the statistics band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    /// The headline figure ("35%", "24/7")
    #[serde(default)]
    pub number: String,

    /// Optional caption under the figure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Explanatory text
    #[serde(default)]
    pub label: String,
}

impl StatItem {
    /// Create a statistic without a subtitle.
    pub fn new(number: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            subtitle: None,
            label: label.into(),
        }
    }

    /// Attach a subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}
