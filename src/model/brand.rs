//! Compiled-in default content for each brand variant.

use super::{
    Button, ContentDocument, FeatureItem, Features, Footer, Header, Hero, Link, Meta, StatItem,
    Statistics,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Brand variant of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    /// Fan engagement platform
    #[default]
    Seyu,
    /// Lost and found service
    Bfound,
}

impl Brand {
    /// All known brands.
    pub const ALL: [Brand; 2] = [Brand::Seyu, Brand::Bfound];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Seyu => "seyu",
            Brand::Bfound => "bfound",
        }
    }

    /// Build a fresh copy of this brand's default document.
    pub fn default_content(&self) -> ContentDocument {
        match self {
            Brand::Seyu => seyu(),
            Brand::Bfound => bfound(),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seyu" => Ok(Brand::Seyu),
            "bfound" => Ok(Brand::Bfound),
            other => Err(format!("unknown brand '{}'", other)),
        }
    }
}

fn standard_footer_links() -> Vec<Link> {
    ["About", "Privacy", "Terms", "Contact"]
        .into_iter()
        .map(|label| Link::new(label, "#"))
        .collect()
}

fn seyu() -> ContentDocument {
    ContentDocument {
        meta: Meta {
            title: "Seyu - Attract Fans!".to_string(),
        },
        header: Header {
            logo: "/images/seyu_logo_horizontal_white.PNG".to_string(),
            navigation: Vec::new(),
            buttons: Vec::new(),
        },
        hero: Hero {
            title: "Lost the way to attract Fans?".to_string(),
            subtitle: "We will Help You Win Them Back".to_string(),
            description: "Our real-time fan engagement platform entertains, connects, and tracks \
                          your audience instantly \u{2014} so you never miss a moment or lose a fan again!"
                .to_string(),
            buttons: vec![
                Button::primary("Report Lost Fans!", "#"),
                Button::secondary("How we help you!", "#"),
            ],
        },
        features: Features {
            title: "Next-Level Fan Engagement".to_string(),
            items: vec![
                FeatureItem::new(
                    "Real-Time Stadium Moments",
                    "Bring fans closer with real-time, in-stadium experiences. Display their \
                     shared joy and support live on your digital surfaces.",
                ),
                FeatureItem::new(
                    "Secure Sponsor Exposure",
                    "Give sponsors guaranteed visibility. Every fan photo includes built-in, \
                     brand-safe presence across all digital displays.",
                ),
                FeatureItem::new(
                    "Stronger Fan & Brand Bonds",
                    "Deepen connections both ways \u{2014} with your fans and with sponsors \
                     \u{2014} through our smart, scalable engagement platform.",
                ),
            ],
            buttons: vec![
                Button::primary("I want Fan Feed!", "#"),
                Button::secondary("Cherish Connection!", "#"),
            ],
        },
        statistics: Statistics {
            title: Some("Proven Results That Matter".to_string()),
            items: vec![
                StatItem::new(
                    "35%",
                    "Real-time interactions on stadium screens drive deeper measurable \
                     audience participation",
                )
                .with_subtitle("Boost in Live Fan Engagement"),
                StatItem::new(
                    "360\u{b0}",
                    "Turn-key solution for ATL and BTL campaigns \u{2014} no extra work \
                     maximum impact",
                )
                .with_subtitle("Fully Automated Brand Activation"),
                StatItem::new(
                    "100%",
                    "Every image is reviewed and brand-safe ready for instant on-screen display",
                )
                .with_subtitle("Curated Fan-Generated Content"),
            ],
            buttons: vec![
                Button::primary("See Results in Action", "#connect"),
                Button::secondary("Book a Demo", "#connect"),
            ],
        },
        footer: Footer {
            logo: "Seyu".to_string(),
            links: standard_footer_links(),
            copyright: "\u{a9} {year} Seyu. All rights reserved.".to_string(),
        },
    }
}

fn bfound() -> ContentDocument {
    ContentDocument {
        meta: Meta {
            title: "BFOUND - Lost & Found".to_string(),
        },
        header: Header {
            logo: "BFOUND".to_string(),
            navigation: vec![Link::new("Services", "#services"), Link::new("Log in", "#")],
            buttons: vec![Link::new("Get Started", "#")],
        },
        hero: Hero {
            title: "Lost Something?".to_string(),
            subtitle: "We'll Help You Find It".to_string(),
            description: "Our advanced lost and found system helps you track and recover your \
                          lost items quickly and efficiently."
                .to_string(),
            buttons: vec![
                Button::primary("Report Lost Item", "#"),
                Button::secondary("How It Works", "#"),
            ],
        },
        features: Features {
            title: "Advanced Lost & Found Features".to_string(),
            items: vec![
                FeatureItem::new(
                    "Real-Time Tracking",
                    "Track the status of your lost items in real-time with our advanced \
                     monitoring system.",
                ),
                FeatureItem::new(
                    "Secure Platform",
                    "Your information is protected with enterprise-grade security and encryption.",
                ),
                FeatureItem::new(
                    "Fast Recovery",
                    "Our efficient system helps you recover your lost items as quickly as possible.",
                ),
            ],
            buttons: Vec::new(),
        },
        statistics: Statistics {
            title: None,
            items: vec![
                StatItem::new("95%", "Recovery Rate"),
                StatItem::new("24/7", "Support"),
                StatItem::new("100%", "Secure"),
            ],
            buttons: Vec::new(),
        },
        footer: Footer {
            logo: "BFOUND".to_string(),
            links: standard_footer_links(),
            copyright: "\u{a9} {year} BFOUND. All rights reserved.".to_string(),
        },
    }
}
