//! Plain text outline of a content document.

use std::fmt::Write;

use crate::model::ContentDocument;

use super::render_copyright;

/// Render a human-readable outline, with `{year}` substituted.
pub fn to_outline(doc: &ContentDocument, year: i32) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "# {}", doc.meta.title);
    let _ = writeln!(out, "logo: {}", doc.header.logo);
    for link in doc.header.navigation.iter().chain(&doc.header.buttons) {
        let _ = writeln!(out, "  [{}]({})", link.label, link.href);
    }

    let _ = writeln!(out, "\n## {}", doc.hero.title);
    let _ = writeln!(out, "{}", doc.hero.subtitle);
    let _ = writeln!(out, "{}", doc.hero.description);
    for button in &doc.hero.buttons {
        let _ = writeln!(out, "  <{}> {} -> {}", button.kind, button.label, button.href);
    }

    let _ = writeln!(out, "\n## {}", doc.features.title);
    for item in &doc.features.items {
        let _ = writeln!(out, "- {}: {}", item.title, item.description);
    }
    for button in &doc.features.buttons {
        let _ = writeln!(out, "  <{}> {} -> {}", button.kind, button.label, button.href);
    }

    if let Some(title) = &doc.statistics.title {
        let _ = writeln!(out, "\n## {}", title);
    } else {
        out.push('\n');
    }
    for item in &doc.statistics.items {
        match &item.subtitle {
            Some(subtitle) => {
                let _ = writeln!(out, "- {} {}: {}", item.number, subtitle, item.label);
            }
            None => {
                let _ = writeln!(out, "- {}: {}", item.number, item.label);
            }
        }
    }
    for button in &doc.statistics.buttons {
        let _ = writeln!(out, "  <{}> {} -> {}", button.kind, button.label, button.href);
    }

    let _ = writeln!(out, "\n{}", doc.footer.logo);
    let links: Vec<&str> = doc.footer.links.iter().map(|l| l.label.as_str()).collect();
    let _ = writeln!(out, "{}", links.join(" | "));
    out.push_str(&render_copyright(&doc.footer.copyright, year));

    out.trim().to_string()
}
