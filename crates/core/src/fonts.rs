//! Google Fonts link generation from CSS font-family stacks.
//!
//! Slides take their fonts as plain CSS stacks (`"'Playfair Display', serif"`).
//! Only the first family of a stack is fetched; generic and system families
//! are assumed to be installed and produce no link.

use regex::Regex;
use std::sync::LazyLock;

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

/// Weights requested for every family so headings and body share one request.
const FONT_WEIGHTS: &str = "300;400;600;700;800";

/// Matches the first family in a stack, with or without quotes.
static PRIMARY_FAMILY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*(?:"([^"]*)"|'([^']*)'|([^,]*))"#).unwrap());

/// Runs of whitespace inside a family name.
static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Families that never need a stylesheet link.
const SYSTEM_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-sans-serif",
    "ui-serif",
    "ui-monospace",
    "-apple-system",
    "blinkmacsystemfont",
    "segoe ui",
    "arial",
    "helvetica",
    "helvetica neue",
    "georgia",
    "times",
    "times new roman",
    "verdana",
    "tahoma",
    "trebuchet ms",
    "courier new",
    "inherit",
    "initial",
];

/// Return the first family of a CSS font-family stack, quotes stripped.
///
/// Returns `None` for an empty stack.
pub fn primary_family(stack: &str) -> Option<String> {
    let caps = PRIMARY_FAMILY_REGEX.captures(stack)?;
    let raw = caps
        .get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))?
        .as_str();

    let family = WHITESPACE_REGEX.replace_all(raw.trim(), " ").to_string();
    if family.is_empty() {
        None
    } else {
        Some(family)
    }
}

/// Whether the family is generic or ships with common operating systems.
pub fn is_system_family(family: &str) -> bool {
    let lowered = family.to_lowercase();
    SYSTEM_FAMILIES.contains(&lowered.as_str())
}

/// Build the Google Fonts stylesheet URL for a stack's primary family.
///
/// Returns `None` when the stack is empty or its primary family is a system font.
pub fn google_fonts_href(stack: &str) -> Option<String> {
    let family = primary_family(stack)?;
    if is_system_family(&family) {
        return None;
    }

    Some(format!(
        "{}?family={}:wght@{}&display=swap",
        GOOGLE_FONTS_CSS,
        family.replace(' ', "+"),
        FONT_WEIGHTS
    ))
}

/// Build the `<link>` tags needed to load every web font among `stacks`.
///
/// Families are deduplicated in first-seen order. Returns an empty string
/// when no stack needs a web font.
pub fn font_links(stacks: &[&str]) -> String {
    let mut hrefs: Vec<String> = Vec::new();
    for stack in stacks {
        if let Some(href) = google_fonts_href(stack) {
            if !hrefs.contains(&href) {
                hrefs.push(href);
            }
        }
    }

    if hrefs.is_empty() {
        return String::new();
    }

    let mut links = String::from(
        "<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n    \
         <link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>",
    );
    for href in hrefs {
        links.push_str("\n    <link href=\"");
        links.push_str(&href);
        links.push_str("\" rel=\"stylesheet\">");
    }
    links
}
