//! Text helpers shared by rules: placeholders, accelerators and rich text.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

/// `%1`..`%99`, `%L1`, `%n` and `%Ln`.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(L?)([1-9][0-9]?|n)").unwrap());

/// Opening tags Qt treats as rich text.
static RICH_TEXT_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<(html|qt|body|b|i|u|s|br|p|a|span|div|img|table|tr|td|th|ul|ol|li|h[1-6]|font|nobr|tt|pre|code|em|strong|sub|sup|center|hr)\b[^>]*/?>",
    )
    .unwrap()
});

/// Placeholders used in `text`, normalized so `%L1` and `%1` compare equal.
///
/// # Examples
///
/// ```
/// use tsglot::utils::placeholders;
///
/// let found: Vec<String> = placeholders("Delete %1 of %L2 (%n)?").into_iter().collect();
/// assert_eq!(found, vec!["%1", "%2", "%n"]);
/// ```
pub fn placeholders(text: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let bytes = text.as_bytes();
    for caps in PLACEHOLDER_REGEX.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        // `%%1` is an escaped percent sign followed by text.
        if whole.start() > 0 && bytes[whole.start() - 1] == b'%' {
            continue;
        }
        if let Some(arg) = caps.get(2) {
            found.insert(format!("%{}", arg.as_str()));
        }
    }
    found
}

/// Compare placeholders between a source and one translated form.
///
/// Returns `(missing, extra)`. When `numerus` is set, a form may drop `%n`
/// (e.g. "one file" for the singular form).
pub fn placeholder_diff(source: &str, translation: &str, numerus: bool) -> (Vec<String>, Vec<String>) {
    let expected = placeholders(source);
    let actual = placeholders(translation);

    let missing = expected
        .difference(&actual)
        .filter(|p| !(numerus && p.as_str() == "%n"))
        .cloned()
        .collect();
    let extra = actual.difference(&expected).cloned().collect();
    (missing, extra)
}

/// True when `text` contains a mnemonic marker (`&File`), ignoring `&&` escapes.
///
/// # Examples
///
/// ```
/// use tsglot::utils::has_accelerator;
///
/// assert!(has_accelerator("&File"));
/// assert!(has_accelerator("Tệp (&F)"));
/// assert!(!has_accelerator("Tom && Jerry"));
/// assert!(!has_accelerator("Drag & drop"));
/// ```
pub fn has_accelerator(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        match chars.peek() {
            Some('&') => {
                chars.next();
            }
            Some(next) if !next.is_whitespace() => return true,
            _ => {}
        }
    }
    false
}

/// Heuristic for strings rendered as rich text (`<html>`, `<b>`, ...).
pub fn is_rich_text(text: &str) -> bool {
    RICH_TEXT_TAG_REGEX.is_match(text)
}

/// Checks if the text contains at least one Unicode alphabetic character.
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}
