//! Numerus (plural form) rules per target language.
//!
//! A numerus message carries one translated string per plural form of the
//! target language. These rules decide how many forms a language has and which
//! form a given count selects, following the tables Qt Linguist ships.

/// Plural rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form for every count (vi, ja, ko, zh, ...).
    Single,
    /// `n == 1` and everything else (en, de, it, ...).
    English,
    /// `n <= 1` and everything else (fr, pt_BR, ...).
    French,
    /// East Slavic and Serbo-Croatian: one / few / many (uk, ru, be, sr, hr, bs).
    Slavic,
    /// One / few (2-4) / other (cs, sk).
    Czech,
    /// One / few / many (pl).
    Polish,
    /// One / few / other (lt).
    Lithuanian,
    /// One / other / zero (lv).
    Latvian,
    /// One / few / other (ro).
    Romanian,
    /// One / two / few / other (sl).
    Slovenian,
    /// Zero / one / two / few / many / other (ar).
    Arabic,
}

const SINGLE: &[&str] = &[
    "bo", "dz", "id", "ja", "jv", "ka", "km", "kn", "ko", "lo", "ms", "my", "th", "tr", "vi",
    "yo", "zh",
];
const ENGLISH: &[&str] = &[
    "af", "bg", "bn", "ca", "da", "de", "el", "en", "eo", "es", "et", "eu", "fa", "fi", "fo",
    "fy", "gl", "gu", "he", "hi", "hu", "is", "it", "kk", "ky", "la", "lb", "ml", "mn", "mr",
    "nb", "ne", "nl", "nn", "no", "pa", "ps", "pt", "sq", "sv", "sw", "ta", "te", "ur", "uz",
];
const FRENCH: &[&str] = &["ak", "am", "br", "fil", "fr", "hy", "ln", "mg", "oc", "ti", "tl", "wa"];
const SLAVIC: &[&str] = &["be", "bs", "hr", "ru", "sh", "sr", "uk"];

/// Split a locale tag into lowercase language and region.
///
/// Accepts `vi_VN`, `uk-UA`, `sr@latin`, `zh-Hant-TW`, `pt_BR.UTF-8`.
fn split_locale(tag: &str) -> (String, Option<String>) {
    let tag = tag.split(['.', '@']).next().unwrap_or(tag);
    let mut parts = tag.split(['_', '-']);
    let language = parts.next().unwrap_or("").to_ascii_lowercase();
    // The region is the first two-letter (or three-digit) subtag after the language.
    let region = parts
        .find(|p| {
            (p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()))
                || (p.len() == 3 && p.chars().all(|c| c.is_ascii_digit()))
        })
        .map(|p| p.to_ascii_uppercase());
    (language, region)
}

/// Look up the plural rule for a locale tag. `None` when the language is unknown.
pub fn plural_rule(locale: &str) -> Option<PluralRule> {
    let (language, region) = split_locale(locale.trim());
    let language = language.as_str();

    if language == "pt" && region.as_deref() == Some("BR") {
        return Some(PluralRule::French);
    }

    let rule = if SINGLE.contains(&language) {
        PluralRule::Single
    } else if ENGLISH.contains(&language) {
        PluralRule::English
    } else if FRENCH.contains(&language) {
        PluralRule::French
    } else if SLAVIC.contains(&language) {
        PluralRule::Slavic
    } else {
        match language {
            "cs" | "sk" => PluralRule::Czech,
            "pl" => PluralRule::Polish,
            "lt" => PluralRule::Lithuanian,
            "lv" => PluralRule::Latvian,
            "ro" | "mo" => PluralRule::Romanian,
            "sl" => PluralRule::Slovenian,
            "ar" => PluralRule::Arabic,
            _ => return None,
        }
    };
    Some(rule)
}

impl PluralRule {
    /// Number of numerus forms a translation must provide.
    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::Single => 1,
            PluralRule::English | PluralRule::French => 2,
            PluralRule::Slavic
            | PluralRule::Czech
            | PluralRule::Polish
            | PluralRule::Lithuanian
            | PluralRule::Latvian
            | PluralRule::Romanian => 3,
            PluralRule::Slovenian => 4,
            PluralRule::Arabic => 6,
        }
    }

    /// Index of the numerus form selected by `n`.
    pub fn form_index(&self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let n10 = n % 10;
        let n100 = n % 100;
        match self {
            PluralRule::Single => 0,
            PluralRule::English => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::Slavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Lithuanian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n10 >= 2 && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Latvian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n != 0 {
                    1
                } else {
                    2
                }
            }
            PluralRule::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..=19).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            PluralRule::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&n100) => 3,
                _ if n100 >= 11 => 4,
                _ => 5,
            },
        }
    }
}
