//! Entity encoding for catalog text.
//!
//! Catalog text is stored with the five predefined XML entities escaped. Mnemonic
//! markers (`&File`) and inline rich text (`<html>...</html>`) are plain text once
//! decoded and are escaped again on write.

use std::borrow::Cow;

use quick_xml::escape::{escape, unescape};

/// Decode predefined entities and numeric character references.
pub fn decode(raw: &str) -> Result<Cow<'_, str>, String> {
    unescape(raw).map_err(|e| e.to_string())
}

/// Escape `&`, `<`, `>`, `'` and `"` the way `lupdate` writes them.
pub fn encode(text: &str) -> Cow<'_, str> {
    escape(text)
}

/// Decode the value of a `<byte value="..."/>` element.
///
/// `lupdate` writes control characters this way, with the value in hex (`x9`)
/// or decimal (`9`).
pub fn decode_byte_value(value: &str) -> Option<char> {
    let code = match value.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}
